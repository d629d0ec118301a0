//! Window, framing, and small numeric utilities shared by the denoise
//! pipeline.

use crate::dsp::fft::Complex64;

/// Hann window of length `n`: `w[i] = 0.5 * (1 - cos(2*pi*i/(n-1)))`.
/// `w[0] == w[n-1] == 0`. For `n <= 1`, returns a single `1.0`.
pub fn hann_window(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / denom).cos()))
        .collect()
}

/// Extracts `src[start .. min(start+size, src.len())]` into a zero-padded
/// buffer of length `size`.
pub fn extract_frame(src: &[f64], start: usize, size: usize) -> Vec<f64> {
    let mut frame = vec![0.0; size];
    if start >= src.len() {
        return frame;
    }
    let end = (start + size).min(src.len());
    frame[..end - start].copy_from_slice(&src[start..end]);
    frame
}

/// Elementwise `frame[i] *= window[i]`, in place.
pub fn apply_window(frame: &mut [f64], window: &[f64]) {
    for (s, w) in frame.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Promotes a real frame to a complex spectrum input (imaginary part zero).
pub fn to_complex(frame: &[f64]) -> Vec<Complex64> {
    frame.iter().map(|&s| Complex64::new(s, 0.0)).collect()
}

/// Scales `samples` in place so `max |samples[i]| == target`. Buffers whose
/// peak is below `1e-10` are left unchanged — silence stays silence, it is
/// never amplified.
pub fn peak_normalize(samples: &mut [f64], target: f64) {
    let peak = samples.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));
    if peak < 1e-10 {
        return;
    }
    let gain = target / peak;
    for s in samples.iter_mut() {
        *s *= gain;
    }
}

/// Root-mean-square of `x`; `0.0` for an empty slice.
pub fn rms(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = x.iter().map(|&s| s * s).sum();
    (sum_sq / x.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hann_edges_are_zero() {
        let w = hann_window(2048);
        assert_eq!(w.len(), 2048);
        assert!(w[0].abs() < 1e-12);
        assert!(w[2047].abs() < 1e-12);
        let mid = w[1024];
        assert!(mid > 0.99, "expected near-unity gain at window center, got {mid}");
    }

    #[test]
    fn hann_degenerate_lengths() {
        assert_eq!(hann_window(0), Vec::<f64>::new());
        assert_eq!(hann_window(1), vec![1.0]);
    }

    #[test]
    fn extract_frame_pads_with_zero() {
        let src = [1.0, 2.0, 3.0];
        let frame = extract_frame(&src, 1, 4);
        assert_eq!(frame, vec![2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn extract_frame_past_end_is_all_zero() {
        let src = [1.0, 2.0, 3.0];
        let frame = extract_frame(&src, 10, 4);
        assert_eq!(frame, vec![0.0; 4]);
    }

    #[test]
    fn peak_normalize_hits_target() {
        let mut s = vec![0.1, -0.4, 0.2, -0.05];
        peak_normalize(&mut s, 0.95);
        let peak = s.iter().fold(0.0f64, |a, &v| a.max(v.abs()));
        assert!((peak - 0.95).abs() < 1e-9);
    }

    #[test]
    fn peak_normalize_preserves_silence() {
        let mut s = vec![0.0; 16];
        peak_normalize(&mut s, 0.95);
        assert!(s.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rms_of_empty_is_zero() {
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn rms_of_constant_signal() {
        let x = vec![0.5; 100];
        assert!((rms(&x) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn cola_sum_of_hann_squared_varies_with_phase_at_50pct_hop() {
        // The literal symmetric Hann (w[i] = 0.5*(1-cos(2*pi*i/(N-1)))) is
        // *not* exactly COLA-constant at 50% hop: that property holds for
        // the periodic variant (denominator N), not this one. Sampling the
        // overlap sum at several phases within one hop period shows it
        // swinging between roughly 0.5 and 1.0 rather than sitting at a
        // fixed value.
        //
        // `denoiser::denoise` does not rely on this sum being constant: pass
        // 3 divides each output sample by the *actual* accumulated
        // `window_sum` at that index, not by a theoretical constant, so the
        // reconstruction is exact regardless of this window's phase
        // dependence.
        let frame_size = 2048usize;
        let hop = frame_size / 2;
        let w = hann_window(frame_size);
        let w_sq: Vec<f64> = w.iter().map(|v| v * v).collect();

        let overlap_sum = |probe: usize| -> f64 {
            let mut total = 0.0;
            let mut start = probe.saturating_sub(frame_size * 2);
            start -= start % hop;
            while start <= probe {
                if probe >= start && probe < start + frame_size {
                    total += w_sq[probe - start];
                }
                start += hop;
            }
            total
        };

        let base = frame_size * 4;
        let sums: Vec<f64> = (0..hop).step_by(hop / 8).map(|phase| overlap_sum(base + phase)).collect();

        let min = sums.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sums.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(
            max - min > 1e-3,
            "expected the overlap sum to vary across phase, got min={min} max={max}"
        );
        assert!(
            min > 0.4 && max < 1.1,
            "overlap sum out of expected range: min={min} max={max}"
        );
    }
}
