//! Two-pass STFT spectral-subtraction denoiser.
//!
//! Pass 1 averages the magnitude spectra of the leading frames into a noise
//! template (the UI is expected to start recording before the user speaks,
//! so the opening ~230ms at 44.1kHz captures room noise — this module
//! assumes but does not verify that). Pass 2 subtracts a scaled copy of
//! that template from every frame's magnitude, keeps the original phase,
//! and reconstructs the signal via weighted overlap-add. A final pass peak
//! normalizes the result.
//!
//! The routine is total: every finite input, however degenerate (empty,
//! silent, shorter than a frame), has a defined output (see `denoise`'s
//! doc comment). It never returns a `Result`.

use crate::dsp::fft::{fft, ifft, Complex64};
use crate::dsp::window::{apply_window, extract_frame, hann_window, peak_normalize, to_complex};

/// Tunable constants for the denoise pipeline. `hop_size()` is derived from
/// `frame_size` rather than stored independently: the synthesis-window
/// normalization in pass 3 assumes exactly 50% overlap, and exposing hop as
/// an independent field would let a caller break the Hann COLA property
/// without realizing it (see spec Design Notes on hop/frame coupling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenoiseConfig {
    /// STFT frame length in samples. Must be a power of two.
    pub frame_size: usize,
    /// Count of leading frames averaged into the noise template.
    pub noise_frames: usize,
    /// Minimum fraction of a bin's own magnitude retained after
    /// subtraction, to suppress musical-noise artifacts.
    pub spectral_floor: f64,
    /// Scalar applied to the noise template before subtraction.
    pub over_subtract: f64,
    /// Target peak amplitude after final normalization.
    pub peak_target: f64,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            noise_frames: 10,
            spectral_floor: 0.02,
            over_subtract: 2.0,
            peak_target: 0.95,
        }
    }
}

impl DenoiseConfig {
    /// Hop between consecutive frame starts: half the frame size, the only
    /// value compatible with Hann-window constant-overlap-add reconstruction.
    pub fn hop_size(&self) -> usize {
        self.frame_size / 2
    }
}

/// Denoises `samples` (mono PCM, nominally in `[-1, 1]`) using
/// `cfg`. `sample_rate` is carried only for logging — it does not
/// influence computation, since every constant in `cfg` is expressed in
/// samples/frames rather than Hz or seconds.
///
/// - Empty input returns an empty sequence.
/// - Input shorter than `cfg.frame_size` is right-padded with zeros to
///   exactly `cfg.frame_size`; the returned buffer has that padded length.
/// - Otherwise the output length equals the input length.
/// - All-zero input returns all zeros (silence is never amplified).
///
/// This function never signals an error.
pub fn denoise(samples: &[f64], sample_rate: u32, cfg: &DenoiseConfig) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let frame_size = cfg.frame_size;
    let hop_size = cfg.hop_size();
    debug_assert!(frame_size.is_power_of_two());
    debug_assert_eq!(hop_size * 2, frame_size);

    let padded: std::borrow::Cow<[f64]> = if samples.len() < frame_size {
        let mut v = samples.to_vec();
        v.resize(frame_size, 0.0);
        std::borrow::Cow::Owned(v)
    } else {
        std::borrow::Cow::Borrowed(samples)
    };
    let n = padded.len();

    let analysis_window = hann_window(frame_size);
    let synthesis_window = hann_window(frame_size);

    let total_frames = (n - frame_size) / hop_size + 1;

    log::debug!(
        "denoise: sample_rate={sample_rate} n={n} frame_size={frame_size} hop_size={hop_size} total_frames={total_frames}"
    );

    let noise_mag = estimate_noise_profile(&padded, &analysis_window, cfg, total_frames);

    let mut output = vec![0.0f64; n];
    let mut window_sum = vec![0.0f64; n];

    for fi in 0..total_frames {
        let start = fi * hop_size;
        let mut frame = extract_frame(&padded, start, frame_size);
        apply_window(&mut frame, &analysis_window);

        let mut spectrum = fft(&to_complex(&frame));
        subtract_noise(&mut spectrum, &noise_mag, cfg);

        let cleaned = ifft(&spectrum);

        let end = (start + frame_size).min(n);
        for j in 0..(end - start) {
            let w = synthesis_window[j];
            output[start + j] += cleaned[j].re * w;
            window_sum[start + j] += w * w;
        }
    }

    for i in 0..n {
        if window_sum[i] > 1e-8 {
            output[i] /= window_sum[i];
        }
    }

    peak_normalize(&mut output, cfg.peak_target);

    log::debug!(
        "denoise: finished, peak={:.4}",
        output.iter().fold(0.0f64, |a, &v| a.max(v.abs()))
    );

    output
}

/// `denoise` with `DenoiseConfig::default()`.
pub fn denoise_default(samples: &[f64], sample_rate: u32) -> Vec<f64> {
    denoise(samples, sample_rate, &DenoiseConfig::default())
}

/// Pass 1: arithmetic mean of the magnitude spectra of the first
/// `min(cfg.noise_frames, total_frames)` frames.
fn estimate_noise_profile(
    padded: &[f64],
    window: &[f64],
    cfg: &DenoiseConfig,
    total_frames: usize,
) -> Vec<f64> {
    let frame_size = cfg.frame_size;
    let hop_size = cfg.hop_size();
    let noise_frames = cfg.noise_frames.min(total_frames);

    let mut acc = vec![0.0f64; frame_size];
    for fi in 0..noise_frames {
        let start = fi * hop_size;
        let mut frame = extract_frame(padded, start, frame_size);
        apply_window(&mut frame, window);
        let spectrum = fft(&to_complex(&frame));
        for k in 0..frame_size {
            acc[k] += spectrum[k].norm();
        }
    }

    let noise_energy: f64 = if noise_frames > 0 {
        let divisor = noise_frames as f64;
        for v in acc.iter_mut() {
            *v /= divisor;
        }
        acc.iter().sum()
    } else {
        0.0
    };

    log::trace!("noise profile: frames={noise_frames} total_energy={noise_energy:.6}");
    acc
}

/// Pass 2, per-bin: `cleanMag = max(mag - overSubtract*noiseMag, floor*mag)`,
/// original phase preserved.
fn subtract_noise(spectrum: &mut [Complex64], noise_mag: &[f64], cfg: &DenoiseConfig) {
    for (bin, &noise) in spectrum.iter_mut().zip(noise_mag.iter()) {
        let mag = bin.norm();
        let phase = bin.arg();
        let subtracted = mag - cfg.over_subtract * noise;
        let floor = cfg.spectral_floor * mag;
        let clean_mag = subtracted.max(floor);
        *bin = Complex64::from_polar(clean_mag, phase);
    }
}
