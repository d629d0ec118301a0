//! 16-bit PCM WAV boundary format: RIFF/WAVE container, `fmt `/`data`
//! chunks, little-endian int16 samples. This is plumbing
//! around the DSP core, not the core itself — built on `hound`, which
//! already handles RIFF chunk parsing, word-alignment padding, and
//! truncated-`data`-chunk tolerance.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::WavError;

/// Reads a WAV file, mixes stereo to mono by averaging channels, and
/// normalizes samples to `[-1, 1]` (`int16 / 32768.0`). Returns the sample
/// buffer and the file's sample rate.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, u32), WavError> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|source| WavError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(WavError::UnsupportedFormat {
            path: path.to_path_buf(),
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
        });
    }
    if spec.channels != 1 && spec.channels != 2 {
        return Err(WavError::UnsupportedChannels {
            path: path.to_path_buf(),
            channels: spec.channels,
        });
    }

    let channels = spec.channels as usize;
    let mut samples = Vec::new();
    let mut frame = [0i16; 2];
    let mut filled = 0usize;

    for sample in reader.samples::<i16>() {
        let sample = sample.map_err(|source| WavError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        frame[filled] = sample;
        filled += 1;
        if filled == channels {
            let mixed = if channels == 1 {
                frame[0] as f64
            } else {
                (frame[0] as f64 + frame[1] as f64) / 2.0
            };
            samples.push(mixed / 32768.0);
            filled = 0;
        }
    }
    // A truncated final frame (fewer samples than `channels`) is tolerated
    // by simply dropping the dangling partial frame.

    Ok((samples, spec.sample_rate))
}

/// Writes `samples` as mono, 16-bit PCM at `sample_rate`. Each sample is
/// clamped to `[-1, 1]` then rounded: `round(s * 32767)` for `s >= 0`,
/// `round(s * 32768)` for `s < 0`.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<(), WavError> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|source| WavError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    for &s in samples {
        let clamped = s.clamp(-1.0, 1.0);
        let scaled = if clamped >= 0.0 {
            clamped * 32767.0
        } else {
            clamped * 32768.0
        };
        let quantized = scaled.round() as i32;
        let sample = quantized.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        writer.write_sample(sample).map_err(WavError::Write)?;
    }

    writer.finalize().map_err(WavError::Write)
}
