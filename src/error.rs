//! Boundary error taxonomy. The DSP core in [`crate::dsp`] never returns a
//! `Result` — it is total by construction (see its module docs). Errors
//! only arise at the WAV I/O boundary, where the input bytes themselves can
//! be malformed.

use std::path::PathBuf;

/// Errors surfaced while reading or writing the 16-bit PCM WAV boundary
/// format described in the external interface contract.
#[derive(Debug, thiserror::Error)]
pub enum WavError {
    #[error("failed to open WAV file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("failed to create WAV file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("unsupported audio format in '{path}': expected 16-bit PCM, found {bits_per_sample}-bit {sample_format:?}")]
    UnsupportedFormat {
        path: PathBuf,
        bits_per_sample: u16,
        sample_format: hound::SampleFormat,
    },

    #[error("unsupported channel count in '{path}': expected mono or stereo, found {channels}")]
    UnsupportedChannels { path: PathBuf, channels: u16 },

    #[error("I/O failure reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("I/O failure writing WAV data: {0}")]
    Write(#[source] hound::Error),
}
