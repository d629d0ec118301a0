//! vxdenoise — offline spectral-subtraction voice denoiser.
//!
//! The interesting engineering lives in [`dsp`]: a radix-2 FFT kernel, Hann
//! window/framing utilities, and a two-pass STFT pipeline that estimates a
//! stationary noise profile from the start of a recording and subtracts it
//! from every frame before reconstructing via overlap-add. Everything else
//! in this crate — [`wav`] I/O and the `vxdenoise` binary — is plumbing
//! around that core.
//!
//! A browser-side capture frontend and an HTTP request handler that POSTs a
//! WAV file to this core are deliberately not part of this crate: the core
//! is a pure function over PCM samples (`dsp::denoise`), and any such
//! handler is glue code with no DSP content of its own.

pub mod dsp;
pub mod error;
pub mod wav;

pub use dsp::{denoise, denoise_default, DenoiseConfig};
pub use error::WavError;
