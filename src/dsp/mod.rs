//! DSP core for the offline voice denoiser.
//!
//! Three cooperating layers, leaves first:
//!
//! - [`fft`] — radix-2 Cooley-Tukey FFT kernel.
//! - [`window`] — Hann window, framing, peak normalization, RMS.
//! - [`denoiser`] — the two-pass STFT spectral-subtraction pipeline.

pub mod denoiser;
pub mod fft;
pub mod window;

pub use denoiser::{denoise, denoise_default, DenoiseConfig};
pub use fft::{fft as forward_fft, ifft as inverse_fft, Complex64};
