//! Radix-2 Cooley-Tukey FFT kernel.
//!
//! Hand-rolled rather than delegated to a numerics crate: this ~150 line
//! module (including its own tiny complex type) is the interesting
//! engineering this crate exists to demonstrate. Both `fft` and `ifft`
//! copy their input and never mutate the caller's buffer.

use std::f64::consts::PI;

/// A minimal complex number, double precision. No heavyweight numerics
/// dependency is pulled in for this — add/sub/mul/conj/abs/phase is all
/// the kernel needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Magnitude |z|.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Phase arg(z), undefined (but conventionally 0) at the origin.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.re * k, self.im * k)
    }
}

impl std::ops::Add for Complex64 {
    type Output = Complex64;
    #[inline]
    fn add(self, rhs: Complex64) -> Complex64 {
        Complex64::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::ops::Sub for Complex64 {
    type Output = Complex64;
    #[inline]
    fn sub(self, rhs: Complex64) -> Complex64 {
        Complex64::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl std::ops::Mul for Complex64 {
    type Output = Complex64;
    #[inline]
    fn mul(self, rhs: Complex64) -> Complex64 {
        Complex64::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Forward discrete Fourier transform: `X[k] = sum_n x[n] * exp(-j*2*pi*k*n/N)`.
///
/// `x.len()` must be a power of two (or 0 or 1, both handled as edge
/// cases). Panics otherwise — an invalid length is a caller precondition
/// violation, not a recoverable condition the denoise pipeline can ever
/// trigger since `FrameSize` is fixed at a power of two.
pub fn fft(x: &[Complex64]) -> Vec<Complex64> {
    transform(x, false)
}

/// Inverse discrete Fourier transform, computed as `conj(fft(conj(X))) / N`
/// so it shares the forward transform's numerical behavior exactly.
pub fn ifft(x: &[Complex64]) -> Vec<Complex64> {
    transform(x, true)
}

fn transform(x: &[Complex64], inverse: bool) -> Vec<Complex64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![x[0]];
    }
    assert!(
        n.is_power_of_two(),
        "fft: length {n} is not a positive power of two"
    );

    let mut buf: Vec<Complex64> = if inverse {
        x.iter().map(|z| z.conj()).collect()
    } else {
        x.to_vec()
    };

    bit_reverse_permute(&mut buf);

    let bits = n.trailing_zeros();
    for stage in 1..=bits {
        let m = 1usize << stage;
        let half = m / 2;
        let theta = -2.0 * PI / m as f64;
        let wm = Complex64::from_polar(1.0, theta);

        let mut start = 0;
        while start < n {
            let mut w = Complex64::new(1.0, 0.0);
            for j in 0..half {
                let u = buf[start + j];
                let t = w * buf[start + j + half];
                buf[start + j] = u + t;
                buf[start + j + half] = u - t;
                w = w * wm;
            }
            start += m;
        }
    }

    if inverse {
        let scale = 1.0 / n as f64;
        for z in &mut buf {
            *z = z.conj().scale(scale);
        }
    }

    buf
}

fn bit_reverse_permute(buf: &mut [Complex64]) {
    let n = buf.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i as u32, bits) as usize;
        if j > i {
            buf.swap(i, j);
        }
    }
}

fn reverse_bits(mut v: u32, bits: u32) -> u32 {
    let mut r = 0u32;
    for _ in 0..bits {
        r = (r << 1) | (v & 1);
        v >>= 1;
    }
    r
}

/// Smallest power of two >= n; returns 1 for n <= 1.
pub fn next_power_of_two(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    n.next_power_of_two()
}
