//! Complex arithmetic used by the transform
//!
//! Values are `num_complex::Complex64`; the free functions spell out the
//! arithmetic the butterfly relies on. NaN and infinity propagate per IEEE 754.

pub use num_complex::Complex64;

/// Complex zero
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Lift a real value into the complex plane
#[inline]
pub fn from_real(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

#[inline]
pub fn add(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re + b.re, a.im + b.im)
}

#[inline]
pub fn subtract(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re - b.re, a.im - b.im)
}

#[inline]
pub fn multiply(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// Euclidean norm, `sqrt(re² + im²)`
#[inline]
pub fn magnitude(a: Complex64) -> f64 {
    (a.re * a.re + a.im * a.im).sqrt()
}

/// Argument in radians, `atan2(im, re)`
#[inline]
pub fn phase(a: Complex64) -> f64 {
    a.im.atan2(a.re)
}
