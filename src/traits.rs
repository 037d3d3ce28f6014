use std::{fmt, ops};

use num_complex::Complex;

pub trait Scalar:
    Copy
    + PartialEq
    + num_traits::Zero
    + num_traits::One
    + ops::Neg<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::SubAssign
    + ops::DivAssign
    + Norm<Self::Norm>
    + fmt::Display
    + fmt::Debug
{
    type Norm: PartialOrd + num_traits::Zero + fmt::Display + fmt::Debug;

    #[cfg(feature = "debug")]
    fn pretty_string(&self, _config: pretty_dtoa::FmtFloatConfig) -> String {
        format!("{}", self)
    }
}

impl Scalar for f32 {
    type Norm = f32;

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        pretty_dtoa::dtoa(*self as f64, config)
    }
}

impl Scalar for f64 {
    type Norm = f64;

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        pretty_dtoa::dtoa(*self, config)
    }
}

impl Scalar for Complex<f64> {
    type Norm = f64;

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        format!(
            "{}{}j{}",
            pretty_dtoa::dtoa(self.re, config),
            if self.im.signum() < 0.0 { "-" } else { "+" },
            pretty_dtoa::dtoa(self.im.abs(), config)
        )
    }
}

/// Magnitude used to rank pivot candidates.
pub trait Norm<F> {
    fn norm(&self) -> F;
}

impl Norm<f64> for f64 {
    fn norm(&self) -> f64 {
        f64::abs(*self)
    }
}

impl Norm<f32> for f32 {
    fn norm(&self) -> f32 {
        f32::abs(*self)
    }
}

impl Norm<f64> for Complex<f64> {
    fn norm(&self) -> f64 {
        num_complex::Complex::norm(*self)
    }
}
