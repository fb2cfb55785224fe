//! CSS lengths in `rem`.

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Decimal places kept when a length is written out as CSS.
const PRECISION: f64 = 1e5;

/// A length in `rem`.
///
/// Arithmetic is exact in `f64`. Rounding only happens on [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Length {
    rem: f64,
}

impl Length {
    /// Zero length.
    pub const ZERO: Self = Self { rem: 0.0 };

    /// Create a length from a `rem` value.
    #[must_use]
    pub const fn rem(value: f64) -> Self {
        Self { rem: value }
    }

    /// The value in `rem`.
    #[must_use]
    pub const fn as_rem(self) -> f64 {
        self.rem
    }

    /// Compare two lengths within `epsilon` rem.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.rem - other.rem).abs() <= epsilon
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::rem(self.rem + rhs.rem)
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::rem(self.rem - rhs.rem)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::rem(self.rem * rhs)
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        Self::rem(-self.rem)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.rem * PRECISION).round() / PRECISION;
        let text = format!("{rounded:.5}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        let text = if text == "-0" { "0" } else { text };
        write!(f, "{text}rem")
    }
}
