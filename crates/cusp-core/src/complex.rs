//! Machine complex numbers with certified modulus bound queries.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::roundoff::{down, up};

/// A complex number held as a plain pair of machine doubles.
///
/// Arithmetic rounds to nearest like any double operation; the certified
/// content lives in the `abs_ub`/`abs_lb` queries, which bracket the true
/// modulus with one correction per rounded operation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// The additive identity.
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    /// The multiplicative identity.
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    /// The imaginary unit.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Builds a complex number from its parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Certified upper bound on the true modulus.
    pub fn abs_ub(self) -> f64 {
        // Two squarings and one addition inside the radicand, then the
        // rounded square root; the root of an upper bound stays an upper
        // bound because the square root is monotone.
        let radicand = up(up(self.re * self.re) + up(self.im * self.im));
        up(radicand.sqrt())
    }

    /// Certified lower bound on the true modulus. Never negative.
    pub fn abs_lb(self) -> f64 {
        let radicand = down(down(self.re * self.re) + down(self.im * self.im));
        down(radicand.sqrt())
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        // Negation of machine numbers is exact.
        Complex::new(-self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}
