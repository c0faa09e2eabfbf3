//! Certified complex jets: the affine/interval hybrid every predicate
//! consumes.
//!
//! A jet represents the set of values `f + d[0]·z0 + d[1]·z1 + d[2]·z2 + δ`
//! where each `z` ranges over the closed complex unit disk and `|δ| ≤ err`.
//! The three slots correspond to the three normalized complex box
//! parameters, so a jet tracks first-order dependence on the box exactly
//! and folds every higher-order and rounding contribution into `err`.
//! The arithmetic here is consumed as a fixed contract: sound enclosure
//! of the true value for every point of the box, assuming the whole run
//! stays free of overflow and underflow (see [`crate::roundoff`]).

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::roundoff::{down, note, sum_ub, up, EPS, HALF_EPS};

/// A certified complex 1-jet over the six-dimensional parameter box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    /// Value at the box center.
    pub f: Complex,
    /// First-order dependence on the three normalized complex parameters.
    pub d: [Complex; 3],
    /// Radius absorbing every higher-order and rounding contribution.
    pub err: f64,
}

impl Jet {
    /// The constant zero jet.
    pub const ZERO: Jet = Jet {
        f: Complex::ZERO,
        d: [Complex::ZERO; 3],
        err: 0.0,
    };

    /// The constant one jet.
    pub const ONE: Jet = Jet {
        f: Complex::ONE,
        d: [Complex::ZERO; 3],
        err: 0.0,
    };

    /// The imaginary unit as a constant jet.
    pub const I: Jet = Jet {
        f: Complex::I,
        d: [Complex::ZERO; 3],
        err: 0.0,
    };

    /// An exact constant (machine numbers carry no error).
    pub fn constant(value: Complex) -> Self {
        Jet {
            f: value,
            d: [Complex::ZERO; 3],
            err: 0.0,
        }
    }

    /// A box parameter: value `center` at the box center, varying by
    /// `size` times the unit disk in derivative slot `slot`.
    pub fn with_size(center: Complex, size: Complex, slot: usize) -> Self {
        let mut d = [Complex::ZERO; 3];
        d[slot] = size;
        Jet { f: center, d, err: 0.0 }
    }

    /// A jet that certifies nothing: used when a certified operation has
    /// no sound linearization (division through zero). Any predicate fed
    /// such a jet necessarily fails, which is the required behavior.
    fn poisoned() -> Self {
        note(f64::INFINITY);
        Jet {
            f: Complex::ZERO,
            d: [Complex::ZERO; 3],
            err: f64::INFINITY,
        }
    }

    /// Certified upper bound on how far the jet can stray from `f` over
    /// the whole box.
    pub fn rad_ub(&self) -> f64 {
        sum_ub(&[
            self.d[0].abs_ub(),
            self.d[1].abs_ub(),
            self.d[2].abs_ub(),
            self.err,
        ])
    }

    /// The enclosing-interval form: box-center value and a certified
    /// radius covering the whole box.
    pub fn enclosure(&self) -> (Complex, f64) {
        (self.f, self.rad_ub())
    }

    /// Certified upper bound on the modulus over the whole box.
    pub fn abs_ub(&self) -> f64 {
        sum_ub(&[self.f.abs_ub(), self.rad_ub()])
    }

    /// Certified lower bound on the modulus over the whole box.
    /// Saturates at 0: a zero result means "cannot rule out zero".
    pub fn abs_lb(&self) -> f64 {
        let margin = self.f.abs_lb() - self.rad_ub();
        // The sign of the machine difference matches the true sign.
        if margin <= 0.0 {
            0.0
        } else {
            down(margin)
        }
    }

    /// Certified reciprocal. Sound only where the jet is bounded away
    /// from zero over the whole box; otherwise the result is poisoned.
    pub fn recip(&self) -> Jet {
        let total_lb = self.abs_lb();
        let center_lb = self.f.abs_lb();
        if total_lb <= 0.0 || center_lb <= 0.0 {
            return Jet::poisoned();
        }
        let den = self.f.re * self.f.re + self.f.im * self.f.im;
        let f = Complex::new(self.f.re / den, -self.f.im / den);
        let center_sq = self.f * self.f;
        let d = [
            -cdiv(self.d[0], center_sq),
            -cdiv(self.d[1], center_sq),
            -cdiv(self.d[2], center_sq),
        ];
        let dvar = sum_ub(&[
            self.d[0].abs_ub(),
            self.d[1].abs_ub(),
            self.d[2].abs_ub(),
        ]);
        let spread = up(dvar + self.err);
        let inv_ub = up(1.0 / down(center_lb));
        let inv_sq_ub = up(inv_ub * inv_ub);
        // 1/(c + Δ) = 1/c - Δ/c² + Δ²/(c²(c + Δ)); the linear term keeps
        // only the modeled d·z part of Δ, so the input error, the
        // quadratic remainder, and the rounding of f and d all land in
        // the new error radius.
        let carried = up(self.err * inv_sq_ub);
        let quadratic = up(up(up(spread * spread) * inv_sq_ub) * up(1.0 / down(total_lb)));
        let rounding = up(3.0 * EPS * sum_ub(&[inv_ub, up(dvar * inv_sq_ub)]));
        let err = sum_ub(&[carried, quadratic, rounding]);
        Jet { f, d, err }
    }
}

/// Machine complex division, used only for the derivative quotients; its
/// rounding is charged to the caller's error radius.
fn cdiv(num: Complex, den: Complex) -> Complex {
    let norm = den.re * den.re + den.im * den.im;
    Complex::new(
        (num.re * den.re + num.im * den.im) / norm,
        (num.im * den.re - num.re * den.im) / norm,
    )
}

impl From<Complex> for Jet {
    fn from(value: Complex) -> Self {
        Jet::constant(value)
    }
}

impl From<f64> for Jet {
    fn from(value: f64) -> Self {
        Jet::constant(Complex::new(value, 0.0))
    }
}

impl Neg for Jet {
    type Output = Jet;

    fn neg(self) -> Jet {
        // Exact: negation of every component.
        Jet {
            f: -self.f,
            d: [-self.d[0], -self.d[1], -self.d[2]],
            err: self.err,
        }
    }
}

impl Add for Jet {
    type Output = Jet;

    fn add(self, rhs: Jet) -> Jet {
        let f = self.f + rhs.f;
        let d = [
            self.d[0] + rhs.d[0],
            self.d[1] + rhs.d[1],
            self.d[2] + rhs.d[2],
        ];
        let rounding = up(HALF_EPS
            * sum_ub(&[
                f.abs_ub(),
                d[0].abs_ub(),
                d[1].abs_ub(),
                d[2].abs_ub(),
            ]));
        let err = sum_ub(&[self.err, rhs.err, rounding]);
        Jet { f, d, err }
    }
}

impl Sub for Jet {
    type Output = Jet;

    fn sub(self, rhs: Jet) -> Jet {
        self + (-rhs)
    }
}

impl Mul for Jet {
    type Output = Jet;

    fn mul(self, rhs: Jet) -> Jet {
        let f = self.f * rhs.f;
        let d = [
            self.f * rhs.d[0] + rhs.f * self.d[0],
            self.f * rhs.d[1] + rhs.f * self.d[1],
            self.f * rhs.d[2] + rhs.f * self.d[2],
        ];
        let ax = self.f.abs_ub();
        let bx = rhs.f.abs_ub();
        let dx = sum_ub(&[
            self.d[0].abs_ub(),
            self.d[1].abs_ub(),
            self.d[2].abs_ub(),
        ]);
        let dy = sum_ub(&[
            rhs.d[0].abs_ub(),
            rhs.d[1].abs_ub(),
            rhs.d[2].abs_ub(),
        ]);
        // Second-order cross terms, carried input errors, and the rounding
        // of the computed value and derivative products.
        let second_order = up(dx * dy);
        let self_err = up(self.err * sum_ub(&[bx, dy, rhs.err]));
        let rhs_err = up(rhs.err * up(ax + dx));
        let rounding = up(3.0 * EPS * up(up(ax + dx) * up(bx + dy)));
        let err = sum_ub(&[second_order, self_err, rhs_err, rounding]);
        Jet { f, d, err }
    }
}

impl Div for Jet {
    type Output = Jet;

    fn div(self, rhs: Jet) -> Jet {
        self * rhs.recip()
    }
}

impl Add<f64> for Jet {
    type Output = Jet;

    fn add(self, rhs: f64) -> Jet {
        let f = Complex::new(self.f.re + rhs, self.f.im);
        let err = sum_ub(&[self.err, up(HALF_EPS * f.abs_ub())]);
        Jet { f, d: self.d, err }
    }
}

impl Sub<f64> for Jet {
    type Output = Jet;

    fn sub(self, rhs: f64) -> Jet {
        self + (-rhs)
    }
}

impl Mul<f64> for Jet {
    type Output = Jet;

    fn mul(self, rhs: f64) -> Jet {
        let f = self.f * rhs;
        let d = [self.d[0] * rhs, self.d[1] * rhs, self.d[2] * rhs];
        let scale = rhs.abs();
        let ax = self.f.abs_ub();
        let dx = sum_ub(&[
            self.d[0].abs_ub(),
            self.d[1].abs_ub(),
            self.d[2].abs_ub(),
        ]);
        let err = sum_ub(&[
            up(self.err * scale),
            up(EPS * up(scale * up(ax + dx))),
        ]);
        Jet { f, d, err }
    }
}
