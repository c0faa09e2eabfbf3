//! One-ULP correction helpers and the process-wide arithmetic anomaly flags.
//!
//! Every certified bound in this workspace rests on three facts about IEEE
//! double arithmetic in round-to-nearest mode:
//!
//! 1. negation of a machine number is exact;
//! 2. the sign of a machine addition or subtraction matches the sign of
//!    the true result;
//! 3. a single rounded operation `r = fl(x ∘ y)` on normal operands
//!    satisfies `r·(1 − EPS) ≤ x ∘ y ≤ r·(1 + EPS)`.
//!
//! The correction factor `(1 ± EPS)` is twice the unit roundoff, which
//! leaves enough headroom for the correction product's own rounding: the
//! computed `(1 + EPS)·r` lands on or above the machine successor of `r`,
//! which dominates the true value. All of this assumes no overflow or
//! underflow anywhere in the run, so every correction also feeds the
//! anomaly flags checked once at end of run.

use std::sync::atomic::{AtomicBool, Ordering};

/// Unit of precision of `f64`, twice the round-to-nearest unit roundoff.
pub const EPS: f64 = f64::EPSILON;

/// The round-to-nearest unit roundoff.
pub const HALF_EPS: f64 = EPS / 2.0;

static OVERFLOW_SEEN: AtomicBool = AtomicBool::new(false);
static UNDERFLOW_SEEN: AtomicBool = AtomicBool::new(false);

/// Records an anomaly if `value` escaped the normal range.
///
/// A non-finite value marks overflow; a nonzero value below the smallest
/// normal marks underflow. Either invalidates the entire run, because the
/// enclosure corrections above are only proven for normal arithmetic.
#[inline]
pub fn note(value: f64) {
    if !value.is_finite() {
        OVERFLOW_SEEN.store(true, Ordering::Relaxed);
    } else if value != 0.0 && value.abs() < f64::MIN_POSITIVE {
        UNDERFLOW_SEEN.store(true, Ordering::Relaxed);
    }
}

/// Reports whether any overflow has been recorded since process start.
pub fn overflow_seen() -> bool {
    OVERFLOW_SEEN.load(Ordering::Relaxed)
}

/// Reports whether any underflow has been recorded since process start.
pub fn underflow_seen() -> bool {
    UNDERFLOW_SEEN.load(Ordering::Relaxed)
}

/// End-of-run sweep: true when the whole run stayed in the normal range.
pub fn sweep_ok() -> bool {
    !overflow_seen() && !underflow_seen()
}

/// Certified upper bound on the true result of the single rounded
/// operation that produced the nonnegative machine number `x`.
#[inline]
pub fn up(x: f64) -> f64 {
    let r = (1.0 + EPS) * x;
    note(r);
    r
}

/// Certified lower bound on the true result of the single rounded
/// operation that produced the nonnegative machine number `x`.
#[inline]
pub fn down(x: f64) -> f64 {
    let r = (1.0 - EPS) * x;
    note(r);
    r
}

/// Certified upper bound on the exact sum of nonnegative machine numbers.
#[inline]
pub fn sum_ub(terms: &[f64]) -> f64 {
    terms.iter().fold(0.0, |acc, &t| up(acc + t))
}

/// Certified upper bound on the true sum `a + b` of machine numbers of
/// any sign.
#[inline]
pub fn add_ub(a: f64, b: f64) -> f64 {
    let s = a + b;
    // The sign of s matches the sign of the true sum.
    if s >= 0.0 {
        up(s)
    } else {
        -down(-s)
    }
}

/// Certified lower bound on the true difference `a - b` of machine
/// numbers of any sign.
#[inline]
pub fn diff_lb(a: f64, b: f64) -> f64 {
    let d = a - b;
    if d >= 0.0 {
        down(d)
    } else {
        -up(-d)
    }
}
