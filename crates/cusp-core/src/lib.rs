#![deny(missing_docs)]
#![doc = "Certified floating-point primitives shared across the cusp verifier crates."]

use serde::{Deserialize, Serialize};

pub mod complex;
pub mod errors;
pub mod jet;
pub mod roundoff;

pub use complex::Complex;
pub use errors::{CuspError, ErrorInfo};
pub use jet::Jet;

/// The three complex quantities parameterizing a candidate group and its
/// cusp lattice, generic over the certainty model: `Params<Complex>` holds
/// one-sided machine bounds, `Params<Jet>` holds the full certified cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params<T> {
    /// Lattice translation of the cusp torus.
    pub lattice: T,
    /// Square root of the loxodromic multiplier.
    pub loxodromic_sqrt: T,
    /// Parabolic translation length.
    pub parabolic: T,
}

impl<T> Params<T> {
    /// Builds a parameter triple from its components.
    pub fn new(lattice: T, loxodromic_sqrt: T, parabolic: T) -> Self {
        Self {
            lattice,
            loxodromic_sqrt,
            parabolic,
        }
    }
}
