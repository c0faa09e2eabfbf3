//! Dyadic subdivision models of the parameter space.
//!
//! [`ParamBox`] is the six-dimensional box a certificate leaf names by its
//! boxcode; [`LatticeRect`] is the two-dimensional lattice-quotient
//! rectangle the nested cover search subdivides. Both keep an exact dyadic
//! digit representation of the ideal region and project it once into
//! rounded floating-point center/size pairs that provably enclose it.

mod param_box;
mod rect;

pub use param_box::ParamBox;
pub use rect::LatticeRect;
