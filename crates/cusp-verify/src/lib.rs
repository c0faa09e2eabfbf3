//! Certificate replay and hole-file stitching.
//!
//! The driver replays a tree-shaped certificate, one instruction per
//! line, against the elimination predicates; the stitcher reassembles a
//! directory of certificate fragments into one logical stream. Both fail
//! hard on the first unresolved uncertainty.

pub mod driver;
pub mod stitch;

use cusp_core::CuspError;

/// Maps each error class to its distinct process exit code. Exit code 2
/// is reserved for command-line usage errors (clap's default), and 0 for
/// success.
pub fn exit_code(err: &CuspError) -> i32 {
    match err {
        CuspError::Io(_) => 1,
        CuspError::Predicate(_) => 3,
        CuspError::Area(_) => 4,
        CuspError::Stitch(_) => 5,
        CuspError::Boxcode(_) => 6,
        CuspError::Arithmetic(_) => 7,
        CuspError::Certificate(_) => 8,
    }
}
