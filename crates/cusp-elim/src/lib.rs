//! The elimination predicate library.
//!
//! Every predicate certifies that a named geometric inequality holds over
//! the entire box a boxcode denotes. Passing returns `Ok(())`; anything
//! short of a full certificate is an error carrying the boxcode, and the
//! driver treats it as an unrecoverable proof-integrity failure. There is
//! no partial success.

mod bounds;
mod cover;
mod horoball;

pub use bounds::{area_lb, verify_out_of_bounds, MAX_AREA};
pub use cover::{verify_lattice_cover, ELIMINATION_WORDS};
pub use horoball::{
    bad_parabolic_excluded, large_horoball, not_identity, not_parabolic_at_inf,
    verify_bad_parabolic, verify_killed, verify_len, verify_variety,
};
