use cusp_box::ParamBox;
use cusp_core::{Jet, Params};
use cusp_word::{construct_word, g_length, SL2Jet};

use crate::bounds::certify;
use cusp_core::CuspError;

/// Certifies the matrix is nowhere in the box of the form
/// `[[±1, b], [0, ±1]]`: either `c` is bounded away from zero, or both
/// diagonal signs are excluded.
pub fn not_parabolic_at_inf(x: &SL2Jet) -> bool {
    x.c.abs_lb() > 0.0
        || (((x.a - 1.0).abs_lb() > 0.0 || (x.d - 1.0).abs_lb() > 0.0)
            && ((x.a + 1.0).abs_lb() > 0.0 || (x.d + 1.0).abs_lb() > 0.0))
}

/// Certifies the matrix is nowhere in the box of the form
/// `[[±1, 0], [0, ±1]]`.
pub fn not_identity(x: &SL2Jet) -> bool {
    x.b.abs_lb() > 0.0 || not_parabolic_at_inf(x)
}

/// The infinity horoball has height `1/|lox_sqrt|`; the matrix maps it to
/// a horoball of height `1/(t·|c|²)`. The image still meets the original
/// exactly when `|c / lox_sqrt| < 1`, certified over the whole box.
pub fn large_horoball(x: &SL2Jet, params: &Params<Jet>) -> bool {
    (x.c / params.loxodromic_sqrt).abs_ub() < 1.0
}

/// A killer word: its image of the infinity horoball meets the infinity
/// horoball, and the word is nowhere a parabolic fixing infinity.
pub fn verify_killed(boxcode: &str, word: &str) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    let w = construct_word(&bx.cover, word);
    certify(
        large_horoball(&w, &bx.cover),
        boxcode,
        "the word keeps a large horoball",
    )?;
    certify(
        not_parabolic_at_inf(&w),
        boxcode,
        "the word is not parabolic at infinity",
    )
}

/// A bounded-length word: nonzero g-length at most `max_g_len`, and its
/// image of the infinity horoball meets the infinity horoball.
pub fn verify_len(boxcode: &str, word: &str, max_g_len: usize) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    let w = construct_word(&bx.cover, word);
    certify(g_length(word) > 0, boxcode, "the word uses a generator")?;
    certify(
        g_length(word) <= max_g_len,
        boxcode,
        "the word is within the length bound",
    )?;
    certify(
        large_horoball(&w, &bx.cover),
        boxcode,
        "the word keeps a large horoball",
    )
}

/// The box lies inside the variety neighborhood of the word: `|c| < 1`
/// everywhere, and either `|b| < 1` everywhere or `c` is bounded away
/// from zero.
pub fn verify_variety(boxcode: &str, word: &str) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    let w = construct_word(&bx.cover, word);
    certify(
        w.c.abs_ub() < 1.0 && (w.b.abs_ub() < 1.0 || w.c.abs_lb() > 0.0),
        boxcode,
        "the box stays in the variety neighborhood",
    )
}

/// Rules out the word being a parabolic fixing a lattice point: the
/// matrix is nowhere the identity, and its translation entry avoids the
/// four excluded disks centered at ±1 and ±lattice.
pub fn verify_bad_parabolic(boxcode: &str, word: &str) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    let w = construct_word(&bx.cover, word);
    certify(not_identity(&w), boxcode, "the word is not the identity")?;
    certify(
        bad_parabolic_excluded(&w, bx.cover.lattice),
        boxcode,
        "the translation avoids the lattice disks",
    )
}

/// The four-disk exclusion on the translation entry.
pub fn bad_parabolic_excluded(w: &SL2Jet, lattice: Jet) -> bool {
    (w.b - 1.0).abs_lb() > 0.0
        && (w.b + 1.0).abs_lb() > 0.0
        && (w.b - lattice).abs_lb() > 0.0
        && (w.b + lattice).abs_lb() > 0.0
}
