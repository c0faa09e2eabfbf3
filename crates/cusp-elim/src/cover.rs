use std::collections::VecDeque;

use cusp_box::{LatticeRect, ParamBox};
use cusp_core::roundoff::up;
use cusp_core::{CuspError, ErrorInfo};
use cusp_word::{construct_word, SL2Jet};

/// The short words replayed against every candidate rectangle. Each one,
/// where its kill condition certifies, shows the candidate horoball is
/// carried inside the cusp horoball and cannot be a new full-size
/// horoball. The list only prunes: a candidate none of them kills is
/// subdivided, and a search that runs dry aborts.
pub const ELIMINATION_WORDS: &[&str] = &[
    "g", "G", "Mg", "mg", "MG", "mG", "Ng", "ng", "NG", "nG", "MNg", "mnG",
];

/// A candidate horoball center within the kill radius of a word's image
/// cannot carry a full-size horoball.
const KILL_RADIUS: f64 = 1.0;

/// A candidate wholly inside the unit disk at a lattice point is the
/// cusp horoball itself, not a new one.
const CUSP_CLEARANCE: f64 = 1.0;

const MAX_RECT_DEPTH: usize = 64;
const NODE_BUDGET: usize = 1 << 16;

fn exhausted(boxcode: &str, reason: &str, nodes: usize) -> CuspError {
    CuspError::Predicate(
        ErrorInfo::new("cover-exhausted", reason)
            .with_context("boxcode", boxcode)
            .with_context("nodes", nodes.to_string()),
    )
}

/// The nested lattice-cover search: certifies that no point of the
/// lattice fundamental parallelogram can carry an unaccounted full-size
/// horoball, for every parameter in the box.
///
/// Breadth-first over [`LatticeRect`] subdivisions, on an explicit FIFO
/// worklist so the memory bound stays predictable. A rectangle is
/// discarded when a boundary condition places it outside the region
/// still in question, or when an elimination word certifies its kill
/// condition; otherwise both children are enqueued. Running past the
/// depth cap or the node budget means the cover could not be eliminated,
/// which is fatal like every other inconclusive predicate.
pub fn verify_lattice_cover(boxcode: &str) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    let mats: Vec<SL2Jet> = ELIMINATION_WORDS
        .iter()
        .map(|word| construct_word(&bx.cover, word))
        .collect();
    // Upper bound on Im(lattice)/2; the quotient's reflection symmetry
    // folds the parallelogram at this height.
    let half_lattice_im = 0.5 * bx.further.lattice.im;

    let mut queue: VecDeque<LatticeRect> = VecDeque::new();
    queue.push_back(LatticeRect::initial());
    let mut nodes = 0usize;

    while let Some(rect) = queue.pop_front() {
        nodes += 1;
        if nodes > NODE_BUDGET {
            return Err(exhausted(boxcode, "node budget exhausted", nodes));
        }
        if outside_quotient_domain(&rect, half_lattice_im) {
            continue;
        }
        if mats.iter().any(|mat| kills(mat, &rect)) {
            continue;
        }
        if rect.depth() >= MAX_RECT_DEPTH {
            return Err(exhausted(boxcode, "subdivision depth exhausted", nodes));
        }
        queue.push_back(rect.child(0));
        queue.push_back(rect.child(1));
    }
    Ok(())
}

/// The six boundary exits. Each is a one-sided inflated inequality on the
/// rectangle's certified center and radius; holding means the rectangle
/// lies entirely outside the region that still needs elimination.
fn outside_quotient_domain(rect: &LatticeRect, half_lattice_im: f64) -> bool {
    let radius = rect.radius_ub();
    let (center, _) = rect.center_jet().enclosure();
    // Right of, left of, below, or above the folded fundamental domain.
    if rect.re_lb() > 0.5 || rect.re_ub() < -0.5 || rect.im_ub() < 0.0 {
        return true;
    }
    if half_lattice_im > 0.0 && rect.im_lb() > half_lattice_im {
        return true;
    }
    // Wholly inside the cusp horoball's own disk at the lattice point 0
    // or at the unit translate 1.
    if up(center.abs_ub() + radius) < CUSP_CLEARANCE {
        return true;
    }
    let shifted = cusp_core::Complex::new(center.re - 1.0, center.im);
    if up(up(shifted.abs_ub()) + radius) < CUSP_CLEARANCE {
        return true;
    }
    false
}

/// The closed-form kill condition: the image of the candidate horoball
/// lies within the kill radius when
/// `(1+EPS)·(|a − c·center| + |c·radius|) < KILL_RADIUS`, with every
/// modulus a certified upper bound over the whole box.
fn kills(mat: &SL2Jet, rect: &LatticeRect) -> bool {
    let shift = mat.a - mat.c * rect.center_jet();
    let spread = mat.c * rect.radius_jet();
    up(shift.abs_ub() + spread.abs_ub()) < KILL_RADIUS
}
