use cusp_box::ParamBox;
use cusp_core::roundoff::down;
use cusp_core::{Complex, CuspError, ErrorInfo, Params};

/// Area ceiling of the cusp fundamental parallelogram. Boxes whose
/// certified area lower bound exceeds it lie outside the compact
/// parameter space.
pub const MAX_AREA: f64 = 5.24;

pub(crate) fn certify(holds: bool, boxcode: &str, test: &str) -> Result<(), CuspError> {
    if holds {
        Ok(())
    } else {
        Err(CuspError::Predicate(
            ErrorInfo::new(
                "uncertified-inequality",
                format!("cannot certify {test} over the whole box"),
            )
            .with_context("boxcode", boxcode),
        ))
    }
}

/// Certified lower bound on the cusp area `|lox_sqrt|² · Im(lattice)`,
/// from the nearer-to-zero view. Each multiplication shrinks by one ULP
/// correction so the chain never overstates the true area.
pub fn area_lb(nearer: &Params<Complex>, boxcode: &str) -> Result<f64, CuspError> {
    let lox_sqrt = nearer.loxodromic_sqrt;
    let lat_im = nearer.lattice.im;
    if lat_im < 0.0 {
        // The parameter space keeps Im(lattice) >= 0; a certified
        // negative bound here means the certificate strayed outside it.
        return Err(CuspError::Area(
            ErrorInfo::new("negative-lattice-im", "lattice imaginary part is negative")
                .with_context("boxcode", boxcode),
        ));
    }
    let re_sq = down(lox_sqrt.re * lox_sqrt.re);
    let im_sq = down(lox_sqrt.im * lox_sqrt.im);
    let norm = down(re_sq + im_sq);
    Ok(down(norm * lat_im))
}

/// The seven out-of-bounds tests over the compact parameter space:
///
/// * `'0'` — `|lox_sqrt| < 1` over the whole box;
/// * `'1'` — one of Im(lox_sqrt), Im(lattice), Im(parabolic),
///   Re(parabolic) is negative over the whole box;
/// * `'2'` — `|Re(lattice)| > 1/2` over the whole box;
/// * `'3'` — `|lattice| < 1` over the whole box;
/// * `'4'` — `Im(parabolic) > Im(lattice)/2` over the whole box;
/// * `'5'` — `Re(parabolic) > 1/2` over the whole box;
/// * `'6'` — the certified area lower bound exceeds [`MAX_AREA`].
///
/// Each uses only the cheap one-sided views; an inconclusive view (0)
/// fails the inequality and aborts, as required.
pub fn verify_out_of_bounds(boxcode: &str, variant: char) -> Result<(), CuspError> {
    let bx = ParamBox::build(boxcode)?;
    match variant {
        '0' => certify(
            bx.further.loxodromic_sqrt.abs_ub() < 1.0,
            boxcode,
            "|loxodromic_sqrt| < 1",
        ),
        '1' => certify(
            bx.greater.loxodromic_sqrt.im < 0.0
                || bx.greater.lattice.im < 0.0
                || bx.greater.parabolic.im < 0.0
                || bx.greater.parabolic.re < 0.0,
            boxcode,
            "a defining half-space inequality is violated",
        ),
        '2' => certify(
            bx.nearer.lattice.re.abs() > 0.5,
            boxcode,
            "|Re(lattice)| > 1/2",
        ),
        '3' => certify(
            bx.further.lattice.abs_ub() < 1.0,
            boxcode,
            "|lattice| < 1",
        ),
        '4' => certify(
            // Multiplication by 0.5 is exact.
            bx.nearer.parabolic.im > 0.5 * bx.further.lattice.im,
            boxcode,
            "Im(parabolic) > Im(lattice)/2",
        ),
        '5' => certify(
            bx.nearer.parabolic.re > 0.5,
            boxcode,
            "Re(parabolic) > 1/2",
        ),
        '6' => {
            let area = area_lb(&bx.nearer, boxcode)?;
            certify(area > MAX_AREA, boxcode, "cusp area exceeds the ceiling")
        }
        other => Err(CuspError::Certificate(
            ErrorInfo::new(
                "unknown-bounds-variant",
                format!("'{other}' is not an out-of-bounds test"),
            )
            .with_context("boxcode", boxcode),
        )),
    }
}
