use cusp_core::roundoff::{down, up, EPS, HALF_EPS};
use cusp_core::{Complex, CuspError, ErrorInfo, Jet, Params};

/// A node of the six-dimensional dyadic subdivision tree.
///
/// The root box is `[-8·s_i, 8·s_i]` in every coordinate, where
/// `s_i = 2^(-i/6)` pre-scales the axes to their natural units. Digits are
/// exact sums of signed powers of two describing the ideal box; the
/// rounded `center`/`size` projection is a certified superset of it.
/// Coordinates pair up as (im, re) = (i, i+3) into the three complex
/// parameters: lattice, loxodromic sqrt, parabolic.
#[derive(Debug, Clone)]
pub struct ParamBox {
    code: String,
    center_digits: [f64; 6],
    size_digits: [f64; 6],
    center: [f64; 6],
    size: [f64; 6],
    /// Full two-sided certified enclosure of the three parameters.
    pub cover: Params<Jet>,
    /// Certified bound nearer to zero than any point of the box, or 0 when
    /// the box cannot be separated from zero.
    pub nearer: Params<Complex>,
    /// Certified bound farther from zero than any point of the box.
    pub further: Params<Complex>,
    /// Certified upper bound on the signed coordinate, or 0 when
    /// inconclusive.
    pub greater: Params<Complex>,
}

impl ParamBox {
    /// Builds the box named by a boxcode: starting from the root box,
    /// each digit halves the current coordinate and shifts the center
    /// down ('0') or up ('1'), cycling through the six coordinates.
    pub fn build(code: &str) -> Result<Self, CuspError> {
        let mut center_digits = [0.0f64; 6];
        let mut size_digits = [8.0f64; 6];
        let mut pos = 0usize;
        for ch in code.chars() {
            let dir = match ch {
                '0' => -1.0,
                '1' => 1.0,
                _ => {
                    return Err(CuspError::Boxcode(
                        ErrorInfo::new("invalid-boxcode", "boxcode digits must be '0' or '1'")
                            .with_context("boxcode", code),
                    ))
                }
            };
            // Halving and shifting dyadic digits is exact.
            size_digits[pos] *= 0.5;
            center_digits[pos] += dir * size_digits[pos];
            pos = (pos + 1) % 6;
        }

        let mut center = [0.0f64; 6];
        let mut size = [0.0f64; 6];
        for i in 0..6 {
            let scale = Self::axis_scale(i);
            // The inflated size guarantees, for every rounding outcome,
            //   center - size <= true_center - true_size
            //   center + size >= true_center + true_size.
            center[i] = scale * center_digits[i];
            size[i] = (1.0 + 2.0 * EPS)
                * (size_digits[i] * scale + HALF_EPS * center_digits[i].abs());
        }

        let cover = compute_cover(&center, &size);
        let nearer = group(compute_nearer(&center_digits, &size_digits, &center, &size));
        let further = group(compute_further(&center_digits, &size_digits, &center, &size));
        let greater = group(compute_greater(&center_digits, &size_digits, &center, &size));

        Ok(Self {
            code: code.to_owned(),
            center_digits,
            size_digits,
            center,
            size,
            cover,
            nearer,
            further,
            greater,
        })
    }

    /// Pre-scaling of coordinate `axis` to its natural unit.
    pub fn axis_scale(axis: usize) -> f64 {
        (-(axis as f64) / 6.0).exp2()
    }

    /// The boxcode this box was built from.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Exact dyadic center digits of the ideal box.
    pub fn center_digits(&self) -> &[f64; 6] {
        &self.center_digits
    }

    /// Exact dyadic size digits of the ideal box.
    pub fn size_digits(&self) -> &[f64; 6] {
        &self.size_digits
    }

    /// Rounded center projection.
    pub fn center(&self) -> &[f64; 6] {
        &self.center
    }

    /// Rounded, enclosure-inflated size projection.
    pub fn size(&self) -> &[f64; 6] {
        &self.size
    }
}

fn group(m: [f64; 6]) -> Params<Complex> {
    Params::new(
        Complex::new(m[3], m[0]),
        Complex::new(m[4], m[1]),
        Complex::new(m[5], m[2]),
    )
}

fn compute_cover(center: &[f64; 6], size: &[f64; 6]) -> Params<Jet> {
    Params::new(
        Jet::with_size(
            Complex::new(center[3], center[0]),
            Complex::new(size[3], size[0]),
            0,
        ),
        Jet::with_size(
            Complex::new(center[4], center[1]),
            Complex::new(size[4], size[1]),
            1,
        ),
        Jet::with_size(
            Complex::new(center[5], center[2]),
            Complex::new(size[5], size[2]),
            2,
        ),
    )
}

// The one-sided views decide every case on the exact digit values and
// confirm against the rounded projection; when the two disagree, or the
// box straddles the threshold, the coordinate stays at the inconclusive 0.

fn compute_nearer(
    center_digits: &[f64; 6],
    size_digits: &[f64; 6],
    center: &[f64; 6],
    size: &[f64; 6],
) -> [f64; 6] {
    let mut m = [0.0f64; 6];
    for i in 0..6 {
        if center_digits[i] > 0.0
            && center_digits[i] > size_digits[i]
            && center[i] > size[i]
        {
            // Whole box on the positive side: lower bound on
            // true_center - true_size. The machine difference is
            // nonnegative, so one downward correction certifies it.
            m[i] = down(center[i] - size[i]);
        } else if center_digits[i] < 0.0
            && center_digits[i] < -size_digits[i]
            && center[i] < -size[i]
        {
            // Whole box on the negative side: upper bound on
            // true_center + true_size, negated back. Negation is exact.
            m[i] = -down(-center[i] - size[i]);
        }
    }
    m
}

fn compute_further(
    center_digits: &[f64; 6],
    size_digits: &[f64; 6],
    center: &[f64; 6],
    size: &[f64; 6],
) -> [f64; 6] {
    let mut m = [0.0f64; 6];
    for i in 0..6 {
        if center_digits[i] > -size_digits[i] {
            // True upper edge is positive: inflate the machine sum up.
            m[i] = up(center[i] + size[i]);
        } else {
            // True upper edge is nonpositive: the far side is the lower
            // edge; bound it below and negate.
            m[i] = -up(-center[i] + size[i]);
        }
    }
    m
}

fn compute_greater(
    center_digits: &[f64; 6],
    size_digits: &[f64; 6],
    center: &[f64; 6],
    size: &[f64; 6],
) -> [f64; 6] {
    let mut m = [0.0f64; 6];
    for i in 0..6 {
        if center_digits[i] > -size_digits[i] {
            // True upper edge is positive.
            m[i] = up(center[i] + size[i]);
        } else if center_digits[i] < -size_digits[i] && center[i] < -size[i] {
            // True upper edge is negative and the rounded projection
            // agrees; shrink its magnitude to stay an upper bound.
            m[i] = -down(-(center[i] + size[i]));
        }
    }
    m
}
