use cusp_core::roundoff::{add_ub, diff_lb, EPS, HALF_EPS};
use cusp_core::{Complex, Jet};

/// A node of the two-dimensional lattice-quotient subdivision tree.
///
/// The root rectangle covers the full lattice parallelogram: center 0,
/// complex radius `8·2^(-1/2) + 8i`. Subdivision alternates between the
/// two coordinates via the `pos` cursor. The certified center and radius
/// are constant jets: a rectangle has no dependence on the box
/// parameters, so it behaves like plain interval data.
#[derive(Debug, Clone)]
pub struct LatticeRect {
    center_digits: [f64; 2],
    size_digits: [f64; 2],
    center: [f64; 2],
    size: [f64; 2],
    pos: usize,
    depth: usize,
}

impl LatticeRect {
    /// The full lattice parallelogram.
    pub fn initial() -> Self {
        let mut rect = Self {
            center_digits: [0.0; 2],
            size_digits: [8.0; 2],
            center: [0.0; 2],
            size: [0.0; 2],
            pos: 0,
            depth: 0,
        };
        rect.project();
        rect
    }

    /// The half of this rectangle selected by `dir` (0 = lower, 1 =
    /// upper) along the cursor coordinate.
    pub fn child(&self, dir: u8) -> Self {
        let mut child = self.clone();
        let sign = if dir == 0 { -1.0 } else { 1.0 };
        child.size_digits[child.pos] *= 0.5;
        child.center_digits[child.pos] += sign * child.size_digits[child.pos];
        child.pos = (child.pos + 1) % 2;
        child.depth += 1;
        child.project();
        child
    }

    fn project(&mut self) {
        for i in 0..2 {
            let scale = Self::axis_scale(i);
            // Same enclosure discipline as the parameter box.
            self.center[i] = scale * self.center_digits[i];
            self.size[i] = (1.0 + 2.0 * EPS)
                * (self.size_digits[i] * scale + HALF_EPS * self.center_digits[i].abs());
        }
    }

    /// Pre-scaling of coordinate `axis` to its natural unit.
    pub fn axis_scale(axis: usize) -> f64 {
        (-(axis as f64) / 2.0).exp2()
    }

    /// Number of subdivisions below the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Exact dyadic center digits.
    pub fn center_digits(&self) -> &[f64; 2] {
        &self.center_digits
    }

    /// Exact dyadic size digits.
    pub fn size_digits(&self) -> &[f64; 2] {
        &self.size_digits
    }

    /// Certified center as a constant jet (re = coordinate 1, im =
    /// coordinate 0).
    pub fn center_jet(&self) -> Jet {
        Jet::constant(Complex::new(self.center[1], self.center[0]))
    }

    /// Certified complex radius as a constant jet.
    pub fn radius_jet(&self) -> Jet {
        Jet::constant(Complex::new(self.size[1], self.size[0]))
    }

    /// Certified upper bound on the circumscribed radius.
    pub fn radius_ub(&self) -> f64 {
        Complex::new(self.size[1], self.size[0]).abs_ub()
    }

    /// Certified lower bound on the real part over the rectangle.
    pub fn re_lb(&self) -> f64 {
        diff_lb(self.center[1], self.size[1])
    }

    /// Certified upper bound on the real part over the rectangle.
    pub fn re_ub(&self) -> f64 {
        add_ub(self.center[1], self.size[1])
    }

    /// Certified lower bound on the imaginary part over the rectangle.
    pub fn im_lb(&self) -> f64 {
        diff_lb(self.center[0], self.size[0])
    }

    /// Certified upper bound on the imaginary part over the rectangle.
    pub fn im_ub(&self) -> f64 {
        add_ub(self.center[0], self.size[0])
    }
}
