use cusp_core::{Jet, Params};

/// A 2×2 matrix of certified jets representing one group element.
///
/// Built fresh for every predicate evaluation and never persisted. The
/// determinant-one contract is structural: every matrix is a product of
/// the generator, its inverse, and unit-determinant translations.
#[derive(Debug, Clone, Copy)]
pub struct SL2Jet {
    /// Upper left entry.
    pub a: Jet,
    /// Upper right entry.
    pub b: Jet,
    /// Lower left entry.
    pub c: Jet,
    /// Lower right entry.
    pub d: Jet,
}

impl SL2Jet {
    /// The identity element.
    pub fn identity() -> Self {
        Self {
            a: Jet::ONE,
            b: Jet::ZERO,
            c: Jet::ZERO,
            d: Jet::ONE,
        }
    }

    /// Matrix product. Certified arithmetic is not associative, so
    /// callers must not regroup chains of these products.
    pub fn mul(&self, rhs: &SL2Jet) -> SL2Jet {
        SL2Jet {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Inverse under the determinant-one contract.
    pub fn inverse(&self) -> SL2Jet {
        SL2Jet {
            a: self.d,
            b: -self.b,
            c: -self.c,
            d: self.a,
        }
    }

    /// Left-multiplies by the translation `z -> z + t`, entrywise:
    /// `a += t·c`, `b += t·d`.
    pub fn translated(&self, t: Jet) -> SL2Jet {
        SL2Jet {
            a: self.a + t * self.c,
            b: self.b + t * self.d,
            c: self.c,
            d: self.d,
        }
    }
}

/// The generator `G`, built from the box cover:
/// `[[i·P·S, i/S], [i·S, 0]]` where P is the parabolic translation and S
/// the loxodromic square root.
pub fn construct_g(params: &Params<Jet>) -> SL2Jet {
    let i = Jet::I;
    let p = params.parabolic;
    let s = params.loxodromic_sqrt;
    SL2Jet {
        a: (i * p) * s,
        b: i / s,
        c: i * s,
        d: Jet::ZERO,
    }
}

/// The batched lattice translation `m + n·L`. Integer to double
/// conversion is exact.
pub fn construct_t(params: &Params<Jet>, m: i32, n: i32) -> Jet {
    params.lattice * f64::from(n) + f64::from(m)
}

/// Evaluates a word over the generators into a certified matrix.
///
/// The word is processed strictly right to left. The letters 'm'/'M' and
/// 'n'/'N' accumulate signed translation counters instead of producing
/// individual factors; the pending translation is flushed before each
/// generator letter and once more at the end. Both the batching and the
/// right-to-left order are load-bearing: rounded arithmetic is not
/// associative, and certificates are only provable in this exact
/// grouping. Characters outside the alphabet act as separators.
pub fn construct_word(params: &Params<Jet>, word: &str) -> SL2Jet {
    let big_g = construct_g(params);
    let small_g = big_g.inverse();

    let mut w = SL2Jet::identity();
    let mut m = 0i32;
    let mut n = 0i32;
    for ch in word.chars().rev() {
        match ch {
            'm' => m -= 1,
            'M' => m += 1,
            'n' => n -= 1,
            'N' => n += 1,
            _ => {
                if m != 0 || n != 0 {
                    w = w.translated(construct_t(params, m, n));
                    m = 0;
                    n = 0;
                }
                if ch == 'g' {
                    w = small_g.mul(&w);
                } else if ch == 'G' {
                    w = big_g.mul(&w);
                }
            }
        }
    }
    if m != 0 || n != 0 {
        w = w.translated(construct_t(params, m, n));
    }
    w
}
