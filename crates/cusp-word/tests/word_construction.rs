use cusp_box::ParamBox;
use cusp_core::{Complex, Jet, Params};
use cusp_word::{construct_g, construct_word, SL2Jet};
use proptest::prelude::*;

fn point_params() -> Params<Jet> {
    Params::new(
        Jet::constant(Complex::new(0.25, 2.1)),
        Jet::constant(Complex::new(1.2, 0.3)),
        Jet::constant(Complex::new(0.4, 0.9)),
    )
}

/// The group inverse of a word: reversed, with every letter's case
/// swapped.
fn inverse_word(word: &str) -> String {
    word.chars()
        .rev()
        .map(|c| match c {
            'g' => 'G',
            'G' => 'g',
            'm' => 'M',
            'M' => 'm',
            'n' => 'N',
            'N' => 'n',
            other => other,
        })
        .collect()
}

fn assert_encloses_identity(m: &SL2Jet) {
    assert_eq!((m.a - 1.0).abs_lb(), 0.0);
    assert_eq!(m.b.abs_lb(), 0.0);
    assert_eq!(m.c.abs_lb(), 0.0);
    assert_eq!((m.d - 1.0).abs_lb(), 0.0);
}

#[test]
fn empty_word_is_the_exact_identity() {
    let w = construct_word(&point_params(), "");
    assert_eq!(w.a.f, Complex::ONE);
    assert_eq!(w.b.f, Complex::ZERO);
    assert_eq!(w.c.f, Complex::ZERO);
    assert_eq!(w.d.f, Complex::ONE);
    assert_eq!(w.a.err, 0.0);
}

#[test]
fn generator_times_inverse_encloses_identity() {
    let params = point_params();
    let g = construct_g(&params);
    let product = g.mul(&g.inverse());
    assert_encloses_identity(&product);
}

#[test]
fn unit_translation_word_lands_on_one() {
    let w = construct_word(&point_params(), "M");
    assert_eq!(w.a.f, Complex::ONE);
    assert_eq!(w.b.f, Complex::ONE);
    assert_eq!(w.c.f, Complex::ZERO);
    assert!(w.b.err < 1e-12);
}

#[test]
fn lattice_translation_batches_counters() {
    let params = point_params();
    // "NNmm" is a single flushed translation by -2 + 2L.
    let w = construct_word(&params, "NNmm");
    let expected = Complex::new(-2.0 + 2.0 * 0.25, 2.0 * 2.1);
    assert!((w.b.f.re - expected.re).abs() < 1e-12);
    assert!((w.b.f.im - expected.im).abs() < 1e-12);
    assert_eq!(w.c.f, Complex::ZERO);
}

#[test]
fn inverse_law_over_a_real_box_cover() {
    let bx = ParamBox::build("111111111111").expect("valid boxcode");
    for word in ["g", "G", "Mg", "NgmG", "gMGn"] {
        let w = construct_word(&bx.cover, word);
        let w_inv = construct_word(&bx.cover, &inverse_word(word));
        assert_encloses_identity(&w.mul(&w_inv));
    }
}

proptest! {
    #[test]
    fn inverse_law_holds_for_random_words(
        letters in proptest::collection::vec(
            prop_oneof![
                Just('g'), Just('G'), Just('m'), Just('M'), Just('n'), Just('N')
            ],
            0..8,
        )
    ) {
        let word: String = letters.into_iter().collect();
        let params = point_params();
        let w = construct_word(&params, &word);
        let w_inv = construct_word(&params, &inverse_word(&word));
        let product = w.mul(&w_inv);
        prop_assert_eq!((product.a - 1.0).abs_lb(), 0.0);
        prop_assert_eq!(product.b.abs_lb(), 0.0);
        prop_assert_eq!(product.c.abs_lb(), 0.0);
        prop_assert_eq!((product.d - 1.0).abs_lb(), 0.0);
    }
}
