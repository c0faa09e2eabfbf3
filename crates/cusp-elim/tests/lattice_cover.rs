use cusp_elim::{verify_lattice_cover, ELIMINATION_WORDS};

#[test]
fn thin_cusp_strip_is_covered() {
    // Every axis pinned just above zero: Im(lattice) is certifiably
    // below ~2^-5, so the quotient strip is thin and lies wholly inside
    // the boundary exits. The search must drain its worklist.
    let mut code = String::from("111111");
    for _ in 0..9 {
        code.push_str("000000");
    }
    verify_lattice_cover(&code).expect("thin strip prunes completely");
}

#[test]
fn wide_lattice_exhausts_and_aborts() {
    // The root box leaves a tall strip nothing prunes; the search must
    // fail closed instead of accepting.
    let err = verify_lattice_cover("").expect_err("root box cannot be covered");
    assert_eq!(err.info().code, "cover-exhausted");
}

#[test]
fn elimination_words_are_short_generator_words() {
    assert!(!ELIMINATION_WORDS.is_empty());
    for word in ELIMINATION_WORDS {
        assert!(word.chars().all(|c| "gGmMnN".contains(c)));
        assert!(word.chars().any(|c| c == 'g' || c == 'G'));
    }
}
