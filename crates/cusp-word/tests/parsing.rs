use cusp_word::{g_length, parse_word, parse_word_pair};

#[test]
fn strips_one_parenthesis_layer() {
    assert_eq!(parse_word("K(gMG)").unwrap(), "gMG");
    assert_eq!(parse_word("S(NgmG)").unwrap(), "NgmG");
    assert_eq!(parse_word("K()").unwrap(), "");
}

#[test]
fn rejects_unbalanced_instructions() {
    assert_eq!(
        parse_word("KgMG").unwrap_err().info().code,
        "malformed-word"
    );
    assert_eq!(
        parse_word("K(gMG").unwrap_err().info().code,
        "malformed-word"
    );
}

#[test]
fn splits_word_pairs_at_the_comma() {
    let (first, second) = parse_word_pair("I(gMG,Ng)").unwrap();
    assert_eq!(first, "gMG");
    assert_eq!(second, "Ng");
    assert_eq!(
        parse_word_pair("I(gMG)").unwrap_err().info().code,
        "malformed-word"
    );
}

#[test]
fn g_length_counts_generator_letters_only() {
    assert_eq!(g_length(""), 0);
    assert_eq!(g_length("mMnN"), 0);
    assert_eq!(g_length("gG"), 2);
    assert_eq!(g_length("NgmGMg"), 3);
}
