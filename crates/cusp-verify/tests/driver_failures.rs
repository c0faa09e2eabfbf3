use std::io::Cursor;

use cusp_core::CuspError;
use cusp_verify::driver::{run_certificate, DriverOptions};
use cusp_verify::exit_code;

fn options(root: &str) -> DriverOptions {
    DriverOptions {
        root: root.to_owned(),
        ..DriverOptions::default()
    }
}

#[test]
fn malformed_instruction_is_fatal() {
    let err = run_certificate(Cursor::new("Z\n"), &options("")).expect_err("'Z' is malformed");
    assert_eq!(err.info().code, "malformed-instruction");
    assert_eq!(exit_code(&err), 8);
}

#[test]
fn invalid_root_boxcode_is_rejected_before_reading() {
    let err = run_certificate(Cursor::new("0\n"), &options("012")).expect_err("'2' is invalid");
    assert_eq!(err.info().code, "invalid-boxcode");
    assert_eq!(exit_code(&err), 6);
}

#[test]
fn truncated_certificate_is_fatal() {
    let err = run_certificate(Cursor::new("X\n0\n"), &options(""))
        .expect_err("the right child is missing");
    assert_eq!(err.info().code, "unexpected-eof");
    assert_eq!(err.info().context.get("boxcode").unwrap(), "1");
}

#[test]
fn depth_ceiling_is_enforced() {
    let opts = DriverOptions {
        root: String::new(),
        max_depth: 2,
    };
    let err = run_certificate(Cursor::new("X\nX\nX\nX\n"), &opts).expect_err("tree too deep");
    assert_eq!(err.info().code, "depth-exceeded");
}

#[test]
fn unprovable_leaf_aborts_with_its_boxcode() {
    // The root box straddles |lox_sqrt| = 1, so test '0' cannot certify.
    let err = run_certificate(Cursor::new("0\n"), &options("")).expect_err("inconclusive leaf");
    assert!(matches!(err, CuspError::Predicate(_)));
    assert_eq!(err.info().code, "uncertified-inequality");
    assert_eq!(err.info().context.get("boxcode").unwrap(), "");
    assert_eq!(exit_code(&err), 3);
}

#[test]
fn killer_word_on_the_root_box_cannot_certify() {
    let err = run_certificate(Cursor::new("K(g)\n"), &options("")).expect_err("inconclusive");
    assert!(matches!(err, CuspError::Predicate(_)));
    assert_eq!(exit_code(&err), 3);
}

#[test]
fn negative_area_has_its_own_exit_class() {
    // Two early '0' digits push Im(lattice) certifiably negative.
    let root = format!("{}{}", "000000", "011111");
    let err = run_certificate(Cursor::new("6\n"), &options(&root)).expect_err("negative area");
    assert!(matches!(err, CuspError::Area(_)));
    assert_eq!(err.info().code, "negative-lattice-im");
    assert_eq!(exit_code(&err), 4);
}

#[test]
fn exit_codes_are_distinct_per_class() {
    use cusp_core::ErrorInfo;
    let classes = [
        CuspError::Io(ErrorInfo::new("x", "x")),
        CuspError::Certificate(ErrorInfo::new("x", "x")),
        CuspError::Predicate(ErrorInfo::new("x", "x")),
        CuspError::Area(ErrorInfo::new("x", "x")),
        CuspError::Stitch(ErrorInfo::new("x", "x")),
        CuspError::Boxcode(ErrorInfo::new("x", "x")),
        CuspError::Arithmetic(ErrorInfo::new("x", "x")),
    ];
    let mut codes: Vec<i32> = classes.iter().map(exit_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), classes.len());
    // Zero is reserved for success.
    assert!(codes.iter().all(|&code| code != 0));
}
