use std::io::Cursor;

use cusp_verify::driver::{run_certificate, DriverOptions};

/// A root boxcode whose children certify cheaply: every axis is pinned
/// near zero except the lattice imaginary part, which two early '0'
/// digits push certifiably negative.
fn quiet_root() -> String {
    let mut code = String::from("000000");
    code.push_str("011111");
    for _ in 0..8 {
        code.push_str("111111");
    }
    code
}

fn options(root: &str) -> DriverOptions {
    DriverOptions {
        root: root.to_owned(),
        ..DriverOptions::default()
    }
}

#[test]
fn branch_certificate_verifies_both_children() {
    // Branch into '0' and '1'; test '0' certifies |lox_sqrt| < 1 on the
    // left child, test '1' certifies Im(lattice) < 0 on the right.
    let summary = run_certificate(Cursor::new("X\n0\n1\n"), &options(&quiet_root()))
        .expect("both leaves certify");
    assert_eq!(summary.verified_leaves, 2);
    assert_eq!(summary.instructions, 3);
    assert_eq!(summary.root, quiet_root());
}

#[test]
fn nested_branches_count_only_leaves() {
    let summary = run_certificate(Cursor::new("X\nX\n0\n0\n1\n"), &options(&quiet_root()))
        .expect("all three leaves certify");
    assert_eq!(summary.verified_leaves, 3);
    assert_eq!(summary.instructions, 5);
}

#[test]
fn summary_digest_is_deterministic() {
    let first = run_certificate(Cursor::new("X\n0\n1\n"), &options(&quiet_root())).unwrap();
    let second = run_certificate(Cursor::new("X\n0\n1\n"), &options(&quiet_root())).unwrap();
    assert_eq!(first.certificate_sha256, second.certificate_sha256);
    assert_eq!(first.certificate_sha256.len(), 64);
}
