use cusp_core::complex::Complex;
use cusp_core::jet::Jet;
use cusp_core::roundoff;

// The anomaly flags are process-wide and never reset, so this file holds
// a single test and shares its binary with nothing else.
#[test]
fn overflow_is_recorded_and_sweeps_dirty() {
    assert!(roundoff::sweep_ok());

    let huge = Jet::constant(Complex::new(f64::MAX, 0.0));
    let product = huge * huge;
    assert!(product.abs_ub().is_infinite());

    assert!(roundoff::overflow_seen());
    assert!(!roundoff::sweep_ok());
}
