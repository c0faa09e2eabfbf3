use cusp_box::LatticeRect;

#[test]
fn initial_rect_covers_the_parallelogram() {
    let rect = LatticeRect::initial();
    assert_eq!(rect.depth(), 0);
    assert_eq!(*rect.center_digits(), [0.0, 0.0]);
    assert_eq!(*rect.size_digits(), [8.0, 8.0]);
    let (center, _) = rect.center_jet().enclosure();
    assert_eq!(center.re, 0.0);
    assert_eq!(center.im, 0.0);
    // Radius re = 8·2^(-1/2), im = 8, inflated upward.
    assert!(rect.radius_ub() >= (8.0f64 * 0.5f64.sqrt()).hypot(8.0));
}

#[test]
fn children_alternate_coordinates_and_nest() {
    let root = LatticeRect::initial();
    let left = root.child(0);
    let right = root.child(1);
    assert_eq!(left.depth(), 1);
    // First subdivision halves coordinate 0.
    assert_eq!(*left.size_digits(), [4.0, 8.0]);
    assert_eq!(*left.center_digits(), [-4.0, 0.0]);
    assert_eq!(*right.center_digits(), [4.0, 0.0]);
    // Second subdivision halves coordinate 1.
    let grand = left.child(1);
    assert_eq!(*grand.size_digits(), [4.0, 4.0]);
    assert_eq!(*grand.center_digits(), [-4.0, 4.0]);
    // Digit intervals nest.
    for i in 0..2 {
        assert!(grand.center_digits()[i] - grand.size_digits()[i]
            >= root.center_digits()[i] - root.size_digits()[i]);
        assert!(grand.center_digits()[i] + grand.size_digits()[i]
            <= root.center_digits()[i] + root.size_digits()[i]);
    }
}

#[test]
fn one_sided_accessors_bracket_the_rect() {
    let rect = LatticeRect::initial().child(1).child(1).child(0);
    let scale_re = LatticeRect::axis_scale(1);
    let ideal_re_lo = scale_re * (rect.center_digits()[1] - rect.size_digits()[1]);
    let ideal_re_hi = scale_re * (rect.center_digits()[1] + rect.size_digits()[1]);
    let ideal_im_lo = rect.center_digits()[0] - rect.size_digits()[0];
    let ideal_im_hi = rect.center_digits()[0] + rect.size_digits()[0];
    // The accessors round outward of the ideal rectangle (the scale
    // product rounding is far below the slack they carry).
    assert!(rect.re_lb() <= ideal_re_lo + 1e-9);
    assert!(rect.re_ub() >= ideal_re_hi - 1e-9);
    assert!(rect.im_lb() <= ideal_im_lo + 1e-9);
    assert!(rect.im_ub() >= ideal_im_hi - 1e-9);
    assert!(rect.re_lb() <= rect.re_ub());
    assert!(rect.im_lb() <= rect.im_ub());
}
