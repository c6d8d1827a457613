use std::f64::consts::PI;

use crate::geom::{
    MobiusSurface, StripParams, Surface, Tolerance, edge_length, estimate_edge_length,
    estimate_surface_area, surface_area,
};

fn relative_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs()
}

#[test]
fn area_element_on_centerline_equals_radius() {
    let strip = MobiusSurface::new(3.0, 1.0).unwrap();
    let tol = Tolerance::default_geom();

    for &u in &[0.0, 0.7, 1.3, PI, 4.2, 5.9] {
        let (du, dv) = strip.partial_derivatives_at(u, 0.0);
        assert!(tol.approx_eq_f64(du.cross(dv).length(), 3.0));
    }
}

#[test]
fn narrow_strip_area_approaches_annulus_band() {
    // As w → 0 the strip flattens onto its centerline circle and the area
    // approaches 2πRw.
    let area = surface_area(3.0, 0.1, 200).unwrap();
    assert!(relative_diff(area, 2.0 * PI * 3.0 * 0.1) < 1e-3);
}

#[test]
fn reference_configuration_area() {
    let area = estimate_surface_area(&StripParams::default());
    assert!(relative_diff(area, 18.8715) < 1e-3);
}

#[test]
fn area_is_positive_and_stable_under_refinement() {
    let coarse = surface_area(3.0, 1.0, 50).unwrap();
    let fine = surface_area(3.0, 1.0, 150).unwrap();

    assert!(coarse > 0.0);
    assert!(fine > 0.0);
    assert!(relative_diff(coarse, fine) < 1e-3);
}

#[test]
fn area_scales_with_radius_and_width() {
    let base = surface_area(3.0, 1.0, 100).unwrap();
    assert!(surface_area(4.0, 1.0, 100).unwrap() > base);
    assert!(surface_area(3.0, 1.5, 100).unwrap() > base);
}

#[test]
fn narrow_strip_edge_approaches_double_circumference() {
    // The single closed edge of a vanishing-width strip winds around the
    // centerline circle twice.
    let estimate = edge_length(3.0, 0.01, 400).unwrap();
    assert!(relative_diff(estimate.total, 4.0 * PI * 3.0) < 1e-3);
}

#[test]
fn stitch_chords_vanish_at_the_seam() {
    let estimate = estimate_edge_length(&StripParams::default());

    // The rails land back on each other up to sin/cos periodicity error.
    assert!(estimate.stitches[0] < 1e-9);
    assert!(estimate.stitches[1] < 1e-9);

    let tol = Tolerance::default_geom();
    assert!(tol.approx_eq_f64(
        estimate.total,
        estimate.lower_rail + estimate.upper_rail + estimate.stitches[0] + estimate.stitches[1]
    ));
}

#[test]
fn rails_have_equal_length_by_symmetry() {
    let estimate = estimate_edge_length(&StripParams::default());
    assert!(Tolerance::LOOSE.approx_eq_f64(estimate.lower_rail, estimate.upper_rail));
}

#[test]
fn chord_sums_do_not_shrink_under_refinement() {
    let coarse = edge_length(3.0, 1.0, 20).unwrap();
    let fine = edge_length(3.0, 1.0, 200).unwrap();

    assert!(coarse.total > 0.0);
    assert!(fine.total >= coarse.total - 1e-9);
}

#[test]
fn reference_configuration_edge_length() {
    let estimate = estimate_edge_length(&StripParams::default());
    assert!(relative_diff(estimate.total, 37.8252) < 1e-3);
}

#[test]
fn estimator_wrappers_propagate_validation_errors() {
    assert!(surface_area(0.0, 1.0, 100).is_err());
    assert!(surface_area(3.0, 0.0, 100).is_err());
    assert!(edge_length(3.0, 1.0, 0).is_err());
}
