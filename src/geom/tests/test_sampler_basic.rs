use std::f64::consts::TAU;

use crate::geom::{
    InvalidParameterError, MIN_RESOLUTION, MobiusSurface, Point3, StripParams, Surface, Tolerance,
    sample, sample_grid,
};

#[test]
fn grid_is_deterministic() {
    let params = StripParams::default();
    let a = sample_grid(&params);
    let b = sample_grid(&params);
    assert_eq!(a, b);
}

#[test]
fn grid_is_row_major_with_v_outermost() {
    let params = StripParams::new(3.0, 1.0, 5).unwrap();
    let grid = sample_grid(&params);

    assert_eq!(grid.resolution(), 5);
    assert_eq!(grid.points().len(), 25);

    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(grid.point(i, j), grid.points()[i * 5 + j]);
        }
        assert_eq!(grid.row(i), &grid.points()[i * 5..(i + 1) * 5]);
    }
}

#[test]
fn rows_hold_u_samples_at_fixed_v() {
    let params = StripParams::new(2.0, 0.8, 7).unwrap();
    let grid = sample_grid(&params);
    let surface = MobiusSurface::from_params(&params);
    let tol = Tolerance::default_geom();

    for i in 0..7 {
        let v = params.v_at(i);
        for j in 0..7 {
            let expected = surface.point_at(params.u_at(j), v);
            assert!(tol.approx_eq_point3(grid.point(i, j), expected));
        }
    }
}

#[test]
fn samples_span_both_domains_inclusive() {
    let params = StripParams::new(3.0, 1.0, 10).unwrap();
    let tol = Tolerance::default_geom();

    assert_eq!(params.u_at(0), 0.0);
    assert!(tol.approx_eq_f64(params.u_at(9), TAU));
    assert!(tol.approx_eq_f64(params.v_at(0), -0.5));
    assert!(tol.approx_eq_f64(params.v_at(9), 0.5));
}

#[test]
fn boundary_rows_are_the_rails() {
    let params = StripParams::new(3.0, 1.0, 6).unwrap();
    let grid = sample_grid(&params);
    let (lower, upper) = grid.boundary_rows();

    assert_eq!(lower, grid.row(0));
    assert_eq!(upper, grid.row(5));

    let surface = MobiusSurface::from_params(&params);
    let tol = Tolerance::default_geom();
    assert!(tol.approx_eq_point3(lower[0], surface.point_at(0.0, -0.5)));
    assert!(tol.approx_eq_point3(upper[0], surface.point_at(0.0, 0.5)));
}

#[test]
fn corner_points_of_coarse_grid() {
    let grid = sample(3.0, 1.0, 4).unwrap();
    let tol = Tolerance::LOOSE;

    // (i, j) = (0, 0): u = 0 on the lower rail, ring radius R - w/2.
    assert!(tol.approx_eq_point3(grid.point(0, 0), Point3::new(2.5, 0.0, 0.0)));
    // (0, n-1): u = 2π on the lower rail coincides with the upper rail's
    // start under the half-twist identification.
    assert!(tol.approx_eq_point3(grid.point(0, 3), Point3::new(3.5, 0.0, 0.0)));
    assert!(tol.approx_eq_point3(grid.point(0, 3), grid.point(3, 0)));
}

#[test]
fn seam_columns_mirror_across_the_strip() {
    let params = StripParams::new(3.0, 1.0, 9).unwrap();
    let grid = sample_grid(&params);
    let n = grid.resolution();
    let tol = Tolerance::LOOSE;

    // Column u = 2π equals column u = 0 with the v axis reversed.
    for i in 0..n {
        assert!(tol.approx_eq_point3(grid.point(i, n - 1), grid.point(n - 1 - i, 0)));
    }
}

#[test]
fn bounds_cover_every_sample() {
    let grid = sample(3.0, 1.0, 30).unwrap();
    let bounds = grid.bounds();

    for p in grid.points() {
        assert!(p.x >= bounds.min.x && p.x <= bounds.max.x);
        assert!(p.y >= bounds.min.y && p.y <= bounds.max.y);
        assert!(p.z >= bounds.min.z && p.z <= bounds.max.z);
    }

    // The widest point sits at u = 0 on the upper rail: x = R + w/2.
    assert!(Tolerance::default_geom().approx_eq_f64(bounds.max.x, 3.5));
}

#[test]
fn coordinate_arrays_match_points() {
    let grid = sample(2.5, 0.6, 8).unwrap();
    let (xs, ys, zs) = grid.coordinate_arrays();

    assert_eq!(xs.len(), 64);
    assert_eq!(ys.len(), 64);
    assert_eq!(zs.len(), 64);
    for (k, p) in grid.points().iter().enumerate() {
        assert_eq!(xs[k], p.x);
        assert_eq!(ys[k], p.y);
        assert_eq!(zs[k], p.z);
    }
}

#[test]
fn rejects_invalid_parameter_triples() {
    assert!(matches!(
        sample(0.0, 1.0, 10),
        Err(InvalidParameterError::NonPositiveRadius(_))
    ));
    assert!(matches!(
        sample(3.0, -1.0, 10),
        Err(InvalidParameterError::NonPositiveWidth(_))
    ));
    assert!(matches!(
        sample(3.0, 1.0, 1),
        Err(InvalidParameterError::ResolutionTooLow(1))
    ));
    assert!(matches!(
        sample(f64::NAN, 1.0, 10),
        Err(InvalidParameterError::NonPositiveRadius(_))
    ));
    assert!(matches!(
        sample(3.0, f64::INFINITY, 10),
        Err(InvalidParameterError::NonPositiveWidth(_))
    ));

    // The smallest legal grid spans both axes with endpoints only.
    assert!(sample(3.0, 1.0, MIN_RESOLUTION).is_ok());
}

#[test]
fn default_params_match_reference_configuration() {
    let params = StripParams::default();
    assert_eq!(params.radius, 3.0);
    assert_eq!(params.width, 1.0);
    assert_eq!(params.resolution, 100);
}
