use std::f64::consts::TAU;

use super::core::{BBox, Point3};
use super::surface::{MobiusSurface, Surface};

/// Smallest grid that still spans both parametric axes.
pub const MIN_RESOLUTION: usize = 2;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("radius must be finite and > 0, got {0}")]
    NonPositiveRadius(f64),
    #[error("width must be finite and > 0, got {0}")]
    NonPositiveWidth(f64),
    #[error("resolution must be at least {MIN_RESOLUTION}, got {0}")]
    ResolutionTooLow(usize),
}

/// The validated parameter triple driving every computation.
///
/// `resolution` is the sample count along *each* parametric axis: the grid is
/// always resolution × resolution, even though the u and v intervals differ
/// in physical length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripParams {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl StripParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, InvalidParameterError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(InvalidParameterError::NonPositiveRadius(radius));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(InvalidParameterError::NonPositiveWidth(width));
        }
        if resolution < MIN_RESOLUTION {
            return Err(InvalidParameterError::ResolutionTooLow(resolution));
        }
        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Angular sample `u_j = 2π·j/(n-1)`, endpoint inclusive on both sides.
    #[must_use]
    pub fn u_at(&self, j: usize) -> f64 {
        TAU * (j as f64) / ((self.resolution - 1) as f64)
    }

    /// Width sample `v_i = w·(i/(n-1) - 0.5)`, spanning [-w/2, w/2] inclusive.
    #[must_use]
    pub fn v_at(&self, i: usize) -> f64 {
        self.width * ((i as f64) / ((self.resolution - 1) as f64) - 0.5)
    }

    /// Integration step along u.
    #[must_use]
    pub fn du(&self) -> f64 {
        TAU / ((self.resolution - 1) as f64)
    }

    /// Integration step along v.
    #[must_use]
    pub fn dv(&self) -> f64 {
        self.width / ((self.resolution - 1) as f64)
    }
}

impl Default for StripParams {
    /// The reference configuration: R = 3.0, w = 1.0, n = 100.
    fn default() -> Self {
        Self {
            radius: 3.0,
            width: 1.0,
            resolution: 100,
        }
    }
}

/// A dense n×n sampling of the strip, row-major with the v index outermost:
/// entry `(i, j)` is `S(u_j, v_i)`. Row 0 is the lower boundary rail
/// (v = -w/2), row n-1 the upper rail (v = +w/2).
///
/// The grid is a transient value object: recomputed in full whenever the
/// parameters change, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    resolution: usize,
    points: Vec<Point3>,
}

impl SurfaceGrid {
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        self.points[i * self.resolution + j]
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// The i-th v-row (all u samples at a fixed v).
    #[must_use]
    pub fn row(&self, i: usize) -> &[Point3] {
        let n = self.resolution;
        &self.points[i * n..(i + 1) * n]
    }

    /// The two boundary rails (v = -w/2 and v = +w/2) as point slices.
    #[must_use]
    pub fn boundary_rows(&self) -> (&[Point3], &[Point3]) {
        (self.row(0), self.row(self.resolution - 1))
    }

    /// Axis-aligned bounds of the sampled points, for viewport framing.
    #[must_use]
    pub fn bounds(&self) -> BBox {
        BBox::from_points(&self.points)
            .unwrap_or_else(|| BBox::new(Point3::ORIGIN, Point3::ORIGIN))
    }

    /// Split into the three parallel coordinate arrays renderers consume.
    #[must_use]
    pub fn coordinate_arrays(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.points.len());
        let mut ys = Vec::with_capacity(self.points.len());
        let mut zs = Vec::with_capacity(self.points.len());
        for p in &self.points {
            xs.push(p.x);
            ys.push(p.y);
            zs.push(p.z);
        }
        (xs, ys, zs)
    }
}

/// Sample the strip surface over the full parametric domain.
///
/// Validation already happened when `params` was constructed, so this cannot
/// fail. Deterministic: identical parameters produce bit-identical grids.
#[must_use]
pub fn sample_grid(params: &StripParams) -> SurfaceGrid {
    let surface = MobiusSurface::from_params(params);
    let n = params.resolution;

    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        let v = params.v_at(i);
        for j in 0..n {
            points.push(surface.point_at(params.u_at(j), v));
        }
    }

    SurfaceGrid {
        resolution: n,
        points,
    }
}

/// Validate a raw parameter triple and sample it in one step.
pub fn sample(
    radius: f64,
    width: f64,
    resolution: usize,
) -> Result<SurfaceGrid, InvalidParameterError> {
    let params = StripParams::new(radius, width, resolution)?;
    Ok(sample_grid(&params))
}
