mod analysis;
mod core;
mod sampler;
mod surface;

pub use analysis::{
    EdgeLengthEstimate, edge_length, estimate_edge_length, estimate_surface_area,
    integrate_surface_area, polyline_chord_length, surface_area,
};
pub use core::{BBox, Point3, Tolerance, Vec3};
pub use sampler::{
    InvalidParameterError, MIN_RESOLUTION, StripParams, SurfaceGrid, sample, sample_grid,
};
pub use surface::{MobiusSurface, Surface};

#[cfg(test)]
mod tests;
