use std::f64::consts::TAU;

use super::core::{Point3, Tolerance, Vec3};
use super::sampler::{InvalidParameterError, StripParams};

fn wrap_param(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if !span.is_finite() || span == 0.0 {
        return start;
    }
    let mut t = (value - start) % span;
    if t < 0.0 {
        t += span;
    }
    start + t
}

/// A parametric surface over a rectangular (u, v) domain.
pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn is_u_closed(&self) -> bool {
        false
    }

    #[must_use]
    fn is_v_closed(&self) -> bool {
        false
    }

    /// First partial derivatives (∂S/∂u, ∂S/∂v) at a parametric point.
    ///
    /// The default implementation uses central finite differences on
    /// `point_at`; surfaces with closed-form derivatives should override it.
    #[must_use]
    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        let (u0, u1) = self.domain_u();
        let (v0, v1) = self.domain_v();

        let u_span = u1 - u0;
        let v_span = v1 - v0;

        let u = if self.is_u_closed() {
            wrap_param(u, u0, u1)
        } else {
            u.clamp(u0, u1)
        };

        let v = if self.is_v_closed() {
            wrap_param(v, v0, v1)
        } else {
            v.clamp(v0, v1)
        };

        let mut du = Vec3::ZERO;
        let mut dv = Vec3::ZERO;

        if u_span.is_finite() && u_span != 0.0 {
            let h = Tolerance::DERIVATIVE.relative_to(u_span);
            if h.is_finite() && h != 0.0 {
                let ua = if self.is_u_closed() { u - h } else { (u - h).max(u0) };
                let ub = if self.is_u_closed() { u + h } else { (u + h).min(u1) };

                if ua != ub {
                    let pa = self.point_at(ua, v);
                    let pb = self.point_at(ub, v);
                    du = pb.sub_point(pa).mul_scalar(1.0 / (ub - ua));
                }
            }
        }

        if v_span.is_finite() && v_span != 0.0 {
            let h = Tolerance::DERIVATIVE.relative_to(v_span);
            if h.is_finite() && h != 0.0 {
                let va = if self.is_v_closed() { v - h } else { (v - h).max(v0) };
                let vb = if self.is_v_closed() { v + h } else { (v + h).min(v1) };

                if va != vb {
                    let pa = self.point_at(u, va);
                    let pb = self.point_at(u, vb);
                    dv = pb.sub_point(pa).mul_scalar(1.0 / (vb - va));
                }
            }
        }

        (du, dv)
    }

    #[must_use]
    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3> {
        let (du, dv) = self.partial_derivatives_at(u, v);
        du.cross(dv).normalized()
    }
}

/// The Möbius strip as a parametric surface.
///
/// ```text
/// S(u, v) = ( (R + v·cos(u/2))·cos(u),
///             (R + v·cos(u/2))·sin(u),
///              v·sin(u/2) )
/// ```
///
/// with u ∈ [0, 2π] and v ∈ [-w/2, w/2]. `radius` is the distance from the
/// strip centerline to the twist axis, `width` the full strip width.
///
/// Note that the surface is not reported as u-closed: the continuous strip
/// identifies S(2π, v) with S(0, -v), which is a half-twist identification
/// rather than an ordinary seam, so parameter wrapping in u would pair the
/// wrong v values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    pub radius: f64,
    pub width: f64,
}

impl MobiusSurface {
    pub fn new(radius: f64, width: f64) -> Result<Self, InvalidParameterError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(InvalidParameterError::NonPositiveRadius(radius));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(InvalidParameterError::NonPositiveWidth(width));
        }
        Ok(Self { radius, width })
    }

    /// Build from an already-validated parameter triple.
    #[must_use]
    pub const fn from_params(params: &StripParams) -> Self {
        Self {
            radius: params.radius,
            width: params.width,
        }
    }

    /// The v coordinate of the lower boundary rail (v = -w/2).
    #[must_use]
    pub fn v_min(&self) -> f64 {
        -0.5 * self.width
    }

    /// The v coordinate of the upper boundary rail (v = +w/2).
    #[must_use]
    pub fn v_max(&self) -> f64 {
        0.5 * self.width
    }
}

impl Surface for MobiusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let half_u = 0.5 * u;
        let ring = self.radius + v * half_u.cos();
        Point3::new(ring * u.cos(), ring * u.sin(), v * half_u.sin())
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (self.v_min(), self.v_max())
    }

    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        let half_u = 0.5 * u;
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = half_u.sin_cos();
        let ring = self.radius + v * cos_half;

        // ∂S/∂u: the ring radius itself varies with u through cos(u/2).
        let du = Vec3::new(
            -0.5 * v * sin_half * cos_u - ring * sin_u,
            -0.5 * v * sin_half * sin_u + ring * cos_u,
            0.5 * v * cos_half,
        );

        // ∂S/∂v: direction across the strip at fixed u.
        let dv = Vec3::new(cos_half * cos_u, cos_half * sin_u, sin_half);

        (du, dv)
    }
}
