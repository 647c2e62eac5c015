//! Interpolation helpers:
//! - lerp for scalars and vectors (component-wise)
//! - shortest-path angle lerp
//! - quaternion SLERP
//! - color lerp

use std::f64::consts::{PI, TAU};

use crate::value::{Color, Quat, Vec2, Vec3};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Signed difference `b - a` wrapped into (-π, π].
#[inline]
pub fn angle_delta(a: f64, b: f64) -> f64 {
    let mut delta = (b - a) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    delta
}

/// Angle lerp along the shortest arc. The result is not re-wrapped.
#[inline]
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    a + angle_delta(a, b) * t
}

/// Spherical linear interpolation.
#[inline]
pub fn slerp_quat(a: &Quat, b: &Quat, t: f64) -> Quat {
    // nalgebra returns None only for antipodal inputs; fall back to nlerp there.
    a.try_slerp(b, t, 1.0e-9).unwrap_or_else(|| a.nlerp(b, t))
}

#[inline]
pub fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    Color::new(lerp(a.r, b.r, t), lerp(a.g, b.g, t), lerp(a.b, b.b, t))
}

/// Shift `angle` by whole turns so it lands closest to `previous`.
///
/// Producers that derive rotation from `atan2` use this to keep a channel
/// continuous across samples; without it the simplifier sees a 2π jump.
#[inline]
pub fn unwrap_angle(previous: Option<f64>, angle: f64) -> f64 {
    match previous {
        Some(previous) => previous + angle_delta(previous, angle),
        None => angle,
    }
}
