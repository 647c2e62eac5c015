//! Interpolators used by keyframed channels.
//!
//! An [`Interpolator`] combines two endpoint values and an already-eased
//! progress into a value of the same type. Boolean "interpolators" are channel
//! policies rather than blends; flag channels need one for API uniformity.

pub mod functions;

pub use functions::unwrap_angle;

use crate::value::{Color, Quat, Vec2, Vec3};

/// Blend `a` towards `b` at eased progress `t`.
pub type Interpolator<V> = fn(&V, &V, f64) -> V;

pub fn scalar(a: &f64, b: &f64, t: f64) -> f64 {
    functions::lerp(*a, *b, t)
}

/// Radians, shortest path across the ±π seam.
pub fn angle(a: &f64, b: &f64, t: f64) -> f64 {
    functions::lerp_angle(*a, *b, t)
}

pub fn vec2(a: &Vec2, b: &Vec2, t: f64) -> Vec2 {
    functions::lerp_vec2(*a, *b, t)
}

pub fn vec3(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    functions::lerp_vec3(*a, *b, t)
}

pub fn quaternion(a: &Quat, b: &Quat, t: f64) -> Quat {
    functions::slerp_quat(a, b, t)
}

pub fn color(a: &Color, b: &Color, t: f64) -> Color {
    functions::lerp_color(*a, *b, t)
}

/// Always the left value.
pub fn bool_from(a: &bool, _b: &bool, _t: f64) -> bool {
    *a
}

/// Always the right value.
pub fn bool_to(_a: &bool, b: &bool, _t: f64) -> bool {
    *b
}

pub fn bool_or(a: &bool, b: &bool, _t: f64) -> bool {
    *a || *b
}

pub fn bool_and(a: &bool, b: &bool, _t: f64) -> bool {
    *a && *b
}
