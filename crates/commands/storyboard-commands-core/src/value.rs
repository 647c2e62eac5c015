//! Value types carried by animated channels.

use serde::{Deserialize, Serialize};

pub type Vec2 = nalgebra::Vector2<f64>;
pub type Vec3 = nalgebra::Vector3<f64>;
pub type Vec4 = nalgebra::Vector4<f64>;
pub type Quat = nalgebra::UnitQuaternion<f64>;

/// Position a sink starts from before any move command applies.
#[inline]
pub fn default_initial_position() -> Vec2 {
    Vec2::new(320.0, 240.0)
}

/// RGB color with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 0..=255 channel values.
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Channels expressed in 0..255 space.
    #[inline]
    pub fn to_byte_space(self) -> Vec3 {
        Vec3::new(self.r * 255.0, self.g * 255.0, self.b * 255.0)
    }

    #[inline]
    pub fn from_byte_space(v: Vec3) -> Self {
        Self::new(v.x / 255.0, v.y / 255.0, v.z / 255.0)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Anchor point of a sprite relative to its bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    #[default]
    Centre,
    CentreRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

impl Origin {
    /// Anchor location as a fraction of the bitmap size.
    #[inline]
    pub fn offset(self) -> Vec2 {
        match self {
            Origin::TopLeft => Vec2::new(0.0, 0.0),
            Origin::TopCentre => Vec2::new(0.5, 0.0),
            Origin::TopRight => Vec2::new(1.0, 0.0),
            Origin::CentreLeft => Vec2::new(0.0, 0.5),
            Origin::Centre => Vec2::new(0.5, 0.5),
            Origin::CentreRight => Vec2::new(1.0, 0.5),
            Origin::BottomLeft => Vec2::new(0.0, 1.0),
            Origin::BottomCentre => Vec2::new(0.5, 1.0),
            Origin::BottomRight => Vec2::new(1.0, 1.0),
        }
    }
}
