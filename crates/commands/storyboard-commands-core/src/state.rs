//! Sampled snapshot of one object's transform, appearance and flags.

use nalgebra::Rotation2;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::{CommandError, Result};
use crate::value::{Color, Origin, Vec2};

/// One sample, as produced by a scene graph or script at `time`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub time: f64,
    pub position: Vec2,
    pub scale: Vec2,
    /// Radians.
    pub rotation: f64,
    pub color: Color,
    /// In [0, 1].
    pub opacity: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    pub additive: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            time: 0.0,
            position: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            color: Color::WHITE,
            opacity: 1.0,
            flip_h: false,
            flip_v: false,
            additive: false,
        }
    }
}

impl State {
    /// Neutral state (unit scale, white, opaque) at `time`.
    pub fn at(time: f64) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_flags(mut self, flip_h: bool, flip_v: bool, additive: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self.additive = additive;
        self
    }

    /// Fail on values that would poison the simplifier's geometry.
    pub fn validated(self) -> Result<Self> {
        if !self.time.is_finite() {
            return Err(CommandError::validation("time", self.time, "time must be finite"));
        }
        let checks = [
            ("position", self.position.iter().all(|c| c.is_finite())),
            ("scale", self.scale.iter().all(|c| c.is_finite())),
            ("rotation", self.rotation.is_finite()),
            ("color", self.color.is_finite()),
            ("opacity", self.opacity.is_finite()),
        ];
        for (field, finite) in checks {
            if !finite {
                return Err(CommandError::validation(
                    field,
                    self.time,
                    "value must be finite",
                ));
            }
        }
        Ok(self)
    }

    /// Whether anything of the object can be seen once values are rounded
    /// the way `config` will round the emitted commands.
    pub fn is_visible(&self, image_size: Vec2, origin: Origin, config: &GeneratorConfig) -> bool {
        if self.additive && config.round_color(self.color) == Color::BLACK {
            return false;
        }
        if config.round_opacity(self.opacity) <= 0.0 {
            return false;
        }
        let scale = config.round_scale(self.scale);
        if scale.x <= 0.0 || scale.y <= 0.0 {
            return false;
        }

        let size = image_size.component_mul(&scale);
        let anchor = origin.offset().component_mul(&size);
        let rotation = Rotation2::new(config.round_rotation(self.rotation));
        let position = config.round_position(self.position);

        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(size.x, 0.0),
            Vec2::new(0.0, size.y),
            Vec2::new(size.x, size.y),
        ];
        let mut min = Vec2::repeat(f64::INFINITY);
        let mut max = Vec2::repeat(f64::NEG_INFINITY);
        for corner in corners {
            let point = rotation * (corner - anchor) + position;
            min = min.inf(&point);
            max = max.sup(&point);
        }
        config.canvas.intersects(min, max)
    }
}
