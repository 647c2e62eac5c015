//! Generator configuration: simplification tolerances and rounding precision.

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};
use crate::value::{Color, Vec2};

/// Area in which a sprite can be seen. Anything fully outside is invisible.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            left: -107.0,
            top: 0.0,
            right: 747.0,
            bottom: 480.0,
        }
    }
}

impl CanvasBounds {
    /// True when the axis-aligned box `[min, max]` touches the canvas.
    #[inline]
    pub fn intersects(&self, min: Vec2, max: Vec2) -> bool {
        max.x >= self.left && min.x <= self.right && max.y >= self.top && min.y <= self.bottom
    }
}

/// Largest rounding precision an `f64` can represent meaningfully.
pub const MAX_DECIMALS: u32 = 15;

/// Per-channel tolerances and decimal precision for one generator.
///
/// Tolerances are expressed in comparison space: pixels for position,
/// effective pixels (scale times bitmap size) for scale, degrees for rotation,
/// 0..255 units for color and percent for opacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub position_tolerance: f64,
    pub scale_tolerance: f64,
    pub rotation_tolerance: f64,
    pub color_tolerance: f64,
    pub opacity_tolerance: f64,

    pub position_decimals: u32,
    pub scale_decimals: u32,
    pub rotation_decimals: u32,
    /// Applied in 0..255 space.
    pub color_decimals: u32,
    pub opacity_decimals: u32,

    pub canvas: CanvasBounds,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            position_tolerance: 1.0,
            scale_tolerance: 0.5,
            rotation_tolerance: 0.25,
            color_tolerance: 2.0,
            opacity_tolerance: 1.0,
            position_decimals: 1,
            scale_decimals: 3,
            rotation_decimals: 5,
            color_decimals: 0,
            opacity_decimals: 1,
            canvas: CanvasBounds::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tolerances the simplifier cannot use and precisions rounding
    /// cannot honour.
    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("position_tolerance", self.position_tolerance),
            ("scale_tolerance", self.scale_tolerance),
            ("rotation_tolerance", self.rotation_tolerance),
            ("color_tolerance", self.color_tolerance),
            ("opacity_tolerance", self.opacity_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(CommandError::configuration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let decimals = [
            ("position_decimals", self.position_decimals),
            ("scale_decimals", self.scale_decimals),
            ("rotation_decimals", self.rotation_decimals),
            ("color_decimals", self.color_decimals),
            ("opacity_decimals", self.opacity_decimals),
        ];
        for (name, value) in decimals {
            if value > MAX_DECIMALS {
                return Err(CommandError::configuration(format!(
                    "{name} must be at most {MAX_DECIMALS}, got {value}"
                )));
            }
        }
        let canvas = &self.canvas;
        if !(canvas.left <= canvas.right && canvas.top <= canvas.bottom) {
            return Err(CommandError::configuration(format!(
                "canvas bounds are inverted: {canvas:?}"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn round_position(&self, position: Vec2) -> Vec2 {
        position.map(|c| round_to(c, self.position_decimals))
    }

    #[inline]
    pub fn round_scale(&self, scale: Vec2) -> Vec2 {
        scale.map(|c| round_to(c, self.scale_decimals))
    }

    #[inline]
    pub fn round_rotation(&self, rotation: f64) -> f64 {
        round_to(rotation, self.rotation_decimals)
    }

    #[inline]
    pub fn round_color(&self, color: Color) -> Color {
        Color::from_byte_space(
            color
                .to_byte_space()
                .map(|c| round_to(c, self.color_decimals)),
        )
    }

    #[inline]
    pub fn round_opacity(&self, opacity: f64) -> f64 {
        round_to(opacity, self.opacity_decimals)
    }
}

/// Round half away from zero to `decimals` fractional digits.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
