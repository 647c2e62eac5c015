//! Easing functions.
//!
//! Every easing maps normalized progress `x` in [0, 1] to eased progress.
//! Results are not clamped: back and elastic styles overshoot on purpose.
//! Out and in-out variants are derived from the in variant through
//! [`reverse`] and [`to_in_out`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Named easing attached to a keyframe. Applies to the segment leading into it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    Step,
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticOutHalf,
    ElasticOutQuarter,
    ElasticInOut,
}

impl Easing {
    /// Evaluate the easing at `x`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Step => step(x),
            Easing::Linear => linear(x),
            Easing::QuadIn => quad_in(x),
            Easing::QuadOut => reverse(quad_in, x),
            Easing::QuadInOut => to_in_out(quad_in, x),
            Easing::CubicIn => cubic_in(x),
            Easing::CubicOut => reverse(cubic_in, x),
            Easing::CubicInOut => to_in_out(cubic_in, x),
            Easing::QuartIn => quart_in(x),
            Easing::QuartOut => reverse(quart_in, x),
            Easing::QuartInOut => to_in_out(quart_in, x),
            Easing::QuintIn => quint_in(x),
            Easing::QuintOut => reverse(quint_in, x),
            Easing::QuintInOut => to_in_out(quint_in, x),
            Easing::SineIn => sine_in(x),
            Easing::SineOut => reverse(sine_in, x),
            Easing::SineInOut => to_in_out(sine_in, x),
            Easing::ExpoIn => expo_in(x),
            Easing::ExpoOut => reverse(expo_in, x),
            Easing::ExpoInOut => to_in_out(expo_in, x),
            Easing::CircIn => circ_in(x),
            Easing::CircOut => reverse(circ_in, x),
            Easing::CircInOut => to_in_out(circ_in, x),
            Easing::BackIn => back_in(x),
            Easing::BackOut => reverse(back_in, x),
            Easing::BackInOut => to_in_out(back_in, x),
            Easing::BounceIn => reverse(bounce_out, x),
            Easing::BounceOut => bounce_out(x),
            Easing::BounceInOut => to_in_out(|x| reverse(bounce_out, x), x),
            Easing::ElasticIn => reverse(elastic_out, x),
            Easing::ElasticOut => elastic_out(x),
            Easing::ElasticOutHalf => elastic_out_half(x),
            Easing::ElasticOutQuarter => elastic_out_quarter(x),
            Easing::ElasticInOut => to_in_out(|x| reverse(elastic_out, x), x),
        }
    }

    /// Stable lowercase name, for logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Step => "step",
            Easing::Linear => "linear",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartInOut => "quart_in_out",
            Easing::QuintIn => "quint_in",
            Easing::QuintOut => "quint_out",
            Easing::QuintInOut => "quint_in_out",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoInOut => "expo_in_out",
            Easing::CircIn => "circ_in",
            Easing::CircOut => "circ_out",
            Easing::CircInOut => "circ_in_out",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::BackInOut => "back_in_out",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
            Easing::BounceInOut => "bounce_in_out",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticOutHalf => "elastic_out_half",
            Easing::ElasticOutQuarter => "elastic_out_quarter",
            Easing::ElasticInOut => "elastic_in_out",
        }
    }
}

/// Mirror an in-easing into its out counterpart: `1 - f(1 - x)`.
#[inline]
pub fn reverse(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    1.0 - f(1.0 - x)
}

/// Play `f` on the first half and its mirror on the second half.
#[inline]
pub fn to_in_out(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    if x < 0.5 {
        f(2.0 * x) / 2.0
    } else {
        1.0 - f(2.0 - 2.0 * x) / 2.0
    }
}

#[inline]
pub fn step(x: f64) -> f64 {
    if x >= 1.0 {
        1.0
    } else {
        0.0
    }
}

#[inline]
pub fn linear(x: f64) -> f64 {
    x
}

#[inline]
pub fn quad_in(x: f64) -> f64 {
    x * x
}

#[inline]
pub fn cubic_in(x: f64) -> f64 {
    x * x * x
}

#[inline]
pub fn quart_in(x: f64) -> f64 {
    x * x * x * x
}

#[inline]
pub fn quint_in(x: f64) -> f64 {
    x * x * x * x * x
}

#[inline]
pub fn sine_in(x: f64) -> f64 {
    1.0 - (x * PI / 2.0).cos()
}

#[inline]
pub fn expo_in(x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (x - 1.0))
    }
}

#[inline]
pub fn circ_in(x: f64) -> f64 {
    1.0 - (1.0 - x * x).max(0.0).sqrt()
}

const BACK_OVERSHOOT: f64 = 1.70158;

#[inline]
pub fn back_in(x: f64) -> f64 {
    x * x * ((BACK_OVERSHOOT + 1.0) * x - BACK_OVERSHOOT)
}

pub fn bounce_out(x: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if x < 1.0 / D {
        N * x * x
    } else if x < 2.0 / D {
        let x = x - 1.5 / D;
        N * x * x + 0.75
    } else if x < 2.5 / D {
        let x = x - 2.25 / D;
        N * x * x + 0.9375
    } else {
        let x = x - 2.625 / D;
        N * x * x + 0.984375
    }
}

#[inline]
fn elastic_out_scaled(x: f64, frequency: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    2f64.powf(-10.0 * x) * ((frequency * x - 0.075) * (2.0 * PI) / 0.3).sin() + 1.0
}

#[inline]
pub fn elastic_out(x: f64) -> f64 {
    elastic_out_scaled(x, 1.0)
}

#[inline]
pub fn elastic_out_half(x: f64) -> f64 {
    elastic_out_scaled(x, 0.5)
}

#[inline]
pub fn elastic_out_quarter(x: f64) -> f64 {
    elastic_out_scaled(x, 0.25)
}
