//! Storyboard command compiler.
//!
//! Turns continuously varying object states (position, scale, rotation,
//! color, opacity, flags) sampled at arbitrary times into a minimal set of
//! timed interpolation commands for a keyframe/command based playback format.
//!
//! Data flow: a producer pushes [`State`] samples into a [`CommandGenerator`];
//! each field is tracked by its own [`KeyframedValue`]; visible spans are
//! simplified and committed; [`KeyframedValue::for_each_pair`] then drives
//! emission onto a [`CommandSink`].

pub mod commands;
pub mod config;
pub mod easing;
pub mod error;
pub mod generator;
pub mod interp;
pub mod keyframe;
pub mod keyframed;
pub mod sink;
pub mod state;
pub mod value;

// Re-exports for consumers
pub use commands::{Command, CommandLog};
pub use config::{CanvasBounds, GeneratorConfig};
pub use easing::Easing;
pub use error::{CommandError, Result};
pub use generator::{CommandGenerator, GenerateOptions};
pub use interp::{unwrap_angle, Interpolator};
pub use keyframe::Keyframe;
pub use keyframed::{KeyframedValue, PairOptions};
pub use sink::{BitmapSizes, CommandSink};
pub use state::State;
pub use value::{Color, Origin, Quat, Vec2, Vec3, Vec4};
