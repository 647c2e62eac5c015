//! Compiled commands and an in-memory sink that records them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sink::CommandSink;
use crate::value::{default_initial_position, Color, Origin, Vec2};

/// One emitted command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Move {
        start_time: f64,
        end_time: f64,
        start: Vec2,
        end: Vec2,
    },
    MoveX {
        start_time: f64,
        end_time: f64,
        start: f64,
        end: f64,
    },
    MoveY {
        start_time: f64,
        end_time: f64,
        start: f64,
        end: f64,
    },
    Scale {
        start_time: f64,
        end_time: f64,
        start: f64,
        end: f64,
    },
    ScaleVec {
        start_time: f64,
        end_time: f64,
        start: Vec2,
        end: Vec2,
    },
    Rotate {
        start_time: f64,
        end_time: f64,
        start: f64,
        end: f64,
    },
    Color {
        start_time: f64,
        end_time: f64,
        start: Color,
        end: Color,
    },
    Fade {
        start_time: f64,
        end_time: f64,
        start: f64,
        end: f64,
    },
    FlipH {
        start_time: f64,
        end_time: f64,
    },
    FlipV {
        start_time: f64,
        end_time: f64,
    },
    Additive {
        start_time: f64,
        end_time: f64,
    },
}

impl Command {
    pub fn time_range(&self) -> (f64, f64) {
        match *self {
            Command::Move {
                start_time,
                end_time,
                ..
            }
            | Command::MoveX {
                start_time,
                end_time,
                ..
            }
            | Command::MoveY {
                start_time,
                end_time,
                ..
            }
            | Command::Scale {
                start_time,
                end_time,
                ..
            }
            | Command::ScaleVec {
                start_time,
                end_time,
                ..
            }
            | Command::Rotate {
                start_time,
                end_time,
                ..
            }
            | Command::Color {
                start_time,
                end_time,
                ..
            }
            | Command::Fade {
                start_time,
                end_time,
                ..
            }
            | Command::FlipH {
                start_time,
                end_time,
            }
            | Command::FlipV {
                start_time,
                end_time,
            }
            | Command::Additive {
                start_time,
                end_time,
            } => (start_time, end_time),
        }
    }
}

/// Sink that keeps every command in emission order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandLog {
    pub texture_path: String,
    pub origin: Origin,
    pub initial_position: Vec2,
    pub commands: Vec<Command>,
}

impl CommandLog {
    pub fn new(texture_path: impl Into<String>, origin: Origin) -> Self {
        Self {
            texture_path: texture_path.into(),
            origin,
            initial_position: default_initial_position(),
            commands: Vec::new(),
        }
    }

    pub fn with_initial_position(mut self, position: Vec2) -> Self {
        self.initial_position = position;
        self
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CommandSink for CommandLog {
    fn texture_path(&self) -> &str {
        &self.texture_path
    }

    fn origin(&self) -> Origin {
        self.origin
    }

    fn initial_position(&self) -> Vec2 {
        self.initial_position
    }

    fn move_position(&mut self, start_time: f64, end_time: f64, start: Vec2, end: Vec2) {
        self.commands.push(Command::Move {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn move_x(&mut self, start_time: f64, end_time: f64, start: f64, end: f64) {
        self.commands.push(Command::MoveX {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn move_y(&mut self, start_time: f64, end_time: f64, start: f64, end: f64) {
        self.commands.push(Command::MoveY {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn scale(&mut self, start_time: f64, end_time: f64, start: f64, end: f64) {
        self.commands.push(Command::Scale {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn scale_vec(&mut self, start_time: f64, end_time: f64, start: Vec2, end: Vec2) {
        self.commands.push(Command::ScaleVec {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn rotate(&mut self, start_time: f64, end_time: f64, start: f64, end: f64) {
        self.commands.push(Command::Rotate {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn color(&mut self, start_time: f64, end_time: f64, start: Color, end: Color) {
        self.commands.push(Command::Color {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn fade(&mut self, start_time: f64, end_time: f64, start: f64, end: f64) {
        self.commands.push(Command::Fade {
            start_time,
            end_time,
            start,
            end,
        });
    }

    fn flip_h(&mut self, start_time: f64, end_time: f64) {
        self.commands.push(Command::FlipH {
            start_time,
            end_time,
        });
    }

    fn flip_v(&mut self, start_time: f64, end_time: f64) {
        self.commands.push(Command::FlipV {
            start_time,
            end_time,
        });
    }

    fn additive(&mut self, start_time: f64, end_time: f64) {
        self.commands.push(Command::Additive {
            start_time,
            end_time,
        });
    }

    fn start_time(&self) -> Option<f64> {
        self.commands
            .iter()
            .map(|c| c.time_range().0)
            .reduce(f64::min)
    }

    fn end_time(&self) -> Option<f64> {
        self.commands
            .iter()
            .map(|c| c.time_range().1)
            .reduce(f64::max)
    }
}
