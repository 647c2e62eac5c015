//! Interfaces implemented by the host: command targets and bitmap metadata.

use crate::value::{default_initial_position, Color, Origin, Vec2};

/// The sprite/animation track that receives compiled commands.
///
/// Flag commands enable the flag over `[start_time, end_time]` and disable it
/// afterwards.
pub trait CommandSink {
    /// Key for the bitmap size lookup.
    fn texture_path(&self) -> &str;

    fn origin(&self) -> Origin;

    /// Position held before the first move command.
    fn initial_position(&self) -> Vec2 {
        default_initial_position()
    }

    fn move_position(&mut self, start_time: f64, end_time: f64, start: Vec2, end: Vec2);
    fn move_x(&mut self, start_time: f64, end_time: f64, start: f64, end: f64);
    fn move_y(&mut self, start_time: f64, end_time: f64, start: f64, end: f64);
    fn scale(&mut self, start_time: f64, end_time: f64, start: f64, end: f64);
    fn scale_vec(&mut self, start_time: f64, end_time: f64, start: Vec2, end: Vec2);
    fn rotate(&mut self, start_time: f64, end_time: f64, start: f64, end: f64);
    fn color(&mut self, start_time: f64, end_time: f64, start: Color, end: Color);
    fn fade(&mut self, start_time: f64, end_time: f64, start: f64, end: f64);
    fn flip_h(&mut self, start_time: f64, end_time: f64);
    fn flip_v(&mut self, start_time: f64, end_time: f64);
    fn additive(&mut self, start_time: f64, end_time: f64);

    /// Earliest command time, `None` before any command.
    fn start_time(&self) -> Option<f64>;

    /// Latest command time, `None` before any command.
    fn end_time(&self) -> Option<f64>;
}

/// Pixel dimensions of the bitmap behind a texture path.
pub trait BitmapSizes {
    fn bitmap_size(&self, texture_path: &str) -> Option<Vec2>;
}

impl BitmapSizes for hashbrown::HashMap<String, Vec2> {
    fn bitmap_size(&self, texture_path: &str) -> Option<Vec2> {
        self.get(texture_path).copied()
    }
}

impl BitmapSizes for std::collections::HashMap<String, Vec2> {
    fn bitmap_size(&self, texture_path: &str) -> Option<Vec2> {
        self.get(texture_path).copied()
    }
}
