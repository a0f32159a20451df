use egui::Pos2;
use serde::{Deserialize, Serialize};

/// An integer coordinate in buffer-pixel space.
///
/// Raw pointer positions arrive as [`Pos2`] in a continuous coordinate space
/// and are floored exactly once, at capture time, before any rasterization
/// sees them. Everything below the tool layer works in `Point`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floor a raw pointer position to the device pixel it falls in.
    pub fn from_pos(pos: Pos2) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
