use serde::{Deserialize, Serialize};

/// The rectangular town grid.
///
/// Cells are addressed by inclusive integer coordinates with the origin in
/// the top-left corner: `x` runs over `[0, width - 1]` and `y` over
/// `[0, height - 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    pub height: i32,
    pub width: i32,
}

impl Town {
    /// The total number of cells in the town.
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }
}

/// A single cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
