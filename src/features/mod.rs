use crate::features::geometry::point::Point;
use crate::Float;

pub mod geometry;

/// Externally detected feature, read-only input to the descriptor pipeline.
///
/// `angle` is the dominant orientation in degrees, [0, 360), measured towards
/// increasing rows from the column axis. Content rotated clockwise by some
/// angle (rows growing downwards) yields keypoints whose angle grows by the
/// same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoint {
    pub origin: Point<usize>,
    pub angle: Float
}

impl KeyPoint {
    pub fn new(row: usize, column: usize, angle: Float) -> KeyPoint {
        KeyPoint { origin: Point::new(row, column), angle }
    }
}
