use std::cmp::{Ordering, Eq, PartialOrd, PartialEq, Ord};

use crate::Float;

/// Coordinate in image space. `row` grows downwards, `column` to the right.
#[derive(Debug, Clone, Copy)]
pub struct Point<T> where T: PartialOrd + PartialEq {
    pub row: T,
    pub column: T
}

impl<T> PartialEq for Point<T> where T: PartialOrd {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl<T> Eq for Point<T> where T: PartialEq + PartialOrd {

}

impl<T> Ord for Point<T> where T: PartialOrd + PartialEq {
    fn cmp(&self, other: &Self) -> Ordering {
        let row_cmp = self.row.partial_cmp(&other.row);
        let column_cmp = self.column.partial_cmp(&other.column);

        match (row_cmp, column_cmp) {
            (Some(Ordering::Less), _) => Ordering::Less,
            (Some(Ordering::Greater), _) => Ordering::Greater,
            (Some(Ordering::Equal), Some(Ordering::Less)) => Ordering::Less,
            (Some(Ordering::Equal), Some(Ordering::Greater)) => Ordering::Greater,
            (Some(Ordering::Equal), Some(Ordering::Equal)) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), _) => Ordering::Greater,
            (None, None) => Ordering::Equal
        }
    }
}

impl<T> PartialOrd for Point<T> where T: PartialOrd + PartialEq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Point<T> where T: PartialOrd + PartialEq {
    pub fn new(row: T, column: T) -> Point<T> {
        Point { row, column }
    }
}

impl Point<usize> {
    pub fn to_float(&self) -> Point<Float> {
        Point::new(self.row as Float, self.column as Float)
    }
}

impl Point<Float> {
    pub fn distance_to(&self, other: &Point<Float>) -> Float {
        ((self.row - other.row).powi(2) + (self.column - other.column).powi(2)).sqrt()
    }
}
