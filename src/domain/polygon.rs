use super::Point;
use std::fmt;

/// Smallest vertex count a record may declare
pub const MIN_VERTICES: usize = 3;

/// A closed polygon given by its ordered vertices
///
/// Always holds at least [`MIN_VERTICES`] points. Equality compares the
/// vertex sequence as written, so a rotated copy is a different polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than three vertices
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_VERTICES {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn has_even_vertices(&self) -> bool {
        self.points.len() % 2 == 0
    }

    /// Twice the signed area (shoelace sum)
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn doubled_signed_area(&self) -> i128 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
            })
            .sum()
    }

    /// Unsigned area via the shoelace formula
    pub fn area(&self) -> f64 {
        self.doubled_signed_area().abs() as f64 / 2.0
    }

    /// Four vertices with every pair of consecutive edges at a right angle
    pub fn is_rectangle(&self) -> bool {
        if self.points.len() != 4 {
            return false;
        }

        let edges: Vec<(i128, i128)> = (0..4)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % 4];
                (
                    i128::from(b.x) - i128::from(a.x),
                    i128::from(b.y) - i128::from(a.y),
                )
            })
            .collect();

        if edges.iter().any(|&(dx, dy)| dx == 0 && dy == 0) {
            return false;
        }

        (0..4).all(|i| {
            let (ax, ay) = edges[i];
            let (bx, by) = edges[(i + 1) % 4];
            ax * bx + ay * by == 0
        })
    }

    /// Full record line: declared count followed by the points
    pub fn to_record(&self) -> String {
        format!("{} {}", self.points.len(), self)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}
