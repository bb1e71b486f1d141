use crate::domain::{Point, Polygon};
use geo::{Rect, coord};

/// Minimal axis-aligned rectangle enclosing every vertex of a polygon set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    rect: Rect<i32>,
}

impl Frame {
    /// Fold the bounds over all vertices of all polygons
    ///
    /// Returns `None` when there are no polygons to enclose.
    pub fn from_polygons(polygons: &[Polygon]) -> Option<Self> {
        let mut points = polygons.iter().flat_map(|p| p.points().iter());
        let first = points.next()?;

        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Some(Self {
            rect: Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y }),
        })
    }

    pub fn min(&self) -> Point {
        let c = self.rect.min();
        Point::new(c.x, c.y)
    }

    pub fn max(&self) -> Point {
        let c = self.rect.max();
        Point::new(c.x, c.y)
    }

    /// Inside or on the boundary
    pub fn contains_point(&self, point: Point) -> bool {
        let min = self.rect.min();
        let max = self.rect.max();
        (min.x..=max.x).contains(&point.x) && (min.y..=max.y).contains(&point.y)
    }

    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.points().iter().all(|&p| self.contains_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(points: &[(i32, i32)]) -> Polygon {
        Polygon::new(points.iter().copied().map(Point::from).collect()).unwrap()
    }

    #[test]
    fn test_frame_from_polygons() {
        let polygons = vec![
            polygon(&[(1, 1), (3, 1), (3, 4)]),
            polygon(&[(-2, 5), (0, 7), (2, 6), (1, 2)]),
        ];
        let frame = Frame::from_polygons(&polygons).unwrap();

        assert_eq!(frame.min(), Point::new(-2, 1));
        assert_eq!(frame.max(), Point::new(3, 7));
    }

    #[test]
    fn test_frame_empty() {
        assert!(Frame::from_polygons(&[]).is_none());
    }

    #[test]
    fn test_frame_does_not_include_origin() {
        let polygons = vec![polygon(&[(5, 5), (6, 5), (6, 6)])];
        let frame = Frame::from_polygons(&polygons).unwrap();
        assert!(!frame.contains_point(Point::new(0, 0)));
    }

    #[test]
    fn test_contains_boundary_and_outside() {
        let polygons = vec![polygon(&[(0, 0), (0, 4), (4, 4), (4, 0)])];
        let frame = Frame::from_polygons(&polygons).unwrap();

        assert!(frame.contains_polygon(&polygon(&[(0, 0), (4, 4), (0, 4)])));
        assert!(frame.contains_polygon(&polygon(&[(1, 1), (2, 3), (3, 1)])));
        assert!(!frame.contains_polygon(&polygon(&[(1, 1), (2, 5), (3, 1)])));
    }
}
