//! Query families over the loaded polygon collection

use super::CommandError;
use super::args::{AreaQuery, Extremum, Metric, VertexFilter};
use crate::domain::Polygon;
use crate::geometry::Frame;
use crate::output::Reply;

pub fn area(polygons: &[Polygon], query: AreaQuery) -> Result<Reply, CommandError> {
    match query {
        AreaQuery::Sum(filter) => Ok(Reply::Real(
            polygons
                .iter()
                .filter(|p| filter.matches(p))
                .map(Polygon::area)
                .sum(),
        )),
        AreaQuery::Mean => {
            if polygons.is_empty() {
                return Err(CommandError::EmptyCollection);
            }
            let total: f64 = polygons.iter().map(Polygon::area).sum();
            Ok(Reply::Real(total / polygons.len() as f64))
        }
    }
}

pub fn extremum(
    polygons: &[Polygon],
    which: Extremum,
    metric: Metric,
) -> Result<Reply, CommandError> {
    if polygons.is_empty() {
        return Err(CommandError::EmptyCollection);
    }

    let reply = match metric {
        Metric::Area => {
            let areas = polygons.iter().map(Polygon::area);
            let value = match which {
                Extremum::Max => areas.fold(f64::MIN, f64::max),
                Extremum::Min => areas.fold(f64::MAX, f64::min),
            };
            Reply::Real(value)
        }
        Metric::Vertexes => {
            let counts = polygons.iter().map(Polygon::vertex_count);
            let value = match which {
                Extremum::Max => counts.max(),
                Extremum::Min => counts.min(),
            };
            Reply::Count(value.ok_or(CommandError::EmptyCollection)?)
        }
    };
    Ok(reply)
}

pub fn count(polygons: &[Polygon], filter: VertexFilter) -> Reply {
    Reply::Count(polygons.iter().filter(|p| filter.matches(p)).count())
}

pub fn count_rectangles(polygons: &[Polygon]) -> Reply {
    Reply::Count(polygons.iter().filter(|p| p.is_rectangle()).count())
}

/// Whether every vertex of `query` lies within the frame of the collection
pub fn in_frame(polygons: &[Polygon], query: &Polygon) -> Result<Reply, CommandError> {
    let frame = Frame::from_polygons(polygons).ok_or(CommandError::EmptyCollection)?;
    Ok(Reply::Flag(frame.contains_polygon(query)))
}

/// Number of stored polygons with strictly smaller area than `query`
pub fn less_area(polygons: &[Polygon], query: &Polygon) -> Reply {
    let threshold = query.area();
    Reply::Count(polygons.iter().filter(|p| p.area() < threshold).count())
}

/// Longest run of consecutive stored polygons equal to `query`
pub fn max_sequence(polygons: &[Polygon], query: &Polygon) -> Reply {
    let (longest, _) = polygons.iter().fold((0, 0), |(longest, run), p| {
        let run = if p == query { run + 1 } else { 0 };
        (longest.max(run), run)
    });
    Reply::Count(longest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn polygon(points: &[(i32, i32)]) -> Polygon {
        Polygon::new(points.iter().copied().map(Point::from).collect()).unwrap()
    }

    /// Axis-aligned square with its lower-left corner at the origin
    fn square(side: i32) -> Polygon {
        polygon(&[(0, 0), (0, side), (side, side), (side, 0)])
    }

    fn pentagon() -> Polygon {
        // area 8.0
        polygon(&[(0, 0), (2, 0), (3, 2), (1, 3), (-1, 2)])
    }

    fn triangle() -> Polygon {
        // area 2.0
        polygon(&[(0, 0), (2, 0), (0, 2)])
    }

    #[test]
    fn test_area_sums() {
        let polygons = vec![square(2), pentagon(), triangle()];

        assert_eq!(
            area(&polygons, AreaQuery::Sum(VertexFilter::Even)),
            Ok(Reply::Real(4.0))
        );
        assert_eq!(
            area(&polygons, AreaQuery::Sum(VertexFilter::Odd)),
            Ok(Reply::Real(pentagon().area() + 2.0))
        );
        assert_eq!(
            area(&polygons, AreaQuery::Sum(VertexFilter::Exact(5))),
            Ok(Reply::Real(pentagon().area()))
        );
        assert_eq!(
            area(&polygons, AreaQuery::Sum(VertexFilter::Exact(7))),
            Ok(Reply::Real(0.0))
        );
    }

    #[test]
    fn test_area_mean() {
        let polygons = vec![square(2), square(4)];
        assert_eq!(area(&polygons, AreaQuery::Mean), Ok(Reply::Real(10.0)));
        assert_eq!(area(&[], AreaQuery::Mean), Err(CommandError::EmptyCollection));
    }

    #[test]
    fn test_sum_over_empty_collection_is_zero() {
        assert_eq!(
            area(&[], AreaQuery::Sum(VertexFilter::Even)),
            Ok(Reply::Real(0.0))
        );
    }

    #[test]
    fn test_extremum() {
        let polygons = vec![square(3), pentagon(), triangle()];

        assert_eq!(
            extremum(&polygons, Extremum::Max, Metric::Area),
            Ok(Reply::Real(9.0))
        );
        assert_eq!(
            extremum(&polygons, Extremum::Min, Metric::Area),
            Ok(Reply::Real(2.0))
        );
        assert_eq!(
            extremum(&polygons, Extremum::Max, Metric::Vertexes),
            Ok(Reply::Count(5))
        );
        assert_eq!(
            extremum(&polygons, Extremum::Min, Metric::Vertexes),
            Ok(Reply::Count(3))
        );
    }

    #[test]
    fn test_extremum_empty() {
        for which in [Extremum::Max, Extremum::Min] {
            for metric in [Metric::Area, Metric::Vertexes] {
                assert_eq!(
                    extremum(&[], which, metric),
                    Err(CommandError::EmptyCollection)
                );
            }
        }
    }

    #[test]
    fn test_counts() {
        let polygons = vec![square(1), square(2), pentagon(), triangle()];
        assert_eq!(count(&polygons, VertexFilter::Even), Reply::Count(2));
        assert_eq!(count(&polygons, VertexFilter::Odd), Reply::Count(2));
        assert_eq!(count(&polygons, VertexFilter::Exact(3)), Reply::Count(1));
        assert_eq!(count_rectangles(&polygons), Reply::Count(2));
    }

    #[test]
    fn test_in_frame() {
        let polygons = vec![square(4), polygon(&[(2, 2), (6, 3), (5, 5)])];

        let inside = polygon(&[(0, 0), (6, 5), (3, 1)]);
        assert_eq!(in_frame(&polygons, &inside), Ok(Reply::Flag(true)));

        let outside = polygon(&[(0, 0), (7, 5), (3, 1)]);
        assert_eq!(in_frame(&polygons, &outside), Ok(Reply::Flag(false)));

        assert_eq!(in_frame(&[], &inside), Err(CommandError::EmptyCollection));
    }

    #[test]
    fn test_less_area() {
        let polygons = vec![square(1), square(2), square(3)];
        // area 5.0
        let query = polygon(&[(0, 0), (5, 0), (5, 1), (0, 1)]);
        assert_eq!(less_area(&polygons, &query), Reply::Count(2));
        // equal area is not counted
        assert_eq!(less_area(&polygons, &square(2)), Reply::Count(1));
    }

    #[test]
    fn test_max_sequence() {
        let polygons = vec![
            square(1),
            triangle(),
            triangle(),
            square(1),
            triangle(),
            triangle(),
            triangle(),
            pentagon(),
        ];
        assert_eq!(max_sequence(&polygons, &triangle()), Reply::Count(3));
        assert_eq!(max_sequence(&polygons, &square(1)), Reply::Count(1));
        assert_eq!(max_sequence(&polygons, &square(5)), Reply::Count(0));
    }
}
