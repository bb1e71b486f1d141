use super::Cursor;
use crate::domain::{MIN_VERTICES, Point, Polygon};

/// Read one point in its canonical `(x;y)` form
///
/// Whitespace is accepted between the elements. On a mismatch the cursor is
/// left failed.
pub fn read_point(cursor: &mut Cursor<'_>) -> Option<Point> {
    if !cursor.sentry() {
        return None;
    }
    if !cursor.expect('(') {
        return None;
    }
    let x = cursor.read_i32()?;
    if !cursor.expect(';') {
        return None;
    }
    let y = cursor.read_i32()?;
    if !cursor.expect(')') {
        return None;
    }
    Some(Point::new(x, y))
}

/// Read one polygon record: `<count> <point> <point> ...`
///
/// # Algorithm
/// 1. Read the declared vertex count; fewer than three fails the cursor
/// 2. Read points until one fails to parse, rewinding over the failed attempt
/// 3. Fail the cursor unless exactly `count` points were read
///
/// A failed read never yields a partial polygon. Anything after the last
/// point (including the token that stopped the point loop) is left unread.
pub fn read_polygon(cursor: &mut Cursor<'_>) -> Option<Polygon> {
    if !cursor.sentry() {
        return None;
    }

    let declared = cursor.read_u64()?;
    if declared < MIN_VERTICES as u64 {
        cursor.fail();
        return None;
    }

    let mut points = Vec::new();
    loop {
        let mark = cursor.mark();
        match read_point(cursor) {
            Some(point) => points.push(point),
            None => {
                cursor.reset(mark);
                break;
            }
        }
    }

    if points.len() as u64 != declared {
        cursor.fail();
        return None;
    }

    Polygon::new(points)
}
