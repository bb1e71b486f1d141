//! Command vocabulary and dispatch
//!
//! A command line is `<COMMAND> [<argument>]`. The argument is a named
//! sub-command, a vertex count, or a full polygon record depending on the
//! command. Parsing produces a [`Command`]; [`Command::execute`] evaluates it
//! against the loaded collection and yields exactly one [`Reply`].

pub mod args;
pub mod error;
pub mod query;

pub use args::{AreaQuery, Extremum, Metric, VertexFilter};
pub use error::CommandError;

use crate::domain::Polygon;
use crate::output::Reply;
use crate::parser::{Cursor, read_polygon};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Area(AreaQuery),
    Extremum(Extremum, Metric),
    Count(VertexFilter),
    Rects,
    InFrame(Polygon),
    LessArea(Polygon),
    MaxSeq(Polygon),
}

impl Command {
    /// Read a command and its argument from the cursor
    ///
    /// Input after a complete non-polygon command is left unread; the caller
    /// discards the rest of the line.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, CommandError> {
        let name = cursor
            .read_token()
            .ok_or(CommandError::MissingArgument("command"))?;

        match name {
            "AREA" => AreaQuery::resolve(argument(cursor, "AREA")?).map(Command::Area),
            "MAX" => Metric::resolve(argument(cursor, "MAX")?)
                .map(|metric| Command::Extremum(Extremum::Max, metric)),
            "MIN" => Metric::resolve(argument(cursor, "MIN")?)
                .map(|metric| Command::Extremum(Extremum::Min, metric)),
            "COUNT" => VertexFilter::resolve(argument(cursor, "COUNT")?).map(Command::Count),
            "RECTS" => Ok(Command::Rects),
            "INFRAME" => query_polygon(cursor).map(Command::InFrame),
            "LESSAREA" => query_polygon(cursor).map(Command::LessArea),
            "MAXSEQ" => query_polygon(cursor).map(Command::MaxSeq),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    pub fn execute(&self, polygons: &[Polygon]) -> Result<Reply, CommandError> {
        match self {
            Command::Area(q) => query::area(polygons, *q),
            Command::Extremum(which, metric) => query::extremum(polygons, *which, *metric),
            Command::Count(filter) => Ok(query::count(polygons, *filter)),
            Command::Rects => Ok(query::count_rectangles(polygons)),
            Command::InFrame(p) => query::in_frame(polygons, p),
            Command::LessArea(p) => Ok(query::less_area(polygons, p)),
            Command::MaxSeq(p) => Ok(query::max_sequence(polygons, p)),
        }
    }
}

/// Parse one command line and run it
pub fn dispatch(line: &str, polygons: &[Polygon]) -> Result<Reply, CommandError> {
    let mut cursor = Cursor::new(line);
    Command::read(&mut cursor)?.execute(polygons)
}

fn argument<'a>(cursor: &mut Cursor<'a>, command: &'static str) -> Result<&'a str, CommandError> {
    cursor
        .read_token()
        .ok_or(CommandError::MissingArgument(command))
}

/// A polygon argument must be well-formed and end the line
///
/// Trailing spaces, tabs and a `\r` from CRLF input are accepted after the
/// last point; any other character rejects the argument.
fn query_polygon(cursor: &mut Cursor<'_>) -> Result<Polygon, CommandError> {
    match read_polygon(cursor) {
        Some(polygon) if cursor.is_at_end() => Ok(polygon),
        _ => Err(CommandError::InvalidQueryPolygon),
    }
}
