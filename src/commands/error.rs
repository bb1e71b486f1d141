use thiserror::Error;

/// Per-command failure
///
/// None of these end the session: the command loop prints the invalid
/// marker and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    #[error("invalid argument `{0}`")]
    InvalidArgument(String),

    #[error("vertex count {0} is below the minimum of 3")]
    InvalidVertexCount(usize),

    #[error("no polygons loaded")]
    EmptyCollection,

    #[error("malformed query polygon")]
    InvalidQueryPolygon,
}
