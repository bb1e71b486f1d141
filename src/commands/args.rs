//! Sub-argument vocabulary and token resolution

use super::CommandError;
use crate::domain::{MIN_VERTICES, Polygon};

/// Vertex-count predicate used by `AREA` and `COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFilter {
    Even,
    Odd,
    Exact(usize),
}

impl VertexFilter {
    /// Resolve a sub-argument token
    ///
    /// # Algorithm
    /// 1. Exact match against the named filters (`EVEN`, `ODD`)
    /// 2. Otherwise parse the token as a vertex count, which must be at least 3
    pub fn resolve(token: &str) -> Result<Self, CommandError> {
        match token {
            "EVEN" => Ok(VertexFilter::Even),
            "ODD" => Ok(VertexFilter::Odd),
            _ => parse_vertex_count(token).map(VertexFilter::Exact),
        }
    }

    pub fn matches(&self, polygon: &Polygon) -> bool {
        match self {
            VertexFilter::Even => polygon.has_even_vertices(),
            VertexFilter::Odd => !polygon.has_even_vertices(),
            VertexFilter::Exact(n) => polygon.vertex_count() == *n,
        }
    }
}

fn parse_vertex_count(token: &str) -> Result<usize, CommandError> {
    let n: usize = token
        .parse()
        .map_err(|_| CommandError::InvalidArgument(token.to_string()))?;
    if n < MIN_VERTICES {
        return Err(CommandError::InvalidVertexCount(n));
    }
    Ok(n)
}

/// Argument of `AREA`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaQuery {
    Sum(VertexFilter),
    Mean,
}

impl AreaQuery {
    pub fn resolve(token: &str) -> Result<Self, CommandError> {
        match token {
            "MEAN" => Ok(AreaQuery::Mean),
            _ => VertexFilter::resolve(token).map(AreaQuery::Sum),
        }
    }
}

/// Property compared by `MAX` and `MIN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Area,
    Vertexes,
}

impl Metric {
    pub fn resolve(token: &str) -> Result<Self, CommandError> {
        match token {
            "AREA" => Ok(Metric::Area),
            "VERTEXES" => Ok(Metric::Vertexes),
            _ => Err(CommandError::InvalidArgument(token.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}
