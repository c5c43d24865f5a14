use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the index boundary.
///
/// Geometry and traversal code never fails; only building an index,
/// inserting into it, querying an empty one, and parsing input text do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("index holds no points")]
    EmptyIndex,

    #[error("point {id} has a non-finite coordinate ({x}, {y})")]
    InvalidPoint { id: u64, x: f64, y: f64 },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("could not read WKT: {0}")]
    Wkt(String),
}
