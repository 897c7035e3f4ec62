use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by the strict graph operations and by (de)serialization.
///
/// Lookups that are allowed to miss (`Graph::get_vertex`) return `Option`
/// instead of one of these.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex id was not below the current vertex count.
    #[error("vertex {vertex} is out of range (vertex count is {count})")]
    OutOfRange { vertex: u32, count: u32 },
    /// The arguments are in range but describe something the graph cannot hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The byte stream failed, including a stream that ended early.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The byte stream was readable but does not describe a valid graph.
    #[error("malformed graph data: {0}")]
    Format(String),
}
