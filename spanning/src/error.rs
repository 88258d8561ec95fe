use thiserror::Error;

/// Broad classification of [`SpanningTreeError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required value was not supplied.
    InvalidArgument,
    /// The supplied values are well-formed but inconsistent with the graph.
    InvalidState,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpanningTreeError {
    #[error("{0} must not be null")]
    MissingArgument(&'static str),

    #[error("vertex {0} does not exist in the input graph")]
    VertexNotFound(String),

    #[error("spanning tree can not be calculated on an empty graph")]
    EmptyGraph,
}

impl SpanningTreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpanningTreeError::MissingArgument(_) => ErrorKind::InvalidArgument,
            SpanningTreeError::VertexNotFound(_) | SpanningTreeError::EmptyGraph => {
                ErrorKind::InvalidState
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(String),

    #[error("edge {0} is already part of the graph")]
    DuplicateEdge(String),

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(String),
}
