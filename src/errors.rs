use std::io;
use thiserror::Error;


/// Errors raised by the graph model and the solver
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Edge rejected at construction time, never enters the graph
    #[error("invalid edge {from} - {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    /// Query references a node the graph has never seen
    #[error("unknown node: {0}")]
    UnknownNode(String),
}


/// Errors raised while reading a route description
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input is empty, expected a `source,target` line")]
    MissingQuery,

    #[error("line {line}: expected `source,target`, found {content:?}")]
    MalformedQuery { line: usize, content: String },

    #[error("line {line}: expected `from,to,minutes`, found {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("line {line}: weight {value:?} is not an integer")]
    InvalidWeight { line: usize, value: String },

    #[error(transparent)]
    Graph(#[from] RouteError),
}
