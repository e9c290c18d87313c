use crate::graph::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or serializing a graph document.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node #{id} not found, but it is referenced by a connection")]
    NodeNotFound { id: NodeId },

    #[error("Failed to serialize graph document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Serialized graph is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors raised at the file boundary, while reading sources or writing assets.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Could not read source file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write asset '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path does not exist: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Input file '{}' is not a .cs file", path.display())]
    NotCSharp { path: PathBuf },

    #[error("No .cs files found in '{}'", path.display())]
    NoSources { path: PathBuf },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
