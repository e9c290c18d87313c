//! Prelude module for convenient imports
//!
//! Re-exports the types needed to convert scripts and inspect the resulting
//! graphs without importing each module individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use scriptgraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let code = std::fs::read_to_string("Assets/Scripts/Player.cs")?;
//! let graph = Converter::default().build_graph(&code, Some("Player.cs"))?;
//!
//! for node in graph.nodes_of_type("Unity.VisualScripting.InvokeMember") {
//!     println!("{} at ({}, {})", node.unit_type, node.position.x, node.position.y);
//! }
//! println!("{}", to_json(&graph)?);
//! # Ok(())
//! # }
//! ```

// Conversion pipeline
pub use crate::convert::{Converter, GuidStrategy};
pub use crate::source::SourceModel;
pub use crate::translate::{ScanOrder, Translator};

// Graph model
pub use crate::graph::{Connection, Graph, LayoutConfig, Node, NodeId, Variable};

// Output
pub use crate::asset::{BatchReport, convert_dir, convert_file, convert_path, wrap_asset};
pub use crate::serialize::to_json;

// Error types
pub use crate::error::{AssetError, GraphError};

pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
