//! # scriptgraph - Unity C# to Visual Scripting Converter
//!
//! **scriptgraph** turns Unity `MonoBehaviour` scripts written in C# into Visual
//! Scripting flow graphs. It is heuristic by construction: declarations and
//! statements are recognized by pattern, not parsed, so the output is a starting
//! point to finish in the editor rather than a faithful translation.
//!
//! ## Core Workflow
//!
//! 1.  **Extract**: [`source::SourceModel::extract`] recovers the class name,
//!     imports, fields and methods (with their raw bodies) from source text.
//! 2.  **Translate**: a [`translate::Translator`] walks each method body and
//!     appends event, flow, invoke, variable, literal and operator nodes to a
//!     [`graph::Graph`], chaining them through control connections.
//! 3.  **Serialize**: [`serialize::to_json`] renders the graph document.
//! 4.  **Wrap**: [`asset::wrap_asset`] embeds the JSON in a Unity `.asset` file.
//!
//! [`convert::Converter`] runs steps 1 to 3; the [`asset`] module adds file and
//! directory handling on top of it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scriptgraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let code = r#"
//!         public class Spinner : MonoBehaviour {
//!             void Update() {
//!                 for (int i = 0; i < 3; i++) { }
//!                 Debug.Log("spinning");
//!             }
//!         }
//!     "#;
//!
//!     // Deterministic GUIDs make the output reproducible.
//!     let converter = Converter::builder()
//!         .guids(GuidStrategy::Sequential)
//!         .build();
//!     let json = converter.convert(code)?;
//!     std::fs::write("Spinner.asset", wrap_asset(&json))?;
//!
//!     // Or let the crate handle the files.
//!     let report = convert_path(&converter, Path::new("Assets/Scripts"), None, true)?;
//!     println!("converted {} file(s)", report.converted.len());
//!     Ok(())
//! }
//! ```

pub mod asset;
pub mod convert;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod serialize;
pub mod source;
pub mod translate;
