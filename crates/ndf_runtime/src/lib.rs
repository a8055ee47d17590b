//! File checking, AST export, and the interactive REPL for NDF.
//!
//! This crate provides:
//! - [`check`] - Checking files and rendering diagnostics with source context
//! - [`serialize`] - `MessagePack` export of parse results
//! - [`Repl`] - Interactive parse-and-inspect loop
//! - [`logging`] - Tracing subscriber setup for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;

pub use check::{FileReport, check_file, check_source, render_diagnostic};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_tracing;
pub use repl::Repl;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
