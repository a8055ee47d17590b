//! NDF - parser for the NDF object data description language
//!
//! This crate re-exports all layers of the NDF toolchain for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: ndf_runtime     file checking, REPL, CLI, AST export
//! Layer 1: ndf_language    scanner, parser, AST, pretty-printer, visitor
//! Layer 0: ndf_foundation  Error, CancellationFlag
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ndf_foundation as foundation;
pub use ndf_language as language;
pub use ndf_runtime as runtime;
