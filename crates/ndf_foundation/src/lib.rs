//! Core error and cancellation types for the NDF toolchain.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`CancellationFlag`] - Cooperative cancellation shared between threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod error;

pub use cancel::CancellationFlag;
pub use error::{Error, ErrorContext, ErrorKind, Result};
