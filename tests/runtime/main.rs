//! Integration tests for Layer 2: Runtime
//!
//! Tests for file checking, export, and the REPL.

mod check;
mod export;
mod repl;
