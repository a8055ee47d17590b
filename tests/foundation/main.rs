//! Integration tests for Layer 0: Foundation
//!
//! Tests for error construction and cooperative cancellation.

mod cancel;
mod errors;
