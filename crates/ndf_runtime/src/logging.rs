//! Tracing subscriber setup for the `ndf` binary.
//!
//! Output format is chosen with `NDF_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` lines
//! - `json`: one JSON object per event
//!
//! ```bash
//! NDF_LOG=debug ndf -b units.ndf
//! NDF_LOG="ndf_language::parser=trace" NDF_LOG_FORMAT=json ndf -b units.ndf
//! ```
//!
//! The subscriber is only installed when `NDF_LOG` (or `RUST_LOG`) is set.
//! All output goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parses a format name. Unknown names fall back to text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("NDF_LOG_FORMAT").unwrap_or_default())
    }
}

/// `NDF_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("NDF_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Installs the global tracing subscriber if logging was requested.
///
/// Returns true if a subscriber was installed.
pub fn init_tracing() -> bool {
    let requested = std::env::var_os("NDF_LOG").is_some() || std::env::var_os("RUST_LOG").is_some();
    if !requested {
        return false;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("tree"), LogFormat::Text);
    }
}
