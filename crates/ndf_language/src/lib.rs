//! Scanner, parser, and syntax tree for the NDF data description language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of NDF source, including comment and guid bodies
//! - [`parse`] - Error-tolerant parsing into a [`Document`] plus [`Diagnostic`]s
//! - [`pretty`] - Canonical re-serialization of a tree
//! - [`sexp`] - Span-free tree dumps for structural comparison
//! - [`visitor`] - Read-only traversal, e.g. collecting every reference
//!
//! # Example
//!
//! ```
//! use ndf_language::{ast::Item, parse};
//!
//! let parse = parse("export Unit is TUnit(Name = 'Tank' Speed = 3)");
//! assert!(parse.diagnostics.is_empty());
//! assert!(matches!(parse.document.items[0], Item::Visibility(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod diagnostic;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod sexp;
pub mod span;
pub mod token;
pub mod visitor;


pub use ast::{Document, Expr, Item, Reference};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use keyword::{WordClass, classify_word};
pub use lexer::Lexer;
pub use parser::{Parse, ParseOptions, Parser, parse, parse_bytes, parse_strict, parse_with_options};
pub use span::Span;
pub use token::{Token, TokenKind};
