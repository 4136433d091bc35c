//! # Dotlib Core
//!
//! A reader for Liberty (`.lib`) cell timing libraries.
//!
//! This library provides:
//! - A scanner and statement parser for Liberty text
//! - Table driven group dispatch with per-group attribute rules
//! - Arithmetic and Boolean function sub-parsers for expression values
//! - A value tree with source spans and Liberty text output
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`syntax`] - Scanner, statement parser, header and value readers
//! - [`catalog`] - Attribute names and the per-group rule tables
//! - [`ast`] - The value tree produced by a parse
//! - [`diagnostic`] - Diagnostics and the sinks that receive them
//! - [`config`] - Parser options
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! dotlib my_cells.lib --dump
//! ```
//!
//! ### Library
//!
//! ```no_run
//! use dotlib_core::{catalog::AttrKind, parse};
//!
//! let text = std::fs::read_to_string("my_cells.lib").unwrap();
//! let library = parse(&text).unwrap();
//! for cell in library.groups_of(AttrKind::Cell) {
//!     println!("{}", cell.name().unwrap_or("?"));
//! }
//! ```
//!
//! ## Error Reporting
//!
//! Parsing stops at the first error. Every error is also reported as a
//! [`Diagnostic`] to a [`DiagnosticSink`] together with any warnings, so
//! a caller can collect them ([`parse_with`] with a `Vec<Diagnostic>`) or
//! let them go to `tracing` ([`parse`]).

pub mod ast;
pub mod catalog;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod syntax;

// Re-export main types for convenience
pub use ast::{Attr, AttrValue, Group, Value, ValueNode};
pub use config::ParserConfig;
pub use diagnostic::{Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use error::{DotlibError, Result};
pub use syntax::parse_with;

#[cfg(feature = "cli")]
pub use syntax::parse_file;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::parse_liberty;

/// Parse Liberty text with the default configuration, logging diagnostics
/// through `tracing`.
pub fn parse(input: &str) -> Result<Group> {
    parse_with(input, &ParserConfig::default(), &mut TracingSink)
}
