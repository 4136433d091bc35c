//! Liberty (`.lib`) text reader.
//!
//! A Liberty file is one `library` group made of nested statements. The
//! statement layer is line oriented: every statement ends at a new-line.
//!
//! # Grammar Overview
//!
//! ```text
//! file      = { NL } library_group [ anything ]
//! statement = simple | complex | group
//! simple    = NAME ':' value ';' NL
//! complex   = NAME '(' [ value { ',' value } ] ')' ';' NL
//! group     = NAME '(' [ value { ',' value } ] ')' '{' { statement | NL } '}' NL
//!
//! value     = NUMBER | SYMBOL | '"' chars '"' | expr
//! expr      = product { ('+' | '-') product }
//! product   = primary { ('*' | '/') primary }
//! primary   = NUMBER | 'VDD' | 'VSS' | 'VCC' | '(' expr ')' | '-' primary
//! ```
//!
//! Comments (`/* */` and `//`) and `\` line continuations are handled by
//! the [`Scanner`]. Strings may carry structured content: comma separated
//! numbers (`"0.1, 0.2"`), whitespace separated names, or a Boolean
//! function (`"(A & B)'"`), which are decoded by the value readers.
//!
//! Which attributes a group accepts, and how each value is read, is
//! decided by the group tables in [`crate::catalog::groups`].
//!
//! # Example
//!
//! ```text
//! library (demo) {
//!   delay_model : table_lookup ;
//!   capacitive_load_unit (1, pf) ;
//!   cell (INV) {
//!     area : 1.0 ;
//!     pin (Y) {
//!       direction : output ;
//!       function : "A'" ;
//!     }
//!   }
//! }
//! ```

mod expr;
mod function;
pub mod header;
mod parser;
mod read;
mod scanner;
mod span;

pub use function::parse_function;
pub use header::{HeaderReader, HeaderSpec, ValueReader};
pub use parser::Parser;
pub use read::{parse_number_list, NumberListError};
pub use scanner::{Scanner, Token, TokenKind};
pub use span::{Location, Span};

use crate::ast::Group;
use crate::config::ParserConfig;
use crate::diagnostic::DiagnosticSink;
use crate::error::Result;

/// Parse Liberty text, reporting diagnostics to `sink`.
pub fn parse_with(input: &str, config: &ParserConfig, sink: &mut dyn DiagnosticSink) -> Result<Group> {
    let mut parser = Parser::new(input, config, sink);
    parser.parse()
}

/// Parse a Liberty file.
#[cfg(feature = "cli")]
pub fn parse_file(
    path: &std::path::Path,
    config: &ParserConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Group> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::DotlibError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_with(&content, config, sink)
}
