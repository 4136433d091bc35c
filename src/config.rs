//! Parser configuration.

/// Default maximum group nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a parse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept a statement whose `;` is missing before the end of line.
    pub allow_no_semicolon: bool,
    /// Maximum nesting depth of group statements.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_no_semicolon: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate missing semicolons at the end of simple and complex attributes.
    pub fn with_allow_no_semicolon(mut self, allow: bool) -> Self {
        self.allow_no_semicolon = allow;
        self
    }

    /// Set the maximum group nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
