/// Name given to the translation unit when none is configured.
pub const DEFAULT_UNIT_NAME: &str = "main";

/// Reserved name of the functions that wrap top-level statements.
pub const ANON_EXPR_NAME: &str = "__anon_expr";

/// Nested expressions and blocks deeper than this are rejected instead of
/// growing the stack without bound.
///
/// A nested block costs about six stack frames per level, so the default
/// stays well inside a 2 MiB thread stack in unoptimised builds.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Knobs for a single parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Used in positions and diagnostics; `None` reports as "shell"
    pub file_name: Option<String>,
    pub unit_name: String,
    pub anonymous_name: String,
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file_name: None,
            unit_name: String::from(DEFAULT_UNIT_NAME),
            anonymous_name: String::from(ANON_EXPR_NAME),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = unit_name.into();
        self
    }

    pub fn with_anonymous_name(mut self, anonymous_name: impl Into<String>) -> Self {
        self.anonymous_name = anonymous_name.into();
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}
