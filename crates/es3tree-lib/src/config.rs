//! Parser configuration.

/// Default nesting bound for statements and expressions.
///
/// Sized so a parse at the limit fits a 2 MiB thread stack in an unoptimized build.
/// Callers that parse on a larger stack can raise it.
pub const DEFAULT_RECURSION_LIMIT: u32 = 64;

/// Configuration for a single parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Resynchronize at statement boundaries instead of failing the whole parse.
    pub(crate) recovery: bool,
    /// Maximum nesting depth. `None` disables the check.
    pub(crate) recursion_limit: Option<u32>,
    /// Accept literal roots as assignment targets once an assignment resolves.
    pub(crate) literal_assignment_targets: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recovery: false,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            literal_assignment_targets: false,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute error placeholders for failed statements and keep going.
    pub fn recovery(mut self, value: bool) -> Self {
        self.recovery = value;
        self
    }

    pub fn recursion_limit(mut self, value: Option<u32>) -> Self {
        self.recursion_limit = value;
        self
    }

    pub fn literal_assignment_targets(mut self, value: bool) -> Self {
        self.literal_assignment_targets = value;
        self
    }

    pub fn is_recovering(&self) -> bool {
        self.recovery
    }
}
