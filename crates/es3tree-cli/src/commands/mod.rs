pub mod check;
pub mod source_loader;
pub mod tokens;
pub mod tree;


use es3tree_lib::{DEFAULT_RECURSION_LIMIT, ParserConfig};

/// Parser flags shared by every command that builds a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub recover: bool,
    pub literal_targets: bool,
    /// `Some(0)` disables the nesting check; `None` keeps the default.
    pub recursion_limit: Option<u32>,
}

impl ParseOptions {
    pub fn config(&self) -> ParserConfig {
        let limit = match self.recursion_limit {
            None => Some(DEFAULT_RECURSION_LIMIT),
            Some(0) => None,
            Some(n) => Some(n),
        };
        ParserConfig::new()
            .recovery(self.recover)
            .literal_assignment_targets(self.literal_targets)
            .recursion_limit(limit)
    }
}
