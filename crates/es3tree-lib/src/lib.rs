//! es3tree: ECMAScript 3 syntax trees with a fixed shape per node kind.
//!
//! Duplicate-code detection compares subtree structure, so the tree normalizes
//! aggressively: operators are roots, absent optional clauses become empty
//! placeholders, a single-element comma list has no wrapper, and unary `+`/`-` and
//! postfix `++`/`--` get kinds of their own.
//!
//! # Example
//!
//! ```
//! let tree = es3tree_lib::parse("a + b * c;").expect("valid program");
//! assert_eq!(
//!     tree.dump(),
//!     "Program\n  Plus\n    Identifier \"a\"\n    Star\n      Identifier \"b\"\n      Identifier \"c\"\n",
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod parser;
pub mod tree;

pub use config::{DEFAULT_RECURSION_LIMIT, ParserConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{
    Parse, ParseError, ParseErrorKind, Predicate, SyntaxTree, parse, parse_tokens, parse_with,
};
pub use tree::{Node, TokenSpan, TreePrinter};

pub use es3tree_core::{SyntaxKind, TokenSource};

/// Errors that abort a whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// First failure of a fail-fast parse.
    #[error("syntax error: {0}")]
    Syntax(ParseError),

    /// Input nested too deeply. Fatal even in recovery mode.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded(ParseError),
}

impl Error {
    pub fn parse_error(&self) -> &ParseError {
        match self {
            Error::Syntax(err) | Error::RecursionLimitExceeded(err) => err,
        }
    }

    /// The failure as a single diagnostic, for uniform reporting.
    pub fn to_diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.parse_error().report(&mut diagnostics);
        diagnostics
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
