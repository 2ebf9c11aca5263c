//! Recursive-descent parser for ECMAScript 3.
//!
//! # Architecture
//!
//! One method per grammar rule, each returning an owned [`Node`] or a [`ParseError`].
//! Decisions use one token of lookahead against precomputed token sets, two tokens
//! for labels, and the shape of an already parsed expression for assignment targets
//! and `for-in` headers.
//!
//! - Trivia stays on the hidden channel. The ASI engine promotes a line break to
//!   the default channel where a statement may end, and seeks the cursor onto it
//! - Speculative attempts mark the cursor and rewind on failure; the partial tree is
//!   dropped with the failed call
//! - Spans are token index ranges, resolved to byte ranges when a node closes
//!
//! # Failure modes
//!
//! Fail-fast (default): the first failure aborts the parse with [`Error::Syntax`].
//!
//! Recovery (opt-in): statement lists catch failures, report them, skip to the next
//! statement boundary and substitute an `Error` node. The tree never contains a
//! fabricated valid node where the source was invalid.
//!
//! The recursion limit is fatal in both modes.

mod asi;
mod core;
mod error;
mod grammar;
mod invariants;
mod predicates;
mod recovery;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod tests;

use es3tree_core::TokenSource;
use tracing::debug;

pub(crate) use core::Parser;
pub use error::{ParseError, ParseErrorKind, Predicate};

use crate::config::ParserConfig;
use crate::diagnostics::Diagnostics;
use crate::tree::Node;
use crate::{Error, Result};

/// Tree plus the diagnostics of statements replaced during recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    root: Node,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No statement had to be replaced by an error placeholder.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn into_root(self) -> Node {
        self.root
    }
}

/// A parse that owns its token source.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: TokenSource,
    parse: Parse,
}

impl SyntaxTree {
    pub fn source(&self) -> &TokenSource {
        &self.source
    }

    pub fn text(&self) -> &str {
        self.source.text()
    }

    pub fn root(&self) -> &Node {
        self.parse.root()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.parse.diagnostics()
    }

    pub fn is_valid(&self) -> bool {
        self.parse.is_valid()
    }

    pub fn dump(&self) -> String {
        self.root().dump()
    }

    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics().printer().source(self.text()).render()
    }
}

/// Lexes and parses `text` in fail-fast mode.
pub fn parse(text: &str) -> Result<SyntaxTree> {
    parse_with(text, &ParserConfig::default())
}

pub fn parse_with(text: &str, config: &ParserConfig) -> Result<SyntaxTree> {
    let source = TokenSource::lex(text);
    let parse = parse_tokens(&source, config)?;
    Ok(SyntaxTree { source, parse })
}

/// Parses a supplied token source. The source is only read; many parses can share it.
pub fn parse_tokens(source: &TokenSource, config: &ParserConfig) -> Result<Parse> {
    let mut parser = Parser::new(source, config.clone());
    let result = parser.parse_program();
    let promotions = parser.cursor.promotions();
    let diagnostics = parser.finish();

    match result {
        Ok(root) => {
            debug!(
                tokens = source.len(),
                promotions,
                errors = diagnostics.len(),
                "parsed program"
            );
            Ok(Parse { root, diagnostics })
        }
        Err(err) if err.is_fatal() => Err(Error::RecursionLimitExceeded(err)),
        Err(err) => Err(Error::Syntax(err)),
    }
}
