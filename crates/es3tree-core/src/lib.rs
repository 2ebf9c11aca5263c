#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Token layer for the ES3 syntax tree builder.
//!
//! Three pieces:
//! - **Kinds**: [`SyntaxKind`] for tokens and tree nodes, [`TokenSet`] bitsets and the
//!   precomputed lookahead sets in [`token_sets`]
//! - **Source**: [`TokenSource`], the immutable, shareable token sequence, plus the
//!   reference lexer that builds one from text
//! - **Cursor**: [`TokenCursor`], the per-parse position with mark/rewind and the single
//!   mutation a parse may request, promote-and-seek

mod cursor;
mod invariants;
mod line_index;
mod source;
mod syntax_kind;
mod token;
mod token_set;

pub mod lexer;

#[cfg(test)]
mod source_tests;

pub use cursor::{Checkpoint, TokenCursor};
pub use line_index::{LineCol, LineIndex};
pub use source::{TokenSource, TokenSourceError};
pub use syntax_kind::SyntaxKind;
pub use token::{Channel, Token, is_line_terminator};
pub use token_set::{TokenSet, token_sets};

pub use rowan::{TextRange, TextSize};
