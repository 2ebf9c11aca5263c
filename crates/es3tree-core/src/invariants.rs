//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::token::Token;
use crate::{SyntaxKind, TokenCursor};

impl TokenCursor<'_> {
    #[inline]
    pub(crate) fn ensure_bumpable(&self, token: &Token) {
        assert!(
            token.kind != SyntaxKind::Eof,
            "bump called at EOF (upstream caller's responsibility)"
        );
    }
}
