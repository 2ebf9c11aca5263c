//! Per-parse view over a [`TokenSource`].
//!
//! The cursor owns everything that changes during a parse: the position, the last
//! consumed significant token, and the set of hidden tokens promoted to the default
//! channel. The token source itself is never written.
//!
//! Position invariant: every token between the last consumed token and the current
//! significant token is non-significant.

use crate::token::Token;
use crate::{SyntaxKind, TokenSource};

/// Saved cursor state for speculative parsing.
///
/// Restoring a checkpoint rewinds the position only. Promotions are monotone and
/// survive a rewind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    last: Option<u32>,
}

impl Checkpoint {
    /// Index of the first raw token not yet consumed at the time of the checkpoint.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[derive(Debug, Clone)]
pub struct TokenCursor<'s> {
    source: &'s TokenSource,
    pos: usize,
    last: Option<u32>,
    promoted: Vec<bool>,
    promotions: usize,
}

impl<'s> TokenCursor<'s> {
    pub fn new(source: &'s TokenSource) -> Self {
        Self {
            source,
            pos: 0,
            last: None,
            promoted: Vec::new(),
            promotions: 0,
        }
    }

    pub fn source(&self) -> &'s TokenSource {
        self.source
    }

    /// Whether the token at `index` participates in grammar matching.
    pub fn is_significant(&self, index: usize) -> bool {
        match self.source.get(index) {
            Some(token) => !token.is_hidden() || self.is_promoted(index),
            None => false,
        }
    }

    pub fn is_promoted(&self, index: usize) -> bool {
        self.promoted.get(index).copied().unwrap_or(false)
    }

    pub fn promotions(&self) -> usize {
        self.promotions
    }

    /// LL(k) lookahead over significant tokens. Past the end, yields `Eof`.
    pub fn nth(&self, n: usize) -> Token {
        let mut count = 0;
        let mut index = self.pos;
        while index < self.source.len() {
            if self.is_significant(index) {
                if count == n {
                    return self.source.token_or_eof(index);
                }
                count += 1;
            }
            index += 1;
        }
        self.source.eof_token()
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.nth(0)
    }

    #[inline]
    pub fn current_kind(&self) -> SyntaxKind {
        self.current().kind
    }

    pub fn at_end(&self) -> bool {
        self.current_kind() == SyntaxKind::Eof
    }

    /// Consumes the current significant token.
    pub fn bump(&mut self) -> Token {
        let token = self.current();
        self.ensure_bumpable(&token);
        self.last = Some(token.index);
        self.pos = token.index as usize + 1;
        token
    }

    pub fn last_consumed(&self) -> Option<Token> {
        self.last.map(|index| self.source.token_or_eof(index as usize))
    }

    /// Index one past the last consumed token; the exclusive end of a node span.
    pub fn consumed_end(&self) -> u32 {
        self.last.map_or(0, |index| index + 1)
    }

    pub fn mark(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            last: self.last,
        }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.last = checkpoint.last;
    }

    /// Hidden tokens between the last consumed token and the current one, nearest first.
    pub fn hidden_before_current(&self) -> impl Iterator<Item = Token> + '_ {
        let lower = self.consumed_end() as usize;
        let upper = (self.current().index as usize).min(self.source.len());
        (lower..upper)
            .rev()
            .filter_map(|index| self.source.get(index).copied())
    }

    /// Whether a line break separates the current token from the previous significant one.
    pub fn current_starts_line(&self) -> bool {
        let text = |t: &Token| self.source.text_of(t);
        let after_break = self
            .last_consumed()
            .is_some_and(|t| t.is_line_break(text(&t)));
        after_break
            || self
                .hidden_before_current()
                .any(|t| t.is_line_break(text(&t)))
    }

    /// Flips a hidden token to significant and moves the cursor onto it.
    ///
    /// Only tokens after the last consumed one can be promoted. Returns `false`, with
    /// no effect, when the token is already significant or out of reach.
    pub fn promote_and_seek(&mut self, index: usize) -> bool {
        if index >= self.source.len()
            || (index as u32) < self.consumed_end()
            || index > self.current().index as usize
            || self.is_significant(index)
        {
            return false;
        }
        if self.promoted.is_empty() {
            self.promoted = vec![false; self.source.len()];
        }
        self.promoted[index] = true;
        self.promotions += 1;
        self.pos = index;
        true
    }
}
