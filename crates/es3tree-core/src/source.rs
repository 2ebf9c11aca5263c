//! Materialized, randomly seekable token sequence.

use rowan::{TextRange, TextSize};

use crate::lexer::{lex, token_text};
use crate::line_index::LineIndex;
use crate::token::Token;
use crate::{SyntaxKind, TokenCursor};

/// Errors detected when adopting tokens produced outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenSourceError {
    #[error("token {position} carries index {index}")]
    IndexMismatch { position: usize, index: u32 },

    #[error("token {index} range {start}..{end} lies outside the source text")]
    OutOfBounds { index: u32, start: u32, end: u32 },

    #[error("token {index} starts before the end of the previous token")]
    Overlap { index: u32 },

    #[error("token {index} has node kind {kind:?}")]
    NotAToken { index: u32, kind: SyntaxKind },
}

/// Source text plus its tokens. Immutable once built; parses borrow it through a
/// [`TokenCursor`], so one source can back any number of concurrent parses.
#[derive(Debug, Clone)]
pub struct TokenSource {
    text: String,
    tokens: Vec<Token>,
    line_index: LineIndex,
}

impl TokenSource {
    /// Tokenizes `text` with the built-in ES3 lexer.
    pub fn lex(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = lex(&text);
        let line_index = LineIndex::new(&text);
        Self {
            text,
            tokens,
            line_index,
        }
    }

    /// Adopts tokens from an upstream tokenizer.
    ///
    /// Tokens must be in source order, indexed by position, non-overlapping and in bounds.
    pub fn from_tokens(
        text: impl Into<String>,
        tokens: Vec<Token>,
    ) -> Result<Self, TokenSourceError> {
        let text = text.into();
        let len = TextSize::of(text.as_str());
        let mut prev_end = TextSize::from(0);

        for (position, token) in tokens.iter().enumerate() {
            if token.index as usize != position {
                return Err(TokenSourceError::IndexMismatch {
                    position,
                    index: token.index,
                });
            }
            if !token.kind.is_token() || token.kind == SyntaxKind::Eof {
                return Err(TokenSourceError::NotAToken {
                    index: token.index,
                    kind: token.kind,
                });
            }
            if token.range.end() > len || !text.is_char_boundary(token.range.start().into()) {
                return Err(TokenSourceError::OutOfBounds {
                    index: token.index,
                    start: token.range.start().into(),
                    end: token.range.end().into(),
                });
            }
            if token.range.start() < prev_end {
                return Err(TokenSourceError::Overlap { index: token.index });
            }
            prev_end = token.range.end();
        }

        let line_index = LineIndex::new(&text);
        Ok(Self {
            text,
            tokens,
            line_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Token at `index`, or a synthesized `Eof` token past the end.
    pub fn token_or_eof(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .copied()
            .unwrap_or_else(|| self.eof_token())
    }

    pub fn eof_token(&self) -> Token {
        Token::new(
            SyntaxKind::Eof,
            TextRange::empty(self.eof_offset()),
            self.tokens.len() as u32,
        )
    }

    pub fn eof_offset(&self) -> TextSize {
        TextSize::of(self.text.as_str())
    }

    pub fn text_of(&self, token: &Token) -> &str {
        if token.kind == SyntaxKind::Eof {
            return "";
        }
        token_text(&self.text, token)
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Starts a fresh parse view over this source.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(self)
    }

    /// Tokens on the default channel, in order.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_hidden())
    }
}
