//! Parser state machine and low-level operations.

use std::cell::Cell;

use es3tree_core::{SyntaxKind, TextRange, Token, TokenCursor, TokenSet, TokenSource};

use super::error::{PResult, ParseError, ParseErrorKind};
use crate::config::ParserConfig;
use crate::diagnostics::Diagnostics;
use crate::tree::{Node, TokenSpan};

const DEBUG_FUEL: u32 = 256;

/// Start of a node under construction: the first significant token it may cover.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Marker {
    start: u32,
}

/// One recursive descent over a token source.
///
/// The parser never writes the token source. Position, promotions and partially
/// built subtrees all live in the parser and its cursor.
pub(crate) struct Parser<'s> {
    pub(super) cursor: TokenCursor<'s>,
    pub(super) config: ParserConfig,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    /// Nesting of in-flight speculative attempts.
    pub(super) speculation: u32,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(source: &'s TokenSource, config: ParserConfig) -> Self {
        Self {
            cursor: source.cursor(),
            config,
            diagnostics: Diagnostics::new(),
            depth: 0,
            speculation: 0,
            debug_fuel: Cell::new(DEBUG_FUEL),
        }
    }

    pub(crate) fn finish(self) -> Diagnostics {
        self.diagnostics
    }

    pub(crate) fn source(&self) -> &'s TokenSource {
        self.cursor.source()
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.ensure_progress();
        self.cursor.current_kind()
    }

    pub(super) fn current_token(&self) -> Token {
        self.ensure_progress();
        self.cursor.current()
    }

    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        self.cursor.nth(n).kind
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    pub(super) fn bump(&mut self) -> Token {
        self.reset_debug_fuel();
        self.cursor.bump()
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> PResult<Token> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.mismatched(kind))
    }

    pub(super) fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(kind, self.current_token())
    }

    pub(super) fn mismatched(&self, expected: SyntaxKind) -> ParseError {
        self.error_here(ParseErrorKind::MismatchedToken { expected })
    }

    pub(super) fn no_viable(&self, expected: TokenSet, what: &'static str) -> ParseError {
        self.error_here(ParseErrorKind::NoViableAlternative { expected, what })
    }

    /// Runs `f` one nesting level deeper. The level is released on every exit path.
    ///
    /// A level that completes after consuming input counts as progress, so unwinding
    /// a deep nest at one position does not drain the lookahead fuel.
    pub(super) fn with_recursion<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        if let Some(limit) = self.config.recursion_limit
            && self.depth >= limit
        {
            return Err(self.error_here(ParseErrorKind::RecursionLimit));
        }
        self.depth += 1;
        self.reset_debug_fuel();
        let consumed = self.cursor.consumed_end();
        let result = f(self);
        self.depth -= 1;
        if result.is_ok() && self.cursor.consumed_end() > consumed {
            self.reset_debug_fuel();
        }
        result
    }

    pub(super) fn start(&self) -> Marker {
        Marker {
            start: self.cursor.current().index,
        }
    }

    /// Closes a node over everything consumed since `marker`.
    pub(super) fn complete(&self, marker: Marker, kind: SyntaxKind, children: Vec<Node>) -> Node {
        let span = self.span_from(marker.start);
        Node::new(kind, None, children, span, self.span_range(span))
    }

    /// Closes a node that starts where its first child starts.
    pub(super) fn wrap(&self, kind: SyntaxKind, children: Vec<Node>) -> Node {
        let start = children
            .first()
            .map_or_else(|| self.cursor.current().index, |c| c.tokens().start);
        let span = self.span_from(start);
        Node::new(kind, None, children, span, self.span_range(span))
    }

    /// Widens `node` to everything consumed since `marker`, such as a statement's
    /// terminator.
    pub(super) fn stretch(&self, marker: Marker, mut node: Node) -> Node {
        let span = self.span_from(marker.start);
        node.set_span(span, self.span_range(span));
        node
    }

    /// Consumes the current token as a leaf of its own kind.
    pub(super) fn leaf(&mut self) -> Node {
        let token = self.bump();
        let text = token
            .kind
            .has_text()
            .then(|| Box::from(self.source().text_of(&token)));
        let span = TokenSpan::new(token.index, token.index + 1);
        Node::new(token.kind, text, Vec::new(), span, token.range)
    }

    /// Empty node for an absent optional clause, anchored at the current token.
    pub(super) fn placeholder(&self, kind: SyntaxKind) -> Node {
        let token = self.cursor.current();
        Node::new(
            kind,
            None,
            Vec::new(),
            TokenSpan::empty(token.index),
            TextRange::empty(token.range.start()),
        )
    }

    fn span_from(&self, start: u32) -> TokenSpan {
        TokenSpan::new(start, self.cursor.consumed_end().max(start))
    }

    fn span_range(&self, span: TokenSpan) -> TextRange {
        let source = self.source();
        let first = source.token_or_eof(span.start as usize);
        if span.is_empty() {
            return TextRange::empty(first.range.start());
        }
        let last = source.token_or_eof(span.end as usize - 1);
        TextRange::new(first.range.start(), last.range.end())
    }
}
