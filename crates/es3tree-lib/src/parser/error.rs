//! Structured parse failures.
//!
//! Production rules return [`PResult`] and propagate with `?`. A failure carries the
//! offending token and, for decision points, the set of tokens that would have been
//! viable there.

use es3tree_core::{SyntaxKind, TextRange, Token, TokenSet};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

pub(crate) type PResult<T> = Result<T, ParseError>;

/// Semantic guards that can reject an otherwise plausible parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Left side of an assignment operator.
    AssignmentTarget,
    /// Left side of `in` in a `for (... in ...)` header.
    ForInTarget,
    /// A `switch` body has at most one `default` clause.
    SingleDefault,
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::AssignmentTarget => write!(f, "invalid assignment target"),
            Predicate::ForInTarget => write!(f, "invalid left-hand side in `for-in`"),
            Predicate::SingleDefault => write!(f, "multiple `default` clauses in `switch`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// No alternative at a decision point matches the current token.
    #[error("expected {what}")]
    NoViableAlternative {
        expected: TokenSet,
        what: &'static str,
    },

    /// A required token is absent.
    #[error("expected {}", .expected.describe())]
    MismatchedToken { expected: SyntaxKind },

    #[error("{predicate}")]
    FailedPredicate { predicate: Predicate },

    #[error("recursion limit exceeded")]
    RecursionLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index of the offending token in the token source.
    pub token: u32,
    /// Kind of the offending token, `Eof` past the end.
    pub found: SyntaxKind,
    pub range: TextRange,
    /// Innermost statement being parsed when the failure occurred.
    pub rule: Option<&'static str>,
}

impl ParseError {
    pub(crate) fn at(kind: ParseErrorKind, token: Token) -> Self {
        Self {
            kind,
            token: token.index,
            found: token.kind,
            range: token.range,
            rule: None,
        }
    }

    /// Records the enclosing rule unless a more specific one is already known.
    pub(crate) fn within(mut self, rule: &'static str) -> Self {
        self.rule.get_or_insert(rule);
        self
    }

    /// Fatal failures abort the parse even in recovery mode.
    pub fn is_fatal(&self) -> bool {
        self.kind == ParseErrorKind::RecursionLimit
    }

    /// Viable tokens at the failure point, empty for predicate failures.
    pub fn expected(&self) -> TokenSet {
        match &self.kind {
            ParseErrorKind::NoViableAlternative { expected, .. } => *expected,
            ParseErrorKind::MismatchedToken { expected } => TokenSet::single(*expected),
            _ => TokenSet::EMPTY,
        }
    }

    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match &self.kind {
            ParseErrorKind::RecursionLimit => DiagnosticKind::RecursionLimit,
            ParseErrorKind::FailedPredicate { .. } => DiagnosticKind::FailedPredicate,
            _ if self.found == SyntaxKind::Garbage => DiagnosticKind::UnlexableInput,
            ParseErrorKind::MismatchedToken { .. } => DiagnosticKind::MismatchedToken,
            ParseErrorKind::NoViableAlternative { .. } => DiagnosticKind::NoViableAlternative,
        }
    }

    pub(crate) fn report(&self, diagnostics: &mut Diagnostics) {
        let mut builder = diagnostics
            .report(self.diagnostic_kind(), self.range)
            .message(self.to_string())
            .token(self.token);
        if let Some(rule) = self.rule {
            builder = builder.hint(format!("while parsing {rule}"));
        }
        builder.emit();
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseErrorKind::NoViableAlternative { .. } | ParseErrorKind::MismatchedToken { .. } => {
                write!(f, "{}, found {}", self.kind, self.found.describe())
            }
            ParseErrorKind::FailedPredicate { .. } | ParseErrorKind::RecursionLimit => {
                write!(f, "{}", self.kind)
            }
        }
    }
}

impl std::error::Error for ParseError {}
