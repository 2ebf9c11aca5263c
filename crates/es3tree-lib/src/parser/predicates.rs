//! Semantic guards for positions the grammar alone cannot decide.
//!
//! The assignment gate inspects the root of an already parsed conditional expression.
//! Inside a speculative attempt it answers yes unconditionally; the real check runs
//! again once the attempt commits.

use es3tree_core::SyntaxKind::{self, *};
use es3tree_core::token_sets::ASSIGNMENT_OPERATORS;

use super::core::Parser;
use super::error::{PResult, ParseError, ParseErrorKind, Predicate};
use crate::tree::Node;

/// Root kinds a left-hand side expression can have.
fn is_assignable_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        KwThis
            | Identifier
            | KwNull
            | KwTrue
            | KwFalse
            | DecimalLiteral
            | OctalLiteral
            | HexLiteral
            | StringLiteral
            | RegexLiteral
            | Array
            | Object
            | ParExpr
            | KwFunction
            | KwNew
            | Call
            | ByField
            | ByIndex
    )
}

impl Parser<'_> {
    /// `{` at statement level opens a block, never an object literal.
    pub(super) fn at_block_start(&self) -> bool {
        self.at(BraceOpen)
    }

    /// `function` at source-element level declares, it does not start an expression.
    pub(super) fn at_function_declaration(&self) -> bool {
        self.at(KwFunction)
    }

    /// `identifier :` starts a labelled statement.
    pub(super) fn at_labelled_statement(&self) -> bool {
        self.at(Identifier) && self.nth(1) == Colon
    }

    /// Whether `lhs` may stand left of an assignment operator.
    pub(super) fn is_assignable(&self, lhs: &Node) -> bool {
        self.speculation > 0 || is_assignable_kind(lhs.kind())
    }

    /// Whether `lhs` followed by `in` starts a `for-in` header.
    pub(super) fn is_assignable_followed_by_in(&self, lhs: &Node) -> bool {
        self.is_assignable(lhs) && self.at(KwIn)
    }

    /// Checks a target once its construct has resolved. Deferred while speculating.
    pub(super) fn validate_target(&self, target: &Node, predicate: Predicate) -> PResult<()> {
        if self.speculation > 0 {
            return Ok(());
        }
        self.check_target(target, predicate)
    }

    /// Re-checks every assignment and `for-in` target in a committed subtree.
    pub(super) fn revalidate(&self, root: &Node) -> PResult<()> {
        for node in root.preorder() {
            let predicate = match node.kind() {
                kind if ASSIGNMENT_OPERATORS.contains(kind) => Predicate::AssignmentTarget,
                ForIter => Predicate::ForInTarget,
                _ => continue,
            };
            let Some(target) = node.child(0) else {
                continue;
            };
            if node.kind() == ForIter && target.kind() == KwVar {
                continue;
            }
            self.check_target(target, predicate)?;
        }
        Ok(())
    }

    fn check_target(&self, target: &Node, predicate: Predicate) -> PResult<()> {
        let literal = target.kind().is_literal() && !self.config.literal_assignment_targets;
        if is_assignable_kind(target.kind()) && !literal {
            return Ok(());
        }
        let token = self.source().token_or_eof(target.tokens().start as usize);
        let mut error = ParseError::at(ParseErrorKind::FailedPredicate { predicate }, token);
        error.range = target.range();
        Err(error)
    }
}
