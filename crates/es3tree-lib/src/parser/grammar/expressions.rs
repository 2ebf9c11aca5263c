//! Expression rules, from comma lists down to member access.
//!
//! Binary operators are parsed by precedence climbing over `BINARY_LEVELS`: one
//! frame per operand instead of one per level, and the operator becomes the new root
//! over the previous result. Assignment is right-associative and gated by the
//! assignment-target predicate.

use es3tree_core::token_sets::{
    ADDITIVE_OPERATORS, ASSIGNMENT_OPERATORS, EQUALITY_OPERATORS, EXPR_FIRST,
    MULTIPLICATIVE_OPERATORS, POSTFIX_OPERATORS, RELATIONAL_OPERATORS,
    RELATIONAL_OPERATORS_NO_IN, SHIFT_OPERATORS, UNARY_OPERATORS,
};
use es3tree_core::{SyntaxKind, TokenSet};

use crate::parser::Parser;
use crate::parser::error::{PResult, Predicate};
use crate::tree::Node;

/// Binary precedence levels, loosest first.
const BINARY_LEVELS: [TokenSet; 10] = [
    TokenSet::single(SyntaxKind::PipePipe),
    TokenSet::single(SyntaxKind::AmpAmp),
    TokenSet::single(SyntaxKind::Pipe),
    TokenSet::single(SyntaxKind::Caret),
    TokenSet::single(SyntaxKind::Amp),
    EQUALITY_OPERATORS,
    RELATIONAL_OPERATORS,
    SHIFT_OPERATORS,
    ADDITIVE_OPERATORS,
    MULTIPLICATIVE_OPERATORS,
];

impl Parser<'_> {
    /// Comma list. A single element is returned bare, without a `CommaExpr` wrapper.
    ///
    /// `no_in` excludes the `in` operator outside parentheses, for `for` headers.
    pub(crate) fn expression(&mut self, no_in: bool) -> PResult<Node> {
        let first = self.assignment_expression(no_in)?;
        if !self.at(SyntaxKind::Comma) {
            return Ok(first);
        }

        let mut elements = vec![first];
        while self.eat(SyntaxKind::Comma) {
            elements.push(self.assignment_expression(no_in)?);
        }
        Ok(self.wrap(SyntaxKind::CommaExpr, elements))
    }

    pub(crate) fn assignment_expression(&mut self, no_in: bool) -> PResult<Node> {
        self.with_recursion(|p| {
            let target = p.conditional_expression(no_in)?;
            if !p.at_set(ASSIGNMENT_OPERATORS) || !p.is_assignable(&target) {
                return Ok(target);
            }

            p.validate_target(&target, Predicate::AssignmentTarget)?;
            let operator = p.bump().kind;
            let value = p.assignment_expression(no_in)?;
            Ok(p.wrap(operator, vec![target, value]))
        })
    }

    /// `Question(cond, then, else)`
    fn conditional_expression(&mut self, no_in: bool) -> PResult<Node> {
        let condition = self.binary_expression(0, no_in)?;
        if !self.eat(SyntaxKind::Question) {
            return Ok(condition);
        }

        let then = self.assignment_expression(false)?;
        self.expect(SyntaxKind::Colon)?;
        let otherwise = self.assignment_expression(no_in)?;
        Ok(self.wrap(SyntaxKind::Question, vec![condition, then, otherwise]))
    }

    /// Operators at `min_level` or tighter. The right operand only takes strictly
    /// tighter operators, so every level is left-associative.
    fn binary_expression(&mut self, min_level: usize, no_in: bool) -> PResult<Node> {
        let mut lhs = self.unary_expression()?;
        while let Some(level) = self.binary_level(min_level, no_in) {
            let operator = self.bump().kind;
            let rhs = self.binary_expression(level + 1, no_in)?;
            lhs = self.wrap(operator, vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    /// Precedence level of the current token if it is a binary operator at
    /// `min_level` or tighter.
    fn binary_level(&self, min_level: usize, no_in: bool) -> Option<usize> {
        let current = self.current();
        (min_level..BINARY_LEVELS.len()).find(|&level| {
            let operators = match BINARY_LEVELS[level] {
                RELATIONAL_OPERATORS if no_in => RELATIONAL_OPERATORS_NO_IN,
                operators => operators,
            };
            operators.contains(current)
        })
    }

    /// Prefix operators. Unary `+` and `-` become `Pos` and `Neg` so they never
    /// compare equal to their binary forms.
    fn unary_expression(&mut self) -> PResult<Node> {
        if !self.at_set(UNARY_OPERATORS) {
            return self.postfix_expression();
        }

        self.with_recursion(|p| {
            let marker = p.start();
            let kind = match p.bump().kind {
                SyntaxKind::Plus => SyntaxKind::Pos,
                SyntaxKind::Minus => SyntaxKind::Neg,
                other => other,
            };
            let operand = p.unary_expression()?;
            Ok(p.complete(marker, kind, vec![operand]))
        })
    }

    /// `PostInc(operand)` and `PostDec(operand)`. A line break before the operator
    /// ends the statement instead.
    fn postfix_expression(&mut self) -> PResult<Node> {
        let operand = self.left_hand_side_expression()?;
        if self.at_set(POSTFIX_OPERATORS) {
            self.promote_line_terminator();
        }

        let kind = match self.current() {
            SyntaxKind::PlusPlus => SyntaxKind::PostInc,
            SyntaxKind::MinusMinus => SyntaxKind::PostDec,
            _ => return Ok(operand),
        };
        self.bump();
        Ok(self.wrap(kind, vec![operand]))
    }

    /// Member expression followed by any run of calls, index and field accesses.
    fn left_hand_side_expression(&mut self) -> PResult<Node> {
        let mut lhs = self.member_expression()?;
        loop {
            lhs = match self.current() {
                SyntaxKind::ParenOpen => {
                    let arguments = self.arguments()?;
                    self.wrap(SyntaxKind::Call, vec![lhs, arguments])
                }
                SyntaxKind::BracketOpen => {
                    self.bump();
                    let index = self.expression(false)?;
                    self.expect(SyntaxKind::BracketClose)?;
                    self.wrap(SyntaxKind::ByIndex, vec![lhs, index])
                }
                SyntaxKind::Dot => {
                    self.bump();
                    let field = self.identifier()?;
                    self.wrap(SyntaxKind::ByField, vec![lhs, field])
                }
                _ => return Ok(lhs),
            };
        }
    }

    /// `new` binds to a primary expression only; any argument list and member access
    /// that follow wrap the `KwNew` node from outside.
    fn member_expression(&mut self) -> PResult<Node> {
        match self.current() {
            SyntaxKind::KwFunction => self.function_expression(),
            SyntaxKind::KwNew => {
                let marker = self.start();
                self.bump();
                let target = self.primary_expression()?;
                Ok(self.complete(marker, SyntaxKind::KwNew, vec![target]))
            }
            _ => self.primary_expression(),
        }
    }

    /// `Args(expr*)`
    fn arguments(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.expect(SyntaxKind::ParenOpen)?;
        let mut arguments = Vec::new();
        if self.at_set(EXPR_FIRST) {
            arguments.push(self.assignment_expression(false)?);
            while self.eat(SyntaxKind::Comma) {
                arguments.push(self.assignment_expression(false)?);
            }
        }
        self.expect(SyntaxKind::ParenClose)?;
        Ok(self.complete(marker, SyntaxKind::Args, arguments))
    }
}
