use es3tree_core::token_sets::{EXPR_FIRST, STATEMENT_FIRST};
use es3tree_core::{SyntaxKind, TokenSet};

use crate::parser::Parser;
use crate::parser::error::{PResult, ParseErrorKind, Predicate};
use crate::tree::Node;

const BLOCK_END: TokenSet = TokenSet::single(SyntaxKind::BraceClose);
const CLAUSE_END: TokenSet = TokenSet::new(&[
    SyntaxKind::KwCase,
    SyntaxKind::KwDefault,
    SyntaxKind::BraceClose,
]);
const TRY_HANDLERS: TokenSet = TokenSet::new(&[SyntaxKind::KwCatch, SyntaxKind::KwFinally]);

impl Parser<'_> {
    pub(crate) fn statement(&mut self) -> PResult<Node> {
        let kind = self.current();
        let labelled = self.at_labelled_statement();
        let rule = statement_rule(kind, labelled);
        self.with_recursion(|p| p.statement_inner(kind, labelled))
            .map_err(|err| err.within(rule))
    }

    fn statement_inner(&mut self, kind: SyntaxKind, labelled: bool) -> PResult<Node> {
        if self.at_block_start() {
            return self.block();
        }
        match kind {
            SyntaxKind::KwVar => self.variable_statement(),
            SyntaxKind::Semicolon => self.empty_statement(),
            SyntaxKind::KwIf => self.if_statement(),
            SyntaxKind::KwDo => self.do_statement(),
            SyntaxKind::KwWhile | SyntaxKind::KwWith => self.guarded_statement(kind),
            SyntaxKind::KwFor => self.for_statement(),
            SyntaxKind::KwContinue | SyntaxKind::KwBreak => self.jump_statement(kind),
            SyntaxKind::KwReturn => self.return_statement(),
            SyntaxKind::KwSwitch => self.switch_statement(),
            SyntaxKind::KwThrow => self.throw_statement(),
            SyntaxKind::KwTry => self.try_statement(),
            SyntaxKind::Identifier if labelled => self.labelled_statement(),
            _ if EXPR_FIRST.contains(kind) => self.expression_statement(),
            _ => Err(self.no_viable(STATEMENT_FIRST, "statement")),
        }
    }

    /// `Block(statement*)`
    pub(super) fn block(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.expect(SyntaxKind::BraceOpen)?;
        let statements = self.element_list(BLOCK_END, Self::statement)?;
        self.expect(SyntaxKind::BraceClose)?;
        Ok(self.complete(marker, SyntaxKind::Block, statements))
    }

    fn variable_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.assert_current(SyntaxKind::KwVar);
        self.bump();
        let declarations = self.variable_declarations(false)?;
        self.semic()?;
        Ok(self.complete(marker, SyntaxKind::KwVar, declarations))
    }

    fn variable_declarations(&mut self, no_in: bool) -> PResult<Vec<Node>> {
        let mut declarations = vec![self.variable_declaration(no_in)?];
        while self.eat(SyntaxKind::Comma) {
            declarations.push(self.variable_declaration(no_in)?);
        }
        Ok(declarations)
    }

    /// `Identifier` or `Eq(Identifier, value)`.
    fn variable_declaration(&mut self, no_in: bool) -> PResult<Node> {
        let name = self.identifier()?;
        if !self.eat(SyntaxKind::Eq) {
            return Ok(name);
        }
        let value = self.assignment_expression(no_in)?;
        Ok(self.wrap(SyntaxKind::Eq, vec![name, value]))
    }

    fn empty_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        Ok(self.complete(marker, SyntaxKind::Empty, Vec::new()))
    }

    fn expression_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        let expression = self.expression(false)?;
        self.semic()?;
        Ok(self.stretch(marker, expression))
    }

    fn labelled_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        let label = self.identifier()?;
        self.expect(SyntaxKind::Colon)?;
        let body = self.statement()?;
        Ok(self.complete(marker, SyntaxKind::Labelled, vec![label, body]))
    }

    /// `KwIf(cond, then, else?)`. A dangling `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let condition = self.parenthesized_condition()?;
        let mut children = vec![condition, self.statement()?];
        if self.eat(SyntaxKind::KwElse) {
            children.push(self.statement()?);
        }
        Ok(self.complete(marker, SyntaxKind::KwIf, children))
    }

    fn do_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let body = self.statement()?;
        self.expect(SyntaxKind::KwWhile)?;
        let condition = self.parenthesized_condition()?;
        self.semic()?;
        Ok(self.complete(marker, SyntaxKind::KwDo, vec![body, condition]))
    }

    /// `while (cond) body` and `with (object) body` share one shape.
    fn guarded_statement(&mut self, kind: SyntaxKind) -> PResult<Node> {
        let marker = self.start();
        self.assert_current(kind);
        self.bump();
        let guard = self.parenthesized_condition()?;
        let body = self.statement()?;
        Ok(self.complete(marker, kind, vec![guard, body]))
    }

    fn parenthesized_condition(&mut self) -> PResult<Node> {
        self.expect(SyntaxKind::ParenOpen)?;
        let condition = self.expression(false)?;
        self.expect(SyntaxKind::ParenClose)?;
        Ok(condition)
    }

    fn for_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        self.expect(SyntaxKind::ParenOpen)?;
        let control = match self.current() {
            SyntaxKind::KwVar => self.for_control_var()?,
            SyntaxKind::Semicolon => self.for_control_empty()?,
            _ => self.for_control_expression()?,
        };
        self.expect(SyntaxKind::ParenClose)?;
        let body = self.statement()?;
        Ok(self.complete(marker, SyntaxKind::KwFor, vec![control, body]))
    }

    /// `for (var x in y)` or `for (var x, y; cond; step)`.
    fn for_control_var(&mut self) -> PResult<Node> {
        let marker = self.start();
        let var_marker = self.start();
        self.bump();
        let first = self.variable_declaration(true)?;

        if self.at(SyntaxKind::KwIn) {
            let var = self.complete(var_marker, SyntaxKind::KwVar, vec![first]);
            self.bump();
            let iterable = self.expression(false)?;
            return Ok(self.complete(marker, SyntaxKind::ForIter, vec![var, iterable]));
        }

        let mut declarations = vec![first];
        while self.eat(SyntaxKind::Comma) {
            declarations.push(self.variable_declaration(true)?);
        }
        let var = self.complete(var_marker, SyntaxKind::KwVar, declarations);
        let (condition, step) = self.for_step_clauses()?;
        Ok(self.complete(marker, SyntaxKind::ForStep, vec![var, condition, step]))
    }

    /// `for (;;)`: the missing initializer is still an `Expr` placeholder.
    fn for_control_empty(&mut self) -> PResult<Node> {
        let marker = self.start();
        let init = self.placeholder(SyntaxKind::Expr);
        let (condition, step) = self.for_step_clauses()?;
        Ok(self.complete(marker, SyntaxKind::ForStep, vec![init, condition, step]))
    }

    /// `for (lhs in y)` shares its prefix with `for (init; cond; step)`; the parsed
    /// initializer decides which one this is.
    fn for_control_expression(&mut self) -> PResult<Node> {
        let marker = self.start();
        let first = self.expression(true)?;

        if self.is_assignable_followed_by_in(&first) {
            self.validate_target(&first, Predicate::ForInTarget)?;
            self.bump();
            let iterable = self.expression(false)?;
            return Ok(self.complete(marker, SyntaxKind::ForIter, vec![first, iterable]));
        }

        let init = self.wrap(SyntaxKind::Expr, vec![first]);
        let (condition, step) = self.for_step_clauses()?;
        Ok(self.complete(marker, SyntaxKind::ForStep, vec![init, condition, step]))
    }

    fn for_step_clauses(&mut self) -> PResult<(Node, Node)> {
        self.expect(SyntaxKind::Semicolon)?;
        let condition = self.optional_clause()?;
        self.expect(SyntaxKind::Semicolon)?;
        let step = self.optional_clause()?;
        Ok((condition, step))
    }

    /// `Expr(expr?)`
    fn optional_clause(&mut self) -> PResult<Node> {
        if !self.at_set(EXPR_FIRST) {
            return Ok(self.placeholder(SyntaxKind::Expr));
        }
        let marker = self.start();
        let expression = self.expression(false)?;
        Ok(self.complete(marker, SyntaxKind::Expr, vec![expression]))
    }

    /// `continue label?` and `break label?`. A line break before the label ends the
    /// statement.
    fn jump_statement(&mut self, kind: SyntaxKind) -> PResult<Node> {
        let marker = self.start();
        self.assert_current(kind);
        self.bump();
        if self.at(SyntaxKind::Identifier) {
            self.promote_line_terminator();
        }
        let mut children = Vec::new();
        if self.at(SyntaxKind::Identifier) {
            children.push(self.leaf());
        }
        self.semic()?;
        Ok(self.complete(marker, kind, children))
    }

    fn return_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        self.promote_line_terminator();
        let mut children = Vec::new();
        if self.at_set(EXPR_FIRST) {
            children.push(self.expression(false)?);
        }
        self.semic()?;
        Ok(self.complete(marker, SyntaxKind::KwReturn, children))
    }

    fn throw_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        self.promote_line_terminator();
        let exception = self.expression(false)?;
        self.semic()?;
        Ok(self.complete(marker, SyntaxKind::KwThrow, vec![exception]))
    }

    /// `KwSwitch(discriminant, clause*)`, clauses in source order.
    fn switch_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let discriminant = self.parenthesized_condition()?;
        self.expect(SyntaxKind::BraceOpen)?;

        let mut children = vec![discriminant];
        let mut seen_default = false;
        loop {
            match self.current() {
                SyntaxKind::KwCase => children.push(self.case_clause()?),
                SyntaxKind::KwDefault if seen_default => {
                    return Err(self.error_here(ParseErrorKind::FailedPredicate {
                        predicate: Predicate::SingleDefault,
                    }));
                }
                SyntaxKind::KwDefault => {
                    seen_default = true;
                    children.push(self.default_clause()?);
                }
                _ => break,
            }
        }

        self.expect(SyntaxKind::BraceClose)?;
        Ok(self.complete(marker, SyntaxKind::KwSwitch, children))
    }

    fn case_clause(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let mut children = vec![self.expression(false)?];
        self.expect(SyntaxKind::Colon)?;
        children.extend(self.element_list(CLAUSE_END, Self::statement)?);
        Ok(self.complete(marker, SyntaxKind::KwCase, children))
    }

    fn default_clause(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        self.expect(SyntaxKind::Colon)?;
        let statements = self.element_list(CLAUSE_END, Self::statement)?;
        Ok(self.complete(marker, SyntaxKind::KwDefault, statements))
    }

    /// `KwTry(Block, KwCatch(Identifier, Block)?, KwFinally(Block)?)`, at least one
    /// handler.
    fn try_statement(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let mut children = vec![self.block()?];
        if self.at(SyntaxKind::KwCatch) {
            children.push(self.catch_clause()?);
        }
        if self.at(SyntaxKind::KwFinally) {
            children.push(self.finally_clause()?);
        }
        if children.len() == 1 {
            return Err(self.no_viable(TRY_HANDLERS, "`catch` or `finally`"));
        }
        Ok(self.complete(marker, SyntaxKind::KwTry, children))
    }

    fn catch_clause(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        self.expect(SyntaxKind::ParenOpen)?;
        let binding = self.identifier()?;
        self.expect(SyntaxKind::ParenClose)?;
        let body = self.block()?;
        Ok(self.complete(marker, SyntaxKind::KwCatch, vec![binding, body]))
    }

    fn finally_clause(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let body = self.block()?;
        Ok(self.complete(marker, SyntaxKind::KwFinally, vec![body]))
    }
}

fn statement_rule(kind: SyntaxKind, labelled: bool) -> &'static str {
    match kind {
        SyntaxKind::BraceOpen => "block",
        SyntaxKind::KwVar => "`var` statement",
        SyntaxKind::Semicolon => "empty statement",
        SyntaxKind::KwIf => "`if` statement",
        SyntaxKind::KwDo => "`do` statement",
        SyntaxKind::KwWhile => "`while` statement",
        SyntaxKind::KwWith => "`with` statement",
        SyntaxKind::KwFor => "`for` statement",
        SyntaxKind::KwContinue => "`continue` statement",
        SyntaxKind::KwBreak => "`break` statement",
        SyntaxKind::KwReturn => "`return` statement",
        SyntaxKind::KwSwitch => "`switch` statement",
        SyntaxKind::KwThrow => "`throw` statement",
        SyntaxKind::KwTry => "`try` statement",
        _ if labelled => "labelled statement",
        _ => "expression statement",
    }
}
