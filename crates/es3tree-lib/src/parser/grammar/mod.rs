//! Grammar productions for ECMAScript 3.
//!
//! This module implements all rule methods as an extension of `Parser`. Each rule
//! returns the node it built and propagates failures with `?`; nothing is left
//! half-built on the error path.

mod expressions;
mod functions;
mod literals;
mod statements;

use es3tree_core::{SyntaxKind, TokenSet};

use crate::parser::Parser;
use crate::parser::error::PResult;
use crate::tree::Node;

type Rule<'s> = fn(&mut Parser<'s>) -> PResult<Node>;

impl<'s> Parser<'s> {
    /// `Program(sourceElement*)`, up to end of input.
    pub(crate) fn parse_program(&mut self) -> PResult<Node> {
        let marker = self.start();
        let elements = self.element_list(TokenSet::EMPTY, Self::source_element)?;
        self.ensure_speculation_balanced();
        Ok(self.complete(marker, SyntaxKind::Program, elements))
    }

    /// Function declaration or statement, chosen from the first token.
    pub(super) fn source_element(&mut self) -> PResult<Node> {
        if self.at_function_declaration() {
            self.function_declaration()
        } else {
            self.statement()
        }
    }

    /// Elements up to a token in `stop` or end of input. In recovery mode each
    /// element is attempted on its own, so one bad statement costs only itself.
    pub(super) fn element_list(&mut self, stop: TokenSet, element: Rule<'s>) -> PResult<Vec<Node>> {
        let mut elements = Vec::new();
        while !self.at_set(stop) && !self.at(SyntaxKind::Eof) {
            elements.push(self.recoverable(element)?);
        }
        Ok(elements)
    }

    pub(super) fn identifier(&mut self) -> PResult<Node> {
        if self.at(SyntaxKind::Identifier) {
            Ok(self.leaf())
        } else {
            Err(self.mismatched(SyntaxKind::Identifier))
        }
    }
}
