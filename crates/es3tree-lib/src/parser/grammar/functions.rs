use es3tree_core::{SyntaxKind, TokenSet};

use crate::parser::Parser;
use crate::parser::error::PResult;
use crate::tree::Node;

const BODY_END: TokenSet = TokenSet::single(SyntaxKind::BraceClose);

impl Parser<'_> {
    /// Declarations require a name.
    pub(super) fn function_declaration(&mut self) -> PResult<Node> {
        self.function(true)
    }

    pub(super) fn function_expression(&mut self) -> PResult<Node> {
        self.function(false)
    }

    /// `KwFunction(Identifier?, Args(Identifier*), Block(sourceElement*))`
    fn function(&mut self, named: bool) -> PResult<Node> {
        self.with_recursion(|p| {
            let marker = p.start();
            p.assert_current(SyntaxKind::KwFunction);
            p.bump();

            let mut children = Vec::with_capacity(3);
            if named || p.at(SyntaxKind::Identifier) {
                children.push(p.identifier()?);
            }
            children.push(p.formal_parameters()?);
            children.push(p.function_body()?);
            Ok(p.complete(marker, SyntaxKind::KwFunction, children))
        })
    }

    fn formal_parameters(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.expect(SyntaxKind::ParenOpen)?;
        let mut parameters = Vec::new();
        if self.at(SyntaxKind::Identifier) {
            parameters.push(self.leaf());
            while self.eat(SyntaxKind::Comma) {
                parameters.push(self.identifier()?);
            }
        }
        self.expect(SyntaxKind::ParenClose)?;
        Ok(self.complete(marker, SyntaxKind::Args, parameters))
    }

    fn function_body(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.expect(SyntaxKind::BraceOpen)?;
        let elements = self.element_list(BODY_END, Self::source_element)?;
        self.expect(SyntaxKind::BraceClose)?;
        Ok(self.complete(marker, SyntaxKind::Block, elements))
    }
}
