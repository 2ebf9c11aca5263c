use es3tree_core::SyntaxKind;
use es3tree_core::token_sets::{EXPR_FIRST, LITERALS, PROPERTY_NAME_FIRST};

use crate::parser::Parser;
use crate::parser::error::PResult;
use crate::tree::Node;

impl Parser<'_> {
    pub(super) fn primary_expression(&mut self) -> PResult<Node> {
        match self.current() {
            SyntaxKind::KwThis | SyntaxKind::Identifier => Ok(self.leaf()),
            kind if LITERALS.contains(kind) => Ok(self.leaf()),
            SyntaxKind::BracketOpen => self.array_literal(),
            SyntaxKind::BraceOpen => self.object_literal(),
            SyntaxKind::ParenOpen => self.parenthesized_expression(),
            _ => Err(self.no_viable(EXPR_FIRST, "expression")),
        }
    }

    /// `ParExpr(expr)`. Kept as a node so `(a)` and `a` stay distinguishable.
    fn parenthesized_expression(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();
        let inner = self.expression(false)?;
        self.expect(SyntaxKind::ParenClose)?;
        Ok(self.complete(marker, SyntaxKind::ParExpr, vec![inner]))
    }

    /// `Array(Item(expr?)*)`. Each elision is an empty `Item`; a single trailing
    /// comma adds nothing.
    fn array_literal(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();

        let mut items = Vec::new();
        loop {
            if self.at(SyntaxKind::Comma) {
                items.push(self.placeholder(SyntaxKind::Item));
            } else if self.at_set(EXPR_FIRST) {
                let item = self.start();
                let value = self.assignment_expression(false)?;
                items.push(self.complete(item, SyntaxKind::Item, vec![value]));
            }
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        self.expect(SyntaxKind::BracketClose)?;
        Ok(self.complete(marker, SyntaxKind::Array, items))
    }

    /// `Object(NamedValue(name, value)*)`
    fn object_literal(&mut self) -> PResult<Node> {
        let marker = self.start();
        self.bump();

        let mut properties = Vec::new();
        if !self.at(SyntaxKind::BraceClose) {
            properties.push(self.named_value()?);
            while self.eat(SyntaxKind::Comma) {
                properties.push(self.named_value()?);
            }
        }

        self.expect(SyntaxKind::BraceClose)?;
        Ok(self.complete(marker, SyntaxKind::Object, properties))
    }

    fn named_value(&mut self) -> PResult<Node> {
        let marker = self.start();
        if !self.at_set(PROPERTY_NAME_FIRST) {
            return Err(self.no_viable(PROPERTY_NAME_FIRST, "property name"));
        }
        let name = self.leaf();
        self.expect(SyntaxKind::Colon)?;
        let value = self.assignment_expression(false)?;
        Ok(self.complete(marker, SyntaxKind::NamedValue, vec![name, value]))
    }
}
