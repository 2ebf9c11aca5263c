//! Syntax tree produced by the parser.
//!
//! Nodes are plain owned values: a parent owns its children, nothing points back up.
//! Operator and keyword kinds are reused as node kinds, so `a + b` is a `Plus` node
//! with two children.

mod printer;


use es3tree_core::{SyntaxKind, TextRange};

pub use printer::TreePrinter;

/// Half-open range of token indices in the token source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSpan {
    pub start: u32,
    pub end: u32,
}

impl TokenSpan {
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "token span {start}..{end} is inverted");
        Self { start, end }
    }

    pub fn empty(at: u32) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn contains(&self, other: TokenSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}..#{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: SyntaxKind,
    text: Option<Box<str>>,
    children: Vec<Node>,
    tokens: TokenSpan,
    range: TextRange,
}

impl Node {
    pub(crate) fn new(
        kind: SyntaxKind,
        text: Option<Box<str>>,
        children: Vec<Node>,
        tokens: TokenSpan,
        range: TextRange,
    ) -> Self {
        Self {
            kind,
            text,
            children,
            tokens,
            range,
        }
    }

    pub(crate) fn set_span(&mut self, tokens: TokenSpan, range: TextRange) {
        self.tokens = tokens;
        self.range = range;
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Source text of identifier and literal leaves.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn tokens(&self) -> TokenSpan {
        self.tokens
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.kind == SyntaxKind::Error
    }

    /// Whether this node or any descendant is a recovery placeholder.
    pub fn has_errors(&self) -> bool {
        self.preorder().any(Node::is_error)
    }

    /// Depth-first, parent before children, children in source order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}

pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
