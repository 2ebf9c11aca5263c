use std::fmt::Write;

use es3tree_core::TextRange;

use super::Node;

pub struct TreePrinter<'n> {
    root: &'n Node,
    spans: bool,
    token_spans: bool,
}

impl<'n> TreePrinter<'n> {
    pub fn new(root: &'n Node) -> Self {
        Self {
            root,
            spans: false,
            token_spans: false,
        }
    }

    /// Show byte ranges.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Show token index ranges.
    pub fn with_token_spans(mut self, value: bool) -> Self {
        self.token_spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &Node, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node))?;
        if let Some(text) = node.text() {
            write!(w, " {:?}", text)?;
        }
        writeln!(w)?;

        for child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }

    fn span_str(&self, node: &Node) -> String {
        let mut out = String::new();
        if self.spans {
            out.push_str(&range_str(node.range()));
        }
        if self.token_spans {
            out.push_str(&format!(" {}", node.tokens()));
        }
        out
    }
}

fn range_str(range: TextRange) -> String {
    format!(
        " [{}..{}]",
        u32::from(range.start()),
        u32::from(range.end())
    )
}
