//! Text rendering for diagnostics.
//!
//! Without a source each diagnostic prints through its `Display`. With a source the
//! offending range is underlined in context, or, in compact mode, reduced to one
//! `path:line:col` line.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use es3tree_core::{LineIndex, TextRange};

use super::message::Severity;
use super::{Diagnostic, Diagnostics};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
    compact: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
            compact: false,
        }
    }

    /// Text the diagnostic ranges point into.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown next to each location.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// One `path:line:col: error[code]: message` line per diagnostic.
    pub fn compact(mut self, value: bool) -> Self {
        self.compact = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let written = match self.source {
            None => self.write_plain(&mut out),
            Some(source) if self.compact => self.write_compact(source, &mut out),
            Some(source) => self.write_excerpts(source, &mut out),
        };
        written.expect("String write never fails");
        out
    }

    fn write_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }

    fn write_compact(&self, source: &str, w: &mut impl Write) -> std::fmt::Result {
        let index = LineIndex::new(source);
        for diag in self.diagnostics {
            if let Some(path) = self.path {
                write!(w, "{}:", path)?;
            }
            writeln!(
                w,
                "{}: {}[{}]: {}",
                diag.locate(&index).start,
                diag.severity(),
                diag.code(),
                diag.message()
            )?;
        }
        Ok(())
    }

    fn write_excerpts(&self, source: &str, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = [self.excerpt(diag, source)];
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }

    /// Title, underlined source and one help line per hint.
    fn excerpt<'a>(&'a self, diag: &'a Diagnostic, source: &'a str) -> Group<'a> {
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(caret_span(diag.range(), source.len()))
                .label(diag.message()),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let level = match diag.severity() {
            Severity::Error => Level::ERROR,
        };
        let mut group = level
            .primary_title(diag.message())
            .id(diag.code())
            .element(snippet);
        for hint in diag.hints() {
            group = group.element(Level::HELP.message(hint));
        }
        group
    }
}

/// Byte span to underline. An empty range widens to the character after it, so
/// errors at a missing token still get a caret; at end of input it stays empty.
fn caret_span(range: TextRange, len: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start < end {
        start..end
    } else {
        start..(start + 1).min(len)
    }
}
