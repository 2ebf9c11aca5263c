//! Automatic semicolon insertion.
//!
//! Line terminators live on the hidden channel. Where a statement may end, a hidden
//! line break between the previous token and the current one is promoted to the
//! default channel and the cursor seeks back onto it, so the grammar sees an explicit
//! terminator.

use es3tree_core::SyntaxKind;
use es3tree_core::token_sets::STATEMENT_END;
use tracing::debug;

use super::core::Parser;
use super::error::PResult;

impl Parser<'_> {
    /// Ends a statement.
    ///
    /// `;` and promoted line breaks are consumed. `}` and end of input are left for
    /// the enclosing rule.
    pub(super) fn semic(&mut self) -> PResult<()> {
        let current = self.current();
        if STATEMENT_END.contains(current) {
            if !matches!(current, SyntaxKind::BraceClose | SyntaxKind::Eof) {
                self.bump();
            }
            return Ok(());
        }

        match self.line_break_before_current() {
            Some(index) if self.promote(index) => {
                self.bump();
                Ok(())
            }
            _ => Err(self.mismatched(SyntaxKind::Semicolon)),
        }
    }

    /// Restricted productions call this before their optional trailing part, so a
    /// line break right after the keyword or operand ends the statement.
    pub(super) fn promote_line_terminator(&mut self) {
        if STATEMENT_END.contains(self.current()) {
            return;
        }
        if let Some(index) = self.line_break_before_current() {
            self.promote(index);
        }
    }

    /// Nearest hidden line break since the last consumed token.
    fn line_break_before_current(&self) -> Option<usize> {
        let source = self.source();
        self.cursor
            .hidden_before_current()
            .find(|token| token.is_line_break(source.text_of(token)))
            .map(|token| token.index as usize)
    }

    fn promote(&mut self, index: usize) -> bool {
        let promoted = self.cursor.promote_and_seek(index);
        if promoted {
            debug!(index, "promoted line terminator");
        }
        promoted
    }
}
