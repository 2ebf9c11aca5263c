//! Speculative parsing and statement-level resynchronization.

use es3tree_core::SyntaxKind;
use es3tree_core::token_sets::STATEMENT_RECOVERY;
use tracing::{debug, trace};

use super::core::Parser;
use super::error::PResult;
use crate::tree::Node;

impl Parser<'_> {
    /// Runs `f` as a tentative attempt.
    ///
    /// On failure the cursor rewinds and diagnostics reported inside the attempt are
    /// dropped. On success the produced subtree is re-validated before it is accepted.
    /// Promotions made during the attempt are kept either way.
    pub(super) fn speculate(
        &mut self,
        f: impl FnOnce(&mut Self) -> PResult<Node>,
    ) -> PResult<Node> {
        let checkpoint = self.cursor.mark();
        let reported = self.diagnostics.len();
        self.speculation += 1;
        trace!(
            pos = checkpoint.position(),
            depth = self.speculation,
            "speculate"
        );

        let result = f(self);
        self.speculation -= 1;
        let result = result.and_then(|node| {
            self.revalidate(&node)?;
            Ok(node)
        });

        match &result {
            Ok(_) => trace!(pos = checkpoint.position(), "commit"),
            Err(err) if err.is_fatal() => {}
            Err(err) => {
                trace!(pos = checkpoint.position(), error = %err, "rewind");
                self.cursor.rewind(checkpoint);
                self.diagnostics.truncate(reported);
            }
        }
        result
    }

    /// Parses one element of a statement list.
    ///
    /// Fail-fast mode propagates any failure. Recovery mode reports it, skips to the
    /// next synchronization point and yields an `Error` node over the skipped tokens.
    pub(super) fn recoverable(
        &mut self,
        f: impl FnOnce(&mut Self) -> PResult<Node>,
    ) -> PResult<Node> {
        if !self.config.recovery {
            return f(self);
        }
        match self.speculate(f) {
            Ok(node) => Ok(node),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                err.report(&mut self.diagnostics);
                Ok(self.resync())
            }
        }
    }

    /// Skips to the next statement boundary. Always consumes at least one token
    /// unless input is exhausted.
    fn resync(&mut self) -> Node {
        let marker = self.start();
        let mut depth = 0u32;
        let mut skipped = 0usize;

        loop {
            let kind = self.current();
            if kind == SyntaxKind::Eof {
                break;
            }
            if skipped > 0 && depth == 0 {
                if kind == SyntaxKind::BraceClose {
                    break;
                }
                if STATEMENT_RECOVERY.contains(kind) && self.cursor.current_starts_line() {
                    break;
                }
            }

            self.bump();
            skipped += 1;
            match kind {
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose => depth = depth.saturating_sub(1),
                SyntaxKind::Semicolon if depth == 0 => break,
                _ => {}
            }
        }

        let node = self.complete(marker, SyntaxKind::Error, Vec::new());
        debug!(tokens = %node.tokens(), skipped, "resynchronized");
        node
    }
}
