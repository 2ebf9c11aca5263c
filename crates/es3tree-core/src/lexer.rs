//! Lexer for ECMAScript 3.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Regular expressions
//!
//! Logos sees every `/` as division. When the previous significant token cannot end an
//! expression, the lexer re-scans from that `/` as a regular expression literal and bumps
//! the logos cursor past it.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character.

use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use crate::SyntaxKind;
use crate::token::{Token, is_line_terminator};
use crate::token_set::token_sets::REGEX_FORBIDDEN_AFTER;

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

fn push(tokens: &mut Vec<Token>, kind: SyntaxKind, range: Range<usize>) {
    let index = tokens.len() as u32;
    tokens.push(Token::new(kind, range_to_text_range(range), index));
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Re-scans `/` and `/=` as `RegexLiteral` where an expression may start
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;
    let mut regex_allowed = true;

    loop {
        match lexer.next() {
            Some(Ok(mut kind)) => {
                if let Some(start) = error_start.take() {
                    push(&mut tokens, SyntaxKind::Garbage, start..lexer.span().start);
                    regex_allowed = true;
                }

                if regex_allowed && matches!(kind, SyntaxKind::Slash | SyntaxKind::SlashEq) {
                    let span = lexer.span();
                    if let Some(len) = scan_regex(&source[span.start..]) {
                        lexer.bump(len - span.len());
                        kind = SyntaxKind::RegexLiteral;
                    }
                }

                push(&mut tokens, kind, lexer.span());
                if !kind.is_trivia() {
                    regex_allowed = !REGEX_FORBIDDEN_AFTER.contains(kind);
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    push(&mut tokens, SyntaxKind::Garbage, start..source.len());
                }
                break;
            }
        }
    }

    tokens
}

/// Length of the regular expression literal at the start of `text`, flags included.
///
/// `text` starts at the opening `/`. Returns `None` when no literal can be formed there,
/// in which case the `/` stays a division operator.
fn scan_regex(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().skip(1).peekable();
    let mut first = true;
    let mut end = loop {
        let (i, c) = chars.next()?;
        match c {
            c if is_line_terminator(c) => return None,
            '\\' => {
                let (_, escaped) = chars.next()?;
                if is_line_terminator(escaped) {
                    return None;
                }
            }
            '*' | '/' if first => return None,
            '/' => break i + 1,
            _ => {}
        }
        first = false;
    };

    while let Some(&(i, c)) = chars.peek() {
        if !is_identifier_part(c) {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }

    Some(end)
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '$' || c == '_'
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[Range::<usize>::from(token.range)]
}
