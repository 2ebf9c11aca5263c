use rowan::TextRange;

use crate::SyntaxKind;

/// Token visibility to the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Participates in grammar matching.
    Default,
    /// Whitespace, line terminators and comments. Invisible until promoted.
    Hidden,
}

impl Channel {
    pub fn for_kind(kind: SyntaxKind) -> Self {
        if kind.is_trivia() {
            Channel::Hidden
        } else {
            Channel::Default
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`TokenSource::text_of`] when needed.
///
/// [`TokenSource::text_of`]: crate::TokenSource::text_of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub channel: Channel,
    /// Position in the owning token source.
    pub index: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, range: TextRange, index: u32) -> Self {
        Self {
            kind,
            range,
            channel: Channel::for_kind(kind),
            index,
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }

    /// Line terminators and comments spanning lines can end a statement when promoted.
    pub fn is_line_break(&self, text: &str) -> bool {
        match self.kind {
            SyntaxKind::Eol => true,
            SyntaxKind::MultiLineComment => text.contains(is_line_terminator),
            _ => false,
        }
    }
}

#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
