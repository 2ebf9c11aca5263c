//! Syntax kinds for ECMAScript 3.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds
//! (from the parser). Logos derives token recognition; node kinds lack
//! token/regex attributes. Operator and keyword token kinds are reused as node
//! kinds for operator-rooted tree nodes.

use logos::{Lexer, Logos};

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
///
/// Token kinds must stay below 128 so they fit a [`TokenSet`](crate::TokenSet).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("break")]
    KwBreak = 0,
    #[token("case")]
    KwCase,
    #[token("catch")]
    KwCatch,
    #[token("continue")]
    KwContinue,
    #[token("default")]
    KwDefault,
    #[token("delete")]
    KwDelete,
    #[token("do")]
    KwDo,
    #[token("else")]
    KwElse,
    #[token("finally")]
    KwFinally,
    #[token("for")]
    KwFor,
    #[token("function")]
    KwFunction,
    #[token("if")]
    KwIf,
    #[token("in")]
    KwIn,
    #[token("instanceof")]
    KwInstanceof,
    #[token("new")]
    KwNew,
    #[token("return")]
    KwReturn,
    #[token("switch")]
    KwSwitch,
    #[token("this")]
    KwThis,
    #[token("throw")]
    KwThrow,
    #[token("try")]
    KwTry,
    #[token("typeof")]
    KwTypeof,
    #[token("var")]
    KwVar,
    #[token("void")]
    KwVoid,
    #[token("while")]
    KwWhile,
    #[token("with")]
    KwWith,
    #[token("null")]
    KwNull,
    #[token("true")]
    KwTrue,
    #[token("false")]
    KwFalse,

    /// Words reserved for future use. Never valid in ES3 source.
    #[token("abstract")]
    #[token("boolean")]
    #[token("byte")]
    #[token("char")]
    #[token("class")]
    #[token("const")]
    #[token("debugger")]
    #[token("double")]
    #[token("enum")]
    #[token("export")]
    #[token("extends")]
    #[token("final")]
    #[token("float")]
    #[token("goto")]
    #[token("implements")]
    #[token("import")]
    #[token("int")]
    #[token("interface")]
    #[token("long")]
    #[token("native")]
    #[token("package")]
    #[token("private")]
    #[token("protected")]
    #[token("public")]
    #[token("short")]
    #[token("static")]
    #[token("super")]
    #[token("synchronized")]
    #[token("throws")]
    #[token("transient")]
    #[token("volatile")]
    FutureReserved,

    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token(">>>")]
    UShr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token(">>>=")]
    UShrEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    /// Division, unless the lexer re-scans it as a regular expression literal.
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,

    /// Defined after keywords so they take precedence.
    #[regex(r"(?:[\p{L}\p{Nl}$_]|\\u[0-9a-fA-F]{4})(?:[\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}$_]|\\u[0-9a-fA-F]{4})*")]
    Identifier,

    #[regex(r#""(?:[^"\\\n\r\u{2028}\u{2029}]|\\[^\n\r\u{2028}\u{2029}])*""#)]
    #[regex(r"'(?:[^'\\\n\r\u{2028}\u{2029}]|\\[^\n\r\u{2028}\u{2029}])*'")]
    StringLiteral,

    #[regex(r"(?:0|[1-9][0-9]*)(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    DecimalLiteral,

    #[regex(r"0[0-7]+")]
    OctalLiteral,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexLiteral,

    /// Produced by the lexer's post-pass, never by logos directly.
    RegexLiteral,

    #[regex(r"[\t\x0B\x0C \u{00A0}\u{1680}\u{180E}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]+")]
    Whitespace,

    /// One token per line terminator sequence.
    #[token("\r\n")]
    #[token("\r")]
    #[token("\n")]
    #[token("\u{2028}")]
    #[token("\u{2029}")]
    Eol,

    #[token("/*", block_comment)]
    MultiLineComment,

    #[regex(r"//[^\n\r\u{2028}\u{2029}]*", allow_greedy = true)]
    SingleLineComment,

    /// Coalesced unrecognized characters.
    Garbage,
    /// Synthesized past the last token; never stored in a token source.
    Eof,

    // --- Node kinds (non-terminals) ---
    Program,
    Block,
    Array,
    Item,
    Object,
    NamedValue,
    ByField,
    ByIndex,
    Call,
    Args,
    ParExpr,
    CommaExpr,
    Expr,
    ForIter,
    ForStep,
    Labelled,
    Pos,
    Neg,
    PostInc,
    PostDec,
    Empty,
    Error,

    // Must be last - used for bounds checking in `from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Consumes the rest of a `/* ... */` comment. Unterminated comments are lexer errors.
fn block_comment(lex: &mut Lexer<'_, SyntaxKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Eol | MultiLineComment | SingleLineComment
        )
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u16) <= (KwFalse as u16)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            KwNull
                | KwTrue
                | KwFalse
                | StringLiteral
                | DecimalLiteral
                | OctalLiteral
                | HexLiteral
                | RegexLiteral
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Eof as u16)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Leaf kinds whose source text is kept on the tree node.
    #[inline]
    pub fn has_text(self) -> bool {
        matches!(
            self,
            Identifier | StringLiteral | DecimalLiteral | OctalLiteral | HexLiteral | RegexLiteral
        )
    }

    /// Converts a raw discriminant back into a kind.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            KwBreak => "`break`",
            KwCase => "`case`",
            KwCatch => "`catch`",
            KwContinue => "`continue`",
            KwDefault => "`default`",
            KwDelete => "`delete`",
            KwDo => "`do`",
            KwElse => "`else`",
            KwFinally => "`finally`",
            KwFor => "`for`",
            KwFunction => "`function`",
            KwIf => "`if`",
            KwIn => "`in`",
            KwInstanceof => "`instanceof`",
            KwNew => "`new`",
            KwReturn => "`return`",
            KwSwitch => "`switch`",
            KwThis => "`this`",
            KwThrow => "`throw`",
            KwTry => "`try`",
            KwTypeof => "`typeof`",
            KwVar => "`var`",
            KwVoid => "`void`",
            KwWhile => "`while`",
            KwWith => "`with`",
            KwNull => "`null`",
            KwTrue => "`true`",
            KwFalse => "`false`",
            FutureReserved => "reserved word",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            Dot => "`.`",
            Semicolon => "`;`",
            Comma => "`,`",
            Lt => "`<`",
            Gt => "`>`",
            LtEq => "`<=`",
            GtEq => "`>=`",
            EqEq => "`==`",
            NotEq => "`!=`",
            EqEqEq => "`===`",
            NotEqEq => "`!==`",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Percent => "`%`",
            PlusPlus => "`++`",
            MinusMinus => "`--`",
            Shl => "`<<`",
            Shr => "`>>`",
            UShr => "`>>>`",
            Amp => "`&`",
            Pipe => "`|`",
            Caret => "`^`",
            Bang => "`!`",
            Tilde => "`~`",
            AmpAmp => "`&&`",
            PipePipe => "`||`",
            Question => "`?`",
            Colon => "`:`",
            Eq => "`=`",
            PlusEq => "`+=`",
            MinusEq => "`-=`",
            StarEq => "`*=`",
            PercentEq => "`%=`",
            ShlEq => "`<<=`",
            ShrEq => "`>>=`",
            UShrEq => "`>>>=`",
            AmpEq => "`&=`",
            PipeEq => "`|=`",
            CaretEq => "`^=`",
            Slash => "`/`",
            SlashEq => "`/=`",
            Identifier => "identifier",
            StringLiteral => "string literal",
            DecimalLiteral | OctalLiteral | HexLiteral => "number",
            RegexLiteral => "regular expression",
            Whitespace => "whitespace",
            Eol => "line break",
            MultiLineComment | SingleLineComment => "comment",
            Garbage => "unrecognized input",
            Eof => "end of input",
            _ => "syntax node",
        }
    }
}
