//! Bitsets of token kinds for O(1) lookahead decisions.

use crate::SyntaxKind;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn without(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 & !other.0)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..128u16)
            .filter(move |&i| self.0 & (1u128 << i) != 0)
            .filter_map(SyntaxKind::from_raw)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
///
/// Every grammar decision point consults one of these; they are compile-time
/// constants shared by all parses.
pub mod token_sets {
    use super::TokenSet;
    use crate::SyntaxKind::*;

    pub const TRIVIA: TokenSet =
        TokenSet::new(&[Whitespace, Eol, MultiLineComment, SingleLineComment]);

    pub const NUMERIC_LITERALS: TokenSet =
        TokenSet::new(&[DecimalLiteral, OctalLiteral, HexLiteral]);

    pub const LITERALS: TokenSet = TokenSet::new(&[
        KwNull,
        KwTrue,
        KwFalse,
        StringLiteral,
        RegexLiteral,
    ])
    .union(NUMERIC_LITERALS);

    /// Previous significant tokens after which `/` is division, not a regex.
    pub const REGEX_FORBIDDEN_AFTER: TokenSet = TokenSet::new(&[
        Identifier,
        KwNull,
        KwTrue,
        KwFalse,
        KwThis,
        StringLiteral,
        BracketClose,
        ParenClose,
    ])
    .union(NUMERIC_LITERALS);

    pub const PRIMARY_FIRST: TokenSet =
        TokenSet::new(&[KwThis, Identifier, BracketOpen, BraceOpen, ParenOpen]).union(LITERALS);

    pub const MEMBER_FIRST: TokenSet = PRIMARY_FIRST.union(TokenSet::new(&[KwFunction, KwNew]));

    pub const UNARY_OPERATORS: TokenSet = TokenSet::new(&[
        KwDelete, KwVoid, KwTypeof, PlusPlus, MinusMinus, Plus, Minus, Tilde, Bang,
    ]);

    pub const POSTFIX_OPERATORS: TokenSet = TokenSet::new(&[PlusPlus, MinusMinus]);

    /// FIRST set of expression.
    pub const EXPR_FIRST: TokenSet = MEMBER_FIRST.union(UNARY_OPERATORS);

    pub const MULTIPLICATIVE_OPERATORS: TokenSet = TokenSet::new(&[Star, Slash, Percent]);
    pub const ADDITIVE_OPERATORS: TokenSet = TokenSet::new(&[Plus, Minus]);
    pub const SHIFT_OPERATORS: TokenSet = TokenSet::new(&[Shl, Shr, UShr]);
    pub const RELATIONAL_OPERATORS_NO_IN: TokenSet =
        TokenSet::new(&[Lt, Gt, LtEq, GtEq, KwInstanceof]);
    pub const RELATIONAL_OPERATORS: TokenSet =
        RELATIONAL_OPERATORS_NO_IN.union(TokenSet::single(KwIn));
    pub const EQUALITY_OPERATORS: TokenSet = TokenSet::new(&[EqEq, NotEq, EqEqEq, NotEqEq]);

    pub const ASSIGNMENT_OPERATORS: TokenSet = TokenSet::new(&[
        Eq, PlusEq, MinusEq, StarEq, SlashEq, PercentEq, ShlEq, ShrEq, UShrEq, AmpEq, PipeEq,
        CaretEq,
    ]);

    pub const PROPERTY_NAME_FIRST: TokenSet =
        TokenSet::new(&[Identifier, StringLiteral]).union(NUMERIC_LITERALS);

    /// Keywords that can only start a statement.
    pub const STATEMENT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwVar, KwIf, KwDo, KwWhile, KwFor, KwContinue, KwBreak, KwReturn, KwWith, KwSwitch,
        KwThrow, KwTry,
    ]);

    /// FIRST set of statement. `{` always selects a block.
    pub const STATEMENT_FIRST: TokenSet = EXPR_FIRST
        .union(STATEMENT_KEYWORDS)
        .union(TokenSet::new(&[BraceOpen, Semicolon]));

    pub const SOURCE_ELEMENT_FIRST: TokenSet = STATEMENT_FIRST.union(TokenSet::single(KwFunction));

    /// Tokens that end a statement without a promoted line break.
    pub const STATEMENT_END: TokenSet =
        TokenSet::new(&[Semicolon, Eof, BraceClose, Eol, MultiLineComment]);

    /// Synchronization points for statement-level recovery.
    pub const STATEMENT_RECOVERY: TokenSet = STATEMENT_KEYWORDS.union(TokenSet::single(KwFunction));
}
