use crate::{SyntaxKind, TextRange, Token, TokenSource, TokenSourceError};

fn token(kind: SyntaxKind, start: u32, end: u32, index: u32) -> Token {
    Token::new(kind, TextRange::new(start.into(), end.into()), index)
}

#[test]
fn from_tokens_accepts_well_formed_input() {
    let tokens = vec![
        token(SyntaxKind::Identifier, 0, 1, 0),
        token(SyntaxKind::Whitespace, 1, 2, 1),
        token(SyntaxKind::Identifier, 2, 3, 2),
    ];
    let source = TokenSource::from_tokens("a b", tokens).unwrap();
    assert_eq!(source.len(), 3);
    assert_eq!(source.significant().count(), 2);
    assert_eq!(source.text_of(&source.tokens()[2]), "b");
}

#[test]
fn from_tokens_rejects_bad_index() {
    let tokens = vec![token(SyntaxKind::Identifier, 0, 1, 7)];
    let err = TokenSource::from_tokens("a", tokens).unwrap_err();
    assert_eq!(
        err,
        TokenSourceError::IndexMismatch {
            position: 0,
            index: 7
        }
    );
}

#[test]
fn from_tokens_rejects_out_of_bounds() {
    let tokens = vec![token(SyntaxKind::Identifier, 0, 5, 0)];
    let err = TokenSource::from_tokens("a", tokens).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"token 0 range 0..5 lies outside the source text");
}

#[test]
fn from_tokens_rejects_overlap() {
    let tokens = vec![
        token(SyntaxKind::Identifier, 0, 2, 0),
        token(SyntaxKind::Identifier, 1, 2, 1),
    ];
    let err = TokenSource::from_tokens("ab", tokens).unwrap_err();
    assert_eq!(err, TokenSourceError::Overlap { index: 1 });
}

#[test]
fn from_tokens_rejects_node_kinds() {
    let tokens = vec![token(SyntaxKind::Program, 0, 1, 0)];
    let err = TokenSource::from_tokens("a", tokens).unwrap_err();
    assert!(matches!(err, TokenSourceError::NotAToken { .. }));
}

#[test]
fn eof_is_synthesized() {
    let source = TokenSource::lex("a");
    let eof = source.token_or_eof(5);
    assert_eq!(eof.kind, SyntaxKind::Eof);
    assert_eq!(eof.index, 1);
    assert_eq!(eof.range, TextRange::empty(1.into()));
    assert_eq!(source.text_of(&eof), "");
}

#[test]
fn source_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<TokenSource>();
}
