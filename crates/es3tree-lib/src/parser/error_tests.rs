use es3tree_core::token_sets::EXPR_FIRST;
use es3tree_core::{SyntaxKind, TextRange, Token, TokenSet};

use super::error::{ParseError, ParseErrorKind, Predicate};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

fn token(kind: SyntaxKind, start: u32, end: u32, index: u32) -> Token {
    Token::new(kind, TextRange::new(start.into(), end.into()), index)
}

#[test]
fn mismatched_token_display() {
    let err = ParseError::at(
        ParseErrorKind::MismatchedToken {
            expected: SyntaxKind::ParenClose,
        },
        token(SyntaxKind::Semicolon, 4, 5, 3),
    );
    insta::assert_snapshot!(err.to_string(), @"expected `)`, found `;`");
    assert_eq!(err.expected(), TokenSet::single(SyntaxKind::ParenClose));
}

#[test]
fn no_viable_alternative_display() {
    let err = ParseError::at(
        ParseErrorKind::NoViableAlternative {
            expected: EXPR_FIRST,
            what: "expression",
        },
        token(SyntaxKind::Eof, 9, 9, 7),
    );
    insta::assert_snapshot!(err.to_string(), @"expected expression, found end of input");
    assert!(err.expected().contains(SyntaxKind::Identifier));
}

#[test]
fn failed_predicate_display_omits_found_token() {
    let err = ParseError::at(
        ParseErrorKind::FailedPredicate {
            predicate: Predicate::AssignmentTarget,
        },
        token(SyntaxKind::DecimalLiteral, 0, 1, 0),
    );
    insta::assert_snapshot!(err.to_string(), @"invalid assignment target");
    assert!(err.expected().is_empty());
}

#[test]
fn within_keeps_innermost_rule() {
    let err = ParseError::at(
        ParseErrorKind::MismatchedToken {
            expected: SyntaxKind::Semicolon,
        },
        token(SyntaxKind::Identifier, 2, 3, 2),
    )
    .within("expression statement")
    .within("`if` statement");
    assert_eq!(err.rule, Some("expression statement"));
}

#[test]
fn only_recursion_limit_is_fatal() {
    let at = token(SyntaxKind::ParenOpen, 0, 1, 0);
    assert!(ParseError::at(ParseErrorKind::RecursionLimit, at).is_fatal());
    assert!(
        !ParseError::at(
            ParseErrorKind::FailedPredicate {
                predicate: Predicate::SingleDefault
            },
            at
        )
        .is_fatal()
    );
}

#[test]
fn diagnostic_kind_mapping() {
    let cases = [
        (
            ParseErrorKind::NoViableAlternative {
                expected: EXPR_FIRST,
                what: "expression",
            },
            SyntaxKind::Semicolon,
            DiagnosticKind::NoViableAlternative,
        ),
        (
            ParseErrorKind::MismatchedToken {
                expected: SyntaxKind::Colon,
            },
            SyntaxKind::Semicolon,
            DiagnosticKind::MismatchedToken,
        ),
        (
            ParseErrorKind::MismatchedToken {
                expected: SyntaxKind::Colon,
            },
            SyntaxKind::Garbage,
            DiagnosticKind::UnlexableInput,
        ),
        (
            ParseErrorKind::FailedPredicate {
                predicate: Predicate::ForInTarget,
            },
            SyntaxKind::DecimalLiteral,
            DiagnosticKind::FailedPredicate,
        ),
        (
            ParseErrorKind::RecursionLimit,
            SyntaxKind::ParenOpen,
            DiagnosticKind::RecursionLimit,
        ),
    ];

    for (kind, found, expected) in cases {
        let err = ParseError::at(kind, token(found, 0, 1, 0));
        assert_eq!(err.diagnostic_kind(), expected);
    }
}

#[test]
fn report_attaches_token_and_rule() {
    let err = ParseError::at(
        ParseErrorKind::MismatchedToken {
            expected: SyntaxKind::Semicolon,
        },
        token(SyntaxKind::Identifier, 2, 3, 2),
    )
    .within("expression statement");

    let mut diagnostics = Diagnostics::new();
    err.report(&mut diagnostics);

    insta::assert_snapshot!(
        diagnostics.printer().render(),
        @"error[E0002] at 2..3: expected `;`, found identifier (hint: while parsing expression statement)"
    );
    assert_eq!(diagnostics.first().unwrap().token(), Some(2));
}

#[test]
fn predicate_messages() {
    insta::assert_snapshot!(Predicate::AssignmentTarget.to_string(), @"invalid assignment target");
    insta::assert_snapshot!(Predicate::ForInTarget.to_string(), @"invalid left-hand side in `for-in`");
    insta::assert_snapshot!(Predicate::SingleDefault.to_string(), @"multiple `default` clauses in `switch`");
}
