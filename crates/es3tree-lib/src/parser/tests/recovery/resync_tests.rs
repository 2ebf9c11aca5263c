use indoc::indoc;

use crate::config::ParserConfig;
use crate::parser::{SyntaxTree, parse_with};

#[test]
fn skips_past_semicolon() {
    let input = indoc! {r#"
    a = ;
    b = 2;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      Error
      Eq
        Identifier "b"
        DecimalLiteral "2"
    ---
    1:5: error[E0001]: expected expression, found `;`
    "#);
}

#[test]
fn stops_before_keyword_on_new_line() {
    let input = indoc! {r#"
    x = (1 +
    var y = 2;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      Error
      KwVar
        Eq
          Identifier "y"
          DecimalLiteral "2"
    ---
    2:1: error[E0001]: expected expression, found `var`
    "#);
}

#[test]
fn skips_balanced_braces() {
    let input = indoc! {r#"
    x = ) { a; };
    y;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      Error
      Identifier "y"
    ---
    1:5: error[E0001]: expected expression, found `)`
    "#);
}

#[test]
fn stops_before_enclosing_closing_brace() {
    let input = indoc! {r#"
    function f() { a b }
    g();
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      KwFunction
        Identifier "f"
        Args
        Block
          Error
      Call
        Identifier "g"
        Args
    ---
    1:18: error[E0002]: expected `;`, found identifier
    "#);
}

#[test]
fn failure_inside_block_is_contained() {
    let input = indoc! {r#"
    if (a) { b = ; c; }
    d;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      KwIf
        Identifier "a"
        Block
          Error
          Identifier "c"
      Identifier "d"
    ---
    1:14: error[E0001]: expected expression, found `;`
    "#);
}

#[test]
fn case_clause_statements_recover_individually() {
    let input = indoc! {r#"
    switch (x) {
      case 1:
        a = ;
        b;
    }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      KwSwitch
        Identifier "x"
        KwCase
          DecimalLiteral "1"
          Error
          Identifier "b"
    ---
    3:9: error[E0001]: expected expression, found `;`
    "#);
}

#[test]
fn error_node_spans_skipped_tokens() {
    let input = "a = ;\nb;";

    let tree = parse_with(input, &ParserConfig::new().recovery(true)).unwrap();
    insta::assert_snapshot!(tree.root().printer().with_spans(true).with_token_spans(true).dump(), @r#"
    Program [0..8] #0..#8
      Error [0..5] #0..#5
      Identifier [6..8] #6..#8 "b"
    "#);
}
