use indoc::indoc;

use crate::parser::SyntaxTree;

#[test]
fn keyword_literals_and_this() {
    let input = indoc! {r#"
    null;
    true;
    false;
    this;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwNull
      KwTrue
      KwFalse
      KwThis
    "#);
}

#[test]
fn numbers_keep_their_spelling() {
    let input = indoc! {r#"
    0x1F;
    017;
    1.5e3;
    .5;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      HexLiteral "0x1F"
      OctalLiteral "017"
      DecimalLiteral "1.5e3"
      DecimalLiteral ".5"
    "#);
}

#[test]
fn strings_keep_their_quotes() {
    let input = indoc! {r#"
    "double";
    'single';
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      StringLiteral "\"double\""
      StringLiteral "'single'"
    "#);
}

#[test]
fn regex_at_statement_start() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("/x/.test(s);"), @r#"
    Program
      Call
        ByField
          RegexLiteral "/x/"
          Identifier "test"
        Args
          Identifier "s"
    "#);
}

#[test]
fn array_elisions_become_empty_items() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("x = [1, , 2];"), @r#"
    Program
      Eq
        Identifier "x"
        Array
          Item
            DecimalLiteral "1"
          Item
          Item
            DecimalLiteral "2"
    "#);
}

#[test]
fn array_single_trailing_comma_adds_nothing() {
    let input = indoc! {r#"
    [];
    [a,];
    [,];
    [,,];
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      Array
      Array
        Item
          Identifier "a"
      Array
        Item
      Array
        Item
        Item
    "#);
}

#[test]
fn object_literal() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("x = { a: 1, 'b': 2, 3: c };"), @r#"
    Program
      Eq
        Identifier "x"
        Object
          NamedValue
            Identifier "a"
            DecimalLiteral "1"
          NamedValue
            StringLiteral "'b'"
            DecimalLiteral "2"
          NamedValue
            DecimalLiteral "3"
            Identifier "c"
    "#);

    insta::assert_snapshot!(SyntaxTree::expect_valid("x = {};"), @r#"
    Program
      Eq
        Identifier "x"
        Object
    "#);
}

#[test]
fn object_rejects_trailing_comma() {
    let res = SyntaxTree::expect_invalid("x = { a: 1, };");
    insta::assert_snapshot!(res, @"1:13: error[E0001]: expected property name, found `}`");
}

#[test]
fn object_property_requires_colon() {
    let res = SyntaxTree::expect_invalid("x = { a };");
    insta::assert_snapshot!(res, @"1:9: error[E0002]: expected `:`, found `}`");
}

#[test]
fn unclosed_array() {
    let res = SyntaxTree::expect_invalid("x = [1, 2;");
    insta::assert_snapshot!(res, @"1:10: error[E0002]: expected `]`, found `;`");
}
