use indoc::indoc;

use crate::config::ParserConfig;
use crate::parser::{SyntaxTree, parse_with};

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("a + b * c;"), @r#"
    Program
      Plus
        Identifier "a"
        Star
          Identifier "b"
          Identifier "c"
    "#);

    insta::assert_snapshot!(SyntaxTree::expect_valid("a * b + c;"), @r#"
    Program
      Plus
        Star
          Identifier "a"
          Identifier "b"
        Identifier "c"
    "#);
}

#[test]
fn binary_operators_associate_left() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("a - b - c;"), @r#"
    Program
      Minus
        Minus
          Identifier "a"
          Identifier "b"
        Identifier "c"
    "#);
}

#[test]
fn full_precedence_chain() {
    let input = "a || b && c | d ^ e & f == g < h << i + j * k;";

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      PipePipe
        Identifier "a"
        AmpAmp
          Identifier "b"
          Pipe
            Identifier "c"
            Caret
              Identifier "d"
              Amp
                Identifier "e"
                EqEq
                  Identifier "f"
                  Lt
                    Identifier "g"
                    Shl
                      Identifier "h"
                      Plus
                        Identifier "i"
                        Star
                          Identifier "j"
                          Identifier "k"
    "#);
}

#[test]
fn relational_keywords() {
    let input = indoc! {r#"
    a in b;
    a instanceof B;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwIn
        Identifier "a"
        Identifier "b"
      KwInstanceof
        Identifier "a"
        Identifier "B"
    "#);
}

#[test]
fn unary_plus_and_minus_are_retagged() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("-x;"), @r#"
    Program
      Neg
        Identifier "x"
    "#);

    insta::assert_snapshot!(SyntaxTree::expect_valid("a - x;"), @r#"
    Program
      Minus
        Identifier "a"
        Identifier "x"
    "#);

    insta::assert_snapshot!(SyntaxTree::expect_valid("+a + +b;"), @r#"
    Program
      Plus
        Pos
          Identifier "a"
        Pos
          Identifier "b"
    "#);
}

#[test]
fn keyword_unary_operators() {
    let input = indoc! {r#"
    typeof a;
    void 0;
    delete a.b;
    !a;
    ~a;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwTypeof
        Identifier "a"
      KwVoid
        DecimalLiteral "0"
      KwDelete
        ByField
          Identifier "a"
          Identifier "b"
      Bang
        Identifier "a"
      Tilde
        Identifier "a"
    "#);
}

#[test]
fn prefix_and_postfix_updates_differ() {
    let input = indoc! {r#"
    ++a;
    a++;
    --a;
    a--;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      PlusPlus
        Identifier "a"
      PostInc
        Identifier "a"
      MinusMinus
        Identifier "a"
      PostDec
        Identifier "a"
    "#);
}

#[test]
fn assignment_is_right_associative() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("a = b = c;"), @r#"
    Program
      Eq
        Identifier "a"
        Eq
          Identifier "b"
          Identifier "c"
    "#);
}

#[test]
fn compound_assignment_and_member_targets() {
    let input = indoc! {r#"
    a += 1;
    a.b[c] = d;
    this.x >>>= 2;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      PlusEq
        Identifier "a"
        DecimalLiteral "1"
      Eq
        ByIndex
          ByField
            Identifier "a"
            Identifier "b"
          Identifier "c"
        Identifier "d"
      UShrEq
        ByField
          KwThis
          Identifier "x"
        DecimalLiteral "2"
    "#);
}

#[test]
fn call_result_is_an_assignable_shape() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("f() = 1;"), @r#"
    Program
      Eq
        Call
          Identifier "f"
          Args
        DecimalLiteral "1"
    "#);
}

#[test]
fn literal_assignment_target_is_rejected() {
    let res = SyntaxTree::expect_invalid("1 = 2;");
    insta::assert_snapshot!(res, @"1:1: error[E0003]: invalid assignment target");
}

#[test]
fn literal_assignment_target_can_be_allowed() {
    let config = ParserConfig::new().literal_assignment_targets(true);
    let tree = parse_with("1 = 2;", &config).unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    Program
      Eq
        DecimalLiteral "1"
        DecimalLiteral "2"
    "#);
}

#[test]
fn operator_result_is_not_assignable() {
    let res = SyntaxTree::expect_invalid("a + b = c;");
    insta::assert_snapshot!(res, @"1:7: error[E0002]: expected `;`, found `=`");
}

#[test]
fn conditional_nests_in_else_branch() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("a ? b : c ? d : e;"), @r#"
    Program
      Question
        Identifier "a"
        Identifier "b"
        Question
          Identifier "c"
          Identifier "d"
          Identifier "e"
    "#);
}

#[test]
fn conditional_requires_colon() {
    let res = SyntaxTree::expect_invalid("a ? b;");
    insta::assert_snapshot!(res, @"1:6: error[E0002]: expected `:`, found `;`");
}

#[test]
fn comma_list_wraps_only_multiple_elements() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("a, b, c;"), @r#"
    Program
      CommaExpr
        Identifier "a"
        Identifier "b"
        Identifier "c"
    "#);

    insta::assert_snapshot!(SyntaxTree::expect_valid("a;"), @r#"
    Program
      Identifier "a"
    "#);
}

#[test]
fn parentheses_are_kept() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("(a, b) * (c);"), @r#"
    Program
      Star
        ParExpr
          CommaExpr
            Identifier "a"
            Identifier "b"
        ParExpr
          Identifier "c"
    "#);
}

#[test]
fn call_chains() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("f(a, b)(c).d[0]();"), @r#"
    Program
      Call
        ByIndex
          ByField
            Call
              Call
                Identifier "f"
                Args
                  Identifier "a"
                  Identifier "b"
              Args
                Identifier "c"
            Identifier "d"
          DecimalLiteral "0"
        Args
    "#);
}

#[test]
fn new_binds_to_primary_only() {
    let input = indoc! {r#"
    new Foo;
    new Foo(a);
    new a.b();
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwNew
        Identifier "Foo"
      Call
        KwNew
          Identifier "Foo"
        Args
          Identifier "a"
      Call
        ByField
          KwNew
            Identifier "a"
          Identifier "b"
        Args
    "#);
}

#[test]
fn nested_new_is_rejected() {
    let res = SyntaxTree::expect_invalid("new new X();");
    insta::assert_snapshot!(res, @"1:5: error[E0001]: expected expression, found `new`");
}

#[test]
fn regex_and_division() {
    let input = indoc! {r#"
    x = /ab+c/g.test(s);
    y = b / c / d;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      Eq
        Identifier "x"
        Call
          ByField
            RegexLiteral "/ab+c/g"
            Identifier "test"
          Args
            Identifier "s"
      Eq
        Identifier "y"
        Slash
          Slash
            Identifier "b"
            Identifier "c"
          Identifier "d"
    "#);
}

#[test]
fn expression_continues_across_lines() {
    let input = indoc! {r#"
    a
    + b;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      Plus
        Identifier "a"
        Identifier "b"
    "#);
}

#[test]
fn trailing_comma_in_arguments_is_rejected() {
    let res = SyntaxTree::expect_invalid("f(a,);");
    insta::assert_snapshot!(res, @"1:5: error[E0001]: expected expression, found `)`");
}

#[test]
fn field_name_must_be_identifier() {
    let res = SyntaxTree::expect_invalid("a.if;");
    insta::assert_snapshot!(res, @"1:3: error[E0002]: expected identifier, found `if`");
}
