use indoc::indoc;

use crate::parser::SyntaxTree;

#[test]
fn declaration() {
    let input = "function add(a, b) { return a + b; }";

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwFunction
        Identifier "add"
        Args
          Identifier "a"
          Identifier "b"
        Block
          KwReturn
            Plus
              Identifier "a"
              Identifier "b"
    "#);
}

#[test]
fn anonymous_expression_has_no_name_child() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("var f = function (x) { };"), @r#"
    Program
      KwVar
        Eq
          Identifier "f"
          KwFunction
            Args
              Identifier "x"
            Block
    "#);
}

#[test]
fn named_expression_called_immediately() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("(function g() {})();"), @r#"
    Program
      Call
        ParExpr
          KwFunction
            Identifier "g"
            Args
            Block
        Args
    "#);
}

#[test]
fn body_holds_nested_declarations() {
    let input = indoc! {r#"
    function outer() {
      function inner() {}
      return inner;
    }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwFunction
        Identifier "outer"
        Args
        Block
          KwFunction
            Identifier "inner"
            Args
            Block
          KwReturn
            Identifier "inner"
    "#);
}

#[test]
fn declaration_requires_name() {
    let res = SyntaxTree::expect_invalid("function () {}");
    insta::assert_snapshot!(res, @"1:10: error[E0002]: expected identifier, found `(`");
}

#[test]
fn parameters_reject_trailing_comma() {
    let res = SyntaxTree::expect_invalid("function f(a,) {}");
    insta::assert_snapshot!(res, @"1:14: error[E0002]: expected identifier, found `)`");
}

#[test]
fn unclosed_body() {
    let res = SyntaxTree::expect_invalid("function f() { a;");
    insta::assert_snapshot!(res, @"1:18: error[E0002]: expected `}`, found end of input");
}
