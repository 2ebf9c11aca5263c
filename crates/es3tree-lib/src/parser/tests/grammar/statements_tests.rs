use indoc::indoc;

use crate::parser::SyntaxTree;

#[test]
fn variable_declarations() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("var a = 1, b;"), @r#"
    Program
      KwVar
        Eq
          Identifier "a"
          DecimalLiteral "1"
        Identifier "b"
    "#);
}

#[test]
fn variable_declaration_requires_name() {
    let res = SyntaxTree::expect_invalid("var 1;");
    insta::assert_snapshot!(res, @"1:5: error[E0002]: expected identifier, found number");
}

#[test]
fn empty_statement_and_blocks() {
    let input = indoc! {r#"
    ;
    { a; { } }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      Empty
      Block
        Identifier "a"
        Block
    "#);
}

#[test]
fn brace_at_statement_start_is_a_block() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("{ a: 1 }"), @r#"
    Program
      Block
        Labelled
          Identifier "a"
          DecimalLiteral "1"
    "#);
}

#[test]
fn if_else() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("if (a) b; else c;"), @r#"
    Program
      KwIf
        Identifier "a"
        Identifier "b"
        Identifier "c"
    "#);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("if (a) if (b) c; else d;"), @r#"
    Program
      KwIf
        Identifier "a"
        KwIf
          Identifier "b"
          Identifier "c"
          Identifier "d"
    "#);
}

#[test]
fn loops() {
    let input = indoc! {r#"
    do a++; while (b);
    while (a) {}
    with (o) x;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwDo
        PostInc
          Identifier "a"
        Identifier "b"
      KwWhile
        Identifier "a"
        Block
      KwWith
        Identifier "o"
        Identifier "x"
    "#);
}

#[test]
fn for_with_all_clauses_empty() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("for (;;) {}"), @r#"
    Program
      KwFor
        ForStep
          Expr
          Expr
          Expr
        Block
    "#);
}

#[test]
fn for_with_var_initializer() {
    let input = "for (var i = 0, n = a.length; i < n; i++) x;";

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwFor
        ForStep
          KwVar
            Eq
              Identifier "i"
              DecimalLiteral "0"
            Eq
              Identifier "n"
              ByField
                Identifier "a"
                Identifier "length"
          Expr
            Lt
              Identifier "i"
              Identifier "n"
          Expr
            PostInc
              Identifier "i"
        Identifier "x"
    "#);
}

#[test]
fn for_with_expression_initializer_and_missing_step() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("for (i = 0; i < n; ) ;"), @r#"
    Program
      KwFor
        ForStep
          Expr
            Eq
              Identifier "i"
              DecimalLiteral "0"
          Expr
            Lt
              Identifier "i"
              Identifier "n"
          Expr
        Empty
    "#);
}

#[test]
fn for_in_headers() {
    let input = indoc! {r#"
    for (var k in o) ;
    for (k in o) ;
    for (a.b in o) ;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwFor
        ForIter
          KwVar
            Identifier "k"
          Identifier "o"
        Empty
      KwFor
        ForIter
          Identifier "k"
          Identifier "o"
        Empty
      KwFor
        ForIter
          ByField
            Identifier "a"
            Identifier "b"
          Identifier "o"
        Empty
    "#);
}

#[test]
fn in_is_allowed_inside_parentheses_of_for_initializer() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("for (x = (a in b); ;) ;"), @r#"
    Program
      KwFor
        ForStep
          Expr
            Eq
              Identifier "x"
              ParExpr
                KwIn
                  Identifier "a"
                  Identifier "b"
          Expr
          Expr
        Empty
    "#);
}

#[test]
fn for_in_rejects_literal_target() {
    let res = SyntaxTree::expect_invalid("for (1 in o);");
    insta::assert_snapshot!(res, @"1:6: error[E0003]: invalid left-hand side in `for-in`");
}

#[test]
fn for_in_rejects_operator_target() {
    let res = SyntaxTree::expect_invalid("for (a + b in o);");
    insta::assert_snapshot!(res, @"1:12: error[E0002]: expected `;`, found `in`");
}

#[test]
fn jumps_and_labels() {
    let input = indoc! {r#"
    outer: for (;;) {
      continue;
      break outer;
    }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      Labelled
        Identifier "outer"
        KwFor
          ForStep
            Expr
            Expr
            Expr
          Block
            KwContinue
            KwBreak
              Identifier "outer"
    "#);
}

#[test]
fn return_and_throw() {
    let input = indoc! {r#"
    function f() {
      return;
      return a + 1;
      throw new Error(msg);
    }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwFunction
        Identifier "f"
        Args
        Block
          KwReturn
          KwReturn
            Plus
              Identifier "a"
              DecimalLiteral "1"
          KwThrow
            Call
              KwNew
                Identifier "Error"
              Args
                Identifier "msg"
    "#);
}

#[test]
fn switch_keeps_clauses_in_source_order() {
    let input = indoc! {r#"
    switch (x) {
      case 1:
        a();
        break;
      default:
        b();
      case 2:
    }
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwSwitch
        Identifier "x"
        KwCase
          DecimalLiteral "1"
          Call
            Identifier "a"
            Args
          KwBreak
        KwDefault
          Call
            Identifier "b"
            Args
        KwCase
          DecimalLiteral "2"
    "#);
}

#[test]
fn switch_rejects_second_default() {
    let res = SyntaxTree::expect_invalid("switch (x) { default: default: }");
    insta::assert_snapshot!(res, @"1:23: error[E0003]: multiple `default` clauses in `switch`");
}

#[test]
fn try_catch_finally() {
    let input = indoc! {r#"
    try { a(); } catch (e) { b(); } finally { c(); }
    try {} finally {}
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_valid(input), @r#"
    Program
      KwTry
        Block
          Call
            Identifier "a"
            Args
        KwCatch
          Identifier "e"
          Block
            Call
              Identifier "b"
              Args
        KwFinally
          Block
            Call
              Identifier "c"
              Args
      KwTry
        Block
        KwFinally
          Block
    "#);
}

#[test]
fn try_requires_a_handler() {
    let res = SyntaxTree::expect_invalid("try {}");
    insta::assert_snapshot!(res, @"1:7: error[E0001]: expected `catch` or `finally`, found end of input");
}

#[test]
fn function_in_block_is_an_expression_statement() {
    insta::assert_snapshot!(SyntaxTree::expect_valid("{ function f() {} }"), @r#"
    Program
      Block
        KwFunction
          Identifier "f"
          Args
          Block
    "#);
}

#[test]
fn reserved_word_cannot_start_a_statement() {
    let res = SyntaxTree::expect_invalid("class = 1;");
    insta::assert_snapshot!(res, @"1:1: error[E0001]: expected statement, found reserved word");
}
