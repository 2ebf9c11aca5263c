use indoc::indoc;

use crate::DiagnosticKind;
use crate::config::ParserConfig;
use crate::parser::{SyntaxTree, parse_with};

#[test]
fn stray_closing_brace_at_top_level() {
    let input = indoc! {r#"
    }
    var a;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      Error
      KwVar
        Identifier "a"
    ---
    1:1: error[E0001]: expected statement, found `}`
    "#);
}

#[test]
fn unrecognized_characters() {
    let input = indoc! {r#"
    a = 1;
    @@ b;
    c;
    "#};

    insta::assert_snapshot!(SyntaxTree::expect_recovered(input), @r#"
    Program
      Eq
        Identifier "a"
        DecimalLiteral "1"
      Error
      Identifier "c"
    ---
    2:1: error[E0004]: expected statement, found unrecognized input
    "#);
}

#[test]
fn outer_failure_discards_inner_diagnostics() {
    insta::assert_snapshot!(SyntaxTree::expect_recovered("if (a) { b = ; } else"), @r#"
    Program
      Error
    ---
    1:22: error[E0001]: expected statement, found end of input
    "#);
}

#[test]
fn rejected_assignment_is_a_failed_predicate() {
    insta::assert_snapshot!(SyntaxTree::expect_recovered("a + b = c;\nd;"), @r#"
    Program
      Error
      Identifier "d"
    ---
    1:1: error[E0003]: invalid assignment target
    "#);
}

#[test]
fn every_failure_is_reported_in_order() {
    let input = indoc! {r#"
    var = 1;
    ok();
    f(1 +);
    x = ?;
    "#};

    let tree = parse_with(input, &ParserConfig::new().recovery(true)).unwrap();
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            DiagnosticKind::MismatchedToken,
            DiagnosticKind::NoViableAlternative,
            DiagnosticKind::NoViableAlternative,
        ]
    );

    let errors = tree.root().children().iter().filter(|n| n.is_error()).count();
    assert_eq!(errors, 3);
    assert_eq!(tree.root().children().len(), 4);
}

#[test]
fn diagnostics_render_with_source() {
    let input = "a = ;\n";
    let tree = parse_with(input, &ParserConfig::new().recovery(true)).unwrap();
    let rendered = tree.dump_diagnostics();

    assert!(rendered.contains("error[E0001]: expected expression, found `;`"));
    assert!(rendered.contains("while parsing expression statement"));
}
