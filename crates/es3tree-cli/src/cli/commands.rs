//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. `check` and
//! `tree` accept the same parser flags; `tokens` accepts them hidden so a command
//! line can be switched between subcommands without editing the flags.

use clap::Command;

use super::args::*;

/// Flags that shape a parse.
fn with_parser_args(cmd: Command, hidden: bool) -> Command {
    cmd.arg(recover_arg().hide(hidden))
        .arg(literal_targets_arg().hide(hidden))
        .arg(recursion_limit_arg().hide(hidden))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("es3tree")
        .about("ECMAScript 3 syntax trees for duplicate-code detection")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(tokens_command())
}

/// Parse files in parallel and report syntax errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Parse source files and report syntax errors")
        .override_usage(
            "\
  es3tree check <PATH>...
  es3tree check <DIR> -j <N>
  es3tree check <PATH>... --format json",
        )
        .after_help(
            r#"EXAMPLES:
  es3tree check app.js               # single file
  es3tree check src/ vendor/         # every .js file below both directories
  es3tree check src/ --recover       # report every broken statement, not just the first
  es3tree check src/ --format json   # machine-readable report on stdout
  es3tree check src/ -j 4 --compact  # four workers, one line per error"#,
        )
        .arg(paths_arg())
        .arg(format_arg())
        .arg(jobs_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_parser_args(cmd, false)
}

/// Print the syntax tree of one source.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the syntax tree of a source file")
        .override_usage(
            "\
  es3tree tree <SOURCE>
  es3tree tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  es3tree tree app.js                   # tree of a file
  es3tree tree -s 'a + b * c;'          # inline source
  es3tree tree app.js --spans           # with byte ranges
  es3tree tree app.js --recover         # error placeholders instead of failing
  cat app.js | es3tree tree -           # from stdin"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(spans_arg())
        .arg(token_spans_arg())
        .arg(color_arg());

    with_parser_args(cmd, false)
}

/// Print the token stream of one source.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a source file")
        .override_usage(
            "\
  es3tree tokens <SOURCE>
  es3tree tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  es3tree tokens app.js                 # significant tokens only
  es3tree tokens -s 'a\nb' --hidden     # include whitespace and line breaks
  es3tree tokens app.js --spans         # with byte ranges"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(hidden_arg())
        .arg(spans_arg());

    with_parser_args(cmd, true)
}
