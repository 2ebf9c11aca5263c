//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands, so the
//! same definition is reused wherever a flag appears.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Files or directories to check (positional, one or more).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Source files or directories (directories are searched for .js files)")
}

/// Source file to parse (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to parse (use \"-\" for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges")
}

/// Show token index ranges (--token-spans).
pub fn token_spans_arg() -> Arg {
    Arg::new("token_spans")
        .long("token-spans")
        .action(ArgAction::SetTrue)
        .help("Show token index ranges")
}

/// Resynchronize after errors (--recover).
pub fn recover_arg() -> Arg {
    Arg::new("recover")
        .long("recover")
        .action(ArgAction::SetTrue)
        .help("Replace failed statements with error nodes and keep parsing")
}

/// Accept literals as assignment targets (--literal-targets).
pub fn literal_targets_arg() -> Arg {
    Arg::new("literal_targets")
        .long("literal-targets")
        .action(ArgAction::SetTrue)
        .help("Accept literal assignment targets such as `1 = 2`")
}

/// Nesting bound (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth (default: 64, 0 disables the check)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Worker count (-j/--jobs).
pub fn jobs_arg() -> Arg {
    Arg::new("jobs")
        .short('j')
        .long("jobs")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Number of parallel workers (default: available parallelism)")
}

/// Include hidden-channel tokens (--hidden).
pub fn hidden_arg() -> Arg {
    Arg::new("hidden")
        .long("hidden")
        .action(ArgAction::SetTrue)
        .help("Include whitespace, line terminators and comments")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

/// One line per diagnostic (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Print one line per diagnostic instead of source snippets")
}
