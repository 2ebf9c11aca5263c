//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ParseOptions;
use crate::commands::check::{CheckArgs, OutputFormat};
use crate::commands::tokens::TokensArgs;
use crate::commands::tree::TreeArgs;

pub struct CheckParams {
    pub paths: Vec<PathBuf>,
    pub parse: ParseOptions,
    pub format: OutputFormat,
    pub jobs: Option<usize>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: m
                .get_many::<PathBuf>("paths")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            parse: parse_options(m),
            format: parse_format(m),
            jobs: m.get_one::<usize>("jobs").copied(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            paths: p.paths,
            parse: p.parse,
            format: p.format,
            jobs: p.jobs,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub parse: ParseOptions,
    pub spans: bool,
    pub token_spans: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            parse: parse_options(m),
            spans: m.get_flag("spans"),
            token_spans: m.get_flag("token_spans"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            parse: p.parse,
            spans: p.spans,
            token_spans: p.token_spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub hidden: bool,
    pub spans: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            hidden: m.get_flag("hidden"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            hidden: p.hidden,
            spans: p.spans,
        }
    }
}

fn parse_options(m: &ArgMatches) -> ParseOptions {
    ParseOptions {
        recover: m.get_flag("recover"),
        literal_targets: m.get_flag("literal_targets"),
        recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
