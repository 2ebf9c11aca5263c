use std::fmt::Write;
use std::path::PathBuf;

use es3tree_core::TokenSource;

use super::source_loader::load_source;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub hidden: bool,
    pub spans: bool,
}

pub fn run(args: TokensArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let tokens = TokenSource::lex(source.text);
    print!("{}", dump_tokens(&tokens, args.hidden, args.spans));
}

/// One line per token: index, kind, optional byte range and the token text.
///
/// Hidden-channel tokens are skipped unless `hidden` is set, and are marked with `~`
/// when shown. Indices are positions in the full stream either way.
pub fn dump_tokens(source: &TokenSource, hidden: bool, spans: bool) -> String {
    let mut out = String::new();
    for token in source.tokens() {
        if token.is_hidden() && !hidden {
            continue;
        }
        let marker = if token.is_hidden() { "~" } else { "" };
        write!(out, "#{}{} {:?}", token.index, marker, token.kind)
            .expect("String write never fails");
        if spans {
            let start = u32::from(token.range.start());
            let end = u32::from(token.range.end());
            write!(out, " [{}..{}]", start, end).expect("String write never fails");
        }
        writeln!(out, " {:?}", source.text_of(token)).expect("String write never fails");
    }
    out
}
