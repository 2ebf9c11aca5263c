use std::path::PathBuf;

use es3tree_lib::parse_with;

use super::ParseOptions;
use super::source_loader::load_source;

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub parse: ParseOptions,
    pub spans: bool,
    pub token_spans: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let tree = match parse_with(&source.text, &args.parse.config()) {
        Ok(tree) => tree,
        Err(err) => {
            eprint!(
                "{}",
                err.to_diagnostics()
                    .printer()
                    .source(&source.text)
                    .path(&source.name)
                    .colored(args.color)
                    .render()
            );
            std::process::exit(1);
        }
    };

    print!(
        "{}",
        tree.root()
            .printer()
            .with_spans(args.spans)
            .with_token_spans(args.token_spans)
            .dump()
    );

    // Recovered trees are still printed; the discarded statements are reported after.
    if !tree.is_valid() {
        eprint!(
            "{}",
            tree.diagnostics()
                .printer()
                .source(tree.text())
                .path(&source.name)
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    }
}
