//! Reading sources from files, stdin, inline text and directory trees.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const SOURCE_EXTENSION: &str = "js";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source required (positional or --source)")]
    NoSource,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no .js files found in '{}'", path.display())]
    EmptyDirectory { path: PathBuf },
}

/// A loaded source with the name diagnostics should show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub name: String,
    pub text: String,
}

/// Loads one source: inline text wins, `-` reads stdin, anything else is a file.
pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<LoadedSource, LoadError> {
    if let Some(text) = text {
        return Ok(LoadedSource {
            name: "<source>".to_string(),
            text: text.to_string(),
        });
    }

    let Some(path) = path else {
        return Err(LoadError::NoSource);
    };

    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(LoadError::Stdin)?;
        return Ok(LoadedSource {
            name: "<stdin>".to_string(),
            text,
        });
    }

    Ok(LoadedSource {
        name: path.display().to_string(),
        text: read_file(path)?,
    })
}

pub fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Expands directories into the `.js` files below them.
///
/// Explicit file arguments are kept whatever their extension. Files found in a
/// directory are sorted so reports come out in a stable order.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry.map_err(|source| LoadError::Walk {
                path: path.clone(),
                source,
            })?;
            if entry.file_type().is_file() && has_source_extension(entry.path()) {
                found.push(entry.into_path());
            }
        }

        if found.is_empty() {
            return Err(LoadError::EmptyDirectory { path: path.clone() });
        }

        found.sort();
        files.extend(found);
    }

    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}
