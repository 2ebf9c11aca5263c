use std::any::Any;
use std::io;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crossbeam::channel;
use crossbeam::deque::{Injector, Steal};
use crossbeam::thread;
use es3tree_core::LineIndex;
use es3tree_lib::diagnostics::Location;
use es3tree_lib::{Diagnostics, ParserConfig, Severity, parse_with};
use serde::Serialize;
use tracing::{debug, error, info};

use super::ParseOptions;
use super::source_loader::{collect_sources, read_file};

/// Deeply nested sources recurse deeply; workers get far more stack than the default.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Report format of `check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub parse: ParseOptions,
    pub format: OutputFormat,
    pub jobs: Option<usize>,
    pub compact: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to spawn worker: {0}")]
    Spawn(#[from] io::Error),

    #[error("a worker thread panicked")]
    WorkerPanicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read and parsed. Diagnostics are empty for a valid program.
    Checked {
        text: String,
        diagnostics: Diagnostics,
    },
    Unreadable {
        message: String,
    },
    /// Checking the file panicked. The rest of the batch is unaffected.
    Crashed {
        message: String,
    },
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        match &self.outcome {
            FileOutcome::Checked { diagnostics, .. } => !diagnostics.has_errors(),
            FileOutcome::Unreadable { .. } | FileOutcome::Crashed { .. } => false,
        }
    }
}

pub fn run(args: CheckArgs) {
    let files = match collect_sources(&args.paths) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let config = args.parse.config();
    let jobs = args.jobs.unwrap_or_else(default_jobs);
    let reports = match check_files(&files, &config, jobs) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(files = reports.len(), failed, jobs, "check finished");

    match args.format {
        OutputFormat::Text => eprint!("{}", render_text(&reports, args.compact, args.color)),
        OutputFormat::Json => match render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: failed to serialize report: {}", err);
                std::process::exit(1);
            }
        },
    }

    // Silent on success (like cargo check)
    if failed > 0 {
        std::process::exit(1);
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Parses every file on a pool of `jobs` workers. Reports come back in input order,
/// and one malformed, unreadable or crashing file never stops the others.
pub fn check_files(
    files: &[PathBuf],
    config: &ParserConfig,
    jobs: usize,
) -> Result<Vec<FileReport>, PoolError> {
    run_pool(files, jobs, |path| check_file(path, config))
}

pub(super) fn run_pool<F>(
    files: &[PathBuf],
    jobs: usize,
    check: F,
) -> Result<Vec<FileReport>, PoolError>
where
    F: Fn(&Path) -> FileReport + Sync,
{
    let queue = Injector::new();
    for job in files.iter().enumerate() {
        queue.push(job);
    }

    let workers = jobs.clamp(1, files.len().max(1));
    let (sender, receiver) = channel::unbounded();
    let check = &check;

    let spawned = thread::scope(|scope| -> io::Result<()> {
        for id in 0..workers {
            let sender = sender.clone();
            let queue = &queue;
            scope
                .builder()
                .name(format!("es3tree-worker-{}", id))
                .stack_size(WORKER_STACK_SIZE)
                .spawn(move |_| {
                    while let Some((position, path)) = next_job(queue) {
                        let report = isolate_panic(path, check);
                        // The receiver outlives the scope, so sending cannot fail.
                        let _ = sender.send((position, report));
                    }
                })?;
        }
        Ok(())
    });
    drop(sender);

    match spawned {
        Ok(result) => result?,
        Err(_) => return Err(PoolError::WorkerPanicked),
    }

    let mut reports: Vec<_> = receiver.into_iter().collect();
    reports.sort_by_key(|(position, _)| *position);
    Ok(reports.into_iter().map(|(_, report)| report).collect())
}

/// Turns a panic while checking `path` into a `Crashed` report for that file.
fn isolate_panic<F>(path: &Path, check: &F) -> FileReport
where
    F: Fn(&Path) -> FileReport,
{
    panic::catch_unwind(AssertUnwindSafe(|| check(path))).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        error!(path = %path.display(), %message, "check panicked");
        FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Crashed { message },
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

fn next_job<T>(queue: &Injector<T>) -> Option<T> {
    loop {
        match queue.steal() {
            Steal::Success(job) => return Some(job),
            Steal::Empty => return None,
            Steal::Retry => continue,
        }
    }
}

pub fn check_file(path: &Path, config: &ParserConfig) -> FileReport {
    let text = match read_file(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable");
            return FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Unreadable {
                    message: err.to_string(),
                },
            };
        }
    };

    let diagnostics = match parse_with(&text, config) {
        Ok(tree) => tree.diagnostics().clone(),
        Err(err) => err.to_diagnostics(),
    };
    debug!(
        path = %path.display(),
        errors = diagnostics.error_count(),
        "checked"
    );

    FileReport {
        path: path.to_path_buf(),
        outcome: FileOutcome::Checked { text, diagnostics },
    }
}

pub fn render_text(reports: &[FileReport], compact: bool, colored: bool) -> String {
    let mut out = String::new();
    for report in reports {
        let name = report.path.display().to_string();
        match &report.outcome {
            FileOutcome::Checked { diagnostics, .. } if diagnostics.is_empty() => {}
            FileOutcome::Checked { text, diagnostics } => {
                let rendered = diagnostics
                    .printer()
                    .source(text)
                    .path(&name)
                    .colored(colored)
                    .compact(compact)
                    .render();
                out.push_str(&rendered);
                if !compact && !rendered.ends_with('\n') {
                    out.push('\n');
                }
            }
            FileOutcome::Unreadable { message } => {
                out.push_str("error: ");
                out.push_str(message);
                out.push('\n');
            }
            FileOutcome::Crashed { message } => {
                out.push_str(&format!("error: {}: parser crashed: {}\n", name, message));
            }
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    checked: usize,
    failed: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    severity: Severity,
    message: &'a str,
    location: Location,
    hints: &'a [String],
}

pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    let files: Vec<_> = reports.iter().map(json_file).collect();
    let report = JsonReport {
        checked: files.len(),
        failed: files.iter().filter(|f| !f.ok).count(),
        files,
    };
    serde_json::to_string_pretty(&report)
}

fn json_file(report: &FileReport) -> JsonFile<'_> {
    let path = report.path.display().to_string();
    match &report.outcome {
        FileOutcome::Checked { text, diagnostics } => {
            let index = LineIndex::new(text);
            JsonFile {
                path,
                ok: report.is_ok(),
                error: None,
                diagnostics: diagnostics
                    .iter()
                    .map(|d| JsonDiagnostic {
                        code: d.code(),
                        severity: d.severity(),
                        message: d.message(),
                        location: d.locate(&index),
                        hints: d.hints(),
                    })
                    .collect(),
            }
        }
        FileOutcome::Unreadable { message } | FileOutcome::Crashed { message } => JsonFile {
            path,
            ok: false,
            error: Some(message.as_str()),
            diagnostics: Vec::new(),
        },
    }
}
