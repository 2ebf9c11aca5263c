use es3tree_core::{LineCol, LineIndex, TextRange};

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Each kind carries a stable code that tooling can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum DiagnosticKind {
    /// Nesting exceeded the configured recursion limit. Always fatal.
    RecursionLimit,
    /// The token source contains characters no token matches.
    UnlexableInput,
    /// A required specific token is absent.
    MismatchedToken,
    /// No grammar alternative matches at a decision point.
    NoViableAlternative,
    /// A semantic guard rejected an otherwise plausible alternative.
    FailedPredicate,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoViableAlternative => "E0001",
            Self::MismatchedToken => "E0002",
            Self::FailedPredicate => "E0003",
            Self::UnlexableInput => "E0004",
            Self::RecursionLimit => "E0005",
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::NoViableAlternative => "no viable alternative",
            Self::MismatchedToken => "mismatched token",
            Self::FailedPredicate => "invalid construct",
            Self::UnlexableInput => "unrecognized input",
            Self::RecursionLimit => "recursion limit exceeded",
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::RecursionLimit => Some("input is nested too deeply"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Resolved user-facing position of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Location {
    pub start: LineCol,
    pub end: LineCol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    /// Index of the offending token, when one exists.
    pub(crate) token: Option<u32>,
    pub(crate) hints: Vec<String>,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        let hints = kind
            .default_hint()
            .map(|h| vec![h.to_string()])
            .unwrap_or_default();
        Self {
            kind,
            range,
            message: message.into(),
            token: None,
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn token(&self) -> Option<u32> {
        self.token
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Every parse failure is an error; recovery does not downgrade it.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn locate(&self, index: &LineIndex) -> Location {
        Location {
            start: index.line_col(self.range.start()),
            end: index.line_col(self.range.end()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] at {}..{}: {}",
            self.severity(),
            self.code(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
