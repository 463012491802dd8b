use std::path::PathBuf;

use crate::error::ConvertError;

#[derive(Debug)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// The JSON file this outcome is about
    pub source: PathBuf,
}

#[derive(Debug)]
pub enum OutcomeKind {
    /// A YAML file was written (path of the YAML file)
    Written(PathBuf),
    /// A YAML file was not written because of dry-run mode (path it would have had)
    Faked(PathBuf),
    /// The file was skipped because it does not list any user
    Empty,
    /// An error occurred
    Error(ConvertError),
}

impl Outcome {
    pub fn written(source: impl Into<PathBuf>, yaml: PathBuf) -> Self {
        Self {
            kind: OutcomeKind::Written(yaml),
            source: source.into(),
        }
    }
    pub fn faked(source: impl Into<PathBuf>, yaml: PathBuf) -> Self {
        Self {
            kind: OutcomeKind::Faked(yaml),
            source: source.into(),
        }
    }
    pub fn empty(source: impl Into<PathBuf>) -> Self {
        Self {
            kind: OutcomeKind::Empty,
            source: source.into(),
        }
    }
    pub fn error(source: impl Into<PathBuf>, error: ConvertError) -> Self {
        Self {
            kind: OutcomeKind::Error(error),
            source: source.into(),
        }
    }
}

/// Counts of outcomes, per kind, for the final report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub faked: usize,
    pub empty: usize,
    pub errors: usize,
}

impl<'a> FromIterator<&'a Outcome> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Outcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            match outcome.kind {
                OutcomeKind::Written(_) => summary.written += 1,
                OutcomeKind::Faked(_) => summary.faked += 1,
                OutcomeKind::Empty => summary.empty += 1,
                OutcomeKind::Error(_) => summary.errors += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} written, {} skipped (dry run), {} without users, {} failed",
            self.written, self.faked, self.empty, self.errors,
        )
    }
}
