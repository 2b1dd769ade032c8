use std::fmt;
use std::path::PathBuf;

use crate::formula::FormulaField;

/// Non-fatal conditions noticed during an update.
/// They are reported to the user but never stop the formula from being written.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The formula has no occurrence of a field, so it was left unchanged
    FieldNotFound { field: FormulaField, path: PathBuf },
    /// The version derived from the reference is not semantic versioning
    NonSemverVersion { version: String },
    /// The reference is not a tag, so it was used as the version verbatim
    UnexpectedRef { git_ref: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FieldNotFound { field, path } => {
                write!(
                    f,
                    "No {} \"...\" field found in '{}'; left unchanged",
                    field,
                    path.display()
                )
            }
            BoundaryWarning::NonSemverVersion { version } => {
                write!(f, "Version '{}' is not a semantic version", version)
            }
            BoundaryWarning::UnexpectedRef { git_ref } => {
                write!(
                    f,
                    "Reference '{}' is not under refs/tags/; using it verbatim",
                    git_ref
                )
            }
        }
    }
}
