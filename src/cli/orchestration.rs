//! Formula update workflow
//!
//! Everything between CLI parsing and terminal output: derive the version,
//! hash the archive, rewrite the formula and put it back on disk. The
//! workflow takes its inputs as values, so it can be driven from tests
//! without touching the process environment.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::boundary::BoundaryWarning;
use crate::config::{Settings, UpdaterConfig};
use crate::domain::{is_semver, GitRef, Sha256Digest};
use crate::error::{FormulaUpdaterError, Result};
use crate::formula;

/// Per-run options that are not part of the required configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateWorkflowArgs {
    /// Overrides the archive location from settings
    pub archive: Option<PathBuf>,

    /// Compute everything but leave the formula untouched
    pub dry_run: bool,
}

/// Result of a successful update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub formula_path: PathBuf,
    pub version: String,
    pub sha256: Sha256Digest,
    pub version_matches: usize,
    pub sha256_matches: usize,
    /// False on dry runs
    pub written: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Main update workflow
///
/// 1. Derive the version from the git reference
/// 2. Read the formula file
/// 3. Hash the release archive
/// 4. Rewrite `version` and `sha256` on the original content
/// 5. Atomically replace the formula (skipped on dry runs)
///
/// Any read or write failure aborts the run before the formula is replaced.
pub fn run_update_workflow(
    args: UpdateWorkflowArgs,
    config: &UpdaterConfig,
    settings: &Settings,
) -> Result<UpdateOutcome> {
    let mut warnings = Vec::new();

    let git_ref = GitRef::new(config.git_ref.as_str());
    let version = git_ref.version();
    if !git_ref.is_tag() {
        warnings.push(BoundaryWarning::UnexpectedRef {
            git_ref: git_ref.raw.clone(),
        });
    }
    if !is_semver(&version) {
        warnings.push(BoundaryWarning::NonSemverVersion {
            version: version.clone(),
        });
    }

    let formula_path = settings.formula_path(&config.formula_repo_dir);
    let content = fs::read_to_string(&formula_path)
        .map_err(|e| FormulaUpdaterError::read(&formula_path, e))?;

    let archive_path = args.archive.unwrap_or_else(|| settings.archive_path());
    let sha256 = Sha256Digest::of_file(&archive_path)?;

    let substitution = formula::substitute(&content, &version, sha256.as_str());
    for field in substitution.missing_fields() {
        warnings.push(BoundaryWarning::FieldNotFound {
            field,
            path: formula_path.clone(),
        });
    }

    if !args.dry_run {
        write_atomic(&formula_path, &substitution.content)?;
    }

    Ok(UpdateOutcome {
        formula_path,
        version,
        sha256,
        version_matches: substitution.version_matches,
        sha256_matches: substitution.sha256_matches,
        written: !args.dry_run,
        warnings,
    })
}

/// Replace `path` with `content` via a temp file in the same directory and a
/// rename, so readers see either the old or the new formula.
///
/// Symlinks are followed, so the link target is replaced rather than the link.
/// The existing file's permissions carry over to the replacement.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let canonical_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let target = canonical_path.as_path();
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FormulaUpdaterError::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| FormulaUpdaterError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FormulaUpdaterError::write(path, e))?;

    if let Ok(metadata) = fs::metadata(target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| FormulaUpdaterError::write(path, e))?;
    }

    tmp.persist(target)
        .map_err(|e| FormulaUpdaterError::write(path, e.error))?;
    Ok(())
}
