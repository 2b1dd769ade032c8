use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FormulaUpdaterError, Result};

pub const GIT_REF_ENV: &str = "GIT_REF";
pub const FORMULA_REPO_DIR_ENV: &str = "FORMULA_REPO_DIR";

const SETTINGS_FILE: &str = "formula-updater.toml";

/// Required inputs for a formula update.
///
/// Built once at the entry point and handed to the workflow, so the update
/// itself never reads ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    pub git_ref: String,
    /// Always absolute.
    pub formula_repo_dir: PathBuf,
}

impl UpdaterConfig {
    /// Validates both required inputs and resolves the repository directory
    /// against `cwd` when it is relative.
    ///
    /// Missing and empty values are both rejected. `GIT_REF` is checked first.
    pub fn new(
        git_ref: Option<String>,
        formula_repo_dir: Option<String>,
        cwd: &Path,
    ) -> Result<Self> {
        let git_ref = require(git_ref, GIT_REF_ENV)?;
        let formula_repo_dir = require(formula_repo_dir, FORMULA_REPO_DIR_ENV)?;

        Ok(UpdaterConfig {
            git_ref,
            formula_repo_dir: resolve_repo_dir(Path::new(&formula_repo_dir), cwd),
        })
    }
}

fn require(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FormulaUpdaterError::config(format!(
            "env '{}' required",
            name
        ))),
    }
}

/// Joins a relative directory onto `cwd`; absolute paths pass through unchanged.
pub fn resolve_repo_dir(dir: &Path, cwd: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    }
}

/// Directory holding this crate's manifest. Relative archive paths are
/// anchored here.
pub fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn default_formula_file() -> PathBuf {
    PathBuf::from("Formula").join("gpm.rs.rb")
}

fn default_archive() -> PathBuf {
    PathBuf::from("target/x86_64-apple-darwin/release/gpm_darwin_amd64.tar.gz")
}

/// Optional settings for where the formula and release archive live.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Formula path relative to the formula repository.
    #[serde(default = "default_formula_file")]
    pub formula_file: PathBuf,

    /// Release archive; relative paths resolve against [`project_root`].
    #[serde(default = "default_archive")]
    pub archive: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            formula_file: default_formula_file(),
            archive: default_archive(),
        }
    }
}

impl Settings {
    pub fn formula_path(&self, formula_repo_dir: &Path) -> PathBuf {
        formula_repo_dir.join(&self.formula_file)
    }

    pub fn archive_path(&self) -> PathBuf {
        if self.archive.is_absolute() {
            self.archive.clone()
        } else {
            project_root().join(&self.archive)
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `formula-updater.toml` in current directory
/// 3. `.formula-updater.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    let path = if let Some(path) = settings_path {
        PathBuf::from(path)
    } else if Path::new(SETTINGS_FILE).exists() {
        PathBuf::from(SETTINGS_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", SETTINGS_FILE));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    let settings_str =
        fs::read_to_string(&path).map_err(|e| FormulaUpdaterError::read(&path, e))?;
    toml::from_str(&settings_str).map_err(|e| {
        FormulaUpdaterError::settings(format!("{}: {}", path.display(), e))
    })
}
