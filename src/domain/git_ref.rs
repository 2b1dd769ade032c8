use std::sync::LazyLock;

use regex::Regex;

static TAG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^refs/tags/v?").expect("tag prefix pattern is valid")
});

/// A git reference as handed over by the release pipeline
/// (e.g. `refs/tags/v1.2.3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRef {
    pub raw: String,
}

impl GitRef {
    /// Wrap a raw reference; nothing is validated.
    pub fn new(raw: impl Into<String>) -> Self {
        GitRef { raw: raw.into() }
    }

    /// Version string with the leading `refs/tags/` and optional `v` removed.
    ///
    /// Whatever follows the prefix is returned as-is:
    /// `refs/tags/v1.2.3` -> `1.2.3`, `refs/tags/1.2.3-rc.1` -> `1.2.3-rc.1`.
    /// A reference without the prefix comes back unchanged.
    pub fn version(&self) -> String {
        TAG_PREFIX.replace_all(&self.raw, "").into_owned()
    }

    pub fn is_tag(&self) -> bool {
        TAG_PREFIX.is_match(&self.raw)
    }
}

/// Whether a derived version parses as semantic versioning.
pub fn is_semver(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}
