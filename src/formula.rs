//! Pattern-based rewriting of the `version` and `sha256` fields of a
//! Homebrew formula.
//!
//! The formula is treated as opaque text. Only `version "<value>"` and
//! `sha256 "<value>"` are recognised; everything else is copied through
//! byte for byte. A field with no match is left alone without complaint,
//! the caller decides whether that deserves a warning.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static VERSION_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s"[0-9A-Za-z_.]+""#).expect("version field pattern is valid")
});

static SHA256_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"sha256\s"[0-9A-Za-z_]+""#).expect("sha256 field pattern is valid")
});

/// A formula field this tool rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaField {
    Version,
    Sha256,
}

impl FormulaField {
    pub fn name(&self) -> &'static str {
        match self {
            FormulaField::Version => "version",
            FormulaField::Sha256 => "sha256",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FormulaField::Version => &VERSION_FIELD,
            FormulaField::Sha256 => &SHA256_FIELD,
        }
    }

    fn render(&self, value: &str) -> String {
        format!("{} \"{}\"", self.name(), value)
    }
}

impl fmt::Display for FormulaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of rewriting a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub version_matches: usize,
    pub sha256_matches: usize,
}

impl Substitution {
    pub fn matches(&self, field: FormulaField) -> usize {
        match field {
            FormulaField::Version => self.version_matches,
            FormulaField::Sha256 => self.sha256_matches,
        }
    }

    /// Fields that had no occurrence in the formula and were left untouched.
    pub fn missing_fields(&self) -> Vec<FormulaField> {
        [FormulaField::Version, FormulaField::Sha256]
            .into_iter()
            .filter(|field| self.matches(*field) == 0)
            .collect()
    }
}

/// Replace every `version "..."` and `sha256 "..."` occurrence in `content`.
///
/// Both patterns are matched against the original text and spliced in a
/// single pass, so neither replacement can feed into the other. Values are
/// inserted literally.
pub fn substitute(content: &str, version: &str, sha256: &str) -> Substitution {
    let mut spans: Vec<(Range<usize>, FormulaField)> =
        [FormulaField::Version, FormulaField::Sha256]
            .into_iter()
            .flat_map(|field| {
                field
                    .pattern()
                    .find_iter(content)
                    .map(move |m| (m.range(), field))
            })
            .collect();
    spans.sort_by_key(|(range, _)| range.start);

    let version_text = FormulaField::Version.render(version);
    let sha256_text = FormulaField::Sha256.render(sha256);

    let mut rewritten = String::with_capacity(content.len());
    let mut version_matches = 0;
    let mut sha256_matches = 0;
    let mut cursor = 0;

    for (range, field) in spans {
        // The two patterns cannot overlap; keep the earlier span if they ever do.
        if range.start < cursor {
            continue;
        }
        rewritten.push_str(&content[cursor..range.start]);
        match field {
            FormulaField::Version => {
                rewritten.push_str(&version_text);
                version_matches += 1;
            }
            FormulaField::Sha256 => {
                rewritten.push_str(&sha256_text);
                sha256_matches += 1;
            }
        }
        cursor = range.end;
    }
    rewritten.push_str(&content[cursor..]);

    Substitution {
        content: rewritten,
        version_matches,
        sha256_matches,
    }
}
