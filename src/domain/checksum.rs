use std::fmt;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{FormulaUpdaterError, Result};

/// Lowercase hex SHA-256 of a release archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Sha256Digest(format!("{:x}", Sha256::digest(bytes)))
    }

    /// Digest of the whole file, read in one go.
    ///
    /// # Errors
    ///
    /// Returns a read error naming `path` if the file is missing or unreadable.
    pub fn of_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| FormulaUpdaterError::read(path, e))?;
        Ok(Self::of_bytes(&bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_known_vectors() {
        assert_eq!(Sha256Digest::of_bytes(b"abc").as_str(), ABC_SHA256);
        assert_eq!(Sha256Digest::of_bytes(b"").as_str(), EMPTY_SHA256);
    }

    #[test]
    fn test_digest_shape() {
        let digest = Sha256Digest::of_bytes(&[0u8, 1, 2, 255]);
        assert_eq!(digest.as_str().len(), 64);
        assert!(digest
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_file_matches_bytes() {
        let mut archive = NamedTempFile::new().unwrap();
        archive.write_all(b"abc").unwrap();
        archive.flush().unwrap();

        let digest = Sha256Digest::of_file(archive.path()).unwrap();
        assert_eq!(digest.to_string(), ABC_SHA256);
        // Deterministic across reads.
        assert_eq!(digest, Sha256Digest::of_file(archive.path()).unwrap());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gpm_darwin_amd64.tar.gz");

        let err = Sha256Digest::of_file(&missing).unwrap_err();
        assert!(matches!(err, FormulaUpdaterError::Read { .. }));
        assert!(err.to_string().contains("gpm_darwin_amd64.tar.gz"));
    }
}
