//! Domain types for a formula update: the git reference the version comes
//! from and the checksum of the release archive.

pub mod checksum;
pub mod git_ref;

pub use checksum::Sha256Digest;
pub use git_ref::{is_semver, GitRef};
