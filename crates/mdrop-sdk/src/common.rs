//! CLI-independent configuration types.

use std::fmt;
use std::path::PathBuf;

use mdrop_tree::HashAlgorithm;

/// What to do when the same address appears in more than one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Accept silently. Every occurrence gets its own leaf.
    Allow,
    /// Accept, logging a warning per repeated address.
    #[default]
    Warn,
    /// Fail the run before anything is hashed.
    Reject,
}

impl DuplicatePolicy {
    /// Parse from CLI/config string.
    #[must_use]
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "allow" => Some(Self::Allow),
            "warn" => Some(Self::Warn),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    /// The name accepted by [`DuplicatePolicy::from_str_name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Warn => "warn",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one commitment run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// CSV file with `address,amount` columns.
    pub csv: PathBuf,
    /// Directory receiving `root.json` and `leaves.json`. Created if missing.
    pub out_dir: PathBuf,
    /// Hash function for leaves and internal nodes.
    pub hash: HashAlgorithm,
    /// Handling of repeated addresses.
    pub duplicates: DuplicatePolicy,
}
