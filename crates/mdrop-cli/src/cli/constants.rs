//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

pub const MDROP_CSV: &str = "MDROP_CSV";
pub const MDROP_OUT: &str = "MDROP_OUT";
pub const MDROP_HASH: &str = "MDROP_HASH";
pub const MDROP_DUPLICATES: &str = "MDROP_DUPLICATES";

// -------------------------
// Defaults
// -------------------------

pub const DEFAULT_OUT_DIR: &str = "./out";
pub const DEFAULT_HASH: &str = "keccak256";
pub const DEFAULT_DUPLICATES: &str = "warn";
