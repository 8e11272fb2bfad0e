//! Build subcommand arguments.

use std::path::PathBuf;

use mdrop_sdk::common::{BuildConfig, DuplicatePolicy};
use mdrop_tree::HashAlgorithm;

use super::constants::{
    DEFAULT_DUPLICATES, DEFAULT_HASH, DEFAULT_OUT_DIR, MDROP_CSV, MDROP_DUPLICATES, MDROP_HASH,
    MDROP_OUT,
};
use super::{parse_duplicate_policy, parse_hash_algorithm};

/// Arguments for `build`.
#[derive(Debug, clap::Args)]
pub struct BuildArgs {
    /// CSV file with `address` and `amount` columns.
    #[arg(long, env = MDROP_CSV)]
    pub csv: PathBuf,
    /// Output directory for `root.json` and `leaves.json`. Created if missing.
    #[arg(long, env = MDROP_OUT, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,
    /// Hash function for leaves and internal nodes.
    #[arg(
        long,
        env = MDROP_HASH,
        default_value = DEFAULT_HASH,
        value_parser = parse_hash_algorithm
    )]
    pub hash: HashAlgorithm,
    /// Handling of addresses that appear more than once.
    #[arg(
        long,
        env = MDROP_DUPLICATES,
        default_value = DEFAULT_DUPLICATES,
        value_parser = parse_duplicate_policy
    )]
    pub duplicates: DuplicatePolicy,
}

impl From<BuildArgs> for BuildConfig {
    fn from(args: BuildArgs) -> Self {
        Self {
            csv: args.csv,
            out_dir: args.out,
            hash: args.hash,
            duplicates: args.duplicates,
        }
    }
}
