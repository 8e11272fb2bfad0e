//! Command-line interface for the `mdrop` CLI application.

mod build;
pub mod constants;

use clap::Parser;
use eyre::{Result, eyre};
use mdrop_sdk::common::DuplicatePolicy;
use mdrop_tree::HashAlgorithm;

pub use self::build::BuildArgs;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "mdrop")]
#[command(about = "Merkle commitments for airdrop allocations")]
pub struct Cli {
    /// CLI top-level command.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Build the Merkle root and per-entry inclusion proofs from a CSV file.
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Print the JSON schema of `root.json` and `leaves.json`.
    Schema,
}

pub fn parse_hash_algorithm(s: &str) -> Result<HashAlgorithm> {
    HashAlgorithm::from_str_name(s).ok_or_else(|| {
        eyre!("Invalid hash algorithm: {s}. Expected 'keccak256' or 'sha256'.")
    })
}

pub fn parse_duplicate_policy(s: &str) -> Result<DuplicatePolicy> {
    DuplicatePolicy::from_str_name(s).ok_or_else(|| {
        eyre!("Invalid duplicates policy: {s}. Expected 'allow', 'warn', or 'reject'.")
    })
}
