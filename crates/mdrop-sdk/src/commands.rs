//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod commitment;
mod duplicate_addresses;
mod entries_source;

pub use commitment::{CommitError, CommitmentOutput, build_commitment, commit_entries};
pub use entries_source::{parse_entries, read_entries};
use mdrop_core::schema::output::{LeafRecord, RootFile};

/// Generates and prints the JSON schemas of `root.json` and `leaves.json`.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn output_schema() -> eyre::Result<()> {
    let root_schema = serde_json::to_string_pretty(&schemars::schema_for!(RootFile))?;
    let leaves_schema = serde_json::to_string_pretty(&schemars::schema_for!(Vec<LeafRecord>))?;
    println!("root.json JSON Schema:\n{root_schema}");
    println!("leaves.json JSON Schema:\n{leaves_schema}");
    Ok(())
}
