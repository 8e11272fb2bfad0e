//! Commitment build command: entries in, root and per-leaf proofs out.

use std::path::Path;

use mdrop_core::base::{Address, Digest, EntryError, RawEntry};
use mdrop_core::schema::output::{LEAVES_FILE_NAME, LeafRecord, ROOT_FILE_NAME, RootFile};
use mdrop_tree::{HashAlgorithm, MerkleTree, MerkleTreeError, leaf_digests, should_report_progress};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::duplicate_addresses::check_duplicate_addresses;
use super::entries_source::read_entries;
use crate::common::{BuildConfig, DuplicatePolicy};

/// Reasons a commitment cannot be produced. Any of them aborts the whole run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommitError {
    /// An input row does not describe a valid entry.
    #[error("Malformed entry at index {index}: {source}")]
    MalformedEntry {
        /// 0-based position of the row in the input.
        index: usize,
        /// What is wrong with it.
        source: EntryError,
    },

    /// An address repeats while duplicates are rejected.
    #[error("Duplicate address {address} at index {index} (first seen at index {first_index})")]
    DuplicateAddress {
        /// The repeated address.
        address: Address,
        /// Index of its first occurrence.
        first_index: usize,
        /// Index of the repeat.
        index: usize,
    },

    /// The tree could not produce a proof.
    #[error(transparent)]
    Tree(#[from] MerkleTreeError),
}

/// Everything a completed run persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitmentOutput {
    /// Content of `root.json`.
    pub root: RootFile,
    /// Content of `leaves.json`, in input order.
    pub leaves: Vec<LeafRecord>,
}

/// Build the commitment for already loaded rows, without touching the file system.
///
/// Every row is validated before anything is hashed. An empty input commits to the zero root.
///
/// # Errors
/// Returns an error if a row is malformed or the duplicate policy rejects the set.
pub fn commit_entries(
    rows: &[RawEntry],
    hash: HashAlgorithm,
    duplicates: DuplicatePolicy,
) -> Result<CommitmentOutput, CommitError> {
    let entries = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.parse()
                .map_err(|source| CommitError::MalformedEntry { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let repeated = check_duplicate_addresses(&entries, duplicates)?;
    if repeated > 0 {
        info!(repeated, "Entries sharing an address are committed separately");
    }
    if entries.is_empty() {
        warn!("No entries supplied, committing to the zero root");
    }

    let hasher = hash.hasher();
    let leaves = leaf_digests(&*hasher, &entries);
    info!(count = leaves.len(), hash = hasher.name(), "Encoded leaves");

    let mut last_pct = 0_usize;
    let tree = MerkleTree::build_with_progress(&*hasher, leaves, |done, total| {
        if should_report_progress(done, total, &mut last_pct) {
            info!(done, total, "Hashing tree");
        }
    });

    let leaf_layer = tree.layer(0).unwrap_or_default();
    let leaves = rows
        .iter()
        .zip(leaf_layer)
        .enumerate()
        .map(|(index, (row, leaf))| {
            Ok(LeafRecord {
                address: row.address.clone(),
                amount: row.amount.clone(),
                leaf: *leaf,
                proof: tree.proof(index)?,
            })
        })
        .collect::<Result<Vec<_>, CommitError>>()?;

    Ok(CommitmentOutput {
        root: RootFile {
            merkle_root: tree.root(),
        },
        leaves,
    })
}

/// Build the commitment for a CSV file and write `root.json` and `leaves.json`.
///
/// Nothing is written unless every entry is valid and every proof was generated.
///
/// # Errors
/// Returns an error if reading, validation or writing fails.
#[instrument(skip_all, fields(csv = %config.csv.display(), hash = %config.hash))]
pub async fn build_commitment(config: BuildConfig) -> eyre::Result<CommitmentOutput> {
    let BuildConfig {
        csv,
        out_dir,
        hash,
        duplicates,
    } = config;
    let rows = read_entries(&csv).await?;

    let output =
        tokio::task::spawn_blocking(move || commit_entries(&rows, hash, duplicates)).await??;

    write_outputs(&out_dir, &output).await?;
    print_root(output.root.merkle_root);

    Ok(output)
}

async fn write_outputs(out_dir: &Path, output: &CommitmentOutput) -> eyre::Result<()> {
    let root_json = serde_json::to_string_pretty(&output.root)?;
    let leaves_json = serde_json::to_string_pretty(&output.leaves)?;

    tokio::fs::create_dir_all(out_dir).await?;

    let root_path = out_dir.join(ROOT_FILE_NAME);
    tokio::fs::write(&root_path, root_json).await?;
    info!(file = ?root_path, "Exported root");

    let leaves_path = out_dir.join(LEAVES_FILE_NAME);
    tokio::fs::write(&leaves_path, leaves_json).await?;
    info!(file = ?leaves_path, count = output.leaves.len(), "Exported leaves");

    Ok(())
}

#[allow(clippy::print_stdout, reason = "The root is the result of the command")]
fn print_root(root: Digest) {
    println!("Merkle root: {root}");
}
