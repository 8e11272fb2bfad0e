//! Tree errors.

use thiserror::Error;

/// Errors that can occur when working with the Merkle tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// A proof was requested for a leaf that does not exist.
    #[error("Leaf index {index} is out of range for a tree with {leaf_count} leaves")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
}
