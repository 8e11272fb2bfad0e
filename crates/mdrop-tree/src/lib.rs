//! Merkle commitment over `(address, amount)` entries.
//!
//! Leaves are `H(address || amount)` with a 20-byte address and a 32-byte big-endian amount.
//! Internal nodes are `H(min(a, b) || max(a, b))`, so proofs are plain sibling lists without
//! left/right markers. An unpaired node at the end of a layer is promoted unchanged.

mod error;
mod hasher;
mod leaf;
mod progress;
mod tree;

pub use error::MerkleTreeError;
pub use hasher::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher, combine_sorted};
pub use leaf::{LEAF_PREIMAGE_SIZE, leaf_digest, leaf_digests, leaf_preimage};
pub use progress::should_report_progress;
pub use tree::MerkleTree;
