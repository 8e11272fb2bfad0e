//! Leaf encoding.
//!
//! The preimage is `address (20 bytes) || amount (32 bytes, big-endian)`. On-chain verifiers
//! hardcode this layout, so changing it changes every root.

use mdrop_core::base::{ADDRESS_SIZE, AMOUNT_SIZE, Digest, Entry};

use crate::hasher::MerkleHasher;

/// Size in bytes of a leaf preimage.
pub const LEAF_PREIMAGE_SIZE: usize = 52;

const _: () = assert!(LEAF_PREIMAGE_SIZE == ADDRESS_SIZE + AMOUNT_SIZE);

/// Encode an entry into its fixed-size leaf preimage.
#[must_use]
pub fn leaf_preimage(entry: &Entry) -> [u8; LEAF_PREIMAGE_SIZE] {
    let mut preimage = [0_u8; LEAF_PREIMAGE_SIZE];
    let (address, amount) = preimage.split_at_mut(ADDRESS_SIZE);
    address.copy_from_slice(&entry.address.to_bytes());
    amount.copy_from_slice(&entry.amount.to_be_bytes());
    preimage
}

/// Hash an entry into its leaf digest.
#[must_use]
pub fn leaf_digest<H: MerkleHasher + ?Sized>(hasher: &H, entry: &Entry) -> Digest {
    hasher.hash(&leaf_preimage(entry))
}

/// Hash every entry, preserving order.
#[must_use]
pub fn leaf_digests<H: MerkleHasher + ?Sized>(hasher: &H, entries: &[Entry]) -> Vec<Digest> {
    entries
        .iter()
        .map(|entry| leaf_digest(hasher, entry))
        .collect()
}
