//! Hash capability injected into the tree.
//!
//! The tree never names a hash function directly; it only talks to a [`MerkleHasher`]. Keccak-256
//! is the committed choice for EVM verifiers, SHA-256 is available for other consumers.

use std::fmt;

use mdrop_core::base::{DIGEST_SIZE, Digest};
use sha2::Sha256;
use sha3::{Digest as _, Keccak256};

/// A hash function producing 32-byte digests, plus the rule for combining two nodes.
pub trait MerkleHasher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Hash an arbitrary byte string.
    fn hash(&self, data: &[u8]) -> Digest;

    /// Combine two child digests into their parent.
    ///
    /// Defaults to the sorted pair rule of [`combine_sorted`].
    fn combine(&self, a: &Digest, b: &Digest) -> Digest {
        combine_sorted(self, a, b)
    }
}

/// Hash the two digests with the smaller one first.
///
/// Digests compare as unsigned big-endian byte strings, so `combine_sorted(h, a, b)` equals
/// `combine_sorted(h, b, a)`.
pub fn combine_sorted<H: MerkleHasher + ?Sized>(hasher: &H, a: &Digest, b: &Digest) -> Digest {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut preimage = [0_u8; DIGEST_SIZE * 2];
    let (first, second) = preimage.split_at_mut(DIGEST_SIZE);
    first.copy_from_slice(&low.to_bytes());
    second.copy_from_slice(&high.to_bytes());
    hasher.hash(&preimage)
}

/// Keccak-256 (the pre-standard SHA-3 padding used by the EVM).
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn name(&self) -> &'static str {
        HashAlgorithm::Keccak256.as_str()
    }

    fn hash(&self, data: &[u8]) -> Digest {
        let bytes: [u8; DIGEST_SIZE] = Keccak256::digest(data).into();
        Digest::new(bytes)
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn name(&self) -> &'static str {
        HashAlgorithm::Sha256.as_str()
    }

    fn hash(&self, data: &[u8]) -> Digest {
        let bytes: [u8; DIGEST_SIZE] = Sha256::digest(data).into();
        Digest::new(bytes)
    }
}

/// Selectable hash functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// Keccak-256.
    #[default]
    Keccak256,
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Parse from CLI/config string.
    #[must_use]
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "keccak256" => Some(Self::Keccak256),
            "sha256" => Some(Self::Sha256),
            _ => None,
        }
    }

    /// The name accepted by [`HashAlgorithm::from_str_name`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keccak256 => "keccak256",
            Self::Sha256 => "sha256",
        }
    }

    /// Instantiate the hasher.
    #[must_use]
    pub fn hasher(self) -> Box<dyn MerkleHasher> {
        match self {
            Self::Keccak256 => Box::new(Keccak256Hasher),
            Self::Sha256 => Box::new(Sha256Hasher),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn keccak_known_vectors() {
        assert_eq!(
            Keccak256Hasher.hash(b"").to_bytes(),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            Keccak256Hasher.hash(b"abc").to_bytes(),
            hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            Sha256Hasher.hash(b"abc").to_bytes(),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn combine_is_order_independent() {
        let a = Digest::new([1_u8; 32]);
        let b = Digest::new([2_u8; 32]);

        assert_eq!(Keccak256Hasher.combine(&a, &b), Keccak256Hasher.combine(&b, &a));
        assert_eq!(Sha256Hasher.combine(&a, &b), Sha256Hasher.combine(&b, &a));
    }

    #[test]
    fn combine_puts_smaller_digest_first() {
        let mut low = [0_u8; 32];
        low[31] = 0xff;
        let mut high = [0_u8; 32];
        high[0] = 0x01;

        let mut expected_preimage = Vec::with_capacity(64);
        expected_preimage.extend_from_slice(&low);
        expected_preimage.extend_from_slice(&high);

        assert_eq!(
            Keccak256Hasher.combine(&Digest::new(high), &Digest::new(low)),
            Keccak256Hasher.hash(&expected_preimage)
        );
    }

    #[test]
    fn combine_equal_digests() {
        let a = Digest::new([9_u8; 32]);
        assert_eq!(
            Keccak256Hasher.combine(&a, &a),
            Keccak256Hasher.hash(&[9_u8; 64])
        );
    }

    #[test]
    fn algorithm_names_roundtrip() {
        for algorithm in [HashAlgorithm::Keccak256, HashAlgorithm::Sha256] {
            assert_eq!(HashAlgorithm::from_str_name(algorithm.as_str()), Some(algorithm));
            assert_eq!(algorithm.hasher().name(), algorithm.as_str());
        }
        assert_eq!(HashAlgorithm::from_str_name("md5"), None);
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Keccak256);
    }
}
