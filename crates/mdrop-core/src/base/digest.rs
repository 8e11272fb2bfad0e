//! Fixed-size hash output type.

use std::fmt;

/// Size in bytes of every digest produced by a Merkle hasher.
pub const DIGEST_SIZE: usize = 32;

/// A 32-byte hash output.
///
/// Ordering is the lexicographic order of the bytes, which is the same as comparing the digests
/// as unsigned big-endian integers. The sorted pair rule of the tree depends on this.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// The all-zero digest. Used as the root of a tree without leaves.
    pub const ZERO: Self = Self([0_u8; DIGEST_SIZE]);

    /// Create a digest from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex with a `0x` prefix.
    #[must_use]
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl AsRef<[u8; DIGEST_SIZE]> for Digest {
    fn as_ref(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
