//! Entitlement records and their parsing rules.

use std::fmt;

use ethereum_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size in bytes of an encoded address.
pub const ADDRESS_SIZE: usize = 20;

/// Size in bytes of an encoded amount.
pub const AMOUNT_SIZE: usize = 32;

/// Reasons an input row cannot be turned into an [`Entry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The address is not valid hex.
    #[error("Address {value:?} is not valid hex")]
    InvalidAddressHex {
        /// The rejected input.
        value: String,
    },

    /// The address decoded to the wrong number of bytes.
    #[error("Address {value:?} decodes to {len} bytes, expected {ADDRESS_SIZE}")]
    InvalidAddressLength {
        /// The rejected input.
        value: String,
        /// Number of decoded bytes.
        len: usize,
    },

    /// The amount is not a non-negative integer.
    #[error("Amount {value:?} is not a valid non-negative integer")]
    InvalidAmount {
        /// The rejected input.
        value: String,
    },

    /// The amount does not fit into 32 bytes.
    #[error("Amount {value:?} does not fit into {AMOUNT_SIZE} bytes")]
    AmountOverflow {
        /// The rejected input.
        value: String,
    },
}

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Create an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    /// Parse a hex address, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns an error if the value is not hex or does not decode to exactly 20 bytes.
    pub fn parse(value: &str) -> Result<Self, EntryError> {
        let trimmed = value.trim();
        let digits = strip_hex_prefix(trimmed).unwrap_or(trimmed);
        let bytes = hex::decode(digits).map_err(|_| EntryError::InvalidAddressHex {
            value: trimmed.to_owned(),
        })?;
        let len = bytes.len();
        let bytes: [u8; ADDRESS_SIZE] =
            bytes
                .try_into()
                .map_err(|_| EntryError::InvalidAddressLength {
                    value: trimmed.to_owned(),
                    len,
                })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// An unsigned amount of at most 256 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(U256);

impl Amount {
    /// Create an amount from a 256-bit integer.
    #[must_use]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Parse an amount.
    ///
    /// Accepts a decimal digit string, or a `0x`-prefixed hex string. Surrounding whitespace is
    /// ignored; signs and inner whitespace are not.
    ///
    /// # Errors
    /// Returns an error if the value is not a non-negative integer or exceeds 256 bits.
    pub fn parse(value: &str) -> Result<Self, EntryError> {
        let trimmed = value.trim();
        let invalid = || EntryError::InvalidAmount {
            value: trimmed.to_owned(),
        };
        let overflow = || EntryError::AmountOverflow {
            value: trimmed.to_owned(),
        };

        if let Some(digits) = strip_hex_prefix(trimmed) {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let significant = digits.trim_start_matches('0');
            let hex_width = AMOUNT_SIZE.saturating_mul(2);
            if significant.len() > hex_width {
                return Err(overflow());
            }
            let padded = format!("{significant:0>hex_width$}");
            let mut bytes = [0_u8; AMOUNT_SIZE];
            hex::decode_to_slice(padded, &mut bytes).map_err(|_| invalid())?;
            return Ok(Self(U256::from_big_endian(&bytes)));
        }

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Only digits remain, so the only failure left is a value wider than 256 bits.
        U256::from_dec_str(trimmed)
            .map(Self)
            .map_err(|_| overflow())
    }

    /// The 32-byte big-endian encoding, zero-padded on the left.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; AMOUNT_SIZE] {
        let mut bytes = [0_u8; AMOUNT_SIZE];
        self.0.to_big_endian(&mut bytes);
        bytes
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated `(address, amount)` entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Recipient address.
    pub address: Address,
    /// Entitled amount.
    pub amount: Amount,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub const fn new(address: Address, amount: Amount) -> Self {
        Self { address, amount }
    }

    /// Parse an entry from its textual address and amount.
    ///
    /// # Errors
    /// Returns the first field error encountered, address first.
    pub fn parse(address: &str, amount: &str) -> Result<Self, EntryError> {
        Ok(Self {
            address: Address::parse(address)?,
            amount: Amount::parse(amount)?,
        })
    }
}

/// An input row as supplied by the input collaborator.
///
/// The textual values are kept so they can be echoed unchanged next to the computed proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Address text.
    pub address: String,
    /// Amount text.
    pub amount: String,
}

impl RawEntry {
    /// Create a new raw entry, trimming both values.
    #[must_use]
    pub fn new(address: &str, amount: &str) -> Self {
        Self {
            address: address.trim().to_owned(),
            amount: amount.trim().to_owned(),
        }
    }

    /// Validate the row.
    ///
    /// # Errors
    /// Returns an error if either field is malformed.
    pub fn parse(&self) -> Result<Entry, EntryError> {
        Entry::parse(&self.address, &self.amount)
    }
}

fn strip_hex_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}
