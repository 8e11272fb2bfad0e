//! Foundational primitive types and byte/serde helpers.

mod digest;
mod entry;
mod utils;

pub use digest::{DIGEST_SIZE, Digest};
pub use entry::{ADDRESS_SIZE, AMOUNT_SIZE, Address, Amount, Entry, EntryError, RawEntry};
pub use utils::PrefixedHex;
