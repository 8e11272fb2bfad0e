//! Serialized schema/data contracts.

/// Persisted commitment output types.
pub mod output;
