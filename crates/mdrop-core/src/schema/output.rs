//! Files written by a completed commitment run.
//!
//! `root.json` holds a [`RootFile`], `leaves.json` holds a JSON array of [`LeafRecord`]s in input
//! order. Field names and hex formatting are consumed by external verifiers and must stay stable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::base::{Digest, PrefixedHex};

/// File name of the persisted root.
pub const ROOT_FILE_NAME: &str = "root.json";

/// File name of the persisted per-leaf records.
pub const LEAVES_FILE_NAME: &str = "leaves.json";

/// The published commitment.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RootFile {
    /// Merkle root, `0x`-prefixed lowercase hex.
    #[serde(rename = "merkleRoot")]
    #[serde_as(as = "PrefixedHex")]
    #[schemars(with = "String")]
    pub merkle_root: Digest,
}

/// One entry together with its leaf digest and inclusion proof.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LeafRecord {
    /// Address exactly as supplied in the input.
    pub address: String,
    /// Amount exactly as supplied in the input.
    pub amount: String,
    /// Leaf digest, `0x`-prefixed lowercase hex.
    #[serde_as(as = "PrefixedHex")]
    #[schemars(with = "String")]
    pub leaf: Digest,
    /// Sibling digests from the leaf level upwards.
    #[serde_as(as = "Vec<PrefixedHex>")]
    #[schemars(with = "Vec<String>")]
    pub proof: Vec<Digest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_file_json_format() {
        let root = RootFile {
            merkle_root: Digest::new([0xab; 32]),
        };
        let json = serde_json::to_string(&root).expect("root should serialize");
        assert_eq!(json, format!(r#"{{"merkleRoot":"0x{}"}}"#, "ab".repeat(32)));

        let back: RootFile = serde_json::from_str(&json).expect("root should deserialize");
        assert_eq!(back, root);
    }

    #[test]
    fn leaf_record_json_format() {
        // Documents the expected JSON format for consumers
        let json = format!(
            r#"{{
              "address": "0x0000000000000000000000000000000000000001",
              "amount": "100",
              "leaf": "0x{}",
              "proof": ["0x{}", "0x{}"]
            }}"#,
            "01".repeat(32),
            "02".repeat(32),
            "03".repeat(32)
        );

        let record: LeafRecord = serde_json::from_str(&json).expect("record should deserialize");
        assert_eq!(record.address, "0x0000000000000000000000000000000000000001");
        assert_eq!(record.amount, "100");
        assert_eq!(record.leaf, Digest::new([1; 32]));
        assert_eq!(
            record.proof,
            vec![Digest::new([2; 32]), Digest::new([3; 32])]
        );

        let value = serde_json::to_value(&record).expect("record should serialize");
        let keys: Vec<&String> = value
            .as_object()
            .expect("record should be an object")
            .keys()
            .collect();
        assert_eq!(keys, ["address", "amount", "leaf", "proof"]);
    }

    #[test]
    fn schemas_describe_hex_strings() {
        let schema = serde_json::to_value(schemars::schema_for!(RootFile))
            .expect("schema should serialize");
        assert_eq!(schema["properties"]["merkleRoot"]["type"], "string");
    }
}
