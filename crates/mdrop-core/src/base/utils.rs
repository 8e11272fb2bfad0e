//! Serde helpers for core primitive types.

use serde::de::Error as _;
use serde::{Deserialize as _, Serialize as _};

use super::digest::{DIGEST_SIZE, Digest};

/// A `serde_as` adapter that hex-encodes bytes with a `0x` prefix.
///
/// This is the format consumed by EVM tooling. On input the prefix is optional.
pub struct PrefixedHex;

impl<const N: usize> serde_with::SerializeAs<[u8; N]> for PrefixedHex {
    fn serialize_as<S>(value: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        format!("0x{}", hex::encode(value)).serialize(serializer)
    }
}

impl<'de, const N: usize> serde_with::DeserializeAs<'de, [u8; N]> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(&text);
        let mut bytes = [0_u8; N];
        hex::decode_to_slice(digits, &mut bytes).map_err(D::Error::custom)?;
        Ok(bytes)
    }
}

impl serde_with::SerializeAs<Digest> for PrefixedHex {
    fn serialize_as<S>(value: &Digest, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <Self as serde_with::SerializeAs<[u8; DIGEST_SIZE]>>::serialize_as(
            &value.to_bytes(),
            serializer,
        )
    }
}

impl<'de> serde_with::DeserializeAs<'de, Digest> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<Digest, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: [u8; DIGEST_SIZE] =
            <Self as serde_with::DeserializeAs<'de, [u8; DIGEST_SIZE]>>::deserialize_as(
                deserializer,
            )?;
        Ok(Digest::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_with::serde_as;

    use super::*;

    #[serde_as]
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Sample {
        #[serde_as(as = "PrefixedHex")]
        short: [u8; 2],
        #[serde_as(as = "PrefixedHex")]
        digest: Digest,
        #[serde_as(as = "Vec<PrefixedHex>")]
        path: Vec<Digest>,
    }

    #[test]
    fn serializes_with_prefix() {
        let sample = Sample {
            short: [0xab, 0x01],
            digest: Digest::new([0x11; 32]),
            path: vec![Digest::ZERO],
        };
        let json = serde_json::to_value(&sample).expect("sample should serialize");
        assert_eq!(json["short"], "0xab01");
        assert_eq!(json["digest"], format!("0x{}", "11".repeat(32)));
        assert_eq!(json["path"][0], format!("0x{}", "00".repeat(32)));
    }

    #[test]
    fn prefix_is_optional_on_input() {
        let json = format!(
            r#"{{ "short": "AB01", "digest": "0x{}", "path": [] }}"#,
            "22".repeat(32)
        );
        let sample: Sample = serde_json::from_str(&json).expect("sample should deserialize");
        assert_eq!(sample.short, [0xab, 0x01]);
        assert_eq!(sample.digest, Digest::new([0x22; 32]));
    }

    #[test]
    fn rejects_wrong_length() {
        let json = r#"{ "short": "0xab", "digest": "0x00", "path": [] }"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }
}
