//! Serde helpers for `U256` amounts.
//!
//! Amounts are written as decimal strings and read permissively: JSON
//! integers, decimal strings and 0x-prepended hexadecimal strings are all
//! accepted.

use ethers_core::types::U256;
use serde::{de, Deserialize, Deserializer, Serializer};
use std::fmt;

/// Parse a decimal or 0x-prepended hexadecimal string into a `U256`
pub fn parse_u256(s: &str) -> Option<U256> {
    if let Some(stripped) = s.strip_prefix("0x") {
        if stripped.is_empty() {
            return Some(U256::zero());
        }
        return U256::from_str_radix(stripped, 16).ok();
    }
    U256::from_dec_str(s).ok()
}

struct U256Visitor;

impl<'de> de::Visitor<'de> for U256Visitor {
    type Value = U256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer, a decimal string, or a 0x-prepended hexadecimal string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.into())
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.into())
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_u256(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Permissive deserialization of a `U256`
pub fn deser_u256<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(U256Visitor)
}

/// `#[serde(with = "u256_dec")]` for a single `U256` field
pub mod u256_dec {
    use super::*;

    /// Serialize as a decimal string
    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Permissive deserialization
    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        deser_u256(deserializer)
    }
}

/// `#[serde(with = "u256_map")]` for a `ChainMap<U256>` field
pub mod u256_map {
    use super::*;
    use crate::ChainMap;

    struct PermissiveU256(U256);

    impl<'de> Deserialize<'de> for PermissiveU256 {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deser_u256(deserializer).map(PermissiveU256)
        }
    }

    /// Serialize values as decimal strings
    pub fn serialize<S>(map: &ChainMap<U256>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(k, v)| (k, v.to_string())))
    }

    /// Permissive deserialization of values
    pub fn deserialize<'de, D>(deserializer: D) -> Result<ChainMap<U256>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = ChainMap::<PermissiveU256>::deserialize(deserializer)?;

        Ok(map.into_iter().map(|(k, v)| (k, v.0)).collect())
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::ChainMap;

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Amount {
        #[serde(with = "u256_dec")]
        amount: U256,
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Amounts {
        #[serde(with = "u256_map")]
        amounts: ChainMap<U256>,
    }

    #[test]
    fn it_parses_u256_strings() {
        assert_eq!(parse_u256("0"), Some(U256::zero()));
        assert_eq!(parse_u256("0x"), Some(U256::zero()));
        assert_eq!(parse_u256("0x10"), Some(U256::from(16)));
        assert_eq!(
            parse_u256("100000000000000000000000"),
            Some(U256::exp10(23))
        );
        assert_eq!(parse_u256("-1"), None);
        assert_eq!(parse_u256("1.5"), None);
        assert_eq!(parse_u256("0xzz"), None);
    }

    #[test]
    fn it_desers_permissive_amounts() {
        for val in [json!(30), json!("30"), json!("0x1e")] {
            let a: Amount = serde_json::from_value(json!({ "amount": val })).unwrap();
            assert_eq!(a.amount, U256::from(30));
        }

        assert!(serde_json::from_value::<Amount>(json!({ "amount": -3 })).is_err());
        assert!(serde_json::from_value::<Amount>(json!({ "amount": "thirty" })).is_err());
    }

    #[test]
    fn it_sers_amounts_as_decimal_strings() {
        let a = Amount {
            amount: U256::exp10(20),
        };
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({ "amount": "100000000000000000000" })
        );
    }

    #[test]
    fn it_sers_and_desers_amount_maps() {
        let val = json!({ "amounts": { "ethereum": "0x32", "polygon": 30 } });
        let a: Amounts = serde_json::from_value(val).unwrap();

        assert_eq!(a.amounts.get("ethereum"), Some(&U256::from(50)));
        assert_eq!(a.amounts.get("polygon"), Some(&U256::from(30)));
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({ "amounts": { "ethereum": "50", "polygon": "30" } })
        );
    }
}
