//! Common gas oracle data structures used across the stack (configuration,
//! core computation, tools)

mod error;
pub use error::*;

#[macro_use]
mod macros;

mod u256;
pub use u256::*;

pub use ethers_core::types::U256;

use std::{borrow::Borrow, collections::BTreeMap, fmt, str::FromStr};

/// A map keyed by chain name. Ordered, so serialized configs are stable
pub type ChainMap<T> = BTreeMap<ChainName, T>;

/// Opaque identifier of a chain (e.g. `ethereum`, `polygon`)
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ChainName(String);

impl ChainName {
    /// Instantiate a new ChainName. Names must be non-empty and contain only
    /// lowercase ascii letters, digits, `-` and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');

        if !valid {
            return Err(TypeError::InvalidChainName(name));
        }
        Ok(Self(name))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChainName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ChainName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ChainName {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ChainName> for String {
    fn from(name: ChainName) -> Self {
        name.0
    }
}

impl AsRef<str> for ChainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ChainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Implement deser_oracle_number for the uint types used in configs
impl_deser_oracle_number!(u64, u32, u8);
