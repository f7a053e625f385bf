use gas_oracle_types::{deser_oracle_u32, u256_dec, ChainMap, U256};

/// Gas data a local chain's storage gas oracle holds for one remote chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGasData {
    /// Remote native units per local native unit, at
    /// `TOKEN_EXCHANGE_RATE_DECIMALS` fixed point
    #[serde(with = "u256_dec")]
    pub token_exchange_rate: U256,
    /// Remote gas price in remote native units
    #[serde(with = "u256_dec")]
    pub gas_price: U256,
}

/// `RemoteGasData` addressed by the remote's messaging domain, as set on
/// chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGasDataConfig {
    /// Messaging domain of the remote chain
    #[serde(deserialize_with = "deser_oracle_u32")]
    pub remote_domain: u32,
    /// Gas data for the remote chain
    #[serde(flatten)]
    pub data: RemoteGasData,
}

/// Gas data to configure on a single local chain, keyed by remote chain.
/// Never contains the local chain itself
pub type StorageGasOracleConfig = ChainMap<RemoteGasData>;

/// `StorageGasOracleConfig` of each local chain
pub type AllStorageGasOracleConfigs = ChainMap<StorageGasOracleConfig>;
