//! Chain metadata registry

use eyre::WrapErr;
use gas_oracle_types::{deser_oracle_u32, deser_oracle_u64, deser_oracle_u8, ChainMap, ChainName};
use std::{collections::HashSet, fs::File, path::Path};

/// A chain's native gas token
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Number of fractional decimal places of the token's integer unit
    #[serde(deserialize_with = "deser_oracle_u8")]
    pub decimals: u8,
}

/// Static information about one chain
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    /// Chain name
    pub name: ChainName,
    /// Messaging domain identifier
    #[serde(deserialize_with = "deser_oracle_u32")]
    pub domain: u32,
    /// EVM chain id. 0 for non-EVM chains
    #[serde(default, deserialize_with = "deser_oracle_u64")]
    pub chain_id: u64,
    /// The native gas token
    pub native_token: NativeToken,
}

/// Metadata for a set of chains, keyed by name
#[derive(Default, Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ChainRegistry(ChainMap<ChainMetadata>);

impl ChainRegistry {
    /// Instantiate ChainRegistry from file
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("Unable to open chain registry at {}", path.display()))?;
        let registry = serde_json::from_reader(file)
            .wrap_err_with(|| format!("Chain registry at {} is malformed", path.display()))?;
        Ok(registry)
    }

    /// Syntactically validate the registry
    pub fn validate(&self) -> eyre::Result<()> {
        let mut domains = HashSet::new();

        for (key, metadata) in self.0.iter() {
            eyre::ensure!(
                metadata.name == *key,
                "Chain at key {} has non-matching name: {}",
                key,
                metadata.name
            );
            eyre::ensure!(
                domains.insert(metadata.domain),
                "Domain {} of chain named '{}' is already used by another chain",
                metadata.domain,
                key
            );
        }

        Ok(())
    }

    /// Syntactically validate the registry, consuming and returning self
    pub fn chained_validate(self) -> eyre::Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Add a chain, replacing any previous chain by that name.
    ///
    /// ## Returns
    ///
    /// The existing chain by that name, which was overwritten by the new one
    pub fn add_chain(&mut self, metadata: ChainMetadata) -> Option<ChainMetadata> {
        self.0.insert(metadata.name.clone(), metadata)
    }

    /// Get the metadata of a chain, if known
    pub fn get(&self, chain: &str) -> Option<&ChainMetadata> {
        self.0.get(chain)
    }

    /// True if the chain is known to this registry
    pub fn contains(&self, chain: &str) -> bool {
        self.0.contains_key(chain)
    }

    /// Native token decimals of a chain, if known
    pub fn native_token_decimals(&self, chain: &str) -> Option<u8> {
        self.get(chain).map(|metadata| metadata.native_token.decimals)
    }

    /// Messaging domain of a chain, if known
    pub fn domain_of(&self, chain: &str) -> Option<u32> {
        self.get(chain).map(|metadata| metadata.domain)
    }

    /// Iterate over known chain names
    pub fn chains(&self) -> impl Iterator<Item = &ChainName> {
        self.0.keys()
    }
}
