//! Gas oracle configuration crate: chain registries, gas oracle input files
//! and logging settings

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use ethers_core::utils::parse_units;
use eyre::WrapErr;
use gas_oracle_types::{parse_u256, u256_map, ChainMap, ChainName, U256};
use std::collections::HashSet;
use std::{fs::File, path::Path};

mod traits;
pub use traits::*;

pub mod builtin;
pub use builtin::*;

pub mod chains;
pub use chains::*;

pub mod logging;
pub use logging::*;

mod utils;
pub use utils::*;

/// Parse a decimal token value (e.g. `"1800.25"`) into a fixed-point integer
/// with `decimals` decimal places
pub fn parse_token_value(value: &str, decimals: u32) -> eyre::Result<U256> {
    let value = value.trim();
    eyre::ensure!(
        !value.starts_with('-'),
        "Token value '{}' is negative",
        value
    );

    let parsed = parse_units(value, decimals)
        .wrap_err_with(|| format!("Token value '{}' is not a decimal number", value))?;
    Ok(parsed.into())
}

/// Inputs for computing the storage gas oracle configs of a set of chains
#[derive(Default, Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasOracleInputs {
    /// A name for the environment. Selects the built-in chain registry when
    /// no inline registry is given
    pub environment: String,
    /// Participating chains
    pub chains: Vec<ChainName>,
    /// Gas price of each chain, in native gas units
    #[serde(with = "u256_map")]
    gas_prices: ChainMap<U256>,
    /// Value of each chain's native token, as a decimal string. Only ratios
    /// between values matter
    token_values: ChainMap<String>,
    /// Optional inline chain registry, replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    registry: Option<ChainRegistry>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

impl GasOracleInputs {
    /// Instantiate GasOracleInputs from file
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("Unable to open inputs at {}", path.display()))?;
        let inputs = serde_json::from_reader(file)
            .wrap_err_with(|| format!("Inputs at {} are malformed", path.display()))?;
        Ok(inputs)
    }

    /// The chain registry in use: the inline registry if present, otherwise
    /// the built-in registry named by `environment`
    pub fn registry(&self) -> eyre::Result<&ChainRegistry> {
        if let Some(registry) = &self.registry {
            return Ok(registry);
        }

        get_builtin(&self.environment)?.ok_or_else(|| {
            eyre::eyre!(
                "No inline registry and no built-in registry named '{}'. Built-ins: {:?}",
                self.environment,
                builtin_names()
            )
        })
    }

    /// Set an inline chain registry, returning the previous one
    pub fn set_registry(&mut self, registry: ChainRegistry) -> Option<ChainRegistry> {
        self.registry.replace(registry)
    }

    /// Syntactically validate the inputs
    pub fn validate(&self) -> eyre::Result<()> {
        eyre::ensure!(!self.chains.is_empty(), "No chains configured");

        let registry = self.registry()?;
        registry.validate()?;

        let mut seen = HashSet::new();
        for chain in self.chains.iter() {
            eyre::ensure!(seen.insert(chain), "Chain named '{}' listed twice", chain);

            eyre::ensure!(
                registry.contains(chain.as_str()),
                "Chain named '{}' not present in registry",
                chain
            );
            eyre::ensure!(
                self.gas_prices.contains_key(chain),
                "Gas price for chain named '{}' not present",
                chain
            );
            eyre::ensure!(
                self.token_values.contains_key(chain),
                "Token value for chain named '{}' not present",
                chain
            );
        }

        // Check that no extra gas prices are listed
        for chain in self.gas_prices.keys() {
            eyre::ensure!(
                seen.contains(chain),
                "Gas price named '{}' not present in configured chains",
                chain
            );
        }

        // Check that no extra token values are listed
        for chain in self.token_values.keys() {
            eyre::ensure!(
                seen.contains(chain),
                "Token value named '{}' not present in configured chains",
                chain
            );
        }

        Ok(())
    }

    /// Syntactically validate the inputs, consuming and returning self
    pub fn chained_validate(self) -> eyre::Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Get a reference to the gas price map
    pub fn gas_prices(&self) -> &ChainMap<U256> {
        &self.gas_prices
    }

    /// Set the gas price of a chain, returning the previous price
    pub fn set_gas_price(&mut self, chain: ChainName, price: U256) -> Option<U256> {
        self.gas_prices.insert(chain, price)
    }

    /// Set the token value of a chain, returning the previous value
    pub fn set_token_value(&mut self, chain: ChainName, value: impl Into<String>) -> Option<String> {
        self.token_values.insert(chain, value.into())
    }

    /// Token values parsed as fixed-point integers with `decimals` decimal
    /// places
    pub fn token_values(&self, decimals: u32) -> eyre::Result<ChainMap<U256>> {
        self.token_values
            .iter()
            .map(|(chain, value)| {
                let parsed = parse_token_value(value, decimals)
                    .wrap_err_with(|| format!("Bad token value for chain named '{}'", chain))?;
                Ok((chain.clone(), parsed))
            })
            .collect()
    }

    /// Convert to yaml
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_yaml::to_string(&self)?)
    }
}

impl EnvOverridable for GasOracleInputs {
    /// Gas prices may be overridden per chain with `{CHAIN}_GAS_PRICE`, or for
    /// every chain with `DEFAULT_GAS_PRICE`
    fn load_env_overrides(&mut self) {
        for chain in self.chains.iter() {
            let value = match chain_or_default_from_env(chain, "GAS_PRICE") {
                Some(value) => value,
                None => continue,
            };

            match parse_u256(&value) {
                Some(price) => {
                    tracing::debug!(chain = %chain, price = %price, "Gas price overridden from env");
                    self.gas_prices.insert(chain.clone(), price);
                }
                None => {
                    tracing::warn!(chain = %chain, value = value.as_str(), "Ignoring unparseable gas price override");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serial_test::serial;

    use super::*;

    fn sample() -> GasOracleInputs {
        serde_json::from_value(json!({
            "environment": "test",
            "chains": ["test1", "test2", "test3"],
            "gasPrices": { "test1": 50, "test2": "30", "test3": "0x0a" },
            "tokenValues": { "test1": "1800.5", "test2": "0.8", "test3": "1" },
            "logging": { "fmt": "json", "level": "debug" }
        }))
        .unwrap()
    }

    #[test]
    fn it_loads_and_validates_sample_inputs() {
        let inputs = sample().chained_validate().unwrap();

        assert_eq!(inputs.chains.len(), 3);
        assert_eq!(inputs.gas_prices().get("test3"), Some(&U256::from(10)));
        assert_eq!(inputs.logging.fmt, LogStyle::Json);
        assert_eq!(inputs.registry().unwrap().native_token_decimals("test3"), Some(6));
    }

    #[test]
    fn it_parses_token_values() {
        let values = sample().token_values(10).unwrap();

        assert_eq!(values.get("test1"), Some(&U256::from(18_005_000_000_000u64)));
        assert_eq!(values.get("test2"), Some(&U256::from(8_000_000_000u64)));
        assert_eq!(values.get("test3"), Some(&U256::exp10(10)));
    }

    #[test]
    fn it_rejects_bad_token_values() {
        assert!(parse_token_value("-1", 10).is_err());
        assert!(parse_token_value("one", 10).is_err());

        let mut inputs = sample();
        inputs.set_token_value("test1".parse().unwrap(), "lots");
        assert!(inputs.token_values(10).is_err());
    }

    #[test]
    fn it_rejects_duplicate_chains() {
        let mut inputs = sample();
        inputs.chains.push("test1".parse().unwrap());

        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn it_rejects_missing_gas_prices() {
        let mut inputs = sample();
        inputs.gas_prices.remove("test2");

        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("Gas price for chain named 'test2'"));
    }

    #[test]
    fn it_rejects_extra_token_values() {
        let mut inputs = sample();
        inputs.chains.retain(|chain| chain.as_str() != "test3");
        inputs.gas_prices.remove("test3");

        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("Token value named 'test3'"));
    }

    #[test]
    fn it_rejects_unknown_chains() {
        let mut inputs = sample();
        inputs.environment = "mainnet".to_owned();

        assert!(inputs.validate().is_err());
    }

    #[test]
    fn it_rejects_unknown_environments() {
        let mut inputs = sample();
        inputs.environment = "devnet".to_owned();

        assert!(inputs.registry().is_err());
    }

    #[test]
    fn inline_registries_replace_builtins() {
        let mut inputs = sample();
        inputs.environment = "devnet".to_owned();

        let builtin = get_builtin("test").unwrap().unwrap().clone();
        assert!(inputs.set_registry(builtin).is_none());
        inputs.validate().unwrap();
    }

    #[test]
    #[serial]
    fn it_applies_gas_price_env_overrides() {
        std::env::set_var("TEST2_GAS_PRICE", "0x64");
        std::env::set_var("DEFAULT_GAS_PRICE", "7");

        let mut inputs = sample();
        inputs.load_env_overrides();

        std::env::remove_var("TEST2_GAS_PRICE");
        std::env::remove_var("DEFAULT_GAS_PRICE");

        assert_eq!(inputs.gas_prices().get("test1"), Some(&U256::from(7)));
        assert_eq!(inputs.gas_prices().get("test2"), Some(&U256::from(100)));
        assert_eq!(inputs.gas_prices().get("test3"), Some(&U256::from(7)));
    }

    #[test]
    #[serial]
    fn it_ignores_bad_env_overrides() {
        std::env::set_var("TEST1_GAS_PRICE", "cheap");

        let mut inputs = sample();
        inputs.load_env_overrides();

        std::env::remove_var("TEST1_GAS_PRICE");

        assert_eq!(inputs.gas_prices().get("test1"), Some(&U256::from(50)));
    }

    #[test]
    fn it_does_the_yaml() {
        let yaml = sample().to_yaml().unwrap();
        assert!(yaml.contains("environment: test"));
    }
}
