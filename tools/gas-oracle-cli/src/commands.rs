use gas_oracle_configuration::{
    get_builtin, parse_token_value, ChainRegistry, EnvOverridable, GasOracleInputs,
};
use gas_oracle_core::{
    get_all_storage_gas_oracle_configs, get_local_storage_gas_oracle_config,
    get_remote_gas_data_configs, get_token_exchange_rate_from_values,
    AllStorageGasOracleConfigs, RemoteGasDataConfig, ValueExchangeRates,
    TOKEN_EXCHANGE_RATE_DECIMALS,
};
use gas_oracle_types::{u256_dec, ChainName, U256};
use std::path::Path;

use crate::{errors::Error, Command, Format, Result};

/// A single computed exchange rate
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RateOutput {
    pub(crate) local: ChainName,
    pub(crate) remote: ChainName,
    #[serde(with = "u256_dec")]
    pub(crate) token_exchange_rate: U256,
}

/// Result of a command
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub(crate) enum Output {
    All(AllStorageGasOracleConfigs),
    Local(Vec<RemoteGasDataConfig>),
    Rate(RateOutput),
}

impl Output {
    /// Render in the requested format
    pub(crate) fn render(&self, format: &Format) -> Result<String> {
        match format {
            Format::Json => serde_json::to_string_pretty(self)
                .map(|json| json + "\n")
                .map_err(|error| Error::BadOutput(error.to_string())),
            Format::Yaml => {
                serde_yaml::to_string(self).map_err(|error| Error::BadOutput(error.to_string()))
            }
        }
    }
}

/// Load inputs, apply env overrides and validate
pub(crate) fn load_inputs(path: impl AsRef<Path>) -> Result<GasOracleInputs> {
    let mut inputs = GasOracleInputs::from_file(path).map_err(Error::BadConfig)?;
    inputs.load_env_overrides();
    inputs.chained_validate().map_err(Error::BadConfig)
}

fn token_value(value: &str) -> Result<U256> {
    parse_token_value(value, TOKEN_EXCHANGE_RATE_DECIMALS).map_err(Error::BadConfig)
}

fn registry<'a>(
    inputs: Option<&'a GasOracleInputs>,
    environment: &str,
) -> Result<&'a ChainRegistry> {
    match inputs {
        Some(inputs) => inputs.registry().map_err(Error::BadConfig),
        None => get_builtin(environment)
            .map_err(Error::BadConfig)?
            .ok_or_else(|| {
                Error::BadConfig(eyre::eyre!("No built-in registry named '{}'", environment))
            }),
    }
}

/// Execute a command against optional inputs
pub(crate) fn execute(
    command: &Command,
    inputs: Option<&GasOracleInputs>,
    environment: &str,
) -> Result<Output> {
    match command {
        Command::All => {
            let inputs = inputs.ok_or(Error::NoInputs)?;
            let registry = inputs.registry().map_err(Error::BadConfig)?;
            let values = inputs
                .token_values(TOKEN_EXCHANGE_RATE_DECIMALS)
                .map_err(Error::BadConfig)?;
            let rates = ValueExchangeRates::new(registry, &values);

            let configs =
                get_all_storage_gas_oracle_configs(&inputs.chains, inputs.gas_prices(), &rates)?;
            tracing::info!(chains = configs.len(), "Computed all storage gas oracle configs");
            Ok(Output::All(configs))
        }
        Command::Local { chain } => {
            let inputs = inputs.ok_or(Error::NoInputs)?;
            if !inputs.chains.contains(chain) {
                return Err(Error::UnknownChain(chain.clone()));
            }

            let registry = inputs.registry().map_err(Error::BadConfig)?;
            let values = inputs
                .token_values(TOKEN_EXCHANGE_RATE_DECIMALS)
                .map_err(Error::BadConfig)?;
            let rates = ValueExchangeRates::new(registry, &values);

            let remotes = inputs.chains.iter().filter(|remote| *remote != chain);
            let config =
                get_local_storage_gas_oracle_config(chain, remotes, inputs.gas_prices(), &rates)?;
            let configs = get_remote_gas_data_configs(&config, registry)?;
            tracing::info!(local = %chain, remotes = configs.len(), "Computed remote gas data configs");
            Ok(Output::Local(configs))
        }
        Command::Rate {
            local,
            local_value,
            remote,
            remote_value,
        } => {
            let registry = registry(inputs, environment)?;
            let token_exchange_rate = get_token_exchange_rate_from_values(
                registry,
                local,
                token_value(local_value)?,
                remote,
                token_value(remote_value)?,
            )?;

            Ok(Output::Rate(RateOutput {
                local: local.clone(),
                remote: remote.clone(),
                token_exchange_rate,
            }))
        }
    }
}
