use gas_oracle_types::{ChainMap, ChainName, U256};

use crate::{AllStorageGasOracleConfigs, GasOracleError, RemoteGasData, StorageGasOracleConfig};

/// Source of token exchange rates between a local and a remote chain
pub trait TokenExchangeRateSource {
    /// Exchange rate of `remote` relative to `local`, at
    /// `TOKEN_EXCHANGE_RATE_DECIMALS` fixed point
    fn token_exchange_rate(
        &self,
        local: &ChainName,
        remote: &ChainName,
    ) -> Result<U256, GasOracleError>;
}

impl<F> TokenExchangeRateSource for F
where
    F: Fn(&ChainName, &ChainName) -> Result<U256, GasOracleError>,
{
    fn token_exchange_rate(
        &self,
        local: &ChainName,
        remote: &ChainName,
    ) -> Result<U256, GasOracleError> {
        self(local, remote)
    }
}

/// The same exchange rate for every pair of chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantExchangeRate(pub U256);

impl TokenExchangeRateSource for ConstantExchangeRate {
    fn token_exchange_rate(&self, _: &ChainName, _: &ChainName) -> Result<U256, GasOracleError> {
        Ok(self.0)
    }
}

/// Gets the `StorageGasOracleConfig` for a particular local chain.
///
/// `remotes` must not contain `local`. Fails if `gas_prices` has no entry
/// for one of the remotes.
pub fn get_local_storage_gas_oracle_config<'a, I, R>(
    local: &ChainName,
    remotes: I,
    gas_prices: &ChainMap<U256>,
    exchange_rates: &R,
) -> Result<StorageGasOracleConfig, GasOracleError>
where
    I: IntoIterator<Item = &'a ChainName>,
    R: TokenExchangeRateSource + ?Sized,
{
    let mut config = StorageGasOracleConfig::new();

    for remote in remotes {
        let token_exchange_rate = exchange_rates.token_exchange_rate(local, remote)?;
        let gas_price = *gas_prices
            .get(remote)
            .ok_or_else(|| GasOracleError::MissingGasPrice(remote.clone()))?;

        tracing::trace!(
            local = %local,
            remote = %remote,
            token_exchange_rate = %token_exchange_rate,
            gas_price = %gas_price,
            "Remote gas data"
        );

        config.insert(
            remote.clone(),
            RemoteGasData {
                token_exchange_rate,
                gas_price,
            },
        );
    }

    Ok(config)
}

/// Gets the `StorageGasOracleConfig` for each chain in `chain_names`, using
/// every other chain as a remote
pub fn get_all_storage_gas_oracle_configs<R>(
    chain_names: &[ChainName],
    gas_prices: &ChainMap<U256>,
    exchange_rates: &R,
) -> Result<AllStorageGasOracleConfigs, GasOracleError>
where
    R: TokenExchangeRateSource + ?Sized,
{
    let mut configs = AllStorageGasOracleConfigs::new();

    for local in chain_names {
        let remotes = chain_names.iter().filter(|chain| *chain != local);
        let config = get_local_storage_gas_oracle_config(local, remotes, gas_prices, exchange_rates)?;

        tracing::debug!(local = %local, remotes = config.len(), "Built storage gas oracle config");
        configs.insert(local.clone(), config);
    }

    Ok(configs)
}
