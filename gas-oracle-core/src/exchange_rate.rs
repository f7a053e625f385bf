use gas_oracle_types::{ChainMap, ChainName, U256};

use crate::{
    convert_decimals, GasOracleError, NativeTokenDecimals, TokenExchangeRateSource,
    TOKEN_EXCHANGE_RATE_MULTIPLIER,
};

/// Exchange rate of `remote` relative to `local`, given the values of the two
/// chains' native tokens.
///
/// The values must be comparable (e.g. both USD prices at the same fixed
/// point). The ratio is overcharged by 30% and then rescaled from the
/// remote's native decimals to the local's, so the result prices one remote
/// native unit in local native units at `TOKEN_EXCHANGE_RATE_DECIMALS` fixed
/// point.
pub fn get_token_exchange_rate_from_values<D>(
    decimals: &D,
    local: &ChainName,
    local_value: U256,
    remote: &ChainName,
    remote_value: U256,
) -> Result<U256, GasOracleError>
where
    D: NativeTokenDecimals + ?Sized,
{
    if local_value.is_zero() {
        return Err(GasOracleError::DivisionByZero {
            local: local.clone(),
        });
    }

    // Native decimals not yet accounted for
    let exchange_rate = remote_value
        .checked_mul(TOKEN_EXCHANGE_RATE_MULTIPLIER)
        .ok_or_else(|| GasOracleError::RateOverflow {
            local: local.clone(),
            remote: remote.clone(),
        })?
        / local_value;

    let exchange_rate = convert_decimals(
        decimals.native_token_decimals(remote)?,
        decimals.native_token_decimals(local)?,
        exchange_rate,
    )?;

    tracing::trace!(
        local = %local,
        remote = %remote,
        exchange_rate = %exchange_rate,
        "Token exchange rate from values"
    );
    Ok(exchange_rate)
}

/// Exchange rates derived from per-chain native token values
#[derive(Debug)]
pub struct ValueExchangeRates<'a, D: ?Sized> {
    decimals: &'a D,
    values: &'a ChainMap<U256>,
}

impl<'a, D> ValueExchangeRates<'a, D>
where
    D: NativeTokenDecimals + ?Sized,
{
    /// Instantiate from a decimals lookup and token values
    pub fn new(decimals: &'a D, values: &'a ChainMap<U256>) -> Self {
        Self { decimals, values }
    }

    fn value_of(&self, chain: &ChainName) -> Result<U256, GasOracleError> {
        self.values
            .get(chain)
            .copied()
            .ok_or_else(|| GasOracleError::MissingTokenValue(chain.clone()))
    }
}

impl<'a, D> TokenExchangeRateSource for ValueExchangeRates<'a, D>
where
    D: NativeTokenDecimals + ?Sized,
{
    fn token_exchange_rate(
        &self,
        local: &ChainName,
        remote: &ChainName,
    ) -> Result<U256, GasOracleError> {
        get_token_exchange_rate_from_values(
            self.decimals,
            local,
            self.value_of(local)?,
            remote,
            self.value_of(remote)?,
        )
    }
}
