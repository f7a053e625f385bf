use gas_oracle_configuration::ChainRegistry;
use gas_oracle_types::{ChainMap, ChainName, U256};
use std::cmp::Ordering;

use crate::GasOracleError;

/// Resolves the number of decimals of a chain's native token. Lookups must
/// fail with `UnknownChain` rather than guess
pub trait NativeTokenDecimals {
    /// Native token decimals of `chain`
    fn native_token_decimals(&self, chain: &ChainName) -> Result<u8, GasOracleError>;
}

impl NativeTokenDecimals for ChainRegistry {
    fn native_token_decimals(&self, chain: &ChainName) -> Result<u8, GasOracleError> {
        ChainRegistry::native_token_decimals(self, chain.as_str())
            .ok_or_else(|| GasOracleError::UnknownChain(chain.clone()))
    }
}

impl NativeTokenDecimals for ChainMap<u8> {
    fn native_token_decimals(&self, chain: &ChainName) -> Result<u8, GasOracleError> {
        self.get(chain)
            .copied()
            .ok_or_else(|| GasOracleError::UnknownChain(chain.clone()))
    }
}

fn pow10(exponent: u8) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exponent))
}

/// Rescale a fixed-point `value` from `from_decimals` to `to_decimals`
/// decimal places. Scaling down truncates toward zero; scaling up fails on
/// overflow.
pub fn convert_decimals(
    from_decimals: u8,
    to_decimals: u8,
    value: U256,
) -> Result<U256, GasOracleError> {
    match from_decimals.cmp(&to_decimals) {
        Ordering::Equal => Ok(value),
        Ordering::Greater => {
            // 10^78 exceeds U256::MAX, so any value scales down to zero
            Ok(pow10(from_decimals - to_decimals)
                .map(|divisor| value / divisor)
                .unwrap_or_default())
        }
        Ordering::Less => {
            if value.is_zero() {
                return Ok(value);
            }
            pow10(to_decimals - from_decimals)
                .and_then(|multiplier| value.checked_mul(multiplier))
                .ok_or(GasOracleError::DecimalOverflow {
                    from: from_decimals,
                    to: to_decimals,
                })
        }
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;
    use gas_oracle_configuration::get_builtin;

    use super::*;

    #[test]
    fn equal_decimals_are_unchanged() {
        let value = U256::from(123_456_789u64);
        assert_eq!(convert_decimals(18, 18, value).unwrap(), value);
        assert_eq!(convert_decimals(0, 0, U256::MAX).unwrap(), U256::MAX);
    }

    #[test]
    fn scaling_up_multiplies() {
        assert_eq!(
            convert_decimals(6, 18, U256::from(5)).unwrap(),
            U256::from(5) * U256::exp10(12)
        );
    }

    #[test]
    fn scaling_down_truncates_toward_zero() {
        assert_eq!(
            convert_decimals(18, 6, U256::from(1_999_999_999_999u64)).unwrap(),
            U256::one()
        );
        assert_eq!(
            convert_decimals(18, 6, U256::from(999_999_999_999u64)).unwrap(),
            U256::zero()
        );
    }

    #[test]
    fn huge_differences_are_handled() {
        assert_eq!(convert_decimals(255, 0, U256::MAX).unwrap(), U256::zero());
        assert_eq!(convert_decimals(0, 255, U256::zero()).unwrap(), U256::zero());
        assert_matches!(
            convert_decimals(0, 255, U256::one()),
            Err(GasOracleError::DecimalOverflow { from: 0, to: 255 })
        );
        assert_matches!(
            convert_decimals(0, 70, U256::exp10(10)),
            Err(GasOracleError::DecimalOverflow { .. })
        );
    }

    #[test]
    fn registries_resolve_decimals() {
        let registry = get_builtin("test").unwrap().unwrap();
        let six: ChainName = "test3".parse().unwrap();
        let unknown: ChainName = "ethereum".parse().unwrap();

        assert_eq!(NativeTokenDecimals::native_token_decimals(registry, &six), Ok(6));
        assert_eq!(
            NativeTokenDecimals::native_token_decimals(registry, &unknown),
            Err(GasOracleError::UnknownChain(unknown.clone()))
        );
    }

    #[test]
    fn chain_maps_resolve_decimals() {
        let chain: ChainName = "celo".parse().unwrap();
        let mut decimals = ChainMap::new();
        decimals.insert(chain.clone(), 18u8);

        assert_eq!(decimals.native_token_decimals(&chain), Ok(18));
        assert!(decimals
            .native_token_decimals(&"gnosis".parse().unwrap())
            .unwrap_err()
            .is_missing_data());
    }
}
