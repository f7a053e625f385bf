//! Storage gas oracle configuration.
//!
//! Each chain runs a storage gas oracle holding, for every remote chain it
//! sends messages to, the remote's gas price and the exchange rate between
//! the remote's and the local chain's native tokens. This crate computes
//! those configs for a set of chains.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![forbid(unsafe_code)]

mod builder;
pub use builder::*;

mod decimals;
pub use decimals::*;

mod error;
pub use error::*;

mod exchange_rate;
pub use exchange_rate::*;

mod remote;
pub use remote::*;

mod types;
pub use types::*;

pub use gas_oracle_types::{ChainMap, ChainName, U256};

/// Decimal places of token exchange rates
pub const TOKEN_EXCHANGE_RATE_DECIMALS: u32 = 10;

/// 1.0 at `TOKEN_EXCHANGE_RATE_DECIMALS` fixed point
pub const TOKEN_EXCHANGE_RATE_SCALE: U256 = U256([10_000_000_000, 0, 0, 0]);

/// 1.30 at `TOKEN_EXCHANGE_RATE_DECIMALS` fixed point. Overcharge by 30% to
/// account for market making risk
pub(crate) const TOKEN_EXCHANGE_RATE_MULTIPLIER: U256 = U256([13_000_000_000, 0, 0, 0]);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constants_agree() {
        assert_eq!(
            TOKEN_EXCHANGE_RATE_SCALE,
            U256::exp10(TOKEN_EXCHANGE_RATE_DECIMALS as usize)
        );
        assert_eq!(
            TOKEN_EXCHANGE_RATE_MULTIPLIER * 100,
            TOKEN_EXCHANGE_RATE_SCALE * 130
        );
    }
}
