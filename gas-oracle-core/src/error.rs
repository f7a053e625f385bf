use gas_oracle_types::ChainName;

/// Errors computing gas oracle configs
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GasOracleError {
    /// No gas price supplied for a remote chain
    #[error("No gas price for remote chain {0}")]
    MissingGasPrice(ChainName),
    /// No token value supplied for a chain
    #[error("No token value for chain {0}")]
    MissingTokenValue(ChainName),
    /// Chain not known to the registry in use
    #[error("Unknown chain {0}")]
    UnknownChain(ChainName),
    /// The local chain's token value is zero
    #[error("Token value of local chain {local} is zero")]
    DivisionByZero {
        /// The local chain
        local: ChainName,
    },
    /// Exchange rate does not fit in 256 bits
    #[error("Exchange rate of {remote} relative to {local} overflows")]
    RateOverflow {
        /// The local chain
        local: ChainName,
        /// The remote chain
        remote: ChainName,
    },
    /// Rescaling to more decimals does not fit in 256 bits
    #[error("Converting from {from} to {to} decimals overflows")]
    DecimalOverflow {
        /// Source decimals
        from: u8,
        /// Target decimals
        to: u8,
    },
}

impl GasOracleError {
    /// True if a required input entry was absent
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            Self::MissingGasPrice(_) | Self::MissingTokenValue(_) | Self::UnknownChain(_)
        )
    }

    /// True if the arithmetic itself failed
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::RateOverflow { .. } | Self::DecimalOverflow { .. }
        )
    }
}
