use gas_oracle_configuration::ChainRegistry;

use crate::{GasOracleError, RemoteGasDataConfig, StorageGasOracleConfig};

/// Address each remote of a local config by its messaging domain, ordered by
/// remote chain name. Fails if a remote is not in `registry`.
pub fn get_remote_gas_data_configs(
    config: &StorageGasOracleConfig,
    registry: &ChainRegistry,
) -> Result<Vec<RemoteGasDataConfig>, GasOracleError> {
    config
        .iter()
        .map(|(remote, data)| {
            let remote_domain = registry
                .domain_of(remote.as_str())
                .ok_or_else(|| GasOracleError::UnknownChain(remote.clone()))?;

            Ok(RemoteGasDataConfig {
                remote_domain,
                data: *data,
            })
        })
        .collect()
}
