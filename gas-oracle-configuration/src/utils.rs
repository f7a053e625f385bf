use gas_oracle_types::ChainName;

use crate::chain_env_prefix;

/// Read `{CHAIN}_{var}`, falling back to `DEFAULT_{var}` when the
/// chain-specific variable is unset
pub fn chain_or_default_from_env(chain: &ChainName, var: &str) -> Option<String> {
    std::env::var(format!("{}_{}", chain_env_prefix(chain.as_str()), var))
        .or_else(|_| std::env::var(format!("DEFAULT_{}", var)))
        .ok()
}
