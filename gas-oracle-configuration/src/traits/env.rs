/// Implemented by structs overridable through environment variables
pub trait EnvOverridable {
    /// Override self.fields through env vars
    fn load_env_overrides(&mut self);
}

/// Environment variable prefix for a chain: uppercased, with `-` mapped to
/// `_` (e.g. `arbitrum-goerli` -> `ARBITRUM_GOERLI`)
pub fn chain_env_prefix(chain: &str) -> String {
    chain.to_ascii_uppercase().replace('-', "_")
}
