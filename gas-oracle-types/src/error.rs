/// Type construction errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Chain names must be non-empty lowercase ascii identifiers
    #[error("Invalid chain name: '{0}'")]
    InvalidChainName(String),
}
