use gas_oracle_core::GasOracleError;
use gas_oracle_types::ChainName;

/// Exit codes as found in <sysexits.h>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitCode {
    Ok = 0,
    Usage = 64,
    DataErr = 65,
    Software = 70,
    BadConfig = 78,
}

/// `Error` for the gas oracle cli
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// Inputs missing, malformed or invalid
    #[error("BadConfig: Unable to load inputs: {0:#}")]
    BadConfig(eyre::Report),
    /// Command needs an inputs file
    #[error("NoInputs: This command needs an inputs file. Pass --inputs")]
    NoInputs,
    /// Chain not among the configured chains
    #[error("UnknownChain: Chain named '{0}' is not configured")]
    UnknownChain(ChainName),
    /// Computation failed
    #[error("GasOracle: {0}")]
    GasOracle(#[from] GasOracleError),
    /// Output could not be serialized or written
    #[error("BadOutput: Unable to serialize or write output: {0}")]
    BadOutput(String),
    /// Tracing subscriber could not be installed
    #[error("Tracing: Unable to start tracing: {0}")]
    Tracing(String),
}

impl Error {
    /// Process exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Error::BadConfig(_) => ExitCode::BadConfig,
            Error::NoInputs | Error::UnknownChain(_) => ExitCode::Usage,
            Error::GasOracle(_) => ExitCode::DataErr,
            Error::BadOutput(_) | Error::Tracing(_) => ExitCode::Software,
        }
    }
}
