use gas_oracle_configuration::{LogConfig, LogLevel, LogStyle};
use tracing_subscriber::filter::LevelFilter;

use crate::{errors::Error, Result};

/// Convert configuration LogLevel to tracing LevelFilter
pub(crate) fn log_level_to_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Info => LevelFilter::INFO,
    }
}

/// Install a global fmt subscriber writing to stderr. Stdout carries only
/// command output.
pub(crate) fn start_tracing(log: LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level_to_level_filter(log.level))
        .with_writer(std::io::stderr);

    let result = match log.fmt {
        LogStyle::Full => builder.try_init(),
        LogStyle::Pretty => builder.pretty().try_init(),
        LogStyle::Compact => builder.compact().try_init(),
        LogStyle::Json => builder.json().try_init(),
    };

    result.map_err(|error| Error::Tracing(error.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_maps_log_levels() {
        assert_eq!(log_level_to_level_filter(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(log_level_to_level_filter(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(log_level_to_level_filter(LogLevel::Trace), LevelFilter::TRACE);
    }
}
