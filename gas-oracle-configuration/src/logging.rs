//! Logging configuration types

/// Output format of log lines
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum LogStyle {
    /// Multi-line, human oriented
    Pretty,
    /// Newline-delimited JSON objects
    Json,
    /// Single line, without span context
    Compact,
    /// Single line with span context. Unrecognized styles fall back to this
    #[serde(other)]
    Full,
}

/// Most verbose level that is emitted
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    /// Nothing
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Per-chain computation details
    Debug,
    /// Every computed rate
    Trace,
    /// Summaries. Unrecognized levels fall back to this
    #[serde(other)]
    Info,
}

/// Logging section of a gas oracle inputs file. Missing fields, and a
/// missing section, take the values of `LogConfig::default()`
#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Line format
    pub fmt: LogStyle,
    /// Level filter
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            fmt: LogStyle::Compact,
            level: LogLevel::Warn,
        }
    }
}
