//! Service-side logging options

use iotwire_macros::Model;

string_enum! {
    /// Level of the logs the service writes to CloudWatch
    pub enum LogLevel {
        Debug => "DEBUG",
        Info => "INFO",
        Error => "ERROR",
        Warn => "WARN",
        Disabled => "DISABLED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct LoggingOptionsPayload {
    /// Role the service assumes to write logs
    pub role_arn: Option<String>,
    /// One of the [`LogLevel`] values
    pub log_level: Option<String>,
}

impl LoggingOptionsPayload {
    pub fn new(role_arn: impl Into<String>, level: LogLevel) -> Self {
        Self {
            role_arn: Some(role_arn.into()),
            log_level: Some(level.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetLoggingOptionsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetLoggingOptionsResult {
    pub role_arn: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct SetLoggingOptionsRequest {
    pub logging_options_payload: Option<LoggingOptionsPayload>,
}

#[cfg(test)]
#[path = "logging/logging_tests.rs"]
mod logging_tests;
