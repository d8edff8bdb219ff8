use std::error::Error;

/// Base trait for all application errors
pub trait WebUiError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type WebUiResult<T> = Result<T, Box<dyn WebUiError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    ConfigReadError { path: String, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid endpoint '{endpoint}' for {field}: must start with http:// or https://")]
    InvalidEndpoint { field: String, endpoint: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnvValue { var: String, value: String },
}

impl WebUiError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::InvalidEnvValue { .. } => "INVALID_ENV_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::ConfigReadError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webui_result() {
        let _result: WebUiResult<i32> = Ok(42);
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let error = ConfigError::InvalidEndpoint {
            field: "auth.endpoint".to_string(),
            endpoint: "ftp://example".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid endpoint 'ftp://example' for auth.endpoint: must start with http:// or https://"
        );
        assert_eq!(error.error_code(), "INVALID_ENDPOINT");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_read_error_is_not_user_error() {
        let error = ConfigError::ConfigReadError {
            path: "/tmp/config.toml".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(error.error_code(), "CONFIG_READ_ERROR");
        assert!(!error.is_user_error());
    }
}
