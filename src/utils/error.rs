use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Failed to write zone file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing required value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Filesystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ZoneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ZoneError::WriteError { .. } | ZoneError::IoError(_) => ErrorCategory::Filesystem,
            ZoneError::TomlError(_)
            | ZoneError::MissingConfigError { .. }
            | ZoneError::InvalidConfigValueError { .. }
            | ZoneError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Filesystem failures during the write are critical; anything caught
    /// before the write is a plain input problem.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ZoneError::WriteError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZoneError::WriteError { path, source } => {
                format!("Could not write zone file to {}: {}", path, source)
            }
            ZoneError::IoError(e) => format!("Could not read input: {}", e),
            ZoneError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            ZoneError::MissingConfigError { field } => {
                format!("No value given for '{}'", field)
            }
            ZoneError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            ZoneError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZoneError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            ZoneError::IoError(_) => "Check that the config file exists and is readable",
            ZoneError::TomlError(_) => "Fix the syntax of the config file",
            ZoneError::MissingConfigError { .. } => {
                "Pass --domain and --canister, or set them under [zone] in the config file"
            }
            ZoneError::InvalidConfigValueError { .. } => "Provide a non-empty value",
            ZoneError::ConfigError { .. } => "Review the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_is_critical() {
        let err = ZoneError::WriteError {
            path: "missing/zonefile.zone".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("missing/zonefile.zone"));
    }

    #[test]
    fn test_missing_value_is_configuration_error() {
        let err = ZoneError::MissingConfigError {
            field: "canister".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("canister"));
    }
}
