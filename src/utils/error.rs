use thiserror::Error;

/// 取得詩作時可能發生的錯誤種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    AddressInvalid,
    TransportFailed,
    DecodeFailed,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid address: {0}")]
    AddressInvalid(#[from] url::ParseError),

    #[error("{message}")]
    TransportFailed { message: String },

    #[error("{0}")]
    DecodeFailed(#[from] serde_json::Error),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailed {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::AddressInvalid(_) => FetchErrorKind::AddressInvalid,
            Self::TransportFailed { .. } => FetchErrorKind::TransportFailed,
            Self::DecodeFailed(_) => FetchErrorKind::DecodeFailed,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP client setup failed: {0}")]
    TransportSetupError(#[from] reqwest::Error),

    #[error("Failed to write output: {message}")]
    PresentError { message: String },
}

impl FinderError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the config file: {}", e),
            Self::ConfigError { message } => format!("Configuration error: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            Self::TransportSetupError(_) => "Could not create the HTTP client".to_string(),
            Self::PresentError { message } => format!("Could not print the poem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the config file exists and is readable",
            Self::ConfigError { .. } => "Check the TOML syntax of the config file",
            Self::InvalidConfigValueError { .. } => "Fix the value and run again",
            Self::TransportSetupError(_) => "Check the TLS setup of this machine",
            Self::PresentError { .. } => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
