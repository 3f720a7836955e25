use thiserror::Error;

use crate::types::MonthError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("An input CSV path is required")]
    MissingInput,
    #[error("Unknown argument [{0}]")]
    UnknownArgument(String),
    #[error("Invalid value [{value}] for [{flag}]")]
    InvalidValue {
        flag: String,
        value: String
    },
    #[error(transparent)]
    Month(#[from] MonthError)
}

impl ConfigError {
    pub fn invalid_value(flag: &str, value: &str) -> Self {
        Self::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string()
        }
    }
}
