use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[display("Failed to write config file {path}: {message}")]
    Write { path: String, message: String },

    #[display("Failed to serialize config: {message}")]
    Serialize { message: String },

    #[display("Failed to deserialize config: {message}")]
    Deserialize { message: String },

    #[display("Config validation error: {message}")]
    Validation { message: String },
}
