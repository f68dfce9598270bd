//! Configuration system

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text, picking the format from a file extension
    fn from_str_with_format(contents: &str, extension: &str) -> Result<Self, ConfigError> {
        match extension {
            "toml" => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            "ron" => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Serialize configuration text in the format named by a file extension
    fn to_string_with_format(&self, extension: &str) -> Result<String, ConfigError> {
        match extension {
            "toml" => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string())),
            "ron" => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&contents, extension_of(path))
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = self.to_string_with_format(extension_of(path))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension_of(path: &str) -> &str {
    std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
