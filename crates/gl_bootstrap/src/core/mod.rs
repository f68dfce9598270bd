//! # Core Module
//!
//! Shared configuration types used by the window, the render device and the
//! frame loop.

pub mod config;

pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    ClearColor,
    ContextConfig,
    LoggingConfig,
    OpenGlProfile,
    WindowConfig,
    Config,
    ConfigError,
};
