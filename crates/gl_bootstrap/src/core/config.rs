//! # Configuration
//!
//! Every value the program runs with lives here. The defaults are the fixed
//! constants of the program: an 800x600 window titled `LearnOpenGL`, an
//! OpenGL 3.3 core-profile context and an orange clear color. Nothing reads
//! these from disk at runtime; the serde support exists so that variants can
//! be described and checked as data.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Default window width in screen coordinates
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
/// Default window height in screen coordinates
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "LearnOpenGL";

/// OpenGL profile requested through the context hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenGlProfile {
    /// Core profile, no deprecated functionality
    Core,
    /// Compatibility profile
    Compat,
    /// Let the driver decide
    Any,
}

/// # Context Configuration
///
/// Hints applied before the window is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Requested context major version
    pub major: u32,
    /// Requested context minor version
    pub minor: u32,
    /// Requested profile
    pub profile: OpenGlProfile,
    /// Request a forward-compatible context (required for core contexts on macOS)
    pub forward_compat: bool,
}

impl ContextConfig {
    /// Create a context configuration for the given version, core profile
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            profile: OpenGlProfile::Core,
            forward_compat: cfg!(target_os = "macos"),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.major == 0 {
            return Err("Context major version must be at least 1".to_string());
        }
        // Profiles only exist from 3.2 onwards
        let below_3_2 = self.major < 3 || (self.major == 3 && self.minor < 2);
        if below_3_2 && self.profile != OpenGlProfile::Any {
            return Err(format!(
                "OpenGL {}.{} has no {:?} profile",
                self.major, self.minor, self.profile
            ));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Create a new window configuration
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Window size must be non-zero, got {}x{}", self.width, self.height));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE)
    }
}

/// RGBA color the color buffer is cleared to every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// Orange used by the program
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0, 1.0);

    /// Create a new clear color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Validate that every channel is within `[0, 1]`
    pub fn validate(&self) -> Result<(), String> {
        let channels = [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)];
        for (name, value) in channels {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("Clear color channel {name} out of range: {value}"));
            }
        }
        Ok(())
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::ORANGE
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // Only errors by default so stdout/stderr carry just the program's own lines
        Self { level: "error".to_string() }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration for the bootstrap and frame loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Context creation hints
    pub context: ContextConfig,
    /// Window size and title
    pub window: WindowConfig,
    /// Color the frame is cleared to
    pub clear_color: ClearColor,
    /// Logging defaults
    pub logging: LoggingConfig,
}

impl ApplicationConfig {
    /// Set the window configuration
    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the clear color
    #[must_use]
    pub fn with_clear_color(mut self, clear_color: ClearColor) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.context.validate().map_err(ConfigError::Invalid)?;
        self.window.validate().map_err(ConfigError::Invalid)?;
        self.clear_color.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
