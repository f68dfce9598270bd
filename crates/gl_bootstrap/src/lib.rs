//! # GL Bootstrap
//!
//! Opens a GLFW window with an OpenGL 3.3 core-profile context and clears it
//! to a fixed color every frame until the window is asked to close.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), BootstrapError> {
//!     let config = ApplicationConfig::default();
//!     let mut frame_loop = FrameLoop::open(&config)?;
//!     println!("{}", frame_loop.driver_info());
//!     frame_loop.run();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod render;

mod application;

pub use application::{BootstrapError, FrameLoop, FrameStats};

/// Common imports for users of the bootstrap
pub mod prelude {
    pub use crate::{
        BootstrapError, FrameLoop, FrameStats,
        core::config::{ApplicationConfig, ClearColor, ContextConfig, LoggingConfig, WindowConfig},
        render::{DriverInfo, Viewport, WindowHandle},
    };
}
