//! Rendering module
//!
//! Window management, the OpenGL device and the viewport type shared by both.

pub mod window;
pub mod opengl;
pub mod device;
pub mod viewport;

pub use window::WindowHandle;
pub use device::DriverInfo;
pub use viewport::Viewport;
pub use opengl::{GlDevice, GlfwWindow};
