//! GLFW + OpenGL backend

pub mod window;
pub mod device;

pub use window::{GlfwWindow, WindowError, WindowResult};
pub use device::{DeviceError, GlDevice};
