//! Window management subsystem
//!
//! - **`handle`**: application-facing window interface
//! - **`backend`**: internal trait a concrete window implements
//!
//! The only backend is GLFW with an OpenGL context (`../opengl/window.rs`).
//! Tests drive the frame loop through a scripted backend instead.

pub mod handle;
pub(crate) mod backend;

pub use handle::WindowHandle;
