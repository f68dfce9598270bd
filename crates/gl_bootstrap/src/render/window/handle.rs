//! High-level window handle

use crate::render::opengl::window::GlfwWindow;
use crate::render::window::backend::WindowBackend;
use glfw::{Key, WindowEvent};

/// Owns the single window for the lifetime of the program
///
/// Dropping the handle destroys the window and releases GLFW.
pub struct WindowHandle {
    backend: Box<dyn WindowBackend>,
}

impl WindowHandle {
    /// Wrap an already created GLFW window
    pub fn from_glfw(window: GlfwWindow) -> Self {
        Self::from_backend(Box::new(window))
    }

    pub(crate) fn from_backend(backend: Box<dyn WindowBackend>) -> Self {
        Self { backend }
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Set whether the window should close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    /// Whether `key` is currently held down
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.backend.is_key_pressed(key)
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.backend.swap_buffers();
    }

    /// Poll for events
    pub fn poll_events(&mut self) {
        self.backend.poll_events();
    }

    /// Get event iterator
    pub fn event_iter(&self) -> impl Iterator<Item = (f64, WindowEvent)> + '_ {
        self.backend.event_iter()
    }

    /// Current framebuffer size in pixels
    pub fn get_framebuffer_size(&self) -> (i32, i32) {
        self.backend.get_framebuffer_size()
    }
}
