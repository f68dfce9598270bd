//! GLFW window with an OpenGL context
//!
//! Creation runs the whole windowing half of the bootstrap: initialize GLFW,
//! apply the context hints, create the window and make its context current
//! on the calling thread.

use crate::core::config::{ContextConfig, OpenGlProfile, WindowConfig};
use crate::render::window::backend::WindowBackend;
use glfw::{Action, Context, Key, WindowEvent};
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("Failed to initialize GLFW")]
    InitializationFailed,

    /// `glfwCreateWindow` returned no window
    #[error("Failed to create GLFW window")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Fields drop in declaration order: the window is destroyed before the last
/// `Glfw` handle goes away and GLFW terminates.
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    glfw: glfw::Glfw,
    title: String,
}

impl GlfwWindow {
    /// Initialize GLFW and create a window whose OpenGL context is current
    pub fn new(context: &ContextConfig, config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(|error, description| {
            log::warn!("GLFW error {error:?}: {description}");
        })
        .map_err(|e| {
            log::debug!("glfwInit failed: {e:?}");
            WindowError::InitializationFailed
        })?;

        Self::apply_context_hints(&mut glfw, context);

        // On failure `glfw` drops here, which terminates the library
        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_framebuffer_size_polling(true);

        log::debug!(
            "Created {}x{} window {:?} with OpenGL {}.{} {:?} context",
            config.width,
            config.height,
            config.title,
            context.major,
            context.minor,
            context.profile
        );

        Ok(Self {
            window,
            events,
            glfw,
            title: config.title.clone(),
        })
    }

    fn apply_context_hints(glfw: &mut glfw::Glfw, context: &ContextConfig) {
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        let profile = match context.profile {
            OpenGlProfile::Core => glfw::OpenGlProfileHint::Core,
            OpenGlProfile::Compat => glfw::OpenGlProfileHint::Compat,
            OpenGlProfile::Any => glfw::OpenGlProfileHint::Any,
        };
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(profile));
        if context.forward_compat {
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        }
    }

    /// Resolve an OpenGL entry point against the current context
    pub fn get_proc_address(&mut self, procname: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(procname) as *const _
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window {:?} and releasing GLFW", self.title);
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.window.get_key(key) == Action::Press
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn event_iter(&self) -> Box<dyn Iterator<Item = (f64, WindowEvent)> + '_> {
        Box::new(glfw::flush_messages(&self.events))
    }

    fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}
