//! OpenGL function loading and the handful of calls the frame loop issues

use crate::core::config::ClearColor;
use crate::render::device::{DriverInfo, RenderDevice, UNKNOWN_DRIVER_STRING};
use crate::render::opengl::window::GlfwWindow;
use crate::render::viewport::Viewport;
use std::ffi::{c_void, CStr};
use thiserror::Error;

/// OpenGL device errors
#[derive(Error, Debug)]
pub enum DeviceError {
    /// An entry point the program needs could not be resolved
    #[error("Failed to initialize OpenGL function pointers ({function} not loaded)")]
    LoadFailed {
        /// Name of the first missing function
        function: &'static str,
    },
}

/// Handle proving the OpenGL functions are loaded for the current context
///
/// Only constructible through [`GlDevice::load`], so every method can assume
/// a current context with resolved entry points.
#[derive(Debug)]
pub struct GlDevice {
    _loaded: (),
}

impl GlDevice {
    /// Load OpenGL function pointers against the window's current context
    pub fn load(window: &mut GlfwWindow) -> Result<Self, DeviceError> {
        Self::load_with(|name| window.get_proc_address(name))
    }

    /// Load OpenGL function pointers through an arbitrary resolver
    pub fn load_with<F>(loader: F) -> Result<Self, DeviceError>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        let required = [
            ("glGetString", gl::GetString::is_loaded()),
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ];
        if let Some(&(function, _)) = required.iter().find(|(_, loaded)| !loaded) {
            return Err(DeviceError::LoadFailed { function });
        }

        log::debug!("OpenGL function pointers loaded");
        Ok(Self { _loaded: () })
    }

    fn get_string(name: gl::types::GLenum) -> String {
        // SAFETY: GetString is loaded and the context is current; the returned
        // pointer is either null or a static NUL-terminated string.
        let ptr = unsafe { gl::GetString(name) };
        if ptr.is_null() {
            return UNKNOWN_DRIVER_STRING.to_string();
        }
        unsafe { CStr::from_ptr(ptr.cast()) }.to_string_lossy().into_owned()
    }
}

impl RenderDevice for GlDevice {
    fn driver_info(&self) -> DriverInfo {
        DriverInfo {
            vendor: Self::get_string(gl::VENDOR),
            renderer: Self::get_string(gl::RENDERER),
            version: Self::get_string(gl::VERSION),
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        unsafe { gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear_color_buffer(&mut self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }
}
