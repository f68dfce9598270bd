//! Backend-agnostic render device trait
//!
//! The frame loop only ever needs four things from the graphics API: the
//! driver identification strings, a viewport, a clear color and a clear.

use crate::core::config::ClearColor;
use crate::render::viewport::Viewport;
use std::fmt;

/// Placeholder printed when the driver returns no string
pub const UNKNOWN_DRIVER_STRING: &str = "<unknown>";

/// Internal trait for render device implementations
///
/// Every method assumes the device's context is current on the calling
/// thread. Implementations do not report errors: the calls involved cannot
/// fail on a valid context.
pub(crate) trait RenderDevice {
    /// Vendor, renderer and version strings reported by the driver
    ///
    /// Informational only. Nothing branches on the values; strings the driver
    /// does not return come back as [`UNKNOWN_DRIVER_STRING`].
    fn driver_info(&self) -> DriverInfo;

    /// Set the viewport rectangle
    ///
    /// Called once after loading and again from the resize handler, so the
    /// next clear always covers the current framebuffer.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Set the color used by subsequent clears
    ///
    /// The value is context state and persists until changed; the frame loop
    /// still sets it every frame.
    fn set_clear_color(&mut self, color: ClearColor);

    /// Clear the color buffer
    ///
    /// Fills the whole back buffer with the current clear color; the viewport
    /// does not restrict it.
    fn clear_color_buffer(&mut self);
}

/// Driver identification strings, informational only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverInfo {
    /// `GL_VENDOR`
    pub vendor: String,
    /// `GL_RENDERER`
    pub renderer: String,
    /// `GL_VERSION`
    pub version: String,
}

impl DriverInfo {
    /// The three report lines, in print order
    pub fn lines(&self) -> [String; 3] {
        [
            format!("GPU Vendor:   {}", self.vendor),
            format!("GPU Renderer: {}", self.renderer),
            format!("GL Version:   {}", self.version),
        ]
    }
}

impl fmt::Display for DriverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [vendor, renderer, version] = self.lines();
        write!(f, "{vendor}\n{renderer}\n{version}")
    }
}
