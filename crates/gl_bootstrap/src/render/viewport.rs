//! Viewport rectangle in framebuffer pixels

/// Mapping from normalized device coordinates to a framebuffer pixel region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size
    ///
    /// A minimized window reports a 0x0 framebuffer, which is passed through
    /// unchanged; `glViewport` accepts it.
    pub const fn covering(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}
