//! Backend-agnostic window management trait

use glfw::{Key, WindowEvent};

/// Internal trait for window backend implementations
///
/// Covers exactly what the frame loop touches on a window: the close flag,
/// one key state, presentation and event processing. Applications never use
/// this trait directly; they go through [`WindowHandle`](super::WindowHandle).
///
/// # Thread Safety
/// No `Send` bound. GLFW windows and their contexts must stay on the thread
/// that created them.
pub(crate) trait WindowBackend {
    /// Check if the window should close
    ///
    /// True once the user used the platform close affordance (title bar
    /// button, Alt+F4, ...) or the program called `set_should_close(true)`.
    /// The frame loop reads this once per iteration.
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    ///
    /// Only takes effect when the loop next checks the flag; the current
    /// iteration still runs to completion.
    fn set_should_close(&mut self, should_close: bool);

    /// Whether `key` is currently held down
    ///
    /// This is the last reported key state, not an event. A press shorter
    /// than one frame can be missed.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Present the back buffer
    ///
    /// Swaps the front and back buffers of the window's double-buffered
    /// surface. May block on vsync depending on the swap interval.
    fn swap_buffers(&mut self);

    /// Process pending window system events without blocking
    ///
    /// Returns as soon as the queue is drained. Events the window subscribed
    /// to are queued for `event_iter`.
    fn poll_events(&mut self);

    /// Drain the events queued by the last `poll_events`
    ///
    /// Each event comes with the GLFW timestamp it was received at. Events
    /// not consumed here are returned by the next call.
    fn event_iter(&self) -> Box<dyn Iterator<Item = (f64, WindowEvent)> + '_>;

    /// Current framebuffer size in pixels
    ///
    /// Can differ from the window size on HiDPI displays, and is `(0, 0)`
    /// while the window is minimized.
    fn get_framebuffer_size(&self) -> (i32, i32);
}
