//! Bootstrap and frame loop
//!
//! [`FrameLoop::open`] runs the initialization sequence: GLFW, context hints,
//! window, current context, function pointers, initial viewport. [`FrameLoop::run`]
//! then renders until the window's close flag is set. Dropping the loop
//! destroys the window and terminates GLFW, whichever way the loop ended.

use crate::core::config::{ApplicationConfig, ClearColor};
use crate::render::device::{DriverInfo, RenderDevice};
use crate::render::opengl::{DeviceError, GlDevice, GlfwWindow, WindowError};
use crate::render::viewport::Viewport;
use crate::render::window::WindowHandle;
use glfw::{Key, WindowEvent};
use thiserror::Error;

/// Fatal initialization errors
///
/// Each one ends the program with [`BootstrapError::EXIT_CODE`]; nothing is
/// retried.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// GLFW init or window creation failed
    #[error(transparent)]
    Window(#[from] WindowError),

    /// OpenGL function pointers could not be loaded
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl BootstrapError {
    /// Process exit status for any initialization failure
    pub const EXIT_CODE: i32 = -1;

    /// Process exit status for this error
    pub const fn exit_code(&self) -> i32 {
        Self::EXIT_CODE
    }
}

/// Summary of a finished frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Number of frames cleared and presented
    pub frames: u64,
}

/// The window, its OpenGL device and the per-frame state
pub struct FrameLoop {
    window: WindowHandle,
    device: Box<dyn RenderDevice>,
    clear_color: ClearColor,
    viewport: Viewport,
    frames: u64,
}

impl FrameLoop {
    /// Run the initialization sequence
    pub fn open(config: &ApplicationConfig) -> Result<Self, BootstrapError> {
        log::info!("Initializing GLFW window {:?}", config.window.title);
        let mut window = GlfwWindow::new(&config.context, &config.window)?;

        // Context is current from here on, so loading is safe
        let device = GlDevice::load(&mut window)?;

        Ok(Self::new(WindowHandle::from_glfw(window), Box::new(device), config))
    }

    pub(crate) fn new(window: WindowHandle, mut device: Box<dyn RenderDevice>, config: &ApplicationConfig) -> Self {
        let (width, height) = window.get_framebuffer_size();
        let viewport = Viewport::covering(width, height);
        device.set_viewport(viewport);
        log::debug!("Initial viewport {width}x{height}");

        Self {
            window,
            device,
            clear_color: config.clear_color,
            viewport,
            frames: 0,
        }
    }

    /// Vendor, renderer and version strings reported by the driver
    pub fn driver_info(&self) -> DriverInfo {
        self.device.driver_info()
    }

    /// Viewport currently applied
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The window being rendered to
    pub const fn window(&self) -> &WindowHandle {
        &self.window
    }

    /// Render frames until the close flag is set
    pub fn run(&mut self) -> FrameStats {
        log::info!("Entering frame loop");
        while !self.window.should_close() {
            self.frame();
        }
        log::info!("Frame loop finished after {} frames", self.frames);

        FrameStats { frames: self.frames }
    }

    /// One iteration: input, clear, present, events
    pub fn frame(&mut self) {
        self.process_input();

        self.device.set_clear_color(self.clear_color);
        self.device.clear_color_buffer();

        self.window.swap_buffers();
        self.window.poll_events();
        self.dispatch_events();

        self.frames += 1;
    }

    fn process_input(&mut self) {
        if self.window.is_key_pressed(Key::Escape) {
            log::debug!("Escape pressed, closing window");
            self.window.set_should_close(true);
        }
    }

    fn dispatch_events(&mut self) {
        // Collect events to avoid borrow checker issues
        let events: Vec<_> = self.window.event_iter().collect();
        for (_, event) in events {
            if let WindowEvent::FramebufferSize(width, height) = event {
                self.on_framebuffer_resize(width, height);
            }
        }
    }

    /// Resize handler: keep the viewport covering the whole framebuffer
    fn on_framebuffer_resize(&mut self, width: i32, height: i32) {
        log::debug!("Framebuffer resized to {width}x{height}");
        self.viewport = Viewport::covering(width, height);
        self.device.set_viewport(self.viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::window::backend::WindowBackend;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Viewport(Viewport),
        ClearColor(ClearColor),
        Clear,
        Swap,
        Poll,
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct RecordingDevice {
        log: CallLog,
    }

    impl RenderDevice for RecordingDevice {
        fn driver_info(&self) -> DriverInfo {
            DriverInfo {
                vendor: "Test Vendor".to_string(),
                renderer: "Test Renderer".to_string(),
                version: "3.3.0 Core".to_string(),
            }
        }

        fn set_viewport(&mut self, viewport: Viewport) {
            self.log.borrow_mut().push(Call::Viewport(viewport));
        }

        fn set_clear_color(&mut self, color: ClearColor) {
            self.log.borrow_mut().push(Call::ClearColor(color));
        }

        fn clear_color_buffer(&mut self) {
            self.log.borrow_mut().push(Call::Clear);
        }
    }

    /// Window whose input and events follow a fixed script
    struct ScriptedWindow {
        log: CallLog,
        should_close: bool,
        escape_from_check: Option<usize>,
        input_checks: Cell<usize>,
        close_on_poll: Option<usize>,
        events: Vec<(usize, WindowEvent)>,
        pending: RefCell<Vec<(f64, WindowEvent)>>,
        polls: usize,
        framebuffer: (i32, i32),
    }

    impl ScriptedWindow {
        fn new(log: CallLog) -> Self {
            Self {
                log,
                should_close: false,
                escape_from_check: None,
                input_checks: Cell::new(0),
                close_on_poll: None,
                events: Vec::new(),
                pending: RefCell::new(Vec::new()),
                polls: 0,
                framebuffer: (800, 600),
            }
        }

        fn escape_at(mut self, check: usize) -> Self {
            self.escape_from_check = Some(check);
            self
        }

        fn close_at(mut self, poll: usize) -> Self {
            self.close_on_poll = Some(poll);
            self
        }

        fn event_at(mut self, poll: usize, event: WindowEvent) -> Self {
            self.events.push((poll, event));
            self
        }
    }

    impl WindowBackend for ScriptedWindow {
        fn should_close(&self) -> bool {
            self.should_close
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.should_close = should_close;
        }

        fn is_key_pressed(&self, key: Key) -> bool {
            let check = self.input_checks.get();
            self.input_checks.set(check + 1);
            key == Key::Escape && self.escape_from_check.is_some_and(|from| check >= from)
        }

        fn swap_buffers(&mut self) {
            self.log.borrow_mut().push(Call::Swap);
        }

        fn poll_events(&mut self) {
            self.log.borrow_mut().push(Call::Poll);
            for (_, event) in self.events.iter().filter(|(poll, _)| *poll == self.polls) {
                match event {
                    WindowEvent::FramebufferSize(width, height) => self.framebuffer = (*width, *height),
                    // GLFW sets the close flag itself before queuing the event
                    WindowEvent::Close => self.should_close = true,
                    _ => {}
                }
                self.pending.borrow_mut().push((0.0, event.clone()));
            }
            if self.close_on_poll == Some(self.polls) || self.polls >= 1_000 {
                self.should_close = true;
            }
            self.polls += 1;
        }

        fn event_iter(&self) -> Box<dyn Iterator<Item = (f64, WindowEvent)> + '_> {
            Box::new(self.pending.take().into_iter())
        }

        fn get_framebuffer_size(&self) -> (i32, i32) {
            self.framebuffer
        }
    }

    fn frame_loop(window: ScriptedWindow, log: &CallLog) -> FrameLoop {
        frame_loop_with(window, log, &ApplicationConfig::default())
    }

    fn frame_loop_with(window: ScriptedWindow, log: &CallLog, config: &ApplicationConfig) -> FrameLoop {
        let device = RecordingDevice { log: Rc::clone(log) };
        FrameLoop::new(WindowHandle::from_backend(Box::new(window)), Box::new(device), config)
    }

    fn count(log: &CallLog, call: &Call) -> usize {
        log.borrow().iter().filter(|c| *c == call).count()
    }

    #[test]
    fn test_initial_viewport_matches_framebuffer() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log));
        let frame_loop = frame_loop(window, &log);

        assert_eq!(frame_loop.viewport(), Viewport::covering(800, 600));
        assert_eq!(*log.borrow(), vec![Call::Viewport(Viewport::covering(800, 600))]);
    }

    #[test]
    fn test_frame_order_is_clear_swap_poll() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log)).close_at(0);
        let mut frame_loop = frame_loop(window, &log);

        let stats = frame_loop.run();

        assert_eq!(stats.frames, 1);
        assert_eq!(
            log.borrow()[1..],
            [Call::ClearColor(ClearColor::ORANGE), Call::Clear, Call::Swap, Call::Poll]
        );
    }

    #[test]
    fn test_escape_ends_loop_within_one_frame() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log)).escape_at(3);
        let mut frame_loop = frame_loop(window, &log);

        let stats = frame_loop.run();

        // The iteration that sees escape still clears and presents once
        assert_eq!(stats.frames, 4);
        assert_eq!(count(&log, &Call::Clear), 4);
        assert_eq!(count(&log, &Call::Swap), 4);
        assert!(frame_loop.window().should_close());
    }

    #[test]
    fn test_platform_close_ends_loop() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log)).event_at(2, WindowEvent::Close);
        let mut frame_loop = frame_loop(window, &log);

        assert_eq!(frame_loop.run().frames, 3);
        assert_eq!(count(&log, &Call::Clear), 3);
        // Nothing is cleared or presented after the poll that delivered the close
        assert_eq!(log.borrow().last(), Some(&Call::Poll));
        assert!(frame_loop.window().should_close());
    }

    #[test]
    fn test_close_flag_already_set_renders_nothing() {
        let log = CallLog::default();
        let mut window = ScriptedWindow::new(Rc::clone(&log));
        window.set_should_close(true);
        let mut frame_loop = frame_loop(window, &log);

        assert_eq!(frame_loop.run(), FrameStats { frames: 0 });
        assert_eq!(count(&log, &Call::Clear), 0);
    }

    #[test]
    fn test_resize_applies_viewport_before_next_clear() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log))
            .event_at(1, WindowEvent::FramebufferSize(1280, 720))
            .close_at(3);
        let mut frame_loop = frame_loop(window, &log);

        frame_loop.run();

        let calls = log.borrow();
        let resized = Call::Viewport(Viewport::covering(1280, 720));
        let resize_at = calls.iter().position(|c| *c == resized).unwrap();
        // Second poll, then the viewport, then the third frame's clear
        assert_eq!(calls[resize_at - 1], Call::Poll);
        assert_eq!(count(&log, &Call::Poll), 4);
        assert_eq!(calls[resize_at + 1], Call::ClearColor(ClearColor::ORANGE));
        assert_eq!(frame_loop.viewport(), Viewport::covering(1280, 720));
    }

    #[test]
    fn test_minimize_resize_passes_zero_viewport() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log))
            .event_at(0, WindowEvent::FramebufferSize(0, 0))
            .close_at(0);
        let mut frame_loop = frame_loop(window, &log);

        frame_loop.run();

        assert_eq!(frame_loop.viewport(), Viewport::covering(0, 0));
    }

    #[test]
    fn test_clear_color_constant_across_frames() {
        let log = CallLog::default();
        let window = ScriptedWindow::new(Rc::clone(&log))
            .event_at(4, WindowEvent::FramebufferSize(640, 480))
            .close_at(9);
        let mut frame_loop = frame_loop(window, &log);

        frame_loop.run();

        let colors: Vec<_> = log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::ClearColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 10);
        assert!(colors.iter().all(|c| *c == ClearColor::ORANGE));
    }

    #[test]
    fn test_loaded_variant_drives_the_loop() {
        use crate::core::config::{Config, WindowConfig};

        let variant = ApplicationConfig::default()
            .with_window(WindowConfig::new(1024, 768, "LearnOpenGL - Teal"))
            .with_clear_color(ClearColor::new(0.2, 0.3, 0.3, 1.0));
        let path = std::env::temp_dir().join(format!("gl_bootstrap_variant_{}.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        variant.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        loaded.validate().unwrap();

        let log = CallLog::default();
        let mut window = ScriptedWindow::new(Rc::clone(&log)).close_at(1);
        window.framebuffer = (loaded.window.width as i32, loaded.window.height as i32);
        let mut frame_loop = frame_loop_with(window, &log, &loaded);

        assert_eq!(frame_loop.run().frames, 2);
        assert_eq!(frame_loop.viewport(), Viewport::covering(1024, 768));
        assert_eq!(count(&log, &Call::ClearColor(ClearColor::new(0.2, 0.3, 0.3, 1.0))), 2);
        assert_eq!(count(&log, &Call::ClearColor(ClearColor::ORANGE)), 0);
    }

    #[test]
    fn test_driver_info_is_forwarded() {
        let log = CallLog::default();
        let frame_loop = frame_loop(ScriptedWindow::new(Rc::clone(&log)), &log);

        assert_eq!(frame_loop.driver_info().lines().len(), 3);
        assert_eq!(frame_loop.driver_info().vendor, "Test Vendor");
    }

    #[test]
    fn test_bootstrap_errors_exit_nonzero_and_name_subsystem() {
        let errors: [BootstrapError; 3] = [
            WindowError::InitializationFailed.into(),
            WindowError::CreationFailed.into(),
            DeviceError::LoadFailed { function: "glClear" }.into(),
        ];
        let messages = [
            "Failed to initialize GLFW",
            "Failed to create GLFW window",
            "Failed to initialize OpenGL function pointers (glClear not loaded)",
        ];

        for (error, message) in errors.iter().zip(messages) {
            assert_eq!(error.exit_code(), -1);
            assert_eq!(error.to_string(), message);
            assert_eq!(error.to_string().lines().count(), 1);
        }
    }
}
