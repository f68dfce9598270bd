//! LearnOpenGL clear-screen program
//!
//! Opens an 800x600 OpenGL 3.3 core window, prints the driver strings and
//! clears to orange every frame until escape is pressed or the window is
//! closed.

use gl_bootstrap::foundation::logging;
use gl_bootstrap::prelude::*;

fn main() {
    let config = ApplicationConfig::default();
    logging::init(&config.logging);

    log::info!("Starting {}", config.window.title);

    let mut frame_loop = match FrameLoop::open(&config) {
        Ok(frame_loop) => frame_loop,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    println!("{}", frame_loop.driver_info());

    let stats = frame_loop.run();
    drop(frame_loop);

    log::info!("Exited cleanly after {} frames", stats.frames);
}
