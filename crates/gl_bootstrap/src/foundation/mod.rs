//! Foundation module - Core utilities shared by the bootstrap
//!
//! Currently this is only the logging setup; everything else the program
//! needs comes from GLFW and the OpenGL loader.

pub mod logging;
