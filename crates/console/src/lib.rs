// Library crate: exposes testable modules for integration tests and for
// frontends embedding the editor. The terminal entry point lives in main.rs.

pub mod app;
pub mod camera;
pub mod codec;
pub mod command;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod render;
pub mod settings;
pub mod state;
