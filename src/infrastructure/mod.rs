//! Infrastructure layer - Config, input and logging

pub mod config;
pub mod input;
pub mod logging;

pub use config::{Config, OutputStyle};
pub use input::PayloadSource;
