//! Logger facade
//!
//! - `LoggerConfig`: threshold, sink, formatter and line options
//! - `Logger`: an independently configured instance
//! - `global`: the process-wide default logger and its setters

mod config;
mod instance;
pub mod global;

pub use config::LoggerConfig;
pub use instance::Logger;
