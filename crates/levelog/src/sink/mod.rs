//! Writable destinations for rendered log lines
//!
//! This module provides:
//! - `Sink` trait for anything a rendered record can be appended to
//! - Built-in implementations: `ConsoleSink`, `FileSink`, `FanOutSink`, `MemorySink`,
//!   `WriterSink`, `NoOpSink`

mod traits;
mod console;
mod file;
mod fanout;
mod memory;
mod writer;
mod noop;

pub use traits::{Sink, SharedSink};
pub use console::{ConsoleSink, ConsoleStream};
pub use file::FileSink;
pub use fanout::FanOutSink;
pub use memory::MemorySink;
pub use writer::WriterSink;
pub use noop::NoOpSink;
