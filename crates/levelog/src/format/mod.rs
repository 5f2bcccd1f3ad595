//! Rendering records into lines
//!
//! - `Formatter` trait: turns a `Record` into one line of text
//! - `DefaultFormatter`: `LEVEL: [timestamp ][file:line: ]message`
//! - `Joined`: renders an ordered list of values separated by spaces

mod traits;
mod default_formatter;
mod joined;

pub use traits::{Formatter, Record, SharedFormatter};
pub use default_formatter::{DefaultFormatter, DEFAULT_TIME_FORMAT};
pub use joined::Joined;
