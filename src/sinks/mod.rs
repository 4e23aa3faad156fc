//! Concrete sink variants.

mod console;
mod discard;
mod file;
mod system;

pub use console::ConsoleSink;
pub use discard::DiscardSink;
pub use file::{RotatingFileSink, DEFAULT_LOG_FILE, LOG_FILE_SIZE_LIMIT};
pub use system::SystemSink;
