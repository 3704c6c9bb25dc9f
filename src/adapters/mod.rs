// Adapters layer: concrete line sources and sinks.

pub mod file;

pub use file::{FileLineSink, FileLineSource, LineReader, LineWriter};
