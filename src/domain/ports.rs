use crate::utils::error::Result;

/// Yields the non-empty lines of an input, in order.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Number of empty segments dropped so far.
    fn blank_skipped(&self) -> usize {
        0
    }
}

/// Append-only line destination.
pub trait LineSink {
    /// Writes `line` followed by `\n`.
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
