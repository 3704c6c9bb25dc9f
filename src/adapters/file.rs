use crate::domain::ports::{LineSink, LineSource};
use crate::utils::error::{BatchError, Result};
use std::fs::File;
use std::io::{BufRead, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

pub type FileLineSource = LineReader<Cursor<Vec<u8>>>;
pub type FileLineSink = LineWriter<BufWriter<File>>;

/// Splits a reader on `\n` and drops empty segments.
///
/// `\r` is left in place, so CRLF input keeps a trailing `\r` on each line.
/// Invalid UTF-8 is replaced with U+FFFD.
/// `path` only labels errors; any `BufRead` works.
pub struct LineReader<R: BufRead> {
    path: PathBuf,
    reader: R,
    buf: Vec<u8>,
    segment: usize,
    blank_skipped: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            buf: Vec::new(),
            segment: 0,
            blank_skipped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineReader<Cursor<Vec<u8>>> {
    /// Loads the whole file up front; a sink may later truncate the same inode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| BatchError::input(path, e))?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self::new(path, Cursor::new(data)))
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| BatchError::input(&self.path, e))?;
            if read == 0 {
                return Ok(None);
            }
            self.segment += 1;

            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
            }
            if self.buf.is_empty() {
                self.blank_skipped += 1;
                continue;
            }

            let line = String::from_utf8_lossy(&self.buf);
            if let std::borrow::Cow::Owned(_) = line {
                tracing::warn!(
                    "Invalid UTF-8 on line {} of {}, replaced with U+FFFD",
                    self.segment,
                    self.path.display()
                );
            }
            return Ok(Some(line.into_owned()));
        }
    }

    fn blank_skipped(&self) -> usize {
        self.blank_skipped
    }
}

pub struct LineWriter<W: Write> {
    path: PathBuf,
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(path: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            path: path.into(),
            writer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineWriter<BufWriter<File>> {
    /// Creates or truncates `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BatchError::output(path, e))?;
        tracing::debug!("Opened output {}", path.display());
        Ok(Self::new(path, BufWriter::new(file)))
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| BatchError::output(&self.path, e))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| BatchError::output(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<R: BufRead>(reader: &mut LineReader<R>) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_reader_drops_empty_segments() {
        let mut reader = LineReader::new("mem", Cursor::new("a\n\nb\n\n\nc\n"));
        assert_eq!(collect(&mut reader), vec!["a", "b", "c"]);
        assert_eq!(reader.blank_skipped(), 3);
    }

    #[test]
    fn test_reader_without_trailing_newline() {
        let mut reader = LineReader::new("mem", Cursor::new("first\nlast"));
        assert_eq!(collect(&mut reader), vec!["first", "last"]);
        assert_eq!(reader.blank_skipped(), 0);
    }

    #[test]
    fn test_reader_keeps_carriage_return() {
        let mut reader = LineReader::new("mem", Cursor::new("A\r\nB\r\n"));
        assert_eq!(collect(&mut reader), vec!["A\r", "B\r"]);
    }

    #[test]
    fn test_reader_replaces_invalid_utf8() {
        let data: &[u8] = b"Caf\xe9\nNext\n";
        let mut reader = LineReader::new("latin1.txt", Cursor::new(data));

        assert_eq!(collect(&mut reader), vec!["Caf\u{fffd}", "Next"]);
    }

    #[test]
    fn test_open_reads_whole_file_before_truncation() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "Alpha\nBeta\n").unwrap();

        let mut reader = LineReader::open(&path).unwrap();
        File::create(&path).unwrap();

        assert_eq!(collect(&mut reader), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_writer_appends_newlines() {
        let mut writer = LineWriter::new("mem", Vec::new());
        writer.write_line("alpha").unwrap();
        writer.write_line("gamma").unwrap();
        writer.finish().unwrap();

        assert_eq!(writer.into_inner(), b"alpha\ngamma\n");
    }

    #[test]
    fn test_open_missing_input_is_input_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LineReader::open(dir.path().join("missing.txt")).err().unwrap();
        assert!(matches!(err, BatchError::InputError { .. }));
    }
}
