//! Output sinks for extracted text
//!
//! The extractor only ever appends: a sink needs a text write and a line
//! break write. `String` is the common in-memory target; `IoSink` adapts
//! anything implementing `std::io::Write` (files, sockets, `Vec<u8>`).

use std::io;

/// Append-only destination for extracted text
pub trait TextSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Write a single line break
    fn write_line_break(&mut self) -> io::Result<()> {
        self.write_text("\n")
    }
}

impl TextSink for String {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapter that turns any `io::Write` into a `TextSink`
pub struct IoSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }
}
