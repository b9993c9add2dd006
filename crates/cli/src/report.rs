//! JSON Lines diagnostic output.

use std::io::{self, Write};

use webcm_font_metadata::{Diagnostic, DiagnosticSink};

/// Writes each diagnostic as one JSON object per line and flushes, so a
/// consumer reading the pipe sees every record as soon as it is produced.
pub struct JsonLines<W> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for JsonLines<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, diagnostic)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
