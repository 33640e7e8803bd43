use std::io::{self, Write};

use thiserror::Error;

use crate::abi::EntryPoint;
use crate::format::{bool_text, char_byte, float_text, int_text};

/// A write to the output sink failed.
#[derive(Debug, Error)]
#[error("{entry} could not write to its sink: {source}")]
pub struct PrintError {
    pub entry: EntryPoint,
    #[source]
    pub source: io::Error,
}

/// The four print operations bound to an explicit sink.
///
/// Each call is independent: the printer keeps no state besides the sink,
/// so the same input always produces the same bytes.
pub struct Printer<W: Write> {
    sink: W,
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W) -> Self {
        Printer { sink }
    }

    pub fn print_int(&mut self, x: i32) -> Result<(), PrintError> {
        self.emit(EntryPoint::Int, int_text(x).as_bytes())
    }

    pub fn print_float(&mut self, x: f64) -> Result<(), PrintError> {
        self.emit(EntryPoint::Float, float_text(x).as_bytes())
    }

    pub fn print_bool(&mut self, flag: i32) -> Result<(), PrintError> {
        self.emit(EntryPoint::Bool, bool_text(flag).as_bytes())
    }

    /// Writes one raw byte with no line terminator.
    pub fn print_char(&mut self, code_unit: i32) -> Result<(), PrintError> {
        self.emit(EntryPoint::Char, &[char_byte(code_unit)])
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, entry: EntryPoint, bytes: &[u8]) -> Result<(), PrintError> {
        debug_assert!(!entry.appends_newline() || bytes.ends_with(b"\n"));
        self.sink
            .write_all(bytes)
            .map_err(|source| PrintError { entry, source })
    }
}
