//! Runtime support for compiled Wabbit programs.
//!
//! The compiler lowers every `print` statement to a call into one of the
//! four `__wabbit_print_*` functions below, chosen by the static type of
//! the printed value. This crate is built as a static library and linked
//! into the generated executable.

use std::io::{self, Write};

use libc::{c_double, c_int};

use crate::abi::EntryPoint;
use crate::printer::{PrintError, Printer};

pub mod abi;
pub mod format;
pub mod printer;

#[cfg(test)]
mod tests;

// Generated programs have a C main, so Rust never flushes stdout at exit.
// Flush after every call or trailing characters get lost.
pub(crate) fn with_sink<W, F>(entry: EntryPoint, sink: W, f: F)
where
    W: Write,
    F: FnOnce(&mut Printer<W>) -> Result<(), PrintError>,
{
    let result = {
        let mut printer = Printer::new(sink);
        f(&mut printer).and_then(|()| {
            printer
                .flush()
                .map_err(|source| PrintError { entry, source })
        })
    };
    // Unchecked, like printf: a broken stdout never stops the program.
    if let Err(e) = result {
        log::warn!("dropping output: {}", e);
    }
}

pub(crate) fn print_int_to<W: Write>(sink: W, x: c_int) {
    with_sink(EntryPoint::Int, sink, |p| p.print_int(x));
}

pub(crate) fn print_float_to<W: Write>(sink: W, x: c_double) {
    with_sink(EntryPoint::Float, sink, |p| p.print_float(x));
}

pub(crate) fn print_bool_to<W: Write>(sink: W, flag: c_int) {
    with_sink(EntryPoint::Bool, sink, |p| p.print_bool(flag));
}

pub(crate) fn print_char_to<W: Write>(sink: W, code_unit: c_int) {
    with_sink(EntryPoint::Char, sink, |p| p.print_char(code_unit));
}

#[no_mangle]
pub extern "C" fn __wabbit_print_int(x: c_int) {
    print_int_to(io::stdout().lock(), x);
}

#[no_mangle]
pub extern "C" fn __wabbit_print_float(x: c_double) {
    print_float_to(io::stdout().lock(), x);
}

#[no_mangle]
pub extern "C" fn __wabbit_print_bool(flag: c_int) {
    print_bool_to(io::stdout().lock(), flag);
}

#[no_mangle]
pub extern "C" fn __wabbit_print_char(code_unit: c_int) {
    print_char_to(io::stdout().lock(), code_unit);
}
