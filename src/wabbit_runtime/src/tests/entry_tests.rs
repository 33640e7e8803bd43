#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use crate::abi::EntryPoint;
    use crate::{print_bool_to, print_char_to, print_float_to, print_int_to, with_sink};

    // Records every byte and every flush the runtime hands to stdout.
    #[derive(Default)]
    struct Recorder {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct ClosedStdout {
        fail_write: bool,
    }

    impl Write for ClosedStdout {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_write {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            } else {
                Ok(buf.len())
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from_raw_os_error(libc::EBADF))
        }
    }

    #[test]
    fn char_output_stays_on_the_current_line() {
        let mut out = Recorder::default();
        print_int_to(&mut out, 1);
        print_char_to(&mut out, 'x' as i32);
        print_int_to(&mut out, 2);
        assert_eq!(out.bytes, b"1\nx2\n");
    }

    #[test]
    fn every_call_flushes_once() {
        let mut out = Recorder::default();
        print_int_to(&mut out, 1);
        assert_eq!(out.flushes, 1);
        print_float_to(&mut out, 3.0);
        print_bool_to(&mut out, -5);
        print_bool_to(&mut out, 1);
        print_char_to(&mut out, 65);
        assert_eq!(out.flushes, 5);
        print_char_to(&mut out, 66);
        assert_eq!(out.flushes, 6);
        assert_eq!(out.bytes, b"1\n3.000000\nfalse\ntrue\nAB");
    }

    #[test]
    fn trailing_char_is_flushed_before_returning() {
        let mut out = Recorder::default();
        print_char_to(&mut out, '!' as i32);
        assert_eq!(out.bytes, b"!");
        assert_eq!(out.flushes, 1);
    }

    #[test]
    fn failed_write_is_dropped() {
        print_int_to(ClosedStdout { fail_write: true }, 7);
        print_float_to(ClosedStdout { fail_write: true }, 0.5);
        print_bool_to(ClosedStdout { fail_write: true }, 1);
        print_char_to(ClosedStdout { fail_write: true }, 65);
    }

    #[test]
    fn failed_flush_is_dropped() {
        with_sink(EntryPoint::Char, ClosedStdout { fail_write: false }, |p| {
            p.print_char(0)
        });
    }

    #[test]
    fn write_error_skips_the_flush() {
        let mut out = Recorder::default();
        with_sink(EntryPoint::Int, &mut out, |_| {
            Err(crate::printer::PrintError {
                entry: EntryPoint::Int,
                source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
            })
        });
        assert_eq!(out.flushes, 0);
        assert!(out.bytes.is_empty());
    }
}
