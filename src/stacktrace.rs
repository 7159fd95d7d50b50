use std::io::{self, Write};

use backtrace::Backtrace;

/// Initial capture buffer size: 1 MiB.
const INITIAL_BUFFER: usize = 1 << 20;
/// Capture ceiling: 64 MiB. Dumps that still do not fit are truncated here
/// so a failure path never allocates without bound.
const MAX_BUFFER: usize = 64 << 20;

/// Captures a textual stack trace of the calling thread.
///
/// The dump is headed by the thread name and resolved with the [`backtrace`]
/// crate. The buffer starts at 1 MiB and doubles whenever the dump does not
/// fit, up to a 64 MiB ceiling past which the dump is truncated.
pub fn capture_stacktrace() -> String {
    capture_with(dump_thread)
}

/// Runs `dump` against a geometrically growing buffer.
///
/// `dump` returns `Some(len)` when the dump fit and `None` when it was cut
/// off at the end of the buffer.
fn capture_with<F>(mut dump: F) -> String
where
    F: FnMut(&mut [u8]) -> Option<usize>,
{
    let mut buf = vec![0; INITIAL_BUFFER];
    loop {
        match dump(&mut buf) {
            Some(len) => {
                buf.truncate(len);
                break;
            }
            None if buf.len() >= MAX_BUFFER => break,
            None => {
                let doubled = buf.len() * 2;
                buf = vec![0; doubled];
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn dump_thread(buf: &mut [u8]) -> Option<usize> {
    let mut writer = BoundedWriter {
        buf,
        len: 0,
        truncated: false,
    };
    let thread = std::thread::current();
    let _ = writeln!(writer, "thread '{}':", thread.name().unwrap_or("<unnamed>"));
    let _ = write!(writer, "{:?}", Backtrace::new());
    if writer.truncated {
        None
    } else {
        Some(writer.len)
    }
}

/// A writer over a fixed buffer that records truncation instead of failing.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl Write for BoundedWriter<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let room = self.buf.len() - self.len;
        let fits = room.min(data.len());
        self.buf[self.len..self.len + fits].copy_from_slice(&data[..fits]);
        self.len += fits;
        if fits < data.len() {
            self.truncated = true;
        }
        // Claim the whole write so formatting keeps going; overflow is
        // tracked in `truncated`.
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
