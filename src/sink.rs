use std::process;

/// The logging destination a [`Scout`](crate::Scout) delegates to after a
/// report attempt.
///
/// `fatal` and `panic` have default bodies built on [`LogSink::print`];
/// doubles only override them to observe the call instead of terminating.
pub trait LogSink: Send + Sync + 'static {
    /// Writes a single rendered line.
    fn print(&self, message: &str);

    /// Writes the line, then terminates the process with exit code 1.
    fn fatal(&self, message: &str) -> ! {
        self.print(message);
        process::exit(1);
    }

    /// Writes the line, then unwinds with a panic carrying the line.
    fn panic(&self, message: &str) -> ! {
        self.print(message);
        panic!("{message}");
    }
}

/// The default sink: rendered lines go to the [`log`] crate at error level
/// under the `fogbugz_scout` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLogSink;

impl LogSink for StdLogSink {
    fn print(&self, message: &str) {
        log::error!(target: "fogbugz_scout", "{message}");
    }
}
