//! Crash reporting to [FogBugz] via the `scoutSubmit` endpoint.
//!
//! When an application hits a failure worth filing, a [`Scout`] captures a
//! textual stack trace, submits it together with the rendered message as a
//! bug report, and then carries on with the normal logging action: print,
//! exit, or panic. Reporting is strictly best effort; a submission that
//! fails never blocks or alters the logging action that follows it.
//!
//! # Quickstart
//!
//! ```no_run
//! use fogbugz_scout::{Scout, ScoutOptions};
//!
//! fogbugz_scout::install(ScoutOptions {
//!     url: "https://example.fogbugz.com/scoutSubmit.asp".into(),
//!     user_name: "alice".into(),
//!     project: "Backend".into(),
//!     area: "Storage".into(),
//!     email: "alice@example.com".into(),
//!     ..Default::default()
//! });
//! fogbugz_scout::set_prefix("myapp 1.4.2: ");
//!
//! // Files a bug with a stack trace, then logs and exits the process.
//! fogbugz_scout::fatal("disk full");
//! ```
//!
//! [`install`] must be called before any of the package-level functions;
//! using them uninstalled panics immediately rather than silently dropping
//! reports. Code that prefers explicit wiring can skip installation and
//! call the same methods on a [`Scout`] instance directly.
//!
//! The `printf`-style entry points take [`std::fmt::Arguments`], built with
//! [`format_args!`]:
//!
//! ```no_run
//! # let code = 7;
//! fogbugz_scout::printf(format_args!("upload failed with code {code}"));
//! ```
//!
//! # Features
//!
//! - `transport` (default): the blocking [`ureq`]-based HTTP transport.
//! - `test`: transport and sink doubles for testing instrumented code.
//!
//! [FogBugz]: https://fogbugz.com/

#![warn(missing_docs)]

mod api;
mod error;
mod report;
mod scout;
mod sink;
mod stacktrace;
mod transport;


pub use crate::api::{
    fatal, fatalf, fatalln, install, panic, panicf, panicln, print, printf, println, report,
    set_prefix,
};
pub use crate::error::Error;
pub use crate::report::Report;
pub use crate::scout::{Scout, ScoutOptions};
pub use crate::sink::{LogSink, StdLogSink};
pub use crate::stacktrace::capture_stacktrace;
pub use crate::transport::Transport;
#[cfg(feature = "transport")]
pub use crate::transport::UreqHttpTransport;
