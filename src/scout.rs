use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::sink::{LogSink, StdLogSink};
use crate::stacktrace::capture_stacktrace;
use crate::transport::Transport;
use crate::{Error, Report};

/// Configuration for a [`Scout`].
///
/// The routing fields are plain strings consumed verbatim by the FogBugz
/// `scoutSubmit` endpoint. They are set once at construction; the only
/// field that changes afterwards is the title prefix, via
/// [`Scout::set_prefix`].
///
/// # Examples
///
/// ```
/// let options = fogbugz_scout::ScoutOptions {
///     url: "https://example.fogbugz.com/scoutSubmit.asp".into(),
///     user_name: "alice".into(),
///     project: "Backend".into(),
///     area: "Storage".into(),
///     email: "alice@example.com".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default)]
pub struct ScoutOptions {
    /// The `scoutSubmit` endpoint URL reports are POSTed to.
    pub url: String,
    /// FogBugz user the reports are filed as.
    pub user_name: String,
    /// Project new bugs are filed under.
    pub project: String,
    /// Area new bugs are filed under.
    pub area: String,
    /// Contact email recorded with each report.
    pub email: String,
    /// Passed through verbatim as `ScoutDefaultMessage`.
    pub default_message: String,
    /// Passed through verbatim as `FriendlyResponse`.
    pub friendly_response: String,
    /// The transport used to submit reports. `None` selects the default
    /// HTTP transport.
    pub transport: Option<Arc<dyn Transport>>,
    /// The sink rendered lines are delegated to. `None` selects
    /// [`StdLogSink`].
    pub sink: Option<Arc<dyn LogSink>>,
}

impl fmt::Debug for ScoutOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoutOptions")
            .field("url", &self.url)
            .field("user_name", &self.user_name)
            .field("project", &self.project)
            .field("area", &self.area)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "transport")]
    {
        return Arc::new(crate::transport::UreqHttpTransport::new());
    }
    #[cfg(not(feature = "transport"))]
    {
        panic!("fogbugz-scout was compiled without a transport; set ScoutOptions::transport")
    }
}

/// The reporter.
///
/// A scout captures a stack trace on demand, files it as a bug report, and
/// then hands the rendered message to its [`LogSink`]. It is created once,
/// optionally re-prefixed, and used for the rest of the process lifetime;
/// there is no shutdown. All methods take `&self` and each call performs
/// its own capture and its own request, so a scout can be shared freely
/// across threads.
pub struct Scout {
    options: ScoutOptions,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn LogSink>,
    prefix: RwLock<String>,
}

impl fmt::Debug for Scout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scout")
            .field("options", &self.options)
            .field("prefix", &*self.read_prefix())
            .finish()
    }
}

impl<T: Into<ScoutOptions>> From<T> for Scout {
    fn from(options: T) -> Scout {
        Scout::with_options(options.into())
    }
}

impl Scout {
    /// Creates a new scout for the given options.
    pub fn with_options(mut options: ScoutOptions) -> Scout {
        let transport = options.transport.take().unwrap_or_else(default_transport);
        let sink = options
            .sink
            .take()
            .unwrap_or_else(|| Arc::new(StdLogSink) as Arc<dyn LogSink>);
        Scout {
            options,
            transport,
            sink,
            prefix: RwLock::new(String::new()),
        }
    }

    /// Replaces the title prefix prepended to every subsequent report.
    ///
    /// The suggested value is an application version tag. The prefix is
    /// applied by concatenation at report time; reports already built keep
    /// the prefix they were built with.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self
            .prefix
            .write()
            .unwrap_or_else(PoisonError::into_inner) = prefix.into();
    }

    fn read_prefix(&self) -> std::sync::RwLockReadGuard<'_, String> {
        self.prefix.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Captures a stack trace and submits `title` as a bug report.
    ///
    /// This is one synchronous POST, best effort: a transport failure is
    /// logged through the [`log`] crate and returned, nothing is retried.
    /// The tracker's response status is deliberately not inspected, so a
    /// rejected report still returns `Ok` -- a known limitation carried
    /// over from the wire contract.
    pub fn report(&self, title: &str) -> Result<(), Error> {
        let description = format!("{}{}", self.read_prefix(), title);
        let report = Report {
            user_name: self.options.user_name.clone(),
            project: self.options.project.clone(),
            area: self.options.area.clone(),
            description,
            extra: capture_stacktrace(),
            email: self.options.email.clone(),
            default_message: self.options.default_message.clone(),
            friendly_response: self.options.friendly_response.clone(),
        };
        match self.transport.submit(&self.options.url, &report) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!(target: "fogbugz_scout", "{err}");
                Err(err)
            }
        }
    }

    fn render(message: impl fmt::Display) -> String {
        message.to_string()
    }

    fn render_ln(message: impl fmt::Display) -> String {
        format!("{message}\n")
    }

    fn dispatch(&self, rendered: &str) {
        // Reporting never gets in the way of the logging action.
        let _ = self.report(rendered);
        self.sink.print(rendered);
    }

    /// Reports `message` as a bug, then prints it to the sink.
    pub fn print(&self, message: impl fmt::Display) {
        self.dispatch(&Self::render(message));
    }

    /// [`format_args!`] variant of [`Scout::print`].
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.dispatch(&args.to_string());
    }

    /// Like [`Scout::print`], with a trailing newline.
    pub fn println(&self, message: impl fmt::Display) {
        self.dispatch(&Self::render_ln(message));
    }

    /// Reports `message` as a bug, prints it, then exits the process.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        let rendered = Self::render(message);
        let _ = self.report(&rendered);
        self.sink.fatal(&rendered)
    }

    /// [`format_args!`] variant of [`Scout::fatal`].
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let rendered = args.to_string();
        let _ = self.report(&rendered);
        self.sink.fatal(&rendered)
    }

    /// Like [`Scout::fatal`], with a trailing newline.
    pub fn fatalln(&self, message: impl fmt::Display) -> ! {
        let rendered = Self::render_ln(message);
        let _ = self.report(&rendered);
        self.sink.fatal(&rendered)
    }

    /// Reports `message` as a bug, prints it, then panics.
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let rendered = Self::render(message);
        let _ = self.report(&rendered);
        self.sink.panic(&rendered)
    }

    /// [`format_args!`] variant of [`Scout::panic`].
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let rendered = args.to_string();
        let _ = self.report(&rendered);
        self.sink.panic(&rendered)
    }

    /// Like [`Scout::panic`], with a trailing newline.
    pub fn panicln(&self, message: impl fmt::Display) -> ! {
        let rendered = Self::render_ln(message);
        let _ = self.report(&rendered);
        self.sink.panic(&rendered)
    }
}
