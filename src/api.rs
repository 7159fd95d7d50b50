use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Error, Scout};

/// The process-wide scout used by the package-level functions.
static INSTALLED: RwLock<Option<Arc<Scout>>> = RwLock::new(None);

/// Installs `scout` as the process-wide reporter behind the package-level
/// functions.
///
/// Installing a second time silently replaces the previous scout. Calling
/// any package-level function before `install` panics; the misconfiguration
/// is meant to surface immediately instead of silently dropping every
/// future report. Configure-time calls to `install` and [`set_prefix`] are
/// expected to happen before steady-state concurrent use.
pub fn install(scout: impl Into<Scout>) {
    *INSTALLED.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(scout.into()));
}

fn installed() -> Arc<Scout> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| {
            panic!(
                "fogbugz-scout: call fogbugz_scout::install before using the \
                 package-level reporting functions"
            )
        })
}

/// Sets the title prefix on the installed scout.
///
/// See [`Scout::set_prefix`].
pub fn set_prefix(prefix: impl Into<String>) {
    installed().set_prefix(prefix);
}

/// Captures a stack trace and submits `title` as a bug report through the
/// installed scout.
///
/// See [`Scout::report`].
pub fn report(title: &str) -> Result<(), Error> {
    installed().report(title)
}

/// Reports `message` as a bug, then prints it.
///
/// See [`Scout::print`].
pub fn print(message: impl fmt::Display) {
    installed().print(message);
}

/// [`format_args!`] variant of [`print`].
pub fn printf(args: fmt::Arguments<'_>) {
    installed().printf(args);
}

/// Like [`print`], with a trailing newline.
pub fn println(message: impl fmt::Display) {
    installed().println(message);
}

/// Reports `message` as a bug, prints it, then exits the process.
///
/// See [`Scout::fatal`].
pub fn fatal(message: impl fmt::Display) -> ! {
    installed().fatal(message)
}

/// [`format_args!`] variant of [`fatal`].
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    installed().fatalf(args)
}

/// Like [`fatal`], with a trailing newline.
pub fn fatalln(message: impl fmt::Display) -> ! {
    installed().fatalln(message)
}

/// Reports `message` as a bug, prints it, then panics.
///
/// See [`Scout::panic`].
pub fn panic(message: impl fmt::Display) -> ! {
    installed().panic(message)
}

/// [`format_args!`] variant of [`panic`].
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    installed().panicf(args)
}

/// Like [`panic`], with a trailing newline.
pub fn panicln(message: impl fmt::Display) -> ! {
    installed().panicln(message)
}
