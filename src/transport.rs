use crate::{Error, Report};

/// The HTTP seam between a [`Scout`](crate::Scout) and the tracker.
///
/// A transport performs one blocking POST per report and owns its own
/// connection; there is no queue and no retry. Any HTTP response, whatever
/// its status code, is a completed attempt. Only transport-level failures
/// are errors.
pub trait Transport: Send + Sync + 'static {
    /// Submits a single report to `url` as a url-encoded form.
    fn submit(&self, url: &str, report: &Report) -> Result<(), Error>;
}

/// A [`Transport`] that sends reports via the [`ureq`] library.
///
/// This is the default transport, enabled by the `transport` feature. The
/// agent defaults apply unchanged, which means no overall request timeout:
/// a hung endpoint blocks the calling thread until the connection fails.
#[cfg(feature = "transport")]
pub struct UreqHttpTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "transport")]
impl UreqHttpTransport {
    /// Creates a new transport with a default agent.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Creates a new transport that uses the specified [`ureq::Agent`].
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

#[cfg(feature = "transport")]
impl Default for UreqHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "transport")]
impl Transport for UreqHttpTransport {
    fn submit(&self, url: &str, report: &Report) -> Result<(), Error> {
        let body = report.to_urlencoded();
        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/x-www-form-urlencoded")
            .send_string(&body);
        let response = match response {
            Ok(response) => response,
            // The server's verdict is not inspected; a 4xx/5xx answer still
            // means the attempt completed.
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(Error::Transport(err.into())),
        };
        // Drain the body so the connection is released.
        let mut reader = response.into_reader();
        let _ = std::io::copy(&mut reader, &mut std::io::sink());
        Ok(())
    }
}
