//! OAuth Callback Flow
//!
//! Completing an OAuth redirect is asynchronous relative to when the
//! callback page mounts: the session may not have materialized yet. The
//! flow below probes once, retries once after a short delay, and otherwise
//! fails onto the login route after showing the error. Modeled as a pure
//! machine so the timing contract is testable without real timers; the
//! component supplies the actual sleeps.

/// Delay before the single bounded session re-probe.
pub const SESSION_RETRY_DELAY_MS: u32 = 1_000;
/// Delay between showing a failure and redirecting to login.
pub const FAILURE_REDIRECT_DELAY_MS: u32 = 3_000;

pub const DASHBOARD_ROUTE: &str = "/hi";
pub const LOGIN_ROUTE: &str = "/login";

const LOOKUP_FAILED: &str = "Authentication failed. Please try again.";
const NO_SESSION: &str = "No session found after authentication. Please try logging in again.";

/// Outcome of one session lookup against the auth service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    Session,
    NoSession,
    LookupError,
}

/// What the component must do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Navigate immediately; terminal.
    Redirect(&'static str),
    /// Sleep, then probe the session again.
    RetryAfter(u32),
    /// Show the message, sleep, then navigate; terminal.
    FailThenRedirect {
        message: &'static str,
        target: &'static str,
        delay_ms: u32,
    },
}

/// One bounded-retry session resolution.
#[derive(Debug, Default)]
pub struct CallbackMachine {
    retried: bool,
}

impl CallbackMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_probe(&mut self, probe: Probe) -> Step {
        match probe {
            Probe::Session => Step::Redirect(DASHBOARD_ROUTE),
            Probe::LookupError => Step::FailThenRedirect {
                message: LOOKUP_FAILED,
                target: LOGIN_ROUTE,
                delay_ms: FAILURE_REDIRECT_DELAY_MS,
            },
            Probe::NoSession if !self.retried => {
                self.retried = true;
                Step::RetryAfter(SESSION_RETRY_DELAY_MS)
            }
            Probe::NoSession => Step::FailThenRedirect {
                message: NO_SESSION,
                target: LOGIN_ROUTE,
                delay_ms: FAILURE_REDIRECT_DELAY_MS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_present_redirects_to_dashboard_immediately() {
        let mut machine = CallbackMachine::new();
        assert_eq!(machine.on_probe(Probe::Session), Step::Redirect(DASHBOARD_ROUTE));
    }

    #[test]
    fn test_session_materializing_within_retry_window_never_shows_error() {
        let mut machine = CallbackMachine::new();
        assert_eq!(
            machine.on_probe(Probe::NoSession),
            Step::RetryAfter(SESSION_RETRY_DELAY_MS)
        );
        assert_eq!(machine.on_probe(Probe::Session), Step::Redirect(DASHBOARD_ROUTE));
    }

    #[test]
    fn test_session_never_materializing_fails_then_redirects_to_login() {
        let mut machine = CallbackMachine::new();
        assert_eq!(
            machine.on_probe(Probe::NoSession),
            Step::RetryAfter(SESSION_RETRY_DELAY_MS)
        );
        let step = machine.on_probe(Probe::NoSession);
        match step {
            Step::FailThenRedirect {
                message,
                target,
                delay_ms,
            } => {
                assert!(message.contains("No session found"));
                assert_eq!(target, LOGIN_ROUTE);
                assert_eq!(delay_ms, FAILURE_REDIRECT_DELAY_MS);
            }
            other => panic!("expected failure step, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_error_fails_without_retrying() {
        let mut machine = CallbackMachine::new();
        let step = machine.on_probe(Probe::LookupError);
        match step {
            Step::FailThenRedirect {
                message,
                target,
                delay_ms,
            } => {
                assert!(message.contains("Authentication failed"));
                assert_eq!(target, LOGIN_ROUTE);
                assert_eq!(delay_ms, FAILURE_REDIRECT_DELAY_MS);
            }
            other => panic!("expected failure step, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_error_on_retry_probe_also_fails() {
        let mut machine = CallbackMachine::new();
        assert_eq!(
            machine.on_probe(Probe::NoSession),
            Step::RetryAfter(SESSION_RETRY_DELAY_MS)
        );
        assert!(matches!(
            machine.on_probe(Probe::LookupError),
            Step::FailThenRedirect { .. }
        ));
    }
}
