use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend rejected the statement (HTTP 400).
    MalformedRequest,
    /// The endpoint does not exist at the configured URL (HTTP 404).
    EndpointNotFound,
    /// The backend accepted the request but failed to apply it (HTTP 500).
    Refused,
    BadStatus(u16),
    Unreachable,
    TimedOut,
    Transport,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::MalformedRequest => write!(f, "malformed request"),
            FailureKind::EndpointNotFound => write!(f, "endpoint not found"),
            FailureKind::Refused => write!(f, "update refused by backend"),
            FailureKind::BadStatus(code) => write!(f, "bad status code {}", code),
            FailureKind::Unreachable => write!(f, "endpoint unreachable"),
            FailureKind::TimedOut => write!(f, "request timed out"),
            FailureKind::Transport => write!(f, "transport error"),
        }
    }
}

/// What went wrong with one request, and exactly what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub endpoint: String,
    pub statement: String,
    pub kind: FailureKind,
    pub description: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SPARQL request to `{}` failed: {}\nStatement:\n{}",
            self.endpoint, self.description, self.statement
        )
    }
}

/// Result of one update against the triple store.
///
/// A failed outcome always carries a [`Diagnostic`], a successful one never
/// does.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct UpdateOutcome {
    diagnostic: Option<Diagnostic>,
}

impl UpdateOutcome {
    pub fn success() -> UpdateOutcome {
        UpdateOutcome { diagnostic: None }
    }

    pub fn failure(diagnostic: Diagnostic) -> UpdateOutcome {
        UpdateOutcome {
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_success(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn into_result(self) -> Result<(), Diagnostic> {
        match self.diagnostic {
            None => Ok(()),
            Some(diagnostic) => Err(diagnostic),
        }
    }
}

/// Collects the outcomes of a batch so one failed entity does not stop the
/// rest from being synchronized.
#[derive(Debug, Clone, Default)]
pub struct OutcomeReport {
    succeeded: usize,
    failures: Vec<Diagnostic>,
}

impl OutcomeReport {
    pub fn new() -> OutcomeReport {
        OutcomeReport::default()
    }

    pub fn record(&mut self, outcome: UpdateOutcome) {
        match outcome.into_result() {
            Ok(()) => self.succeeded += 1,
            Err(diagnostic) => self.failures.push(diagnostic),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[Diagnostic] {
        &self.failures
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Extend<UpdateOutcome> for OutcomeReport {
    fn extend<I: IntoIterator<Item = UpdateOutcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<UpdateOutcome> for OutcomeReport {
    fn from_iter<I: IntoIterator<Item = UpdateOutcome>>(iter: I) -> Self {
        let mut report = OutcomeReport::new();
        report.extend(iter);
        report
    }
}
