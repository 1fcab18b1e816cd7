//! The sink for non-fatal mapping issues.

use crate::Error;

/// Collects the non-fatal issues hit while mapping an object.
///
/// Every reported issue is logged as a `warn` event and kept, so the caller can inspect what
/// was left unset after a partial decode.
#[derive(Debug, Default)]
pub struct Diagnostics {
    issues: Vec<Error>,
}

impl Diagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `issue` and keeps it.
    pub fn report(&mut self, issue: Error) {
        warn!("{}", issue);
        self.issues.push(issue);
    }

    /// The issues reported so far, in order.
    pub fn issues(&self) -> &[Error] {
        &self.issues
    }

    /// The number of reported issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Consumes the sink, returning the reported issues.
    pub fn into_issues(self) -> Vec<Error> {
        self.issues
    }
}
