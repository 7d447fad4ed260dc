use serde::Serialize;

use crate::models::matching::MatchResults;

/// Everything the form shows. Lives only as long as the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub job_description: String,
    pub resume: String,
    /// True while any request is in flight. A plain flag: overlapping
    /// requests are not counted, the first one to finish clears it.
    pub loading: bool,
    /// Set only by a successful match.
    pub match_results: Option<MatchResults>,
    pub optimized_resume: String,
    /// Set only by a successful cover-letter request.
    pub cover_letter: String,
    /// Message of the last failed match; cleared by the next successful match.
    pub match_error: Option<String>,
    /// Message of the last failed cover-letter request; cleared by the next
    /// successful one.
    pub cover_letter_error: Option<String>,
}

impl SessionState {
    /// Number of actions whose most recent attempt failed.
    pub fn failed_actions(&self) -> usize {
        usize::from(self.match_error.is_some()) + usize::from(self.cover_letter_error.is_some())
    }
}
