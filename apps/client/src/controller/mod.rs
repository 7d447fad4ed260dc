//! Form Controller — owns the session state and runs the two submit actions.
//!
//! Lifecycle per action: idle → loading → idle. Failures are logged and
//! swallowed: results keep their previous values, `loading` is always cleared,
//! and the message is kept per action (`match_error`, `cover_letter_error`)
//! until that same action next succeeds.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::api_client::MatcherApi;
use crate::models::matching::SubmissionRequest;

pub mod state;

pub use state::SessionState;

pub struct FormController {
    api: Arc<dyn MatcherApi>,
    // Never held across an `.await` on the backend.
    state: Mutex<SessionState>,
}

impl FormController {
    pub fn new(api: Arc<dyn MatcherApi>) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub async fn set_job_description(&self, text: impl Into<String>) {
        self.state.lock().await.job_description = text.into();
    }

    pub async fn set_resume(&self, text: impl Into<String>) {
        self.state.lock().await.resume = text.into();
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    #[cfg(test)]
    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    /// POSTs the current inputs to the match endpoint.
    /// On success stores score, keywords and the optimized resume.
    pub async fn submit_match(&self) {
        let request = self.begin().await;
        let request_id = Uuid::new_v4();

        let result = self
            .api
            .match_resume(&request)
            .instrument(info_span!("submit", action = "match", %request_id))
            .await;

        let mut state = self.state.lock().await;
        match result {
            Ok(response) => {
                info!(
                    %request_id,
                    "Match scored {}% ({} matching, {} missing keywords)",
                    response.results.similarity_score,
                    response.results.matching_keywords.len(),
                    response.results.missing_keywords.len()
                );
                state.match_results = Some(response.results);
                state.optimized_resume = response.optimized_resume;
                state.match_error = None;
            }
            Err(e) => {
                error!(%request_id, kind = e.kind(), "Match request failed: {e}");
                state.match_error = Some(e.to_string());
            }
        }
        state.loading = false;
    }

    /// POSTs the current inputs to the cover-letter endpoint.
    /// On success stores the letter text.
    pub async fn submit_cover_letter(&self) {
        let request = self.begin().await;
        let request_id = Uuid::new_v4();

        let result = self
            .api
            .generate_cover_letter(&request)
            .instrument(info_span!("submit", action = "cover_letter", %request_id))
            .await;

        let mut state = self.state.lock().await;
        match result {
            Ok(response) => {
                info!(
                    %request_id,
                    "Cover letter generated ({} chars)",
                    response.cover_letter.chars().count()
                );
                state.cover_letter = response.cover_letter;
                state.cover_letter_error = None;
            }
            Err(e) => {
                error!(%request_id, kind = e.kind(), "Cover letter request failed: {e}");
                state.cover_letter_error = Some(e.to_string());
            }
        }
        state.loading = false;
    }

    /// Enters the loading state and captures the inputs as they are now.
    async fn begin(&self) -> SubmissionRequest {
        let mut state = self.state.lock().await;
        state.loading = true;
        SubmissionRequest {
            job_description: state.job_description.clone(),
            resume: state.resume.clone(),
        }
    }
}
