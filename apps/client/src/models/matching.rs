use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body sent to both the match and cover-letter endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub job_description: String,
    pub resume: String,
}

/// Score and keyword overlap shown in the "Match Results" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResults {
    /// Kept as the backend's JSON number so `82` is not re-emitted as `82.0`.
    pub similarity_score: Number,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Response body of `POST /api/match`.
///
/// Extra fields the backend may add (`job_keywords`, `resume_keywords`) are ignored.
/// An absent `optimized_resume` becomes an empty string, which hides that panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub results: MatchResults,
    #[serde(default)]
    pub optimized_resume: String,
}

/// Response body of `POST /api/generate-cover-letter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// Response body of `GET /api/test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
