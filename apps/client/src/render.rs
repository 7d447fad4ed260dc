//! Text rendering of the results view.
//!
//! Section order follows the page: title, action bar, failure notices,
//! match results, optimized resume, cover letter. Each results section is
//! shown only when it has content.

use std::fmt::Write;

use crate::controller::SessionState;
use crate::models::matching::MatchResults;

pub const TITLE: &str = "ATS Matcher";

/// Label of the match action for the current loading state.
pub fn match_button_label(loading: bool) -> &'static str {
    if loading {
        "Processing..."
    } else {
        "Analyze Match"
    }
}

/// Label of the cover-letter action for the current loading state.
pub fn cover_letter_button_label(loading: bool) -> &'static str {
    if loading {
        "Generating..."
    } else {
        "Generate Cover Letter"
    }
}

pub fn render_session(state: &SessionState) -> String {
    let mut out = String::new();

    heading(&mut out, TITLE, '=');
    out.push_str(&action_bar(state.loading));
    out.push('\n');

    if state.failed_actions() > 0 {
        out.push('\n');
    }
    if let Some(error) = &state.match_error {
        let _ = writeln!(out, "{} failed: {error}", match_button_label(false));
    }
    if let Some(error) = &state.cover_letter_error {
        let _ = writeln!(out, "{} failed: {error}", cover_letter_button_label(false));
    }

    if let Some(results) = &state.match_results {
        out.push('\n');
        render_match_results(&mut out, results);
    }

    if !state.optimized_resume.is_empty() {
        out.push('\n');
        heading(&mut out, "Optimized Resume", '-');
        let _ = writeln!(out, "{}", state.optimized_resume.trim_end());
    }

    if !state.cover_letter.is_empty() {
        out.push('\n');
        heading(&mut out, "Generated Cover Letter", '-');
        let _ = writeln!(out, "{}", state.cover_letter.trim_end());
    }

    out
}

fn action_bar(loading: bool) -> String {
    let suffix = if loading { " (disabled)" } else { "" };
    format!(
        "[{}{suffix}] [{}{suffix}]",
        match_button_label(loading),
        cover_letter_button_label(loading)
    )
}

fn render_match_results(out: &mut String, results: &MatchResults) {
    heading(out, "Match Results", '-');
    let _ = writeln!(out, "{}% Match", results.similarity_score);
    let _ = writeln!(out, "\nMatching Keywords:");
    keyword_list(out, &results.matching_keywords);
    let _ = writeln!(out, "\nMissing Keywords:");
    keyword_list(out, &results.missing_keywords);
}

fn keyword_list(out: &mut String, keywords: &[String]) {
    if keywords.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for keyword in keywords {
        let _ = writeln!(out, "  - {keyword}");
    }
}

fn heading(out: &mut String, text: &str, underline: char) {
    let _ = writeln!(out, "{text}");
    let _ = writeln!(
        out,
        "{}",
        underline.to_string().repeat(text.chars().count())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn go_results() -> MatchResults {
        MatchResults {
            similarity_score: Number::from(82),
            matching_keywords: vec!["Go".to_string()],
            missing_keywords: vec!["Kubernetes".to_string()],
        }
    }

    #[test]
    fn test_button_labels_follow_loading() {
        assert_eq!(match_button_label(false), "Analyze Match");
        assert_eq!(match_button_label(true), "Processing...");
        assert_eq!(cover_letter_button_label(false), "Generate Cover Letter");
        assert_eq!(cover_letter_button_label(true), "Generating...");
    }

    #[test]
    fn test_empty_session_shows_only_title_and_actions() {
        let out = render_session(&SessionState::default());
        assert!(out.starts_with("ATS Matcher\n==========="));
        assert!(out.contains("[Analyze Match] [Generate Cover Letter]"));
        assert!(!out.contains("Match Results"));
        assert!(!out.contains("Optimized Resume"));
        assert!(!out.contains("Generated Cover Letter"));
    }

    #[test]
    fn test_loading_marks_actions_disabled() {
        let state = SessionState {
            loading: true,
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("[Processing... (disabled)] [Generating... (disabled)]"));
    }

    #[test]
    fn test_match_results_section() {
        let state = SessionState {
            match_results: Some(go_results()),
            optimized_resume: "Go engineer with 5 years...".to_string(),
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("82% Match"));
        assert!(out.contains("Matching Keywords:\n  - Go"));
        assert!(out.contains("Missing Keywords:\n  - Kubernetes"));
        assert!(out.contains("Optimized Resume\n----------------\nGo engineer with 5 years..."));
    }

    #[test]
    fn test_fractional_score_kept() {
        let mut results = go_results();
        results.similarity_score = Number::from_f64(41.27).unwrap();
        let state = SessionState {
            match_results: Some(results),
            ..Default::default()
        };
        assert!(render_session(&state).contains("41.27% Match"));
    }

    #[test]
    fn test_empty_keyword_lists_render_none() {
        let state = SessionState {
            match_results: Some(MatchResults {
                similarity_score: Number::from(0),
                matching_keywords: vec![],
                missing_keywords: vec![],
            }),
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("0% Match"));
        assert!(out.contains("Matching Keywords:\n  (none)"));
    }

    #[test]
    fn test_cover_letter_shown_without_match_results() {
        let state = SessionState {
            cover_letter: "Dear hiring manager,".to_string(),
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("Generated Cover Letter"));
        assert!(out.contains("Dear hiring manager,"));
        assert!(!out.contains("Match Results"));
    }

    #[test]
    fn test_failure_notice_names_the_action() {
        let state = SessionState {
            cover_letter_error: Some("API error (status 500): boom".to_string()),
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("Generate Cover Letter failed: API error (status 500): boom"));
        assert!(!out.contains("Analyze Match failed"));
    }

    #[test]
    fn test_failed_match_shown_next_to_successful_cover_letter() {
        let state = SessionState {
            cover_letter: "Dear team,".to_string(),
            match_error: Some("API error (status 500): scorer down".to_string()),
            ..Default::default()
        };
        let out = render_session(&state);
        assert!(out.contains("Analyze Match failed: API error (status 500): scorer down"));
        assert!(out.contains("Generated Cover Letter\n----------------------\nDear team,"));
    }
}
