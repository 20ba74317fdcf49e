// src/analyzer.rs
//! End-to-end résumé analysis over one text snapshot.

use tracing::info;

use crate::advisor;
use crate::extractor;
use crate::scoring;
use crate::types::AnalysisResult;

/// Analyze résumé text, optionally against a job description.
///
/// Pure over its inputs: the same text snapshot always yields the same
/// result. Degenerate input still produces a complete, well-shaped result
/// with default fields and floor scores. An empty job description is treated
/// the same as none.
pub fn analyze_resume(text: &str, job_description: Option<&str>) -> AnalysisResult {
    let profile = extractor::extract(text);
    let section_scores = scoring::score_sections(&profile);

    let word_count = scoring::word_count(text);
    let word_count_score = scoring::word_count_score(word_count);
    let grammar_errors = scoring::grammar_error_count(text);
    let grammar_score = scoring::grammar_score(grammar_errors);
    let missing_fields = scoring::missing_field_count(&profile);
    let final_score = scoring::final_score(word_count_score, missing_fields, grammar_score);

    let advice = advisor::advise(&profile, text, job_description);

    info!(
        word_count,
        missing_fields, grammar_errors, final_score, "resume analysis complete"
    );

    AnalysisResult {
        profile,
        section_scores,
        final_score,
        word_count,
        word_count_score,
        grammar_errors,
        grammar_score,
        missing_fields,
        strengths: advice.strengths,
        weaknesses: advice.weaknesses,
        suggestions: advice.suggestions,
        missing_keywords: advice.missing_keywords,
    }
}
