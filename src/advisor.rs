// src/advisor.rs
//! Threshold-based strengths, weaknesses and suggestions derived from the
//! extracted profile, plus a coarse keyword diff against a job description.

use std::collections::HashSet;

use crate::types::ExtractedProfile;

/// How many missing job keywords to surface at most.
const MISSING_KEYWORD_LIMIT: usize = 5;
/// Job-text tokens this short are noise, not keywords.
const MIN_KEYWORD_LEN: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advice {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Derive advice from the profile. `resume_text` is the raw text the profile
/// came from; it feeds the keyword diff when a non-empty job description is
/// supplied.
pub fn advise(
    profile: &ExtractedProfile,
    resume_text: &str,
    job_description: Option<&str>,
) -> Advice {
    let mut advice = Advice::default();

    if profile.skills.technical.len() > 5 {
        advice.strengths.push("Strong technical skillset".to_string());
    }
    if profile.experience.len() > 2 {
        advice
            .strengths
            .push("Significant work experience".to_string());
    }
    if !profile.education.is_empty() {
        advice
            .strengths
            .push("Strong educational background".to_string());
    }

    if profile.skills.technical.len() < 3 {
        advice
            .weaknesses
            .push("Limited technical skills listed".to_string());
        advice
            .suggestions
            .push("Consider adding more technical skills relevant to the job".to_string());
    }
    if profile.experience.is_empty() {
        advice
            .weaknesses
            .push("No work experience listed".to_string());
        advice.suggestions.push(
            "Include relevant work experience, even if it's from internships or projects"
                .to_string(),
        );
    }
    if profile.education.is_empty() {
        advice
            .weaknesses
            .push("No education information provided".to_string());
        advice
            .suggestions
            .push("Add your educational background".to_string());
    }

    if let Some(job_text) = job_description.filter(|jd| !jd.is_empty()) {
        advice.missing_keywords = find_missing_keywords(resume_text, job_text);
        if !advice.missing_keywords.is_empty() {
            advice.suggestions.push(format!(
                "Consider highlighting experience with: {}",
                advice.missing_keywords.join(", ")
            ));
        }
    }

    advice
}

/// Job-description tokens absent from the résumé: lowercase both texts,
/// split on non-word characters, keep tokens longer than three characters the
/// résumé never uses, first five in order of first appearance. Deliberately
/// coarser than the taxonomy matcher and not limited to technologies.
pub fn find_missing_keywords(resume_text: &str, job_text: &str) -> Vec<String> {
    let resume_tokens: HashSet<String> = tokenize(resume_text).collect();

    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for token in tokenize(job_text) {
        if token.chars().count() >= MIN_KEYWORD_LEN
            && !resume_tokens.contains(&token)
            && seen.insert(token.clone())
        {
            missing.push(token);
            if missing.len() == MISSING_KEYWORD_LIMIT {
                break;
            }
        }
    }
    missing
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}
