// src/scoring.rs
//! Rubric scoring: per-section 0-10 completeness scores and the 0-100
//! aggregate with word-count, missing-field and grammar penalties.
//!
//! The aggregate applies its penalties in a fixed order: word-count
//! deduction, then two points per missing field, clamp at zero, then the
//! grammar deduction, then the final clamp to 0-100. Reordering changes the
//! result whenever an intermediate value would have gone negative.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{ExtractedProfile, SectionScores, Skills};

/// Words a résumé is expected to reach before word-count deductions stop.
const TARGET_WORD_COUNT: usize = 450;
/// One point of word-count score is lost per this many words under target.
const WORDS_PER_POINT: f64 = 22.5;

// Repeated whitespace after a small set of common words.
static DOUBLED_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:is|are|the)\s\s+").expect("valid regex"));
// Sentence boundary without terminal punctuation before a capital letter.
static MISSING_TERMINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]\s[A-Z]").expect("valid regex"));

pub fn score_sections(profile: &ExtractedProfile) -> SectionScores {
    SectionScores {
        personal_info: personal_info_score(profile),
        summary: summary_score(&profile.summary),
        skills: skills_score(&profile.skills),
        experience: experience_score(profile),
        education: education_score(profile),
        projects: projects_score(profile),
        certifications: certifications_score(profile),
    }
}

/// 10 × presentFields / 5, i.e. two points per present identity field.
pub fn personal_info_score(profile: &ExtractedProfile) -> u8 {
    (profile.personal_info.present_field_count() * 2) as u8
}

pub fn summary_score(summary: &str) -> u8 {
    if summary.trim().is_empty() {
        return 0;
    }
    match summary.chars().count() {
        0..=49 => 5,
        50..=99 => 7,
        _ => 10,
    }
}

/// Five points for each non-empty skill list; additive, not normalized.
pub fn skills_score(skills: &Skills) -> u8 {
    let technical = if skills.technical.is_empty() { 0 } else { 5 };
    let soft = if skills.soft.is_empty() { 0 } else { 5 };
    technical + soft
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn average_entry_score(total: u32, entries: usize) -> u8 {
    let avg = (f64::from(total) / entries as f64).round() as u32;
    avg.min(10) as u8
}

pub fn experience_score(profile: &ExtractedProfile) -> u8 {
    if profile.experience.is_empty() {
        return 0;
    }
    let total: u32 = profile
        .experience
        .iter()
        .map(|exp| {
            let mut entry = 0;
            if present(&exp.title) {
                entry += 2;
            }
            if present(&exp.company) {
                entry += 2;
            }
            if present(&exp.duration) {
                entry += 2;
            }
            if !exp.responsibilities.is_empty() {
                entry += 4;
            }
            entry
        })
        .sum();
    average_entry_score(total, profile.experience.len())
}

pub fn education_score(profile: &ExtractedProfile) -> u8 {
    if profile.education.is_empty() {
        return 0;
    }
    let total: u32 = profile
        .education
        .iter()
        .map(|edu| {
            let mut entry = 0;
            if present(&edu.degree) {
                entry += 3;
            }
            if present(&edu.university) {
                entry += 3;
            }
            if present(&edu.year) {
                entry += 4;
            }
            entry
        })
        .sum();
    average_entry_score(total, profile.education.len())
}

pub fn projects_score(profile: &ExtractedProfile) -> u8 {
    if profile.projects.is_empty() {
        return 0;
    }
    let total: u32 = profile
        .projects
        .iter()
        .map(|project| {
            let mut entry = 0;
            if present(&project.name) {
                entry += 3;
            }
            if present(&project.description) {
                entry += 4;
            }
            if !project.technologies.is_empty() {
                entry += 3;
            }
            entry
        })
        .sum();
    average_entry_score(total, profile.projects.len())
}

pub fn certifications_score(profile: &ExtractedProfile) -> u8 {
    if profile.certifications.is_empty() {
        return 0;
    }
    let total: u32 = profile
        .certifications
        .iter()
        .map(|cert| {
            let mut entry = 0;
            if present(&cert.name) {
                entry += 4;
            }
            if present(&cert.issuer) {
                entry += 3;
            }
            if present(&cert.year) {
                entry += 3;
            }
            entry
        })
        .sum();
    average_entry_score(total, profile.certifications.len())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 20 down to 0, one point lost per 22.5 words under the 450-word target.
pub fn word_count_score(word_count: usize) -> u8 {
    if word_count >= TARGET_WORD_COUNT {
        return 20;
    }
    let points_lost = ((TARGET_WORD_COUNT - word_count) as f64 / WORDS_PER_POINT).floor() as i64;
    (20 - points_lost).max(0) as u8
}

/// Crude proxy for grammar quality: doubled whitespace after common words
/// plus sentence boundaries lacking terminal punctuation.
pub fn grammar_error_count(text: &str) -> usize {
    DOUBLED_SPACE_RE.find_iter(text).count() + MISSING_TERMINAL_RE.find_iter(text).count()
}

pub fn grammar_score(grammar_errors: usize) -> u8 {
    (10 - (grammar_errors / 2) as i64).max(0) as u8
}

/// Flat tally of empty leaf fields across the whole profile. Each entry in a
/// multi-entry section contributes its own leaves, so a résumé with many
/// sparse entries is penalized proportionally more.
pub fn missing_field_count(profile: &ExtractedProfile) -> usize {
    let mut missing = 0;

    for field in profile.personal_info.fields() {
        if field.trim().is_empty() {
            missing += 1;
        }
    }
    if profile.summary.trim().is_empty() {
        missing += 1;
    }
    if profile.skills.technical.is_empty() {
        missing += 1;
    }
    if profile.skills.soft.is_empty() {
        missing += 1;
    }

    if profile.experience.is_empty() {
        missing += 1;
    } else {
        for exp in &profile.experience {
            missing += usize::from(!present(&exp.title));
            missing += usize::from(!present(&exp.company));
            missing += usize::from(!present(&exp.duration));
            missing += usize::from(exp.responsibilities.is_empty());
        }
    }

    if profile.education.is_empty() {
        missing += 1;
    } else {
        for edu in &profile.education {
            missing += usize::from(!present(&edu.degree));
            missing += usize::from(!present(&edu.university));
            missing += usize::from(!present(&edu.year));
        }
    }

    if profile.projects.is_empty() {
        missing += 1;
    } else {
        for project in &profile.projects {
            missing += usize::from(!present(&project.name));
            missing += usize::from(!present(&project.description));
            missing += usize::from(project.technologies.is_empty());
        }
    }

    if profile.certifications.is_empty() {
        missing += 1;
    } else {
        for cert in &profile.certifications {
            missing += usize::from(!present(&cert.name));
            missing += usize::from(!present(&cert.issuer));
            missing += usize::from(!present(&cert.year));
        }
    }

    missing
}

/// Aggregate score. Penalty order matters; see the module docs.
pub fn final_score(word_count_score: u8, missing_fields: usize, grammar_score: u8) -> u8 {
    let mut score: i64 = 100;
    score -= 20 - i64::from(word_count_score);
    score -= 2 * missing_fields as i64;
    score = score.max(0);
    score -= 10 - i64::from(grammar_score);
    score.clamp(0, 100) as u8
}
