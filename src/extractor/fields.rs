// src/extractor/fields.rs
//! Personal-info extraction as ordered, named rules.
//!
//! Each field is tried against an explicit "Label: value" line first, then a
//! field-specific heuristic pattern. The first rule that produces a value
//! wins; when none does, the field stays empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PersonalInfo;

/// Section headings that must never be captured as a field value. A résumé
/// like "Name:\nEducation" would otherwise report "Education" as the name.
static SECTION_HEADINGS: &[&str] = &[
    "Education",
    "Work Experience",
    "Projects",
    "Technical Skills",
    "Certifications",
    "Achievements",
    "Extracurricular Activities",
    "Languages",
];

/// One named extraction attempt for a field.
pub struct FieldRule {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<String>,
}

/// Apply rules in order; absence is an empty string, never a failure.
pub fn first_match(rules: &[FieldRule], text: &str) -> String {
    rules
        .iter()
        .find_map(|rule| (rule.extract)(text))
        .unwrap_or_default()
}

fn labeled_value(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim().to_string();
    if value.is_empty() || SECTION_HEADINGS.contains(&value.as_str()) {
        None
    } else {
        Some(value)
    }
}

static NAME_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)name:\s*([^\n]+)").expect("valid regex"));
static EMAIL_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)email:\s*([^\n]+)").expect("valid regex"));
static PHONE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)phone:\s*([^\n]+)").expect("valid regex"));
static LOCATION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)location:\s*([^\n]+)").expect("valid regex"));
static LINKEDIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin:\s*([^\n]+)").expect("valid regex"));

// Leading run of capitalized words, e.g. "Jane Marie Doe". Separators stay
// within the line; a name never continues past a newline.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)+)").expect("valid regex"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});
// International prefix optional, US-style 3-3-4 digit groups.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}").expect("valid regex")
});
// "City, ST" with an optional trailing country, all on one line.
static LOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2}(?:[ \t]+[A-Z][a-z]+)*)")
        .expect("valid regex")
});
static LINKEDIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[a-zA-Z0-9-]+").expect("valid regex"));

fn name_label(text: &str) -> Option<String> {
    labeled_value(&NAME_LABEL, text)
}
fn name_heuristic(text: &str) -> Option<String> {
    Some(NAME_PATTERN.captures(text)?.get(1)?.as_str().to_string())
}
fn email_label(text: &str) -> Option<String> {
    labeled_value(&EMAIL_LABEL, text)
}
fn email_heuristic(text: &str) -> Option<String> {
    Some(EMAIL_PATTERN.find(text)?.as_str().to_string())
}
fn phone_label(text: &str) -> Option<String> {
    labeled_value(&PHONE_LABEL, text)
}
fn phone_heuristic(text: &str) -> Option<String> {
    Some(PHONE_PATTERN.find(text)?.as_str().to_string())
}
fn location_label(text: &str) -> Option<String> {
    labeled_value(&LOCATION_LABEL, text)
}
fn location_heuristic(text: &str) -> Option<String> {
    Some(LOCATION_PATTERN.captures(text)?.get(1)?.as_str().to_string())
}
fn linkedin_label(text: &str) -> Option<String> {
    labeled_value(&LINKEDIN_LABEL, text)
}
fn linkedin_heuristic(text: &str) -> Option<String> {
    Some(LINKEDIN_PATTERN.find(text)?.as_str().to_string())
}

pub static NAME_RULES: &[FieldRule] = &[
    FieldRule { name: "label", extract: name_label },
    FieldRule { name: "leading-capitalized-words", extract: name_heuristic },
];
pub static EMAIL_RULES: &[FieldRule] = &[
    FieldRule { name: "label", extract: email_label },
    FieldRule { name: "email-pattern", extract: email_heuristic },
];
pub static PHONE_RULES: &[FieldRule] = &[
    FieldRule { name: "label", extract: phone_label },
    FieldRule { name: "phone-pattern", extract: phone_heuristic },
];
pub static LOCATION_RULES: &[FieldRule] = &[
    FieldRule { name: "label", extract: location_label },
    FieldRule { name: "city-state-pattern", extract: location_heuristic },
];
pub static LINKEDIN_RULES: &[FieldRule] = &[
    FieldRule { name: "label", extract: linkedin_label },
    FieldRule { name: "profile-url-pattern", extract: linkedin_heuristic },
];

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: first_match(NAME_RULES, text),
        email: first_match(EMAIL_RULES, text),
        phone: first_match(PHONE_RULES, text),
        location: first_match(LOCATION_RULES, text),
        linkedin: first_match(LINKEDIN_RULES, text),
    }
}
