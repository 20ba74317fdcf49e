// src/extractor/sections.rs
//! Heading-based section capture and entry mining.
//!
//! A section body is whatever follows a heading keyword (with optional
//! colon) up to the next blank line, the next capitalized heading-like line,
//! or the end of the text. Bodies are then split into entries and each entry
//! mined for its sub-fields. Missing headings or sub-fields degrade to empty
//! values; nothing here fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry};

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)summary:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static TECHNICAL_SKILLS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)technical\s+skills:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static SOFT_SKILLS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)soft\s+skills:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)experience:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static EDUCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)education:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static PROJECTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)projects:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});
static CERTIFICATIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)certifications:?\s*(.*?)(?:\n\s*\n|\n(?-i:[A-Z])|\z)").expect("valid regex")
});

// Leading capitalized token run on an entry's first line: role, degree,
// project or certification name.
static LEAD_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-zA-Z ]+)").expect("valid regex"));
static ORGANIZATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)at\s+([A-Z][a-zA-Z ]+)").expect("valid regex"));
static ISSUER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)from\s+([A-Z][a-zA-Z ]+)").expect("valid regex"));
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{4}\s*-\s*(?:present|\d{4}))").expect("valid regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid regex"));
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)description:?\s*([^\n]*)").expect("valid regex"));
static TECHNOLOGIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)technologies:?\s*([^\n]*)").expect("valid regex"));

fn capture_section(re: &Regex, text: &str) -> Option<String> {
    let body = re.captures(text)?.get(1)?.as_str().trim().to_string();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

fn capture_trimmed(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Split a section body into entry blocks. A new block starts at every line
/// led by a capital letter; other lines continue the current block.
pub fn split_entries(body: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    for line in body.lines() {
        let starts_entry = line.chars().next().map_or(false, |c| c.is_ascii_uppercase());
        match blocks.last_mut() {
            Some(current) if !starts_entry => {
                current.push('\n');
                current.push_str(line);
            }
            _ => blocks.push(line.to_string()),
        }
    }
    blocks.retain(|b| !b.trim().is_empty());
    blocks
}

fn split_listed(body: &str) -> Vec<String> {
    body.split([',', '•'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn extract_summary(text: &str) -> String {
    capture_section(&SUMMARY_RE, text).unwrap_or_default()
}

pub fn extract_technical_skills(text: &str) -> Vec<String> {
    capture_section(&TECHNICAL_SKILLS_RE, text)
        .map(|body| split_listed(&body))
        .unwrap_or_default()
}

pub fn extract_soft_skills(text: &str) -> Vec<String> {
    capture_section(&SOFT_SKILLS_RE, text)
        .map(|body| split_listed(&body))
        .unwrap_or_default()
}

fn extract_responsibilities(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('•') || line.starts_with('-'))
        .map(|line| {
            line.strip_prefix('•')
                .or_else(|| line.strip_prefix('-'))
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .collect()
}

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(body) = capture_section(&EXPERIENCE_RE, text) else {
        return Vec::new();
    };
    split_entries(&body)
        .iter()
        .map(|block| ExperienceEntry {
            title: capture_trimmed(&LEAD_TITLE_RE, block),
            company: capture_trimmed(&ORGANIZATION_RE, block),
            duration: capture_trimmed(&DURATION_RE, block),
            responsibilities: extract_responsibilities(block),
        })
        .collect()
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let Some(body) = capture_section(&EDUCATION_RE, text) else {
        return Vec::new();
    };
    split_entries(&body)
        .iter()
        .map(|block| EducationEntry {
            degree: capture_trimmed(&LEAD_TITLE_RE, block),
            university: capture_trimmed(&ORGANIZATION_RE, block),
            year: YEAR_RE
                .find(block)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let Some(body) = capture_section(&PROJECTS_RE, text) else {
        return Vec::new();
    };
    split_entries(&body)
        .iter()
        .map(|block| ProjectEntry {
            name: capture_trimmed(&LEAD_TITLE_RE, block),
            description: capture_trimmed(&DESCRIPTION_RE, block),
            technologies: {
                let listed = capture_trimmed(&TECHNOLOGIES_RE, block);
                listed
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            },
        })
        .collect()
}

pub fn extract_certifications(text: &str) -> Vec<CertificationEntry> {
    let Some(body) = capture_section(&CERTIFICATIONS_RE, text) else {
        return Vec::new();
    };
    split_entries(&body)
        .iter()
        .map(|block| CertificationEntry {
            name: capture_trimmed(&LEAD_TITLE_RE, block),
            issuer: capture_trimmed(&ISSUER_RE, block),
            year: YEAR_RE
                .find(block)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stops_at_next_heading() {
        let text = "Summary: Backend engineer focused on reliability.\nTechnical Skills: Rust";
        assert_eq!(
            extract_summary(text),
            "Backend engineer focused on reliability."
        );
    }

    #[test]
    fn test_summary_absent_is_empty() {
        assert_eq!(extract_summary("no headings here"), "");
    }

    #[test]
    fn test_skills_split_on_commas_and_bullets() {
        let text = "Technical Skills: Rust, Python • SQL\n\nSoft Skills: communication, teamwork";
        assert_eq!(extract_technical_skills(text), vec!["Rust", "Python", "SQL"]);
        assert_eq!(extract_soft_skills(text), vec!["communication", "teamwork"]);
    }

    #[test]
    fn test_experience_entry_mining() {
        let text = "Experience:\nSoftware Engineer at Google\n2019 - 2021\n• Built data pipelines\n- Led a team of four\n\nEducation: BS";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Software Engineer at Google");
        assert_eq!(entry.company, "Google");
        assert_eq!(entry.duration, "2019 - 2021");
        assert_eq!(
            entry.responsibilities,
            vec!["Built data pipelines", "Led a team of four"]
        );
    }

    #[test]
    fn test_experience_duration_accepts_present() {
        let text = "Experience:\nEngineer at Acme\n2022 - Present";
        let entries = extract_experience(text);
        assert_eq!(entries[0].duration, "2022 - Present");
    }

    #[test]
    fn test_malformed_experience_entry_keeps_defaults() {
        let text = "Experience:\nfreelance gigs, various";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].company, "");
        assert_eq!(entries[0].duration, "");
        assert!(entries[0].responsibilities.is_empty());
    }

    #[test]
    fn test_education_entry_mining() {
        let text = "Education:\nBachelor of Science at MIT\ngraduated 2015";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Science at MIT");
        assert_eq!(entries[0].university, "MIT");
        assert_eq!(entries[0].year, "2015");
    }

    #[test]
    fn test_project_entry_mining() {
        let text =
            "Projects:\nInventory Tracker\ndescription: CLI for warehouse counts\ntechnologies: Rust, SQLite";
        let entries = extract_projects(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Inventory Tracker");
        assert_eq!(entries[0].description, "CLI for warehouse counts");
        assert_eq!(entries[0].technologies, vec!["Rust", "SQLite"]);
    }

    #[test]
    fn test_certification_entry_mining() {
        let text = "Certifications:\nSolutions Architect from Amazon\nearned 2022";
        let entries = extract_certifications(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Solutions Architect from Amazon");
        assert_eq!(entries[0].issuer, "Amazon");
        assert_eq!(entries[0].year, "2022");
    }

    #[test]
    fn test_split_entries_starts_blocks_at_capital_lines() {
        let blocks = split_entries("First role\ndetails here\nSecond role\nmore details");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "First role\ndetails here");
        assert_eq!(blocks[1], "Second role\nmore details");
    }

    #[test]
    fn test_split_entries_keeps_leading_lowercase_block() {
        let blocks = split_entries("intro line\nThen a title");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "intro line");
    }

    #[test]
    fn test_empty_sections_yield_empty_lists() {
        assert!(extract_experience("").is_empty());
        assert!(extract_education("").is_empty());
        assert!(extract_projects("").is_empty());
        assert!(extract_certifications("").is_empty());
    }
}
