// src/matcher.rs
//! Matches a résumé's technologies against a job description's requirements
//! using the shared taxonomy.

use std::collections::BTreeMap;

use crate::taxonomy;
use crate::types::{CategoryMatch, TechMatchResult};

/// Compare two free texts against the technology taxonomy.
///
/// `matched` and `missing` partition the set of technologies the job text
/// requires; `extra` is what the résumé carries beyond the requirements. The
/// breakdown only includes categories with at least one required technology;
/// categories the job never references are omitted, not reported as empty.
/// A job text containing no taxonomy technology at all scores 0.
pub fn match_technologies(resume_text: &str, job_text: &str) -> TechMatchResult {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_text.to_lowercase();

    let mut breakdown = BTreeMap::new();
    for (category, technologies) in taxonomy::lookup() {
        let required: Vec<String> = technologies
            .iter()
            .filter(|tech| taxonomy::text_contains(&job_lower, tech))
            .map(|tech| tech.to_string())
            .collect();
        if required.is_empty() {
            continue;
        }
        let (matched, missing): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|tech| taxonomy::text_contains(&resume_lower, tech));
        breakdown.insert(
            category.to_string(),
            CategoryMatch {
                required,
                matched,
                missing,
            },
        );
    }

    // Whole-taxonomy sets use the deduplicated union, so a technology listed
    // under two categories counts once here.
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut extra = Vec::new();
    for tech in taxonomy::flatten() {
        let in_job = taxonomy::text_contains(&job_lower, tech);
        let in_resume = taxonomy::text_contains(&resume_lower, tech);
        match (in_job, in_resume) {
            (true, true) => matched.push(tech.to_string()),
            (true, false) => missing.push(tech.to_string()),
            (false, true) => extra.push(tech.to_string()),
            (false, false) => {}
        }
    }

    let required_total = matched.len() + missing.len();
    let score = if required_total == 0 {
        0.0
    } else {
        let raw = 100.0 * matched.len() as f64 / required_total as f64;
        (raw * 10.0).round() / 10.0
    };

    TechMatchResult {
        score,
        matched,
        missing,
        extra,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_match_scenario() {
        let result = match_technologies(
            "JavaScript, React, Node.js",
            "Requires JavaScript and Python",
        );
        assert_eq!(result.matched, vec!["JavaScript"]);
        assert_eq!(result.missing, vec!["Python"]);
        assert_eq!(result.extra, vec!["React", "Node.js"]);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_job_without_taxonomy_technologies_scores_zero() {
        let result = match_technologies("JavaScript and Docker", "We need a friendly team player");
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert!(result.breakdown.is_empty());
        assert_eq!(result.extra, vec!["JavaScript", "Docker"]);
    }

    #[test]
    fn test_breakdown_partitions_required_per_category() {
        let result = match_technologies(
            "Python with Django and PostgreSQL",
            "Python, Django, Flask, PostgreSQL, Redis",
        );
        for (category, entry) in &result.breakdown {
            assert_eq!(
                entry.matched.len() + entry.missing.len(),
                entry.required.len(),
                "partition broken for {category}"
            );
        }
        let frameworks = &result.breakdown["frameworks"];
        assert!(frameworks.matched.contains(&"Django".to_string()));
        assert!(frameworks.missing.contains(&"Flask".to_string()));
        let databases = &result.breakdown["databases"];
        assert!(databases.missing.contains(&"Redis".to_string()));
    }

    #[test]
    fn test_breakdown_omits_unreferenced_categories() {
        let result = match_technologies("anything", "Needs Python only");
        assert!(result.breakdown.contains_key("programming_languages"));
        assert!(!result.breakdown.contains_key("frameworks"));
        assert!(!result.breakdown.contains_key("cms_platforms"));
    }

    #[test]
    fn test_score_keeps_one_decimal() {
        // Job requires Python, Java, Ruby; résumé has Python only: 33.3%.
        let result = match_technologies("Python", "Python, Java, Ruby");
        assert_eq!(result.score, 33.3);
    }

    #[test]
    fn test_duplicate_category_entries_count_once_in_score() {
        // Docker sits in both tools and devops; the overall sets still list
        // it once, so the score denominator is 1.
        let result = match_technologies("Docker everywhere", "must know Docker");
        assert_eq!(result.matched, vec!["Docker"]);
        assert_eq!(result.score, 100.0);
        assert!(result.breakdown.contains_key("tools"));
        assert!(result.breakdown.contains_key("devops"));
    }
}
