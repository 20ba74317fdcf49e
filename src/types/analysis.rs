// src/types/analysis.rs
//! Result types produced by the analysis and matching pipelines, plus the
//! envelopes an external store persists them under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::profile::ExtractedProfile;

/// Per-section completeness scores, each in 0..=10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub personal_info: u8,
    pub summary: u8,
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub projects: u8,
    pub certifications: u8,
}

/// Complete outcome of one résumé analysis over a single text snapshot.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub profile: ExtractedProfile,
    pub section_scores: SectionScores,
    pub final_score: u8,
    pub word_count: usize,
    pub word_count_score: u8,
    pub grammar_errors: usize,
    pub grammar_score: u8,
    pub missing_fields: usize,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Technologies required by a job description within one taxonomy category.
/// Invariant: `matched` and `missing` partition `required`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub required: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Outcome of matching a résumé against a job description's technology
/// requirements. `breakdown` only carries categories the job text actually
/// references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechMatchResult {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub breakdown: BTreeMap<String, CategoryMatch>,
}

/// Persistence envelope for an analysis. The store itself is external; the
/// engine only produces the keyed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

impl AnalysisRecord {
    pub fn new(analysis: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            analysis,
        }
    }
}

/// Persistence envelope for a technology match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub job_description: String,
    pub result: TechMatchResult,
}

impl MatchRecord {
    pub fn new(job_description: String, result: TechMatchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            job_description,
            result,
        }
    }
}
