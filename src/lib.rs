//! Résumé analysis engine: field extraction, rubric scoring and
//! technology matching over plain extracted text.
//!
//! The engine is pure and synchronous; document decoding and persistence are
//! the caller's concern. Two entry points cover the two pipelines:
//! [`analyze_resume`] and [`match_technologies`].

pub mod advisor;
pub mod analyzer;
pub mod extractor;
pub mod matcher;
pub mod scoring;
pub mod taxonomy;
pub mod types;
pub mod utils;

pub use analyzer::analyze_resume;
pub use matcher::match_technologies;
pub use types::{
    AnalysisRecord, AnalysisResult, CategoryMatch, CertificationEntry, EducationEntry,
    ExperienceEntry, ExtractedProfile, MatchRecord, PersonalInfo, ProjectEntry, SectionScores,
    Skills, TechMatchResult,
};
