// src/types/mod.rs
pub mod analysis;
pub mod profile;

pub use analysis::{
    AnalysisRecord, AnalysisResult, CategoryMatch, MatchRecord, SectionScores, TechMatchResult,
};
pub use profile::{
    CertificationEntry, EducationEntry, ExperienceEntry, ExtractedProfile, PersonalInfo,
    ProjectEntry, Skills,
};
