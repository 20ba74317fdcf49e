// src/extractor/mod.rs
//! Converts raw résumé text into an [`ExtractedProfile`]. Extraction never
//! fails; anything the rules cannot find is left empty.

pub mod fields;
pub mod sections;

pub use fields::{extract_personal_info, FieldRule};

use crate::types::{ExtractedProfile, Skills};

pub fn extract(text: &str) -> ExtractedProfile {
    ExtractedProfile {
        personal_info: fields::extract_personal_info(text),
        summary: sections::extract_summary(text),
        skills: Skills {
            technical: sections::extract_technical_skills(text),
            soft: sections::extract_soft_skills(text),
        },
        experience: sections::extract_experience(text),
        education: sections::extract_education(text),
        projects: sections::extract_projects(text),
        certifications: sections::extract_certifications(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
Email: jane.doe@example.com
Phone: 555-123-4567
Location: Austin, TX
LinkedIn: linkedin.com/in/jane-doe

Summary: Backend engineer with a focus on data-heavy services and boring, reliable infrastructure.

Technical Skills: Python, Django, PostgreSQL, Docker

Soft Skills: communication, mentoring

Experience:
Senior Engineer at Initech
2019 - 2023
• Built the billing pipeline
• Cut infra spend by a third

Education:
Bachelor of Science at State University
class of 2015

Certifications:
Solutions Architect from Amazon
issued 2022
";

    #[test]
    fn test_extract_full_sample() {
        let profile = extract(SAMPLE);
        assert_eq!(profile.personal_info.name, "Jane Doe");
        assert_eq!(profile.personal_info.email, "jane.doe@example.com");
        assert_eq!(profile.personal_info.phone, "555-123-4567");
        assert_eq!(profile.personal_info.location, "Austin, TX");
        assert_eq!(profile.personal_info.linkedin, "linkedin.com/in/jane-doe");
        assert!(profile.summary.starts_with("Backend engineer"));
        assert_eq!(
            profile.skills.technical,
            vec!["Python", "Django", "PostgreSQL", "Docker"]
        );
        assert_eq!(profile.skills.soft, vec!["communication", "mentoring"]);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Initech");
        assert_eq!(profile.experience[0].duration, "2019 - 2023");
        assert_eq!(profile.experience[0].responsibilities.len(), 2);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].university, "State University");
        assert_eq!(profile.education[0].year, "2015");
        assert_eq!(profile.certifications.len(), 1);
        assert_eq!(profile.certifications[0].issuer, "Amazon");
    }

    #[test]
    fn test_extract_empty_text_returns_defaults() {
        assert_eq!(extract(""), ExtractedProfile::default());
    }

    #[test]
    fn test_extract_never_fails_on_arbitrary_text() {
        let profile = extract("%%% 12345 \n\n\n ,,,, résumé ***");
        assert_eq!(profile, ExtractedProfile::default());
    }
}
