//! Shared text predicates used by every scoring pass
//!
//! The scorer and the improvement ranker must agree on what counts as a
//! word, a provided field, a valid entry and quantified impact, so those
//! checks live here and nowhere else.

use crate::processing::document::ResumeDocument;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref METRICS_REGEX: Regex = Regex::new(
        r"(?i)[0-9]+[%kmb+]?|[0-9]+,[0-9]+|[0-9]+x|increased|decreased|reduced|improved"
    )
    .expect("Invalid metrics regex");

    // Digits only. Bullet hints ask for numbers even when an impact verb is present.
    static ref NUMERIC_IMPACT_REGEX: Regex = Regex::new(
        r"(?i)[0-9]+[%kmb+]?|[0-9]+,[0-9]+|[0-9]+x"
    )
    .expect("Invalid numeric impact regex");
}

/// A field counts as provided when something other than whitespace is in it.
pub fn is_provided(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether a piece of text carries quantified impact: a number (optionally
/// followed by `%`, `k`, `m`, `b` or `+`), a comma-grouped number, a
/// multiplier such as `3x`, or one of the verbs increased/decreased/
/// reduced/improved.
pub fn has_metrics(text: &str) -> bool {
    METRICS_REGEX.is_match(text)
}

/// Numbers only, without the impact-verb alternatives of [`has_metrics`].
pub fn has_numeric_impact(text: &str) -> bool {
    NUMERIC_IMPACT_REGEX.is_match(text)
}

/// Whether any experience or project description carries quantified impact.
pub fn resume_has_metrics(resume: &ResumeDocument) -> bool {
    resume.descriptions().any(has_metrics)
}

pub fn skill_count(resume: &ResumeDocument) -> usize {
    resume.skills.flatten().count()
}

/// Projects with a title or a description.
pub fn valid_project_count(resume: &ResumeDocument) -> usize {
    resume
        .projects
        .iter()
        .filter(|p| is_provided(&p.title) || is_provided(&p.description))
        .count()
}

/// Experience entries with a company or a role.
pub fn valid_experience_count(resume: &ResumeDocument) -> usize {
    resume
        .experience
        .iter()
        .filter(|e| is_provided(&e.company) || is_provided(&e.role))
        .count()
}

/// Education entries with institution, degree and year all filled in.
pub fn complete_education_count(resume: &ResumeDocument) -> usize {
    resume
        .education
        .iter()
        .filter(|e| is_provided(&e.institution) && is_provided(&e.degree) && is_provided(&e.year))
        .count()
}

pub fn has_profile_link(resume: &ResumeDocument) -> bool {
    is_provided(&resume.links.github) || is_provided(&resume.links.linkedin)
}

pub fn has_complete_contact(resume: &ResumeDocument) -> bool {
    let info = &resume.personal_info;
    is_provided(&info.name)
        && is_provided(&info.email)
        && is_provided(&info.phone)
        && is_provided(&info.location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{Education, Experience, Project, Skills};

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  Rust   systems\nengineer "), 3);
    }

    #[test]
    fn test_is_provided() {
        assert!(is_provided("x"));
        assert!(!is_provided(""));
        assert!(!is_provided("   "));
    }

    #[test]
    fn test_metrics_detection() {
        assert!(has_metrics("Increased throughput by 25%"));
        assert!(has_metrics("Reduced costs"));
        assert!(has_metrics("served 10,000 users"));
        assert!(has_metrics("3x faster builds"));
        assert!(has_metrics("IMPROVED onboarding"));
        assert!(!has_metrics("Built a thing"));
        assert!(!has_metrics(""));
    }

    #[test]
    fn test_numeric_impact_ignores_verbs() {
        assert!(has_numeric_impact("cut latency by 40%"));
        assert!(!has_numeric_impact("Reduced costs significantly"));
    }

    #[test]
    fn test_valid_counts() {
        let resume = ResumeDocument {
            projects: vec![
                Project { title: "Engine".to_string(), ..Default::default() },
                Project { description: "   ".to_string(), ..Default::default() },
                Project { description: "A crawler".to_string(), ..Default::default() },
            ],
            experience: vec![
                Experience { duration: "2020".to_string(), ..Default::default() },
                Experience { role: "Intern".to_string(), ..Default::default() },
            ],
            education: vec![
                Education {
                    institution: "MIT".to_string(),
                    degree: "BSc".to_string(),
                    year: String::new(),
                },
                Education {
                    institution: "MIT".to_string(),
                    degree: "MSc".to_string(),
                    year: "2020".to_string(),
                },
            ],
            ..Default::default()
        };

        assert_eq!(valid_project_count(&resume), 2);
        assert_eq!(valid_experience_count(&resume), 1);
        assert_eq!(complete_education_count(&resume), 1);
    }

    #[test]
    fn test_skill_count_keeps_duplicates_across_categories() {
        let resume = ResumeDocument {
            skills: Skills {
                technical: vec!["Git".to_string()],
                soft: vec!["Communication".to_string()],
                tools: vec!["Git".to_string()],
            },
            ..Default::default()
        };
        assert_eq!(skill_count(&resume), 3);
    }

    #[test]
    fn test_contact_and_links() {
        let mut resume = ResumeDocument::sample();
        assert!(has_complete_contact(&resume));
        assert!(has_profile_link(&resume));

        resume.personal_info.phone = " ".to_string();
        resume.links.github.clear();
        assert!(!has_complete_contact(&resume));
        assert!(has_profile_link(&resume));
    }
}
