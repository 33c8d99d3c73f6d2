//! ATS-friendliness rubric scoring
//!
//! Every rule is evaluated independently and contributes either its full
//! weight or nothing. Feedback follows rubric order. The profile bonus never
//! produces feedback.

use crate::processing::document::ResumeDocument;
use crate::processing::text_processor::{
    complete_education_count, has_complete_contact, has_profile_link, resume_has_metrics,
    skill_count, valid_experience_count, valid_project_count, word_count,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SCORE: u32 = 100;

pub const SUMMARY_MIN_WORDS: usize = 40;
pub const SUMMARY_MAX_WORDS: usize = 120;
pub const MIN_PROJECTS: usize = 2;
pub const MIN_EXPERIENCE: usize = 1;
pub const MIN_SKILLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RubricRule {
    Summary,
    Projects,
    Experience,
    Skills,
    Links,
    QuantifiedImpact,
    Education,
    ProfileBonus,
}

impl RubricRule {
    pub const ALL: [RubricRule; 8] = [
        RubricRule::Summary,
        RubricRule::Projects,
        RubricRule::Experience,
        RubricRule::Skills,
        RubricRule::Links,
        RubricRule::QuantifiedImpact,
        RubricRule::Education,
        RubricRule::ProfileBonus,
    ];

    pub fn points(&self) -> u32 {
        match self {
            RubricRule::Summary | RubricRule::QuantifiedImpact => 15,
            RubricRule::Projects
            | RubricRule::Experience
            | RubricRule::Skills
            | RubricRule::Links
            | RubricRule::Education
            | RubricRule::ProfileBonus => 10,
        }
    }
}

impl fmt::Display for RubricRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RubricRule::Summary => write!(f, "Summary"),
            RubricRule::Projects => write!(f, "Projects"),
            RubricRule::Experience => write!(f, "Experience"),
            RubricRule::Skills => write!(f, "Skills"),
            RubricRule::Links => write!(f, "Profile Links"),
            RubricRule::QuantifiedImpact => write!(f, "Quantified Impact"),
            RubricRule::Education => write!(f, "Education"),
            RubricRule::ProfileBonus => write!(f, "Contact Details"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: RubricRule,
    pub earned: u32,
    pub max: u32,
}

impl RuleOutcome {
    pub fn passed(&self) -> bool {
        self.earned == self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Rubric total, 0 to 90
    pub score: u8,

    /// Gap descriptions for failed rules, in rubric order
    pub feedback: Vec<String>,

    /// Points per rule, in rubric order
    pub breakdown: Vec<RuleOutcome>,
}

/// Score a resume against the rubric.
pub fn calculate_score(resume: &ResumeDocument) -> ScoreResult {
    let mut feedback = Vec::new();
    let mut breakdown = Vec::with_capacity(RubricRule::ALL.len());

    for rule in RubricRule::ALL {
        let (passed, message) = evaluate_rule(rule, resume);
        if let Some(message) = message {
            feedback.push(message);
        }
        breakdown.push(RuleOutcome {
            rule,
            earned: if passed { rule.points() } else { 0 },
            max: rule.points(),
        });
    }

    let total: u32 = breakdown.iter().map(|o| o.earned).sum();
    let score = total.min(MAX_SCORE) as u8;

    debug!("ATS score {} with {} feedback item(s)", score, feedback.len());

    ScoreResult {
        score,
        feedback,
        breakdown,
    }
}

fn evaluate_rule(rule: RubricRule, resume: &ResumeDocument) -> (bool, Option<String>) {
    match rule {
        RubricRule::Summary => {
            let words = word_count(&resume.summary);
            if words == 0 {
                (false, Some("Write a stronger summary (40-120 words)".to_string()))
            } else if words < SUMMARY_MIN_WORDS {
                (
                    false,
                    Some(format!(
                        "Write a stronger summary (currently {} words, target {}-{} words)",
                        words, SUMMARY_MIN_WORDS, SUMMARY_MAX_WORDS
                    )),
                )
            } else if words > SUMMARY_MAX_WORDS {
                (
                    false,
                    Some(format!(
                        "Shorten your summary (currently {} words, target {}-{} words)",
                        words, SUMMARY_MIN_WORDS, SUMMARY_MAX_WORDS
                    )),
                )
            } else {
                (true, None)
            }
        }
        RubricRule::Projects => {
            let projects = valid_project_count(resume);
            if projects >= MIN_PROJECTS {
                (true, None)
            } else {
                (
                    false,
                    Some(format!(
                        "Add at least {} projects (currently have {})",
                        MIN_PROJECTS, projects
                    )),
                )
            }
        }
        RubricRule::Experience => {
            if valid_experience_count(resume) >= MIN_EXPERIENCE {
                (true, None)
            } else {
                (false, Some("Add at least 1 work experience entry".to_string()))
            }
        }
        RubricRule::Skills => {
            let skills = skill_count(resume);
            if skills >= MIN_SKILLS {
                (true, None)
            } else {
                (
                    false,
                    Some(format!(
                        "Add more skills (currently have {}, target {}+)",
                        skills, MIN_SKILLS
                    )),
                )
            }
        }
        RubricRule::Links => {
            if has_profile_link(resume) {
                (true, None)
            } else {
                (false, Some("Add LinkedIn or GitHub profile".to_string()))
            }
        }
        RubricRule::QuantifiedImpact => {
            if resume_has_metrics(resume) {
                (true, None)
            } else {
                (
                    false,
                    Some("Add measurable impact (numbers, %, metrics) in your bullet points".to_string()),
                )
            }
        }
        RubricRule::Education => {
            if complete_education_count(resume) > 0 {
                (true, None)
            } else if !resume.education.is_empty() {
                (
                    false,
                    Some("Complete all education fields (institution, degree, year)".to_string()),
                )
            } else {
                (false, None)
            }
        }
        RubricRule::ProfileBonus => (has_complete_contact(resume), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{Education, Experience, Links, PersonalInfo, Project, Skills};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scenario_resume() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "London".to_string(),
            },
            summary: words(50),
            education: Vec::new(),
            experience: vec![Experience {
                company: "Analytical Engines Ltd".to_string(),
                role: "Engineer".to_string(),
                duration: "1842".to_string(),
                description: "Cut computation time by 40%".to_string(),
            }],
            projects: vec![
                Project {
                    title: "Notes".to_string(),
                    description: "Annotated translation".to_string(),
                    ..Default::default()
                },
                Project {
                    title: "Bernoulli program".to_string(),
                    ..Default::default()
                },
            ],
            skills: Skills {
                technical: strings(&["Mathematics", "Algorithms", "Logic", "Notation"]),
                soft: strings(&["Writing", "Communication", "Curiosity"]),
                tools: strings(&["Difference Engine", "Punch cards"]),
            },
            links: Links {
                github: "https://github.com/ada".to_string(),
                linkedin: String::new(),
            },
        }
    }

    #[test]
    fn test_empty_resume() {
        let result = calculate_score(&ResumeDocument::default());

        assert_eq!(result.score, 0);
        assert_eq!(
            result.feedback,
            vec![
                "Write a stronger summary (40-120 words)",
                "Add at least 2 projects (currently have 0)",
                "Add at least 1 work experience entry",
                "Add more skills (currently have 0, target 8+)",
                "Add LinkedIn or GitHub profile",
                "Add measurable impact (numbers, %, metrics) in your bullet points",
            ]
        );
    }

    #[test]
    fn test_scenario_scores_eighty_without_education() {
        let result = calculate_score(&scenario_resume());

        assert_eq!(result.score, 80);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_full_resume_reaches_maximum() {
        let mut resume = scenario_resume();
        resume.education.push(Education {
            institution: "University of London".to_string(),
            degree: "Mathematics".to_string(),
            year: "1840".to_string(),
        });

        let result = calculate_score(&resume);
        assert_eq!(result.score, 90);
        assert!(result.breakdown.iter().all(|o| o.passed()));
    }

    #[test]
    fn test_rubric_weights_stay_under_maximum() {
        let total: u32 = RubricRule::ALL.iter().map(|r| r.points()).sum();
        assert_eq!(total, 90);
        assert!(total <= MAX_SCORE);
    }

    #[test]
    fn test_summary_boundaries() {
        let mut resume = ResumeDocument::default();

        resume.summary = words(39);
        let result = calculate_score(&resume);
        assert_eq!(result.breakdown[0].earned, 0);
        assert_eq!(
            result.feedback[0],
            "Write a stronger summary (currently 39 words, target 40-120 words)"
        );

        resume.summary = words(40);
        assert_eq!(calculate_score(&resume).breakdown[0].earned, 15);

        resume.summary = words(120);
        assert_eq!(calculate_score(&resume).breakdown[0].earned, 15);

        resume.summary = words(121);
        let result = calculate_score(&resume);
        assert_eq!(result.breakdown[0].earned, 0);
        assert_eq!(
            result.feedback[0],
            "Shorten your summary (currently 121 words, target 40-120 words)"
        );
    }

    #[test]
    fn test_whitespace_summary_counts_as_empty() {
        let resume = ResumeDocument {
            summary: "  \n  ".to_string(),
            ..Default::default()
        };
        let result = calculate_score(&resume);
        assert_eq!(result.feedback[0], "Write a stronger summary (40-120 words)");
    }

    #[test]
    fn test_second_project_adds_ten() {
        let mut resume = scenario_resume();
        resume.projects.truncate(1);
        let before = calculate_score(&resume);
        assert!(before
            .feedback
            .contains(&"Add at least 2 projects (currently have 1)".to_string()));

        resume.projects.push(Project {
            description: "Second project".to_string(),
            ..Default::default()
        });
        let after = calculate_score(&resume);

        assert_eq!(after.score, before.score + 10);
    }

    #[test]
    fn test_metrics_by_keyword_only() {
        let mut resume = ResumeDocument::default();
        resume.projects.push(Project {
            title: "Cache".to_string(),
            description: "Reduced costs".to_string(),
            ..Default::default()
        });

        let result = calculate_score(&resume);
        let impact = result
            .breakdown
            .iter()
            .find(|o| o.rule == RubricRule::QuantifiedImpact)
            .unwrap();
        assert_eq!(impact.earned, 15);
    }

    #[test]
    fn test_incomplete_education_feedback() {
        let resume = ResumeDocument {
            education: vec![Education {
                institution: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = calculate_score(&resume);
        assert_eq!(
            result.feedback.last().unwrap(),
            "Complete all education fields (institution, degree, year)"
        );
        assert_eq!(result.feedback.len(), 7);
    }

    #[test]
    fn test_profile_bonus_is_silent() {
        let mut resume = scenario_resume();
        resume.personal_info.location.clear();

        let result = calculate_score(&resume);
        assert_eq!(result.score, 70);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let resume = ResumeDocument::sample();
        assert_eq!(calculate_score(&resume), calculate_score(&resume));
    }

    #[test]
    fn test_sample_resume_misses_summary_band() {
        // 30-word summary
        let result = calculate_score(&ResumeDocument::sample());
        assert_eq!(result.score, 75);
        assert_eq!(
            result.feedback,
            vec!["Write a stronger summary (currently 30 words, target 40-120 words)"]
        );
    }
}
