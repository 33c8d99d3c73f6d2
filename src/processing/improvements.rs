//! Ranked coaching improvements
//!
//! Runs its own pass over the document with a fixed priority order and
//! coaching wording. It deliberately differs from the rubric feedback: an
//! over-length summary is never flagged here.

use crate::processing::ats_scorer::{MIN_PROJECTS, MIN_SKILLS, SUMMARY_MIN_WORDS};
use crate::processing::document::ResumeDocument;
use crate::processing::text_processor::{
    complete_education_count, has_profile_link, resume_has_metrics, skill_count,
    valid_experience_count, valid_project_count, word_count,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Improvements in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Improvement {
    MoreProjects,
    MeasurableImpact,
    ExpandSummary,
    MoreSkills,
    AddExperience,
    ProfileLink,
    CompleteEducation,
}

impl Improvement {
    pub fn message(&self) -> &'static str {
        match self {
            Improvement::MoreProjects => "Add at least one more project.",
            Improvement::MeasurableImpact => "Include measurable impact in experience.",
            Improvement::ExpandSummary => "Expand your summary to strengthen positioning.",
            Improvement::MoreSkills => "Add more role-relevant skills.",
            Improvement::AddExperience => "Include internship or project-based experience.",
            Improvement::ProfileLink => "Add LinkedIn or GitHub profile link.",
            Improvement::CompleteEducation => "Complete all education fields.",
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Every applicable improvement, highest priority first.
pub fn rank_improvements(resume: &ResumeDocument) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if valid_project_count(resume) < MIN_PROJECTS {
        improvements.push(Improvement::MoreProjects);
    }

    if !resume_has_metrics(resume) {
        improvements.push(Improvement::MeasurableImpact);
    }

    // Empty and short summaries only
    if word_count(&resume.summary) < SUMMARY_MIN_WORDS {
        improvements.push(Improvement::ExpandSummary);
    }

    if skill_count(resume) < MIN_SKILLS {
        improvements.push(Improvement::MoreSkills);
    }

    if valid_experience_count(resume) == 0 {
        improvements.push(Improvement::AddExperience);
    }

    if !has_profile_link(resume) {
        improvements.push(Improvement::ProfileLink);
    }

    if !resume.education.is_empty() && complete_education_count(resume) == 0 {
        improvements.push(Improvement::CompleteEducation);
    }

    improvements
}

/// Improvement messages, highest priority first. Callers show the first three.
pub fn generate_top_improvements(resume: &ResumeDocument) -> Vec<String> {
    rank_improvements(resume)
        .into_iter()
        .map(|i| i.message().to_string())
        .collect()
}
