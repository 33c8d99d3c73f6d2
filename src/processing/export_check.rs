//! Sanity checks run before a resume is handed to an exporter

use crate::processing::document::ResumeDocument;
use crate::processing::text_processor::{is_provided, valid_experience_count, valid_project_count};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportIssue {
    MissingName,
    NoExperienceOrProjects,
}

impl ExportIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ExportIssue::MissingName => "Your resume is missing a name",
            ExportIssue::NoExperienceOrProjects => "Your resume has no experience or projects listed",
        }
    }
}

impl fmt::Display for ExportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Issues worth confirming with the user before export. Never blocking.
pub fn validate_before_export(resume: &ResumeDocument) -> Vec<ExportIssue> {
    let mut issues = Vec::new();

    if !is_provided(&resume.personal_info.name) {
        issues.push(ExportIssue::MissingName);
    }

    if valid_experience_count(resume) == 0 && valid_project_count(resume) == 0 {
        issues.push(ExportIssue::NoExperienceOrProjects);
    }

    issues
}

/// Issues joined into a single confirmation sentence.
pub fn describe_issues(issues: &[ExportIssue]) -> Option<String> {
    if issues.is_empty() {
        return None;
    }
    let joined = issues.iter().map(|i| i.message()).collect::<Vec<_>>().join(". ");
    Some(format!("{}.", joined))
}
