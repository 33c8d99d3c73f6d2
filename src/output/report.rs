//! Coaching report: scoring results shaped for display

use crate::config::CoachingConfig;
use crate::processing::ats_scorer::{calculate_score, RuleOutcome, MAX_SCORE};
use crate::processing::bullet_guidance::{shared_guide, BulletGuide};
use crate::processing::document::ResumeDocument;
use crate::processing::export_check::validate_before_export;
use crate::processing::improvements::generate_top_improvements;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Circumference of the ring gauge (r = 50).
pub const METER_CIRCUMFERENCE: f32 = 314.0;

/// Everything a front end needs to draw the score and coaching panels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingReport {
    /// Rubric score (0-100)
    pub score: u8,

    pub meter: ScoreMeter,

    /// Rubric feedback shown to the user, already capped and hidden when the
    /// score is high enough
    pub suggestions: Vec<String>,

    /// Coaching improvements shown to the user, same policy as suggestions
    pub top_improvements: Vec<String>,

    pub show_improvement_panel: bool,

    /// Uncapped rubric feedback
    pub feedback: Vec<String>,

    /// Uncapped improvement list
    pub improvements: Vec<String>,

    pub breakdown: Vec<RuleOutcome>,

    pub bullet_hints: Vec<BulletHintEntry>,

    pub export_issues: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreMeter {
    /// score / 100
    pub fraction: f32,

    /// Stroke dash offset for a ring of `METER_CIRCUMFERENCE`
    pub stroke_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletSection {
    Experience,
    Project,
}

/// First hint for one bullet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletHintEntry {
    pub section: BulletSection,
    pub index: usize,
    /// Company or project title, for display
    pub label: String,
    pub hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub source_file: Option<String>,
    pub version: String,
}

impl ScoreMeter {
    pub fn from_score(score: u8) -> Self {
        let fraction = score as f32 / MAX_SCORE as f32;
        Self {
            fraction,
            stroke_offset: METER_CIRCUMFERENCE - fraction * METER_CIRCUMFERENCE,
        }
    }
}

impl CoachingReport {
    pub fn build(resume: &ResumeDocument, coaching: &CoachingConfig) -> Self {
        Self::build_with_guide(resume, coaching, shared_guide())
    }

    pub fn build_with_guide(resume: &ResumeDocument, coaching: &CoachingConfig, guide: &BulletGuide) -> Self {
        let result = calculate_score(resume);
        let improvements = generate_top_improvements(resume);

        let hidden = result.score >= coaching.hide_threshold;

        let suggestions = if hidden {
            Vec::new()
        } else {
            result.feedback.iter().take(coaching.max_items).cloned().collect()
        };

        let top_improvements: Vec<String> = if hidden {
            Vec::new()
        } else {
            improvements.iter().take(coaching.max_items).cloned().collect()
        };

        let bullet_hints = if coaching.show_bullet_hints {
            collect_bullet_hints(resume, guide)
        } else {
            Vec::new()
        };

        let export_issues = if coaching.show_export_issues {
            validate_before_export(resume)
                .iter()
                .map(|issue| issue.message().to_string())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            score: result.score,
            meter: ScoreMeter::from_score(result.score),
            suggestions,
            show_improvement_panel: !top_improvements.is_empty(),
            top_improvements,
            feedback: result.feedback,
            improvements,
            breakdown: result.breakdown,
            bullet_hints,
            export_issues,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                source_file: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn with_source_file(mut self, source: impl Into<String>) -> Self {
        self.metadata.source_file = Some(source.into());
        self
    }

    /// Short verdict for headers
    pub fn verdict(&self) -> &'static str {
        match self.score {
            90..=100 => "ATS-ready",
            70..=89 => "Strong, a few gaps left",
            40..=69 => "Needs work",
            _ => "Just getting started",
        }
    }
}

fn collect_bullet_hints(resume: &ResumeDocument, guide: &BulletGuide) -> Vec<BulletHintEntry> {
    let experience = resume.experience.iter().enumerate().map(|(index, e)| {
        (BulletSection::Experience, index, e.company.as_str(), e.description.as_str())
    });
    let projects = resume.projects.iter().enumerate().map(|(index, p)| {
        (BulletSection::Project, index, p.title.as_str(), p.description.as_str())
    });

    experience
        .chain(projects)
        .filter_map(|(section, index, label, description)| {
            guide.check(description).first().map(|hint| BulletHintEntry {
                section,
                index,
                label: label.to_string(),
                hint: hint.message().to_string(),
            })
        })
        .collect()
}
