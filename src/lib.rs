//! Resume scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeScorerError};
pub use output::report::CoachingReport;
pub use processing::ats_scorer::{calculate_score, ScoreResult};
pub use processing::bullet_guidance::check_bullet_guidance;
pub use processing::document::ResumeDocument;
pub use processing::export_check::validate_before_export;
pub use processing::improvements::generate_top_improvements;
