//! CLI interface for the resume scorer

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Rule-based ATS-friendliness scoring for structured resumes")]
#[command(long_about = "Score a structured resume (JSON or TOML) against a fixed ATS-friendliness rubric and get prioritized coaching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume and print the coaching report
    Score {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Include rubric breakdown, full feedback and bullet hints
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print ranked improvements for a resume
    Improve {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Print every improvement instead of the top few
        #[arg(short, long)]
        all: bool,
    },

    /// Check a single bullet point for an action verb and numbers
    Bullet {
        /// Bullet text
        text: String,
    },

    /// Print the bundled sample resume
    Sample {
        /// Document format: json, toml
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from(["resume-scorer", "score", "-r", "cv.json", "-o", "md", "--detailed"]).unwrap();
        match cli.command {
            Commands::Score { resume, output, detailed, save } => {
                assert_eq!(resume, PathBuf::from("cv.json"));
                assert_eq!(output.as_deref(), Some("md"));
                assert!(detailed);
                assert!(save.is_none());
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.json"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.TOML"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), &["json", "toml"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["json", "toml"]).is_err());
    }
}
