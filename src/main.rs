//! Resume scorer: ATS-friendliness scoring and coaching for structured resumes

use clap::Parser;
use log::{debug, error, info, warn};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::Config;
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::input::manager::InputManager;
use resume_scorer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_scorer::output::report::CoachingReport;
use resume_scorer::processing::bullet_guidance::check_bullet_guidance;
use resume_scorer::processing::document::ResumeDocument;
use resume_scorer::processing::export_check::{describe_issues, validate_before_export};
use resume_scorer::processing::improvements::generate_top_improvements;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config, cli.no_color).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(Config::default())
        }
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>, no_color: bool) -> Result<()> {
    match command {
        Commands::Score { resume, output, detailed, save } => {
            cli::validate_file_extension(&resume, &["json", "toml"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeScorerError::InvalidInput)?,
                None => config.output.format,
            };

            if detailed {
                config.output.detailed = true;
            }
            if no_color {
                config.output.color_output = false;
            }

            let mut input_manager = InputManager::new();
            let document = input_manager.load_resume(&resume).await?;

            let report = CoachingReport::build(&document, &config.coaching)
                .with_source_file(resume.to_string_lossy());
            info!("Scored {}: {}/100", resume.display(), report.score);
            debug!("Feedback: {:?}", report.feedback);

            let generator = ReportGenerator::from_config(&config);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume.to_string_lossy()))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());

                    if let Some(issues) = describe_issues(&validate_before_export(&document)) {
                        warn!("Resume is not ready to export: {}", issues);
                    }
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Improve { resume, all } => {
            cli::validate_file_extension(&resume, &["json", "toml"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let document = input_manager.load_resume(&resume).await?;

            let improvements = generate_top_improvements(&document);
            if improvements.is_empty() {
                println!("✅ Nothing to improve. Nice work!");
                return Ok(());
            }

            let limit = if all { improvements.len() } else { config.coaching.max_items };
            println!("🎯 Top improvements:");
            for (i, improvement) in improvements.iter().take(limit).enumerate() {
                println!("  {}. {}", i + 1, improvement);
            }
            if improvements.len() > limit {
                println!("  ... and {} more (use --all)", improvements.len() - limit);
            }
        }

        Commands::Bullet { text } => {
            let hints = check_bullet_guidance(&text);
            if hints.is_empty() {
                println!("✅ Strong bullet");
            } else {
                for hint in hints {
                    println!("💡 {}", hint);
                }
            }
        }

        Commands::Sample { format } => {
            let sample = ResumeDocument::sample();
            let rendered = match format.to_lowercase().as_str() {
                "json" => serde_json::to_string_pretty(&sample)?,
                "toml" => toml::to_string_pretty(&sample)
                    .map_err(|e| ResumeScorerError::OutputFormatting(e.to_string()))?,
                other => {
                    return Err(ResumeScorerError::InvalidInput(format!(
                        "Invalid sample format: {}. Supported: json, toml",
                        other
                    )));
                }
            };
            println!("{}", rendered);
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Coaching:");
                    println!("  Max items shown: {}", config.coaching.max_items);
                    println!("  Hide coaching at score: {}", config.coaching.hide_threshold);
                    println!("  Bullet hints: {}", config.coaching.show_bullet_hints);
                    println!("  Export issues: {}", config.coaching.show_export_issues);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    match &config_path {
                        Some(path) => default_config.save_to(path)?,
                        None => default_config.save()?,
                    }
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    let path = config_path.unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
