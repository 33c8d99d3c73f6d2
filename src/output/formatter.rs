//! Output formatters for coaching reports

use crate::config::{Config, OutputFormat};
use crate::error::{Result, ResumeScorerError};
use crate::output::report::{BulletSection, CoachingReport};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting coaching reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CoachingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for editor integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ATS Score Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 0 auto; padding: 20px; color: #333; }
        .meter { transform: rotate(-90deg); }
        .meter-track { stroke: #e9ecef; }
        .meter-value { stroke: #007acc; stroke-dasharray: {{ circumference }}; }
        .score-number { font-size: 2.5em; font-weight: bold; }
        .suggestion-item, .improvement-item { padding: 8px 12px; margin: 6px 0; border-left: 4px solid #ffc107; background: #f8f9fa; }
        .bullet-hint { color: #6c757d; font-size: 0.9em; }
        table { border-collapse: collapse; width: 100%; }
        td, th { padding: 6px; border-bottom: 1px solid #e9ecef; text-align: left; }
        .metadata { color: #6c757d; font-size: 0.85em; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <h1>ATS Score Report</h1>
    <svg width="120" height="120" viewBox="0 0 120 120">
        <circle class="meter-track" cx="60" cy="60" r="50" fill="none" stroke-width="10" />
        <circle class="meter meter-value" cx="60" cy="60" r="50" fill="none" stroke-width="10"
            style="transform-origin: 60px 60px; stroke-dashoffset: {{ stroke_offset }};" />
    </svg>
    <p><span class="score-number">{{ score }}</span> / 100 &middot; {{ verdict }}</p>

    {% if !suggestions.is_empty() %}
    <h2>Suggestions to improve score:</h2>
    {% for suggestion in suggestions %}
    <div class="suggestion-item">{{ suggestion }}</div>
    {% endfor %}
    {% endif %}

    {% if show_improvement_panel %}
    <h2>Top Improvements</h2>
    {% for improvement in improvements %}
    <div class="improvement-item">{{ improvement }}</div>
    {% endfor %}
    {% endif %}

    {% if !export_issues.is_empty() %}
    <h2>Before You Export</h2>
    <ul>
    {% for issue in export_issues %}
        <li>{{ issue }}</li>
    {% endfor %}
    </ul>
    {% endif %}

    {% if detailed %}
    <h2>Rubric</h2>
    <table>
        <tr><th>Rule</th><th>Points</th></tr>
        {% for row in rows %}
        <tr><td>{{ row.name }}</td><td>{{ row.earned }} / {{ row.max }}</td></tr>
        {% endfor %}
    </table>
    {% for hint in hints %}
    <p class="bullet-hint">{{ hint }}</p>
    {% endfor %}
    {% endif %}

    <div class="metadata">Generated {{ generated_at }} by resume-scorer v{{ version }}</div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    detailed: bool,
    circumference: f32,
    stroke_offset: String,
    score: u8,
    verdict: String,
    suggestions: Vec<String>,
    show_improvement_panel: bool,
    improvements: Vec<String>,
    export_issues: Vec<String>,
    rows: Vec<HtmlRuleRow>,
    hints: Vec<String>,
    generated_at: String,
    version: String,
}

struct HtmlRuleRow {
    name: String,
    earned: u32,
    max: u32,
}

fn format_timestamp(report: &CoachingReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn format_hint_location(section: &BulletSection, index: usize, label: &str) -> String {
    let section = match section {
        BulletSection::Experience => "Experience",
        BulletSection::Project => "Project",
    };
    if label.trim().is_empty() {
        format!("{} #{}", section, index + 1)
    } else {
        format!("{} #{} ({})", section, index + 1, label)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            70..=89 => ("GOOD", Color::Yellow),
            40..=69 => ("FAIR", Color::BrightYellow),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    /// Text gauge, 20 cells wide
    fn format_meter(&self, fraction: f32) -> String {
        let filled = (fraction * 20.0).round() as usize;
        let bar = format!("{}{}", "■".repeat(filled), "□".repeat(20 - filled.min(20)));
        self.colorize(&bar, Color::Cyan)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CoachingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS SCORE", 1));
        if let Some(source) = &report.metadata.source_file {
            output.push_str(&format!("Resume: {}\n", source));
        }
        output.push_str(&format!("Generated: {}\n\n", format_timestamp(report)));

        output.push_str(&format!(
            "Score: {}/100 {}\n",
            report.score,
            self.format_score_badge(report.score)
        ));
        output.push_str(&format!("{}\n", self.format_meter(report.meter.fraction)));
        output.push_str(&format!("Verdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions to improve score", 2));
            for suggestion in &report.suggestions {
                output.push_str(&format!("  • {}\n", self.colorize(suggestion, Color::Yellow)));
            }
        }

        if report.show_improvement_panel {
            output.push_str(&self.format_header("🎯 Top Improvements", 2));
            for (i, improvement) in report.top_improvements.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, improvement));
            }
        }

        if !report.export_issues.is_empty() {
            output.push_str(&self.format_header("⚠️  Before You Export", 3));
            for issue in &report.export_issues {
                output.push_str(&format!("  • {}\n", self.colorize(issue, Color::Red)));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Rubric Breakdown", 2));
            for outcome in &report.breakdown {
                let mark = if outcome.passed() {
                    self.colorize("✓", Color::Green)
                } else {
                    self.colorize("✗", Color::Red)
                };
                output.push_str(&format!(
                    "  {} {:<18} {:>2}/{}\n",
                    mark,
                    outcome.rule.to_string(),
                    outcome.earned,
                    outcome.max
                ));
            }

            if report.feedback.len() > report.suggestions.len() {
                output.push_str(&self.format_header("All Feedback", 3));
                for (i, item) in report.feedback.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, item));
                }
            }

            if !report.bullet_hints.is_empty() {
                output.push_str(&self.format_header("💡 Bullet Hints", 3));
                for entry in &report.bullet_hints {
                    output.push_str(&format!(
                        "  • {}: {}\n",
                        format_hint_location(&entry.section, entry.index, &entry.label),
                        self.colorize(&entry.hint, Color::BrightBlack)
                    ));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CoachingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CoachingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Score Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}", format_timestamp(report)));
            if let Some(source) = &report.metadata.source_file {
                output.push_str(&format!(" | **Resume:** `{}`", source));
            }
            output.push_str("\n\n");
        }

        output.push_str(&format!("**Score:** {}/100 ({})\n\n", report.score, report.verdict()));

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in &report.suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
            output.push('\n');
        }

        if report.show_improvement_panel {
            output.push_str("## Top Improvements\n\n");
            for (i, improvement) in report.top_improvements.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, improvement));
            }
            output.push('\n');
        }

        output.push_str("## Rubric\n\n");
        output.push_str("| Rule | Points |\n|---|---|\n");
        for outcome in &report.breakdown {
            output.push_str(&format!("| {} | {}/{} |\n", outcome.rule, outcome.earned, outcome.max));
        }
        output.push('\n');

        if !report.bullet_hints.is_empty() {
            output.push_str("## Bullet Hints\n\n");
            for entry in &report.bullet_hints {
                output.push_str(&format!(
                    "- **{}**: {}\n",
                    format_hint_location(&entry.section, entry.index, &entry.label),
                    entry.hint
                ));
            }
            output.push('\n');
        }

        if !report.export_issues.is_empty() {
            output.push_str("## Before You Export\n\n");
            for issue in &report.export_issues {
                output.push_str(&format!("- ⚠️ {}\n", issue));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &CoachingReport, detailed: bool) -> HtmlTemplate {
        HtmlTemplate {
            include_styles: self.include_styles,
            detailed,
            circumference: crate::output::report::METER_CIRCUMFERENCE,
            stroke_offset: format!("{:.1}", report.meter.stroke_offset),
            score: report.score,
            verdict: report.verdict().to_string(),
            suggestions: report.suggestions.clone(),
            show_improvement_panel: report.show_improvement_panel,
            improvements: report.top_improvements.clone(),
            export_issues: report.export_issues.clone(),
            rows: report
                .breakdown
                .iter()
                .map(|o| HtmlRuleRow {
                    name: o.rule.to_string(),
                    earned: o.earned,
                    max: o.max,
                })
                .collect(),
            hints: report
                .bullet_hints
                .iter()
                .map(|e| format!("{}: {}", format_hint_location(&e.section, e.index, &e.label), e.hint))
                .collect(),
            generated_at: format_timestamp(report),
            version: report.metadata.version.clone(),
        }
    }

    pub fn format_detailed(&self, report: &CoachingReport) -> Result<String> {
        self.create_template_data(report, true)
            .render()
            .map_err(|e| ResumeScorerError::OutputFormatting(e.to_string()))
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &CoachingReport) -> Result<String> {
        self.create_template_data(report, false)
            .render()
            .map_err(|e| ResumeScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(
            config.output.color_output,
            config.output.detailed,
            config.output.pretty_json,
            true,
        )
    }

    pub fn generate_report(&self, report: &CoachingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => {
                if self.console_formatter.detailed {
                    self.html_formatter.format_detailed(report)
                } else {
                    self.html_formatter.format_report(report)
                }
            }
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_ats.txt", base_name),
        OutputFormat::Json => format!("{}_ats.json", base_name),
        OutputFormat::Markdown => format!("{}_ats.md", base_name),
        OutputFormat::Html => format!("{}_ats.html", base_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoachingConfig;
    use crate::processing::document::{Project, ResumeDocument};

    fn empty_report() -> CoachingReport {
        CoachingReport::build(&ResumeDocument::default(), &CoachingConfig::default())
            .with_source_file("resume.json")
    }

    #[test]
    fn test_console_plain_output() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&empty_report()).unwrap();

        assert!(output.contains("Score: 0/100 [POOR]"));
        assert!(output.contains("Write a stronger summary (40-120 words)"));
        assert!(output.contains("1. Add at least one more project."));
        assert!(output.contains("Rubric Breakdown"));
        assert!(output.contains("Your resume is missing a name"));
    }

    #[test]
    fn test_console_hides_coaching_for_high_scores() {
        let mut resume = ResumeDocument::sample();
        resume.summary = vec!["word"; 45].join(" ");
        let report = CoachingReport::build(&resume, &CoachingConfig::default());

        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("[EXCELLENT]"));
        assert!(!output.contains("Suggestions to improve score"));
        assert!(!output.contains("Top Improvements"));
    }

    #[test]
    fn test_json_output() {
        let output = JsonFormatter::new(false).format_report(&empty_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["score"], 0);
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(value["improvements"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(true).format_report(&empty_report()).unwrap();

        assert!(output.starts_with("# ATS Score Report"));
        assert!(output.contains("**Resume:** `resume.json`"));
        assert!(output.contains("| Quantified Impact | 0/15 |"));
    }

    #[test]
    fn test_html_output() {
        let resume = ResumeDocument {
            summary: "Engineer".to_string(),
            ..Default::default()
        };
        let report = CoachingReport::build(&resume, &CoachingConfig::default());

        let output = HtmlFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("stroke-dashoffset: 314.0"));
        assert!(output.contains("Write a stronger summary (currently 1 words"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let resume = ResumeDocument {
            projects: vec![Project {
                title: "<script>alert(1)</script>".to_string(),
                description: "Responsible for the landing page".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = CoachingReport::build(&resume, &CoachingConfig::default());

        let output = HtmlFormatter::new(false).format_detailed(&report).unwrap();
        assert!(output.contains("Project #1 (&#60;script&#62;alert(1)&#60;/script&#62;)"));
        assert!(!output.contains("<script>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = empty_report();

        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
            assert!(!generator.generate_report(&report, &format).unwrap().is_empty());
        }
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "cv/ada.json"), "ada_ats.md");
        assert_eq!(suggest_filename(&OutputFormat::Json, "ada.toml"), "ada_ats.json");
    }

    #[test]
    fn test_hint_location() {
        assert_eq!(format_hint_location(&BulletSection::Project, 0, ""), "Project #1");
        assert_eq!(format_hint_location(&BulletSection::Experience, 1, "Acme"), "Experience #2 (Acme)");
    }
}
