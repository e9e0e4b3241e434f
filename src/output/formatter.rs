//! Output formatters: console, JSON and Markdown

use crate::catalog::Catalog;
use crate::config::OutputFormat;
use crate::error::{RecommenderError, Result};
use crate::output::report::RecommendationReport;
use crate::processing::scorer::ScoredEntry;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
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

    fn format_score(&self, score: f64) -> String {
        let color = match score {
            s if s >= 0.5 => Color::Green,
            s if s >= 0.25 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&format!("{:.1}%", score * 100.0), color)
    }

    fn format_entry(&self, rank: usize, scored: &ScoredEntry) -> String {
        let entry = &scored.entry;
        let mut output = String::new();

        let title = format!("⭐ {}. {}", rank, entry.label);
        if self.use_colors {
            output.push_str(&format!("\n{}  {}\n", title.bold(), self.format_score(scored.score)));
        } else {
            output.push_str(&format!("\n{}  {}\n", title, self.format_score(scored.score)));
        }

        if !entry.description.is_empty() {
            output.push_str(&format!("   {}\n", entry.description));
        }
        output.push_str(&format!(
            "   Required Skills: {}\n",
            self.colorize(&entry.skills, Color::Cyan)
        ));
        output.push_str(&format!("   Education: {}\n", entry.education.capitalized()));
        output.push_str(&format!("   Experience: {}\n", entry.experience.capitalized()));

        if self.detailed {
            output.push_str(&format!(
                "   Model probability: {:.3} | Skill similarity: {:.3}\n",
                scored.classifier_probability, scored.skill_similarity
            ));
        }

        output
    }

    /// Listing of every catalog entry, in catalog order
    pub fn format_catalog(&self, catalog: &Catalog) -> String {
        let title = format!("Career Catalog ({} entries)", catalog.len());
        let mut output = self.format_header(&title, 1);
        for (index, entry) in catalog.iter().enumerate() {
            output.push_str(&format!(
                "\n{}. {}\n",
                index + 1,
                self.colorize(&entry.label, Color::Cyan)
            ));
            if !entry.description.is_empty() {
                output.push_str(&format!("   {}\n", entry.description));
            }
            output.push_str(&format!("   Skills: {}\n", entry.skills));
            output.push_str(&format!("   Interests: {}\n", entry.interests));
            output.push_str(&format!(
                "   Education: {} | Experience: {}\n",
                entry.education.capitalized(),
                entry.experience.capitalized()
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = self.format_header("Top Career Recommendations", 1);

        if self.detailed {
            output.push_str(&format!(
                "Generated: {} | Seed: {} | Catalog: {} entries | {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.seed,
                report.metadata.catalog_size,
                report.metadata.processing_time_ms
            ));
        }

        if report.recommendations.is_empty() {
            output.push_str(&self.colorize("No recommendations available.\n", Color::Yellow));
            return Ok(output);
        }

        for (index, scored) in report.recommendations.iter().enumerate() {
            output.push_str(&self.format_entry(index + 1, scored));
        }

        output.push_str(&format!(
            "\nFinal ranking = {:.0}% ML model + {:.0}% skill similarity\n",
            report.weights.classifier * 100.0,
            report.weights.skills * 100.0
        ));

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
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
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
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::from("# Top 3 Career Recommendations\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Seed:** {} | **Catalog size:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.seed,
                report.metadata.catalog_size
            ));
        }

        output.push_str("| Field | Value |\n|-------|-------|\n");
        output.push_str(&format!("| Skills | {} |\n", report.profile.skills));
        output.push_str(&format!("| Education | {} |\n", report.profile.education.capitalized()));
        output.push_str(&format!("| Interests | {} |\n", report.profile.interests));
        output.push_str(&format!(
            "| Experience | {} |\n\n",
            report.profile.experience.capitalized()
        ));

        for scored in &report.recommendations {
            let entry = &scored.entry;
            output.push_str(&format!("## ⭐ {}\n\n", entry.label));
            if !entry.description.is_empty() {
                output.push_str(&format!("{}\n\n", entry.description));
            }
            output.push_str(&format!("**Required Skills:** {}\n\n", entry.skills));
            output.push_str(&format!("**Education:** {}\n\n", entry.education.capitalized()));
            output.push_str(&format!("**Experience:** {}\n\n", entry.experience.capitalized()));
            output.push_str(&format!(
                "**Score:** {:.3} (model {:.3}, skills {:.3})\n\n",
                scored.score, scored.classifier_probability, scored.skill_similarity
            ));
            output.push_str("---\n\n");
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(
        &self,
        report: &RecommendationReport,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(RecommenderError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        ))),
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        RecommenderError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Education, Experience, Profile};
    use crate::processing::scorer::shared;

    fn sample_report() -> RecommendationReport {
        let scorer = shared();
        let profile = Profile::new(
            "cad, thermodynamics",
            Education::Bachelor,
            "design",
            Experience::Mid,
        );
        let recommendations = scorer.recommend(&profile);
        RecommendationReport::new(profile, recommendations, scorer, 3)
    }

    #[test]
    fn test_console_output_without_colors() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("Top Career Recommendations"));
        assert!(output.contains("Required Skills:"));
        assert!(output.contains("Final ranking = 70% ML model + 30% skill similarity"));
        assert!(output.contains("Model probability:"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_output_parses() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(value["profile"]["education"], "bachelor");
        assert_eq!(value["metadata"]["seed"], 42);
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.starts_with("# Top 3 Career Recommendations"));
        assert_eq!(output.matches("## ⭐").count(), 3);
        assert!(output.contains("**Education:** Bachelor"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn test_catalog_listing() {
        let output = ConsoleFormatter::new(false, false).format_catalog(&Catalog::reference());
        assert!(output.contains("Career Catalog (10 entries)"));
        assert!(output.contains("10. UX Designer"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false, false, false);

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# Top 3"));
        let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
        assert!(console.contains("Top Career Recommendations"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }
}
