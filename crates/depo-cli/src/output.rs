//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use depo_domain::{AnalysisResult, Ruling};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Cell width text is wrapped at.
const WRAP_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(depo_export::to_json(result)?),
            OutputFormat::Csv => Ok(depo_export::to_csv(result)),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(self.format_result_quiet(result)),
        }
    }

    /// Format all three sections as tables.
    fn format_result_table(&self, result: &AnalysisResult) -> String {
        let mut sections = Vec::with_capacity(3);

        sections.push(self.section(
            "Key Facts & Admissions",
            &["#", "Fact", "Witness", "Page/Line", "Summary"],
            result
                .key_facts_and_admissions()
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    vec![
                        (i + 1).to_string(),
                        f.fact.clone(),
                        f.witness.clone(),
                        f.page_line.clone(),
                        f.summary.clone(),
                    ]
                })
                .collect(),
            "No key facts found.",
        ));

        sections.push(self.section(
            "Exhibits Referenced",
            &["ID", "Description", "Page/Line"],
            result
                .exhibits_referenced()
                .iter()
                .map(|e| vec![e.id.clone(), e.description.clone(), e.page_line.clone()])
                .collect(),
            "No exhibits referenced.",
        ));

        sections.push(self.section(
            "Objections Log",
            &["Type", "By", "Ruling", "Page/Line"],
            result
                .objections_log()
                .iter()
                .map(|o| {
                    vec![
                        o.objection_type.clone(),
                        o.by.clone(),
                        self.ruling(o.ruling),
                        o.page_line.clone(),
                    ]
                })
                .collect(),
            "No objections logged.",
        ));

        sections.join("\n\n")
    }

    fn section(&self, title: &str, header: &[&str], rows: Vec<Vec<String>>, empty: &str) -> String {
        let title = self.colorize(title, "bold");
        if rows.is_empty() {
            return format!("{}\n{}", title, self.colorize(empty, "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(header.iter().copied());
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(..)).with(Width::wrap(WRAP_WIDTH)))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", title, table)
    }

    /// Format section counts only.
    fn format_result_quiet(&self, result: &AnalysisResult) -> String {
        format!(
            "{}\t{}\t{}",
            result.key_facts_and_admissions().len(),
            result.exhibits_referenced().len(),
            result.objections_log().len()
        )
    }

    /// Ruling label, colored by outcome.
    pub fn ruling(&self, ruling: Ruling) -> String {
        let color = match ruling {
            Ruling::Sustained => "red",
            Ruling::Overruled => "green",
            Ruling::NotStated => "dimmed",
        };
        self.colorize(ruling.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Summary line after an analysis.
    pub fn analysis_summary(&self, result: &AnalysisResult) -> String {
        self.success(&format!(
            "Found {} key fact(s), {} exhibit(s), {} objection(s)",
            result.key_facts_and_admissions().len(),
            result.exhibits_referenced().len(),
            result.objections_log().len()
        ))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "dimmed" => text.dimmed().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depo_domain::{Exhibit, KeyFact, Objection};

    fn create_test_result() -> AnalysisResult {
        AnalysisResult::new(
            vec![KeyFact {
                fact: "Left the office at 6 pm".to_string(),
                witness: "D. Patel".to_string(),
                page_line: "Page 17, Line 4".to_string(),
                summary: "Contradicts badge records".to_string(),
            }],
            vec![Exhibit {
                id: "Exhibit 9".to_string(),
                description: "Badge access log".to_string(),
                page_line: "Page 16, Line 20".to_string(),
            }],
            vec![Objection {
                objection_type: "Speculation".to_string(),
                by: "Ms. Grant".to_string(),
                ruling: Ruling::Sustained,
                page_line: "Page 17, Line 9".to_string(),
            }],
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&create_test_result()).unwrap();
        assert!(output.contains("\"keyFactsAndAdmissions\""));
        assert!(output.contains("\"ruling\": \"Sustained\""));
    }

    #[test]
    fn test_csv_format() {
        let formatter = Formatter::new(OutputFormat::Csv, false);
        let output = formatter.format_result(&create_test_result()).unwrap();
        assert!(output.starts_with("SECTION: KEY FACTS AND ADMISSIONS\n"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_result(&create_test_result()).unwrap();
        assert_eq!(output, "1\t1\t1");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&create_test_result()).unwrap();
        assert!(output.contains("Key Facts & Admissions"));
        assert!(output.contains("Exhibits Referenced"));
        assert!(output.contains("Objections Log"));
        assert!(output.contains("Witness"));
        assert!(output.contains("Badge access log"));
        assert!(output.contains("Sustained"));
    }

    #[test]
    fn test_empty_sections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&AnalysisResult::default()).unwrap();
        assert!(output.contains("No key facts found."));
        assert!(output.contains("No exhibits referenced."));
        assert!(output.contains("No objections logged."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("Error: boom"), "✗ Error: boom");
        assert_eq!(formatter.ruling(Ruling::NotStated), "Not Stated");
    }

    #[test]
    fn test_ruling_colors() {
        colored::control::set_override(true);
        let formatter = Formatter::new(OutputFormat::Table, true);
        assert_eq!(formatter.ruling(Ruling::Sustained), "Sustained".red().to_string());
        assert_eq!(formatter.ruling(Ruling::Overruled), "Overruled".green().to_string());
        assert_eq!(formatter.ruling(Ruling::NotStated), "Not Stated".dimmed().to_string());
    }
}
