//! Sectioned CSV export
//!
//! Layout, with `\n` line endings:
//!
//! ```text
//! SECTION: KEY FACTS AND ADMISSIONS
//! Fact,Witness,Page/Line,Summary
//! "...","...","...","..."
//!
//!
//! SECTION: EXHIBITS REFERENCED
//! ID,Description,Page/Line
//! ...
//! ```
//!
//! Every data field is quoted, so embedded commas and newlines never break a
//! row and an empty field is `""`.

use depo_domain::AnalysisResult;

/// Column header for key facts
pub const KEY_FACT_COLUMNS: [&str; 4] = ["Fact", "Witness", "Page/Line", "Summary"];

/// Column header for exhibits
pub const EXHIBIT_COLUMNS: [&str; 3] = ["ID", "Description", "Page/Line"];

/// Column header for objections
pub const OBJECTION_COLUMNS: [&str; 4] = ["Type", "By", "Ruling", "Page/Line"];

const SECTION_BREAK: &str = "\n\n";

/// Render a result as sectioned CSV
pub fn to_csv(result: &AnalysisResult) -> String {
    let mut out = String::new();

    write_section(
        &mut out,
        "KEY FACTS AND ADMISSIONS",
        &KEY_FACT_COLUMNS,
        result
            .key_facts_and_admissions()
            .iter()
            .map(|f| [f.fact.as_str(), f.witness.as_str(), f.page_line.as_str(), f.summary.as_str()]),
    );
    out.push_str(SECTION_BREAK);

    write_section(
        &mut out,
        "EXHIBITS REFERENCED",
        &EXHIBIT_COLUMNS,
        result
            .exhibits_referenced()
            .iter()
            .map(|e| [e.id.as_str(), e.description.as_str(), e.page_line.as_str()]),
    );
    out.push_str(SECTION_BREAK);

    write_section(
        &mut out,
        "OBJECTIONS LOG",
        &OBJECTION_COLUMNS,
        result
            .objections_log()
            .iter()
            .map(|o| [o.objection_type.as_str(), o.by.as_str(), o.ruling.as_str(), o.page_line.as_str()]),
    );

    out
}

fn write_section<'a, const N: usize>(
    out: &mut String,
    title: &str,
    columns: &[&str; N],
    rows: impl Iterator<Item = [&'a str; N]>,
) {
    out.push_str("SECTION: ");
    out.push_str(title);
    out.push('\n');
    out.push_str(&columns.join(","));
    out.push('\n');

    for row in rows {
        let fields: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
}

/// Wrap a field in double quotes, doubling any quote inside it
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
