//! Search results formatter

use console::style;
use serde::Serialize;

use crate::catalog::Category;
use crate::catalog::record::{Record, UNKNOWN, fields};
use crate::cli::output::{Formattable, OutputFormat, to_robot_json, tsv_cell};
use crate::search::Query;

/// Attribute rows shown on a result card, in display order.
pub const DISPLAY_ROWS: [&str; 6] = [
    fields::RELEASE_YEAR,
    fields::CPU,
    fields::CAPACITY,
    fields::COLOR,
    fields::SCREEN_SIZE,
    fields::SERIES,
];

/// Model numbers joined for display, or the unknown marker.
#[must_use]
pub fn model_line(record: &Record) -> String {
    record
        .model_numbers()
        .map(|value| value.display())
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Matched records of one category search
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub category: Category,
    pub query: Query,
    pub results: Vec<Record>,
    /// Number of records in the searched catalog
    pub total: usize,
}

#[derive(Debug, Serialize)]
struct SearchResponseJson<'a> {
    category: Category,
    label: &'static str,
    query: &'a Query,
    count: usize,
    total: usize,
    results: &'a [Record],
}

impl SearchResults {
    pub fn new(category: Category, query: Query, results: Vec<Record>, total: usize) -> Self {
        Self {
            category,
            query,
            results,
            total,
        }
    }

    fn to_json_response(&self) -> SearchResponseJson<'_> {
        SearchResponseJson {
            category: self.category,
            label: self.category.label(),
            query: &self.query,
            count: self.results.len(),
            total: self.total,
            results: &self.results,
        }
    }

    /// Parenthesized description of what was searched for.
    fn condition(&self) -> String {
        match (self.query.text(), self.query.filters.is_active()) {
            (Some(text), true) => format!("\"{text}\" + selected filters"),
            (Some(text), false) => format!("\"{text}\""),
            (None, _) => "selected filters".to_string(),
        }
    }

    fn format_human(&self) -> String {
        let label = self.category.label();
        let mut out = String::new();

        if self.total == 0 {
            out.push_str(&format!(
                "{} No data loaded for {}\n",
                style("!").yellow(),
                style(label).bold()
            ));
        }

        if self.results.is_empty() {
            out.push_str(&format!(
                "{} No {} matched ({})\n",
                style("!").yellow(),
                label,
                style(self.condition()).cyan()
            ));
            return out;
        }

        out.push_str(&format!(
            "{} {} matched ({}):\n\n",
            style(self.results.len().to_string()).bold(),
            label,
            style(self.condition()).cyan()
        ));

        for record in &self.results {
            out.push_str(&format!(
                "{}\n",
                style(record.name().unwrap_or(UNKNOWN)).cyan().bold()
            ));
            out.push_str(&format!(
                "   {} {}\n",
                style(format!("{}:", fields::MODEL_NUMBERS)).dim(),
                model_line(record)
            ));
            for key in DISPLAY_ROWS {
                if let Some(value) = record.get(key) {
                    out.push_str(&format!(
                        "   {} {}\n",
                        style(format!("{key}:")).dim(),
                        value.display()
                    ));
                }
            }
            if let Some(features) = record.features() {
                out.push_str(&format!("   {}\n", style(features).dim()));
            }
            out.push('\n');
        }

        out
    }

    fn format_plain(&self) -> String {
        let label = self.category.label();
        let mut lines = Vec::new();
        if self.total == 0 {
            lines.push(format!("No data loaded for {label}"));
        }
        if self.results.is_empty() {
            lines.push(format!("No {label} matched ({})", self.condition()));
        }
        lines.extend(
            self.results
                .iter()
                .map(|r| format!("{}: {}", r.name().unwrap_or(UNKNOWN), model_line(r))),
        );
        lines.join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = format!("{}\t{}", fields::NAME, fields::MODEL_NUMBERS);
        for key in DISPLAY_ROWS {
            out.push('\t');
            out.push_str(key);
        }
        out.push('\n');

        for record in &self.results {
            out.push_str(&tsv_cell(record.name().unwrap_or_default()));
            out.push('\t');
            out.push_str(&tsv_cell(&model_line(record)));
            for key in DISPLAY_ROWS {
                out.push('\t');
                if let Some(value) = record.get(key) {
                    out.push_str(&tsv_cell(&value.display()));
                }
            }
            out.push('\n');
        }
        out
    }

    fn format_jsonl(&self) -> String {
        self.results
            .iter()
            .filter_map(|r| serde_json::to_string(r).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SearchResults {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => to_robot_json(self.to_json_response(), true).unwrap_or_default(),
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}
