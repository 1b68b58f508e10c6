//! Filter choices formatter

use console::style;
use serde::Serialize;

use crate::catalog::Category;
use crate::cli::output::{Formattable, OutputFormat, to_robot_json, tsv_cell};
use crate::search::FilterChoice;

/// Filter choices of one category
#[derive(Debug, Clone)]
pub struct FilterChoices {
    pub category: Category,
    pub choices: Vec<FilterChoice>,
}

#[derive(Debug, Serialize)]
struct FilterChoicesJson<'a> {
    category: Category,
    label: &'static str,
    filters: &'a [FilterChoice],
}

impl FilterChoices {
    pub const fn new(category: Category, choices: Vec<FilterChoice>) -> Self {
        Self { category, choices }
    }

    fn format_human(&self) -> String {
        let label = self.category.label();
        if self.choices.is_empty() {
            return format!("{} {label} has no filters", style("!").yellow());
        }

        let mut out = format!("Filters for {}:\n\n", style(label).bold());
        for choice in &self.choices {
            let values = if choice.values.is_empty() {
                style("(no values)").dim().to_string()
            } else {
                choice.values.join(", ")
            };
            out.push_str(&format!("  {}: {values}\n", style(&choice.attribute).cyan()));
        }
        out
    }

    fn format_plain(&self) -> String {
        self.choices
            .iter()
            .map(|c| format!("{}: {}", c.attribute, c.values.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from("attribute\tvalue\n");
        for choice in &self.choices {
            for value in &choice.values {
                out.push_str(&format!(
                    "{}\t{}\n",
                    tsv_cell(&choice.attribute),
                    tsv_cell(value)
                ));
            }
        }
        out
    }

    fn format_jsonl(&self) -> String {
        self.choices
            .iter()
            .filter_map(|c| serde_json::to_string(c).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for FilterChoices {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => to_robot_json(
                FilterChoicesJson {
                    category: self.category,
                    label: self.category.label(),
                    filters: &self.choices,
                },
                true,
            )
            .unwrap_or_default(),
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}
