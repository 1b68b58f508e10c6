//! Category list formatter

use std::collections::BTreeMap;

use console::style;
use serde::Serialize;

use crate::catalog::Category;
use crate::cli::output::{Formattable, OutputFormat, to_robot_json, tsv_cell};

/// All categories with their filters and input hints
#[derive(Debug, Clone, Default)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    /// Loaded record counts, when requested
    pub counts: BTreeMap<Category, usize>,
}

#[derive(Debug, Serialize)]
struct CategoryJson {
    id: &'static str,
    label: &'static str,
    filters: &'static [&'static str],
    placeholder_model: &'static str,
    placeholder_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            counts: BTreeMap::new(),
        }
    }

    pub fn set_count(&mut self, category: Category, count: usize) {
        self.counts.insert(category, count);
    }

    fn entries(&self) -> Vec<CategoryJson> {
        self.categories
            .iter()
            .map(|&category| {
                let spec = category.spec();
                CategoryJson {
                    id: category.id(),
                    label: spec.label,
                    filters: spec.filters,
                    placeholder_model: spec.placeholder_model,
                    placeholder_name: spec.placeholder_name,
                    count: self.counts.get(&category).copied(),
                }
            })
            .collect()
    }

    fn format_human(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            out.push_str(&format!(
                "{} {}",
                style(format!("{:<14}", entry.id)).cyan().bold(),
                entry.label
            ));
            if let Some(count) = entry.count {
                out.push_str(&format!(" {}", style(format!("({count} items)")).dim()));
            }
            out.push('\n');
            out.push_str(&format!(
                "               {} {}\n",
                style("filters:").dim(),
                entry.filters.join(", ")
            ));
            out.push_str(&format!(
                "               {} {} / {}\n",
                style("hints:").dim(),
                entry.placeholder_model,
                entry.placeholder_name
            ));
        }
        out
    }

    fn format_plain(&self) -> String {
        self.entries()
            .iter()
            .map(|e| format!("{}: {}", e.id, e.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from("id\tlabel\tfilters\tcount\n");
        for entry in self.entries() {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                entry.id,
                tsv_cell(entry.label),
                tsv_cell(&entry.filters.join(",")),
                entry.count.map(|c| c.to_string()).unwrap_or_default()
            ));
        }
        out
    }

    fn format_jsonl(&self) -> String {
        self.entries()
            .iter()
            .filter_map(|e| serde_json::to_string(e).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for CategoryList {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => to_robot_json(self.entries(), true).unwrap_or_default(),
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}
