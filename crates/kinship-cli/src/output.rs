//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{CommonAncestorRecord, PersonHandle, RelationshipKind};
use kinship_engine::Relationship;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// A person in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct PersonRow {
    /// Person handle
    pub handle: PersonHandle,
    /// Display name (the handle when no name is recorded)
    pub name: String,
    /// Generations from the queried person, if meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u32>,
}

/// A rendered relationship query.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipReport {
    /// Person A
    pub a: PersonRow,
    /// Person B
    pub b: PersonRow,
    /// One phrase per descriptor, e.g. "first cousin once removed"
    pub phrases: Vec<String>,
    /// Structural result
    pub relationship: Relationship,
    /// Display labels for `relationship.common_ancestors`, same order
    #[serde(skip)]
    pub ancestor_labels: Vec<String>,
}

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

    /// Format a relationship query result.
    pub fn format_relationship(&self, report: &RelationshipReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.phrases.join("\n")),
            OutputFormat::Table => {
                let name = if self.color_enabled {
                    report.b.name.bold().to_string()
                } else {
                    report.b.name.clone()
                };
                let phrases = self.colorize(&report.phrases.join(", "), "cyan");
                let mut out = match report.relationship.descriptor.kind {
                    RelationshipKind::SamePerson | RelationshipKind::Unrelated => {
                        format!("{} and {}: {}", name, report.a.name, phrases)
                    }
                    _ => format!("{} is {}'s {}", name, report.a.name, phrases),
                };
                if let Some(spouse) = &report.relationship.via_spouse {
                    out.push('\n');
                    out.push_str(&self.info(&format!("Related by marriage through {}", spouse)));
                }
                if !report.relationship.common_ancestors.is_empty() {
                    out.push('\n');
                    out.push_str(&self.ancestor_table(
                        &report.relationship.common_ancestors,
                        &report.ancestor_labels,
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Format common-ancestor records with their display labels.
    pub fn format_common_ancestors(
        &self,
        records: &[CommonAncestorRecord],
        labels: &[String],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| {
                    r.ancestor
                        .handles()
                        .iter()
                        .map(|h| h.as_str())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No common ancestors found.", "yellow"));
                }
                Ok(self.ancestor_table(records, labels))
            }
        }
    }

    /// Format a person listing.
    pub fn format_people(&self, people: &[PersonRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(people)?),
            OutputFormat::Quiet => Ok(people
                .iter()
                .map(|p| p.handle.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if people.is_empty() {
                    return Ok(self.colorize("No people found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Handle", "Name", "Generation"]);
                for person in people {
                    let generation = person
                        .generation
                        .map(|g| g.to_string())
                        .unwrap_or_default();
                    builder.push_record([
                        person.handle.as_str(),
                        person.name.as_str(),
                        generation.as_str(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    fn ancestor_table(&self, records: &[CommonAncestorRecord], labels: &[String]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Common ancestor", "From A", "From B", "By birth"]);
        for (i, record) in records.iter().enumerate() {
            let label = labels.get(i).cloned().unwrap_or_default();
            let by_birth = if record.by_birth() { "yes" } else { "no" };
            builder.push_record([
                label,
                record.dist_a.to_string(),
                record.dist_b.to_string(),
                by_birth.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
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

    /// Append a warning under table output; other formats stay machine-readable.
    pub fn with_warning(&self, output: String, message: &str) -> String {
        match self.format {
            OutputFormat::Table => format!("{}\n{}", output, self.warning(message)),
            OutputFormat::Json | OutputFormat::Quiet => output,
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
