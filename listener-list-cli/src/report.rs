//! Scenario report generation
//!
//! Collects per-listener invocation counts and per-node dispatch totals and
//! renders them as text or JSON.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Txt,
    Json,
}

/// One attached listener and its invocation count
#[derive(Debug, Clone, Serialize)]
pub struct ListenerRow {
    pub label: String,
    pub event: String,
    /// Number of nodes the listener was attached to
    pub attached_nodes: usize,
    pub invocations: usize,
}

/// One node and its dispatch totals
#[derive(Debug, Clone, Serialize)]
pub struct NodeRow {
    pub id: String,
    /// Listeners registered on the node at scenario end
    pub listeners: usize,
    /// Dispatch steps executed against the node
    pub dispatches: usize,
    /// Handlers invoked across those dispatches
    pub handlers_invoked: usize,
}

/// Complete scenario run report
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: Option<String>,
    pub generated_at: String,
    pub listeners: Vec<ListenerRow>,
    pub nodes: Vec<NodeRow>,
    pub total_dispatches: usize,
    pub total_invocations: usize,
}

impl ScenarioReport {
    /// Create an empty report for a scenario
    pub fn new(scenario: Option<String>) -> Self {
        Self {
            scenario,
            generated_at: Utc::now().to_rfc3339(),
            listeners: Vec::new(),
            nodes: Vec::new(),
            total_dispatches: 0,
            total_invocations: 0,
        }
    }

    /// Render the report as plain text
    pub fn render_txt(&self) -> String {
        let mut out = String::new();

        out.push_str("=== SCENARIO SUMMARY ===\n");
        if let Some(name) = &self.scenario {
            out.push_str(&format!("Scenario: {}\n", name));
        }
        out.push_str(&format!("Generated: {}\n", self.generated_at));
        out.push_str(&format!("Total dispatches: {}\n", self.total_dispatches));
        out.push_str(&format!(
            "Total handler invocations: {}\n",
            self.total_invocations
        ));

        out.push_str("\nListeners:\n");
        if self.listeners.is_empty() {
            out.push_str("  (none)\n");
        }
        for row in &self.listeners {
            out.push_str(&format!(
                "  {} [{}] - attached to {} node(s), invoked {} time(s)\n",
                row.label, row.event, row.attached_nodes, row.invocations
            ));
        }

        out.push_str("\nNodes:\n");
        if self.nodes.is_empty() {
            out.push_str("  (none)\n");
        }
        for row in &self.nodes {
            out.push_str(&format!(
                "  {} - {} listener(s), {} dispatch(es), {} handler invocation(s)\n",
                row.id, row.listeners, row.dispatches, row.handlers_invoked
            ));
        }

        out
    }

    /// Render the report as pretty-printed JSON
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }

    /// Write the report to a file, or stdout when no path is given
    pub fn write(&self, format: ReportFormat, output: Option<&Path>) -> Result<()> {
        let rendered = match format {
            ReportFormat::Txt => self.render_txt(),
            ReportFormat::Json => self.render_json()?,
        };

        match output {
            Some(path) => {
                fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write report to {:?}", path))?;
                log::info!("Report written to {:?}", path);
            }
            None => {
                println!("{}", rendered);
            }
        }

        Ok(())
    }
}
