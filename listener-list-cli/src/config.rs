//! Scenario configuration loading and parsing

use anyhow::{bail, Context, Result};
use listener_list::EventValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Main scenario configuration (loaded from scenario.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub scenario: ScenarioMeta,
    pub nodes: Vec<NodeConfig>,
    #[serde(default)]
    pub listeners: Vec<ListenerConfig>,
    #[serde(default)]
    pub dispatch: Vec<DispatchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScenarioMeta {
    /// Scenario name shown in logs and the report
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeConfig {
    /// Node identifier, unique within the scenario
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Event name to register for
    pub event: String,
    /// Label used in logs and the report
    pub label: String,
    /// Restrict attachment to these node ids (default: every node)
    #[serde(default)]
    pub nodes: Option<Vec<String>>,
    /// What the handler does when invoked
    #[serde(default)]
    pub action: ListenerAction,
}

/// Behavior of a scenario handler on invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerAction {
    /// Count invocations (report only)
    #[default]
    Count,
    /// Count and log each invocation
    Print,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Node id to dispatch on
    pub node: String,
    /// Event name to dispatch
    pub event: String,
    /// Optional payload attached to the event
    #[serde(default)]
    pub detail: Option<DetailValue>,
}

/// Payload value attached to a dispatched event
///
/// Untagged so scenario files write plain TOML values:
/// `detail = 42`, `detail = true`, `detail = "submit"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DetailValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl DetailValue {
    /// Convert the configured payload into the library's event value
    pub fn to_event_value(&self) -> EventValue {
        match self {
            DetailValue::Boolean(v) => EventValue::Boolean(*v),
            DetailValue::Integer(v) => EventValue::Integer(*v),
            DetailValue::Float(v) => EventValue::Float(*v),
            DetailValue::Text(v) => EventValue::Text(v.clone()),
        }
    }
}

/// Load a scenario from a TOML file
pub fn load_config(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {:?}", path))?;

    let config: ScenarioConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {:?}", path))?;

    validate(&config)?;

    Ok(config)
}

/// Validate cross-references between scenario sections
fn validate(config: &ScenarioConfig) -> Result<()> {
    let mut ids = HashSet::new();
    for node in &config.nodes {
        if !ids.insert(node.id.as_str()) {
            bail!("Duplicate node id: {}", node.id);
        }
    }

    for listener in &config.listeners {
        if let Some(nodes) = &listener.nodes {
            for id in nodes {
                if !ids.contains(id.as_str()) {
                    bail!("Listener '{}' references unknown node: {}", listener.label, id);
                }
            }
        }
    }

    for step in &config.dispatch {
        if !ids.contains(step.node.as_str()) {
            bail!("Dispatch step references unknown node: {}", step.node);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_deserialization() {
        let toml_content = r#"
            [scenario]
            name = "click demo"

            [[nodes]]
            id = "nodeA"

            [[nodes]]
            id = "nodeB"

            [[listeners]]
            event = "click"
            label = "count-clicks"

            [[dispatch]]
            node = "nodeA"
            event = "click"
            detail = 42
        "#;

        let config: ScenarioConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.scenario.name.as_deref(), Some("click demo"));
        assert_eq!(config.nodes.len(), 2);
        assert_eq!(config.listeners.len(), 1);
        assert_eq!(config.listeners[0].action, ListenerAction::Count); // default
        assert!(config.listeners[0].nodes.is_none());

        let detail = config.dispatch[0].detail.as_ref().unwrap();
        assert_eq!(detail.to_event_value(), EventValue::Integer(42));
    }

    #[test]
    fn test_detail_value_variants() {
        let toml_content = r#"
            [[nodes]]
            id = "a"

            [[dispatch]]
            node = "a"
            event = "input"
            detail = true

            [[dispatch]]
            node = "a"
            event = "input"
            detail = 1.5

            [[dispatch]]
            node = "a"
            event = "input"
            detail = "submit"
        "#;

        let config: ScenarioConfig = toml::from_str(toml_content).unwrap();
        let details: Vec<EventValue> = config
            .dispatch
            .iter()
            .map(|d| d.detail.as_ref().unwrap().to_event_value())
            .collect();

        assert_eq!(details[0], EventValue::Boolean(true));
        assert_eq!(details[1], EventValue::Float(1.5));
        assert_eq!(details[2], EventValue::Text("submit".to_string()));
    }

    #[test]
    fn test_validation_rejects_unknown_references() {
        let toml_content = r#"
            [[nodes]]
            id = "a"

            [[listeners]]
            event = "click"
            label = "count"
            nodes = ["missing"]
        "#;

        let config: ScenarioConfig = toml::from_str(toml_content).unwrap();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("unknown node"));
    }

    #[test]
    fn test_validation_rejects_duplicate_node_ids() {
        let toml_content = r#"
            [[nodes]]
            id = "a"

            [[nodes]]
            id = "a"
        "#;

        let config: ScenarioConfig = toml::from_str(toml_content).unwrap();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("Duplicate node id"));
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[nodes]]
            id = "a"

            [[listeners]]
            event = "click"
            label = "count-clicks"
            action = "print"
        "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.nodes.len(), 1);
        assert_eq!(config.listeners[0].action, ListenerAction::Print);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario file"));
    }
}
