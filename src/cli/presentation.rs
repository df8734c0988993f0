//! CLI presentation: sink configs as JSON/YAML, builtin catalog as a table or JSON.

use crate::admin::ConnectorDefinition;
use crate::error::SinkError;
use crate::sink::model::SinkConfig;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

pub fn format_sink_config(config: &SinkConfig, format: &str) -> Result<String, SinkError> {
    match format {
        "json" => serde_json::to_string_pretty(config).map_err(|e| SinkError::Render(e.to_string())),
        "yaml" => serde_yaml::to_string(config).map_err(|e| SinkError::Render(e.to_string())),
        other => Err(SinkError::Render(format!(
            "Unknown format: {} (must be 'json' or 'yaml')",
            other
        ))),
    }
}

pub fn format_builtin_text(definitions: &[ConnectorDefinition]) -> String {
    if definitions.is_empty() {
        return "No builtin sinks available.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Sink Class", "Description"]);
    for def in definitions {
        table.add_row(vec![
            def.name.clone(),
            def.sink_class.clone().unwrap_or_else(|| "-".to_string()),
            def.description.clone(),
        ]);
    }
    format!("{}\n\nTotal: {} builtin sink(s)", table, definitions.len())
}

pub fn format_builtin_json(definitions: &[ConnectorDefinition]) -> String {
    let out = json!({ "sinks": definitions, "total": definitions.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
