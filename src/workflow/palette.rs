use super::definition::{NodeConfig, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A node definition the user can drag from the palette onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub default_config: NodeConfig,
}

impl PaletteEntry {
    pub fn new(kind: NodeKind, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: icon.into(),
            default_config: NodeConfig::new(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.default_config.insert(key.into(), value);
        self
    }
}

/// The entries shown in the builder's palette out of the box.
pub fn default_palette() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new(NodeKind::Trigger, "Schedule", "clock")
            .with_default("cron", json!("0 9 * * 1-5")),
        PaletteEntry::new(NodeKind::Trigger, "Webhook", "webhook")
            .with_default("method", json!("POST")),
        PaletteEntry::new(NodeKind::Trigger, "KPI threshold", "activity")
            .with_default("metric", json!("revenue"))
            .with_default("threshold", json!(0)),
        PaletteEntry::new(NodeKind::Action, "Send email", "mail")
            .with_default("to", json!(""))
            .with_default("subject", json!("")),
        PaletteEntry::new(NodeKind::Action, "Create record", "database")
            .with_default("table", json!("")),
        PaletteEntry::new(NodeKind::Action, "Notify Slack", "message-square")
            .with_default("channel", json!("#alerts")),
        PaletteEntry::new(NodeKind::Condition, "If / else", "git-branch")
            .with_default("field", json!(""))
            .with_default("operator", json!("equals"))
            .with_default("value", json!("")),
    ]
}

/// Looks up a palette entry by its label, ignoring case.
pub fn find_entry<'a>(palette: &'a [PaletteEntry], label: &str) -> Option<&'a PaletteEntry> {
    palette
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(label))
}
