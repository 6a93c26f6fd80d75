use super::conversion::IntoWorkflow;
use super::definition::{Edge, FALSE_HANDLE, Node, NodeKind, TRUE_HANDLE, Workflow};
use crate::error::{WorkflowConversionError, WorkflowIoError};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A prebuilt workflow users can start from instead of an empty canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl IntoWorkflow for WorkflowTemplate {
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
        if self.nodes.is_empty() {
            return Err(WorkflowConversionError::Validation(format!(
                "template '{}' has no nodes",
                self.name
            )));
        }
        Ok(Workflow {
            name: self.name,
            description: self.description,
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}

/// Templates that ship with the builder.
pub fn builtin_templates() -> Vec<WorkflowTemplate> {
    vec![
        WorkflowTemplate {
            name: "daily-report".to_string(),
            description: "Email the KPI summary every weekday morning".to_string(),
            nodes: vec![
                Node::new("schedule", NodeKind::Trigger, "Every weekday at 9:00")
                    .at(0.0, 0.0)
                    .with_icon("clock")
                    .with_config("cron", json!("0 9 * * 1-5")),
                Node::new("build_report", NodeKind::Action, "Build KPI report")
                    .at(0.0, 120.0)
                    .with_icon("file-text"),
                Node::new("email_report", NodeKind::Action, "Email leadership")
                    .at(0.0, 240.0)
                    .with_icon("mail")
                    .with_config("to", json!("leadership@example.com")),
            ],
            edges: vec![
                Edge::new("e_schedule_build", "schedule", "build_report"),
                Edge::new("e_build_email", "build_report", "email_report"),
            ],
        },
        WorkflowTemplate {
            name: "revenue-alert".to_string(),
            description: "Escalate when revenue falls below target, log otherwise".to_string(),
            nodes: vec![
                Node::new("kpi_update", NodeKind::Trigger, "Revenue KPI updated")
                    .at(0.0, 0.0)
                    .with_icon("activity")
                    .with_config("metric", json!("revenue")),
                Node::new("below_target", NodeKind::Condition, "Below target?")
                    .at(0.0, 120.0)
                    .with_icon("git-branch")
                    .with_config("operator", json!("lessThan"))
                    .with_config("value", json!(1_000_000)),
                Node::new("page_exec", NodeKind::Action, "Notify Slack #exec")
                    .at(-150.0, 240.0)
                    .with_icon("message-square")
                    .with_config("channel", json!("#exec")),
                Node::new("log_ok", NodeKind::Action, "Create audit record")
                    .at(150.0, 240.0)
                    .with_icon("database"),
            ],
            edges: vec![
                Edge::new("e_update_check", "kpi_update", "below_target"),
                Edge::new("e_check_page", "below_target", "page_exec").from_handle(TRUE_HANDLE),
                Edge::new("e_check_log", "below_target", "log_ok").from_handle(FALSE_HANDLE),
            ],
        },
    ]
}

/// Loads a built-in template by name as a fresh workflow.
pub fn load_template(name: &str) -> Result<Workflow, WorkflowIoError> {
    let template = builtin_templates()
        .into_iter()
        .find(|t| t.name == name)
        .ok_or_else(|| WorkflowIoError::UnknownTemplate(name.to_string()))?;
    log::debug!("Loading workflow template '{}'", template.name);
    Ok(template.into_workflow()?)
}
