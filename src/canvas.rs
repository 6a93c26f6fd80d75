//! The save format of the React-Flow-style canvas, and its conversion into a `Workflow`.

use crate::error::WorkflowConversionError;
use ahash::AHashSet;
use crate::workflow::{Edge, IntoWorkflow, Node, NodeConfig, NodeData, NodeKind, Position, Workflow};
use serde::Deserialize;

/// Canvas node data. Labels and icons live next to arbitrary config keys.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CanvasNodeData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub config: NodeConfig,
}

/// Canvas node with its type tag and position.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub data: CanvasNodeData,
    #[serde(default)]
    pub selected: bool,
}

/// Canvas edge connecting two handles.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete canvas document.
#[derive(Debug, Deserialize)]
pub struct CanvasDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<CanvasEdge>,
}

impl CanvasDocument {
    pub fn from_json(json: &str) -> Result<Self, WorkflowConversionError> {
        serde_json::from_str(json)
            .map_err(|e| WorkflowConversionError::Validation(format!("invalid canvas JSON: {}", e)))
    }
}

impl IntoWorkflow for CanvasDocument {
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                let kind = NodeKind::parse(&raw.node_type).ok_or_else(|| {
                    WorkflowConversionError::UnknownNodeKind {
                        node_id: raw.id.clone(),
                        kind: raw.node_type.clone(),
                    }
                })?;
                Ok(Node {
                    data: NodeData {
                        label: raw.data.label.unwrap_or_else(|| raw.id.clone()),
                        icon: raw.data.icon,
                        config: raw.data.config,
                    },
                    id: raw.id,
                    kind,
                    position: raw.position.unwrap_or_default(),
                    selected: raw.selected,
                })
            })
            .collect::<Result<Vec<_>, WorkflowConversionError>>()?;

        // Canvases sometimes omit edge ids; derive a stable one from the endpoints,
        // skipping any id the document already uses.
        let mut taken: AHashSet<String> =
            self.edges.iter().filter_map(|e| e.id.clone()).collect();
        let edges = self
            .edges
            .into_iter()
            .enumerate()
            .map(|(i, raw)| Edge {
                id: raw.id.unwrap_or_else(|| {
                    let base = format!("e{}-{}-{}", i, raw.source, raw.target);
                    let id = std::iter::once(base.clone())
                        .chain((1u64..).map(|n| format!("{}-{}", base, n)))
                        .find(|candidate| !taken.contains(candidate))
                        .unwrap_or(base);
                    taken.insert(id.clone());
                    id
                }),
                source: raw.source,
                target: raw.target,
                source_handle: raw.source_handle,
                target_handle: raw.target_handle,
                selected: false,
            })
            .collect();

        Ok(Workflow {
            name: self.name.unwrap_or_else(|| "Untitled workflow".to_string()),
            description: self.description.unwrap_or_default(),
            nodes,
            edges,
        })
    }
}
