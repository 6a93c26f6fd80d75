//! Whole-workflow structural checks.
//!
//! The editor keeps most invariants by construction, but workflows also arrive from
//! files, templates and foreign canvases. `validate` reports everything that breaks
//! the graph rules so callers can decide whether to save, repair or refuse.

use crate::workflow::{FALSE_HANDLE, NodeKind, TRUE_HANDLE, Workflow};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A single rule violation found in a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// An edge references a node that does not exist.
    DanglingEdge { edge_id: String, node_id: String },
    /// Two or more nodes share an id.
    DuplicateNodeId { node_id: String },
    /// Two or more edges share an id.
    DuplicateEdgeId { edge_id: String },
    /// A condition edge leaves through a handle other than `true` or `false`.
    InvalidConditionHandle {
        edge_id: String,
        node_id: String,
        handle: Option<String>,
    },
    /// A condition handle has more than one outgoing edge.
    TooManyConditionBranches { node_id: String, handle: String },
    /// A trigger node has an incoming edge.
    IncomingEdgeOnTrigger { edge_id: String, node_id: String },
    /// An edge connects a node to itself.
    SelfLoop { edge_id: String, node_id: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::DanglingEdge { .. }
            | Self::DuplicateNodeId { .. }
            | Self::DuplicateEdgeId { .. }
            | Self::InvalidConditionHandle { .. }
            | Self::TooManyConditionBranches { .. } => Severity::Error,
            Self::IncomingEdgeOnTrigger { .. } | Self::SelfLoop { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEdge { edge_id, node_id } => {
                write!(f, "Edge '{}' references missing node '{}'", edge_id, node_id)
            }
            Self::DuplicateNodeId { node_id } => write!(f, "Duplicate node id '{}'", node_id),
            Self::DuplicateEdgeId { edge_id } => write!(f, "Duplicate edge id '{}'", edge_id),
            Self::InvalidConditionHandle {
                edge_id,
                node_id,
                handle,
            } => write!(
                f,
                "Edge '{}' leaves condition '{}' through handle '{}', expected 'true' or 'false'",
                edge_id,
                node_id,
                handle.as_deref().unwrap_or("<none>")
            ),
            Self::TooManyConditionBranches { node_id, handle } => write!(
                f,
                "Condition '{}' has more than one edge on its '{}' handle",
                node_id, handle
            ),
            Self::IncomingEdgeOnTrigger { edge_id, node_id } => {
                write!(f, "Edge '{}' points into trigger '{}'", edge_id, node_id)
            }
            Self::SelfLoop { edge_id, node_id } => {
                write!(f, "Edge '{}' connects '{}' to itself", edge_id, node_id)
            }
        }
    }
}

/// Checks `workflow` against the graph rules and returns every violation found.
pub fn validate(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = workflow
        .nodes
        .iter()
        .map(|n| n.id.as_str())
        .duplicates()
        .map(|id| ValidationIssue::DuplicateNodeId {
            node_id: id.to_string(),
        })
        .collect();

    issues.extend(
        workflow
            .edges
            .iter()
            .map(|e| e.id.as_str())
            .duplicates()
            .map(|id| ValidationIssue::DuplicateEdgeId {
                edge_id: id.to_string(),
            }),
    );

    let kinds: AHashMap<&str, NodeKind> = workflow
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.kind))
        .collect();
    let mut branches: AHashSet<(&str, &str)> = AHashSet::new();

    for edge in &workflow.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !kinds.contains_key(endpoint.as_str()) {
                issues.push(ValidationIssue::DanglingEdge {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }

        if edge.source == edge.target {
            issues.push(ValidationIssue::SelfLoop {
                edge_id: edge.id.clone(),
                node_id: edge.source.clone(),
            });
        }

        if kinds.get(edge.target.as_str()) == Some(&NodeKind::Trigger) {
            issues.push(ValidationIssue::IncomingEdgeOnTrigger {
                edge_id: edge.id.clone(),
                node_id: edge.target.clone(),
            });
        }

        if kinds.get(edge.source.as_str()) == Some(&NodeKind::Condition) {
            match edge.source_handle.as_deref() {
                Some(handle @ (TRUE_HANDLE | FALSE_HANDLE)) => {
                    if !branches.insert((edge.source.as_str(), handle)) {
                        issues.push(ValidationIssue::TooManyConditionBranches {
                            node_id: edge.source.clone(),
                            handle: handle.to_string(),
                        });
                    }
                }
                other => issues.push(ValidationIssue::InvalidConditionHandle {
                    edge_id: edge.id.clone(),
                    node_id: edge.source.clone(),
                    handle: other.map(str::to_string),
                }),
            }
        }
    }

    if !issues.is_empty() {
        log::debug!(
            "Workflow '{}' has {} validation issue(s)",
            workflow.name,
            issues.len()
        );
    }
    issues
}

/// Whether any issue is severe enough to block saving.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity() == Severity::Error)
}
