//! The authoritative node and edge collections of one open workflow.

use crate::workflow::{Edge, Node, Workflow};

/// Holds the current node and edge snapshots.
///
/// The store performs no validation. Callers build the next collection from the
/// previous one and hand it over whole.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn from_workflow(workflow: Workflow) -> Self {
        Self::new(workflow.nodes, workflow.edges)
    }

    /// Current nodes, in insertion (render) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Current edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn replace_nodes(&mut self, next: Vec<Node>) {
        self.nodes = next;
    }

    pub fn replace_edges(&mut self, next: Vec<Edge>) {
        self.edges = next;
    }

    /// Snapshots the store as a workflow aggregate.
    pub fn to_workflow(&self, name: &str, description: &str) -> Workflow {
        Workflow {
            name: name.to_string(),
            description: description.to_string(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    pub fn into_workflow(self, name: impl Into<String>, description: impl Into<String>) -> Workflow {
        Workflow {
            name: name.into(),
            description: description.into(),
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
