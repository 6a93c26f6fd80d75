//! The editing session for one open workflow.

use crate::changes::{EdgeChange, NodeChange, apply_edge_changes, apply_node_changes};
use crate::error::{GraphError, SimulationError, WorkflowIoError};
use crate::ids::IdAllocator;
use crate::ops::{self, ConnectRequest};
use crate::simulation::{SimulationConfig, SimulationPath, Simulator};
use crate::store::GraphStore;
use crate::validation::{self, ValidationIssue};
use crate::workflow::{Edge, Node, NodeDataPatch, PaletteEntry, Position, Workflow};
use serde::{Deserialize, Serialize};

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub node_id_prefix: String,
    pub edge_id_prefix: String,
    pub simulation: SimulationConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_id_prefix: "node".to_string(),
            edge_id_prefix: "edge".to_string(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Loads a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, WorkflowIoError> {
        let json = std::fs::read_to_string(path).map_err(|source| WorkflowIoError::File {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&json).map_err(WorkflowIoError::Parse)
    }
}

/// Owns a workflow's graph and applies user intents to it.
///
/// Every mutation builds the next collection from the current one and replaces it
/// in the store. Unlike the collection-level operations in [`crate::ops`], deleting
/// a node here also removes its edges in the same step.
pub struct WorkflowEditor {
    name: String,
    description: String,
    store: GraphStore,
    node_ids: IdAllocator,
    edge_ids: IdAllocator,
    simulator: Simulator,
}

pub struct EditorBuilder {
    workflow: Workflow,
    config: EditorConfig,
}

impl EditorBuilder {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            config: EditorConfig::default(),
        }
    }
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.config.simulation = simulation;
        self
    }
    pub fn build(self) -> WorkflowEditor {
        let mut editor = WorkflowEditor {
            name: String::new(),
            description: String::new(),
            store: GraphStore::default(),
            node_ids: IdAllocator::new(self.config.node_id_prefix),
            edge_ids: IdAllocator::new(self.config.edge_id_prefix),
            simulator: Simulator::new(self.config.simulation),
        };
        editor.load_workflow(self.workflow);
        editor
    }
}

impl WorkflowEditor {
    /// Starts a session on an empty workflow.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(Workflow::new(name)).build()
    }

    pub fn builder(workflow: Workflow) -> EditorBuilder {
        EditorBuilder::new(workflow)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn nodes(&self) -> &[Node] {
        self.store.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.store.edges()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.store.node(id)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Replaces the session contents with `workflow`.
    ///
    /// Id counters move past the ids the workflow already uses so freshly created
    /// nodes and edges never collide with loaded ones.
    pub fn load_workflow(&mut self, workflow: Workflow) {
        self.node_ids
            .reseed(workflow.nodes.iter().map(|n| n.id.as_str()));
        self.edge_ids
            .reseed(workflow.edges.iter().map(|e| e.id.as_str()));
        log::debug!(
            "Loaded workflow '{}' ({} nodes, {} edges)",
            workflow.name,
            workflow.nodes.len(),
            workflow.edges.len()
        );
        self.name = workflow.name;
        self.description = workflow.description;
        self.store = GraphStore::new(workflow.nodes, workflow.edges);
    }

    /// Snapshot of the whole aggregate, for saving.
    pub fn workflow(&self) -> Workflow {
        self.store.to_workflow(&self.name, &self.description)
    }

    pub fn into_workflow(self) -> Workflow {
        self.store.into_workflow(self.name, self.description)
    }

    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        let next = apply_node_changes(changes, self.store.nodes());
        self.store.replace_nodes(next);
        // A remove descriptor may have orphaned edges.
        if changes.iter().any(|c| matches!(c, NodeChange::Remove { .. })) {
            self.purge_dangling_edges();
        }
    }

    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        let next = apply_edge_changes(changes, self.store.edges());
        self.store.replace_edges(next);
        // Added or replaced edges may name nodes that do not exist.
        if changes
            .iter()
            .any(|c| matches!(c, EdgeChange::Add { .. } | EdgeChange::Replace { .. }))
        {
            self.purge_dangling_edges();
        }
    }

    /// Drops a palette entry onto the canvas and returns the created node.
    pub fn add_node(&mut self, entry: &PaletteEntry, position: Position) -> Node {
        let mut nodes = self.store.nodes().to_vec();
        let node = ops::add_node(&mut nodes, &mut self.node_ids, entry, position);
        self.store.replace_nodes(nodes);
        node
    }

    /// Merges `patch` into a node's data. Returns whether the node exists.
    pub fn update_node(&mut self, id: &str, patch: NodeDataPatch) -> bool {
        let mut nodes = self.store.nodes().to_vec();
        let found = ops::update_node(&mut nodes, id, patch);
        if found {
            self.store.replace_nodes(nodes);
        }
        found
    }

    /// Deletes a node together with every edge touching it.
    pub fn delete_node(&mut self, id: &str) -> Option<Node> {
        let mut nodes = self.store.nodes().to_vec();
        let removed = ops::delete_node(&mut nodes, id)?;
        let edges: Vec<Edge> = self
            .store
            .edges()
            .iter()
            .filter(|e| !e.touches(id))
            .cloned()
            .collect();
        log::debug!(
            "Deleted node '{}' and {} attached edge(s)",
            id,
            self.store.edges().len() - edges.len()
        );
        self.store.replace_nodes(nodes);
        self.store.replace_edges(edges);
        Some(removed)
    }

    /// Connects two existing nodes. Fails without touching the graph if either is missing.
    pub fn connect(&mut self, request: ConnectRequest) -> Result<Edge, GraphError> {
        let mut edges = self.store.edges().to_vec();
        let edge = ops::connect(self.store.nodes(), &mut edges, &mut self.edge_ids, request)?;
        self.store.replace_edges(edges);
        Ok(edge)
    }

    /// Removes an edge by id.
    pub fn disconnect(&mut self, edge_id: &str) -> Option<Edge> {
        let mut edges = self.store.edges().to_vec();
        let removed = ops::disconnect(&mut edges, edge_id)?;
        self.store.replace_edges(edges);
        Some(removed)
    }

    /// Removes edges whose endpoints are gone. Returns how many were removed.
    pub fn purge_dangling_edges(&mut self) -> usize {
        let mut edges = self.store.edges().to_vec();
        let purged = ops::purge_dangling_edges(self.store.nodes(), &mut edges);
        if purged > 0 {
            self.store.replace_edges(edges);
        }
        purged
    }

    /// Selects exactly one node, clearing every other node and edge selection.
    pub fn select_only(&mut self, id: &str) {
        let node_changes: Vec<NodeChange> = self
            .store
            .nodes()
            .iter()
            .filter(|n| n.selected != (n.id == id))
            .map(|n| NodeChange::Select {
                id: n.id.clone(),
                selected: n.id == id,
            })
            .collect();
        self.apply_node_changes(&node_changes);
        self.clear_edge_selection();
    }

    pub fn clear_selection(&mut self) {
        let node_changes: Vec<NodeChange> = self
            .store
            .nodes()
            .iter()
            .filter(|n| n.selected)
            .map(|n| NodeChange::Select {
                id: n.id.clone(),
                selected: false,
            })
            .collect();
        self.apply_node_changes(&node_changes);
        self.clear_edge_selection();
    }

    fn clear_edge_selection(&mut self) {
        let edge_changes: Vec<EdgeChange> = self
            .store
            .edges()
            .iter()
            .filter(|e| e.selected)
            .map(|e| EdgeChange::Select {
                id: e.id.clone(),
                selected: false,
            })
            .collect();
        self.apply_edge_changes(&edge_changes);
    }

    /// Computes the test-run path from `start` over the current graph.
    pub fn simulate(&self, start: &str) -> Result<SimulationPath, SimulationError> {
        self.simulator
            .generate(start, self.store.nodes(), self.store.edges())
    }

    /// Checks the current graph against the workflow rules.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::validate(&self.workflow())
    }
}
