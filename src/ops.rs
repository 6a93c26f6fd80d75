//! Stateless graph operations over plain node and edge collections.
//!
//! These keep the collection-level contract: `delete_node` only removes the node,
//! and callers follow it with [`purge_dangling_edges`]. [`crate::editor::WorkflowEditor`]
//! wraps both into a single cascading delete.

use crate::error::GraphError;
use crate::ids::IdAllocator;
use crate::workflow::{Edge, Node, NodeData, NodeDataPatch, NodeId, PaletteEntry, Position};
use ahash::AHashSet;

/// A request to connect two node handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

impl ConnectRequest {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn from_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn to_handle(mut self, handle: impl Into<String>) -> Self {
        self.target_handle = Some(handle.into());
        self
    }
}

/// Creates a node from a palette entry at `position`, appends it and returns it.
pub fn add_node(
    nodes: &mut Vec<Node>,
    ids: &mut IdAllocator,
    entry: &PaletteEntry,
    position: Position,
) -> Node {
    let id = ids.allocate(|candidate| nodes.iter().any(|n| n.id == candidate));
    let node = Node {
        id,
        kind: entry.kind,
        position,
        data: NodeData {
            label: entry.label.clone(),
            icon: Some(entry.icon.clone()),
            config: entry.default_config.clone(),
        },
        selected: false,
    };
    log::debug!("Added {} node '{}' ({})", node.kind, node.id, node.data.label);
    nodes.push(node.clone());
    node
}

/// Merges `patch` into the data of node `id`. Returns whether the node was found.
pub fn update_node(nodes: &mut [Node], id: &str, patch: NodeDataPatch) -> bool {
    match nodes.iter_mut().find(|n| n.id == id) {
        Some(node) => {
            node.data.merge(patch);
            true
        }
        None => {
            log::trace!("Ignoring update for unknown node '{}'", id);
            false
        }
    }
}

/// Removes node `id` and returns it. Edges referencing it are left in place.
pub fn delete_node(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
    let index = nodes.iter().position(|n| n.id == id);
    if index.is_none() {
        log::trace!("Ignoring delete for unknown node '{}'", id);
    }
    index.map(|i| nodes.remove(i))
}

/// Connects two existing nodes and appends the new edge.
///
/// Fails with [`GraphError::NodeNotFound`] if either endpoint is missing, in which
/// case `edges` is left untouched.
pub fn connect(
    nodes: &[Node],
    edges: &mut Vec<Edge>,
    ids: &mut IdAllocator,
    request: ConnectRequest,
) -> Result<Edge, GraphError> {
    for endpoint in [&request.source, &request.target] {
        if !nodes.iter().any(|n| &n.id == endpoint) {
            log::warn!(
                "Rejected connection {} -> {}: node '{}' does not exist",
                request.source,
                request.target,
                endpoint
            );
            return Err(GraphError::NodeNotFound {
                missing_node_id: endpoint.clone(),
                source_node_id: request.source.clone(),
                target_node_id: request.target.clone(),
            });
        }
    }

    let id = ids.allocate(|candidate| edges.iter().any(|e| e.id == candidate));
    let edge = Edge {
        id,
        source: request.source,
        target: request.target,
        source_handle: request.source_handle,
        target_handle: request.target_handle,
        selected: false,
    };
    log::debug!("Connected '{}' -> '{}' as '{}'", edge.source, edge.target, edge.id);
    edges.push(edge.clone());
    Ok(edge)
}

/// Removes edge `id` and returns it.
pub fn disconnect(edges: &mut Vec<Edge>, id: &str) -> Option<Edge> {
    let index = edges.iter().position(|e| e.id == id);
    if index.is_none() {
        log::trace!("Ignoring disconnect for unknown edge '{}'", id);
    }
    index.map(|i| edges.remove(i))
}

/// Drops every edge whose source or target is not in `nodes`. Returns how many went.
pub fn purge_dangling_edges(nodes: &[Node], edges: &mut Vec<Edge>) -> usize {
    let present: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let before = edges.len();
    edges.retain(|e| present.contains(e.source.as_str()) && present.contains(e.target.as_str()));
    let purged = before - edges.len();
    if purged > 0 {
        log::debug!("Purged {} dangling edge(s)", purged);
    }
    purged
}
