use super::{ChangeSlots, Identified};
use crate::workflow::{Edge, EdgeId};
use serde::{Deserialize, Serialize};

/// One canvas-originated mutation of the edge collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Add { item: Edge },
    Remove { id: EdgeId },
    Select { id: EdgeId, selected: bool },
    Replace { id: EdgeId, item: Edge },
}

impl EdgeChange {
    pub fn id(&self) -> &str {
        match self {
            EdgeChange::Add { item } => &item.id,
            EdgeChange::Remove { id }
            | EdgeChange::Select { id, .. }
            | EdgeChange::Replace { id, .. } => id,
        }
    }
}

impl Identified for Edge {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Applies `changes` in order and returns the next edge collection.
///
/// Endpoints of added edges are not checked here; use [`crate::ops::connect`] for
/// user-initiated connections.
pub fn apply_edge_changes(changes: &[EdgeChange], edges: &[Edge]) -> Vec<Edge> {
    let mut slots = ChangeSlots::new(edges);

    for change in changes {
        match change {
            EdgeChange::Add { item } => slots.add(item.clone()),
            EdgeChange::Remove { id } => slots.remove(id),
            EdgeChange::Select { id, selected } => slots.select(id, *selected),
            EdgeChange::Replace { id, item } => slots.replace(id, item.clone()),
        }
    }

    slots.finish()
}
