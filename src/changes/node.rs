use super::{ChangeSlots, Identified};
use crate::workflow::{Node, NodeId, Position};
use serde::{Deserialize, Serialize};

/// One canvas-originated mutation of the node collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    /// Append a node, unless one with the same id exists.
    Add { item: Node },
    /// Drop a node. Edges are not touched at this layer.
    Remove { id: NodeId },
    /// Move a node to an absolute position. `None` leaves the position as is,
    /// which canvases emit when a drag ends.
    Position {
        id: NodeId,
        #[serde(default)]
        position: Option<Position>,
        #[serde(default)]
        dragging: bool,
    },
    /// Move a node by a delta.
    Translate { id: NodeId, dx: f64, dy: f64 },
    Select { id: NodeId, selected: bool },
    /// Swap the whole node for `item`, keeping the original id.
    Replace { id: NodeId, item: Node },
}

impl NodeChange {
    /// The id this change refers to.
    pub fn id(&self) -> &str {
        match self {
            NodeChange::Add { item } => &item.id,
            NodeChange::Remove { id }
            | NodeChange::Position { id, .. }
            | NodeChange::Translate { id, .. }
            | NodeChange::Select { id, .. }
            | NodeChange::Replace { id, .. } => id,
        }
    }
}

impl Identified for Node {
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

/// Applies `changes` in order and returns the next node collection.
pub fn apply_node_changes(changes: &[NodeChange], nodes: &[Node]) -> Vec<Node> {
    let mut slots = ChangeSlots::new(nodes);

    for change in changes {
        match change {
            NodeChange::Add { item } => slots.add(item.clone()),
            NodeChange::Remove { id } => slots.remove(id),
            NodeChange::Position { id, position, .. } => {
                if let Some(position) = position {
                    slots.update(id, |node| node.position = *position);
                }
            }
            NodeChange::Translate { id, dx, dy } => {
                slots.update(id, |node| node.position = node.position.translated(*dx, *dy));
            }
            NodeChange::Select { id, selected } => slots.select(id, *selected),
            NodeChange::Replace { id, item } => slots.replace(id, item.clone()),
        }
    }

    slots.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::NodeKind;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new("a", NodeKind::Trigger, "Start"),
            Node::new("b", NodeKind::Action, "Email").at(100.0, 0.0),
        ]
    }

    #[test]
    fn test_position_without_coordinates_is_a_noop() {
        let before = nodes();
        let changes = vec![NodeChange::Position {
            id: "b".to_string(),
            position: None,
            dragging: false,
        }];
        assert_eq!(apply_node_changes(&changes, &before), before);
    }

    #[test]
    fn test_changes_apply_to_nodes_added_in_same_batch() {
        let changes = vec![
            NodeChange::Add {
                item: Node::new("c", NodeKind::Condition, "Check"),
            },
            NodeChange::Translate {
                id: "c".to_string(),
                dx: 5.0,
                dy: -5.0,
            },
        ];
        let after = apply_node_changes(&changes, &nodes());
        assert_eq!(after.len(), 3);
        assert_eq!(after[2].position, Position::new(5.0, -5.0));
    }

    #[test]
    fn test_change_descriptor_json_shape() {
        let change: NodeChange =
            serde_json::from_str(r#"{"type":"select","id":"a","selected":true}"#).unwrap();
        assert_eq!(change.id(), "a");
        assert_eq!(
            change,
            NodeChange::Select {
                id: "a".to_string(),
                selected: true
            }
        );
    }
}
