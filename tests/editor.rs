//! Tests for the editing session and the collection-level operations it wraps.
mod common;
use common::*;
use omniflow::ids::IdAllocator;
use omniflow::ops;
use omniflow::prelude::*;
use serde_json::json;

#[test]
fn test_add_node_uses_palette_defaults() {
    let mut editor = WorkflowEditor::new("test");
    let entry = palette_entry("Send email");

    let node = editor.add_node(&entry, Position::new(80.0, 40.0));

    assert_eq!(node.kind, NodeKind::Action);
    assert_eq!(node.position, Position::new(80.0, 40.0));
    assert_eq!(node.data.label, "Send email");
    assert_eq!(node.data.icon.as_deref(), Some("mail"));
    assert_eq!(node.data.config, entry.default_config);
    assert_eq!(editor.nodes(), &[node]);
}

#[test]
fn test_add_node_allocates_unique_ids() {
    let mut editor = WorkflowEditor::new("test");
    let entry = palette_entry("Webhook");
    let first = editor.add_node(&entry, Position::default());
    let second = editor.add_node(&entry, Position::default());

    assert_ne!(first.id, second.id);
    assert_eq!(editor.nodes().len(), 2);
}

#[test]
fn test_add_then_delete_restores_nodes() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();
    let before = editor.nodes().to_vec();

    let node = editor.add_node(&palette_entry("If / else"), Position::new(5.0, 5.0));
    assert_eq!(editor.nodes().len(), before.len() + 1);

    editor.delete_node(&node.id);
    assert_eq!(editor.nodes(), before.as_slice());
}

#[test]
fn test_update_node_merges_data() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();

    let found = editor.update_node(
        "b",
        NodeDataPatch::label("Email finance").with_config("to", json!("finance@example.com")),
    );
    assert!(found);

    let node = editor.node("b").unwrap();
    assert_eq!(node.data.label, "Email finance");
    assert_eq!(node.data.config["to"], json!("finance@example.com"));

    let before = editor.workflow();
    assert!(!editor.update_node("missing", NodeDataPatch::label("x")));
    assert_eq!(editor.workflow(), before);
}

#[test]
fn test_connect_creates_edge_with_handles() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();

    let edge = editor
        .connect(ConnectRequest::new("archive", "report").to_handle("in"))
        .expect("both nodes exist");

    assert_eq!(edge.source, "archive");
    assert_eq!(edge.target, "report");
    assert_eq!(edge.source_handle, None);
    assert_eq!(edge.target_handle.as_deref(), Some("in"));
    assert_eq!(editor.edges().last(), Some(&edge));
}

#[test]
fn test_connect_to_missing_node_fails_without_changes() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();
    let edges_before = editor.edges().to_vec();

    let result = editor.connect(ConnectRequest::new("a", "ghost"));
    match result {
        Err(GraphError::NodeNotFound {
            missing_node_id,
            source_node_id,
            target_node_id,
        }) => {
            assert_eq!(missing_node_id, "ghost");
            assert_eq!(source_node_id, "a");
            assert_eq!(target_node_id, "ghost");
        }
        other => panic!("Expected NodeNotFound error, got {:?}", other),
    }

    let result = editor.connect(ConnectRequest::new("phantom", "b"));
    assert!(matches!(
        result,
        Err(GraphError::NodeNotFound { ref missing_node_id, .. }) if missing_node_id == "phantom"
    ));
    assert_eq!(editor.edges(), edges_before.as_slice());
}

#[test]
fn test_delete_node_cascades_to_edges() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();

    let removed = editor.delete_node("check").expect("node exists");
    assert_eq!(removed.id, "check");

    let edge_ids: Vec<&str> = editor.edges().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["e_notify_report"]);
    assert!(validate(&editor.workflow()).is_empty());
}

#[test]
fn test_delete_unknown_node_is_a_noop() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();
    let before = editor.workflow();
    assert!(editor.delete_node("missing").is_none());
    assert_eq!(editor.workflow(), before);
}

#[test]
fn test_stateless_delete_leaves_dangling_edge_until_purged() {
    let workflow = create_simple_workflow();
    let mut nodes = workflow.nodes.clone();
    let mut edges = workflow.edges.clone();

    ops::delete_node(&mut nodes, "b");
    assert_eq!(nodes.len(), 1);
    assert_eq!(edges.len(), 1, "edge cleanup is the caller's job at this layer");

    let purged = ops::purge_dangling_edges(&nodes, &mut edges);
    assert_eq!(purged, 1);
    assert!(edges.is_empty());
}

#[test]
fn test_stateless_connect_leaves_edges_on_failure() {
    let workflow = create_simple_workflow();
    let mut edges = workflow.edges.clone();
    let mut ids = IdAllocator::new("edge");

    let result = ops::connect(
        &workflow.nodes,
        &mut edges,
        &mut ids,
        ConnectRequest::new("x", "b"),
    );
    assert!(result.is_err());
    assert_eq!(edges, workflow.edges);
}

#[test]
fn test_remove_change_purges_edges_in_editor() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();
    editor.apply_node_changes(&[NodeChange::Remove {
        id: "a".to_string(),
    }]);
    assert!(editor.edges().is_empty());
}

#[test]
fn test_disconnect() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();
    let removed = editor.disconnect("e_check_archive").expect("edge exists");
    assert_eq!(removed.target, "archive");
    assert_eq!(editor.edges().len(), 3);
    assert!(editor.disconnect("e_check_archive").is_none());
}

#[test]
fn test_ids_after_load_do_not_collide() {
    let mut workflow = Workflow::new("loaded");
    workflow.nodes.push(Node::new("node_1", NodeKind::Trigger, "Start"));
    workflow.nodes.push(Node::new("node_5", NodeKind::Action, "Step"));
    workflow.edges.push(Edge::new("edge_2", "node_1", "node_5"));

    let mut editor = WorkflowEditor::builder(workflow).build();
    let node = editor.add_node(&palette_entry("Create record"), Position::default());
    let edge = editor
        .connect(ConnectRequest::new("node_5", &node.id))
        .unwrap();

    assert_eq!(node.id, "node_6");
    assert_eq!(edge.id, "edge_3");
    assert!(validate(&editor.workflow()).is_empty());
}

#[test]
fn test_custom_id_prefixes() {
    let config = EditorConfig {
        node_id_prefix: "step".to_string(),
        edge_id_prefix: "link".to_string(),
        ..EditorConfig::default()
    };
    let mut editor = WorkflowEditor::builder(Workflow::new("prefixed"))
        .with_config(config)
        .build();

    let a = editor.add_node(&palette_entry("Schedule"), Position::default());
    let b = editor.add_node(&palette_entry("Send email"), Position::default());
    let edge = editor.connect(ConnectRequest::new(&a.id, &b.id)).unwrap();

    assert_eq!(a.id, "step_1");
    assert_eq!(b.id, "step_2");
    assert_eq!(edge.id, "link_1");
}

#[test]
fn test_select_only_and_clear_selection() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();
    editor.apply_edge_changes(&[EdgeChange::Select {
        id: "e_start_check".to_string(),
        selected: true,
    }]);

    editor.select_only("notify");
    let selected: Vec<&str> = editor
        .nodes()
        .iter()
        .filter(|n| n.selected)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(selected, vec!["notify"]);
    assert!(editor.edges().iter().all(|e| !e.selected));

    editor.clear_selection();
    assert!(editor.nodes().iter().all(|n| !n.selected));
}

#[test]
fn test_workflow_snapshot_keeps_metadata() {
    let mut editor = WorkflowEditor::builder(create_branching_workflow()).build();
    editor.rename("Renamed");
    editor.set_description("Updated description");

    let workflow = editor.workflow();
    assert_eq!(workflow.name, "Renamed");
    assert_eq!(workflow.description, "Updated description");
    assert_eq!(workflow.nodes.len(), 5);
    assert_eq!(editor.into_workflow(), workflow);
}

#[test]
fn test_edge_changes_drop_dangling_edges() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();

    editor.apply_edge_changes(&[EdgeChange::Add {
        item: Edge::new("e9", "a", "ghost"),
    }]);
    assert!(editor.store().edge("e9").is_none());
    assert_eq!(editor.edges().len(), 1);

    editor.apply_edge_changes(&[EdgeChange::Replace {
        id: "e1".to_string(),
        item: Edge::new("e1", "ghost", "b"),
    }]);
    assert!(editor.edges().is_empty());
    assert!(editor.validate().is_empty());
}

#[test]
fn test_edge_changes_keep_valid_additions() {
    let mut editor = WorkflowEditor::builder(create_simple_workflow()).build();

    editor.apply_edge_changes(&[EdgeChange::Add {
        item: Edge::new("e2", "b", "a"),
    }]);
    assert_eq!(editor.edges().len(), 2);
    assert!(editor.store().edge("e2").is_some());
}
