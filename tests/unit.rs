//! Unit tests for error messages, formatting and validation reports.
mod common;
use common::*;
use omniflow::prelude::*;
use omniflow::validation::has_errors;

#[test]
fn test_error_display() {
    let err = GraphError::NodeNotFound {
        missing_node_id: "ghost".to_string(),
        source_node_id: "a".to_string(),
        target_node_id: "ghost".to_string(),
    };
    assert!(err.to_string().contains("ghost"));
    assert!(err.to_string().contains("'a'"));

    let sim_err = SimulationError::UnknownStartNode("nowhere".to_string());
    assert!(sim_err.to_string().contains("nowhere"));

    let io_err = WorkflowIoError::UnknownTemplate("missing".to_string());
    assert!(io_err.to_string().contains("missing"));
}

#[test]
fn test_path_formatter_completed() {
    let workflow = create_simple_workflow();
    let path = Simulator::default()
        .generate("a", &workflow.nodes, &workflow.edges)
        .unwrap();

    assert_eq!(PathFormatter::format_path(&path), "a -> b");
    assert_eq!(
        PathFormatter::format_with_labels(&path, &workflow.nodes),
        "Webhook received -> Send email"
    );
}

#[test]
fn test_path_formatter_reports_cycle() {
    let nodes = vec![Node::new("a", NodeKind::Trigger, "")];
    let edges = vec![Edge::new("loop", "a", "a")];
    let path = Simulator::builder()
        .max_steps(2)
        .build()
        .generate("a", &nodes, &edges)
        .unwrap();

    // Empty labels fall back to ids.
    assert_eq!(
        PathFormatter::format_with_labels(&path, &nodes),
        "a -> a -> a (cycle at 'a', stopped after 2 steps)"
    );
}

#[test]
fn test_validate_clean_workflow() {
    assert!(validate(&create_branching_workflow()).is_empty());
    assert!(validate(&create_simple_workflow()).is_empty());
}

#[test]
fn test_validate_reports_each_violation() {
    let mut workflow = create_branching_workflow();
    workflow.nodes.push(Node::new("notify", NodeKind::Action, "Duplicate"));
    workflow.edges.push(Edge::new("e_dangling", "report", "gone"));
    workflow.edges.push(Edge::new("e_into_trigger", "report", "start"));
    workflow.edges.push(Edge::new("e_no_handle", "check", "report"));
    workflow.edges.push(Edge::new("e_second_true", "check", "report").from_handle("true"));
    workflow.edges.push(Edge::new("e_self", "archive", "archive"));
    workflow.edges.push(Edge::new("e_self", "archive", "report"));

    let issues = validate(&workflow);

    assert!(issues.contains(&ValidationIssue::DuplicateNodeId {
        node_id: "notify".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::DuplicateEdgeId {
        edge_id: "e_self".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::DanglingEdge {
        edge_id: "e_dangling".to_string(),
        node_id: "gone".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::IncomingEdgeOnTrigger {
        edge_id: "e_into_trigger".to_string(),
        node_id: "start".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::InvalidConditionHandle {
        edge_id: "e_no_handle".to_string(),
        node_id: "check".to_string(),
        handle: None
    }));
    assert!(issues.contains(&ValidationIssue::TooManyConditionBranches {
        node_id: "check".to_string(),
        handle: "true".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::SelfLoop {
        edge_id: "e_self".to_string(),
        node_id: "archive".to_string()
    }));
    assert!(has_errors(&issues));
}

#[test]
fn test_warnings_alone_do_not_block() {
    let mut workflow = create_simple_workflow();
    workflow.edges.push(Edge::new("e_back", "b", "a"));

    let issues = validate(&workflow);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity(), Severity::Warning);
    assert!(!has_errors(&issues));
}
