//! Common test utilities for building workflows.
use omniflow::prelude::*;
use omniflow::workflow::{FALSE_HANDLE, TRUE_HANDLE, find_entry};

/// Creates the minimal two-node workflow: trigger `a` feeding action `b`.
#[allow(dead_code)]
pub fn create_simple_workflow() -> Workflow {
    Workflow {
        name: "simple".to_string(),
        description: String::new(),
        nodes: vec![
            Node::new("a", NodeKind::Trigger, "Webhook received"),
            Node::new("b", NodeKind::Action, "Send email").at(0.0, 120.0),
        ],
        edges: vec![Edge::new("e1", "a", "b")],
    }
}

/// Creates a branching workflow.
///
/// `start -> check`, then `check --false--> archive` listed before
/// `check --true--> notify`, followed by `notify -> report`.
#[allow(dead_code)]
pub fn create_branching_workflow() -> Workflow {
    Workflow {
        name: "branching".to_string(),
        description: "Condition with both branches".to_string(),
        nodes: vec![
            Node::new("start", NodeKind::Trigger, "KPI updated"),
            Node::new("check", NodeKind::Condition, "Below target?").at(0.0, 120.0),
            Node::new("archive", NodeKind::Action, "Create record").at(150.0, 240.0),
            Node::new("notify", NodeKind::Action, "Notify Slack").at(-150.0, 240.0),
            Node::new("report", NodeKind::Action, "Email report").at(-150.0, 360.0),
        ],
        edges: vec![
            Edge::new("e_start_check", "start", "check"),
            Edge::new("e_check_archive", "check", "archive").from_handle(FALSE_HANDLE),
            Edge::new("e_check_notify", "check", "notify").from_handle(TRUE_HANDLE),
            Edge::new("e_notify_report", "notify", "report"),
        ],
    }
}

/// Creates a straight chain `n0 -> n1 -> ... -> n{len-1}`.
#[allow(dead_code)]
pub fn create_chain(len: usize) -> (Vec<Node>, Vec<Edge>) {
    let nodes = (0..len)
        .map(|i| Node::new(format!("n{}", i), NodeKind::Action, format!("Step {}", i)))
        .collect();
    let edges = (1..len)
        .map(|i| Edge::new(format!("e{}", i), format!("n{}", i - 1), format!("n{}", i)))
        .collect();
    (nodes, edges)
}

/// Looks up a palette entry by label, panicking if the built-in palette lacks it.
#[allow(dead_code)]
pub fn palette_entry(label: &str) -> PaletteEntry {
    let palette = default_palette();
    find_entry(&palette, label)
        .cloned()
        .unwrap_or_else(|| panic!("palette has no '{}' entry", label))
}
