use crate::simulation::{SimulationOutcome, SimulationPath};
use crate::workflow::Node;
use ahash::AHashMap;
use itertools::Itertools;

/// Formats simulation paths into human-readable strings.
pub struct PathFormatter;

impl PathFormatter {
    /// Formats a path by node id, e.g. `a -> b -> c`.
    pub fn format_path(path: &SimulationPath) -> String {
        let body = path.node_ids().join(" -> ");
        format!("{}{}", body, Self::format_outcome(path))
    }

    /// Formats a path using node labels where known, falling back to ids.
    pub fn format_with_labels(path: &SimulationPath, nodes: &[Node]) -> String {
        let labels: AHashMap<&str, &str> = nodes
            .iter()
            .map(|n| (n.id.as_str(), n.data.label.as_str()))
            .collect();
        let body = path
            .node_ids()
            .map(|id| labels.get(id).copied().filter(|l| !l.is_empty()).unwrap_or(id))
            .join(" -> ");
        format!("{}{}", body, Self::format_outcome(path))
    }

    /// The suffix describing why the walk stopped. Empty for completed walks.
    fn format_outcome(path: &SimulationPath) -> String {
        match &path.outcome {
            SimulationOutcome::Completed => String::new(),
            SimulationOutcome::CycleDetected { node_id } => format!(
                " (cycle at '{}', stopped after {} steps)",
                node_id,
                path.transitions()
            ),
            SimulationOutcome::Truncated => {
                format!(" (truncated after {} steps)", path.transitions())
            }
        }
    }
}
