use crate::workflow::NodeId;
use serde::{Deserialize, Serialize};

/// One timed visit in a simulation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    pub node_id: NodeId,
    #[serde(rename = "delay")]
    pub delay_ms: u64,
}

impl SimulationStep {
    pub fn new(node_id: impl Into<NodeId>, delay_ms: u64) -> Self {
        Self {
            node_id: node_id.into(),
            delay_ms,
        }
    }
}

/// Why a walk stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SimulationOutcome {
    /// The walk reached a node with no outgoing edges.
    Completed,
    /// The step bound was hit and the walk had revisited `node_id` (its first repeat).
    CycleDetected {
        #[serde(rename = "nodeId")]
        node_id: NodeId,
    },
    /// The step bound was hit on a path that never revisited a node.
    Truncated,
}

impl SimulationOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, SimulationOutcome::Completed)
    }
}

/// The eagerly computed visit order for a test-run visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationPath {
    pub steps: Vec<SimulationStep>,
    pub outcome: SimulationOutcome,
}

impl SimulationPath {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of edges followed, one less than the number of visits.
    pub fn transitions(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.node_id.as_str())
    }

    /// Each visit paired with the offset, from playback start, at which it ends.
    ///
    /// A player highlights `node_id` until `offset_ms`, then moves on.
    pub fn timeline(&self) -> Vec<(&str, u64)> {
        self.steps
            .iter()
            .scan(0u64, |elapsed, step| {
                *elapsed = elapsed.saturating_add(step.delay_ms);
                Some((step.node_id.as_str(), *elapsed))
            })
            .collect()
    }

    /// Total playback duration.
    pub fn duration_ms(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, s| total.saturating_add(s.delay_ms))
    }

    pub fn into_steps(self) -> Vec<SimulationStep> {
        self.steps
    }
}
