//! Deterministic "test run" paths for the workflow simulation view.
//!
//! The simulator does not evaluate conditions. From the start node it repeatedly
//! follows one outgoing edge, chosen by the configured [`BranchPolicy`], until it
//! reaches a leaf or has followed `max_steps` edges. A revisit is remembered, so a
//! walk cut short by a cycle is reported differently from one cut short by length.

use crate::error::SimulationError;
use crate::workflow::{Edge, Node, Workflow};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

mod path;

pub use path::{SimulationOutcome, SimulationPath, SimulationStep};

/// Visualization pacing per visited node.
pub const DEFAULT_STEP_DELAY_MS: u64 = 1000;
/// Maximum number of edges a single walk follows.
pub const DEFAULT_MAX_STEPS: usize = 20;

/// How to pick among several outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "handle", rename_all = "camelCase")]
pub enum BranchPolicy {
    /// Take the first outgoing edge in collection order.
    #[default]
    FirstEdge,
    /// Take the first outgoing edge leaving through this source handle, falling back
    /// to the first edge when none does.
    PreferHandle(String),
}

/// Tunables for the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub step_delay_ms: u64,
    pub max_steps: usize,
    pub branch: BranchPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            max_steps: DEFAULT_MAX_STEPS,
            branch: BranchPolicy::FirstEdge,
        }
    }
}

/// Computes simulation paths with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

pub struct SimulatorBuilder {
    config: SimulationConfig,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
    pub fn step_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.step_delay_ms = delay_ms;
        self
    }
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = max_steps;
        self
    }
    pub fn prefer_handle(mut self, handle: impl Into<String>) -> Self {
        self.config.branch = BranchPolicy::PreferHandle(handle.into());
        self
    }
    pub fn build(self) -> Simulator {
        Simulator {
            config: self.config,
        }
    }
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Walks the graph from `start`.
    ///
    /// Edges pointing at nodes that are not in `nodes` are never followed.
    pub fn generate(
        &self,
        start: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<SimulationPath, SimulationError> {
        let present: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        if !present.contains(start) {
            return Err(SimulationError::UnknownStartNode(start.to_string()));
        }

        let delay = self.config.step_delay_ms;
        let mut steps = vec![SimulationStep::new(start, delay)];
        let mut visited: AHashSet<&str> = AHashSet::new();
        visited.insert(start);
        let mut first_revisit: Option<&str> = None;
        let mut current = start;

        let outcome = loop {
            let Some(edge) = self.next_edge(current, edges, &present) else {
                break SimulationOutcome::Completed;
            };
            if steps.len() > self.config.max_steps {
                break match first_revisit {
                    Some(node_id) => SimulationOutcome::CycleDetected {
                        node_id: node_id.to_string(),
                    },
                    None => SimulationOutcome::Truncated,
                };
            }

            let target = edge.target.as_str();
            if !visited.insert(target) && first_revisit.is_none() {
                first_revisit = Some(target);
            }
            steps.push(SimulationStep::new(target, delay));
            current = target;
        };

        if !outcome.is_complete() {
            log::debug!(
                "Simulation from '{}' stopped after {} steps: {:?}",
                start,
                steps.len() - 1,
                outcome
            );
        }
        Ok(SimulationPath { steps, outcome })
    }

    /// Walks `workflow` from its first trigger node.
    pub fn generate_from_trigger(
        &self,
        workflow: &Workflow,
    ) -> Result<SimulationPath, SimulationError> {
        let trigger = workflow
            .first_trigger()
            .ok_or(SimulationError::NoTriggerNode)?;
        self.generate(&trigger.id, &workflow.nodes, &workflow.edges)
    }

    fn next_edge<'e>(
        &self,
        current: &str,
        edges: &'e [Edge],
        present: &AHashSet<&str>,
    ) -> Option<&'e Edge> {
        let mut outgoing = edges.iter().filter(|e| {
            e.source == current && {
                let followable = present.contains(e.target.as_str());
                if !followable {
                    log::debug!("Skipping edge '{}' to missing node '{}'", e.id, e.target);
                }
                followable
            }
        });

        match &self.config.branch {
            BranchPolicy::FirstEdge => outgoing.next(),
            BranchPolicy::PreferHandle(handle) => {
                let candidates: Vec<&Edge> = outgoing.collect();
                candidates
                    .iter()
                    .find(|e| e.source_handle.as_deref() == Some(handle.as_str()))
                    .or_else(|| candidates.first())
                    .copied()
            }
        }
    }
}

/// Computes a path with the default configuration and returns just its steps.
pub fn generate_path(
    start: &str,
    nodes: &[Node],
    edges: &[Edge],
) -> Result<Vec<SimulationStep>, SimulationError> {
    Simulator::default()
        .generate(start, nodes, edges)
        .map(SimulationPath::into_steps)
}
