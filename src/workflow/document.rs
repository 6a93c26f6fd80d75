use super::definition::Workflow;
use crate::error::WorkflowIoError;
use std::fs;

impl Workflow {
    /// Parses a workflow from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, WorkflowIoError> {
        serde_json::from_str(json).map_err(WorkflowIoError::Parse)
    }

    /// Serializes the workflow to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WorkflowIoError> {
        serde_json::to_string_pretty(self).map_err(WorkflowIoError::Serialize)
    }

    /// Loads a workflow from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, WorkflowIoError> {
        let json = fs::read_to_string(path).map_err(|source| WorkflowIoError::File {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Writes the workflow to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), WorkflowIoError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| WorkflowIoError::File {
            path: path.to_string(),
            source,
        })?;
        log::debug!(
            "Saved workflow '{}' ({} nodes, {} edges) to '{}'",
            self.name,
            self.nodes.len(),
            self.edges.len(),
            path
        );
        Ok(())
    }
}
