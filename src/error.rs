use thiserror::Error;

/// Errors raised by graph mutations that reference other graph elements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error(
        "Node '{missing_node_id}' not found, which is required by a connection from '{source_node_id}' to '{target_node_id}'"
    )]
    NodeNotFound {
        missing_node_id: String,
        source_node_id: String,
        target_node_id: String,
    },
}

/// Errors that can occur while computing a simulation path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Start node '{0}' does not exist in the workflow")]
    UnknownStartNode(String),

    #[error("Workflow has no trigger node to start a simulation from")]
    NoTriggerNode,
}

/// Errors that can occur when reading or writing workflow documents.
#[derive(Error, Debug)]
pub enum WorkflowIoError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize workflow: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Could not access file '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown workflow template '{0}'")]
    UnknownTemplate(String),

    #[error(transparent)]
    Conversion(#[from] WorkflowConversionError),
}

/// Errors that can occur when converting a custom canvas format into a `Workflow`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid custom data: {0}")]
    Validation(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },
}
