//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! omniflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use omniflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = Workflow::from_file("path/to/workflow.json")?;
//! for issue in validate(&workflow) {
//!     println!("{}", issue);
//! }
//!
//! let path = Simulator::default().generate_from_trigger(&workflow)?;
//! println!("{}", PathFormatter::format_path(&path));
//! # Ok(())
//! # }
//! ```

// Editing
pub use crate::changes::{EdgeChange, NodeChange, apply_edge_changes, apply_node_changes};
pub use crate::editor::{EditorConfig, WorkflowEditor};
pub use crate::ops::ConnectRequest;
pub use crate::store::GraphStore;

// Simulation
pub use crate::simulation::{
    BranchPolicy, SimulationConfig, SimulationOutcome, SimulationPath, SimulationStep, Simulator,
    generate_path,
};

// Workflow model
pub use crate::workflow::{
    Edge, IntoWorkflow, Node, NodeData, NodeDataPatch, NodeKind, PaletteEntry, Position,
    Workflow, WorkflowTemplate, builtin_templates, default_palette, load_template,
};

// Validation
pub use crate::validation::{Severity, ValidationIssue, validate};

// Error types
pub use crate::error::{GraphError, SimulationError, WorkflowConversionError, WorkflowIoError};

// Path formatting
pub use crate::trace::PathFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
