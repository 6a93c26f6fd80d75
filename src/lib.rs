//! # OmniFlow - Workflow Graph Editing and Simulation Engine
//!
//! **OmniFlow** is the engine behind a visual workflow builder. Users drag trigger,
//! action and condition nodes onto a canvas and wire them together; OmniFlow owns
//! the resulting graph, applies the canvas's change-sets to it, guards connections,
//! and computes the deterministic walk the builder animates on "test run".
//!
//! ## Core Workflow
//!
//! 1.  **Open a Workflow**: start empty, from a built-in template, from a JSON document, or from a foreign canvas format via the `IntoWorkflow` trait.
//! 2.  **Edit**: drive a `WorkflowEditor` with palette drops, change descriptors, connections and deletes. Deleting a node removes its edges in the same step.
//! 3.  **Validate**: run `validate` to list rule violations before saving.
//! 4.  **Simulate**: ask the editor (or a `Simulator`) for the timed visit order from a start node.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use omniflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let palette = default_palette();
//!     let mut editor = WorkflowEditor::new("Revenue watch");
//!
//!     let trigger = editor.add_node(&palette[2], Position::new(0.0, 0.0));
//!     let check = editor.add_node(&palette[6], Position::new(0.0, 120.0));
//!     let alert = editor.add_node(&palette[5], Position::new(0.0, 240.0));
//!
//!     editor.connect(ConnectRequest::new(&trigger.id, &check.id))?;
//!     editor.connect(ConnectRequest::new(&check.id, &alert.id).from_handle("true"))?;
//!
//!     let path = editor.simulate(&trigger.id)?;
//!     println!("{}", PathFormatter::format_with_labels(&path, editor.nodes()));
//!
//!     editor.workflow().save("revenue-watch.json")?;
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod changes;
pub mod editor;
pub mod error;
pub mod ids;
pub mod ops;
pub mod prelude;
pub mod simulation;
pub mod store;
pub mod trace;
pub mod validation;
pub mod workflow;
