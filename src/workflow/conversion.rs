use super::definition::Workflow;
use crate::error::WorkflowConversionError;

/// A trait for foreign canvas documents that can be converted into a `Workflow`.
///
/// Implement this on the structs you deserialize your own editor's save format into,
/// and the rest of the engine can work with it unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use omniflow::error::WorkflowConversionError;
/// use omniflow::workflow::{IntoWorkflow, Node, NodeKind, Workflow};
///
/// struct Step { id: String, title: String }
/// struct Pipeline { steps: Vec<Step> }
///
/// impl IntoWorkflow for Pipeline {
///     fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
///         let mut workflow = Workflow::new("pipeline");
///         for step in self.steps {
///             workflow.nodes.push(Node::new(step.id, NodeKind::Action, step.title));
///         }
///         Ok(workflow)
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the document and converts it into a workflow.
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError>;
}
