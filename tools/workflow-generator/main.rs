use clap::Parser;
use omniflow::editor::WorkflowEditor;
use omniflow::error::GraphError;
use omniflow::ops::ConnectRequest;
use omniflow::workflow::{
    FALSE_HANDLE, NodeKind, PaletteEntry, Position, TRUE_HANDLE, Workflow, default_palette,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A CLI tool to generate random workflows for exercising the editor and simulator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated workflow JSON to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of nodes after the trigger
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Probability that a step is a condition node
    #[arg(long, default_value_t = 0.25)]
    branch_probability: f64,

    /// Probability that a node gets an extra edge back to an earlier node
    #[arg(long, default_value_t = 0.0)]
    loop_probability: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    for (flag, p) in [
        ("--branch-probability", cli.branch_probability),
        ("--loop-probability", cli.loop_probability),
    ] {
        if !(0.0..=1.0).contains(&p) {
            eprintln!("Error: {} ({}) must be between 0 and 1", flag, p);
            std::process::exit(1);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a workflow with {} steps...", cli.nodes);
    let workflow = generate_workflow(&mut rng, &cli)?;
    workflow.save(&cli.output)?;

    println!(
        "Successfully generated {} nodes and {} edges into '{}'",
        workflow.nodes.len(),
        workflow.edges.len(),
        cli.output
    );
    Ok(())
}

/// Builds a mostly-linear workflow through the editor, so ids and edges follow the
/// same rules as user-built graphs.
fn generate_workflow(rng: &mut StdRng, cli: &Cli) -> Result<Workflow, GraphError> {
    let palette = default_palette();
    let triggers: Vec<&PaletteEntry> = palette.iter().filter(|e| e.kind == NodeKind::Trigger).collect();
    let actions: Vec<&PaletteEntry> = palette.iter().filter(|e| e.kind == NodeKind::Action).collect();
    let conditions: Vec<&PaletteEntry> = palette
        .iter()
        .filter(|e| e.kind == NodeKind::Condition)
        .collect();

    let mut editor = WorkflowEditor::new("Generated workflow");
    editor.set_description(format!("Random workflow with {} steps", cli.nodes));

    let trigger = editor.add_node(pick(rng, &triggers), Position::new(0.0, 0.0));
    let mut previous = trigger.id;
    // A condition's unused `false` handle, waiting for an action to hang off it.
    let mut pending_false: Option<String> = None;

    for i in 1..=cli.nodes {
        let y = i as f64 * 120.0;
        let is_condition = rng.random_bool(cli.branch_probability);
        let entry = if is_condition {
            pick(rng, &conditions)
        } else {
            pick(rng, &actions)
        };
        let node = editor.add_node(entry, Position::new(rng.random_range(-40.0..40.0), y));

        let previous_is_condition = editor
            .node(&previous)
            .is_some_and(|n| n.kind == NodeKind::Condition);
        let mut request = ConnectRequest::new(&previous, &node.id);
        if previous_is_condition {
            request = request.from_handle(TRUE_HANDLE);
            // Back-to-back conditions: the older one's `false` branch joins here too.
            if let Some(condition) = pending_false.replace(previous.clone()) {
                editor.connect(ConnectRequest::new(condition, &node.id).from_handle(FALSE_HANDLE))?;
            }
        } else if let Some(condition) = pending_false.take() {
            editor.connect(ConnectRequest::new(condition, &node.id).from_handle(FALSE_HANDLE))?;
        }
        editor.connect(request)?;

        if i > 1 && !is_condition && rng.random_bool(cli.loop_probability) {
            let back = editor.nodes()[rng.random_range(1..i)].id.clone();
            editor.connect(ConnectRequest::new(&node.id, back))?;
        }
        previous = node.id;
    }

    Ok(editor.into_workflow())
}

fn pick<'a>(rng: &mut StdRng, entries: &[&'a PaletteEntry]) -> &'a PaletteEntry {
    entries[rng.random_range(0..entries.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(nodes: usize, branch_probability: f64) -> Cli {
        Cli {
            output: String::new(),
            nodes,
            branch_probability,
            loop_probability: 0.0,
            seed: Some(7),
        }
    }

    #[test]
    fn test_consecutive_conditions_keep_every_false_branch() {
        let mut rng = StdRng::seed_from_u64(7);
        let workflow = generate_workflow(&mut rng, &cli(6, 1.0)).unwrap();

        let false_sources: Vec<&str> = workflow
            .edges
            .iter()
            .filter(|e| e.source_handle.as_deref() == Some(FALSE_HANDLE))
            .map(|e| e.source.as_str())
            .collect();
        // The last two conditions have nothing after them to branch into.
        let expected: Vec<&str> = workflow.nodes[1..5].iter().map(|n| n.id.as_str()).collect();
        assert_eq!(false_sources, expected);
    }

    #[test]
    fn test_false_branch_joins_next_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let workflow = generate_workflow(&mut rng, &cli(4, 0.0)).unwrap();

        assert_eq!(workflow.nodes.len(), 5);
        assert_eq!(workflow.edges.len(), 4);
        assert!(workflow.edges.iter().all(|e| e.source_handle.is_none()));
    }
}
