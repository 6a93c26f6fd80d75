use clap::Parser;
use omniflow::canvas::CanvasDocument;
use omniflow::prelude::*;
use omniflow::validation::has_errors;
use std::fs;
use std::time::Instant;

/// Validate and simulate workflow documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    workflow_path: Option<String>,

    /// Load a built-in template instead of a file
    #[arg(short, long, conflicts_with = "workflow_path")]
    template: Option<String>,

    /// Treat the input file as a React-Flow-style canvas document
    #[arg(long)]
    canvas: bool,

    /// Node to start the simulation from (defaults to the first trigger)
    #[arg(short, long)]
    start: Option<String>,

    /// Prefer edges leaving through this handle when a node branches
    #[arg(long)]
    prefer_handle: Option<String>,

    /// Maximum number of edges to follow
    #[arg(long)]
    max_steps: Option<usize>,

    /// Playback delay per visited node, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Path to an editor config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Delete these nodes (and their edges) before simulating
    #[arg(long = "delete")]
    delete: Vec<String>,

    /// Write the resulting workflow to this path
    #[arg(short, long)]
    output: Option<String>,

    /// List the built-in templates and exit
    #[arg(long)]
    list_templates: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.list_templates {
        for template in builtin_templates() {
            println!("{:<16} {}", template.name, template.description);
        }
        return;
    }

    let total_start = Instant::now();

    // --- 1. Loading ---
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    let config = apply_overrides(config, &cli);
    let workflow = load_workflow(&cli);
    println!(
        "Loaded workflow '{}' ({} nodes, {} edges)",
        workflow.name,
        workflow.nodes.len(),
        workflow.edges.len()
    );

    let mut editor = WorkflowEditor::builder(workflow).with_config(config).build();

    // --- 2. Edits ---
    for id in &cli.delete {
        match editor.delete_node(id) {
            Some(node) => println!("Deleted node '{}' ({})", node.id, node.data.label),
            None => println!("Node '{}' not found, nothing deleted", id),
        }
    }

    // --- 3. Validation ---
    let issues = editor.validate();
    if issues.is_empty() {
        println!("\nValidation passed.");
    } else {
        println!("\nValidation found {} issue(s):", issues.len());
        for issue in &issues {
            println!("  [{:?}] {}", issue.severity(), issue);
        }
    }

    // --- 4. Simulation ---
    let start = cli
        .start
        .clone()
        .or_else(|| editor.workflow().first_trigger().map(|n| n.id.clone()))
        .unwrap_or_else(|| exit_with_error("No --start given and the workflow has no trigger node."));

    let sim_start = Instant::now();
    let path = editor
        .simulate(&start)
        .unwrap_or_else(|e| exit_with_error(&format!("Simulation failed: {}", e)));
    let sim_duration = sim_start.elapsed();

    println!("\nSimulation from '{}':", start);
    println!("  {}", PathFormatter::format_with_labels(&path, editor.nodes()));
    for (node_id, offset) in path.timeline() {
        println!("  {:>8} ms  {}", offset, node_id);
    }
    println!("  Outcome: {:?}", path.outcome);

    // --- 5. Output ---
    if let Some(output) = &cli.output {
        editor
            .workflow()
            .save(output)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workflow: {}", e)));
        println!("\nSaved workflow to '{}'", output);
    }

    println!("\n--- Summary ---");
    println!("Steps:            {}", path.len());
    println!("Playback:         {} ms", path.duration_ms());
    println!("Simulation:       {:?}", sim_duration);
    println!("Total Execution:  {:?}", total_start.elapsed());

    if has_errors(&issues) {
        std::process::exit(2);
    }
}

fn apply_overrides(mut config: EditorConfig, cli: &Cli) -> EditorConfig {
    if let Some(handle) = &cli.prefer_handle {
        config.simulation.branch = BranchPolicy::PreferHandle(handle.clone());
    }
    if let Some(max_steps) = cli.max_steps {
        config.simulation.max_steps = max_steps;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.simulation.step_delay_ms = delay_ms;
    }
    config
}

fn load_workflow(cli: &Cli) -> Workflow {
    if let Some(name) = &cli.template {
        return load_template(name)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load template: {}", e)));
    }

    let path = cli.workflow_path.as_deref().unwrap_or_else(|| {
        exit_with_error("A workflow path or --template is required.");
    });

    if cli.canvas {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read canvas file '{}': {}", path, e))
        });
        CanvasDocument::from_json(&json)
            .and_then(IntoWorkflow::into_workflow)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert canvas: {}", e)))
    } else {
        Workflow::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)))
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
