//! Listener List CLI Application
//!
//! Command-line scenario runner for the listener-list library. It loads a
//! TOML scenario describing nodes, bulk listener attachments, and dispatch
//! steps, executes it, and emits a text or JSON report.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

mod config;
mod report;

use report::ReportFormat;

/// Listener List - wire and exercise event handlers across node collections
#[derive(Parser, Debug)]
#[command(name = "listener-list-cli")]
#[command(about = "Run event listener wiring scenarios over node collections", long_about = None)]
#[command(version)]
struct Args {
    /// Path to scenario file (scenario.toml)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "txt")]
    format: ReportFormat,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Listener List CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using listener-list library v{}", listener_list::VERSION);

    if let Some(scenario_path) = &args.scenario {
        run_scenario(scenario_path, &args)?;
    } else {
        // No arguments - show help
        println!("Listener List - No scenario specified");
        println!("\nQuick Start:");
        println!("  listener-list-cli --scenario scenario.toml");
        println!("  listener-list-cli --scenario scenario.toml --format json --output report.json");
        println!("\nUse --help for more options");
    }

    Ok(())
}

/// One attached scenario listener with its shared invocation counter
struct RunningListener {
    label: String,
    event: String,
    attached: usize,
    hits: std::rc::Rc<std::cell::Cell<usize>>,
}

/// Load a scenario, wire it up, run the dispatch steps, emit the report
fn run_scenario(scenario_path: &Path, args: &Args) -> Result<()> {
    use config::ListenerAction;
    use listener_list::{add_event_listener_list, Event, Handler, Node};
    use report::{ListenerRow, NodeRow, ScenarioReport};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    println!("═══════════════════════════════════════════════");
    println!("  Listener List - Scenario Mode");
    println!("═══════════════════════════════════════════════\n");

    log::info!("Loading scenario from: {:?}", scenario_path);
    let scenario = config::load_config(scenario_path)?;
    log::debug!("Scenario loaded successfully");

    if let Some(name) = &scenario.scenario.name {
        println!("Scenario: {}", name);
    }
    println!("Nodes: {}", scenario.nodes.len());
    println!("Listeners: {}", scenario.listeners.len());
    println!("Dispatch steps: {}\n", scenario.dispatch.len());

    // Build the node collection in scenario order
    let mut nodes: Vec<Node> = scenario
        .nodes
        .iter()
        .map(|n| Node::new(n.id.clone()))
        .collect();

    // Attach each configured listener across its node list in one bulk pass
    let mut running: Vec<RunningListener> = Vec::new();
    for listener in &scenario.listeners {
        let hits = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&hits);
        let label = listener.label.clone();
        let action = listener.action;
        let handler = Handler::labeled(listener.label.clone(), move |event| {
            counter.set(counter.get() + 1);
            if action == ListenerAction::Print {
                match &event.detail {
                    Some(detail) => log::info!("[{}] '{}' fired with {}", label, event.name, detail),
                    None => log::info!("[{}] '{}' fired", label, event.name),
                }
            }
        });

        let attached = match &listener.nodes {
            Some(ids) => {
                let selected: Vec<&mut Node> = nodes
                    .iter_mut()
                    .filter(|n| ids.iter().any(|id| id == n.id()))
                    .collect();
                let count = selected.len();
                add_event_listener_list(selected, &listener.event, &handler)?;
                count
            }
            None => {
                add_event_listener_list(&mut nodes, &listener.event, &handler)?;
                nodes.len()
            }
        };

        log::debug!("Attached '{}' to {} node(s)", listener.label, attached);
        running.push(RunningListener {
            label: listener.label.clone(),
            event: listener.event.clone(),
            attached,
            hits,
        });
    }

    // Run dispatch steps in scenario order
    let mut dispatch_stats: HashMap<String, (usize, usize)> = HashMap::new();
    let mut total_dispatches = 0;
    let mut total_invocations = 0;
    for step in &scenario.dispatch {
        let node = nodes
            .iter()
            .find(|n| n.id() == step.node)
            .ok_or_else(|| anyhow::anyhow!("Unknown node id in dispatch step: {}", step.node))?;

        let event = match &step.detail {
            Some(detail) => Event::with_detail(step.event.clone(), detail.to_event_value()),
            None => Event::new(step.event.clone()),
        };

        let invoked = node.dispatch(&event);
        total_dispatches += 1;
        total_invocations += invoked;
        let entry = dispatch_stats.entry(step.node.clone()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += invoked;
    }

    println!("✓ Executed {} dispatch step(s)\n", total_dispatches);

    // Build and emit the report
    let mut report = ScenarioReport::new(scenario.scenario.name.clone());
    for rl in &running {
        report.listeners.push(ListenerRow {
            label: rl.label.clone(),
            event: rl.event.clone(),
            attached_nodes: rl.attached,
            invocations: rl.hits.get(),
        });
    }
    for node in &nodes {
        let (dispatches, handlers_invoked) =
            dispatch_stats.get(node.id()).copied().unwrap_or((0, 0));
        report.nodes.push(NodeRow {
            id: node.id().to_string(),
            listeners: node.total_listeners(),
            dispatches,
            handlers_invoked,
        });
    }
    report.total_dispatches = total_dispatches;
    report.total_invocations = total_invocations;

    report.write(args.format, args.output.as_deref())?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
