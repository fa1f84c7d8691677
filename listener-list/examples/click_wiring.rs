//! Standalone listener wiring demo
//!
//! Builds a node collection, attaches counting handlers in bulk, simulates
//! a round of click and change events, then removes the click handler and
//! shows that further clicks reach nothing.
//!
//! Usage:
//!   click_wiring [--nodes <count>] [--rounds <count>]
//!
//! Example:
//!   click_wiring --nodes 5 --rounds 3

use listener_list::{add_event_listener_list, remove_event_listener_list};
use listener_list::{Event, EventValue, Handler, Node};
use std::cell::Cell;
use std::env;
use std::rc::Rc;

struct WiringStats {
    nodes: usize,
    rounds: usize,
    clicks_delivered: usize,
    changes_delivered: usize,
    clicks_after_removal: usize,
}

impl WiringStats {
    fn print_summary(&self) {
        println!("\n=== WIRING SUMMARY ===");
        println!("Nodes wired: {}", self.nodes);
        println!("Dispatch rounds: {}", self.rounds);
        println!("Click handler invocations: {}", self.clicks_delivered);
        println!("Change handler invocations: {}", self.changes_delivered);
        println!(
            "Click invocations after removal: {}",
            self.clicks_after_removal
        );
    }
}

fn main() {
    env_logger::init();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    let mut node_count = 3usize;
    let mut rounds = 2usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" => {
                i += 1;
                node_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .expect("--nodes requires a number");
            }
            "--rounds" => {
                i += 1;
                rounds = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .expect("--rounds requires a number");
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: click_wiring [--nodes <count>] [--rounds <count>]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("Wiring {} nodes for {} dispatch rounds", node_count, rounds);

    let mut nodes: Vec<Node> = (0..node_count)
        .map(|n| Node::new(format!("node-{}", n)))
        .collect();

    // Counting handlers shared across the whole collection
    let clicks = Rc::new(Cell::new(0usize));
    let click_counter = Rc::clone(&clicks);
    let on_click = Handler::labeled("on-click", move |event| {
        click_counter.set(click_counter.get() + 1);
        if let Some(detail) = &event.detail {
            println!("  click payload: {}", detail);
        }
    });

    let changes = Rc::new(Cell::new(0usize));
    let change_counter = Rc::clone(&changes);
    let on_change = Handler::labeled("on-change", move |_event| {
        change_counter.set(change_counter.get() + 1);
    });

    add_event_listener_list(&mut nodes, "click", &on_click).expect("attach click handler");
    add_event_listener_list(&mut nodes, "change", &on_change).expect("attach change handler");

    // Simulate dispatch rounds
    for round in 0..rounds {
        for node in &nodes {
            node.dispatch(&Event::with_detail(
                "click",
                EventValue::Integer(round as i64),
            ));
        }
        // Only the first node sees a change event each round
        if let Some(first) = nodes.first() {
            first.dispatch(&Event::new("change"));
        }
    }

    let clicks_delivered = clicks.get();
    let changes_delivered = changes.get();

    // Remove the click handler everywhere and click again
    remove_event_listener_list(&mut nodes, "click", &on_click).expect("remove click handler");
    for node in &nodes {
        node.dispatch(&Event::new("click"));
    }

    let stats = WiringStats {
        nodes: node_count,
        rounds,
        clicks_delivered,
        changes_delivered,
        clicks_after_removal: clicks.get() - clicks_delivered,
    };
    stats.print_summary();
}
