//! Listener List Library
//!
//! A small, synchronous library for attaching or removing a single event
//! handler across every target in an ordered node collection.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on listener wiring:
//! - A narrow `EventTarget` capability trait (register/deregister a
//!   named-event handler)
//! - Two bulk operations that iterate a target sequence in order and
//!   delegate to each target's own primitive
//! - An in-memory `Node` implementation with host-platform registration
//!   semantics and synchronous dispatch
//!
//! The library does NOT:
//! - Validate targets, event names, or handlers in the bulk operations
//! - Retry or roll back a partially applied pass
//! - Dispatch asynchronously or across threads
//! - Persist any state
//!
//! All higher-level functionality (scenario files, reports) is in the
//! application layer (listener-list-cli).
//!
//! # Example Usage
//!
//! ```
//! use listener_list::{add_event_listener_list, remove_event_listener_list};
//! use listener_list::{Event, Handler, Node};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! // Build a node collection
//! let mut nodes = vec![Node::new("nodeA"), Node::new("nodeB")];
//!
//! // One counting handler, attached to every node in one pass
//! let clicks = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&clicks);
//! let handler = Handler::labeled("count-clicks", move |_event| {
//!     counter.set(counter.get() + 1);
//! });
//! add_event_listener_list(&mut nodes, "click", &handler).unwrap();
//!
//! // Simulate a click on each node
//! for node in &nodes {
//!     node.dispatch(&Event::new("click"));
//! }
//! assert_eq!(clicks.get(), 2);
//!
//! // Remove the handler everywhere; further clicks reach nothing
//! remove_event_listener_list(&mut nodes, "click", &handler).unwrap();
//! for node in &nodes {
//!     assert_eq!(node.dispatch(&Event::new("click")), 0);
//! }
//! ```

// Public modules
pub mod list;
pub mod node;
pub mod target;
pub mod types;

// Re-export main types for convenience
pub use list::{add_event_listener_list, remove_event_listener_list};
pub use node::Node;
pub use target::EventTarget;
pub use types::{Event, EventValue, Handler, ListenerError, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure we can create a node
        let node = Node::new("root");
        assert_eq!(node.total_listeners(), 0);
        assert!(!node.is_detached());
    }
}
