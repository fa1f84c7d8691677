//! In-memory event target
//!
//! A minimal node implementation backing tests, examples, and the scenario
//! runner. Registration semantics follow the host-platform behavior the
//! library models: duplicate registration of the same (event, handler) pair
//! is ignored, removing an unregistered handler is a no-op, and dispatch
//! invokes handlers in registration order.

use crate::target::EventTarget;
use crate::types::{Event, Handler, ListenerError, Result};

/// A single registered listener
#[derive(Debug, Clone)]
struct ListenerEntry {
    /// Event name the handler is registered for
    event: String,
    /// The registered handler
    handler: Handler,
}

/// An in-memory node-like object with event registration capability
#[derive(Debug, Clone)]
pub struct Node {
    /// Node identifier (used in log lines and error messages)
    id: String,
    /// Registered listeners, in registration order
    listeners: Vec<ListenerEntry>,
    /// True once the node has been detached
    detached: bool,
}

impl Node {
    /// Create a new attached node with an empty listener registry
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listeners: Vec::new(),
            detached: false,
        }
    }

    /// Node identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True once the node has been detached
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Detach the node
    ///
    /// Detaching is irreversible: the registry is cleared and every later
    /// registration or removal fails with `ListenerError::TargetDetached`.
    pub fn detach(&mut self) {
        log::debug!("Detaching node '{}'", self.id);
        self.listeners.clear();
        self.detached = true;
    }

    /// Check whether `handler` is registered for `event` on this node
    pub fn has_listener(&self, event: &str, handler: &Handler) -> bool {
        self.listeners
            .iter()
            .any(|entry| entry.event == event && entry.handler == *handler)
    }

    /// Number of handlers registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }

    /// Total number of registered listeners across all events
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch an event to this node
    ///
    /// Invokes every handler registered for `event.name`, in registration
    /// order, against a snapshot of the registry taken when dispatch starts.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &Event) -> usize {
        let matching: Vec<Handler> = self
            .listeners
            .iter()
            .filter(|entry| entry.event == event.name)
            .map(|entry| entry.handler.clone())
            .collect();

        log::trace!(
            "Dispatching '{}' on node '{}' to {} handler(s)",
            event.name,
            self.id,
            matching.len()
        );

        for handler in &matching {
            handler.call(event);
        }

        matching.len()
    }

    fn ensure_usable(&self, event: &str) -> Result<()> {
        if self.detached {
            return Err(ListenerError::TargetDetached(self.id.clone()));
        }
        if event.is_empty() {
            return Err(ListenerError::InvalidEventName(
                "event name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl EventTarget for Node {
    fn add_event_listener(&mut self, event: &str, handler: Handler) -> Result<()> {
        self.ensure_usable(event)?;

        // Duplicate registration of the same (event, handler) pair is ignored
        if self.has_listener(event, &handler) {
            log::trace!(
                "Node '{}': {:?} already registered for '{}', ignoring",
                self.id,
                handler,
                event
            );
            return Ok(());
        }

        log::trace!("Node '{}': registering {:?} for '{}'", self.id, handler, event);
        self.listeners.push(ListenerEntry {
            event: event.to_string(),
            handler,
        });
        Ok(())
    }

    fn remove_event_listener(&mut self, event: &str, handler: &Handler) -> Result<()> {
        self.ensure_usable(event)?;

        let before = self.listeners.len();
        self.listeners
            .retain(|entry| !(entry.event == event && entry.handler == *handler));

        if self.listeners.len() < before {
            log::trace!("Node '{}': removed {:?} for '{}'", self.id, handler, event);
        }
        // Removing an unregistered handler is a no-op
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventValue;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut node = Node::new("a");
        let handler = Handler::new(|_| {});

        node.add_event_listener("click", handler.clone()).unwrap();
        node.add_event_listener("click", handler.clone()).unwrap();

        assert_eq!(node.listener_count("click"), 1);

        // A distinct handler for the same event is a separate listener
        let other = Handler::new(|_| {});
        node.add_event_listener("click", other).unwrap();
        assert_eq!(node.listener_count("click"), 2);
    }

    #[test]
    fn test_same_handler_on_multiple_events() {
        let mut node = Node::new("a");
        let handler = Handler::new(|_| {});

        node.add_event_listener("click", handler.clone()).unwrap();
        node.add_event_listener("change", handler.clone()).unwrap();

        assert_eq!(node.total_listeners(), 2);

        node.remove_event_listener("click", &handler).unwrap();
        assert!(!node.has_listener("click", &handler));
        assert!(node.has_listener("change", &handler));
    }

    #[test]
    fn test_dispatch_invokes_in_registration_order() {
        let mut node = Node::new("a");
        let order = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&order);
        let second_log = Rc::clone(&order);
        let first = Handler::labeled("first", move |_| first_log.borrow_mut().push("first"));
        let second = Handler::labeled("second", move |_| second_log.borrow_mut().push("second"));

        node.add_event_listener("click", first).unwrap();
        node.add_event_listener("click", second).unwrap();

        let invoked = node.dispatch(&Event::new("click"));
        assert_eq!(invoked, 2);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_dispatch_only_matches_event_name() {
        let mut node = Node::new("a");
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let handler = Handler::new(move |_| *counter.borrow_mut() += 1);

        node.add_event_listener("click", handler).unwrap();

        assert_eq!(node.dispatch(&Event::new("change")), 0);
        assert_eq!(node.dispatch(&Event::new("click")), 1);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_dispatch_delivers_detail_payload() {
        let mut node = Node::new("a");
        let seen = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&seen);
        let handler = Handler::new(move |event: &Event| {
            *slot.borrow_mut() = event.detail.clone();
        });

        node.add_event_listener("input", handler).unwrap();
        node.dispatch(&Event::with_detail("input", EventValue::Integer(7)));

        assert_eq!(*seen.borrow(), Some(EventValue::Integer(7)));
    }

    #[test]
    fn test_detached_node_refuses_registration() {
        let mut node = Node::new("gone");
        let handler = Handler::new(|_| {});
        node.add_event_listener("click", handler.clone()).unwrap();

        node.detach();
        assert!(node.is_detached());
        assert_eq!(node.total_listeners(), 0); // registry cleared on detach

        let err = node.add_event_listener("click", handler.clone()).unwrap_err();
        assert!(matches!(err, ListenerError::TargetDetached(_)));

        let err = node.remove_event_listener("click", &handler).unwrap_err();
        assert!(matches!(err, ListenerError::TargetDetached(_)));
    }

    #[test]
    fn test_empty_event_name_is_rejected() {
        let mut node = Node::new("a");
        let handler = Handler::new(|_| {});

        let err = node.add_event_listener("", handler.clone()).unwrap_err();
        assert!(matches!(err, ListenerError::InvalidEventName(_)));

        let err = node.remove_event_listener("", &handler).unwrap_err();
        assert!(matches!(err, ListenerError::InvalidEventName(_)));
    }
}
