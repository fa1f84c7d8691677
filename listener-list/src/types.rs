//! Core types for the listener-list library
//!
//! This module defines all the fundamental types the library works with. The
//! bulk operations themselves are stateless - they delegate to each target's
//! registration capability and keep nothing between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Result type for listener operations
pub type Result<T> = std::result::Result<T, ListenerError>;

/// Errors raised by a target's registration primitive
///
/// The bulk operations define no errors of their own - anything in here is
/// raised by a target and propagated unmodified to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("Target is detached: {0}")]
    TargetDetached(String),

    #[error("Invalid event name: {0}")]
    InvalidEventName(String),
}

/// A fired event instance, as seen by handlers during dispatch
#[derive(Debug, Clone)]
pub struct Event {
    /// Event name (e.g., "click", "change")
    pub name: String,
    /// Optional payload attached by the dispatcher
    pub detail: Option<EventValue>,
    /// Time the event instance was created
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event with no payload
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a new event carrying a payload value
    pub fn with_detail(name: impl Into<String>, detail: EventValue) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail),
            timestamp: Utc::now(),
        }
    }
}

/// Event payload value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventValue {
    /// Signed integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Text value
    Text(String),
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventValue::Integer(v) => write!(f, "{}", v),
            EventValue::Float(v) => write!(f, "{:.3}", v),
            EventValue::Boolean(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            EventValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl EventValue {
    /// Convert payload value to f64 if it is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            EventValue::Integer(v) => Some(*v as f64),
            EventValue::Float(v) => Some(*v),
            EventValue::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            EventValue::Text(_) => None,
        }
    }

    /// Convert payload value to i64 if it is numeric
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EventValue::Integer(v) => Some(*v),
            EventValue::Float(v) => Some(*v as i64),
            EventValue::Boolean(v) => Some(if *v { 1 } else { 0 }),
            EventValue::Text(_) => None,
        }
    }

    /// Check if this payload is truthy
    pub fn as_bool(&self) -> bool {
        match self {
            EventValue::Boolean(v) => *v,
            EventValue::Integer(v) => *v != 0,
            EventValue::Float(v) => *v != 0.0,
            EventValue::Text(v) => !v.is_empty(),
        }
    }
}

/// Shared handle to an event callback
///
/// Cloning is cheap - every clone shares the same underlying callback, so a
/// handler attached across a whole node list counts as one listener per node
/// but a single callback overall.
///
/// Equality is identity: two handles compare equal only when they share the
/// same underlying callback. Removal matches on this identity, so the handle
/// used to remove a listener must be a clone of the one used to add it.
///
/// Handlers are `Rc`-backed and deliberately not `Send`: registration and
/// dispatch are single-threaded and synchronous.
#[derive(Clone)]
pub struct Handler {
    /// Optional label used in log lines and debug output
    label: Option<String>,
    /// The callback itself
    func: Rc<dyn Fn(&Event)>,
}

impl Handler {
    /// Create a new anonymous handler
    pub fn new(func: impl Fn(&Event) + 'static) -> Self {
        Self {
            label: None,
            func: Rc::new(func),
        }
    }

    /// Create a new handler with a label for logs and reports
    pub fn labeled(label: impl Into<String>, func: impl Fn(&Event) + 'static) -> Self {
        Self {
            label: Some(label.into()),
            func: Rc::new(func),
        }
    }

    /// Label of this handler (if any)
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Invoke the underlying callback with an event
    pub fn call(&self, event: &Event) {
        (self.func)(event);
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        // Identity comparison - labels play no part in equality
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "Handler({})", label),
            None => write!(f, "Handler(<anonymous>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_event_value_conversions() {
        let int_val = EventValue::Integer(42);
        assert_eq!(int_val.as_f64(), Some(42.0));
        assert_eq!(int_val.as_i64(), Some(42));
        assert!(int_val.as_bool());

        let float_val = EventValue::Float(3.14);
        assert_eq!(float_val.as_f64(), Some(3.14));
        assert_eq!(float_val.as_i64(), Some(3));

        let bool_val = EventValue::Boolean(true);
        assert_eq!(bool_val.as_f64(), Some(1.0));
        assert!(bool_val.as_bool());

        let text_val = EventValue::Text("click payload".to_string());
        assert_eq!(text_val.as_f64(), None);
        assert_eq!(text_val.as_i64(), None);
        assert!(text_val.as_bool());
        assert!(!EventValue::Text(String::new()).as_bool());
    }

    #[test]
    fn test_event_value_display() {
        assert_eq!(format!("{}", EventValue::Integer(42)), "42");
        assert_eq!(format!("{}", EventValue::Float(3.14159)), "3.142");
        assert_eq!(format!("{}", EventValue::Boolean(true)), "true");
        assert_eq!(format!("{}", EventValue::Text("hi".to_string())), "hi");
    }

    #[test]
    fn test_handler_identity_equality() {
        let a = Handler::new(|_| {});
        let b = a.clone();
        let c = Handler::new(|_| {});

        // Clones share the callback, fresh handlers do not
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_handler_call_receives_event() {
        let seen = std::rc::Rc::new(Cell::new(false));
        let flag = std::rc::Rc::clone(&seen);
        let handler = Handler::labeled("probe", move |event| {
            assert_eq!(event.name, "click");
            flag.set(true);
        });

        handler.call(&Event::new("click"));
        assert!(seen.get());
        assert_eq!(handler.label(), Some("probe"));
    }

    #[test]
    fn test_handler_debug_format() {
        let named = Handler::labeled("on-click", |_| {});
        let anon = Handler::new(|_| {});
        assert_eq!(format!("{:?}", named), "Handler(on-click)");
        assert_eq!(format!("{:?}", anon), "Handler(<anonymous>)");
    }
}
