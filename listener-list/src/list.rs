//! Bulk listener operations
//!
//! Attach or remove a single handler across every target in an ordered
//! sequence. Each pass is one synchronous iteration that delegates to the
//! target's own registration primitive - no validation, no retries, no
//! recovery.

use crate::target::EventTarget;
use crate::types::{Handler, Result};

/// Attach `handler` to every target in `list` for events named `event`
///
/// Targets are visited in sequence order. Each visit delegates to the
/// target's `add_event_listener`; whatever error a target raises is
/// propagated unmodified and aborts the pass. Targets visited before the
/// failure keep their registration - there is no rollback.
///
/// # Arguments
/// * `list` - Ordered sequence of targets to attach to
/// * `event` - Event name to register for
/// * `handler` - Handler to attach (each target receives a clone sharing
///   the same underlying callback)
///
/// # Returns
/// * `Result<()>` - Ok once every target accepted the registration
///
/// # Example
/// ```
/// use listener_list::{add_event_listener_list, Handler, Node};
///
/// let mut nodes = vec![Node::new("a"), Node::new("b")];
/// let handler = Handler::new(|_event| {});
///
/// add_event_listener_list(&mut nodes, "click", &handler).unwrap();
/// assert!(nodes.iter().all(|n| n.has_listener("click", &handler)));
/// ```
pub fn add_event_listener_list<'a, T, I>(list: I, event: &str, handler: &Handler) -> Result<()>
where
    T: EventTarget + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    log::debug!("Attaching {:?} for '{}' across target list", handler, event);

    for target in list {
        target.add_event_listener(event, handler.clone())?;
    }

    Ok(())
}

/// Remove `handler` from every target in `list` for events named `event`
///
/// Identical contract to [`add_event_listener_list`], using each target's
/// `remove_event_listener` capability instead. Removing a handler that is
/// not currently registered is a no-op per the target's own semantics, not
/// by any logic here.
///
/// # Arguments
/// * `list` - Ordered sequence of targets to remove from
/// * `event` - Event name the handler was registered for
/// * `handler` - Handler to remove (matched by identity)
///
/// # Returns
/// * `Result<()>` - Ok once every target processed the removal
///
/// # Example
/// ```
/// use listener_list::{add_event_listener_list, remove_event_listener_list, Handler, Node};
///
/// let mut nodes = vec![Node::new("a"), Node::new("b")];
/// let handler = Handler::new(|_event| {});
///
/// add_event_listener_list(&mut nodes, "click", &handler).unwrap();
/// remove_event_listener_list(&mut nodes, "click", &handler).unwrap();
/// assert!(nodes.iter().all(|n| !n.has_listener("click", &handler)));
/// ```
pub fn remove_event_listener_list<'a, T, I>(list: I, event: &str, handler: &Handler) -> Result<()>
where
    T: EventTarget + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    log::debug!("Removing {:?} for '{}' across target list", handler, event);

    for target in list {
        target.remove_event_listener(event, handler)?;
    }

    Ok(())
}
