//! The event-target capability
//!
//! This trait provides a unified interface over anything that can register
//! and deregister named-event handlers. The bulk operations are generic over
//! it, so they stay portable across target implementations and testable with
//! in-memory doubles.

use crate::types::{Handler, Result};

/// Capability to register and deregister named-event handlers
///
/// Semantics of duplicate registration, removal of an unregistered handler,
/// and failure modes belong to the implementation - the trait only fixes the
/// shape of the capability.
pub trait EventTarget {
    /// Register `handler` for events named `event`
    fn add_event_listener(&mut self, event: &str, handler: Handler) -> Result<()>;

    /// Deregister `handler` for events named `event`
    fn remove_event_listener(&mut self, event: &str, handler: &Handler) -> Result<()>;
}
