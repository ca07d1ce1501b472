//! Application services.

/// Blocking alert queue.
pub mod alert_queue;
/// Money formatting.
pub mod money;

pub use alert_queue::AlertQueue;
