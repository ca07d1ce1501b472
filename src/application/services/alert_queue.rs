use std::collections::VecDeque;

use crate::domain::Alert;

/// FIFO of alerts; the front one stays until dismissed.
#[derive(Debug, Default)]
pub struct AlertQueue {
    queue: VecDeque<Alert>,
}

impl AlertQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alert behind those already queued.
    pub fn push(&mut self, alert: Alert) {
        tracing::debug!(level = ?alert.level, title = %alert.title, "Alert queued");
        self.queue.push_back(alert);
    }

    /// Queues an error alert.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Alert::error(message));
    }

    /// Queues a success alert.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Alert::success(message));
    }

    /// Removes the alert currently shown.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.queue.pop_front()
    }

    /// The alert currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    /// Whether an alert is blocking input.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of queued alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertLevel;

    #[test]
    fn test_front_stays_until_dismissed() {
        let mut alerts = AlertQueue::new();
        alerts.error("Failed to load user data");
        alerts.success("Successfully bought 1 BTC");

        assert!(alerts.is_blocking());
        assert_eq!(
            alerts.current().unwrap().message,
            "Failed to load user data"
        );

        alerts.dismiss();
        assert_eq!(alerts.current().unwrap().level, AlertLevel::Success);

        alerts.dismiss();
        assert!(!alerts.is_blocking());
        assert!(alerts.dismiss().is_none());
    }
}
