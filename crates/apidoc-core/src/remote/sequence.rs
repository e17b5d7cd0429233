use std::collections::HashMap;

/// Proof that a request was started. Only the most recent ticket per widget
/// may deliver its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    widget: String,
    seq: u64,
}

impl Ticket {
    pub fn widget(&self) -> &str {
        &self.widget
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Hands out monotonically increasing tickets per widget and drops responses
/// that arrive after a newer request was started.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: u64,
    latest: HashMap<String, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `widget`, superseding any request in flight.
    pub fn begin(&mut self, widget: &str) -> Ticket {
        self.next += 1;
        self.latest.insert(widget.to_string(), self.next);
        Ticket {
            widget: widget.to_string(),
            seq: self.next,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.widget) == Some(&ticket.seq)
    }

    /// Pass `value` through if `ticket` is still the latest for its widget.
    pub fn accept<T>(&self, ticket: &Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!(
                "dropping stale response #{} for `{}`",
                ticket.seq,
                ticket.widget
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = RequestSequencer::new();
        let first = seq.begin("get--orders");
        let second = seq.begin("get--orders");
        assert!(second.seq() > first.seq());
        assert_eq!(seq.accept(&first, "old"), None);
        assert_eq!(seq.accept(&second, "new"), Some("new"));
    }

    #[test]
    fn test_widgets_are_independent() {
        let mut seq = RequestSequencer::new();
        let orders = seq.begin("get--orders");
        let _users = seq.begin("get--users");
        assert!(seq.is_current(&orders));
    }

    #[test]
    fn test_unknown_widget_is_stale() {
        let mut other = RequestSequencer::new();
        let ticket = other.begin("assistant");
        assert!(!RequestSequencer::new().is_current(&ticket));
    }
}
