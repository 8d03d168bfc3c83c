/// Monotonic tickets for requests whose responses may arrive out of order.
///
/// Each request takes a ticket from [`RequestSequence::issue`]; its response
/// is applied only if [`RequestSequence::accept`] returns true, which happens
/// when no newer ticket has been accepted already.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket > self.applied && ticket <= self.issued {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    /// Issue a ticket and mark it applied at once, for a local change that
    /// must win over every response still in flight.
    pub fn supersede(&mut self) -> u64 {
        let ticket = self.issue();
        self.applied = ticket;
        ticket
    }

    /// Whether `ticket` is the most recently issued one
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut seq = RequestSequence::new();
        assert_eq!(seq.issue(), 1);
        assert_eq!(seq.issue(), 2);
        assert!(seq.is_latest(2));
        assert!(!seq.is_latest(1));
    }

    #[test]
    fn test_in_order_responses_are_applied() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.accept(first));
        let second = seq.issue();
        assert!(seq.accept(second));
        assert_eq!(seq.last_applied(), 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut seq = RequestSequence::new();
        let slow = seq.issue();
        let fast = seq.issue();

        assert!(seq.accept(fast));
        assert!(!seq.accept(slow));
        assert_eq!(seq.last_applied(), fast);
    }

    #[test]
    fn test_ticket_is_applied_once() {
        let mut seq = RequestSequence::new();
        let ticket = seq.issue();
        assert!(seq.accept(ticket));
        assert!(!seq.accept(ticket));
    }

    #[test]
    fn test_supersede_rejects_earlier_tickets() {
        let mut seq = RequestSequence::new();
        let in_flight = seq.issue();
        let local = seq.supersede();

        assert_eq!(seq.last_applied(), local);
        assert!(!seq.accept(in_flight));

        let next = seq.issue();
        assert!(seq.accept(next));
    }

    #[test]
    fn test_unissued_ticket_is_rejected() {
        let mut seq = RequestSequence::new();
        assert!(!seq.accept(1));
        seq.issue();
        assert!(!seq.accept(7));
    }
}
