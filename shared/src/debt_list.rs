//! Admin debt list kept in sync with the server across fetches and deletes.

use crate::forms::remove_debt;
use crate::sequence::RequestSequence;
use crate::Debt;

/// Local copy of the admin debt list.
///
/// Fetches are ticketed so a response that started before a newer fetch or a
/// delete can never overwrite the list. Deletes are applied optimistically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebtList {
    debts: Vec<Debt>,
    sequence: RequestSequence,
}

impl DebtList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Ticket for a list fetch about to be sent
    pub fn begin_fetch(&mut self) -> u64 {
        self.sequence.issue()
    }

    /// Replace the list with a fetched one. Returns false, leaving the list
    /// untouched, when the fetch was overtaken by a newer fetch or a delete.
    pub fn apply_fetch(&mut self, ticket: u64, debts: Vec<Debt>) -> bool {
        if !self.sequence.accept(ticket) {
            return false;
        }
        self.debts = debts;
        true
    }

    /// Remove a debt before the server confirms it. Fetches still in flight
    /// are invalidated since their snapshot predates the delete.
    pub fn begin_delete(&mut self, debt_id: i64) -> bool {
        self.sequence.supersede();
        remove_debt(&mut self.debts, debt_id)
    }

    /// Settle a delete once the server answered. Returns true when the list
    /// must be refetched to restore the server's view.
    pub fn finish_delete<E>(&mut self, debt_id: i64, result: &Result<(), E>) -> bool {
        match result {
            Ok(()) => {
                remove_debt(&mut self.debts, debt_id);
                false
            }
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DebtStatus;
    use chrono::NaiveDate;

    fn debt(id: i64) -> Debt {
        Debt {
            id,
            title: format!("Debt {}", id),
            total_amount: 1000,
            installment_count: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            interest_rate: None,
            status: DebtStatus::Active,
            summary: None,
            installments: None,
        }
    }

    fn ids(list: &DebtList) -> Vec<i64> {
        list.debts().iter().map(|d| d.id).collect()
    }

    fn loaded(ids: &[i64]) -> DebtList {
        let mut list = DebtList::new();
        let ticket = list.begin_fetch();
        assert!(list.apply_fetch(ticket, ids.iter().copied().map(debt).collect()));
        list
    }

    #[test]
    fn test_successful_delete_keeps_removal_without_refetch() {
        let mut list = loaded(&[4, 5, 6]);

        assert!(list.begin_delete(5));
        assert_eq!(ids(&list), vec![4, 6]);

        let refetch = list.finish_delete(5, &Ok::<(), String>(()));
        assert!(!refetch);
        assert_eq!(ids(&list), vec![4, 6]);
    }

    #[test]
    fn test_failed_delete_refetches_and_restores_row() {
        let mut list = loaded(&[4, 5, 6]);

        list.begin_delete(5);
        assert_eq!(ids(&list), vec![4, 6]);

        let refetch = list.finish_delete(5, &Err::<(), _>("server error"));
        assert!(refetch);

        let ticket = list.begin_fetch();
        assert!(list.apply_fetch(ticket, vec![debt(4), debt(5), debt(6)]));
        assert_eq!(ids(&list), vec![4, 5, 6]);
    }

    #[test]
    fn test_fetch_started_before_delete_cannot_restore_row() {
        let mut list = loaded(&[6, 7]);

        let in_flight = list.begin_fetch();
        list.begin_delete(7);

        // Snapshot taken before the delete reached the server
        assert!(!list.apply_fetch(in_flight, vec![debt(6), debt(7)]));
        assert_eq!(ids(&list), vec![6]);

        assert!(!list.finish_delete(7, &Ok::<(), String>(())));
        assert_eq!(ids(&list), vec![6]);
    }

    #[test]
    fn test_older_fetch_is_discarded() {
        let mut list = loaded(&[1]);
        let slow = list.begin_fetch();
        let fast = list.begin_fetch();

        assert!(list.apply_fetch(fast, vec![debt(1), debt(2)]));
        assert!(!list.apply_fetch(slow, vec![]));
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn test_deleting_unknown_debt_leaves_list_alone() {
        let mut list = loaded(&[1, 2]);
        assert!(!list.begin_delete(99));
        assert_eq!(ids(&list), vec![1, 2]);
    }
}
