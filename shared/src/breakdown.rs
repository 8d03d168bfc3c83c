//! Derivations over the backend's monthly breakdown.

use chrono::NaiveDate;

use crate::money::percentage;
use crate::{Installment, InstallmentSummary, MonthlyBreakdown};

/// Maximum number of entries in the "Upcoming Payments" list
pub const UPCOMING_MONTHS_LIMIT: usize = 6;

/// Display state of a single installment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallmentStatus {
    Paid,
    Overdue,
    Pending,
}

impl InstallmentStatus {
    /// Paid wins over everything; otherwise the server flag or a past due
    /// date marks the installment overdue.
    pub fn resolve(paid: bool, is_overdue: bool, due_date: NaiveDate, today: NaiveDate) -> Self {
        if paid {
            InstallmentStatus::Paid
        } else if is_overdue || due_date < today {
            InstallmentStatus::Overdue
        } else {
            InstallmentStatus::Pending
        }
    }

    pub fn of_installment(installment: &Installment, today: NaiveDate) -> Self {
        Self::resolve(installment.paid, installment.is_overdue, installment.due_date, today)
    }

    pub fn of_summary(installment: &InstallmentSummary, today: NaiveDate) -> Self {
        Self::resolve(installment.paid, installment.is_overdue, installment.due_date, today)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallmentStatus::Paid => "Paid",
            InstallmentStatus::Overdue => "Overdue",
            InstallmentStatus::Pending => "Pending",
        }
    }

    /// CSS modifier used by the status badges
    pub fn css_class(&self) -> &'static str {
        match self {
            InstallmentStatus::Paid => "status-paid",
            InstallmentStatus::Overdue => "status-overdue",
            InstallmentStatus::Pending => "status-pending",
        }
    }
}

/// The month to feature as the current payment period: the first incomplete
/// month, or the first month when every month is complete.
pub fn current_month(months: &[MonthlyBreakdown]) -> Option<&MonthlyBreakdown> {
    months
        .iter()
        .find(|m| !m.is_complete)
        .or_else(|| months.first())
}

/// Up to six incomplete months that still have money outstanding, in the
/// order the backend sent them. The current month is not filtered out.
pub fn upcoming_months(months: &[MonthlyBreakdown]) -> Vec<&MonthlyBreakdown> {
    months
        .iter()
        .filter(|m| !m.is_complete && m.remaining > 0)
        .take(UPCOMING_MONTHS_LIMIT)
        .collect()
}

impl MonthlyBreakdown {
    /// Share of the month's due amount already paid, in percent
    pub fn progress(&self) -> f64 {
        percentage(self.total_paid, self.total_due)
    }
}

/// Clamp a percentage for use as a progress bar width
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn month(key: &str, is_complete: bool, total_due: i64, total_paid: i64) -> MonthlyBreakdown {
        MonthlyBreakdown {
            month: key.to_string(),
            month_label: key.to_string(),
            total_due,
            total_paid,
            remaining: total_due - total_paid,
            is_complete,
            installments: Vec::new(),
        }
    }

    #[test]
    fn test_current_month_is_first_incomplete() {
        let months = vec![
            month("2025-01", true, 1000, 1000),
            month("2025-02", false, 1000, 400),
            month("2025-03", false, 1000, 0),
        ];
        assert_eq!(current_month(&months).unwrap().month, "2025-02");
    }

    #[test]
    fn test_current_month_falls_back_to_first_when_all_complete() {
        let months = vec![
            month("2025-01", true, 1000, 1000),
            month("2025-02", true, 1000, 1000),
        ];
        assert_eq!(current_month(&months).unwrap().month, "2025-01");
    }

    #[test]
    fn test_current_month_of_empty_breakdown() {
        assert!(current_month(&[]).is_none());
        assert!(upcoming_months(&[]).is_empty());
    }

    #[test]
    fn test_upcoming_months_filters_and_limits() {
        let mut months = vec![
            month("2025-01", true, 1000, 1000),
            // Incomplete but nothing outstanding
            month("2025-02", false, 0, 0),
        ];
        for m in 3..=12 {
            months.push(month(&format!("2025-{:02}", m), false, 1000, 0));
        }

        let upcoming: Vec<&str> = upcoming_months(&months)
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert_eq!(
            upcoming,
            vec!["2025-03", "2025-04", "2025-05", "2025-06", "2025-07", "2025-08"]
        );
    }

    #[test]
    fn test_upcoming_months_includes_current_month() {
        let months = vec![
            month("2025-01", false, 1000, 500),
            month("2025-02", false, 1000, 0),
        ];
        let current = current_month(&months).unwrap();
        let upcoming = upcoming_months(&months);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].month, current.month);
    }

    #[test]
    fn test_month_progress() {
        assert_eq!(month("2025-01", false, 1000, 250).progress(), 25.0);
        assert_eq!(month("2025-01", true, 0, 0).progress(), 0.0);
    }

    #[test]
    fn test_bar_width_is_clamped() {
        assert_eq!(bar_width(42.5), 42.5);
        assert_eq!(bar_width(140.0), 100.0);
        assert_eq!(bar_width(-3.0), 0.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_unpaid_past_due_is_overdue() {
        let today = date("2025-06-15");
        assert_eq!(
            InstallmentStatus::resolve(false, false, date("2025-06-14"), today),
            InstallmentStatus::Overdue
        );
        assert_eq!(
            InstallmentStatus::resolve(false, true, date("2025-07-01"), today),
            InstallmentStatus::Overdue
        );
    }

    #[test]
    fn test_paid_is_paid_regardless_of_date() {
        let today = date("2025-06-15");
        assert_eq!(
            InstallmentStatus::resolve(true, false, date("2024-01-01"), today),
            InstallmentStatus::Paid
        );
        assert_eq!(
            InstallmentStatus::resolve(true, true, date("2024-01-01"), today),
            InstallmentStatus::Paid
        );
        assert_eq!(
            InstallmentStatus::resolve(true, false, date("2026-01-01"), today),
            InstallmentStatus::Paid
        );
    }

    #[test]
    fn test_due_today_or_later_is_pending() {
        let today = date("2025-06-15");
        assert_eq!(
            InstallmentStatus::resolve(false, false, today, today),
            InstallmentStatus::Pending
        );
        assert_eq!(
            InstallmentStatus::resolve(false, false, date("2025-07-15"), today),
            InstallmentStatus::Pending
        );
    }

    #[test]
    fn test_status_of_installment() {
        let installment = Installment {
            id: 1,
            debt_id: 2,
            debt_title: "Car".to_string(),
            installment_number: 1,
            amount: 5000,
            due_date: date("2025-01-10"),
            paid: false,
            paid_at: None,
            is_overdue: false,
        };
        let status = InstallmentStatus::of_installment(&installment, date("2025-02-01"));
        assert_eq!(status, InstallmentStatus::Overdue);
        assert_eq!(status.label(), "Overdue");
        assert_eq!(status.css_class(), "status-overdue");
    }
}
