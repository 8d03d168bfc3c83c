use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod breakdown;
pub mod dashboard;
pub mod debt_list;
pub mod forms;
pub mod money;
pub mod sequence;

pub use breakdown::InstallmentStatus;
pub use dashboard::DashboardPhase;
pub use debt_list::DebtList;
pub use money::MoneyInputError;
pub use sequence::RequestSequence;

/// Lifecycle status of a debt, owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Active,
    PaidOff,
}

impl DebtStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DebtStatus::Active => "Active",
            DebtStatus::PaidOff => "Paid Off",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A debt repaid through a fixed number of installments.
///
/// All amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: i64,
    pub title: String,
    pub total_amount: i64,
    pub installment_count: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    pub status: DebtStatus,
    #[serde(default)]
    pub summary: Option<DebtSummary>,
    /// Present only when requested with `includeInstallments=true`
    #[serde(default)]
    pub installments: Option<Vec<Installment>>,
}

/// Server-computed repayment progress for a single debt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtSummary {
    pub paid_amount: i64,
    pub remaining_amount: i64,
    pub paid_installments: u32,
    pub remaining_installments: u32,
    pub progress_percentage: f64,
    pub next_due_date: Option<NaiveDate>,
}

/// One scheduled payment of a debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub id: i64,
    pub debt_id: i64,
    #[serde(default)]
    pub debt_title: String,
    /// 1-based, unique per debt
    pub installment_number: u32,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub paid: bool,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub is_overdue: bool,
}

/// Installment entry inside a monthly breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentSummary {
    pub installment_id: i64,
    #[serde(default)]
    pub debt_id: Option<i64>,
    pub debt_title: String,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub paid: bool,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub is_overdue: bool,
}

/// Payments due in one calendar month, aggregated by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// Month key, e.g. "2025-03"
    pub month: String,
    pub month_label: String,
    pub total_due: i64,
    pub total_paid: i64,
    pub remaining: i64,
    pub is_complete: bool,
    #[serde(default)]
    pub installments: Vec<InstallmentSummary>,
}

/// Repayment progress of one debt as reported on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBreakdown {
    pub debt_id: i64,
    pub title: String,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub remaining_amount: i64,
    pub progress_percentage: f64,
    pub status: DebtStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    pub total_paid: i64,
    pub total_outstanding: i64,
    pub total_amount: i64,
    pub progress_percentage: f64,
    pub active_debts_count: u32,
    pub completed_debts_count: u32,
}

/// Response of `GET /api/dashboard/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub summary: SummaryTotals,
    #[serde(default)]
    pub monthly_breakdown: Vec<MonthlyBreakdown>,
    #[serde(default)]
    pub debt_breakdown: Vec<DebtBreakdown>,
}

/// Request for creating a new debt.
///
/// Exactly one of `total_amount` and `monthly_payment_amount` is set; the
/// backend derives the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDebtRequest {
    pub title: String,
    pub installment_count: u32,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment_amount: Option<i64>,
}

/// Partial update of an installment; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstallmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl UpdateInstallmentRequest {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.due_date.is_none()
    }
}

impl Debt {
    /// Installments sorted by their number, empty when not loaded
    pub fn sorted_installments(&self) -> Vec<&Installment> {
        let mut installments: Vec<&Installment> = self
            .installments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .collect();
        installments.sort_by_key(|i| i.installment_number);
        installments
    }
}

/// Extract a human-readable message from an error response body.
///
/// Backends answer with `{"message": ...}` or `{"error": ...}`; anything else
/// yields `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error", "detail"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
