//! Admin form state and its conversion into API payloads.

use chrono::NaiveDate;
use std::fmt;

use crate::money::{to_decimal_input, to_minor_units, MoneyInputError};
use crate::{CreateDebtRequest, Debt, Installment, UpdateInstallmentRequest};

/// Which amount the administrator types when creating a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountMode {
    #[default]
    Monthly,
    Total,
}

impl AmountMode {
    pub fn input_label(&self) -> &'static str {
        match self {
            AmountMode::Monthly => "Monthly Payment",
            AmountMode::Total => "Total Amount",
        }
    }

    pub fn preview_label(&self) -> &'static str {
        match self {
            AmountMode::Monthly => "Total Amount",
            AmountMode::Total => "Monthly Payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DebtFormError {
    MissingTitle,
    InvalidAmount(MoneyInputError),
    AmountNotPositive,
    InvalidInstallmentCount(String),
    MissingStartDate,
    InvalidStartDate(String),
    InvalidInterestRate(String),
}

impl fmt::Display for DebtFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebtFormError::MissingTitle => write!(f, "Please enter a title"),
            DebtFormError::InvalidAmount(e) => write!(f, "{}", e),
            DebtFormError::AmountNotPositive => write!(f, "Amount must be greater than zero"),
            DebtFormError::InvalidInstallmentCount(input) => {
                write!(f, "'{}' is not a valid number of installments", input)
            }
            DebtFormError::MissingStartDate => write!(f, "Please choose a start date"),
            DebtFormError::InvalidStartDate(input) => write!(f, "'{}' is not a valid date", input),
            DebtFormError::InvalidInterestRate(input) => {
                write!(f, "'{}' is not a valid interest rate", input)
            }
        }
    }
}

impl std::error::Error for DebtFormError {}

/// Raw input of the create-debt form, exactly as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateDebtForm {
    pub title: String,
    pub mode: AmountMode,
    pub amount: String,
    pub installment_count: String,
    pub start_date: String,
    pub interest_rate: String,
}

impl CreateDebtForm {
    /// Live counterpart of the typed amount in minor units: the total in
    /// monthly mode, the per-installment payment in total mode.
    ///
    /// `None` while the amount or the count is not yet usable.
    pub fn preview(&self) -> Option<i64> {
        let amount = to_minor_units(&self.amount).ok()?;
        let count = parse_count(&self.installment_count).ok()? as i64;
        match self.mode {
            AmountMode::Monthly => amount.checked_mul(count),
            AmountMode::Total => Some((amount as f64 / count as f64).round() as i64),
        }
    }

    pub fn to_request(&self) -> Result<CreateDebtRequest, DebtFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DebtFormError::MissingTitle);
        }

        let amount = to_minor_units(&self.amount).map_err(DebtFormError::InvalidAmount)?;
        if amount <= 0 {
            return Err(DebtFormError::AmountNotPositive);
        }

        let installment_count = parse_count(&self.installment_count)?;

        let start_date = self.start_date.trim();
        if start_date.is_empty() {
            return Err(DebtFormError::MissingStartDate);
        }
        let start_date = parse_date(start_date)
            .ok_or_else(|| DebtFormError::InvalidStartDate(start_date.to_string()))?;

        let interest_rate = match self.interest_rate.trim() {
            "" => None,
            rate => match rate.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => return Err(DebtFormError::InvalidInterestRate(rate.to_string())),
            },
        };

        let (total_amount, monthly_payment_amount) = match self.mode {
            AmountMode::Monthly => (None, Some(amount)),
            AmountMode::Total => (Some(amount), None),
        };

        Ok(CreateDebtRequest {
            title: title.to_string(),
            installment_count,
            start_date,
            interest_rate,
            total_amount,
            monthly_payment_amount,
        })
    }
}

fn parse_count(input: &str) -> Result<u32, DebtFormError> {
    match input.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(DebtFormError::InvalidInstallmentCount(input.trim().to_string())),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Raw input of the edit-installment form along with the values it was
/// opened with
#[derive(Debug, Clone, PartialEq)]
pub struct EditInstallmentForm {
    pub installment_id: i64,
    pub amount: String,
    pub due_date: String,
    original_amount: i64,
    original_due_date: NaiveDate,
}

impl EditInstallmentForm {
    pub fn from_installment(installment: &Installment) -> Self {
        Self {
            installment_id: installment.id,
            amount: to_decimal_input(installment.amount),
            due_date: installment.due_date.format("%Y-%m-%d").to_string(),
            original_amount: installment.amount,
            original_due_date: installment.due_date,
        }
    }

    /// Build the update payload. Blank fields and fields equal to the
    /// installment's current value are left out.
    pub fn to_request(&self) -> Result<UpdateInstallmentRequest, MoneyInputError> {
        let amount = match self.amount.trim() {
            "" => None,
            input => Some(to_minor_units(input)?).filter(|a| *a != self.original_amount),
        };

        let due_date = match self.due_date.trim() {
            "" => None,
            input => parse_date(input).filter(|d| *d != self.original_due_date),
        };

        Ok(UpdateInstallmentRequest { amount, due_date })
    }
}

/// Drop a debt from a locally held list, returning whether anything was
/// removed
pub fn remove_debt(debts: &mut Vec<Debt>, debt_id: i64) -> bool {
    let before = debts.len();
    debts.retain(|d| d.id != debt_id);
    debts.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DebtStatus;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn form(mode: AmountMode, amount: &str, count: &str) -> CreateDebtForm {
        CreateDebtForm {
            title: "Family car".to_string(),
            mode,
            amount: amount.to_string(),
            installment_count: count.to_string(),
            start_date: "2025-01-15".to_string(),
            interest_rate: String::new(),
        }
    }

    fn debt(id: i64) -> Debt {
        Debt {
            id,
            title: format!("Debt {}", id),
            total_amount: 1000,
            installment_count: 1,
            start_date: date("2025-01-01"),
            interest_rate: None,
            status: DebtStatus::Active,
            summary: None,
            installments: None,
        }
    }

    fn installment() -> Installment {
        Installment {
            id: 42,
            debt_id: 5,
            debt_title: "Family car".to_string(),
            installment_number: 3,
            amount: 223000,
            due_date: date("2025-03-15"),
            paid: false,
            paid_at: None,
            is_overdue: false,
        }
    }

    #[test]
    fn test_total_mode_previews_monthly_payment() {
        // 30,000.00 over 12 installments
        let f = form(AmountMode::Total, "30000", "12");
        assert_eq!(f.preview(), Some(250000));
    }

    #[test]
    fn test_monthly_mode_previews_total() {
        let f = form(AmountMode::Monthly, "2230.00", "12");
        assert_eq!(f.preview(), Some(2_676_000));
    }

    #[test]
    fn test_preview_rounds_uneven_division() {
        let f = form(AmountMode::Total, "100", "3");
        assert_eq!(f.preview(), Some(3333));
    }

    #[test]
    fn test_preview_waits_for_usable_input() {
        assert_eq!(form(AmountMode::Total, "", "12").preview(), None);
        assert_eq!(form(AmountMode::Total, "1000", "").preview(), None);
        assert_eq!(form(AmountMode::Total, "1000", "0").preview(), None);
        assert_eq!(form(AmountMode::Monthly, "abc", "3").preview(), None);
    }

    #[test]
    fn test_monthly_input_is_sent_in_minor_units() {
        let request = form(AmountMode::Monthly, "2230.00", "12").to_request().unwrap();
        assert_eq!(request.monthly_payment_amount, Some(223000));
        assert_eq!(request.total_amount, None);
        assert_eq!(request.installment_count, 12);
        assert_eq!(request.start_date, date("2025-01-15"));
        assert_eq!(request.interest_rate, None);
    }

    #[test]
    fn test_total_mode_sends_total_only() {
        let mut f = form(AmountMode::Total, "30000", "12");
        f.interest_rate = "3.5".to_string();
        f.title = "  Family car  ".to_string();

        let request = f.to_request().unwrap();
        assert_eq!(request.title, "Family car");
        assert_eq!(request.total_amount, Some(3_000_000));
        assert_eq!(request.monthly_payment_amount, None);
        assert_eq!(request.interest_rate, Some(3.5));
    }

    #[test]
    fn test_create_form_validation() {
        let mut f = form(AmountMode::Monthly, "100", "12");
        f.title = "   ".to_string();
        assert_eq!(f.to_request(), Err(DebtFormError::MissingTitle));

        let f = form(AmountMode::Monthly, "0", "12");
        assert_eq!(f.to_request(), Err(DebtFormError::AmountNotPositive));

        let f = form(AmountMode::Monthly, "x", "12");
        assert!(matches!(f.to_request(), Err(DebtFormError::InvalidAmount(_))));

        let f = form(AmountMode::Monthly, "100", "0");
        assert_eq!(
            f.to_request(),
            Err(DebtFormError::InvalidInstallmentCount("0".to_string()))
        );

        let mut f = form(AmountMode::Monthly, "100", "12");
        f.start_date = String::new();
        assert_eq!(f.to_request(), Err(DebtFormError::MissingStartDate));

        let mut f = form(AmountMode::Monthly, "100", "12");
        f.start_date = "2025-13-01".to_string();
        assert!(matches!(f.to_request(), Err(DebtFormError::InvalidStartDate(_))));

        let mut f = form(AmountMode::Monthly, "100", "12");
        f.interest_rate = "-1".to_string();
        assert_eq!(
            f.to_request(),
            Err(DebtFormError::InvalidInterestRate("-1".to_string()))
        );
    }

    #[test]
    fn test_edit_form_prefills_decimal_amount() {
        let form = EditInstallmentForm::from_installment(&installment());
        assert_eq!(form.installment_id, 42);
        assert_eq!(form.amount, "2230.00");
        assert_eq!(form.due_date, "2025-03-15");
    }

    #[test]
    fn test_edit_with_only_amount_changed_sends_only_amount() {
        let mut form = EditInstallmentForm::from_installment(&installment());
        form.amount = "2500".to_string();

        let request = form.to_request().unwrap();
        assert_eq!(request.amount, Some(250000));
        assert_eq!(request.due_date, None);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"amount":250000}"#
        );
    }

    #[test]
    fn test_edit_with_cleared_due_date_never_sends_empty_date() {
        let mut form = EditInstallmentForm::from_installment(&installment());
        form.amount = "2500".to_string();
        form.due_date = String::new();

        let json = serde_json::to_value(form.to_request().unwrap()).unwrap();
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn test_edit_with_only_due_date_changed() {
        let mut form = EditInstallmentForm::from_installment(&installment());
        form.due_date = "2025-04-01".to_string();

        let request = form.to_request().unwrap();
        assert_eq!(request.amount, None);
        assert_eq!(request.due_date, Some(date("2025-04-01")));
    }

    #[test]
    fn test_unchanged_edit_is_empty() {
        let form = EditInstallmentForm::from_installment(&installment());
        assert!(form.to_request().unwrap().is_empty());
    }

    #[test]
    fn test_edit_rejects_invalid_amount() {
        let mut form = EditInstallmentForm::from_installment(&installment());
        form.amount = "twelve".to_string();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_remove_debt() {
        let mut debts = vec![debt(4), debt(5), debt(6)];
        assert!(remove_debt(&mut debts, 5));
        assert!(debts.iter().all(|d| d.id != 5));
        assert_eq!(debts.len(), 2);

        assert!(!remove_debt(&mut debts, 99));
        assert_eq!(debts.len(), 2);
    }
}
