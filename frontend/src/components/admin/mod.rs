pub mod create_debt_modal;
pub mod debt_card;
pub mod edit_installment_modal;

pub use create_debt_modal::CreateDebtModal;
pub use debt_card::DebtCard;
pub use edit_installment_modal::EditInstallmentModal;
