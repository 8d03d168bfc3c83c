pub mod current_month_panel;
pub mod debt_detail_modal;
pub mod debt_progress_list;
pub mod installment_row;
pub mod month_card;
pub mod summary_card;

pub use current_month_panel::CurrentMonthPanel;
pub use debt_detail_modal::DebtDetailModal;
pub use debt_progress_list::DebtProgressList;
pub use month_card::MonthCard;
pub use summary_card::SummaryCard;
