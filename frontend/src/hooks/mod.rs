pub mod use_api_client;
pub mod use_dashboard;
pub mod use_debts;
pub mod use_periodic_refresh;
