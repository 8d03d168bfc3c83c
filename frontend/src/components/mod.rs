pub mod admin;
pub mod dashboard;
pub mod layout;
pub mod progress_bar;
pub mod status_badge;
