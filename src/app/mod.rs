pub mod dashboard;
pub mod state;
pub mod ui;

pub use dashboard::DashboardApp;
