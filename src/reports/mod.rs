//! Reports module for Monthwise
//!
//! Terminal and CSV renderings of the derived summaries: the dashboard,
//! budget reconciliation and the month-by-month balance history.

pub mod budget_reconciliation;
pub mod dashboard;
pub mod history;

pub use budget_reconciliation::BudgetReconciliationReport;
pub use dashboard::DashboardReport;
pub use history::MonthlyHistoryReport;
