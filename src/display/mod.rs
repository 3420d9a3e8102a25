//! Display formatting for terminal output
//!
//! Tables for record lists plus the money and layout helpers reports use.

pub mod format;
pub mod records;

pub use format::{
    double_separator, format_balance, format_date, format_money, separator, truncate,
};
pub use records::{format_expense_list, format_income_list, format_reimbursement_list};
