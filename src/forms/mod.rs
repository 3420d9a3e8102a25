//! Add/edit forms for Monthwise
//!
//! Drafts collect user input, validate it into write requests and drive a
//! small submission state machine against a caller-supplied `RecordWriter`.

pub mod draft;
pub mod label;
pub mod request;
pub mod state;

pub use draft::{
    parse_amount, BudgetDraft, BudgetItemDraft, ExpenseDraft, FormDraft, IncomeDraft,
    ReimbursementDraft,
};
pub use label::{is_known_category, ExpenseLabel, EXPENSE_CATEGORIES};
pub use request::{
    HttpMethod, NewBudget, NewBudgetItem, NewExpense, NewIncome, NewReimbursement, WriteRequest,
};
pub use state::{Form, FormEvent, FormState, RecordWriter};
