//! Form drafts
//!
//! A draft holds what the user has typed so far. Validation turns it into a
//! `WriteRequest` or rejects it; nothing is written until validation passes.

use chrono::{DateTime, Utc};

use super::label::ExpenseLabel;
use super::request::{
    NewBudget, NewBudgetItem, NewExpense, NewIncome, NewReimbursement, WriteRequest,
};
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::timestamp::parse_timestamp;
use crate::models::{
    BudgetItemId, BudgetRecord, ExpenseId, ExpenseRecord, IncomeId, IncomeRecord, Money,
    MonthBucket, RecurrenceInterval, ReimbursementId, ReimbursementRecord, ReimbursementStatus,
};

/// A draft that can be validated into a write
pub trait FormDraft {
    /// Check the draft and build the write it describes
    fn validate(&self) -> MonthwiseResult<WriteRequest>;

    /// Clear the draft after a successful write
    fn reset(&mut self);
}

/// Parse a typed amount; it must be present, numeric and not negative
pub fn parse_amount(input: &str) -> MonthwiseResult<Money> {
    let invalid = || MonthwiseError::Validation("Please enter a valid amount".into());

    if input.trim().is_empty() {
        return Err(invalid());
    }
    match Money::parse(input) {
        Ok(amount) if !amount.is_negative() => Ok(amount),
        _ => Err(invalid()),
    }
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Add/edit expense form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub editing: Option<ExpenseId>,
    pub amount: String,
    pub label: ExpenseLabel,
    pub is_recurring: bool,
    pub expense_date: Option<DateTime<Utc>>,
    pub recurrence_interval: Option<RecurrenceInterval>,
    pub recurrence_start_date: Option<DateTime<Utc>>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

impl ExpenseDraft {
    pub fn new(amount: impl Into<String>, label: ExpenseLabel) -> Self {
        Self {
            amount: amount.into(),
            label,
            ..Self::default()
        }
    }

    /// Open an existing expense for editing
    pub fn edit(expense: &ExpenseRecord) -> Self {
        Self {
            editing: Some(expense.id.clone()),
            amount: expense.amount.to_decimal().to_string(),
            label: ExpenseLabel::from_existing_name(expense.name.as_deref()),
            is_recurring: expense.is_recurring,
            expense_date: expense.expense_date,
            recurrence_interval: expense.recurrence_interval,
            recurrence_start_date: expense.recurrence_start_date,
            recurrence_end_date: expense.recurrence_end_date,
        }
    }

    pub fn recurring(mut self, interval: Option<RecurrenceInterval>) -> Self {
        self.is_recurring = true;
        self.recurrence_interval = interval;
        self
    }

    /// Switch the picker to `category`, keeping any typed name for "Other"
    pub fn select_category(&mut self, category: &str) {
        let typed = match &self.label {
            ExpenseLabel::Other { name } => name.clone(),
            ExpenseLabel::Category { .. } => String::new(),
        };
        self.label = match ExpenseLabel::category(category) {
            ExpenseLabel::Other { .. } => ExpenseLabel::other(typed),
            label => label,
        };
    }

    pub fn payload(&self) -> MonthwiseResult<NewExpense> {
        let amount = parse_amount(&self.amount)?;
        let name = self.label.stored_name()?;

        let (interval, start, end) = if self.is_recurring {
            (
                self.recurrence_interval,
                self.recurrence_start_date,
                self.recurrence_end_date,
            )
        } else {
            (None, None, None)
        };

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(MonthwiseError::Validation(
                    "Recurrence end date is before its start date".into(),
                ));
            }
        }

        Ok(NewExpense {
            amount,
            name,
            is_recurring: self.is_recurring,
            expense_date: self.expense_date,
            recurrence_interval: interval,
            recurrence_start_date: start,
            recurrence_end_date: end,
        })
    }
}

impl FormDraft for ExpenseDraft {
    fn validate(&self) -> MonthwiseResult<WriteRequest> {
        let payload = self.payload()?;
        Ok(match &self.editing {
            Some(id) => WriteRequest::UpdateExpense {
                id: id.clone(),
                payload,
            },
            None => WriteRequest::CreateExpense(payload),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Add/edit income form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeDraft {
    pub editing: Option<IncomeId>,
    pub amount: String,
    pub source: String,
    pub is_recurring: bool,
}

impl IncomeDraft {
    pub fn new(amount: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    /// Open an existing income entry for editing
    pub fn edit(income: &IncomeRecord) -> Self {
        Self {
            editing: Some(income.id.clone()),
            amount: income.amount.to_decimal().to_string(),
            source: income.source.clone().unwrap_or_default(),
            is_recurring: income.is_recurring,
        }
    }

    pub fn payload(&self) -> MonthwiseResult<NewIncome> {
        Ok(NewIncome {
            amount: parse_amount(&self.amount)?,
            source: non_empty(&self.source),
            is_recurring: self.is_recurring,
        })
    }
}

impl FormDraft for IncomeDraft {
    fn validate(&self) -> MonthwiseResult<WriteRequest> {
        let payload = self.payload()?;
        Ok(match &self.editing {
            Some(id) => WriteRequest::UpdateIncome {
                id: id.clone(),
                payload,
            },
            None => WriteRequest::CreateIncome(payload),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A budget line being edited locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetItemDraft {
    pub id: BudgetItemId,
    pub category: String,
    pub estimated_amount: Money,
}

/// Budget editor for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    pub bucket: MonthBucket,
    pub expected_income: String,
    items: Vec<BudgetItemDraft>,
}

impl BudgetDraft {
    pub fn new(bucket: MonthBucket) -> Self {
        Self {
            bucket,
            expected_income: String::new(),
            items: Vec::new(),
        }
    }

    /// Load a saved budget into the editor
    pub fn from_budget(budget: &BudgetRecord) -> Self {
        Self {
            bucket: budget.bucket(),
            expected_income: budget
                .expected_income
                .map(|m| m.to_decimal().to_string())
                .unwrap_or_default(),
            items: budget
                .items
                .iter()
                .map(|item| BudgetItemDraft {
                    id: item.id.clone(),
                    category: item.category.clone(),
                    estimated_amount: item.estimated_amount,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[BudgetItemDraft] {
        &self.items
    }

    pub fn total_estimated(&self) -> Money {
        self.items.iter().map(|i| i.estimated_amount).sum()
    }

    fn validated_item(category: &str, amount: &str) -> MonthwiseResult<(String, Money)> {
        let category = non_empty(category)
            .ok_or_else(|| MonthwiseError::Validation("Please enter a category".into()))?;
        Ok((category, parse_amount(amount)?))
    }

    /// Append a line; returns the local id assigned to it
    pub fn add_item(&mut self, category: &str, amount: &str) -> MonthwiseResult<BudgetItemId> {
        let (category, estimated_amount) = Self::validated_item(category, amount)?;
        let id = BudgetItemId::draft();
        self.items.push(BudgetItemDraft {
            id: id.clone(),
            category,
            estimated_amount,
        });
        Ok(id)
    }

    /// Replace the category and amount of an existing line
    pub fn edit_item(
        &mut self,
        id: &BudgetItemId,
        category: &str,
        amount: &str,
    ) -> MonthwiseResult<()> {
        let (category, estimated_amount) = Self::validated_item(category, amount)?;
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| MonthwiseError::budget_item_not_found(id.as_str()))?;
        item.category = category;
        item.estimated_amount = estimated_amount;
        Ok(())
    }

    pub fn remove_item(&mut self, id: &BudgetItemId) -> MonthwiseResult<BudgetItemDraft> {
        let index = self
            .items
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| MonthwiseError::budget_item_not_found(id.as_str()))?;
        Ok(self.items.remove(index))
    }

    pub fn payload(&self) -> MonthwiseResult<NewBudget> {
        let expected_income = if self.expected_income.trim().is_empty() {
            None
        } else {
            Some(parse_amount(&self.expected_income)?)
        };

        Ok(NewBudget {
            month: self.bucket.month,
            year: self.bucket.year,
            expected_income,
            items: self
                .items
                .iter()
                .map(|i| NewBudgetItem {
                    category: i.category.clone(),
                    estimated_amount: i.estimated_amount,
                })
                .collect(),
        })
    }
}

impl FormDraft for BudgetDraft {
    fn validate(&self) -> MonthwiseResult<WriteRequest> {
        self.payload().map(WriteRequest::SaveBudget)
    }

    /// The editor keeps showing the saved budget
    fn reset(&mut self) {}
}

/// Add/edit reimbursement form for one expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReimbursementDraft {
    pub expense_id: ExpenseId,
    pub editing: Option<ReimbursementId>,
    pub amount: String,
    /// RFC 3339 or YYYY-MM-DD
    pub date: String,
    pub note: String,
    pub status: ReimbursementStatus,
}

impl ReimbursementDraft {
    pub fn new(expense_id: impl Into<ExpenseId>) -> Self {
        Self {
            expense_id: expense_id.into(),
            editing: None,
            amount: String::new(),
            date: String::new(),
            note: String::new(),
            status: ReimbursementStatus::Partial,
        }
    }

    /// Open an existing entry for editing
    pub fn edit(entry: &ReimbursementRecord) -> Self {
        Self {
            expense_id: entry.expense_id.clone(),
            editing: Some(entry.id.clone()),
            amount: entry.amount.to_decimal().to_string(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            note: entry.note.clone().unwrap_or_default(),
            status: entry.status,
        }
    }

    pub fn payload(&self) -> MonthwiseResult<NewReimbursement> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_timestamp(&self.date)
            .ok_or_else(|| MonthwiseError::Validation("Please enter a valid date".into()))?;

        Ok(NewReimbursement {
            amount,
            date,
            note: non_empty(&self.note),
            status: self.status,
        })
    }
}

impl FormDraft for ReimbursementDraft {
    fn validate(&self) -> MonthwiseResult<WriteRequest> {
        let payload = self.payload()?;
        Ok(match &self.editing {
            Some(reimbursement_id) => WriteRequest::EditReimbursement {
                expense_id: self.expense_id.clone(),
                reimbursement_id: reimbursement_id.clone(),
                payload,
            },
            None => WriteRequest::AddReimbursement {
                expense_id: self.expense_id.clone(),
                payload,
            },
        })
    }

    fn reset(&mut self) {
        *self = Self::new(self.expense_id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2500").unwrap(), Money::from_units(2500));
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("").unwrap_err().is_validation());
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("-10").unwrap_err().is_validation());
    }

    #[test]
    fn test_other_with_empty_name_is_rejected() {
        let draft = ExpenseDraft::new("1000", ExpenseLabel::other(""));
        let err = draft.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Please specify the expense name");
    }

    #[test]
    fn test_category_becomes_name() {
        let draft = ExpenseDraft::new("1000", ExpenseLabel::category("Utilities"));
        match draft.validate().unwrap() {
            WriteRequest::CreateExpense(payload) => {
                assert_eq!(payload.name, "Utilities");
                assert_eq!(payload.amount, Money::from_units(1000));
                assert!(!payload.is_recurring);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_select_category_keeps_typed_name() {
        let mut draft = ExpenseDraft::new("10", ExpenseLabel::other("Gym"));
        draft.select_category("Travel");
        assert_eq!(draft.label, ExpenseLabel::category("Travel"));

        draft.select_category("Other");
        assert_eq!(draft.label, ExpenseLabel::other(""));

        draft.label = ExpenseLabel::other("Gym");
        draft.select_category("Other");
        assert_eq!(draft.label, ExpenseLabel::other("Gym"));
    }

    #[test]
    fn test_edit_expense_round_trips_to_update() {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let expense = ExpenseRecord::new("exp-7", Money::from_cents(4550), created)
            .with_name("Pilates")
            .recurring(RecurrenceInterval::Weekly);

        let draft = ExpenseDraft::edit(&expense);
        assert_eq!(draft.label, ExpenseLabel::other("Pilates"));
        assert_eq!(draft.amount, "45.5");

        match draft.validate().unwrap() {
            WriteRequest::UpdateExpense { id, payload } => {
                assert_eq!(id.as_str(), "exp-7");
                assert_eq!(payload.name, "Pilates");
                assert_eq!(payload.recurrence_interval, Some(RecurrenceInterval::Weekly));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_recurrence_dates_must_be_ordered() {
        let mut draft = ExpenseDraft::new("10", ExpenseLabel::category("Savings"))
            .recurring(Some(RecurrenceInterval::Monthly));
        draft.recurrence_start_date = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        draft.recurrence_end_date = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert!(draft.validate().unwrap_err().is_validation());

        // Dates are dropped when the expense is not recurring
        draft.is_recurring = false;
        let payload = draft.payload().unwrap();
        assert!(payload.recurrence_start_date.is_none());
    }

    #[test]
    fn test_income_source_is_optional() {
        let draft = IncomeDraft::new("5000", "  ");
        let payload = draft.payload().unwrap();
        assert_eq!(payload.source, None);

        let draft = IncomeDraft::new("5000", "Salary");
        assert_eq!(draft.payload().unwrap().source.as_deref(), Some("Salary"));
        assert!(IncomeDraft::new("", "Salary").validate().is_err());
    }

    #[test]
    fn test_budget_items() {
        let mut draft = BudgetDraft::new(MonthBucket::new(2025, 3).unwrap());

        assert!(draft.add_item("  ", "100").unwrap_err().is_validation());
        assert!(draft.add_item("Food", "lots").unwrap_err().is_validation());

        let food = draft.add_item(" Food ", "10000").unwrap();
        let travel = draft.add_item("Travel", "2500").unwrap();
        assert!(food.is_draft());
        assert_eq!(draft.items()[0].category, "Food");
        assert_eq!(draft.total_estimated(), Money::from_units(12500));

        draft.edit_item(&travel, "Transportation", "3000").unwrap();
        assert_eq!(draft.items()[1].category, "Transportation");

        draft.remove_item(&food).unwrap();
        assert_eq!(draft.items().len(), 1);
        assert!(draft.remove_item(&food).unwrap_err().is_not_found());

        draft.expected_income = "250000".into();
        let payload = draft.payload().unwrap();
        assert_eq!(payload.month, 3);
        assert_eq!(payload.year, 2025);
        assert_eq!(payload.expected_income, Some(Money::from_units(250000)));
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn test_budget_from_saved_record() {
        let budget = BudgetRecord::new("bud-1", MonthBucket::new(2025, 4).unwrap())
            .with_item("Food", Money::from_units(200))
            .with_expected_income(Money::from_units(900));

        let draft = BudgetDraft::from_budget(&budget);
        assert_eq!(draft.expected_income, "900");
        assert_eq!(draft.items().len(), 1);

        let mut bad = draft.clone();
        bad.expected_income = "nine hundred".into();
        assert!(bad.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_reimbursement_draft() {
        let mut draft = ReimbursementDraft::new("exp-1");
        draft.amount = "400".into();
        assert!(draft.validate().unwrap_err().is_validation());

        draft.date = "2025-02-03".into();
        draft.note = " Tolu ".into();
        match draft.validate().unwrap() {
            WriteRequest::AddReimbursement { expense_id, payload } => {
                assert_eq!(expense_id.as_str(), "exp-1");
                assert_eq!(payload.note.as_deref(), Some("Tolu"));
                assert_eq!(payload.status, ReimbursementStatus::Partial);
            }
            other => panic!("unexpected request {:?}", other),
        }

        draft.reset();
        assert!(draft.amount.is_empty());
        assert_eq!(draft.expense_id.as_str(), "exp-1");
    }
}
