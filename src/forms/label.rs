//! Expense label selection
//!
//! An expense is either filed under one of the fixed categories, in which case
//! its stored name is the category label, or under "Other" with a free-text
//! name the user types in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::OTHER_CATEGORY;

/// Categories offered by the expense form, in display order
pub const EXPENSE_CATEGORIES: [&str; 15] = [
    "Rent/Mortgage",
    "Utilities",
    "Groceries",
    "Transportation",
    "Dining Out",
    "Entertainment",
    "Healthcare",
    "Education",
    "Shopping",
    "Travel",
    "Insurance",
    "Savings",
    "Debt Payment",
    "Gifts/Donations",
    OTHER_CATEGORY,
];

/// Whether `label` is one of the fixed categories other than "Other"
pub fn is_known_category(label: &str) -> bool {
    label != OTHER_CATEGORY && EXPENSE_CATEGORIES.contains(&label)
}

/// The label chosen on the expense form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpenseLabel {
    Category { label: String },
    Other { name: String },
}

impl Default for ExpenseLabel {
    fn default() -> Self {
        Self::Category {
            label: EXPENSE_CATEGORIES[0].to_string(),
        }
    }
}

impl ExpenseLabel {
    /// A category selection; choosing "Other" yields an empty free-text name
    pub fn category(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == OTHER_CATEGORY {
            Self::other("")
        } else {
            Self::Category { label }
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::Other { name: name.into() }
    }

    /// Label for an expense being edited
    ///
    /// A stored name matching a known category opens as that category;
    /// anything else opens as "Other" with the name pre-filled.
    pub fn from_existing_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if is_known_category(n) => Self::Category {
                label: n.to_string(),
            },
            Some(n) => Self::other(n),
            None => Self::other(""),
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other { .. })
    }

    /// The category shown in the picker
    pub fn picker_value(&self) -> &str {
        match self {
            Self::Category { label } => label,
            Self::Other { .. } => OTHER_CATEGORY,
        }
    }

    /// The name the expense is saved under
    pub fn stored_name(&self) -> MonthwiseResult<String> {
        match self {
            Self::Category { label } if is_known_category(label) => Ok(label.clone()),
            Self::Category { label } => Err(MonthwiseError::Validation(format!(
                "Unknown expense category '{}'. Choose one of: {}",
                label,
                EXPENSE_CATEGORIES.join(", ")
            ))),
            Self::Other { name } => {
                let name = name.trim();
                if name.is_empty() {
                    Err(MonthwiseError::Validation(
                        "Please specify the expense name".into(),
                    ))
                } else {
                    Ok(name.to_string())
                }
            }
        }
    }
}

impl fmt::Display for ExpenseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category { label } => write!(f, "{}", label),
            Self::Other { name } if name.trim().is_empty() => write!(f, "{}", OTHER_CATEGORY),
            Self::Other { name } => write!(f, "{} ({})", OTHER_CATEGORY, name.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_stores_label() {
        let label = ExpenseLabel::category("Groceries");
        assert_eq!(label.stored_name().unwrap(), "Groceries");
        assert_eq!(label.picker_value(), "Groceries");
        assert!(!label.is_other());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = ExpenseLabel::category("Foo").stored_name().unwrap_err();
        assert!(err.is_validation());
        let message = err.to_string();
        assert!(message.contains("'Foo'"));
        assert!(message.contains("Rent/Mortgage, Utilities"));
        assert!(message.contains("Gifts/Donations, Other"));

        assert!(ExpenseLabel::category("").stored_name().is_err());
        assert!(ExpenseLabel::category("groceries").stored_name().is_err());
    }

    #[test]
    fn test_other_requires_name() {
        let err = ExpenseLabel::other("   ").stored_name().unwrap_err();
        assert!(err.is_validation());

        let label = ExpenseLabel::other("  Gym membership ");
        assert_eq!(label.stored_name().unwrap(), "Gym membership");
        assert_eq!(label.picker_value(), "Other");
    }

    #[test]
    fn test_choosing_other_switches_variant() {
        assert_eq!(ExpenseLabel::category("Other"), ExpenseLabel::other(""));
    }

    #[test]
    fn test_from_existing_name() {
        assert_eq!(
            ExpenseLabel::from_existing_name(Some("Travel")),
            ExpenseLabel::category("Travel")
        );
        assert_eq!(
            ExpenseLabel::from_existing_name(Some("Gym")),
            ExpenseLabel::other("Gym")
        );
        assert_eq!(
            ExpenseLabel::from_existing_name(Some("Other")),
            ExpenseLabel::other("Other")
        );
        assert_eq!(ExpenseLabel::from_existing_name(None), ExpenseLabel::other(""));
    }

    #[test]
    fn test_default_is_first_category() {
        assert_eq!(ExpenseLabel::default().picker_value(), "Rent/Mortgage");
        assert_eq!(EXPENSE_CATEGORIES.len(), 15);
        assert!(!is_known_category("Other"));
    }
}
