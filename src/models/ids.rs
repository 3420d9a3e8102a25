//! Strongly-typed ID wrappers for all entity types
//!
//! The API issues opaque string identifiers. Wrapping them in newtypes keeps
//! an expense ID from being passed where a budget ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $draft_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier issued by the API
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a local identifier for a record that has not been saved yet
            pub fn draft() -> Self {
                Self(format!("{}{}", $draft_prefix, Uuid::new_v4()))
            }

            /// Whether this identifier was generated locally
            pub fn is_draft(&self) -> bool {
                self.0.starts_with($draft_prefix)
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(IncomeId, "draft-inc-");
define_id!(ExpenseId, "draft-exp-");
define_id!(ReimbursementId, "draft-rmb-");
define_id!(BudgetId, "draft-bud-");
define_id!(BudgetItemId, "draft-itm-");
define_id!(UserId, "draft-usr-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_api_identifier() {
        let id = ExpenseId::new("clx9a0b1c0000");
        assert_eq!(id.as_str(), "clx9a0b1c0000");
        assert_eq!(id.to_string(), "clx9a0b1c0000");
        assert!(!id.is_draft());
    }

    #[test]
    fn test_draft_ids_are_unique() {
        let a = BudgetItemId::draft();
        let b = BudgetItemId::draft();
        assert!(a.is_draft());
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serialization() {
        let id = IncomeId::from("inc-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"inc-1\"");
        let deserialized: IncomeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
