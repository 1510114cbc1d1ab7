//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `StaffId` where a `ProjectId` is expected,
//! which matters most for time logs and budget lines that reference staff by id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(ProjectId, "Unique identifier for a design project.");
typed_id!(StaffId, "Unique identifier for a staff member assigned to a project.");
typed_id!(BudgetLaborId, "Unique identifier for a planned labor line.");
typed_id!(BudgetExpenseId, "Unique identifier for a planned non-labor line.");
typed_id!(TimeLogId, "Unique identifier for a time log entry.");
typed_id!(ExpenseId, "Unique identifier for an actual expense.");
typed_id!(PaymentId, "Unique identifier for a contract payment or variation order.");
