//! Staff lookup by id.

use std::collections::HashMap;

use feeburn_shared::types::StaffId;
use rust_decimal::Decimal;

use crate::project::Staff;

/// Staff records indexed by id, built once per engine run.
///
/// Time logs and budget lines may reference staff that no longer exist.
/// Such references simply do not resolve and contribute nothing.
#[derive(Debug, Default)]
pub struct StaffDirectory<'a> {
    by_id: HashMap<StaffId, &'a Staff>,
}

impl<'a> StaffDirectory<'a> {
    /// Builds the directory. On duplicate ids the last record wins.
    #[must_use]
    pub fn new(staff: &'a [Staff]) -> Self {
        Self {
            by_id: staff.iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Looks up a staff member.
    #[must_use]
    pub fn resolve(&self, id: StaffId) -> Option<&'a Staff> {
        self.by_id.get(&id).copied()
    }
}

/// Loaded cost of `hours` worked at `base_rate`.
#[must_use]
pub fn loaded_cost(hours: Decimal, base_rate: Decimal, overhead_multiplier: Decimal) -> Decimal {
    hours * base_rate * overhead_multiplier
}
