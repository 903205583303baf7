use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// Simulated user interest state, persisted across re-generations within
/// a session.
///
/// `primary` is fixed for the session. `secondary` starts unset and is
/// written only by an explicit like event on an exploration-slot item;
/// an explicit reset clears it. Passed into allocation as context rather
/// than read from a global, so the pipeline stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterestProfile {
    pub primary: Category,
    pub secondary: Option<Category>,
}

impl InterestProfile {
    pub fn new(primary: Category) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }
}

impl Default for InterestProfile {
    fn default() -> Self {
        Self::new(Category::Comedy)
    }
}
