// Adjustment reference resolution.
//
// Line items carry adjustment ids, not adjustment values; resolving them is
// the responsibility of whatever stores the definitions. The engine only
// depends on this trait so tests and previews can run against a fixed
// in-memory table.

use std::collections::HashMap;

use crate::modules::adjustments::models::Adjustment;

/// Resolves adjustment references attached to line items
pub trait AdjustmentLookup: Send + Sync {
    fn find(&self, id: &str) -> Option<Adjustment>;
}

/// Fixed adjustment table, used by previews and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryAdjustments {
    adjustments: HashMap<String, Adjustment>,
}

impl InMemoryAdjustments {
    pub fn new(adjustments: Vec<Adjustment>) -> Self {
        Self {
            adjustments: adjustments
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
        }
    }

    pub fn insert(&mut self, adjustment: Adjustment) {
        self.adjustments.insert(adjustment.id.clone(), adjustment);
    }
}

impl AdjustmentLookup for InMemoryAdjustments {
    fn find(&self, id: &str) -> Option<Adjustment> {
        self.adjustments.get(id).cloned()
    }
}
