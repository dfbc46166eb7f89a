//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::definition::{Condition, ConditionFlags, ConditionSeries};

impl ConditionSeries {
    pub(crate) fn ensure_closed(&self, action: &str) {
        assert!(
            self.finished,
            "LayerBuilder: series of action `{action}` was never finished \
             (builder must call set_finished before the layer is closed)"
        );
        let first = self.conditions.first().unwrap_or_else(|| {
            panic!("LayerBuilder: action `{action}` has an empty condition series")
        });
        assert!(
            !first
                .flags
                .intersects(ConditionFlags::SERIES_AND | ConditionFlags::SERIES_OR),
            "LayerBuilder: series of action `{action}` opens with an and/or condition"
        );
    }

    pub(crate) fn ensure_last_condition(&mut self) -> &mut Condition {
        self.conditions
            .last_mut()
            .expect("SeriesHandle: add_step called before any condition was added")
    }
}
