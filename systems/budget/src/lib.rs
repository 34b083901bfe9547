#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Step-count limits and per-step time allocation.
//!
//! The planner hands out allocations against a drifting remainder: after each
//! produced step the remainder shrinks by the step's actual estimated time,
//! not by its allocation, so the final total only approximates the target.

use std::num::NonZeroU32;

/// Upper bound on the number of steps for a target duration in seconds.
#[must_use]
pub const fn max_steps_for(target_time: u32) -> u32 {
    match target_time {
        0..=30 => 2,
        31..=60 => 3,
        61..=120 => 4,
        _ => 5,
    }
}

/// Resolves the number of steps to attempt.
///
/// An absent request selects the maximum; any request is capped by
/// [`max_steps_for`]. The result is never zero.
#[must_use]
pub fn requested_steps(target_time: u32, requested: Option<NonZeroU32>) -> NonZeroU32 {
    let max_steps = max_steps_for(target_time);
    let wanted = requested.map_or(max_steps, NonZeroU32::get).min(max_steps);
    NonZeroU32::new(wanted).unwrap_or(NonZeroU32::MIN)
}

/// Time budget handed to a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepAllocation {
    index: u32,
    seconds: f64,
    remaining_steps: u32,
    is_last: bool,
}

impl StepAllocation {
    /// Zero-based position of the step in the plan.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Seconds allocated to the step.
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Steps still to be produced, including this one.
    #[must_use]
    pub const fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    /// Reports whether this is the final planned step.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.is_last
    }
}

/// Stateful allocator for one generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetPlanner {
    target_time: u32,
    requested_steps: NonZeroU32,
    remaining_time: f64,
    remaining_steps: u32,
    next_index: u32,
}

impl BudgetPlanner {
    /// Creates a planner for `target_time` seconds and an optional explicit step count.
    #[must_use]
    pub fn new(target_time: u32, requested: Option<NonZeroU32>) -> Self {
        let requested_steps = requested_steps(target_time, requested);
        Self {
            target_time,
            requested_steps,
            remaining_time: f64::from(target_time),
            remaining_steps: requested_steps.get(),
            next_index: 0,
        }
    }

    /// Total duration being planned, in seconds.
    #[must_use]
    pub const fn target_time(&self) -> u32 {
        self.target_time
    }

    /// Number of steps the plan attempts.
    #[must_use]
    pub const fn requested_steps(&self) -> NonZeroU32 {
        self.requested_steps
    }

    /// Even split of the target across the requested steps, floored.
    #[must_use]
    pub fn initial_allocation(&self) -> f64 {
        (f64::from(self.target_time) / f64::from(self.requested_steps.get())).floor()
    }

    /// Seconds not yet consumed by produced steps; may turn negative.
    #[must_use]
    pub const fn remaining_time(&self) -> f64 {
        self.remaining_time
    }

    /// Steps not yet produced.
    #[must_use]
    pub const fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    /// Allocation for the next planned step, or `None` once every step was visited.
    ///
    /// The last step receives whatever time remains; earlier steps receive
    /// `floor(remaining_time / remaining_steps)`.
    pub fn next_allocation(&mut self) -> Option<StepAllocation> {
        let planned = self.requested_steps.get();
        if self.next_index >= planned {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        let remaining_steps = self.remaining_steps.max(1);
        let is_last = index + 1 == planned;
        let seconds = if is_last {
            self.remaining_time
        } else {
            (self.remaining_time / f64::from(remaining_steps)).floor()
        };

        Some(StepAllocation {
            index,
            seconds,
            remaining_steps,
            is_last,
        })
    }

    /// Books a produced step against the remainder.
    pub fn record(&mut self, estimated_time: f64) {
        self.remaining_time -= estimated_time;
        self.remaining_steps = self.remaining_steps.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_steps_follow_thresholds() {
        assert_eq!(max_steps_for(0), 2);
        assert_eq!(max_steps_for(30), 2);
        assert_eq!(max_steps_for(31), 3);
        assert_eq!(max_steps_for(60), 3);
        assert_eq!(max_steps_for(120), 4);
        assert_eq!(max_steps_for(121), 5);
        assert_eq!(max_steps_for(600), 5);
    }

    #[test]
    fn requested_steps_are_capped_and_defaulted() {
        assert_eq!(requested_steps(60, None).get(), 3);
        assert_eq!(requested_steps(60, NonZeroU32::new(10)).get(), 3);
        assert_eq!(requested_steps(600, NonZeroU32::new(2)).get(), 2);
    }

    #[test]
    fn allocations_track_actual_estimates() {
        let mut planner = BudgetPlanner::new(60, None);
        assert!((planner.initial_allocation() - 20.0).abs() < f64::EPSILON);

        let first = planner.next_allocation().expect("first step");
        assert_eq!(first.index(), 0);
        assert!((first.seconds() - 20.0).abs() < f64::EPSILON);
        assert!(!first.is_last());
        planner.record(10.0);

        let second = planner.next_allocation().expect("second step");
        assert!((second.seconds() - 25.0).abs() < f64::EPSILON);
        assert_eq!(second.remaining_steps(), 2);
        planner.record(37.5);

        let last = planner.next_allocation().expect("last step");
        assert!(last.is_last());
        assert!((last.seconds() - 12.5).abs() < f64::EPSILON);
        planner.record(15.0);

        assert!(planner.next_allocation().is_none());
        assert!((planner.remaining_time() + 2.5).abs() < f64::EPSILON);
        assert_eq!(planner.remaining_steps(), 0);
    }

    #[test]
    fn skipped_steps_keep_remaining_count() {
        let mut planner = BudgetPlanner::new(120, None);
        let first = planner.next_allocation().expect("first step");
        assert!((first.seconds() - 30.0).abs() < f64::EPSILON);

        let second = planner.next_allocation().expect("second step");
        assert_eq!(second.remaining_steps(), 4);
        assert!((second.seconds() - 30.0).abs() < f64::EPSILON);
    }
}
