#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Weighted template selection.

use stepgate_core::{TemplateCatalog, TemplateId, TemplateKind};

/// Floor applied to every computed weight.
pub const MIN_WEIGHT: f64 = 0.1;

const FAVOURED_WEIGHT: f64 = 2.0;
const DISFAVOURED_WEIGHT: f64 = 0.5;
const COMPOSITE_WEIGHT: f64 = 1.0;
const LONE_COMPOSITE_WEIGHT: f64 = 3.0;
const TIMER_WINDOW_SECONDS: (f64, f64) = (15.0, 60.0);
const LONE_COMPOSITE_THRESHOLD_SECONDS: f64 = 45.0;

/// Scores how well a template fits a per-step budget.
///
/// Timers are favoured when the budget sits inside the timer window, clicks
/// when the budget affords their minimum click count, and composites when a
/// single long step remains.
#[must_use]
pub fn template_weight(kind: &TemplateKind, time_per_step: f64, remaining_steps: u32) -> f64 {
    let weight = match kind {
        TemplateKind::Timer(_) => {
            let (low, high) = TIMER_WINDOW_SECONDS;
            if (low..=high).contains(&time_per_step) {
                FAVOURED_WEIGHT
            } else {
                DISFAVOURED_WEIGHT
            }
        }
        TemplateKind::Click(rule) => {
            let affordable = time_per_step * f64::from(rule.clicks_per_second());
            if affordable >= f64::from(rule.min_clicks()) {
                FAVOURED_WEIGHT
            } else {
                DISFAVOURED_WEIGHT
            }
        }
        TemplateKind::Composite(_) => {
            if remaining_steps == 1 && time_per_step > LONE_COMPOSITE_THRESHOLD_SECONDS {
                LONE_COMPOSITE_WEIGHT
            } else {
                COMPOSITE_WEIGHT
            }
        }
    };
    weight.max(MIN_WEIGHT)
}

/// Selection weights for every catalog entry, in enumeration order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    entries: Vec<(TemplateId, f64)>,
    total: f64,
}

impl WeightTable {
    /// Scores every catalog entry against the provided budget.
    #[must_use]
    pub fn compute(catalog: &TemplateCatalog, time_per_step: f64, remaining_steps: u32) -> Self {
        let entries: Vec<(TemplateId, f64)> = catalog
            .iter()
            .map(|descriptor| {
                let weight = template_weight(descriptor.kind(), time_per_step, remaining_steps);
                (descriptor.id().clone(), weight)
            })
            .collect();
        let total = entries.iter().map(|(_, weight)| weight).sum();
        Self { entries, total }
    }

    /// Weight assigned to `id`, if scored.
    #[must_use]
    pub fn weight(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.as_str() == id)
            .map(|(_, weight)| *weight)
    }

    /// Iterator over identifiers and weights in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&TemplateId, f64)> {
        self.entries.iter().map(|(id, weight)| (id, *weight))
    }

    /// Sum of all weights.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Picks an identifier for a draw in `[0, 1)`.
    ///
    /// Walks the entries subtracting each weight from `draw * total` and
    /// returns the entry that brings the remainder to zero or below. When
    /// rounding exhausts the walk, the first entry is returned. Only an empty
    /// table yields `None`.
    #[must_use]
    pub fn select(&self, draw: f64) -> Option<&TemplateId> {
        let mut remainder = draw * self.total;
        for (id, weight) in &self.entries {
            remainder -= weight;
            if remainder <= 0.0 {
                return Some(id);
            }
        }
        self.entries.first().map(|(id, _)| id)
    }
}
