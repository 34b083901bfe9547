#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure parameter-generation rules for catalog templates.
//!
//! Every function here is dispatched on the [`TemplateKind`] tag of a
//! descriptor. Out-of-range budgets (negative, huge, or NaN) are absorbed by
//! the clamp rules and never raise; lookups that cannot produce a step return
//! `None` so callers can tell "produced nothing" apart from "produced a step".

use stepgate_core::{
    ClickRule, CompositeRule, StepInstance, TemplateCatalog, TemplateKind, TimerRule,
};
use tracing::{debug, warn};

/// Derives a timer duration for the provided budget.
///
/// The budget is rounded to the nearest multiple of the rule's step and then
/// clamped to `[min, max]`. A budget above `max` always yields `max`.
#[must_use]
pub fn generate_duration(rule: &TimerRule, target_time: f64) -> u32 {
    let step = f64::from(rule.step_seconds());
    let min = f64::from(rule.min_seconds());
    let max = f64::from(rule.max_seconds());

    let rounded = (target_time / step).round() * step;
    let mut duration = rounded.max(min).min(max);
    if target_time > max {
        duration = max;
    }

    duration as u32
}

/// Derives a click count for the provided budget, clamped to `[min, max]`.
#[must_use]
pub fn generate_clicks(rule: &ClickRule, target_time: f64) -> u32 {
    let estimate = (target_time * f64::from(rule.clicks_per_second())).floor();
    let clamped = estimate
        .max(f64::from(rule.min_clicks()))
        .min(f64::from(rule.max_clicks()));
    clamped as u32
}

/// Estimated seconds a visitor spends on a timer of `duration` seconds.
#[must_use]
pub fn timer_estimated_time(rule: &TimerRule, duration: u32) -> f64 {
    f64::from(duration) * rule.cost_factor()
}

/// Estimated seconds a visitor spends producing `clicks` clicks.
#[must_use]
pub fn click_estimated_time(rule: &ClickRule, clicks: u32) -> f64 {
    (f64::from(clicks) / f64::from(rule.clicks_per_second())).ceil()
}

/// Materialises an atomic template.
///
/// Returns `None` when `id` is absent from the catalog or names a composite.
#[must_use]
pub fn generate_atomic(
    catalog: &TemplateCatalog,
    id: &str,
    target_time: f64,
) -> Option<StepInstance> {
    let descriptor = catalog.get(id)?;
    match descriptor.kind() {
        TemplateKind::Timer(rule) => {
            let duration = generate_duration(rule, target_time);
            let estimated_time = timer_estimated_time(rule, duration);
            debug!(template = id, target_time, duration, estimated_time, "generated timer step");
            Some(StepInstance::timer(
                descriptor.id().clone(),
                duration,
                estimated_time,
            ))
        }
        TemplateKind::Click(rule) => {
            let clicks = generate_clicks(rule, target_time);
            let estimated_time = click_estimated_time(rule, clicks);
            debug!(template = id, target_time, clicks, estimated_time, "generated click step");
            Some(StepInstance::click(
                descriptor.id().clone(),
                clicks,
                estimated_time,
            ))
        }
        TemplateKind::Composite(_) => None,
    }
}

/// Splits the budget by the composite's ratio and generates both components in declared order.
///
/// Components that fail to materialise are omitted.
#[must_use]
pub fn expand_composite(
    catalog: &TemplateCatalog,
    rule: &CompositeRule,
    target_time: f64,
) -> Vec<StepInstance> {
    let (first_share, second_share) = rule.split().shares(target_time);
    let [first, second] = rule.components();

    [(first, first_share), (second, second_share)]
        .into_iter()
        .filter_map(|(component, share)| generate_atomic(catalog, component.as_str(), share))
        .collect()
}

/// Materialises any template, recursing into composites.
///
/// Unknown identifiers are logged and yield `None`.
#[must_use]
pub fn generate_step(
    catalog: &TemplateCatalog,
    id: &str,
    target_time: f64,
) -> Option<StepInstance> {
    let Some(descriptor) = catalog.get(id) else {
        warn!(template = id, "unknown template requested; skipping step");
        return None;
    };

    match descriptor.kind() {
        TemplateKind::Composite(rule) => {
            let children = expand_composite(catalog, rule, target_time);
            Some(StepInstance::composite(descriptor.id().clone(), children))
        }
        TemplateKind::Timer(_) | TemplateKind::Click(_) => {
            generate_atomic(catalog, id, target_time)
        }
    }
}
