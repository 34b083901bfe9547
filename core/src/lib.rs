#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the stepgate engine.
//!
//! This crate defines the vocabulary that connects the generation systems and
//! the adapters. The [`TemplateCatalog`] is an immutable configuration value
//! describing every interaction step the engine may emit. Systems read the
//! catalog, derive a budget from caller supplied [`UserParams`], and respond
//! with a [`Sequence`] of [`StepInstance`] values. Nothing in this crate
//! performs I/O or holds mutable shared state.

use std::{collections::HashSet, fmt, num::NonZeroU32, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target duration used whenever a caller supplies an unrecognised preset.
pub const DEFAULT_TARGET_SECONDS: u32 = 60;

/// Number of digest characters retained in sequence metadata for tracing.
pub const SEED_PREFIX_LEN: usize = 8;

/// Identifier naming a template inside a [`TemplateCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Creates a template identifier from the provided name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retrieves the textual form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Parameter-generation bounds for a timed wait.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerRule {
    min_seconds: u32,
    max_seconds: u32,
    step_seconds: u32,
    cost_factor: f64,
}

impl TimerRule {
    /// Creates a timer rule; `cost_factor` scales the duration into its time cost.
    #[must_use]
    pub const fn new(
        min_seconds: u32,
        max_seconds: u32,
        step_seconds: u32,
        cost_factor: f64,
    ) -> Self {
        Self {
            min_seconds,
            max_seconds,
            step_seconds,
            cost_factor,
        }
    }

    /// Shortest duration the timer may produce.
    #[must_use]
    pub const fn min_seconds(&self) -> u32 {
        self.min_seconds
    }

    /// Longest duration the timer may produce.
    #[must_use]
    pub const fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    /// Granularity every generated duration is a multiple of.
    #[must_use]
    pub const fn step_seconds(&self) -> u32 {
        self.step_seconds
    }

    /// Multiplier converting a duration into its estimated time cost.
    #[must_use]
    pub const fn cost_factor(&self) -> f64 {
        self.cost_factor
    }
}

/// Parameter-generation bounds for a click challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRule {
    min_clicks: u32,
    max_clicks: u32,
    clicks_per_second: u32,
}

impl ClickRule {
    /// Creates a click rule using the assumed visitor click rate.
    #[must_use]
    pub const fn new(min_clicks: u32, max_clicks: u32, clicks_per_second: u32) -> Self {
        Self {
            min_clicks,
            max_clicks,
            clicks_per_second,
        }
    }

    /// Fewest clicks the challenge may demand.
    #[must_use]
    pub const fn min_clicks(&self) -> u32 {
        self.min_clicks
    }

    /// Most clicks the challenge may demand.
    #[must_use]
    pub const fn max_clicks(&self) -> u32 {
        self.max_clicks
    }

    /// Assumed click rate used for both generation and time estimation.
    #[must_use]
    pub const fn clicks_per_second(&self) -> u32 {
        self.clicks_per_second
    }
}

/// Policy dividing a composite's time budget between its two components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TimeSplit {
    /// The first component receives `floor(target * first)`, the second the rest.
    Remainder {
        /// Fraction of the budget assigned to the first component.
        first: f64,
    },
    /// Each component independently receives `floor(target * ratio)`.
    Proportional {
        /// Fraction of the budget assigned to the first component.
        first: f64,
        /// Fraction of the budget assigned to the second component.
        second: f64,
    },
}

impl TimeSplit {
    /// Divides `target` seconds into the two component budgets.
    #[must_use]
    pub fn shares(self, target: f64) -> (f64, f64) {
        match self {
            Self::Remainder { first } => {
                let head = (target * first).floor();
                (head, target - head)
            }
            Self::Proportional { first, second } => {
                ((target * first).floor(), (target * second).floor())
            }
        }
    }

    /// Nominal ratios assigned to the first and second component.
    #[must_use]
    pub fn ratios(self) -> (f64, f64) {
        match self {
            Self::Remainder { first } => (first, 1.0 - first),
            Self::Proportional { first, second } => (first, second),
        }
    }
}

/// Expansion rule for a template made of two atomic steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositeRule {
    components: [TemplateId; 2],
    split: TimeSplit,
}

impl CompositeRule {
    /// Creates a composite rule expanding into `components` in declared order.
    #[must_use]
    pub fn new(components: [TemplateId; 2], split: TimeSplit) -> Self {
        Self { components, split }
    }

    /// Atomic template identifiers in the order they are emitted.
    #[must_use]
    pub fn components(&self) -> &[TemplateId; 2] {
        &self.components
    }

    /// Budget split applied before expanding the components.
    #[must_use]
    pub const fn split(&self) -> TimeSplit {
        self.split
    }
}

/// Tagged generation rule attached to every catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TemplateKind {
    /// Atomic timed wait.
    Timer(TimerRule),
    /// Atomic click challenge.
    Click(ClickRule),
    /// Ordered pair of atomic steps.
    Composite(CompositeRule),
}

/// Immutable description of one template in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    id: TemplateId,
    #[serde(flatten)]
    kind: TemplateKind,
}

impl TemplateDescriptor {
    /// Creates a descriptor pairing an identifier with its generation rule.
    #[must_use]
    pub fn new(id: impl Into<TemplateId>, kind: TemplateKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Identifier of the template.
    #[must_use]
    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Generation rule of the template.
    #[must_use]
    pub fn kind(&self) -> &TemplateKind {
        &self.kind
    }

    /// Reports whether the template produces a single concrete parameter.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        !matches!(self.kind, TemplateKind::Composite(_))
    }
}

/// Reasons a custom catalog is rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CatalogError {
    /// The catalog contained no templates.
    #[error("template catalog is empty")]
    Empty,
    /// Two descriptors shared the same identifier.
    #[error("template `{0}` is declared more than once")]
    DuplicateId(TemplateId),
    /// A descriptor declared a minimum above its maximum.
    #[error("template `{id}` has min {min} above max {max}")]
    InvertedBounds {
        /// Offending template.
        id: TemplateId,
        /// Declared minimum.
        min: u32,
        /// Declared maximum.
        max: u32,
    },
    /// A timer declared a zero step or a click template a zero rate.
    #[error("template `{0}` has a zero step or click rate")]
    ZeroGranularity(TemplateId),
    /// A timer declared bounds that are not multiples of its step.
    #[error("template `{0}` has bounds that are not multiples of its step")]
    MisalignedBounds(TemplateId),
    /// A factor or ratio was negative, zero or not finite.
    #[error("template `{id}` has invalid factor {value}")]
    InvalidFactor {
        /// Offending template.
        id: TemplateId,
        /// Rejected value.
        value: f64,
    },
    /// A composite referenced an identifier absent from the catalog.
    #[error("composite `{composite}` references unknown template `{component}`")]
    UnknownComponent {
        /// Composite declaring the reference.
        composite: TemplateId,
        /// Missing component.
        component: TemplateId,
    },
    /// A composite referenced another composite.
    #[error("composite `{composite}` references non-atomic template `{component}`")]
    NonAtomicComponent {
        /// Composite declaring the reference.
        composite: TemplateId,
        /// Component that is itself composite.
        component: TemplateId,
    },
}

/// Read-only registry of templates in fixed enumeration order.
///
/// The catalog is built once per process and shared by reference (or behind
/// an `Arc`) with every generation call. The enumeration order is part of the
/// contract: weighted selection walks entries in this order.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateCatalog {
    descriptors: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Builds the catalog shipped by default: four atomic and three composite templates.
    #[must_use]
    pub fn standard() -> Self {
        let descriptors = vec![
            TemplateDescriptor::new(
                "timer_simple",
                TemplateKind::Timer(TimerRule::new(15, 60, 5, 1.0)),
            ),
            TemplateDescriptor::new(
                "timer_punish",
                TemplateKind::Timer(TimerRule::new(20, 45, 5, 1.5)),
            ),
            TemplateDescriptor::new(
                "click_simple",
                TemplateKind::Click(ClickRule::new(3, 15, 5)),
            ),
            TemplateDescriptor::new(
                "click_drain",
                TemplateKind::Click(ClickRule::new(10, 30, 3)),
            ),
            TemplateDescriptor::new(
                "timer_then_click",
                TemplateKind::Composite(CompositeRule::new(
                    ["timer_simple".into(), "click_simple".into()],
                    TimeSplit::Remainder { first: 0.6 },
                )),
            ),
            TemplateDescriptor::new(
                "click_then_timer",
                TemplateKind::Composite(CompositeRule::new(
                    ["click_simple".into(), "timer_simple".into()],
                    TimeSplit::Remainder { first: 0.4 },
                )),
            ),
            TemplateDescriptor::new(
                "double_timer",
                TemplateKind::Composite(CompositeRule::new(
                    ["timer_simple".into(), "timer_punish".into()],
                    TimeSplit::Proportional {
                        first: 0.5,
                        second: 0.5,
                    },
                )),
            ),
        ];
        Self { descriptors }
    }

    /// Validates and wraps a custom list of descriptors, preserving their order.
    pub fn from_descriptors(descriptors: Vec<TemplateDescriptor>) -> Result<Self, CatalogError> {
        if descriptors.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if !seen.insert(descriptor.id()) {
                return Err(CatalogError::DuplicateId(descriptor.id().clone()));
            }
            validate_rule(descriptor)?;
        }

        for descriptor in &descriptors {
            let TemplateKind::Composite(rule) = descriptor.kind() else {
                continue;
            };
            for component in rule.components() {
                let Some(target) = descriptors.iter().find(|entry| entry.id() == component) else {
                    return Err(CatalogError::UnknownComponent {
                        composite: descriptor.id().clone(),
                        component: component.clone(),
                    });
                };
                if !target.is_atomic() {
                    return Err(CatalogError::NonAtomicComponent {
                        composite: descriptor.id().clone(),
                        component: component.clone(),
                    });
                }
            }
        }

        Ok(Self { descriptors })
    }

    /// Looks up the descriptor registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.id().as_str() == id)
    }

    /// Iterator over descriptors in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.descriptors.iter()
    }

    /// Identifiers in enumeration order.
    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.descriptors.iter().map(TemplateDescriptor::id)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Reports whether the catalog holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_rule(descriptor: &TemplateDescriptor) -> Result<(), CatalogError> {
    let id = descriptor.id();
    match descriptor.kind() {
        TemplateKind::Timer(rule) => {
            check_bounds(id, rule.min_seconds(), rule.max_seconds())?;
            let step = rule.step_seconds();
            if step == 0 {
                return Err(CatalogError::ZeroGranularity(id.clone()));
            }
            if rule.min_seconds() % step != 0 || rule.max_seconds() % step != 0 {
                return Err(CatalogError::MisalignedBounds(id.clone()));
            }
            check_factor(id, rule.cost_factor())
        }
        TemplateKind::Click(rule) => {
            check_bounds(id, rule.min_clicks(), rule.max_clicks())?;
            if rule.clicks_per_second() == 0 {
                return Err(CatalogError::ZeroGranularity(id.clone()));
            }
            Ok(())
        }
        TemplateKind::Composite(rule) => {
            let (first, second) = rule.split().ratios();
            check_factor(id, first)?;
            check_factor(id, second)
        }
    }
}

fn check_bounds(id: &TemplateId, min: u32, max: u32) -> Result<(), CatalogError> {
    if min > max {
        return Err(CatalogError::InvertedBounds {
            id: id.clone(),
            min,
            max,
        });
    }
    Ok(())
}

fn check_factor(id: &TemplateId, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::InvalidFactor {
            id: id.clone(),
            value,
        });
    }
    Ok(())
}

/// Discriminant of a generated step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepType {
    /// Timed wait.
    Timer,
    /// Click challenge.
    Click,
    /// Ordered pair of atomic steps.
    Composite,
}

/// Resolved parameter carried by a [`StepInstance`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepParameter {
    /// Countdown length in seconds.
    Timer {
        /// Seconds the visitor must wait.
        duration: u32,
    },
    /// Number of clicks demanded.
    Click {
        /// Clicks the visitor must perform.
        target: u32,
    },
    /// Child steps produced by a composite template.
    Composite {
        /// Atomic steps in emission order.
        sequence: Vec<StepInstance>,
    },
}

/// One concrete generated unit of a [`Sequence`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInstance {
    #[serde(flatten)]
    parameter: StepParameter,
    subtype: TemplateId,
    estimated_time: f64,
}

impl StepInstance {
    /// Creates a timed wait instance.
    #[must_use]
    pub fn timer(subtype: TemplateId, duration: u32, estimated_time: f64) -> Self {
        Self {
            parameter: StepParameter::Timer { duration },
            subtype,
            estimated_time,
        }
    }

    /// Creates a click challenge instance.
    #[must_use]
    pub fn click(subtype: TemplateId, target: u32, estimated_time: f64) -> Self {
        Self {
            parameter: StepParameter::Click { target },
            subtype,
            estimated_time,
        }
    }

    /// Wraps child steps; the estimate is the exact sum of the children's estimates.
    #[must_use]
    pub fn composite(subtype: TemplateId, sequence: Vec<StepInstance>) -> Self {
        let estimated_time = total_estimated_time(&sequence);
        Self {
            parameter: StepParameter::Composite { sequence },
            subtype,
            estimated_time,
        }
    }

    /// Discriminant of the step.
    #[must_use]
    pub fn step_type(&self) -> StepType {
        match self.parameter {
            StepParameter::Timer { .. } => StepType::Timer,
            StepParameter::Click { .. } => StepType::Click,
            StepParameter::Composite { .. } => StepType::Composite,
        }
    }

    /// Template that produced the step.
    #[must_use]
    pub fn subtype(&self) -> &TemplateId {
        &self.subtype
    }

    /// Resolved parameter of the step.
    #[must_use]
    pub fn parameter(&self) -> &StepParameter {
        &self.parameter
    }

    /// Estimated seconds the visitor spends on the step.
    #[must_use]
    pub fn estimated_time(&self) -> f64 {
        self.estimated_time
    }

    /// Child steps of a composite; empty for atomic steps.
    #[must_use]
    pub fn children(&self) -> &[StepInstance] {
        match &self.parameter {
            StepParameter::Composite { sequence } => sequence,
            _ => &[],
        }
    }
}

/// Sums the estimated time of the provided steps.
#[must_use]
pub fn total_estimated_time(steps: &[StepInstance]) -> f64 {
    steps.iter().map(StepInstance::estimated_time).sum()
}

/// Traceability data attached to every generated [`Sequence`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceMetadata {
    target_time: u32,
    actual_time: f64,
    step_count: u32,
    requested_steps: u32,
    seed_prefix: String,
}

impl SequenceMetadata {
    /// Total duration requested by the caller, in seconds.
    #[must_use]
    pub const fn target_time(&self) -> u32 {
        self.target_time
    }

    /// Sum of the generated steps' estimated times.
    #[must_use]
    pub const fn actual_time(&self) -> f64 {
        self.actual_time
    }

    /// Number of steps actually produced.
    #[must_use]
    pub const fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Number of steps the planner attempted to produce.
    #[must_use]
    pub const fn requested_steps(&self) -> u32 {
        self.requested_steps
    }

    /// Leading characters of the digest that seeded the generation.
    #[must_use]
    pub fn seed_prefix(&self) -> &str {
        &self.seed_prefix
    }
}

/// Ordered list of generated steps plus metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    sequence: Vec<StepInstance>,
    metadata: SequenceMetadata,
}

impl Sequence {
    /// Assembles a sequence, deriving `actual_time` and `step_count` from `steps`.
    #[must_use]
    pub fn new(
        steps: Vec<StepInstance>,
        target_time: u32,
        requested_steps: u32,
        seed_prefix: impl Into<String>,
    ) -> Self {
        let metadata = SequenceMetadata {
            target_time,
            actual_time: total_estimated_time(&steps),
            step_count: u32::try_from(steps.len()).unwrap_or(u32::MAX),
            requested_steps,
            seed_prefix: seed_prefix.into(),
        };
        Self {
            sequence: steps,
            metadata,
        }
    }

    /// Generated steps in order.
    #[must_use]
    pub fn steps(&self) -> &[StepInstance] {
        &self.sequence
    }

    /// Metadata describing the generation.
    #[must_use]
    pub fn metadata(&self) -> &SequenceMetadata {
        &self.metadata
    }
}

/// Total-duration presets accepted from callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimePreset {
    /// Thirty seconds.
    ThirtySeconds,
    /// One minute.
    OneMinute,
    /// Two minutes.
    TwoMinutes,
    /// Five minutes.
    FiveMinutes,
    /// Ten minutes.
    TenMinutes,
}

impl TimePreset {
    /// Every preset in ascending order.
    pub const ALL: [TimePreset; 5] = [
        Self::ThirtySeconds,
        Self::OneMinute,
        Self::TwoMinutes,
        Self::FiveMinutes,
        Self::TenMinutes,
    ];

    /// Parses a preset label such as `"2min"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }

    /// Canonical label of the preset.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThirtySeconds => "30s",
            Self::OneMinute => "1min",
            Self::TwoMinutes => "2min",
            Self::FiveMinutes => "5min",
            Self::TenMinutes => "10min",
        }
    }

    /// Duration of the preset in seconds.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        match self {
            Self::ThirtySeconds => 30,
            Self::OneMinute => 60,
            Self::TwoMinutes => 120,
            Self::FiveMinutes => 300,
            Self::TenMinutes => 600,
        }
    }
}

/// Link expiry presets accepted from callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpiryPreset {
    /// One hour.
    OneHour,
    /// One day.
    OneDay,
    /// Three days.
    ThreeDays,
    /// Seven days.
    SevenDays,
}

impl ExpiryPreset {
    /// Every preset in ascending order.
    pub const ALL: [ExpiryPreset; 4] = [
        Self::OneHour,
        Self::OneDay,
        Self::ThreeDays,
        Self::SevenDays,
    ];

    /// Parses an expiry label such as `"3d"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }

    /// Canonical label of the preset.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::ThreeDays => "3d",
            Self::SevenDays => "7d",
        }
    }

    /// Lifetime of the preset.
    #[must_use]
    pub const fn duration(self) -> Duration {
        let seconds = match self {
            Self::OneHour => 3_600,
            Self::OneDay => 86_400,
            Self::ThreeDays => 3 * 86_400,
            Self::SevenDays => 7 * 86_400,
        };
        Duration::from_secs(seconds)
    }

    /// Lifetime of the preset expressed in (possibly fractional) days.
    #[must_use]
    pub fn days(self) -> f64 {
        self.duration().as_secs_f64() / 86_400.0
    }
}

/// Caller supplied generation parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserParams {
    time_preset: String,
    steps: Option<u32>,
}

impl UserParams {
    /// Creates parameters from a preset label and an optional step count.
    #[must_use]
    pub fn new(time_preset: impl Into<String>, steps: Option<u32>) -> Self {
        Self {
            time_preset: time_preset.into(),
            steps,
        }
    }

    /// Preset label exactly as supplied.
    #[must_use]
    pub fn time_preset(&self) -> &str {
        &self.time_preset
    }

    /// Target duration in seconds; unrecognised labels fall back to [`DEFAULT_TARGET_SECONDS`].
    #[must_use]
    pub fn target_time(&self) -> u32 {
        TimePreset::from_label(&self.time_preset).map_or(DEFAULT_TARGET_SECONDS, TimePreset::seconds)
    }

    /// Explicit step count, treating zero as absent.
    #[must_use]
    pub fn steps(&self) -> Option<NonZeroU32> {
        self.steps.and_then(NonZeroU32::new)
    }
}

/// Whether selection weights follow the drifting budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightingMode {
    /// Weights are scored once from the initial per-step allocation.
    #[default]
    ComputeOnce,
    /// Weights are rescored from every step's own allocation and remaining steps.
    RecomputePerStep,
}

/// Tunable generation behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Weighting policy applied by the sequence builder.
    pub weighting: WeightingMode,
}
