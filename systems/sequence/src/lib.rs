#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Sequence builder that turns caller parameters into a gated step sequence.
//!
//! Each call owns its own [`LcgStream`] seeded from a fresh digest and only
//! reads the shared [`TemplateCatalog`], so one catalog may serve any number
//! of concurrent builders without locking.

use std::sync::Arc;

use stepgate_core::{
    GenerationConfig, Sequence, StepInstance, TemplateCatalog, UserParams, WeightingMode,
};
use stepgate_system_budget::{max_steps_for, BudgetPlanner};
use stepgate_system_seeding::{EntropySource, LcgStream, SeedDigest, SeedGenerator, SystemEntropy};
use stepgate_system_selection::WeightTable;
use stepgate_system_templates::generate_step;
use tracing::info;

/// Generates a sequence with the default configuration and system entropy.
///
/// Two calls with identical arguments produce independent sequences.
#[must_use]
pub fn generate_constrained_sequence(
    catalog: &TemplateCatalog,
    params: &UserParams,
    fingerprint: &str,
    short_id: &str,
) -> Sequence {
    let seed = SeedGenerator::<SystemEntropy>::default().derive(fingerprint, short_id);
    build_sequence(catalog, GenerationConfig::default(), params, &seed)
}

/// Reusable builder bound to a shared catalog and an entropy source.
#[derive(Debug)]
pub struct SequenceBuilder<E = SystemEntropy> {
    catalog: Arc<TemplateCatalog>,
    config: GenerationConfig,
    seeds: SeedGenerator<E>,
}

impl SequenceBuilder<SystemEntropy> {
    /// Creates a builder drawing entropy from the system clocks and RNG.
    #[must_use]
    pub fn new(catalog: Arc<TemplateCatalog>, config: GenerationConfig) -> Self {
        Self::with_entropy(catalog, config, SystemEntropy::new())
    }
}

impl<E: EntropySource> SequenceBuilder<E> {
    /// Creates a builder drawing entropy from `entropy`.
    #[must_use]
    pub fn with_entropy(catalog: Arc<TemplateCatalog>, config: GenerationConfig, entropy: E) -> Self {
        Self {
            catalog,
            config,
            seeds: SeedGenerator::new(entropy),
        }
    }

    /// Derives a fresh digest from the identifiers and generates a sequence.
    pub fn generate(&mut self, params: &UserParams, fingerprint: &str, short_id: &str) -> Sequence {
        let seed = self.seeds.derive(fingerprint, short_id);
        self.generate_with_seed(params, &seed)
    }

    /// Generates a sequence from an existing digest; identical inputs replay identically.
    #[must_use]
    pub fn generate_with_seed(&self, params: &UserParams, seed: &SeedDigest) -> Sequence {
        build_sequence(&self.catalog, self.config, params, seed)
    }
}

fn build_sequence(
    catalog: &TemplateCatalog,
    config: GenerationConfig,
    params: &UserParams,
    seed: &SeedDigest,
) -> Sequence {
    let target_time = params.target_time();
    let mut planner = BudgetPlanner::new(target_time, params.steps());
    let requested_steps = planner.requested_steps().get();

    info!(
        target_time,
        requested_steps,
        max_steps = max_steps_for(target_time),
        time_preset = params.time_preset(),
        "generating constrained sequence"
    );

    let mut stream = LcgStream::from_digest(seed);
    let initial = WeightTable::compute(catalog, planner.initial_allocation(), requested_steps);
    let mut steps: Vec<StepInstance> = Vec::with_capacity(requested_steps as usize);

    while let Some(allocation) = planner.next_allocation() {
        let rescored;
        let table = match config.weighting {
            WeightingMode::ComputeOnce => &initial,
            WeightingMode::RecomputePerStep => {
                rescored =
                    WeightTable::compute(catalog, allocation.seconds(), allocation.remaining_steps());
                &rescored
            }
        };

        let draw = stream.next_unit();
        let Some(template) = table.select(draw) else {
            continue;
        };
        let Some(step) = generate_step(catalog, template.as_str(), allocation.seconds()) else {
            continue;
        };

        planner.record(step.estimated_time());
        steps.push(step);
    }

    let sequence = Sequence::new(steps, target_time, requested_steps, seed.prefix());
    let metadata = sequence.metadata();
    let summary: Vec<(&str, f64)> = sequence
        .steps()
        .iter()
        .map(|step| (step.subtype().as_str(), step.estimated_time()))
        .collect();
    info!(
        steps = ?summary,
        step_count = metadata.step_count(),
        total_estimated_time = metadata.actual_time(),
        target_time,
        seed = metadata.seed_prefix(),
        "generated sequence"
    );

    sequence
}
