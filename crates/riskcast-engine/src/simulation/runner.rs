//! Batched Monte Carlo trial loop.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use riskcast_core::cancel::CancellationToken;
use riskcast_core::constants::SIMULATION_BATCH_SIZE;
use riskcast_core::errors::{ComputeError, EngineError};
use riskcast_core::types::{Dataset, DistributionSpec, ModelConfig, ModelType, SimulationResult};

use crate::risk;
use crate::simulation::sampler;

/// Where a trial gets one input's value from.
enum InputSource {
    /// Historical mean, fixed across all trials.
    Baseline(f64),
    /// Fresh draw per trial.
    Sampled(DistributionSpec),
}

/// Monte Carlo simulation runner.
///
/// Trials are mutually independent: each consumes only the read-only
/// baseline values, coefficients, and model type, and produces one
/// outcome at its own trial index. The loop fans out over fixed-size
/// batches, one seeded `SmallRng` stream per batch, so a fixed seed
/// reproduces the full outcome sequence regardless of worker count.
pub struct SimulationRunner {
    /// Master seed (None = drawn from OS entropy, non-reproducible).
    seed: Option<u64>,
    /// Checked between batches; the batch in flight always completes.
    cancel: Option<CancellationToken>,
}

impl SimulationRunner {
    pub fn new() -> Self {
        Self { seed: None, cancel: None }
    }

    /// Set a deterministic master seed for reproducible outcome sequences.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attach a cancellation token checked between trial batches.
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the configured simulation against the historical dataset.
    ///
    /// Configuration errors are detected before any simulation work and
    /// abort the run with no partial result.
    pub fn run(
        &self,
        dataset: &Dataset,
        config: &ModelConfig,
    ) -> Result<SimulationResult, EngineError> {
        config.validate(dataset)?;
        let started = Instant::now();

        let plan = self.build_plan(dataset, config);
        let outcomes = self.run_trials(&plan, config)?;
        let statistics = risk::summarize(&outcomes)?;

        info!(
            trials = outcomes.len(),
            model = %config.model_type,
            uncertain = config.uncertain_variables.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "simulation complete"
        );

        Ok(SimulationResult {
            outcomes,
            statistics,
            config: config.clone(),
        })
    }

    /// Baseline pass plus per-input evaluation plan, computed once.
    ///
    /// Every input not designated uncertain is held at its historical
    /// mean over non-null numeric values (0 if the column has none).
    fn build_plan(&self, dataset: &Dataset, config: &ModelConfig) -> Vec<(f64, InputSource)> {
        let mut baselines: FxHashMap<&str, f64> = FxHashMap::default();
        for input in &config.input_variables {
            if config.is_uncertain(input) {
                continue;
            }
            let values = dataset.numeric_values(input);
            let baseline = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            baselines.insert(input.as_str(), baseline);
        }
        debug!(baselines = baselines.len(), "computed baseline values");

        config
            .input_variables
            .iter()
            .map(|input| {
                let source = match (
                    config.is_uncertain(input),
                    config.distributions.get(input),
                ) {
                    (true, Some(spec)) => InputSource::Sampled(*spec),
                    _ => InputSource::Baseline(
                        baselines.get(input.as_str()).copied().unwrap_or(0.0),
                    ),
                };
                (config.coefficient(input), source)
            })
            .collect()
    }

    /// Fan the trial loop out over fixed-size batches. Outcome order is
    /// trial order; each batch writes a disjoint slice of it.
    fn run_trials(
        &self,
        plan: &[(f64, InputSource)],
        config: &ModelConfig,
    ) -> Result<Vec<f64>, ComputeError> {
        let trials = config.num_simulations as usize;
        let master_seed = self.seed.unwrap_or_else(rand::random);
        let num_batches = trials.div_ceil(SIMULATION_BATCH_SIZE);

        let batches: Result<Vec<Vec<f64>>, ComputeError> = (0..num_batches)
            .into_par_iter()
            .map(|batch_idx| {
                if let Some(token) = &self.cancel {
                    if token.is_cancelled() {
                        return Err(ComputeError::Cancelled);
                    }
                }

                // Independent stream per batch, derived from the master
                // seed so the sequence is reproducible across worker
                // counts.
                let mut rng =
                    SmallRng::seed_from_u64(master_seed.wrapping_add(batch_idx as u64));

                let start = batch_idx * SIMULATION_BATCH_SIZE;
                let len = SIMULATION_BATCH_SIZE.min(trials - start);
                Ok((0..len)
                    .map(|_| evaluate_trial(plan, config.model_type, &mut rng))
                    .collect())
            })
            .collect();

        let outcomes: Vec<f64> = batches?.into_iter().flatten().collect();
        debug_assert_eq!(outcomes.len(), trials);
        Ok(outcomes)
    }
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate the outcome model for one trial.
fn evaluate_trial(plan: &[(f64, InputSource)], model: ModelType, rng: &mut SmallRng) -> f64 {
    match model {
        ModelType::Linear => plan
            .iter()
            .map(|(coeff, source)| coeff * resolve(source, rng))
            .sum(),
        ModelType::Multiplicative => plan
            .iter()
            .map(|(coeff, source)| resolve(source, rng).powf(*coeff))
            .product(),
    }
}

fn resolve(source: &InputSource, rng: &mut SmallRng) -> f64 {
    match source {
        InputSource::Baseline(value) => *value,
        InputSource::Sampled(spec) => sampler::sample(spec, rng),
    }
}

/// Run a simulation with default runner settings (entropy-seeded, no
/// cancellation).
pub fn run_simulation(
    dataset: &Dataset,
    config: &ModelConfig,
) -> Result<SimulationResult, EngineError> {
    SimulationRunner::new().run(dataset, config)
}
