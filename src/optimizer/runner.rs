use super::anneal::{AnnealOptions, AnnealResult, Annealer};
use super::homerow::optimize_homerow;
use crate::config::SearchParams;
use crate::consts::{OPTIMIZED_PREFIX, REFERENCE_LAYOUT};
use crate::corpus::{Count, FrequencyModel};
use crate::error::KaResult;
use crate::keyboard::Keyboard;
use crate::scorer::MetricKind;
use rayon::prelude::*;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealProgress {
    pub iteration: usize,
    /// Iterations left according to the cooling schedule.
    pub remaining: usize,
    pub temperature: f64,
    pub score: Count,
}

/// Receives periodic updates from a running search.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, label: &str, progress: &AnnealProgress);
}

/// Discards all progress updates.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_progress(&self, _label: &str, _progress: &AnnealProgress) {}
}

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub start_temp: f64,
    pub cool_rate: f64,
    pub lock_symbols: bool,
    pub report_every: usize,
    pub seed: Option<u64>,
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            start_temp: params.start_temp,
            cool_rate: params.cool_rate,
            lock_symbols: params.symbol_lock,
            report_every: params.report_every,
            seed: params.seed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TargetResult {
    pub target: MetricKind,
    pub annealed: AnnealResult,
    /// The annealed layout after homerow refinement.
    pub keyboard: Keyboard,
}

impl TargetResult {
    /// Name under which the layout is stored, e.g. "000 optimized sfb".
    pub fn name(&self) -> String {
        format!("{} {}", OPTIMIZED_PREFIX, self.target)
    }
}

pub struct Optimizer<'a> {
    cf: &'a FrequencyModel,
    options: OptimizationOptions,
}

impl<'a> Optimizer<'a> {
    pub fn new(cf: &'a FrequencyModel, options: OptimizationOptions) -> Self {
        Self { cf, options }
    }

    /// Anneals toward one target, then refines the homerow.
    pub fn optimize<CB: ProgressCallback + ?Sized>(
        &self,
        target: MetricKind,
        seed: Option<u64>,
        callback: &CB,
    ) -> KaResult<TargetResult> {
        let opts = &self.options;
        let anneal_opts = AnnealOptions {
            start_temp: opts.start_temp,
            cool_rate: opts.cool_rate,
            lower_is_better: target.lower_is_better(),
            lock_symbols: opts.lock_symbols,
            report_every: opts.report_every,
            start_layout: REFERENCE_LAYOUT.to_string(),
        };

        info!("🔥 Optimizing for {}...", target);
        let annealed = Annealer::new(target.metric_fn(), self.cf, &anneal_opts, seed)?
            .with_label(target.to_string())
            .run(callback);

        let keyboard = optimize_homerow(
            &annealed.keyboard,
            self.cf,
            opts.lock_symbols,
            target.lock_columns(),
        );

        Ok(TargetResult {
            target,
            annealed,
            keyboard,
        })
    }

    /// Runs every target as an independent search. Target `i` is seeded with
    /// `seed + i`, so results do not depend on scheduling.
    pub fn run_all<CB: ProgressCallback>(
        &self,
        targets: &[MetricKind],
        callback: &CB,
    ) -> KaResult<Vec<TargetResult>> {
        let base_seed = self.options.seed;

        targets
            .par_iter()
            .enumerate()
            .map(|(i, &target)| {
                let seed = base_seed.map(|s| s.wrapping_add(i as u64));
                self.optimize(target, seed, callback)
            })
            .collect()
    }
}
