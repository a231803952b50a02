use super::mutation;
use super::runner::{AnnealProgress, ProgressCallback};
use crate::consts::{DEFAULT_COOL_RATE, REFERENCE_LAYOUT, SWAP_TEMP_SCALE};
use crate::corpus::{Count, FrequencyModel};
use crate::error::{KaResult, KeyAnnealError};
use crate::keyboard::Keyboard;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AnnealOptions {
    pub start_temp: f64,
    pub cool_rate: f64,
    pub lower_is_better: bool,
    /// Keep every non-letter key of the start layout in place.
    pub lock_symbols: bool,
    /// Progress is reported every this many iterations; 0 disables it.
    pub report_every: usize,
    pub start_layout: String,
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            start_temp: crate::consts::DEFAULT_START_TEMP,
            cool_rate: DEFAULT_COOL_RATE,
            lower_is_better: false,
            lock_symbols: false,
            report_every: 0,
            start_layout: REFERENCE_LAYOUT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnealResult {
    pub keyboard: Keyboard,
    pub score: Count,
    pub iterations: usize,
    pub accepted: usize,
}

/// Number of cooling steps from `start_temp` down to 1.0.
pub fn iteration_budget(start_temp: f64, cool_rate: f64) -> usize {
    if start_temp <= 1.0 {
        return 0;
    }
    ((1.0 / start_temp).ln() / cool_rate.ln()).ceil() as usize
}

/// Simulated annealing over layouts.
///
/// `current` is the last accepted layout. A worsening move accepted under the
/// Metropolis rule replaces it, so the result is where the walk ended rather
/// than the best layout it passed through.
pub struct Annealer<'a, F> {
    metric: F,
    cf: &'a FrequencyModel,
    label: String,
    lower_is_better: bool,
    cool_rate: f64,
    report_every: usize,
    budget: usize,

    pub temperature: f64,
    pub current: Keyboard,
    pub score: Count,
    pub locked_indices: Vec<usize>,
    pub iterations: usize,
    pub accepted: usize,
    pub rng: fastrand::Rng,
}

impl<'a, F> Annealer<'a, F>
where
    F: Fn(&Keyboard, &FrequencyModel) -> Count,
{
    pub fn new(
        metric: F,
        cf: &'a FrequencyModel,
        options: &AnnealOptions,
        seed: Option<u64>,
    ) -> KaResult<Self> {
        if !(options.cool_rate > 0.0 && options.cool_rate < 1.0) {
            return Err(KeyAnnealError::Config(format!(
                "cool rate must be in (0, 1), got {}",
                options.cool_rate
            )));
        }
        if !options.start_temp.is_finite() {
            return Err(KeyAnnealError::Config(format!(
                "start temperature must be finite, got {}",
                options.start_temp
            )));
        }

        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let current = Keyboard::new(&options.start_layout)?;
        let score = metric(&current, cf);
        let locked_indices = if options.lock_symbols {
            mutation::locked_non_letters(&current)
        } else {
            Vec::new()
        };

        Ok(Self {
            metric,
            cf,
            label: String::new(),
            lower_is_better: options.lower_is_better,
            cool_rate: options.cool_rate,
            report_every: options.report_every,
            budget: iteration_budget(options.start_temp, options.cool_rate),
            temperature: options.start_temp,
            current,
            score,
            locked_indices,
            iterations: 0,
            accepted: 0,
            rng,
        })
    }

    /// Name passed to the progress callback.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn is_cold(&self) -> bool {
        self.temperature <= 1.0
    }

    #[inline(always)]
    fn is_better(&self, a: Count, b: Count) -> bool {
        if self.lower_is_better {
            a < b
        } else {
            a > b
        }
    }

    /// One mutate-score-accept round followed by cooling. Returns whether the
    /// candidate was accepted.
    pub fn step(&mut self) -> bool {
        // Many swaps while hot, 1-3 once cool.
        let swaps = (self.rng.f64() * 3.0 + 1.0)
            .max(self.temperature / SWAP_TEMP_SCALE)
            .floor() as usize;

        let candidate = mutation::mutate(&self.current, swaps, &self.locked_indices, &mut self.rng);
        let candidate_score = (self.metric)(&candidate, self.cf);

        let accept = if self.is_better(candidate_score, self.score) {
            true
        } else {
            let delta = if self.lower_is_better {
                candidate_score - self.score
            } else {
                self.score - candidate_score
            };
            // Metropolis criterion
            self.rng.f64() < (-(delta as f64) / self.temperature).exp()
        };

        if accept {
            self.current = candidate;
            self.score = candidate_score;
            self.accepted += 1;
        }

        self.iterations += 1;
        self.temperature *= self.cool_rate;
        accept
    }

    pub fn run<CB: ProgressCallback + ?Sized>(mut self, callback: &CB) -> AnnealResult {
        debug!(
            "[{}] Annealing from '{}' (score {}, T={:.2}, ~{} iterations)",
            self.label,
            self.current.layout(),
            self.score,
            self.temperature,
            self.budget
        );

        while !self.is_cold() {
            self.step();

            if self.report_every > 0 && self.iterations % self.report_every == 0 {
                callback.on_progress(&self.label, &self.progress());
            }
        }

        debug!(
            "[{}] Done after {} iterations ({} accepted), score {}",
            self.label, self.iterations, self.accepted, self.score
        );

        AnnealResult {
            keyboard: self.current,
            score: self.score,
            iterations: self.iterations,
            accepted: self.accepted,
        }
    }

    pub fn progress(&self) -> AnnealProgress {
        AnnealProgress {
            iteration: self.iterations,
            remaining: self.budget.saturating_sub(self.iterations),
            temperature: self.temperature,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_matches_closed_form() {
        assert_eq!(iteration_budget(1.0, 0.9995), 0);
        assert_eq!(iteration_budget(0.5, 0.9995), 0);
        // ln(1/e) / ln(0.5) = 1.4427 -> 2
        assert_eq!(iteration_budget(std::f64::consts::E, 0.5), 2);
    }

    #[test]
    fn test_rejects_non_cooling_rate() {
        let cf = FrequencyModel::default();
        let options = AnnealOptions {
            cool_rate: 1.0,
            ..Default::default()
        };
        let res = Annealer::new(|_: &Keyboard, _: &FrequencyModel| 0, &cf, &options, Some(1));
        assert!(matches!(res, Err(KeyAnnealError::Config(_))));
    }

    #[test]
    fn test_cold_start_returns_reference() {
        let cf = FrequencyModel::default();
        let options = AnnealOptions {
            start_temp: 1.0,
            ..Default::default()
        };
        let annealer =
            Annealer::new(|_: &Keyboard, _: &FrequencyModel| 0, &cf, &options, Some(1)).unwrap();
        let result = annealer.run(&crate::optimizer::Silent);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.keyboard.layout(), REFERENCE_LAYOUT);
    }
}
