use crate::corpus::{Count, FrequencyModel};
use crate::error::KaResult;
use crate::keyboard::Keyboard;
use crate::scorer::{all_metrics, MetricKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metric scores as a percentage of the corpus: SFBs relative to all
/// bigrams, the trigram metrics relative to all trigrams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    pub alternate: f64,
    pub roll: f64,
    pub sfb: f64,
    #[serde(rename = "3roll")]
    pub three_roll: f64,
}

impl LayoutStats {
    pub fn compute(kb: &Keyboard, cf: &FrequencyModel) -> Self {
        Self::from_scores(
            &all_metrics(kb, cf),
            cf.bigram_total(),
            cf.trigram_total(),
        )
    }

    pub fn from_scores(
        scores: &BTreeMap<MetricKind, Count>,
        bigram_total: Count,
        trigram_total: Count,
    ) -> Self {
        let score = |m: MetricKind| scores.get(&m).copied().unwrap_or(0);
        Self {
            alternate: percent(score(MetricKind::Alternate), trigram_total),
            roll: percent(score(MetricKind::Roll), trigram_total),
            sfb: percent(score(MetricKind::Sfb), bigram_total),
            three_roll: percent(score(MetricKind::ThreeRoll), trigram_total),
        }
    }

    /// Alternation plus rolls minus SFBs.
    pub fn net(&self) -> f64 {
        self.alternate + self.roll - self.sfb
    }
}

fn percent(value: Count, total: Count) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

/// Stats per layout name, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsReport {
    pub layouts: BTreeMap<String, LayoutStats>,
}

impl StatsReport {
    pub fn compute(keyboards: &[(String, Keyboard)], cf: &FrequencyModel) -> Self {
        let bigram_total = cf.bigram_total();
        let trigram_total = cf.trigram_total();

        let layouts = keyboards
            .par_iter()
            .map(|(name, kb)| {
                let stats =
                    LayoutStats::from_scores(&all_metrics(kb, cf), bigram_total, trigram_total);
                (name.clone(), stats)
            })
            .collect();

        Self { layouts }
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> KaResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
