pub mod metrics;

pub use self::metrics::{
    alternate_score, combined_score, roll_score, sfb_score, three_roll_score,
};

use crate::corpus::{Count, FrequencyModel};
use crate::keyboard::Keyboard;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// A pure scoring function over a layout and a corpus.
pub type MetricFn = fn(&Keyboard, &FrequencyModel) -> Count;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Sfb,
    Alternate,
    Roll,
    #[strum(serialize = "3roll")]
    #[serde(rename = "3roll")]
    ThreeRoll,
    Combined,
}

impl MetricKind {
    /// The metrics reported for every layout.
    pub const REPORTED: [MetricKind; 4] = [
        MetricKind::Alternate,
        MetricKind::Sfb,
        MetricKind::Roll,
        MetricKind::ThreeRoll,
    ];

    pub fn metric_fn(self) -> MetricFn {
        match self {
            Self::Sfb => sfb_score,
            Self::Alternate => alternate_score,
            Self::Roll => roll_score,
            Self::ThreeRoll => three_roll_score,
            Self::Combined => combined_score,
        }
    }

    #[inline]
    pub fn score(self, kb: &Keyboard, cf: &FrequencyModel) -> Count {
        (self.metric_fn())(kb, cf)
    }

    pub fn lower_is_better(self) -> bool {
        matches!(self, Self::Sfb)
    }

    /// Whether homerow refinement must keep finger columns in place to
    /// preserve this metric.
    pub fn lock_columns(self) -> bool {
        matches!(self, Self::ThreeRoll)
    }
}

/// Scores a layout on every reported metric.
pub fn all_metrics(kb: &Keyboard, cf: &FrequencyModel) -> BTreeMap<MetricKind, Count> {
    MetricKind::REPORTED
        .iter()
        .map(|&m| (m, m.score(kb, cf)))
        .collect()
}
