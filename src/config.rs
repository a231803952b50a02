use crate::consts::{DEFAULT_COOL_RATE, DEFAULT_START_TEMP};
use crate::error::{KaResult, KeyAnnealError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Initial annealing temperature. Also scales early mutation size.
    #[arg(long, default_value_t = DEFAULT_START_TEMP)]
    pub start_temp: f64,

    /// Temperature multiplier applied after every iteration.
    #[arg(long, default_value_t = DEFAULT_COOL_RATE)]
    pub cool_rate: f64,

    /// Keep symbols where QWERTY has them.
    #[arg(long, default_value_t = false)]
    pub symbol_lock: bool,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Log progress every N iterations (0 = never).
    #[arg(long, default_value_t = 1000)]
    pub report_every: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            start_temp: DEFAULT_START_TEMP,
            cool_rate: DEFAULT_COOL_RATE,
            symbol_lock: false,
            seed: None,
            report_every: 1000,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KaResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeyAnnealError::Config(format!(
                "Failed to read search config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over the
    /// file-provided ones; defaults never override the file.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(start_temp, "start_temp");
        update_if_present!(cool_rate, "cool_rate");
        update_if_present!(symbol_lock, "symbol_lock");
        update_if_present!(seed, "seed");
        update_if_present!(report_every, "report_every");
    }
}
