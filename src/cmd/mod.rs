pub mod search;
pub mod validate;

use keyanneal::corpus::FrequencyModel;

/// Inputs shared by every subcommand.
pub struct Context {
    pub cf: FrequencyModel,
    pub layouts_path: String,
    pub stats_path: String,
}
