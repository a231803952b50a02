pub mod anneal;
pub mod homerow;
pub mod mutation;
pub mod runner;

pub use self::anneal::{iteration_budget, AnnealOptions, AnnealResult, Annealer};
pub use self::homerow::optimize_homerow;
pub use self::mutation::{locked_non_letters, mutate};
pub use self::runner::{
    AnnealProgress, OptimizationOptions, Optimizer, ProgressCallback, Silent, TargetResult,
};
