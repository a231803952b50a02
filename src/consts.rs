/// Number of physical keys in every layout.
pub const KEY_COUNT: usize = 31;

/// Row boundaries of the row-major form: top [0,10), home [10,21), bottom [21,31).
pub const ROW_BOUNDS: [usize; 4] = [0, 10, 21, 31];

/// Column-major boundaries of the 8 finger groups.
pub const GROUP_BOUNDS: [usize; 9] = [0, 3, 6, 9, 15, 21, 24, 27, 31];

pub const GROUP_COUNT: usize = 8;

/// Column-major positions below this index are typed by the left hand.
pub const LEFT_HAND_KEYS: usize = 15;

/// Starting point of every search.
pub const REFERENCE_LAYOUT: &str = "qwertyuiopasdfghjkl;'zxcvbnm,./";

pub const DEFAULT_COOL_RATE: f64 = 0.9995;

pub const DEFAULT_START_TEMP: f64 = 1_000_000.0;

/// Temperature divisor for the number of swaps per mutation.
pub const SWAP_TEMP_SCALE: f64 = 500.0;

/// Rank of each position within its finger group (1 = preferred).
pub const HOMEROW_PRIORITIES: [&[u8]; GROUP_COUNT] = [
    &[3, 1, 2],
    &[3, 1, 2],
    &[3, 1, 2],
    &[5, 1, 3, 6, 2, 4],
    &[6, 2, 4, 5, 1, 3],
    &[3, 1, 2],
    &[3, 1, 2],
    &[3, 1, 2, 4],
];

/// Name prefix for layouts produced by `search`.
pub const OPTIMIZED_PREFIX: &str = "000 optimized";
