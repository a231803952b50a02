use crate::consts::{GROUP_BOUNDS, KEY_COUNT, LEFT_HAND_KEYS, ROW_BOUNDS};
use crate::error::{KaResult, KeyAnnealError};
use crate::geometry::{self, Hand};
use fnv::{FnvHashMap, FnvHashSet};
use std::fmt;
use std::str::FromStr;

/// An immutable 31-key layout together with its finger-ordered forms.
///
/// Every transform (mutation, refinement) builds a new `Keyboard`; the
/// column form and group membership are computed once here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    layout: String,
    row: Vec<char>,
    column: Vec<char>,
    group_id: FnvHashMap<char, usize>,
}

impl Keyboard {
    /// Parses a row-major layout string. It must hold exactly 31 distinct symbols.
    pub fn new(layout: &str) -> KaResult<Self> {
        let row: Vec<char> = layout.chars().collect();
        if row.len() != KEY_COUNT {
            return Err(KeyAnnealError::Layout(format!(
                "Invalid layout length '{}': {} keys, expected {}",
                layout,
                row.len(),
                KEY_COUNT
            )));
        }

        let mut seen = FnvHashSet::default();
        if let Some(dup) = row.iter().find(|c| !seen.insert(**c)) {
            return Err(KeyAnnealError::Layout(format!(
                "Layout '{}' repeats the symbol '{}'",
                layout, dup
            )));
        }

        Ok(Self::from_rows(row))
    }

    /// Builds from a row-major permutation of an already valid layout.
    pub(crate) fn from_rows(row: Vec<char>) -> Self {
        debug_assert_eq!(row.len(), KEY_COUNT);
        let column = geometry::rows_to_columns(&row);

        let mut group_id = FnvHashMap::default();
        for (i, group) in geometry::split_groups(&column).enumerate() {
            for &c in group {
                group_id.insert(c, i);
            }
        }

        Self {
            layout: row.iter().collect(),
            row,
            column,
            group_id,
        }
    }

    /// Builds from a column-major permutation of an already valid layout.
    pub(crate) fn from_columns(column: &[char]) -> Self {
        Self::from_rows(geometry::columns_to_rows(column))
    }

    /// Row-major layout string.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn row(&self) -> &[char] {
        &self.row
    }

    pub fn column(&self) -> &[char] {
        &self.column
    }

    pub fn left(&self) -> &[char] {
        &self.column[..LEFT_HAND_KEYS]
    }

    pub fn right(&self) -> &[char] {
        &self.column[LEFT_HAND_KEYS..]
    }

    pub fn group(&self, idx: usize) -> &[char] {
        &self.column[GROUP_BOUNDS[idx]..GROUP_BOUNDS[idx + 1]]
    }

    pub fn groups(&self) -> impl Iterator<Item = &[char]> {
        geometry::split_groups(&self.column)
    }

    pub fn group_of(&self, c: char) -> Option<usize> {
        self.group_id.get(&c).copied()
    }

    pub fn hand_of(&self, c: char) -> Option<Hand> {
        self.column
            .iter()
            .position(|&k| k == c)
            .map(geometry::hand_of)
    }

    /// The three physical rows, each as a string.
    pub fn rows(&self) -> [String; 3] {
        [0, 1, 2].map(|r| {
            self.row[ROW_BOUNDS[r]..ROW_BOUNDS[r + 1]]
                .iter()
                .collect()
        })
    }
}

impl FromStr for Keyboard {
    type Err = KeyAnnealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyboard::new(s)
    }
}

/// Keyboard-shaped rendering, keys separated by two spaces.
impl fmt::Display for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (i, row) in rows.iter().enumerate() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            write!(f, "{}", spaced.join("  "))?;
            if i + 1 < rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
