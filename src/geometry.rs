//! Conversions between the row-major and column-major (finger-ordered)
//! forms of a 31-key layout.
//!
//! Row-major form is three rows read left to right: 10 top keys, 11 home keys
//! (the 11th is the key right of the home-row pinky) and 10 bottom keys.
//! Column-major form walks the 10 columns top to bottom and appends the extra
//! home-row key, so that every finger's keys are contiguous.

use crate::consts::{GROUP_BOUNDS, KEY_COUNT, LEFT_HAND_KEYS, ROW_BOUNDS};
use crate::error::{KaResult, KeyAnnealError};
use serde::{Deserialize, Serialize};

const COLUMNS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// Hand that types the key at a column-major position.
pub fn hand_of(column_index: usize) -> Hand {
    if column_index < LEFT_HAND_KEYS {
        Hand::Left
    } else {
        Hand::Right
    }
}

pub fn row_to_column(row: &str) -> KaResult<String> {
    let chars = checked_chars(row)?;
    Ok(rows_to_columns(&chars).into_iter().collect())
}

pub fn column_to_row(col: &str) -> KaResult<String> {
    let chars = checked_chars(col)?;
    Ok(columns_to_rows(&chars).into_iter().collect())
}

pub fn column_to_groups(col: &str) -> KaResult<Vec<String>> {
    let chars = checked_chars(col)?;
    Ok(split_groups(&chars)
        .map(|g| g.iter().collect())
        .collect())
}

pub fn row_to_groups(row: &str) -> KaResult<Vec<String>> {
    column_to_groups(&row_to_column(row)?)
}

pub fn groups_to_column<S: AsRef<str>>(groups: &[S]) -> String {
    groups.iter().map(|g| g.as_ref()).collect()
}

pub fn groups_to_row<S: AsRef<str>>(groups: &[S]) -> KaResult<String> {
    column_to_row(&groups_to_column(groups))
}

fn checked_chars(layout: &str) -> KaResult<Vec<char>> {
    let chars: Vec<char> = layout.chars().collect();
    if chars.len() != KEY_COUNT {
        return Err(KeyAnnealError::Layout(format!(
            "'{}' has {} keys, expected {}",
            layout,
            chars.len(),
            KEY_COUNT
        )));
    }
    Ok(chars)
}

/// Caller guarantees `row.len() == KEY_COUNT`.
pub(crate) fn rows_to_columns(row: &[char]) -> Vec<char> {
    let top = &row[ROW_BOUNDS[0]..ROW_BOUNDS[1]];
    let home = &row[ROW_BOUNDS[1]..ROW_BOUNDS[2]];
    let bottom = &row[ROW_BOUNDS[2]..ROW_BOUNDS[3]];

    let mut columns = Vec::with_capacity(KEY_COUNT);
    for i in 0..COLUMNS {
        columns.push(top[i]);
        columns.push(home[i]);
        columns.push(bottom[i]);
    }
    columns.push(home[COLUMNS]);
    columns
}

/// Caller guarantees `col.len() == KEY_COUNT`.
pub(crate) fn columns_to_rows(col: &[char]) -> Vec<char> {
    let mut top = Vec::with_capacity(COLUMNS);
    let mut home = Vec::with_capacity(COLUMNS + 1);
    let mut bottom = Vec::with_capacity(COLUMNS);

    for triplet in col[..COLUMNS * 3].chunks_exact(3) {
        top.push(triplet[0]);
        home.push(triplet[1]);
        bottom.push(triplet[2]);
    }
    home.push(col[KEY_COUNT - 1]);

    top.into_iter().chain(home).chain(bottom).collect()
}

pub(crate) fn split_groups(col: &[char]) -> impl Iterator<Item = &[char]> {
    let bounds: &'static [usize] = &GROUP_BOUNDS;
    bounds.windows(2).map(move |w| &col[w[0]..w[1]])
}
