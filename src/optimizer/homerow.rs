use crate::consts::HOMEROW_PRIORITIES;
use crate::corpus::FrequencyModel;
use crate::keyboard::Keyboard;
use std::cmp::Reverse;

/// Moves the most frequent characters of each finger group onto that
/// finger's preferred keys.
///
/// Characters never change finger, so hand and finger based metrics are
/// unaffected. Unless `lock_columns` is set, the three left columns typed by
/// pinky, ring and middle are also reordered among themselves (and likewise
/// the right ring/middle columns), which only 3-rolls can observe.
/// With `lock_symbols`, keys holding non-letters stay where they are.
pub fn optimize_homerow(
    kb: &Keyboard,
    cf: &FrequencyModel,
    lock_symbols: bool,
    lock_columns: bool,
) -> Keyboard {
    let mut groups: Vec<Vec<char>> = kb.groups().map(<[char]>::to_vec).collect();

    for (group, priority) in groups.iter_mut().zip(HOMEROW_PRIORITIES) {
        let mut slots: Vec<usize> = (0..group.len())
            .filter(|&j| !lock_symbols || group[j].is_alphabetic())
            .collect();
        let mut chars: Vec<char> = slots.iter().map(|&j| group[j]).collect();

        slots.sort_by_key(|&j| priority[j]);
        chars.sort_by_key(|&c| Reverse(cf.monogram(c)));

        for (&slot, c) in slots.iter().zip(chars) {
            group[slot] = c;
        }
    }

    if !lock_columns {
        groups[0..3].sort_by_key(|g| cf.monogram(g[1]));
        groups[5..7].sort_by_key(|g| Reverse(cf.monogram(g[1])));
    }

    Keyboard::from_columns(&groups.concat())
}
