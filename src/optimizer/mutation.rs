use crate::keyboard::Keyboard;
use fastrand::Rng;

/// Derives a neighbor layout by exchanging `swaps` random pairs of unlocked
/// positions. Both positions of a pair are drawn independently, so a swap
/// may pick the same key twice and do nothing. Positions are row-major.
pub fn mutate(kb: &Keyboard, swaps: usize, locked: &[usize], rng: &mut Rng) -> Keyboard {
    let mut chars = kb.row().to_vec();
    let unlocked: Vec<usize> = (0..chars.len()).filter(|i| !locked.contains(i)).collect();

    if unlocked.is_empty() {
        return kb.clone();
    }

    for _ in 0..swaps {
        let a = unlocked[rng.usize(0..unlocked.len())];
        let b = unlocked[rng.usize(0..unlocked.len())];
        chars.swap(a, b);
    }

    Keyboard::from_rows(chars)
}

/// Row-major positions of every key that is not a letter.
pub fn locked_non_letters(kb: &Keyboard) -> Vec<usize> {
    kb.row()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REFERENCE_LAYOUT;

    #[test]
    fn test_qwerty_symbol_positions() {
        let kb = Keyboard::new(REFERENCE_LAYOUT).unwrap();
        assert_eq!(locked_non_letters(&kb), vec![19, 20, 28, 29, 30]);
    }

    #[test]
    fn test_zero_swaps_is_identity() {
        let kb = Keyboard::new(REFERENCE_LAYOUT).unwrap();
        let mut rng = Rng::with_seed(7);
        assert_eq!(mutate(&kb, 0, &[], &mut rng), kb);
    }

    #[test]
    fn test_everything_locked_is_identity() {
        let kb = Keyboard::new(REFERENCE_LAYOUT).unwrap();
        let locked: Vec<usize> = (0..31).collect();
        let mut rng = Rng::with_seed(7);
        assert_eq!(mutate(&kb, 50, &locked, &mut rng), kb);
    }
}
