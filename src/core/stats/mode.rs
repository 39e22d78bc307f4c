//! Frequency helpers shared by the reporters.
//!
//! Ties are broken by first appearance: among values with the same count,
//! the one seen earliest in row order wins (and is listed first).

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match slots.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_basic() {
        assert_eq!(mode([1990, 1990, 1985]), Some(1990));
        assert_eq!(mode(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_mode_tie_prefers_first_seen() {
        assert_eq!(mode(["b", "a", "a", "b"]), Some("b"));
        assert_eq!(mode([3, 1, 2]), Some(3));
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent"]);
        assert_eq!(
            counts,
            vec![("Subscriber", 2), ("Customer", 1), ("Dependent", 1)]
        );
    }
}
