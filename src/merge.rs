//! Alignment of two independently extracted datasets.
//!
//! Two policies exist, matching what the downstream comparison can tolerate:
//! profile percentages are union-merged with a zero placeholder for the
//! missing side (a function absent from one profile still tells a story),
//! while benchmark records are inner-joined (an improvement needs both
//! operands). Both are pure functions; ordering is imposed later by the
//! reporter.

use std::collections::HashMap;
use std::hash::Hash;

/// Merge over the union of keys, filling the missing side with `default`.
///
/// Every key of either input appears exactly once in the output, so
/// `result.len() == |baseline_keys ∪ variant_keys|`.
pub fn union_merge<K, V>(
    baseline: &HashMap<K, V>,
    variant: &HashMap<K, V>,
    default: V,
) -> HashMap<K, (V, V)>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut merged: HashMap<K, (V, V)> = HashMap::new();

    for (key, value) in baseline {
        merged.insert(key.clone(), (value.clone(), default.clone()));
    }
    for (key, value) in variant {
        merged
            .entry(key.clone())
            .and_modify(|pair| pair.1 = value.clone())
            .or_insert_with(|| (default.clone(), value.clone()));
    }

    merged
}

/// Keep only keys present in both inputs, paired as (baseline, variant).
pub fn inner_join<K, V>(baseline: &HashMap<K, V>, variant: &HashMap<K, V>) -> HashMap<K, (V, V)>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    baseline
        .iter()
        .filter_map(|(key, base)| {
            variant
                .get(key)
                .map(|var| (key.clone(), (base.clone(), var.clone())))
        })
        .collect()
}
