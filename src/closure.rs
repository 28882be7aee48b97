use crate::matcher::is_subsequence;
use crate::types::{Frequent, Pattern};
use rayon::prelude::*;
use std::collections::HashMap;

/// Keep only the closed patterns of `results`, preserving their order.
///
/// A pattern is dropped when another result with the same support strictly
/// contains it: it embeds in the other pattern and the other does not embed
/// back. Two patterns that embed in each other are both kept.
///
/// Candidates are grouped by support first, so the pairwise checks only run
/// inside a group.
pub fn filter_closed(results: &[Frequent]) -> Vec<Frequent> {
    let mut by_support: HashMap<usize, Vec<usize>> = HashMap::new();
    for (idx, (_, support)) in results.iter().enumerate() {
        by_support.entry(*support).or_default().push(idx);
    }

    (0..results.len())
        .into_par_iter()
        .filter(|&i| {
            let (pattern, support) = &results[i];
            !by_support[support]
                .iter()
                .any(|&j| j != i && strictly_contains(&results[j].0, pattern))
        })
        .map(|i| results[i].clone())
        .collect()
}

/// `outer` is a proper super-pattern of `inner` under embedding
fn strictly_contains(outer: &Pattern, inner: &Pattern) -> bool {
    is_subsequence(inner, outer) && !is_subsequence(outer, inner)
}
