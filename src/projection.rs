use crate::types::{Itemset, Projection};

/// Project `database` on the newest itemset of `pattern`.
///
/// Each sequence is cut just after its first itemset containing the pattern's
/// last itemset. Sequences without such an itemset, or with nothing left after
/// it, are dropped. Earlier pattern itemsets are not looked at: the input is
/// expected to already be projected past them.
///
/// The result only feeds candidate discovery. Support is never read off it.
pub fn project<'a>(database: &[&'a [Itemset]], pattern: &[Itemset]) -> Projection<'a> {
    assert!(!pattern.is_empty(), "cannot project on an empty pattern");
    let last = &pattern[pattern.len() - 1];

    database
        .iter()
        .filter_map(|&sequence| {
            let idx = sequence.iter().position(|itemset| last.is_subset(itemset))?;
            let rest = &sequence[idx + 1..];
            if rest.is_empty() {
                None
            } else {
                Some(rest)
            }
        })
        .collect()
}
