use crate::types::Itemset;

/// Whether `pattern` embeds in `sequence`: some strictly increasing run of
/// sequence positions holds supersets of the pattern's itemsets, in order.
///
/// Earliest matching is enough, a greedy scan never rules out a later match.
/// Works for any itemset list, so a pattern can stand in for the sequence.
pub fn is_subsequence(pattern: &[Itemset], sequence: &[Itemset]) -> bool {
    let mut i = 0;
    for itemset in sequence {
        if i == pattern.len() {
            break;
        }
        if pattern[i].is_subset(itemset) {
            i += 1;
        }
    }
    i == pattern.len()
}

/// Number of sequences embedding `pattern`, each counted at most once.
pub fn support<S: AsRef<[Itemset]>>(pattern: &[Itemset], database: &[S]) -> usize {
    database
        .iter()
        .filter(|sequence| is_subsequence(pattern, sequence.as_ref()))
        .count()
}
