use crate::closure::filter_closed;
use crate::error::MiningError;
use crate::matcher::support;
use crate::projection::project;
use crate::types::{Database, Frequent, Item, Itemset, Pattern, Sequence};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Closed Sequential Pattern mining, a.k.a CloSpan, restricted to sequence
/// extensions by single items.
///
/// Ref: X. Yan, J. Han, R. Afshar, "CloSpan: Mining Closed Sequential Patterns in Large
/// Datasets", SDM 2003.
///
/// The pattern space is walked depth first from the empty pattern. Each step
/// counts support against the original database, prunes below `min_sup`, and
/// grows the pattern by every item frequent in the current projection. The
/// frequent patterns found are then reduced to the closed ones.
///
/// # Example:
/// ```rust
/// use clospan::{itemset, singleton_pattern, CloSpan, Database};
///
/// let db = Database::new(vec![
///     vec![itemset(&[1]), itemset(&[2]), itemset(&[3])],
///     vec![itemset(&[1, 2]), itemset(&[3])],
///     vec![itemset(&[1]), itemset(&[2, 3])],
/// ]);
///
/// let closed = CloSpan::new(2).mine(&db).unwrap();
/// assert!(closed.contains(&(singleton_pattern(&[1, 3]), 3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloSpan {
    min_sup: usize,
    max_length: Option<usize>,
}

impl CloSpan {
    pub fn new(min_sup: usize) -> Self {
        Self {
            min_sup,
            max_length: None,
        }
    }

    /// Stop growing patterns once they reach `length` itemsets
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    fn validate(&self) -> Result<(), MiningError> {
        if self.min_sup == 0 {
            return Err(MiningError::InvalidSupport(self.min_sup));
        }
        if self.max_length == Some(0) {
            return Err(MiningError::InvalidMaxLength(0));
        }
        Ok(())
    }

    /// Every frequent non-empty pattern, in discovery order
    pub fn frequent(&self, database: &Database) -> Result<Vec<Frequent>, MiningError> {
        self.validate()?;
        debug!(
            sequences = database.len(),
            min_sup = self.min_sup,
            "starting pattern search"
        );

        let mut search = Search {
            original: database.sequences(),
            min_sup: self.min_sup,
            max_length: self.max_length,
            results: Vec::new(),
        };
        search.dfs(&Vec::new(), &database.view());

        debug!(frequent = search.results.len(), "pattern search finished");
        Ok(search.results)
    }

    /// Closed frequent patterns with their support
    pub fn mine(&self, database: &Database) -> Result<Vec<Frequent>, MiningError> {
        let frequent = self.frequent(database)?;
        let closed = filter_closed(&frequent);
        debug!(
            frequent = frequent.len(),
            closed = closed.len(),
            "closure filter finished"
        );
        Ok(closed)
    }
}

/// Mine the closed sequential patterns of `database` at `min_sup`.
pub fn mine(database: &Database, min_sup: usize) -> Result<Vec<Frequent>, MiningError> {
    CloSpan::new(min_sup).mine(database)
}

struct Search<'a> {
    original: &'a [Sequence],
    min_sup: usize,
    max_length: Option<usize>,
    results: Vec<Frequent>,
}

impl<'a> Search<'a> {
    fn dfs(&mut self, pattern: &Pattern, db: &[&'a [Itemset]]) {
        let sup = support(pattern, self.original);
        if sup < self.min_sup {
            trace!(length = pattern.len(), sup, "pruned");
            return;
        }
        if !pattern.is_empty() {
            trace!(length = pattern.len(), sup, "recorded");
            self.results.push((pattern.clone(), sup));
        }
        if self.max_length.map_or(false, |max| pattern.len() >= max) {
            return;
        }

        for (item, count) in candidates(db) {
            if count < self.min_sup {
                continue;
            }

            let mut event = Itemset::new();
            event.insert(item);
            let mut extended = pattern.clone();
            extended.push(event);

            let projected = project(db, &extended);
            self.dfs(&extended, &projected);
        }
    }
}

/// Tally, per item, how many sequences of `db` contain it at least once.
fn candidates(db: &[&[Itemset]]) -> BTreeMap<Item, usize> {
    let mut counts = BTreeMap::new();
    for sequence in db {
        let mut seen = Itemset::new();
        for itemset in sequence.iter() {
            seen.union_with(itemset);
        }
        for item in seen.iter() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    counts
}

/// Order results for reporting: longest patterns first, then highest support.
pub fn rank(results: &mut [Frequent]) {
    results.par_sort_by_key(|(pattern, support)| {
        (std::cmp::Reverse(pattern.len()), std::cmp::Reverse(*support))
    });
}
