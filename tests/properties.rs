use clospan::{
    is_subsequence, mine, spmf, support, CloSpan, Database, Frequent, ItemId, Itemset, Sequence,
};
use proptest::prelude::*;

/// Raw ids spread far apart, including negatives other than the terminators.
const SPARSE_IDS: [ItemId; 5] = [-9, 0, 7, 1_000_000_000_000, ItemId::MAX];

fn database_strategy() -> impl Strategy<Value = Database> {
    let itemset = prop::collection::btree_set(0usize..5, 1..3)
        .prop_map(|items| items.into_iter().collect::<Itemset>());
    let sequence = prop::collection::vec(itemset, 1..5);
    prop::collection::vec(sequence, 0..6).prop_map(Database::new)
}

fn raw_database_strategy() -> impl Strategy<Value = Vec<Vec<Vec<usize>>>> {
    let itemset = prop::collection::vec(0usize..SPARSE_IDS.len(), 1..3);
    let sequence = prop::collection::vec(itemset, 1..5);
    prop::collection::vec(sequence, 0..6)
}

fn relabel(raw: &[Vec<Vec<usize>>], labels: &[ItemId]) -> Database {
    raw.iter()
        .map(|sequence| {
            sequence
                .iter()
                .map(|set| set.iter().map(|&slot| labels[slot]).collect::<Vec<ItemId>>())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn resolved(db: &Database, results: Vec<Frequent>) -> Vec<(Vec<Vec<ItemId>>, usize)> {
    let mut plain: Vec<(Vec<Vec<ItemId>>, usize)> = results
        .iter()
        .map(|(pattern, sup)| (db.alphabet().resolve(pattern), *sup))
        .collect();
    plain.sort();
    plain
}

fn sorted(results: Vec<Frequent>) -> Vec<(Vec<Vec<usize>>, usize)> {
    let mut plain: Vec<(Vec<Vec<usize>>, usize)> = results
        .into_iter()
        .map(|(pattern, sup)| {
            let items = pattern.iter().map(|set| set.iter().collect()).collect();
            (items, sup)
        })
        .collect();
    plain.sort();
    plain
}

proptest! {
    #[test]
    fn frequent_patterns_meet_min_support(db in database_strategy(), min_sup in 1usize..4) {
        let frequent = CloSpan::new(min_sup).frequent(&db).unwrap();
        for (pattern, sup) in &frequent {
            prop_assert!(!pattern.is_empty());
            prop_assert!(*sup >= min_sup);
            prop_assert_eq!(*sup, support(pattern, db.sequences()));
        }
    }

    #[test]
    fn prefixes_of_frequent_patterns_are_frequent(db in database_strategy(), min_sup in 1usize..4) {
        let frequent = CloSpan::new(min_sup).frequent(&db).unwrap();
        for (pattern, sup) in &frequent {
            if pattern.len() > 1 {
                let prefix = &pattern[..pattern.len() - 1];
                prop_assert!(*sup <= support(prefix, db.sequences()));
                prop_assert!(frequent.iter().any(|(other, _)| other.as_slice() == prefix));
            }
        }
    }

    #[test]
    fn closed_patterns_have_no_equal_support_super_pattern(db in database_strategy(), min_sup in 1usize..4) {
        let miner = CloSpan::new(min_sup);
        let frequent = miner.frequent(&db).unwrap();
        let closed = miner.mine(&db).unwrap();
        for result in &closed {
            prop_assert!(frequent.contains(result));
            let (pattern, sup) = result;
            for (other, other_sup) in &frequent {
                if other_sup == sup && is_subsequence(pattern, other) {
                    prop_assert!(is_subsequence(other, pattern));
                }
            }
        }
    }

    #[test]
    fn mining_is_repeatable(db in database_strategy(), min_sup in 1usize..4) {
        let first = mine(&db, min_sup).unwrap();
        let second = mine(&db, min_sup).unwrap();
        prop_assert_eq!(sorted(first), sorted(second));
    }

    #[test]
    fn results_survive_serialization(db in database_strategy(), min_sup in 1usize..4) {
        let closed = mine(&db, min_sup).unwrap();
        for (pattern, sup) in &closed {
            let record = spmf::encode_result(db.alphabet(), pattern, *sup);
            let decoded = spmf::decode_result(&record, db.alphabet()).unwrap();
            prop_assert_eq!(&decoded, &(pattern.clone(), *sup));
        }

        let mut out = Vec::new();
        spmf::write_results(&mut out, db.alphabet(), &closed).unwrap();
        let read = spmf::read_results(out.as_slice(), db.alphabet()).unwrap();
        prop_assert_eq!(read, closed);
    }

    #[test]
    fn mining_ignores_how_items_are_numbered(raw in raw_database_strategy(), min_sup in 1usize..4) {
        let dense: Vec<ItemId> = (0..SPARSE_IDS.len() as ItemId).collect();
        let small = relabel(&raw, &dense);
        let sparse = relabel(&raw, &SPARSE_IDS);

        let mut expected: Vec<_> = resolved(&small, mine(&small, min_sup).unwrap())
            .into_iter()
            .map(|(pattern, sup)| {
                let pattern: Vec<Vec<ItemId>> = pattern
                    .into_iter()
                    .map(|ids| {
                        let mut ids: Vec<ItemId> =
                            ids.into_iter().map(|id| SPARSE_IDS[id as usize]).collect();
                        ids.sort_unstable();
                        ids
                    })
                    .collect();
                (pattern, sup)
            })
            .collect();
        expected.sort();
        prop_assert_eq!(resolved(&sparse, mine(&sparse, min_sup).unwrap()), expected);
    }

    #[test]
    fn patterns_never_outgrow_sequences(db in database_strategy(), min_sup in 1usize..4) {
        let longest = db.sequences().iter().map(Sequence::len).max().unwrap_or(0);
        for (pattern, _) in CloSpan::new(min_sup).frequent(&db).unwrap() {
            prop_assert!(pattern.len() <= longest);
        }
    }

    #[test]
    fn min_support_above_database_size_yields_nothing(db in database_strategy()) {
        prop_assert!(mine(&db, db.len() + 1).unwrap().is_empty());
    }
}
