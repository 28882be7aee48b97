use clospan::{
    mine, spmf, support, CloSpan, Config, Database, Frequent, ItemId, MiningError, Pattern,
};
use std::fs;
use tempfile::tempdir;

const INPUT: &str = "1 -1 2 -1 3 -1 -2\n1 2 -1 3 -1 -2\n1 -1 2 3 -1 -2\n";

fn pattern(db: &Database, ids: &[ItemId]) -> Pattern {
    db.alphabet().pattern(ids).unwrap()
}

fn resolved(db: &Database, results: &[Frequent]) -> Vec<(Vec<Vec<ItemId>>, usize)> {
    results
        .iter()
        .map(|(pattern, sup)| (db.alphabet().resolve(pattern), *sup))
        .collect()
}

#[test]
fn test_reference_scenario() {
    let db = spmf::parse_database(INPUT);
    assert_eq!(db.len(), 3);

    // 1 is in every sequence
    assert_eq!(support(&pattern(&db, &[1]), db.sequences()), 3);
    // 1 then 2: the second sequence holds both in one itemset only
    assert_eq!(support(&pattern(&db, &[1, 2]), db.sequences()), 2);
    // 2 then 3: the third sequence holds both in one itemset only
    assert_eq!(support(&pattern(&db, &[2, 3]), db.sequences()), 2);
    assert_eq!(support(&pattern(&db, &[1, 3]), db.sequences()), 3);
    assert_eq!(support(&pattern(&db, &[1, 2, 3]), db.sequences()), 1);

    let closed = mine(&db, 2).unwrap();
    assert_eq!(
        resolved(&db, &closed),
        vec![
            (vec![vec![1], vec![2]], 2),
            (vec![vec![1], vec![3]], 3),
            (vec![vec![2]], 3),
            (vec![vec![2], vec![3]], 2),
        ]
    );
}

#[test]
fn test_sparse_and_negative_ids() {
    let input = "900000000000 -1 -5 -1 -2\n7 -1 900000000000 -1 -5 -1 -2\n-5 -1 -2\n";
    let db = spmf::parse_database(input);
    let closed = mine(&db, 2).unwrap();
    assert_eq!(
        resolved(&db, &closed),
        vec![(vec![vec![900000000000], vec![-5]], 2), (vec![vec![-5]], 3)]
    );
}

#[test]
fn test_short_sequences_bound_pattern_length() {
    let db = spmf::parse_database("1 -1 -2\n1 2 -1 -2\n2 -1 -2\n");
    let frequent = CloSpan::new(1).frequent(&db).unwrap();
    assert!(!frequent.is_empty());
    assert!(frequent.iter().all(|(pattern, _)| pattern.len() == 1));
}

#[test]
fn test_invalid_threshold() {
    let db = spmf::parse_database(INPUT);
    assert_eq!(mine(&db, 0), Err(MiningError::InvalidSupport(0)));
}

#[test]
fn test_empty_database() {
    let db = spmf::parse_database("\n  \n-2\n");
    assert!(db.is_empty());
    assert_eq!(mine(&db, 1), Ok(Vec::new()));
    assert_eq!(mine(&Database::default(), 3), Ok(Vec::new()));
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("result_clospan.csv");
    fs::write(&input, INPUT.replace(' ', ",")).unwrap();

    let db = spmf::read_database(&input).unwrap();
    let closed = mine(&db, 2).unwrap();
    spmf::save_results(&output, db.alphabet(), &closed).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "1,-1,2,-1,-2,sup=2\n1,-1,3,-1,-2,sup=3\n2,-1,-2,sup=3\n2,-1,3,-1,-2,sup=2\n"
    );

    let decoded = spmf::read_results(fs::File::open(&output).unwrap(), db.alphabet()).unwrap();
    assert_eq!(decoded, closed);
}

#[test]
fn test_config_file_drives_miner() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clospan.json");

    let mut config = Config::default();
    config.mining.min_support = 3;
    config.mining.max_length = Some(1);
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let db = spmf::parse_database(INPUT);
    let closed = loaded.miner().mine(&db).unwrap();
    assert_eq!(
        resolved(&db, &closed),
        vec![(vec![vec![1]], 3), (vec![vec![2]], 3), (vec![vec![3]], 3)]
    );
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("missing.json")).is_err());
}
