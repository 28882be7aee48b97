use clospan::{itemset, rank, spmf, CloSpan, Database, Record};

const DATA: &[(u32, i32, &[usize])] = &[
    (0, 1, &[1]),
    (0, 2, &[2]),
    (0, 3, &[3]),
    (1, 1, &[1, 2]),
    (1, 2, &[3]),
    (2, 1, &[1]),
    (2, 2, &[2]),
    (2, 2, &[3]),
];

fn main() {
    let database: Database = DATA
        .iter()
        .map(|&(sid, eid, items)| (Record::new(sid, eid), itemset(items)))
        .collect();

    let miner = CloSpan::new(2);

    let frequent = miner.frequent(&database).unwrap();
    println!("Frequent patterns:");
    for (pattern, support) in &frequent {
        println!("  {}", spmf::display_result(database.alphabet(), pattern, *support));
    }

    let mut closed = miner.mine(&database).unwrap();
    rank(&mut closed);
    println!("Closed patterns (SPMF rows):");
    spmf::write_results(std::io::stdout(), database.alphabet(), &closed).unwrap();
}
