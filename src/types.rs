use bit_set::BitSet;
use std::collections::{BTreeMap, HashMap};
use std::iter::FromIterator;

/// Dense index of an item inside a [`Database`].
pub type Item = usize;
/// Item id as written in the input, any integer but the SPMF terminators.
pub type ItemId = i64;
pub type Itemset = BitSet;
pub type Sequence = Vec<Itemset>;
pub type Pattern = Vec<Itemset>;

/// A pattern paired with its support.
pub type Frequent = (Pattern, usize);

/// Borrowed suffixes of the sequences in a [`Database`].
pub type Projection<'a> = Vec<&'a [Itemset]>;

/// Record contains sid and eid of an Itemset in vertical format
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct Record {
    sid: u32,
    eid: i32,
}

impl Record {
    pub fn new(sid: u32, eid: i32) -> Self {
        Self { sid, eid }
    }

    /// Sequence the event belongs to
    pub fn sid(&self) -> u32 {
        self.sid
    }

    /// Position of the event inside its sequence
    pub fn eid(&self) -> i32 {
        self.eid
    }
}

/// Two-way mapping between raw item ids and the dense indices held by itemsets.
///
/// Bit sets grow with their largest member, so raw ids never go into an
/// itemset directly. Indices are handed out in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    ids: Vec<ItemId>,
    indices: HashMap<ItemId, Item>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alphabet where index `i` stands for id `i`, for `i < len`.
    pub fn identity(len: usize) -> Self {
        let mut alphabet = Self::new();
        for id in 0..len {
            alphabet.intern(id as ItemId);
        }
        alphabet
    }

    /// Index of `id`, assigning the next free one on first sight.
    pub fn intern(&mut self, id: ItemId) -> Item {
        if let Some(&item) = self.indices.get(&id) {
            return item;
        }
        let item = self.ids.len();
        self.ids.push(id);
        self.indices.insert(id, item);
        item
    }

    pub fn index(&self, id: ItemId) -> Option<Item> {
        self.indices.get(&id).copied()
    }

    pub fn id(&self, item: Item) -> Option<ItemId> {
        self.ids.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Itemset holding the indices of `ids`, `None` if one is unknown.
    pub fn itemset(&self, ids: &[ItemId]) -> Option<Itemset> {
        ids.iter().map(|&id| self.index(id)).collect()
    }

    /// Pattern of singleton itemsets for `ids`, `None` if one is unknown.
    pub fn pattern(&self, ids: &[ItemId]) -> Option<Pattern> {
        ids.iter().map(|&id| self.itemset(&[id])).collect()
    }

    /// Raw ids of every itemset, ascending within an itemset.
    ///
    /// Panics if an itemset holds an index this alphabet never handed out.
    pub fn resolve(&self, itemsets: &[Itemset]) -> Vec<Vec<ItemId>> {
        itemsets
            .iter()
            .map(|itemset| {
                let mut ids: Vec<ItemId> = itemset.iter().map(|item| self.ids[item]).collect();
                ids.sort_unstable();
                ids
            })
            .collect()
    }
}

/// Build an itemset from a slice of items.
pub fn itemset(items: &[Item]) -> Itemset {
    items.iter().cloned().collect()
}

/// Build a pattern of singleton itemsets, one per item.
pub fn singleton_pattern(items: &[Item]) -> Pattern {
    items
        .iter()
        .map(|&item| {
            let mut set = Itemset::new();
            set.insert(item);
            set
        })
        .collect()
}

/// An immutable collection of sequences to mine.
///
/// Empty itemsets and empty sequences never make it into a database, so every
/// stored sequence has at least one non-empty itemset. Identical sequences are
/// kept and each one counts toward support.
///
/// Collected from raw ids (`Vec<Vec<ItemId>>` per sequence) the ids are
/// interned into the database's [`Alphabet`]. Collected from itemsets, or from
/// vertical records, the indices are taken as the ids themselves:
///
/// ```rust
/// use clospan::{itemset, Database, Record};
///
/// let db: Database = vec![
///     (Record::new(0, 2), itemset(&[2])),
///     (Record::new(0, 1), itemset(&[1])),
///     (Record::new(1, 1), itemset(&[1])),
///     (Record::new(1, 1), itemset(&[3])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(db.len(), 2);
/// assert_eq!(db.sequences()[0], vec![itemset(&[1]), itemset(&[2])]);
/// assert_eq!(db.sequences()[1], vec![itemset(&[1, 3])]);
/// assert_eq!(db.alphabet().id(3), Some(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Database {
    sequences: Vec<Sequence>,
    alphabet: Alphabet,
}

impl Database {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        sequences.into_iter().collect()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The whole database as a projection, the root view of the search.
    pub fn view(&self) -> Projection<'_> {
        self.sequences.iter().map(|s| s.as_slice()).collect()
    }
}

impl FromIterator<Sequence> for Database {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        let sequences: Vec<Sequence> = iter
            .into_iter()
            .map(|seq| {
                seq.into_iter()
                    .filter(|set| !set.is_empty())
                    .collect::<Sequence>()
            })
            .filter(|seq| !seq.is_empty())
            .collect();
        let len = sequences
            .iter()
            .flatten()
            .filter_map(|set| set.iter().last())
            .max()
            .map_or(0, |max| max + 1);
        Self {
            sequences,
            alphabet: Alphabet::identity(len),
        }
    }
}

impl FromIterator<Vec<Vec<ItemId>>> for Database {
    fn from_iter<I: IntoIterator<Item = Vec<Vec<ItemId>>>>(iter: I) -> Self {
        let mut alphabet = Alphabet::new();
        let mut sequences = Vec::new();
        for raw in iter {
            let mut sequence = Sequence::new();
            for ids in raw {
                let mut set = Itemset::new();
                for id in ids {
                    set.insert(alphabet.intern(id));
                }
                if !set.is_empty() {
                    sequence.push(set);
                }
            }
            if !sequence.is_empty() {
                sequences.push(sequence);
            }
        }
        Self {
            sequences,
            alphabet,
        }
    }
}

impl FromIterator<(Record, Itemset)> for Database {
    fn from_iter<I: IntoIterator<Item = (Record, Itemset)>>(iter: I) -> Self {
        let mut grouped: BTreeMap<u32, BTreeMap<i32, Itemset>> = BTreeMap::new();
        for (record, items) in iter {
            grouped
                .entry(record.sid())
                .or_default()
                .entry(record.eid())
                .or_default()
                .union_with(&items);
        }
        grouped
            .into_values()
            .map(|events| events.into_values().collect::<Sequence>())
            .collect()
    }
}
