//! # CloSpan
//!
//! Closed sequential pattern mining over databases of itemset sequences.
//!
//! Patterns are grown one singleton itemset at a time, counted against the
//! full database, and finally reduced to the closed ones: those with no
//! strict super-pattern of the same support.
//!
//! ```rust
//! use clospan::{mine, spmf};
//!
//! let db = spmf::parse_database("1 -1 2 -1 3 -1 -2\n1 2 -1 3 -1 -2\n1 -1 2 3 -1 -2\n");
//! for (pattern, support) in mine(&db, 2).unwrap() {
//!     println!("{}", spmf::display_result(db.alphabet(), &pattern, support));
//! }
//! ```

pub mod closure;
pub mod config;
pub mod error;
pub mod matcher;
pub mod projection;
pub mod search;
pub mod spmf;
pub mod types;

pub use closure::filter_closed;
pub use config::Config;
pub use error::{ConfigError, MiningError, ParseError};
pub use matcher::{is_subsequence, support};
pub use projection::project;
pub use search::{mine, rank, CloSpan};
pub use types::{
    itemset, singleton_pattern, Alphabet, Database, Frequent, Item, ItemId, Itemset, Pattern,
    Projection, Record, Sequence,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
