//! Reading and writing the SPMF flat sequence format.
//!
//! Items are integers. `-1` closes an itemset and `-2` closes a sequence.
//! Database files separate tokens with commas or whitespace. Result files are
//! CSV, one pattern per row, ending in a `sup=<n>` field.

use crate::error::ParseError;
use crate::types::{Alphabet, Database, Frequent, ItemId, Itemset, Pattern};
use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::warn;

pub const ITEMSET_END: ItemId = -1;
pub const SEQUENCE_END: ItemId = -2;
const SUPPORT_PREFIX: &str = "sup=";

/// Parse one sequence per line.
///
/// Raw ids are interned into the database's alphabet. Non-integer tokens are
/// skipped with a warning, a trailing itemset without terminator is kept, and
/// lines that yield no itemset are dropped.
pub fn parse_database(text: &str) -> Database {
    text.lines()
        .enumerate()
        .map(|(line_no, line)| parse_sequence(line_no + 1, line))
        .collect()
}

fn parse_sequence(line_no: usize, line: &str) -> Vec<Vec<ItemId>> {
    let mut sequence = Vec::new();
    let mut current = Vec::new();

    let tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for token in tokens {
        match token.parse::<ItemId>() {
            Ok(ITEMSET_END) => {
                if !current.is_empty() {
                    sequence.push(std::mem::take(&mut current));
                }
            }
            Ok(SEQUENCE_END) => break,
            Ok(id) => current.push(id),
            Err(_) => warn!(line = line_no, token, "skipping invalid token"),
        }
    }
    if !current.is_empty() {
        sequence.push(current);
    }
    sequence
}

/// Read and parse a database file.
pub fn read_database(path: impl AsRef<Path>) -> io::Result<Database> {
    let content = fs::read_to_string(path)?;
    Ok(parse_database(&content))
}

/// One result row: `1,-1,2,3,-1,-2,sup=4`, items written as raw ids.
pub fn encode_result(alphabet: &Alphabet, pattern: &Pattern, support: usize) -> StringRecord {
    let mut record = StringRecord::new();
    for ids in alphabet.resolve(pattern) {
        for id in ids {
            record.push_field(&id.to_string());
        }
        record.push_field(&ITEMSET_END.to_string());
    }
    record.push_field(&SEQUENCE_END.to_string());
    record.push_field(&format!("{}{}", SUPPORT_PREFIX, support));
    record
}

fn row_text(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

/// Read back a row written by [`encode_result`], mapping ids through `alphabet`.
pub fn decode_result(record: &StringRecord, alphabet: &Alphabet) -> Result<Frequent, ParseError> {
    let fields: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();
    let (last, body) = fields
        .split_last()
        .ok_or_else(|| ParseError::MissingSupport(row_text(record)))?;
    let support = last
        .strip_prefix(SUPPORT_PREFIX)
        .ok_or_else(|| ParseError::MissingSupport(row_text(record)))?
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidSupport(last.to_string()))?;

    let mut pattern = Pattern::new();
    let mut current = Itemset::new();
    let mut terminated = false;
    for field in body {
        if terminated {
            return Err(ParseError::InvalidToken(field.to_string()));
        }
        match field.parse::<ItemId>() {
            Ok(ITEMSET_END) => {
                if !current.is_empty() {
                    pattern.push(std::mem::take(&mut current));
                }
            }
            Ok(SEQUENCE_END) => terminated = true,
            Ok(id) => {
                let item = alphabet.index(id).ok_or(ParseError::UnknownItem(id))?;
                current.insert(item);
            }
            Err(_) => return Err(ParseError::InvalidToken(field.to_string())),
        }
    }
    if !terminated {
        return Err(ParseError::MissingTerminator(row_text(record)));
    }
    if !current.is_empty() {
        pattern.push(current);
    }
    Ok((pattern, support))
}

/// Read every result row from `reader`.
pub fn read_results<R: Read>(reader: R, alphabet: &Alphabet) -> Result<Vec<Frequent>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    reader
        .records()
        .map(|record| decode_result(&record?, alphabet))
        .collect()
}

fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.flexible(true).terminator(Terminator::Any(b'\n'));
    builder
}

fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    alphabet: &Alphabet,
    results: &[Frequent],
) -> csv::Result<()> {
    for (pattern, support) in results {
        writer.write_record(&encode_result(alphabet, pattern, *support))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one row per result.
pub fn write_results<W: Write>(writer: W, alphabet: &Alphabet, results: &[Frequent]) -> csv::Result<()> {
    let mut writer = writer_builder().from_writer(writer);
    write_rows(&mut writer, alphabet, results)
}

pub fn save_results(path: impl AsRef<Path>, alphabet: &Alphabet, results: &[Frequent]) -> csv::Result<()> {
    let mut writer = writer_builder().from_path(path)?;
    write_rows(&mut writer, alphabet, results)
}

/// Human readable form: `(1 2) -> (3)`.
pub fn display_pattern(alphabet: &Alphabet, pattern: &Pattern) -> String {
    alphabet
        .resolve(pattern)
        .iter()
        .map(|ids| {
            let items: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            format!("({})", items.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn display_result(alphabet: &Alphabet, pattern: &Pattern, support: usize) -> String {
    format!("{}  sup={}", display_pattern(alphabet, pattern), support)
}
