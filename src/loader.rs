//! Character table ingestion.
//!
//! Character data comes in four JSON shapes. Each shape has an adapter and
//! the adapters are tried in a fixed order; the first one that deserializes
//! wins and fills a [`CharTable`].
//!
//! 1. `{"字": {"pinyin": ["zi"], "simplified": ["字"], "traditional": ["字"]}}`
//! 2. `{"字": ["zi"]}`
//! 3. `{"字": "zi"}`
//! 4. `{"字": ["zi,zhi", "字", "字", 0, 0]}`

use std::fs;
use std::io;
use std::path::Path;

use fxhash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::tables::CharTable;

pub const CHARS_DATA_FILE: &str = "charsData.json";
pub const PINYIN_FILE: &str = "pinyin.json";
pub const VARIANTS_FILE: &str = "simplified_traditional.json";

/// Which adapter accepted the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Records,
    PinyinList,
    PinyinString,
    Packed,
}

type RecordMap = FxHashMap<String, Map<String, Value>>;

/// Detect the shape of `content` and convert it.
pub fn parse_chars_data(content: &str) -> Result<(CharTable, TableFormat)> {
    if let Ok(data) = serde_json::from_str::<RecordMap>(content) {
        return Ok((from_records(data), TableFormat::Records));
    }
    if let Ok(data) = serde_json::from_str::<FxHashMap<String, Vec<String>>>(content) {
        return Ok((from_pinyin_lists(data), TableFormat::PinyinList));
    }
    if let Ok(data) = serde_json::from_str::<FxHashMap<String, String>>(content) {
        return Ok((from_pinyin_strings(data), TableFormat::PinyinString));
    }
    if let Ok(data) = serde_json::from_str::<FxHashMap<String, Vec<Value>>>(content) {
        return Ok((from_packed(data), TableFormat::Packed));
    }
    Err(Error::UnrecognizedTableFormat)
}

/// Load a `charsData.json`-style file of any supported shape.
pub fn load_chars_data(path: &Path) -> Result<CharTable> {
    let content = fs::read_to_string(path)?;
    let (table, format) = parse_chars_data(&content)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        pinyin = table.pinyin_len(),
        variants = table.variant_len(),
        "loaded character table"
    );
    Ok(table)
}

/// Load the character table from a data directory.
///
/// `charsData.json` is preferred. Without it, `pinyin.json` and
/// `simplified_traditional.json` (record shape) are combined; at least one
/// of them must load.
pub fn load_dir(dir: &Path) -> Result<CharTable> {
    let chars_data = dir.join(CHARS_DATA_FILE);
    match load_chars_data(&chars_data) {
        Ok(table) => return Ok(table),
        Err(e) => tracing::debug!(path = %chars_data.display(), error = %e, "trying split table files"),
    }

    let mut table = CharTable::new();
    let mut loaded = false;
    for name in [PINYIN_FILE, VARIANTS_FILE] {
        let path = dir.join(name);
        match load_records(&path) {
            Ok(part) => {
                table.merge(part);
                loaded = true;
            }
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "table file skipped"),
        }
    }

    if !loaded {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no character data found in {}", dir.display()),
        )));
    }
    Ok(table)
}

fn load_records(path: &Path) -> Result<CharTable> {
    let content = fs::read_to_string(path)?;
    let data: RecordMap = serde_json::from_str(&content)?;
    Ok(from_records(data))
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn char_list(value: Option<&Value>) -> Vec<char> {
    string_list(value)
        .iter()
        .filter_map(|s| single_char(s))
        .collect()
}

fn from_records(data: RecordMap) -> CharTable {
    let mut table = CharTable::new();
    for (key, record) in data {
        let Some(c) = single_char(&key) else {
            continue;
        };
        table.insert_pinyin(c, string_list(record.get("pinyin")));
        table.insert_simplified(c, char_list(record.get("simplified")));
        table.insert_traditional(c, char_list(record.get("traditional")));
    }
    table
}

fn from_pinyin_lists(data: FxHashMap<String, Vec<String>>) -> CharTable {
    let mut table = CharTable::new();
    for (key, pinyin) in data {
        if let Some(c) = single_char(&key) {
            table.insert_pinyin(c, pinyin.into_iter().filter(|p| !p.is_empty()).collect());
        }
    }
    table
}

fn from_pinyin_strings(data: FxHashMap<String, String>) -> CharTable {
    let mut table = CharTable::new();
    for (key, pinyin) in data {
        if let Some(c) = single_char(&key) {
            if !pinyin.is_empty() {
                table.insert_pinyin(c, vec![pinyin]);
            }
        }
    }
    table
}

// [pinyin csv, simplified, traditional, ...]; shorter rows are skipped
fn from_packed(data: FxHashMap<String, Vec<Value>>) -> CharTable {
    let mut table = CharTable::new();
    for (key, row) in data {
        let Some(c) = single_char(&key) else {
            continue;
        };
        if row.len() < 3 {
            continue;
        }

        if let Some(pinyin) = row[0].as_str() {
            let candidates = pinyin
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            table.insert_pinyin(c, candidates);
        }
        if let Some(simplified) = row[1].as_str() {
            table.insert_simplified(c, simplified.chars().collect());
        }
        if let Some(traditional) = row[2].as_str() {
            table.insert_traditional(c, traditional.chars().collect());
        }
    }
    table
}
