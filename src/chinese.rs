use std::ops::{BitOr, BitOrAssign};
use std::path::Path;

use serde::Serialize;

use crate::constants::{is_cjk_char, is_separator};
use crate::decoder;
use crate::encoder::{self, NumberOptions};
use crate::error::{Error, Result};
use crate::loader;
use crate::number::NumberInput;
use crate::segmenter::PinyinSegmenter;
use crate::syllables::SyllableDictionary;
use crate::tables::CharTable;

/// Set of pinyin renderings requested from [`Chinese::to_pinyin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConvertMode(u8);

impl ConvertMode {
    /// Full toneless pinyin.
    pub const PINYIN: ConvertMode = ConvertMode(1);
    /// First letter of each candidate.
    pub const PINYIN_FIRST: ConvertMode = ConvertMode(1 << 1);
    /// Tone marks (zhōng). Not implemented.
    pub const PINYIN_SOUND: ConvertMode = ConvertMode(1 << 2);
    /// Tone numbers (zhong1). Not implemented.
    pub const PINYIN_SOUND_NUMBER: ConvertMode = ConvertMode(1 << 3);

    pub const fn contains(self, other: ConvertMode) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for ConvertMode {
    type Output = ConvertMode;

    fn bitor(self, rhs: ConvertMode) -> ConvertMode {
        ConvertMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConvertMode {
    fn bitor_assign(&mut self, rhs: ConvertMode) {
        self.0 |= rhs.0;
    }
}

/// Output of [`Chinese::to_pinyin`]: one candidate list per text unit, for
/// each requested mode. Modes that were not requested stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinyinResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin_first: Option<Vec<Vec<String>>>,
    #[serde(skip)]
    pub separator: String,
}

impl PinyinResult {
    /// First candidate of every unit for `mode`, joined by the separator
    /// given to `to_pinyin`.
    pub fn join(&self, mode: ConvertMode) -> Option<String> {
        let units = if mode == ConvertMode::PINYIN {
            self.pinyin.as_ref()?
        } else if mode == ConvertMode::PINYIN_FIRST {
            self.pinyin_first.as_ref()?
        } else {
            return None;
        };

        let parts: Vec<&str> = units
            .iter()
            .filter_map(|candidates| candidates.first())
            .map(String::as_str)
            .collect();
        Some(parts.join(&self.separator))
    }
}

/// One unit of pinyin input: a known character or passthrough text.
enum Unit<'a> {
    Known(&'a [String]),
    Passthrough(String),
}

/// Entry point for every conversion.
///
/// Holds the character table and the syllable segmenter; both are read-only
/// after construction, so one instance can serve any number of threads.
pub struct Chinese {
    table: CharTable,
    segmenter: PinyinSegmenter,
}

impl Default for Chinese {
    fn default() -> Self {
        Chinese::new(CharTable::new(), SyllableDictionary::builtin())
    }
}

impl Chinese {
    pub fn new(table: CharTable, dictionary: SyllableDictionary) -> Self {
        Chinese::with_segmenter(table, PinyinSegmenter::new(dictionary))
    }

    pub fn with_segmenter(table: CharTable, segmenter: PinyinSegmenter) -> Self {
        Chinese { table, segmenter }
    }

    /// Load character data from `dir`, falling back to an empty table when
    /// nothing can be read. The builtin syllables are always available.
    pub fn from_data_dir(dir: &Path) -> Self {
        let table = match loader::load_dir(dir) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "character data unavailable, lookups will pass through");
                CharTable::new()
            }
        };
        Chinese::new(table, SyllableDictionary::builtin())
    }

    pub fn table(&self) -> &CharTable {
        &self.table
    }

    pub fn segmenter(&self) -> &PinyinSegmenter {
        &self.segmenter
    }

    pub fn is_valid_syllable(&self, candidate: &str) -> bool {
        self.segmenter.dictionary().is_valid_syllable(candidate)
    }

    /// Convert text to pinyin, character by character.
    ///
    /// Characters missing from the table pass through. By default
    /// (`split_non_chinese = false`) consecutive non-Han characters other
    /// than whitespace are grouped into one unit: "China" rather than
    /// "C","h","i","n","a". Set `split_non_chinese` to get one unit per
    /// character. An empty `separator` means a single space.
    pub fn to_pinyin(
        &self,
        text: &str,
        mode: ConvertMode,
        separator: &str,
        split_non_chinese: bool,
    ) -> Result<PinyinResult> {
        if mode.contains(ConvertMode::PINYIN_SOUND) {
            return Err(Error::NotImplemented("tone-marked pinyin"));
        }
        if mode.contains(ConvertMode::PINYIN_SOUND_NUMBER) {
            return Err(Error::NotImplemented("tone-numbered pinyin"));
        }

        let separator = if separator.is_empty() { " " } else { separator };
        let units = self.pinyin_units(text, split_non_chinese);

        let full = mode.contains(ConvertMode::PINYIN).then(|| {
            units
                .iter()
                .map(|unit| match unit {
                    Unit::Known(candidates) => candidates.to_vec(),
                    Unit::Passthrough(s) => vec![s.clone()],
                })
                .collect()
        });

        let first = mode.contains(ConvertMode::PINYIN_FIRST).then(|| {
            units
                .iter()
                .map(|unit| match unit {
                    Unit::Known(candidates) => candidates
                        .iter()
                        .map(|py| py.chars().next().map(String::from).unwrap_or_default())
                        .collect(),
                    Unit::Passthrough(s) => vec![s.clone()],
                })
                .collect()
        });

        Ok(PinyinResult {
            pinyin: full,
            pinyin_first: first,
            separator: separator.to_string(),
        })
    }

    fn pinyin_units<'a>(&'a self, text: &str, split_non_chinese: bool) -> Vec<Unit<'a>> {
        let mut units = Vec::new();
        let mut run = String::new();

        for c in text.chars() {
            if let Some(candidates) = self.table.lookup_pinyin(c) {
                if !run.is_empty() {
                    units.push(Unit::Passthrough(std::mem::take(&mut run)));
                }
                units.push(Unit::Known(candidates));
                continue;
            }

            let groupable = !split_non_chinese && !is_cjk_char(c) && !is_separator(c);
            if groupable {
                run.push(c);
                continue;
            }

            if !run.is_empty() {
                units.push(Unit::Passthrough(std::mem::take(&mut run)));
            }
            units.push(Unit::Passthrough(c.to_string()));
        }

        if !run.is_empty() {
            units.push(Unit::Passthrough(run));
        }
        units
    }

    /// Every syllable decomposition, each joined with spaces.
    pub fn segment_pinyin(&self, text: &str) -> Vec<String> {
        self.segmenter.segment_joined(text)
    }

    /// Every syllable decomposition as a list of syllables.
    pub fn segment_pinyin_array(&self, text: &str) -> Vec<Vec<String>> {
        self.segmenter.segment(text)
    }

    /// Replace each character by its first simplified form, if any.
    pub fn to_simplified(&self, text: &str) -> String {
        text.chars()
            .map(|c| first_or_self(self.table.lookup_simplified(c), c))
            .collect()
    }

    /// Replace each character by its first traditional form, if any.
    pub fn to_traditional(&self, text: &str) -> String {
        text.chars()
            .map(|c| first_or_self(self.table.lookup_traditional(c), c))
            .collect()
    }

    pub fn encode_numeral(&self, value: impl Into<NumberInput>, options: NumberOptions) -> Result<String> {
        encoder::encode_plain(value, options)
    }

    pub fn encode_currency(&self, amount: impl Into<NumberInput>, unit: &str) -> Result<String> {
        encoder::encode_currency(amount, unit)
    }

    pub fn decode_numeral(&self, text: &str) -> Result<f64> {
        decoder::decode(text)
    }
}

#[inline]
fn first_or_self(forms: Option<&[char]>, c: char) -> char {
    forms.and_then(|f| f.first().copied()).unwrap_or(c)
}
