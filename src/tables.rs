use fxhash::FxHashMap;

/// Per-character lookup data: pinyin candidates and simplified/traditional
/// counterparts.
///
/// Candidate lists keep the order they were loaded in; the first entry is
/// the preferred one. An empty table is valid and turns every lookup into a
/// miss.
#[derive(Debug, Default, Clone)]
pub struct CharTable {
    pinyin: FxHashMap<char, Vec<String>>,
    simplified: FxHashMap<char, Vec<char>>,
    traditional: FxHashMap<char, Vec<char>>,
}

impl CharTable {
    pub fn new() -> Self {
        CharTable::default()
    }

    pub fn lookup_pinyin(&self, c: char) -> Option<&[String]> {
        self.pinyin.get(&c).map(Vec::as_slice)
    }

    pub fn lookup_simplified(&self, c: char) -> Option<&[char]> {
        self.simplified.get(&c).map(Vec::as_slice)
    }

    pub fn lookup_traditional(&self, c: char) -> Option<&[char]> {
        self.traditional.get(&c).map(Vec::as_slice)
    }

    /// Replace the pinyin candidates of `c`. Empty lists are ignored.
    pub fn insert_pinyin(&mut self, c: char, candidates: Vec<String>) {
        if !candidates.is_empty() {
            self.pinyin.insert(c, candidates);
        }
    }

    pub fn insert_simplified(&mut self, c: char, forms: Vec<char>) {
        if !forms.is_empty() {
            self.simplified.insert(c, forms);
        }
    }

    pub fn insert_traditional(&mut self, c: char, forms: Vec<char>) {
        if !forms.is_empty() {
            self.traditional.insert(c, forms);
        }
    }

    /// Copy every entry of `other` into `self`, overwriting on conflict.
    pub fn merge(&mut self, other: CharTable) {
        self.pinyin.extend(other.pinyin);
        self.simplified.extend(other.simplified);
        self.traditional.extend(other.traditional);
    }

    pub fn pinyin_len(&self) -> usize {
        self.pinyin.len()
    }

    pub fn variant_len(&self) -> usize {
        self.simplified.len() + self.traditional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pinyin.is_empty() && self.simplified.is_empty() && self.traditional.is_empty()
    }
}
