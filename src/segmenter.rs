use crate::syllables::SyllableDictionary;

/// Per-call search state.
///
/// `cuts[i]` lists the syllable lengths starting at codepoint `i` in
/// ascending order; `reachable[i]` is true when the suffix starting at `i`
/// can be fully consumed by syllables.
struct SearchState {
    codepoints: Vec<char>,
    cuts: Vec<Vec<usize>>,
    reachable: Vec<bool>,
}

impl SearchState {
    fn build(text: &str, dictionary: &SyllableDictionary) -> Self {
        let codepoints: Vec<char> = text.chars().collect();
        let n = codepoints.len();

        let mut cuts = Vec::with_capacity(n);
        let mut scratch = Vec::with_capacity(dictionary.max_syllable_length());
        for i in 0..n {
            dictionary.match_lengths(&codepoints, i, &mut scratch);
            cuts.push(scratch.clone());
        }

        // Right to left: a position is reachable if some cut lands on a
        // reachable position. Position n (empty suffix) always is.
        let mut reachable = vec![false; n + 1];
        reachable[n] = true;
        for i in (0..n).rev() {
            reachable[i] = cuts[i].iter().any(|&len| reachable[i + len]);
        }

        SearchState {
            codepoints,
            cuts,
            reachable,
        }
    }

    fn len(&self) -> usize {
        self.codepoints.len()
    }
}

/// Splits unspaced pinyin into dictionary syllables.
///
/// Every complete decomposition is enumerated depth-first, trying cut lengths
/// in ascending order at each position. Input with no complete decomposition
/// comes back as a single opaque unit.
pub struct PinyinSegmenter {
    dictionary: SyllableDictionary,
    limit: Option<usize>,
}

impl PinyinSegmenter {
    pub fn new(dictionary: SyllableDictionary) -> Self {
        PinyinSegmenter {
            dictionary,
            limit: None,
        }
    }

    /// Stop after the first `limit` decompositions. Order is unaffected.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self
    }

    pub fn dictionary(&self) -> &SyllableDictionary {
        &self.dictionary
    }

    /// Lower-case and trim, the form every decomposition concatenates back to.
    pub fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    pub fn segment(&self, input: &str) -> Vec<Vec<String>> {
        let text = PinyinSegmenter::normalize(input);
        if text.is_empty() {
            return Vec::new();
        }

        let state = SearchState::build(&text, &self.dictionary);
        if !state.reachable[0] {
            return vec![vec![text]];
        }

        let mut results = Vec::new();
        let mut path: Vec<(usize, usize)> = Vec::new();
        self.walk(&state, 0, &mut path, &mut results);
        results
    }

    /// Same enumeration as [`segment`](Self::segment), each decomposition
    /// joined with single spaces.
    pub fn segment_joined(&self, input: &str) -> Vec<String> {
        self.segment(input)
            .into_iter()
            .map(|syllables| syllables.join(" "))
            .collect()
    }

    fn walk(
        &self,
        state: &SearchState,
        pos: usize,
        path: &mut Vec<(usize, usize)>,
        results: &mut Vec<Vec<String>>,
    ) {
        if self.is_full(results) {
            return;
        }

        if pos == state.len() {
            let decomposition = path
                .iter()
                .map(|&(start, end)| state.codepoints[start..end].iter().collect())
                .collect();
            results.push(decomposition);
            return;
        }

        for &len in &state.cuts[pos] {
            let next = pos + len;
            if !state.reachable[next] {
                continue;
            }
            path.push((pos, next));
            self.walk(state, next, path, results);
            path.pop();
            if self.is_full(results) {
                return;
            }
        }
    }

    #[inline]
    fn is_full(&self, results: &[Vec<String>]) -> bool {
        self.limit.is_some_and(|limit| results.len() >= limit)
    }
}
