use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::{FxHashMap, FxHashSet};

use crate::constants::{is_syllable_letter, MAX_SYLLABLE_LEN};
use crate::error::Result;

/// Standard Mandarin syllable inventory, toneless, `v` standing in for `ü`.
pub const BUILTIN_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao",
    "ba", "bai", "ban", "bang", "bao", "bei", "ben", "beng", "bi", "bian", "biao", "bie", "bin", "bing", "bo", "bu",
    "ca", "cai", "can", "cang", "cao", "ce", "cen", "ceng", "cha", "chai", "chan", "chang", "chao", "che", "chen",
    "cheng", "chi", "chong", "chou", "chu", "chuai", "chuan", "chuang", "chui", "chun", "chuo", "ci", "cong", "cou",
    "cu", "cuan", "cui", "cun", "cuo",
    "da", "dai", "dan", "dang", "dao", "de", "deng", "di", "dian", "diao", "die", "ding", "diu", "dong", "dou", "du",
    "duan", "dui", "dun", "duo",
    "e", "en", "er",
    "fa", "fan", "fang", "fei", "fen", "feng", "fo", "fou", "fu",
    "ga", "gai", "gan", "gang", "gao", "ge", "gei", "gen", "geng", "gong", "gou", "gu", "gua", "guai", "guan", "guang",
    "gui", "gun", "guo",
    "ha", "hai", "han", "hang", "hao", "he", "hei", "hen", "heng", "hong", "hou", "hu", "hua", "huai", "huan", "huang",
    "hui", "hun", "huo",
    "ji", "jia", "jian", "jiang", "jiao", "jie", "jin", "jing", "jiong", "jiu", "ju", "juan", "jue", "jun",
    "ka", "kai", "kan", "kang", "kao", "ke", "ken", "keng", "kong", "kou", "ku", "kua", "kuai", "kuan", "kuang", "kui",
    "kun", "kuo",
    "la", "lai", "lan", "lang", "lao", "le", "lei", "leng", "li", "lia", "lian", "liang", "liao", "lie", "lin", "ling",
    "liu", "long", "lou", "lu", "luan", "lue", "lun", "luo", "lv",
    "ma", "mai", "man", "mang", "mao", "me", "mei", "men", "meng", "mi", "mian", "miao", "mie", "min", "ming", "miu",
    "mo", "mou", "mu",
    "na", "nai", "nan", "nang", "nao", "ne", "nei", "nen", "neng", "ni", "nian", "niang", "niao", "nie", "nin", "ning",
    "niu", "nong", "nu", "nuan", "nue", "nuo", "nv",
    "o", "ou",
    "pa", "pai", "pan", "pang", "pao", "pei", "pen", "peng", "pi", "pian", "piao", "pie", "pin", "ping", "po", "pou",
    "pu",
    "qi", "qia", "qian", "qiang", "qiao", "qie", "qin", "qing", "qiong", "qiu", "qu", "quan", "que", "qun",
    "ran", "rang", "rao", "re", "ren", "reng", "ri", "rong", "rou", "ru", "ruan", "rui", "run", "ruo",
    "sa", "sai", "san", "sang", "sao", "se", "sen", "seng", "sha", "shai", "shan", "shang", "shao", "she", "shen",
    "sheng", "shi", "shou", "shu", "shua", "shuai", "shuan", "shuang", "shui", "shun", "shuo", "si", "song", "sou",
    "su", "suan", "sui", "sun", "suo",
    "ta", "tai", "tan", "tang", "tao", "te", "teng", "ti", "tian", "tiao", "tie", "ting", "tong", "tou", "tu", "tuan",
    "tui", "tun", "tuo",
    "wa", "wai", "wan", "wang", "wei", "wen", "weng", "wo", "wu",
    "xi", "xia", "xian", "xiang", "xiao", "xie", "xin", "xing", "xiong", "xiu", "xu", "xuan", "xue", "xun",
    "ya", "yan", "yang", "yao", "ye", "yi", "yin", "ying", "yo", "yong", "you", "yu", "yuan", "yue", "yun",
    "za", "zai", "zan", "zang", "zao", "ze", "zei", "zen", "zeng", "zha", "zhai", "zhan", "zhang", "zhao", "zhe",
    "zhen", "zheng", "zhi", "zhong", "zhou", "zhu", "zhua", "zhuai", "zhuan", "zhuang", "zhui", "zhun", "zhuo", "zi",
    "zong", "zou", "zu", "zuan", "zui", "zun", "zuo",
];

#[derive(Default)]
struct TrieNode {
    children: FxHashMap<char, Box<TrieNode>>,
    is_syllable: bool,
}

impl TrieNode {
    #[inline]
    fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| b.as_ref())
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| Box::new(TrieNode::default()))
    }
}

/// Set of valid romanized syllables.
///
/// Membership is the only validity test the segmenter applies. The set is
/// built once and only read afterwards, so a dictionary can be shared across
/// threads freely.
pub struct SyllableDictionary {
    syllables: FxHashSet<String>,
    trie: TrieNode,
    max_syllable_length: usize,
}

impl Default for SyllableDictionary {
    fn default() -> Self {
        SyllableDictionary::builtin()
    }
}

impl SyllableDictionary {
    /// Dictionary over [`BUILTIN_SYLLABLES`].
    pub fn builtin() -> Self {
        SyllableDictionary::from_syllables(BUILTIN_SYLLABLES.iter().copied())
    }

    /// Build a dictionary from arbitrary entries.
    ///
    /// Entries are trimmed and lower-cased. Blank entries and entries longer
    /// than six characters are skipped.
    pub fn from_syllables<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut syllables = FxHashSet::default();
        let mut trie = TrieNode::default();
        let mut max_syllable_length = 0;

        for entry in entries {
            let syllable = entry.as_ref().trim().to_lowercase();
            let len = syllable.chars().count();
            if len == 0 || len > MAX_SYLLABLE_LEN {
                continue;
            }
            if !syllables.insert(syllable.clone()) {
                continue;
            }
            max_syllable_length = max_syllable_length.max(len);

            let mut node = &mut trie;
            for c in syllable.chars() {
                node = node.get_or_create_child(c);
            }
            node.is_syllable = true;
        }

        SyllableDictionary {
            syllables,
            trie,
            max_syllable_length,
        }
    }

    /// Load one syllable per line.
    ///
    /// Lines holding anything other than Latin letters (after trimming and
    /// lower-casing) are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let entry = line?.trim().to_lowercase();
            if entry.is_empty() || !entry.chars().all(is_syllable_letter) {
                continue;
            }
            entries.push(entry);
        }

        let dictionary = SyllableDictionary::from_syllables(entries);
        tracing::debug!(
            path = %path.display(),
            syllables = dictionary.len(),
            "loaded syllable dictionary"
        );
        Ok(dictionary)
    }

    pub fn is_valid_syllable(&self, candidate: &str) -> bool {
        self.syllables.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn max_syllable_length(&self) -> usize {
        self.max_syllable_length
    }

    /// Push, in ascending order, every length `len` such that
    /// `cps[start..start + len]` is a syllable.
    #[inline]
    pub fn match_lengths(&self, cps: &[char], start: usize, out: &mut Vec<usize>) {
        out.clear();
        let end_limit = (start + self.max_syllable_length).min(cps.len());
        let mut node = &self.trie;
        for i in start..end_limit {
            match node.get_child(cps[i]) {
                Some(child) => node = child,
                None => return,
            }
            if node.is_syllable {
                out.push(i + 1 - start);
            }
        }
    }
}
