//! Syllable dictionary and segmenter behaviour.

use std::io::Write;

use zhkit::{PinyinSegmenter, SyllableDictionary};

fn small_segmenter() -> PinyinSegmenter {
    let dictionary = SyllableDictionary::from_syllables(["bei", "jing", "be", "i", "jin", "g"]);
    PinyinSegmenter::new(dictionary)
}

fn builtin_segmenter() -> PinyinSegmenter {
    PinyinSegmenter::new(SyllableDictionary::builtin())
}

fn owned(parts: &[&[&str]]) -> Vec<Vec<String>> {
    parts
        .iter()
        .map(|d| d.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_enumerates_all_decompositions_in_order() {
    let segmenter = small_segmenter();
    let result = segmenter.segment("beijing");
    assert_eq!(
        result,
        owned(&[
            &["be", "i", "jin", "g"],
            &["be", "i", "jing"],
            &["bei", "jin", "g"],
            &["bei", "jing"],
        ])
    );
}

#[test]
fn test_contains_expected_decomposition() {
    let segmenter = small_segmenter();
    let result = segmenter.segment("beijing");
    assert!(result.contains(&vec!["bei".to_string(), "jing".to_string()]));
}

#[test]
fn test_builtin_ambiguity() {
    let segmenter = builtin_segmenter();
    assert_eq!(
        segmenter.segment_joined("xianggang"),
        vec!["xi ang gang", "xiang gang"]
    );
}

#[test]
fn test_single_syllable() {
    let segmenter = builtin_segmenter();
    assert_eq!(segmenter.segment("zhong"), owned(&[&["zhong"]]));
}

#[test]
fn test_fallback_when_nothing_matches() {
    let dictionary = SyllableDictionary::from_syllables(["a", "bei"]);
    let segmenter = PinyinSegmenter::new(dictionary);
    assert_eq!(segmenter.segment("xyzzy"), owned(&[&["xyzzy"]]));
}

#[test]
fn test_fallback_when_only_a_prefix_matches() {
    let segmenter = builtin_segmenter();
    assert_eq!(segmenter.segment("beijingx"), owned(&[&["beijingx"]]));
    assert_eq!(segmenter.segment_joined("beijingx"), vec!["beijingx"]);
}

#[test]
fn test_empty_input() {
    let segmenter = builtin_segmenter();
    assert!(segmenter.segment("").is_empty());
    assert!(segmenter.segment("   ").is_empty());
    assert!(segmenter.segment_joined("").is_empty());
}

#[test]
fn test_normalizes_case_and_whitespace() {
    let segmenter = builtin_segmenter();
    let result = segmenter.segment_joined("  BeiJing \n");
    assert!(result.contains(&"bei jing".to_string()));

    let fallback = segmenter.segment("  XYZ ");
    assert_eq!(fallback, owned(&[&["xyz"]]));
}

#[test]
fn test_every_decomposition_concatenates_to_input() {
    let segmenter = builtin_segmenter();
    for input in ["xianggang", "qinghuadaxue", "zhonghuarenmingongheguo", "xian", "fangan"] {
        let result = segmenter.segment(input);
        assert!(!result.is_empty(), "{}", input);
        for decomposition in &result {
            assert_eq!(decomposition.concat(), input);
            for syllable in decomposition {
                assert!(segmenter.dictionary().is_valid_syllable(syllable), "{}", syllable);
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let segmenter = builtin_segmenter();
    let first = segmenter.segment("zhonghuarenmingongheguo");
    for _ in 0..5 {
        assert_eq!(segmenter.segment("zhonghuarenmingongheguo"), first);
    }
}

#[test]
fn test_joined_matches_structured() {
    let segmenter = builtin_segmenter();
    let structured = segmenter.segment("qinghuadaxue");
    let joined = segmenter.segment_joined("qinghuadaxue");
    assert_eq!(structured.len(), joined.len());
    for (parts, line) in structured.iter().zip(&joined) {
        assert_eq!(&parts.join(" "), line);
    }
}

#[test]
fn test_limit_keeps_leading_results() {
    let all = small_segmenter().segment("beijing");
    let limited = small_segmenter().with_limit(2).segment("beijing");
    assert_eq!(limited, all[..2].to_vec());

    let one = small_segmenter().with_limit(1).segment("beijing");
    assert_eq!(one, owned(&[&["be", "i", "jin", "g"]]));
}

#[test]
fn test_dictionary_membership() {
    let dictionary = SyllableDictionary::builtin();
    assert!(dictionary.is_valid_syllable("zhuang"));
    assert!(dictionary.is_valid_syllable("lv"));
    assert!(!dictionary.is_valid_syllable("zh"));
    assert!(!dictionary.is_valid_syllable("Zhuang"));
    assert_eq!(dictionary.max_syllable_length(), 6);
    assert!(dictionary.len() > 390);
}

#[test]
fn test_dictionary_skips_overlong_and_blank_entries() {
    let dictionary = SyllableDictionary::from_syllables(["  Ba ", "", "chuangg", "ba"]);
    assert_eq!(dictionary.len(), 1);
    assert!(dictionary.is_valid_syllable("ba"));
    assert!(!dictionary.is_valid_syllable("chuangg"));
}

#[test]
fn test_match_lengths_ascending() {
    let dictionary = SyllableDictionary::builtin();
    let cps: Vec<char> = "xiangxiang".chars().collect();
    let mut out = Vec::new();
    dictionary.match_lengths(&cps, 0, &mut out);
    assert_eq!(out, vec![2, 3, 4, 5]);

    dictionary.match_lengths(&cps, 9, &mut out);
    assert!(out.is_empty());
}

#[test]
fn test_dictionary_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ni\nHAO\n\n  ma \nnot a syllable\n").unwrap();

    let dictionary = SyllableDictionary::from_file(file.path()).unwrap();
    assert_eq!(dictionary.len(), 3);

    let segmenter = PinyinSegmenter::new(dictionary);
    assert_eq!(segmenter.segment_joined("nihaoma"), vec!["ni hao ma"]);
}

#[test]
fn test_dictionary_missing_file() {
    let result = SyllableDictionary::from_file(std::path::Path::new("/nonexistent/syllables.txt"));
    assert!(matches!(result, Err(zhkit::Error::Io(_))));
}
