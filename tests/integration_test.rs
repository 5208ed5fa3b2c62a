//! End-to-end checks through the `Chinese` facade.

use std::path::Path;

use zhkit::{CharTable, Chinese, ConvertMode, Error, NumberOptions, SyllableDictionary};

fn setup() -> Chinese {
    let mut table = CharTable::new();
    table.insert_pinyin('中', vec!["zhong".to_string()]);
    table.insert_pinyin('国', vec!["guo".to_string()]);
    table.insert_pinyin('重', vec!["zhong".to_string(), "chong".to_string()]);
    table.insert_simplified('發', vec!['发']);
    table.insert_simplified('財', vec!['财']);
    table.insert_traditional('发', vec!['發', '髮']);
    table.insert_traditional('财', vec!['財']);
    Chinese::new(table, SyllableDictionary::builtin())
}

fn units(parts: &[&[&str]]) -> Vec<Vec<String>> {
    parts
        .iter()
        .map(|u| u.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_to_pinyin_full() {
    let chinese = setup();
    let result = chinese.to_pinyin("中国", ConvertMode::PINYIN, " ", false).unwrap();
    assert_eq!(result.pinyin, Some(units(&[&["zhong"], &["guo"]])));
    assert_eq!(result.pinyin_first, None);
}

#[test]
fn test_to_pinyin_combined_modes() {
    let chinese = setup();
    let mode = ConvertMode::PINYIN | ConvertMode::PINYIN_FIRST;
    let result = chinese.to_pinyin("重中", mode, " ", false).unwrap();
    assert_eq!(result.pinyin, Some(units(&[&["zhong", "chong"], &["zhong"]])));
    assert_eq!(result.pinyin_first, Some(units(&[&["z", "c"], &["z"]])));
}

#[test]
fn test_to_pinyin_non_chinese_runs() {
    let chinese = setup();

    let grouped = chinese.to_pinyin("中国China 2", ConvertMode::PINYIN, " ", false).unwrap();
    assert_eq!(
        grouped.pinyin,
        Some(units(&[&["zhong"], &["guo"], &["China"], &[" "], &["2"]]))
    );

    let split = chinese.to_pinyin("中Ch", ConvertMode::PINYIN, " ", true).unwrap();
    assert_eq!(split.pinyin, Some(units(&[&["zhong"], &["C"], &["h"]])));
}

#[test]
fn test_to_pinyin_unknown_han_stays_separate() {
    let chinese = setup();
    let result = chinese.to_pinyin("ab好cd", ConvertMode::PINYIN, " ", false).unwrap();
    assert_eq!(result.pinyin, Some(units(&[&["ab"], &["好"], &["cd"]])));
}

#[test]
fn test_to_pinyin_join() {
    let chinese = setup();
    let mode = ConvertMode::PINYIN | ConvertMode::PINYIN_FIRST;
    let result = chinese.to_pinyin("中国", mode, "-", false).unwrap();
    assert_eq!(result.join(ConvertMode::PINYIN).as_deref(), Some("zhong-guo"));
    assert_eq!(result.join(ConvertMode::PINYIN_FIRST).as_deref(), Some("z-g"));

    let spaced = chinese.to_pinyin("中国", ConvertMode::PINYIN, "", false).unwrap();
    assert_eq!(spaced.join(ConvertMode::PINYIN).as_deref(), Some("zhong guo"));
    assert_eq!(spaced.join(ConvertMode::PINYIN_FIRST), None);
}

#[test]
fn test_to_pinyin_empty() {
    let chinese = setup();
    let result = chinese.to_pinyin("", ConvertMode::PINYIN, " ", false).unwrap();
    assert_eq!(result.pinyin, Some(Vec::new()));
}

#[test]
fn test_to_pinyin_tones_not_implemented() {
    let chinese = setup();
    assert!(matches!(
        chinese.to_pinyin("中", ConvertMode::PINYIN_SOUND, " ", false),
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        chinese.to_pinyin("中", ConvertMode::PINYIN | ConvertMode::PINYIN_SOUND_NUMBER, " ", false),
        Err(Error::NotImplemented(_))
    ));
}

#[test]
fn test_pinyin_result_serializes_requested_modes_only() {
    let chinese = setup();
    let result = chinese.to_pinyin("中", ConvertMode::PINYIN_FIRST, " ", false).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"pinyinFirst":[["z"]]}"#);
}

#[test]
fn test_simplified_traditional() {
    let chinese = setup();
    assert_eq!(chinese.to_simplified("發財"), "发财");
    assert_eq!(chinese.to_simplified("发财"), "发财");
    assert_eq!(chinese.to_traditional("发财"), "發財");
    assert_eq!(chinese.to_traditional(""), "");
}

#[test]
fn test_unknown_characters_pass_through() {
    let chinese = setup();
    for text in ["hello, world", "好人", "①②"] {
        assert_eq!(chinese.to_simplified(text), text);
        assert_eq!(chinese.to_traditional(text), text);
    }
}

#[test]
fn test_segment_pinyin_shapes() {
    let chinese = setup();
    assert!(chinese.segment_pinyin("beijing").contains(&"bei jing".to_string()));
    assert_eq!(chinese.segment_pinyin_array("zhong"), units(&[&["zhong"]]));
    assert!(chinese.is_valid_syllable("jing"));
    assert!(!chinese.is_valid_syllable("jingg"));
}

#[test]
fn test_numeral_operations() {
    let chinese = setup();
    assert_eq!(chinese.encode_numeral(2025, NumberOptions::default()).unwrap(), "二千零二十五");
    assert_eq!(chinese.encode_currency("2024.50", "元").unwrap(), "贰仟零贰拾肆元伍角");
    assert_eq!(chinese.decode_numeral("负一百").unwrap(), -100.0);
}

#[test]
fn test_missing_data_dir_still_usable() {
    let chinese = Chinese::from_data_dir(Path::new("/nonexistent/zhkit-data"));
    assert!(chinese.table().is_empty());
    assert_eq!(chinese.to_simplified("發財"), "發財");
    let result = chinese.to_pinyin("中", ConvertMode::PINYIN, " ", false).unwrap();
    assert_eq!(result.pinyin, Some(units(&[&["中"]])));
    assert_eq!(chinese.segment_pinyin("nihao"), vec!["ni ha o", "ni hao"]);
}

#[test]
fn test_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Chinese>();

    let chinese = setup();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(chinese.segment_pinyin("xianggang"), vec!["xi ang gang", "xiang gang"]);
            });
        }
    });
}
