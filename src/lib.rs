//! Chinese text conversion: pinyin lookup and syllable segmentation,
//! simplified/traditional mapping, and Arabic ⇄ Chinese numeral and currency
//! text.
//!
//! ```
//! use zhkit::{Chinese, NumberOptions};
//!
//! let chinese = Chinese::default();
//! assert!(chinese.segment_pinyin("beijing").contains(&"bei jing".to_string()));
//! assert_eq!(chinese.encode_numeral(2025, NumberOptions::default()).unwrap(), "二千零二十五");
//! assert_eq!(chinese.decode_numeral("十二").unwrap(), 12.0);
//! ```

pub mod alphabet;
pub mod chinese;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod number;
pub mod segmenter;
pub mod syllables;
pub mod tables;

pub use chinese::{Chinese, ConvertMode, PinyinResult};
pub use encoder::NumberOptions;
pub use error::{Error, Result};
pub use number::NumberInput;
pub use segmenter::PinyinSegmenter;
pub use syllables::SyllableDictionary;
pub use tables::CharTable;
