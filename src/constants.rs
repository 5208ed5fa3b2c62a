// Numeral text markers
pub const NEGATIVE_MARKER: char = '负';
pub const DECIMAL_MARKER: char = '点';
pub const EXACT_MARKER: &str = "整";
pub const DEFAULT_CURRENCY_UNIT: &str = "元";

/// Longest valid syllable, in letters.
pub const MAX_SYLLABLE_LEN: usize = 6;

/// Largest integer part the numeral encoder accepts, in decimal digits.
pub const MAX_INTEGER_DIGITS: usize = 16;

// Unified ideographs, extension A, extension B, compatibility ideographs
pub fn is_cjk_char(c: char) -> bool {
    let code = c as u32;
    (0x4E00..=0x9FFF).contains(&code)
        || (0x3400..=0x4DBF).contains(&code)
        || (0x20000..=0x2A6DF).contains(&code)
        || (0xF900..=0xFAFF).contains(&code)
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{3000}' | '\u{200b}')
}

pub fn is_syllable_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ü'
}
