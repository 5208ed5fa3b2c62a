//! Numeral symbol tables.
//!
//! Both alphabets share one positional layout: digits indexed 0–9, units
//! indexed by position inside a four-digit group, big units indexed by group.

/// Digit symbols per group position, one alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralAlphabet {
    pub digits: [&'static str; 10],
    pub units: [&'static str; 4],
    pub big_units: [&'static str; 4],
}

pub const GROUP_SIZE: usize = 4;

pub const PLAIN: NumeralAlphabet = NumeralAlphabet {
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    units: ["", "十", "百", "千"],
    big_units: ["", "万", "亿", "兆"],
};

/// Capitalized digits used on cheques and invoices.
pub const FINANCIAL: NumeralAlphabet = NumeralAlphabet {
    digits: ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"],
    units: ["", "拾", "佰", "仟"],
    big_units: ["", "万", "亿", "兆"],
};

/// 角 (tenths) and 分 (hundredths) of the currency unit.
pub const CURRENCY_DECIMAL_UNITS: [&str; 2] = ["角", "分"];

impl NumeralAlphabet {
    #[inline]
    pub fn zero(&self) -> &'static str {
        self.digits[0]
    }

    #[inline]
    pub fn digit(&self, value: u8) -> &'static str {
        self.digits[value as usize]
    }

    #[inline]
    pub fn ten(&self) -> &'static str {
        self.units[1]
    }
}

/// Value of a single digit symbol from either alphabet, 0–9.
pub fn digit_value(symbol: char) -> Option<u8> {
    let value = match symbol {
        '零' | '〇' => 0,
        '一' | '壹' => 1,
        '二' | '贰' => 2,
        '三' | '叁' => 3,
        '四' | '肆' => 4,
        '五' | '伍' => 5,
        '六' | '陆' => 6,
        '七' | '柒' => 7,
        '八' | '捌' => 8,
        '九' | '玖' => 9,
        _ => return None,
    };
    Some(value)
}

/// True for the ten unit of either alphabet.
pub fn is_ten_unit(symbol: char) -> bool {
    matches!(symbol, '十' | '拾')
}

/// Multiplier of the hundred and thousand units of either alphabet.
pub fn round_unit_value(symbol: char) -> Option<u64> {
    match symbol {
        '百' | '佰' => Some(100),
        '千' | '仟' => Some(1000),
        _ => None,
    }
}
