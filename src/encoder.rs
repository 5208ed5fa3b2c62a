//! Arabic numerals to Chinese numeral and currency text.

use crate::alphabet::{NumeralAlphabet, CURRENCY_DECIMAL_UNITS, FINANCIAL, GROUP_SIZE, PLAIN};
use crate::constants::{
    DECIMAL_MARKER, DEFAULT_CURRENCY_UNIT, EXACT_MARKER, MAX_INTEGER_DIGITS, NEGATIVE_MARKER,
};
use crate::error::{Error, Result};
use crate::number::{FloatFormat, NumberInput, ParsedNumber};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberOptions {
    /// Write a leading "一十" as "十" (一十二 => 十二).
    pub ten_min: bool,
}

/// Convert a number to plain Chinese numerals.
///
/// Decimal digits are read out one by one after "点"; a negative value is
/// prefixed with "负".
pub fn encode_plain(value: impl Into<NumberInput>, options: NumberOptions) -> Result<String> {
    let parsed = ParsedNumber::from_input(&value.into(), FloatFormat::Shortest)?;

    let mut integer = encode_integer(parsed.significant_integer_digits(), &PLAIN)?;
    if options.ten_min {
        let leading_ten = format!("{}{}", PLAIN.digit(1), PLAIN.ten());
        if let Some(rest) = integer.strip_prefix(leading_ten.as_str()) {
            integer = format!("{}{}", PLAIN.ten(), rest);
        }
    }

    let mut result = String::new();
    if parsed.negative {
        result.push(NEGATIVE_MARKER);
    }
    result.push_str(&integer);
    if !parsed.decimal_digits.is_empty() {
        result.push(DECIMAL_MARKER);
        for &digit in &parsed.decimal_digits {
            result.push_str(PLAIN.digit(digit));
        }
    }
    Ok(result)
}

/// Convert an amount to capitalized currency text, e.g. 贰仟零贰拾肆元伍角.
///
/// Floats are rounded to cents first. Text keeps at most two fractional
/// digits; extra digits are dropped, not rounded. An empty `unit` means 元.
pub fn encode_currency(amount: impl Into<NumberInput>, unit: &str) -> Result<String> {
    let unit = if unit.is_empty() { DEFAULT_CURRENCY_UNIT } else { unit };
    let parsed = ParsedNumber::from_input(&amount.into(), FloatFormat::Cents)?;

    let integer_digits = parsed.significant_integer_digits();
    let integer = encode_integer(integer_digits, &FINANCIAL)?;

    let jiao = parsed.decimal_digits.first().copied().unwrap_or(0);
    let fen = parsed.decimal_digits.get(1).copied().unwrap_or(0);
    let decimal = encode_cents(jiao, fen);

    let integer_is_zero = integer_digits.is_empty();
    let mut result = String::new();
    if parsed.negative && !(integer_is_zero && decimal.is_empty()) {
        result.push(NEGATIVE_MARKER);
    }

    if integer_is_zero {
        if decimal.is_empty() {
            result.push_str(FINANCIAL.zero());
            result.push_str(unit);
            result.push_str(EXACT_MARKER);
        } else {
            result.push_str(&decimal);
        }
    } else {
        result.push_str(&integer);
        result.push_str(unit);
        if decimal.is_empty() {
            result.push_str(EXACT_MARKER);
        } else {
            result.push_str(&decimal);
        }
    }
    Ok(result)
}

/// Positional conversion of an integer given most-significant digit first,
/// without leading zeros.
///
/// Digits are grouped by four from the right. A run of zeros inside the
/// number collapses into one zero symbol written before the next non-zero
/// digit. A zero closing a group still writes that group's big unit (万, 亿,
/// 兆) unless the output already ends with it, so 100000000 reads 一亿万.
pub fn encode_integer(digits: &[u8], alphabet: &NumeralAlphabet) -> Result<String> {
    if digits.is_empty() {
        return Ok(alphabet.zero().to_string());
    }
    if digits.len() > MAX_INTEGER_DIGITS {
        return Err(Error::MagnitudeOverflow {
            digits: digits.len(),
        });
    }

    let length = digits.len();
    let mut result = String::new();
    let mut pending_zero = false;

    for (i, &digit) in digits.iter().enumerate() {
        let pos = length - i - 1;
        let group = pos / GROUP_SIZE;
        let unit_pos = pos % GROUP_SIZE;

        if digit == 0 {
            if unit_pos == 0 && group > 0 {
                let big_unit = alphabet.big_units[group];
                if !result.ends_with(big_unit) {
                    result.push_str(big_unit);
                }
            }
            pending_zero = true;
        } else {
            if pending_zero && !result.is_empty() {
                result.push_str(alphabet.zero());
            }
            pending_zero = false;

            result.push_str(alphabet.digit(digit));
            if unit_pos > 0 {
                result.push_str(alphabet.units[unit_pos]);
            } else if group > 0 {
                result.push_str(alphabet.big_units[group]);
            }
        }
    }

    Ok(result)
}

/// 角/分 text for two decimal digits; empty when both are zero.
fn encode_cents(jiao: u8, fen: u8) -> String {
    let mut result = String::new();
    if jiao > 0 {
        result.push_str(FINANCIAL.digit(jiao));
        result.push_str(CURRENCY_DECIMAL_UNITS[0]);
    }
    if fen > 0 {
        if jiao == 0 {
            result.push_str(FINANCIAL.zero());
        }
        result.push_str(FINANCIAL.digit(fen));
        result.push_str(CURRENCY_DECIMAL_UNITS[1]);
    }
    result
}
