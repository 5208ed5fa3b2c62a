//! Chinese numeral text to numbers.
//!
//! Narrower than the encoder: only bare digits, the tens
//! pattern (十, 十二, 二十, 二十五), a single round hundred or thousand
//! (一百, 三千) and digit-by-digit strings (二零二四) are understood.
//! Compound positional text such as 一百二十 or anything with 万/亿 is
//! rejected.

use crate::alphabet::{digit_value, is_ten_unit, round_unit_value};
use crate::constants::{DECIMAL_MARKER, NEGATIVE_MARKER};
use crate::error::{Error, Result};

pub fn decode(text: &str) -> Result<f64> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let unparseable = || Error::UnparseableNumeral(text.to_string());

    let (negative, unsigned) = match text.strip_prefix(NEGATIVE_MARKER) {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = unsigned.split(DECIMAL_MARKER);
    let integer_text = parts.next().unwrap_or("");
    let decimal_text = parts.next().unwrap_or("");
    if parts.next().is_some() || (integer_text.is_empty() && decimal_text.is_empty()) {
        return Err(unparseable());
    }

    let integer = if integer_text.is_empty() {
        0
    } else {
        decode_integer(integer_text)?
    };

    let mut decimal_digits = String::with_capacity(decimal_text.len());
    for symbol in decimal_text.chars() {
        let digit = digit_value(symbol).ok_or_else(unparseable)?;
        decimal_digits.push(char::from(b'0' + digit));
    }

    // Going through the decimal string keeps 一点二三 exactly 1.23.
    let magnitude: f64 = if decimal_digits.is_empty() {
        integer as f64
    } else {
        format!("{}.{}", integer, decimal_digits)
            .parse()
            .map_err(|_| unparseable())?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Integer part, tried in order: zero, single symbol, tens pattern, round
/// hundred/thousand, digit-by-digit reading.
pub fn decode_integer(text: &str) -> Result<u64> {
    let unparseable = || Error::UnparseableNumeral(text.to_string());
    let symbols: Vec<char> = text.chars().collect();

    match symbols.as_slice() {
        [] => return Err(unparseable()),
        [symbol] => {
            if let Some(digit) = digit_value(*symbol) {
                return Ok(digit as u64);
            }
            if is_ten_unit(*symbol) {
                return Ok(10);
            }
            return Err(unparseable());
        }
        _ => {}
    }

    if symbols.iter().copied().any(is_ten_unit) {
        return decode_tens(&symbols).ok_or_else(unparseable);
    }

    if let Some(value) = decode_round_unit(&symbols) {
        return Ok(value);
    }

    let mut result: u64 = 0;
    for &symbol in &symbols {
        let digit = digit_value(symbol).ok_or_else(unparseable)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit as u64))
            .ok_or_else(unparseable)?;
    }
    Ok(result)
}

/// `[d]十[d]` with both digits 1–9 when present.
fn decode_tens(symbols: &[char]) -> Option<u64> {
    let nonzero = |c: char| digit_value(c).filter(|&d| d > 0).map(u64::from);

    match *symbols {
        [ten] if is_ten_unit(ten) => Some(10),
        [ten, ones] if is_ten_unit(ten) => Some(10 + nonzero(ones)?),
        [tens, ten] if is_ten_unit(ten) => Some(nonzero(tens)? * 10),
        [tens, ten, ones] if is_ten_unit(ten) => Some(nonzero(tens)? * 10 + nonzero(ones)?),
        _ => None,
    }
}

/// `d百` or `d千` with d in 1–9.
fn decode_round_unit(symbols: &[char]) -> Option<u64> {
    match *symbols {
        [digit, unit] => {
            let multiplier = round_unit_value(unit)?;
            let digit = digit_value(digit).filter(|&d| d > 0)?;
            Some(digit as u64 * multiplier)
        }
        _ => None,
    }
}
