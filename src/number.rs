use std::fmt::Display;

use crate::error::{Error, Result};

/// A numeric value handed to the encoder.
///
/// Text is taken digit for digit, so `"0.10"` keeps its trailing zero and a
/// long decimal string is never rounded through a float.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Integer(i128),
    Float(f64),
    Float32(f32),
    Text(String),
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput {
                fn from(value: $t) -> Self {
                    NumberInput::Integer(value as i128)
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Float32(value)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

/// How a float input is rendered to digits before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    /// Shortest representation that round-trips, no exponent.
    Shortest,
    /// Exactly two fractional digits, as money amounts are written.
    Cents,
}

/// Sign plus the decimal digits of a number, split at the decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub negative: bool,
    pub integer_digits: Vec<u8>,
    pub decimal_digits: Vec<u8>,
}

impl ParsedNumber {
    pub fn from_input(input: &NumberInput, float_format: FloatFormat) -> Result<Self> {
        match input {
            NumberInput::Integer(value) => ParsedNumber::parse(&value.to_string()),
            NumberInput::Float(value) => parse_float(value, value.is_finite(), float_format),
            NumberInput::Float32(value) => parse_float(value, value.is_finite(), float_format),
            NumberInput::Text(text) => ParsedNumber::parse(text),
        }
    }

    /// Parse `-?digits(.digits)?`. Either side of the point may be empty but
    /// not both.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidInputType(text.to_string());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (integer_text, decimal_text) = match unsigned.split_once('.') {
            Some((integer, decimal)) => (integer, decimal),
            None => (unsigned, ""),
        };

        if integer_text.is_empty() && decimal_text.is_empty() {
            return Err(invalid());
        }

        let integer_digits = to_digits(integer_text).ok_or_else(invalid)?;
        let decimal_digits = to_digits(decimal_text).ok_or_else(invalid)?;

        // -0 and -0.00 are plain zero
        let is_zero = integer_digits
            .iter()
            .chain(decimal_digits.iter())
            .all(|&d| d == 0);

        Ok(ParsedNumber {
            negative: negative && !is_zero,
            integer_digits,
            decimal_digits,
        })
    }

    /// Integer digits without leading zeros; empty for a zero integer part.
    pub fn significant_integer_digits(&self) -> &[u8] {
        let first_nonzero = self
            .integer_digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(self.integer_digits.len());
        &self.integer_digits[first_nonzero..]
    }
}

// f32 is formatted as f32; widening first would print the binary error digits
fn parse_float<T: Display>(
    value: T,
    finite: bool,
    float_format: FloatFormat,
) -> Result<ParsedNumber> {
    if !finite {
        return Err(Error::InvalidInputType(value.to_string()));
    }
    let text = match float_format {
        FloatFormat::Shortest => format!("{}", value),
        FloatFormat::Cents => format!("{:.2}", value),
    };
    ParsedNumber::parse(&text)
}

fn to_digits(text: &str) -> Option<Vec<u8>> {
    text.chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}
