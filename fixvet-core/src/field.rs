/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Parsed field representation and tag helpers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag numbers the validator itself must recognise.
///
/// Everything else is catalogue data looked up in the dictionary.
pub mod tags {
    /// BeginString (FIX version), always the first field.
    pub const BEGIN_STRING: u32 = 8;
    /// BodyLength, always the second field.
    pub const BODY_LENGTH: u32 = 9;
    /// CheckSum, always the last field.
    pub const CHECK_SUM: u32 = 10;
    /// MsgType, identifies the message's logical type.
    pub const MSG_TYPE: u32 = 35;
}

/// A single field as transmitted, resolved against the dictionary.
///
/// Values are kept as the strings they were transmitted as; the validator
/// never interprets them against the field's declared FIX type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedField {
    /// Tag number.
    pub number: u32,
    /// Dictionary name of the field (e.g. `"MsgType"`).
    pub name: String,
    /// Value exactly as transmitted.
    pub value: String,
}

impl ParsedField {
    /// Creates a new parsed field.
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ParsedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.number, self.value)
    }
}

/// Parses a tag number from ASCII bytes.
///
/// # Arguments
/// * `bytes` - The ASCII bytes left of the `=` in a token
///
/// # Returns
/// The parsed tag number, or `None` if the bytes are empty, too long, or
/// contain a non-digit.
#[inline]
#[must_use]
pub fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
    }

    Some(result)
}
