/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Categorised view of a single FIX message.
//!
//! A [`ParsedMessage`] is produced per validation call and never mutated
//! afterwards. Fields land in the header, body, or trailer bucket according
//! to the dictionary's membership tables; each bucket preserves the input
//! order of the fields that landed in it.

use crate::field::{tags, ParsedField};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A FIX message split into header, body, and trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Fields whose name the dictionary places in the header.
    pub header: Vec<ParsedField>,
    /// Fields placed in neither header nor trailer.
    pub body: Vec<ParsedField>,
    /// Fields whose name the dictionary places in the trailer.
    pub trailer: Vec<ParsedField>,
    /// The original wire bytes, exactly as supplied.
    raw: Bytes,
}

impl ParsedMessage {
    /// Creates an empty message holding a copy of the wire bytes.
    #[must_use]
    pub fn new(raw: Bytes) -> Self {
        Self {
            header: Vec::new(),
            body: Vec::new(),
            trailer: Vec::new(),
            raw,
        }
    }

    /// Returns the original wire bytes.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the first header field with the given tag number.
    #[must_use]
    pub fn header_field(&self, tag: u32) -> Option<&ParsedField> {
        self.header.iter().find(|f| f.number == tag)
    }

    /// Returns the first trailer field with the given tag number.
    #[must_use]
    pub fn trailer_field(&self, tag: u32) -> Option<&ParsedField> {
        self.trailer.iter().find(|f| f.number == tag)
    }

    /// Returns true if a header field with the given name is present.
    #[must_use]
    pub fn header_contains(&self, name: &str) -> bool {
        self.header.iter().any(|f| f.name == name)
    }

    /// Returns true if a body field with the given name is present.
    #[must_use]
    pub fn body_contains(&self, name: &str) -> bool {
        self.body.iter().any(|f| f.name == name)
    }

    /// Returns true if a trailer field with the given name is present.
    #[must_use]
    pub fn trailer_contains(&self, name: &str) -> bool {
        self.trailer.iter().any(|f| f.name == name)
    }

    /// Returns the MsgType (tag 35) value, if the header carries one.
    #[must_use]
    pub fn msg_type(&self) -> Option<&str> {
        self.header_field(tags::MSG_TYPE).map(|f| f.value.as_str())
    }

    /// Returns the total number of categorised fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.header.len() + self.body.len() + self.trailer.len()
    }

    /// Returns true if no field was categorised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Iterates over all fields, header first, then body, then trailer.
    pub fn fields(&self) -> impl Iterator<Item = &ParsedField> {
        self.header
            .iter()
            .chain(self.body.iter())
            .chain(self.trailer.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedMessage {
        let mut msg = ParsedMessage::new(Bytes::from_static(b"8=FIX.4.4|10=000|"));
        msg.header.push(ParsedField::new(8, "BeginString", "FIX.4.4"));
        msg.header.push(ParsedField::new(35, "MsgType", "D"));
        msg.body.push(ParsedField::new(55, "Symbol", "BTCUSD"));
        msg.trailer.push(ParsedField::new(10, "CheckSum", "000"));
        msg
    }

    #[test]
    fn test_section_lookups() {
        let msg = sample();
        assert!(msg.header_contains("BeginString"));
        assert!(!msg.header_contains("Symbol"));
        assert!(msg.body_contains("Symbol"));
        assert!(msg.trailer_contains("CheckSum"));
        assert_eq!(msg.header_field(8).unwrap().value, "FIX.4.4");
        assert_eq!(msg.trailer_field(10).unwrap().value, "000");
        assert!(msg.header_field(10).is_none());
    }

    #[test]
    fn test_msg_type() {
        assert_eq!(sample().msg_type(), Some("D"));
        assert_eq!(ParsedMessage::default().msg_type(), None);
    }

    #[test]
    fn test_field_count() {
        let msg = sample();
        assert_eq!(msg.field_count(), 4);
        assert!(!msg.is_empty());
        assert!(ParsedMessage::default().is_empty());
    }

    #[test]
    fn test_fields_order() {
        let msg = sample();
        let numbers: Vec<u32> = msg.fields().map(|f| f.number).collect();
        assert_eq!(numbers, vec![8, 35, 55, 10]);
    }
}
