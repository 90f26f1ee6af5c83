/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for FIX message validation.
//!
//! Validation never aborts: every finding is a [`ValidationError`] value
//! appended to an [`ErrorBag`], and the caller inspects the bag once the
//! pipeline has run. The error set is closed; each variant maps to exactly
//! one validation stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Standard message header.
    Header,
    /// Message-type-specific body.
    Body,
    /// Standard message trailer.
    Trailer,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Header => "HEADER",
            Self::Body => "BODY",
            Self::Trailer => "TRAILER",
        };
        write!(f, "{}", s)
    }
}

/// A single validation finding.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Token has no `=` or an empty tag.
    #[error("malformed token '{token}': expected tag=value")]
    MalformedToken {
        /// The offending token text.
        token: String,
    },

    /// Tag is not in the dictionary's field catalogue.
    #[error("field with tag={tag} not found")]
    UnknownTag {
        /// The tag text as transmitted.
        tag: String,
    },

    /// Tag 35's value is not a known message type.
    #[error("unknown message type '{msg_type}'")]
    UnknownMsgType {
        /// The MsgType value as transmitted.
        msg_type: String,
    },

    /// A `required="Y"` field is absent from its section.
    #[error("{section}: the field with name={name} is required")]
    RequiredMissing {
        /// Section the field was expected in.
        section: Section,
        /// Dictionary name of the missing field.
        name: String,
    },

    /// Tag 9 is absent from the header.
    #[error("body length field (tag 9) is missing")]
    BodyLengthMissing,

    /// Declared body length differs from the recomputed one.
    #[error("body length mismatch: computed {expected}, declared {declared}")]
    BodyLengthMismatch {
        /// Length recomputed from the parsed fields.
        expected: usize,
        /// Declared tag 9 value as transmitted.
        declared: String,
    },

    /// Tag 10's value is not exactly three characters.
    #[error("checksum value '{value}' must be exactly three digits")]
    ChecksumSizeInvalid {
        /// Declared tag 10 value as transmitted.
        value: String,
    },

    /// Message does not end with a `10=NNN` field.
    #[error("message does not end with a checksum field")]
    ChecksumMalformed,

    /// Declared checksum differs from the recomputed one.
    #[error("checksum mismatch: computed {expected}, declared {declared}")]
    ChecksumMismatch {
        /// Checksum recomputed from the raw bytes, zero-padded.
        expected: String,
        /// Declared tag 10 value as transmitted.
        declared: String,
    },
}

/// Ordered, append-only accumulator of validation errors.
///
/// One bag lives per validation call; errors appear in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBag {
    errors: Vec<ValidationError>,
}

impl ErrorBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error from `iter`.
    pub fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }

    /// Returns true if no errors have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the recorded errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the bag, returning the errors in discovery order.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Iterates over the recorded errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no errors found");
        }
        writeln!(f, "{} error(s) found", self.errors.len())?;
        for err in &self.errors {
            writeln!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl IntoIterator for ErrorBag {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
