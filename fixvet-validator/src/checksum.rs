/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Checksum validation.
//!
//! Tag 10 must be the message's last field, spelled `10=NNN` with exactly
//! three decimal digits, and must equal the sum of every preceding raw byte
//! modulo 256. The byte sum uses the surrogate-separator rule of
//! [`fixvet_tagvalue::calculate_checksum`] so fixtures with a print-safe
//! separator check out against on-wire checksums.

use fixvet_core::error::{ErrorBag, ValidationError};
use fixvet_core::field::tags;
use fixvet_core::message::ParsedMessage;
use fixvet_tagvalue::{calculate_checksum, format_checksum, parse_checksum};
use tracing::debug;

/// Byte length of the trailing checksum field: `10=` + 3 digits + separator.
const CHECKSUM_FIELD_LEN: usize = 7;

/// Validates the trailing checksum field against the raw bytes.
pub fn check(message: &ParsedMessage, separator: u8, errors: &mut ErrorBag) {
    let Some(declared) = message.trailer_field(tags::CHECK_SUM) else {
        errors.push(ValidationError::ChecksumMalformed);
        return;
    };

    if declared.value.len() != 3 {
        errors.push(ValidationError::ChecksumSizeInvalid {
            value: declared.value.clone(),
        });
        return;
    }

    let raw = message.raw();
    if raw.len() < CHECKSUM_FIELD_LEN {
        errors.push(ValidationError::ChecksumMalformed);
        return;
    }

    let (prefix, suffix) = raw.split_at(raw.len() - CHECKSUM_FIELD_LEN);
    if &suffix[..3] != b"10=" || suffix[6] != separator || parse_checksum(&suffix[3..6]).is_none()
    {
        errors.push(ValidationError::ChecksumMalformed);
        return;
    }

    let computed = format_checksum(calculate_checksum(prefix, separator));
    if computed != declared.value {
        debug!(%computed, declared = %declared.value, "checksum mismatch");
        errors.push(ValidationError::ChecksumMismatch {
            expected: computed,
            declared: declared.value.clone(),
        });
    }
}
