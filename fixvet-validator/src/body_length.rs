/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Body-length validation.
//!
//! Tag 9 declares the number of octets between the separator terminating
//! the BodyLength field and the first byte of the CheckSum field. The
//! recomputation sums `len(tag) + 1 + len(value) + 1` (the `=` and the
//! separator) over every header and body field except BeginString (8) and
//! BodyLength (9) itself; the trailer is excluded.

use fixvet_core::error::{ErrorBag, ValidationError};
use fixvet_core::field::tags;
use fixvet_core::message::ParsedMessage;
use tracing::debug;

/// Recomputes the body length and compares it to the declared tag 9 value.
pub fn check(message: &ParsedMessage, errors: &mut ErrorBag) {
    let Some(declared) = message.header_field(tags::BODY_LENGTH) else {
        errors.push(ValidationError::BodyLengthMissing);
        return;
    };

    let computed: usize = message
        .header
        .iter()
        .chain(message.body.iter())
        .filter(|f| f.number != tags::BEGIN_STRING && f.number != tags::BODY_LENGTH)
        .map(|f| decimal_width(f.number) + 1 + f.value.len() + 1)
        .sum();

    match declared.value.parse::<usize>() {
        Ok(length) if length == computed => {}
        _ => {
            debug!(computed, declared = %declared.value, "body length mismatch");
            errors.push(ValidationError::BodyLengthMismatch {
                expected: computed,
                declared: declared.value.clone(),
            });
        }
    }
}

/// Number of decimal digits in a tag number.
const fn decimal_width(mut n: u32) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
