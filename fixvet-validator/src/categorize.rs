/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field categorisation against the dictionary.
//!
//! Each token is resolved in the field catalogue and lands in the header,
//! body, or trailer bucket of a [`ParsedMessage`]. Header membership takes
//! precedence over trailer, trailer over body. The categoriser performs no
//! structural checks: a field declared inside a repeating group is bucketed
//! purely by name, and duplicates are preserved in transmission order.

use bytes::Bytes;
use fixvet_core::error::{ErrorBag, ValidationError};
use fixvet_core::field::{parse_tag, ParsedField};
use fixvet_core::message::ParsedMessage;
use fixvet_dictionary::Dictionary;
use fixvet_tagvalue::Token;
use tracing::debug;

/// Builds a [`ParsedMessage`] from tokens, accumulating an
/// [`ValidationError::UnknownTag`] for every token whose tag is not in the
/// catalogue.
pub fn categorize(
    dict: &Dictionary,
    tokens: &[Token<'_>],
    raw: &[u8],
    errors: &mut ErrorBag,
) -> ParsedMessage {
    let mut message = ParsedMessage::new(Bytes::copy_from_slice(raw));

    for token in tokens {
        let Some(def) = parse_tag(token.tag).and_then(|tag| dict.field(tag)) else {
            errors.push(ValidationError::UnknownTag {
                tag: String::from_utf8_lossy(token.tag).into_owned(),
            });
            continue;
        };

        let field = ParsedField::new(
            def.tag,
            def.name.clone(),
            String::from_utf8_lossy(token.value).into_owned(),
        );

        if dict.header_contains(&def.name) {
            message.header.push(field);
        } else if dict.trailer_contains(&def.name) {
            message.trailer.push(field);
        } else {
            message.body.push(field);
        }
    }

    debug!(
        header = message.header.len(),
        body = message.body.len(),
        trailer = message.trailer.len(),
        errors = errors.len(),
        "categorised message"
    );

    message
}
