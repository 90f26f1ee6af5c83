/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixVet Validator
//!
//! Staged FIX 4.4 message validation.
//!
//! [`validate`] runs four checks in sequence over a tokenised message:
//! field categorisation against the dictionary, required-field presence,
//! body length (tag 9), and checksum (tag 10). Stages are gated: all errors
//! found within a stage are reported, and no later stage runs after a
//! failing one. The call always returns a [`ValidationOutcome`]; nothing is
//! thrown.
//!
//! The dictionary is a shared immutable parameter, so concurrent calls on
//! different threads are safe; each call owns its outcome.

pub mod body_length;
pub mod categorize;
pub mod checksum;
pub mod config;
pub mod required;

pub use config::ValidatorConfig;

use fixvet_core::error::{ErrorBag, ValidationError};
use fixvet_core::message::ParsedMessage;
use fixvet_dictionary::{Dictionary, LoadError};
use fixvet_tagvalue::tokenize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of validating one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// True iff every stage passed with no errors.
    pub valid: bool,
    /// Errors in discovery order.
    pub errors: Vec<ValidationError>,
    /// The categorised message, populated once tokenisation ran.
    pub parsed: Option<ParsedMessage>,
}

/// Validates a single FIX message against the dictionary.
///
/// # Arguments
/// * `dict` - The data dictionary (shared, immutable)
/// * `raw` - The message bytes in tag-value wire form
/// * `config` - Separator and version settings
pub fn validate(dict: &Dictionary, raw: &[u8], config: &ValidatorConfig) -> ValidationOutcome {
    let mut errors = ErrorBag::new();

    let (tokens, token_errors) = tokenize(raw, config.separator);
    errors.extend(token_errors);

    let message = categorize::categorize(dict, &tokens, raw, &mut errors);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "categorisation failed, skipping checks");
        return outcome(errors, message);
    }

    required::check(dict, &message, &mut errors);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "required-field check failed");
        return outcome(errors, message);
    }

    body_length::check(&message, &mut errors);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "body-length check failed");
        return outcome(errors, message);
    }

    checksum::check(&message, config.separator, &mut errors);
    outcome(errors, message)
}

/// Loads the dictionary from the location the configuration points at.
///
/// # Errors
/// Returns [`LoadError`] if the file cannot be read or parsed.
pub fn load_dictionary(config: &ValidatorConfig) -> Result<Dictionary, LoadError> {
    Dictionary::load(config.dictionary_path())
}

fn outcome(errors: ErrorBag, message: ParsedMessage) -> ValidationOutcome {
    let errors = errors.into_errors();
    ValidationOutcome {
        valid: errors.is_empty(),
        errors,
        parsed: Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixvet_dictionary::{FieldDef, FieldRef, FieldType, ItemDef, MessageCategory, MessageDef, Version};

    fn field_item(tag: u32, name: &str, required: bool) -> ItemDef {
        ItemDef::Field(FieldRef {
            tag,
            name: name.to_string(),
            required,
        })
    }

    fn heartbeat_dict() -> Dictionary {
        let mut dict = Dictionary::new(Version::Fix44);
        for (tag, name, field_type) in [
            (8, "BeginString", FieldType::String),
            (9, "BodyLength", FieldType::Length),
            (10, "CheckSum", FieldType::String),
            (35, "MsgType", FieldType::String),
            (112, "TestReqID", FieldType::String),
        ] {
            dict.add_field(FieldDef::new(tag, name, field_type));
        }
        dict.set_header(vec![
            field_item(8, "BeginString", true),
            field_item(9, "BodyLength", true),
            field_item(35, "MsgType", true),
        ]);
        dict.set_trailer(vec![field_item(10, "CheckSum", true)]);
        dict.add_message(MessageDef {
            msg_type: "0".to_string(),
            name: "Heartbeat".to_string(),
            category: MessageCategory::Admin,
            items: vec![field_item(112, "TestReqID", false)],
        });
        dict
    }

    fn config() -> ValidatorConfig {
        ValidatorConfig::new().with_separator(b'|')
    }

    #[test]
    fn test_valid_heartbeat() {
        let dict = heartbeat_dict();
        let raw = b"8=FIX.4.4|9=5|35=0|10=163|";
        let result = validate(&dict, raw, &config());
        assert!(result.valid, "errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        let parsed = result.parsed.unwrap();
        assert_eq!(parsed.msg_type(), Some("0"));
    }

    #[test]
    fn test_unknown_tag_gates_pipeline() {
        let dict = heartbeat_dict();
        // Tag 9 misspelt as 99: categorisation fails, so the missing
        // body-length is never reported.
        let raw = b"8=FIX.4.4|99=5|35=0|10=163|";
        let result = validate(&dict, raw, &config());
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![ValidationError::UnknownTag {
                tag: "99".to_string()
            }]
        );
    }

    #[test]
    fn test_stage_order_body_length_before_checksum() {
        let dict = heartbeat_dict();
        let raw = b"8=FIX.4.4|9=99|35=0|10=000|";
        let result = validate(&dict, raw, &config());
        assert_eq!(
            result.errors,
            vec![ValidationError::BodyLengthMismatch {
                expected: 5,
                declared: "99".to_string(),
            }]
        );
    }

    #[test]
    fn test_determinism() {
        let dict = heartbeat_dict();
        let raw = b"8=FIX.4.4|9=99|35=0|10=000|";
        let first = validate(&dict, raw, &config());
        let second = validate(&dict, raw, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_owns_its_bytes() {
        let dict = heartbeat_dict();
        let raw = b"8=FIX.4.4|9=5|35=0|10=163|".to_vec();
        let result = validate(&dict, &raw, &config());
        drop(raw);
        assert_eq!(result.parsed.unwrap().raw()[0], b'8');
    }
}
