/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Required-field validation.
//!
//! Walks the dictionary's required-field trees: the header and trailer item
//! lists are checked flat against their sections; the message body tree is
//! walked recursively through groups and components. Every missing required
//! field is accumulated — the walk never stops at the first failure.
//!
//! Group counts and repetition structure are not verified; a required inner
//! field is satisfied by at least one occurrence anywhere in the body.
//! Conditionally-required rules are not modelled by the dictionary.

use fixvet_core::error::{ErrorBag, Section, ValidationError};
use fixvet_core::message::ParsedMessage;
use fixvet_dictionary::{Dictionary, ItemDef};
use tracing::debug;

/// Checks header, message-type, and trailer required fields.
pub fn check(dict: &Dictionary, message: &ParsedMessage, errors: &mut ErrorBag) {
    for item in dict.header_items() {
        if item.required() && !message.header_contains(item.name()) {
            errors.push(ValidationError::RequiredMissing {
                section: Section::Header,
                name: item.name().to_string(),
            });
        }
    }

    let msg_type = message.msg_type().unwrap_or_default();
    match dict.message(msg_type) {
        Some(def) => check_body_items(dict, &def.items, message, errors),
        None => {
            debug!(msg_type, "message type not in dictionary");
            errors.push(ValidationError::UnknownMsgType {
                msg_type: msg_type.to_string(),
            });
        }
    }

    for item in dict.trailer_items() {
        if item.required() && !message.trailer_contains(item.name()) {
            errors.push(ValidationError::RequiredMissing {
                section: Section::Trailer,
                name: item.name().to_string(),
            });
        }
    }
}

/// Walks a body item list, recursing into required groups and components.
///
/// A required group demands its count field by name and then its children;
/// a required component resolves by name and contributes its children. The
/// loader guarantees component references resolve and the graph is acyclic.
fn check_body_items(
    dict: &Dictionary,
    items: &[ItemDef],
    message: &ParsedMessage,
    errors: &mut ErrorBag,
) {
    for item in items {
        match item {
            ItemDef::Field(f) => {
                if f.required && !message.body_contains(&f.name) {
                    errors.push(ValidationError::RequiredMissing {
                        section: Section::Body,
                        name: f.name.clone(),
                    });
                }
            }
            ItemDef::Group(g) => {
                if g.required {
                    if !message.body_contains(&g.name) {
                        errors.push(ValidationError::RequiredMissing {
                            section: Section::Body,
                            name: g.name.clone(),
                        });
                    }
                    check_body_items(dict, &g.items, message, errors);
                }
            }
            ItemDef::Component(c) => {
                if c.required {
                    if let Some(def) = dict.component(&c.name) {
                        check_body_items(dict, &def.items, message, errors);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use fixvet_core::field::ParsedField;
    use fixvet_dictionary::{
        ComponentDef, ComponentRef, FieldDef, FieldRef, FieldType, GroupDef, MessageCategory,
        MessageDef, Version,
    };

    fn field_item(tag: u32, name: &str, required: bool) -> ItemDef {
        ItemDef::Field(FieldRef {
            tag,
            name: name.to_string(),
            required,
        })
    }

    /// Market-data-request shaped dictionary: required fields, a required
    /// group holding a required component, and an optional field.
    fn test_dict() -> Dictionary {
        let mut dict = Dictionary::new(Version::Fix44);
        for (tag, name) in [
            (8, "BeginString"),
            (9, "BodyLength"),
            (10, "CheckSum"),
            (35, "MsgType"),
            (55, "Symbol"),
            (146, "NoRelatedSym"),
            (262, "MDReqID"),
            (263, "SubscriptionRequestType"),
            (264, "MarketDepth"),
            (265, "MDUpdateType"),
        ] {
            dict.add_field(FieldDef::new(tag, name, FieldType::String));
        }
        dict.add_component(ComponentDef {
            name: "Instrument".to_string(),
            items: vec![field_item(55, "Symbol", false)],
        });
        dict.set_header(vec![
            field_item(8, "BeginString", true),
            field_item(9, "BodyLength", true),
            field_item(35, "MsgType", true),
        ]);
        dict.set_trailer(vec![field_item(10, "CheckSum", true)]);
        dict.add_message(MessageDef {
            msg_type: "V".to_string(),
            name: "MarketDataRequest".to_string(),
            category: MessageCategory::App,
            items: vec![
                field_item(262, "MDReqID", true),
                field_item(263, "SubscriptionRequestType", true),
                field_item(264, "MarketDepth", true),
                field_item(265, "MDUpdateType", false),
                ItemDef::Group(GroupDef {
                    name: "NoRelatedSym".to_string(),
                    required: true,
                    items: vec![ItemDef::Component(ComponentRef {
                        name: "Instrument".to_string(),
                        required: true,
                    })],
                }),
            ],
        });
        dict
    }

    fn header_field(message: &mut ParsedMessage, tag: u32, name: &str, value: &str) {
        message.header.push(ParsedField::new(tag, name, value));
    }

    fn full_message() -> ParsedMessage {
        let mut message = ParsedMessage::new(Bytes::new());
        header_field(&mut message, 8, "BeginString", "FIX.4.4");
        header_field(&mut message, 9, "BodyLength", "50");
        header_field(&mut message, 35, "MsgType", "V");
        message.body.push(ParsedField::new(262, "MDReqID", "req-1"));
        message
            .body
            .push(ParsedField::new(263, "SubscriptionRequestType", "1"));
        message.body.push(ParsedField::new(264, "MarketDepth", "0"));
        message
            .body
            .push(ParsedField::new(146, "NoRelatedSym", "1"));
        message.body.push(ParsedField::new(55, "Symbol", "BTCUSD"));
        message
            .trailer
            .push(ParsedField::new(10, "CheckSum", "000"));
        message
    }

    fn missing_names(errors: &ErrorBag) -> Vec<(Section, String)> {
        errors
            .iter()
            .filter_map(|e| match e {
                ValidationError::RequiredMissing { section, name } => {
                    Some((*section, name.clone()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_complete_message_passes() {
        let dict = test_dict();
        let mut errors = ErrorBag::new();
        check(&dict, &full_message(), &mut errors);
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_missing_header_field() {
        let dict = test_dict();
        let mut message = full_message();
        message.header.retain(|f| f.number != 8);

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);
        assert_eq!(
            missing_names(&errors),
            vec![(Section::Header, "BeginString".to_string())]
        );
    }

    #[test]
    fn test_missing_trailer_field() {
        let dict = test_dict();
        let mut message = full_message();
        message.trailer.clear();

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);
        assert_eq!(
            missing_names(&errors),
            vec![(Section::Trailer, "CheckSum".to_string())]
        );
    }

    #[test]
    fn test_all_missing_body_fields_accumulate() {
        let dict = test_dict();
        let mut message = full_message();
        message.body.clear();

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);

        let names: Vec<String> = missing_names(&errors).into_iter().map(|(_, n)| n).collect();
        assert_eq!(
            names,
            vec![
                "MDReqID",
                "SubscriptionRequestType",
                "MarketDepth",
                "NoRelatedSym"
            ]
        );
    }

    #[test]
    fn test_optional_fields_not_demanded() {
        let dict = test_dict();
        // MDUpdateType (265) and Symbol (55, optional inside Instrument)
        // are absent from full_message() variants that drop them.
        let mut message = full_message();
        message.body.retain(|f| f.number != 55);

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_msg_type_skips_body_but_not_trailer() {
        let dict = test_dict();
        let mut message = full_message();
        message.header.retain(|f| f.number != 35);
        header_field(&mut message, 35, "MsgType", "ZZ");
        message.body.clear();
        message.trailer.clear();

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownMsgType { msg_type } if msg_type == "ZZ"
        )));
        let missing = missing_names(&errors);
        assert!(!missing.iter().any(|(s, _)| *s == Section::Body));
        assert!(missing.contains(&(Section::Trailer, "CheckSum".to_string())));
    }

    #[test]
    fn test_missing_msg_type_reports_header_and_unknown_type() {
        let dict = test_dict();
        let mut message = full_message();
        message.header.retain(|f| f.number != 35);

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);

        assert!(missing_names(&errors).contains(&(Section::Header, "MsgType".to_string())));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownMsgType { msg_type } if msg_type.is_empty()
        )));
    }

    #[test]
    fn test_required_component_field_checked_in_body() {
        let mut dict = test_dict();
        dict.components.get_mut("Instrument").unwrap().items =
            vec![field_item(55, "Symbol", true)];
        // Rewire the message to require the component directly.
        let def = dict.messages.get_mut("V").unwrap();
        def.items = vec![ItemDef::Component(ComponentRef {
            name: "Instrument".to_string(),
            required: true,
        })];

        let mut message = full_message();
        message.body.retain(|f| f.number != 55);

        let mut errors = ErrorBag::new();
        check(&dict, &message, &mut errors);
        assert_eq!(
            missing_names(&errors),
            vec![(Section::Body, "Symbol".to_string())]
        );
    }
}
