/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QuickFIX-style XML dictionary loading.
//!
//! The loader consumes the FIX 4.4 XML data definition
//! (`/fix/{fields,components,header,trailer,messages}`) and produces an
//! immutable [`Dictionary`]. Every field reference is resolved against the
//! catalogue, component references are checked for existence, and component
//! cycles are rejected, so validation can assume a well-formed schema.

use crate::schema::{
    ComponentDef, ComponentRef, Dictionary, FieldDef, FieldRef, FieldType, GroupDef, ItemDef,
    MessageCategory, MessageDef, Version,
};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use xmltree::{Element, XMLNode};

/// Errors raised while loading a dictionary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Dictionary file could not be read.
    #[error("cannot read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary file is not well-formed XML.
    #[error("cannot parse dictionary xml: {0}")]
    Xml(#[from] xmltree::ParseError),

    /// A required element is absent.
    #[error("missing element <{element}>")]
    MissingElement {
        /// Name of the absent element.
        element: String,
    },

    /// A required attribute is absent.
    #[error("missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// Element the attribute was expected on.
        element: String,
        /// Name of the absent attribute.
        attribute: String,
    },

    /// An attribute value could not be interpreted.
    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        /// Element carrying the attribute.
        element: String,
        /// Attribute name.
        attribute: String,
        /// The offending value.
        value: String,
    },

    /// An element of an unexpected kind appeared in a structure.
    #[error("unexpected element <{element}>")]
    UnexpectedElement {
        /// Name of the unexpected element.
        element: String,
    },

    /// A structure references a field the catalogue does not define.
    #[error("field '{name}' is not defined in the catalogue")]
    UnknownField {
        /// The unresolved field name.
        name: String,
    },

    /// A structure references a component that is not defined.
    #[error("component '{name}' is not defined")]
    UnknownComponent {
        /// The unresolved component name.
        name: String,
    },

    /// The component graph contains a cycle.
    #[error("component '{name}' participates in a reference cycle")]
    ComponentCycle {
        /// A component on the cycle.
        name: String,
    },
}

impl Dictionary {
    /// Loads a dictionary from an XML file on disk.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the file cannot be read or the XML does not
    /// describe a well-formed dictionary.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Loads a dictionary from an XML string.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the XML does not describe a well-formed
    /// dictionary.
    pub fn parse_str(xml: &str) -> Result<Self, LoadError> {
        Self::from_reader(xml.as_bytes())
    }

    /// Loads a dictionary from any reader yielding dictionary XML.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the XML does not describe a well-formed
    /// dictionary.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let root = Element::parse(reader)?;
        build(&root)
    }
}

fn build(root: &Element) -> Result<Dictionary, LoadError> {
    if root.name != "fix" {
        return Err(LoadError::MissingElement {
            element: "fix".to_string(),
        });
    }

    let mut dict = Dictionary::new(Version::Fix44);

    // Catalogue first: every later section resolves names against it.
    let fields = child(root, "fields")?;
    for el in elements(fields) {
        if el.name != "field" {
            return Err(LoadError::UnexpectedElement {
                element: el.name.clone(),
            });
        }
        dict.add_field(parse_field_def(el)?);
    }

    // Components next, so header/trailer membership flattening and the
    // reference checks below see the full table.
    if let Some(components) = root.get_child("components") {
        for el in elements(components) {
            if el.name != "component" {
                return Err(LoadError::UnexpectedElement {
                    element: el.name.clone(),
                });
            }
            let name = attr(el, "name")?.to_string();
            let items = parse_items(el, &dict.fields_by_name)?;
            dict.add_component(ComponentDef { name, items });
        }
    }
    check_component_graph(&dict.components)?;

    let header = parse_items(child(root, "header")?, &dict.fields_by_name)?;
    check_refs_resolve(&header, &dict.components)?;
    dict.set_header(header);

    let trailer = parse_items(child(root, "trailer")?, &dict.fields_by_name)?;
    check_refs_resolve(&trailer, &dict.components)?;
    dict.set_trailer(trailer);

    let messages = child(root, "messages")?;
    for el in elements(messages) {
        if el.name != "message" {
            return Err(LoadError::UnexpectedElement {
                element: el.name.clone(),
            });
        }
        let msg_type = attr(el, "msgtype")?.to_string();
        let name = attr(el, "name")?.to_string();
        let category = el
            .attributes
            .get("msgcat")
            .map(|s| MessageCategory::from_name(s))
            .unwrap_or_default();
        let items = parse_items(el, &dict.fields_by_name)?;
        check_refs_resolve(&items, &dict.components)?;
        dict.add_message(MessageDef {
            msg_type,
            name,
            category,
            items,
        });
    }

    Ok(dict)
}

fn parse_field_def(el: &Element) -> Result<FieldDef, LoadError> {
    let number = attr(el, "number")?;
    let tag: u32 = number
        .parse()
        .map_err(|_| LoadError::InvalidAttribute {
            element: "field".to_string(),
            attribute: "number".to_string(),
            value: number.to_string(),
        })?;
    let name = attr(el, "name")?;
    let field_type = FieldType::from_name(attr(el, "type")?);

    let mut def = FieldDef::new(tag, name, field_type);
    let mut values = HashMap::new();
    for value in elements(el).filter(|e| e.name == "value") {
        let enum_value = attr(value, "enum")?.to_string();
        let description = attr(value, "description")?.to_string();
        values.insert(enum_value, description);
    }
    if !values.is_empty() {
        def = def.with_values(values);
    }
    Ok(def)
}

/// Parses the ordered structural items of a header, trailer, message,
/// component, or group element.
fn parse_items(
    el: &Element,
    fields_by_name: &HashMap<String, u32>,
) -> Result<Vec<ItemDef>, LoadError> {
    let mut items = Vec::new();
    for item in elements(el) {
        match item.name.as_str() {
            "field" => {
                let name = attr(item, "name")?;
                let tag = *fields_by_name
                    .get(name)
                    .ok_or_else(|| LoadError::UnknownField {
                        name: name.to_string(),
                    })?;
                items.push(ItemDef::Field(FieldRef {
                    tag,
                    name: name.to_string(),
                    required: required_flag(item),
                }));
            }
            "group" => {
                let name = attr(item, "name")?;
                // The group's count field must itself be in the catalogue.
                if !fields_by_name.contains_key(name) {
                    return Err(LoadError::UnknownField {
                        name: name.to_string(),
                    });
                }
                items.push(ItemDef::Group(GroupDef {
                    name: name.to_string(),
                    required: required_flag(item),
                    items: parse_items(item, fields_by_name)?,
                }));
            }
            "component" => {
                items.push(ItemDef::Component(ComponentRef {
                    name: attr(item, "name")?.to_string(),
                    required: required_flag(item),
                }));
            }
            other => {
                return Err(LoadError::UnexpectedElement {
                    element: other.to_string(),
                });
            }
        }
    }
    Ok(items)
}

/// Verifies that every component reference reachable from `items` resolves.
fn check_refs_resolve(
    items: &[ItemDef],
    components: &HashMap<String, ComponentDef>,
) -> Result<(), LoadError> {
    for item in items {
        match item {
            ItemDef::Field(_) => {}
            ItemDef::Group(g) => check_refs_resolve(&g.items, components)?,
            ItemDef::Component(c) => {
                if !components.contains_key(&c.name) {
                    return Err(LoadError::UnknownComponent {
                        name: c.name.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Visiting,
    Done,
}

/// Rejects unresolved references and cycles in the component graph.
fn check_component_graph(components: &HashMap<String, ComponentDef>) -> Result<(), LoadError> {
    let mut states: HashMap<&str, VisitState> = HashMap::new();
    for name in components.keys() {
        visit_component(name, components, &mut states)?;
    }
    Ok(())
}

fn visit_component<'a>(
    name: &'a str,
    components: &'a HashMap<String, ComponentDef>,
    states: &mut HashMap<&'a str, VisitState>,
) -> Result<(), LoadError> {
    match states.get(name) {
        Some(VisitState::Done) => return Ok(()),
        Some(VisitState::Visiting) => {
            return Err(LoadError::ComponentCycle {
                name: name.to_string(),
            });
        }
        None => {}
    }
    let def = components
        .get(name)
        .ok_or_else(|| LoadError::UnknownComponent {
            name: name.to_string(),
        })?;
    states.insert(&def.name, VisitState::Visiting);
    visit_items(&def.items, components, states)?;
    states.insert(&def.name, VisitState::Done);
    Ok(())
}

fn visit_items<'a>(
    items: &'a [ItemDef],
    components: &'a HashMap<String, ComponentDef>,
    states: &mut HashMap<&'a str, VisitState>,
) -> Result<(), LoadError> {
    for item in items {
        match item {
            ItemDef::Field(_) => {}
            ItemDef::Group(g) => visit_items(&g.items, components, states)?,
            ItemDef::Component(c) => visit_component(&c.name, components, states)?,
        }
    }
    Ok(())
}

fn attr<'a>(el: &'a Element, name: &str) -> Result<&'a str, LoadError> {
    el.attributes
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| LoadError::MissingAttribute {
            element: el.name.clone(),
            attribute: name.to_string(),
        })
}

/// `required="Y"` means required; anything else, including an absent
/// attribute, means optional.
fn required_flag(el: &Element) -> bool {
    el.attributes.get("required").map(String::as_str) == Some("Y")
}

fn child<'a>(el: &'a Element, name: &str) -> Result<&'a Element, LoadError> {
    el.get_child(name).ok_or_else(|| LoadError::MissingElement {
        element: name.to_string(),
    })
}

fn elements(el: &Element) -> impl Iterator<Item = &Element> {
    el.children.iter().filter_map(XMLNode::as_element)
}
