/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema definitions for the FIX data dictionary.
//!
//! This module defines the structures that represent a FIX specification:
//! - [`FieldDef`]: field catalogue entries with tag, name, and type
//! - [`ItemDef`]: the structural item — a field reference, a repeating
//!   group, or a component reference
//! - [`MessageDef`] / [`ComponentDef`]: per-message-type and reusable bodies
//! - [`Dictionary`]: the complete dictionary for one FIX version
//!
//! Messages embed groups, groups embed components, components embed groups
//! and components; [`ItemDef`] is the recursion point. Component references
//! resolve by name in the dictionary's flat component table, and cycles are
//! rejected at load time.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// FIX protocol version.
///
/// Only FIX 4.4 is shipped; the enum is the extension point for others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Version {
    /// FIX 4.4
    #[default]
    Fix44,
}

impl Version {
    /// Returns the BeginString value for this version.
    #[must_use]
    pub const fn begin_string(&self) -> &'static str {
        match self {
            Self::Fix44 => "FIX.4.4",
        }
    }

    /// Returns the conventional dictionary file name for this version.
    #[must_use]
    pub const fn dictionary_file_name(&self) -> &'static str {
        match self {
            Self::Fix44 => "FIX44.xml",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.begin_string())
    }
}

/// FIX field data type.
///
/// Stored as catalogue data only; the validator never interprets values
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Integer value.
    Int,
    /// Length field (for data fields).
    Length,
    /// Sequence number.
    SeqNum,
    /// Number of entries in a repeating group.
    NumInGroup,
    /// Tag number reference.
    TagNum,
    /// Day of month (1-31).
    DayOfMonth,
    /// Floating point number.
    Float,
    /// Quantity.
    Qty,
    /// Price.
    Price,
    /// Price offset.
    PriceOffset,
    /// Amount (price * quantity).
    Amt,
    /// Percentage.
    Percentage,
    /// Single character.
    Char,
    /// Boolean (Y/N).
    Boolean,
    /// String.
    String,
    /// Multiple character value (space-separated).
    MultipleCharValue,
    /// Multiple string value (space-separated).
    MultipleStringValue,
    /// Country code (ISO 3166).
    Country,
    /// Currency code (ISO 4217).
    Currency,
    /// Exchange code (ISO 10383 MIC).
    Exchange,
    /// Month-year.
    MonthYear,
    /// UTC timestamp.
    UtcTimestamp,
    /// UTC time only.
    UtcTimeOnly,
    /// UTC date only.
    UtcDateOnly,
    /// Local market date.
    LocalMktDate,
    /// Local market time.
    LocalMktTime,
    /// Timezone time.
    TzTimeOnly,
    /// Timezone timestamp.
    TzTimestamp,
    /// Raw data (binary).
    Data,
    /// XML data.
    XmlData,
    /// Language code (ISO 639-1).
    Language,
    /// Pattern (regex).
    Pattern,
    /// Tenor (e.g. "1M", "3M").
    Tenor,
}

impl FieldType {
    /// Maps a dictionary type name to a `FieldType`.
    ///
    /// Unknown names fall back to [`FieldType::String`], so loading never
    /// fails on a type the catalogue spells differently.
    #[must_use]
    pub fn from_name(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "INT" => Self::Int,
            "LENGTH" => Self::Length,
            "SEQNUM" => Self::SeqNum,
            "NUMINGROUP" => Self::NumInGroup,
            "TAGNUM" => Self::TagNum,
            "DAYOFMONTH" => Self::DayOfMonth,
            "FLOAT" => Self::Float,
            "QTY" | "QUANTITY" => Self::Qty,
            "PRICE" => Self::Price,
            "PRICEOFFSET" => Self::PriceOffset,
            "AMT" | "AMOUNT" => Self::Amt,
            "PERCENTAGE" => Self::Percentage,
            "CHAR" => Self::Char,
            "BOOLEAN" => Self::Boolean,
            "STRING" => Self::String,
            "MULTIPLECHARVALUE" => Self::MultipleCharValue,
            "MULTIPLESTRINGVALUE" => Self::MultipleStringValue,
            "COUNTRY" => Self::Country,
            "CURRENCY" => Self::Currency,
            "EXCHANGE" => Self::Exchange,
            "MONTHYEAR" => Self::MonthYear,
            "UTCTIMESTAMP" => Self::UtcTimestamp,
            "UTCTIMEONLY" => Self::UtcTimeOnly,
            "UTCDATEONLY" => Self::UtcDateOnly,
            "LOCALMKTDATE" => Self::LocalMktDate,
            "LOCALMKTTIME" => Self::LocalMktTime,
            "TZTIMEONLY" => Self::TzTimeOnly,
            "TZTIMESTAMP" => Self::TzTimestamp,
            "DATA" => Self::Data,
            "XMLDATA" => Self::XmlData,
            "LANGUAGE" => Self::Language,
            "PATTERN" => Self::Pattern,
            "TENOR" => Self::Tenor,
            _ => Self::String,
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Definition of a FIX field in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Legal enumerated values, mapping value to description.
    pub values: Option<HashMap<String, String>>,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type,
            values: None,
        }
    }

    /// Adds legal values for an enumerated field.
    #[must_use]
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.values = Some(values);
        self
    }
}

/// Reference to a catalogue field from a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Whether the field is required.
    pub required: bool,
}

/// Definition of a repeating group.
///
/// `name` is the name of the group's count field (NumInGroup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDef {
    /// Name of the count field.
    pub name: String,
    /// Whether the group is required.
    pub required: bool,
    /// Ordered structural items within each group entry.
    pub items: Vec<ItemDef>,
}

/// Reference to a reusable component from a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Component name, resolved in the dictionary's component table.
    pub name: String,
    /// Whether the component is required.
    pub required: bool,
}

/// Definition of a reusable component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDef {
    /// Component name.
    pub name: String,
    /// Ordered structural items.
    pub items: Vec<ItemDef>,
}

/// A structural item within a header, trailer, message, group, or component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemDef {
    /// A field reference.
    Field(FieldRef),
    /// A nested repeating group.
    Group(GroupDef),
    /// A reference to a reusable component.
    Component(ComponentRef),
}

impl ItemDef {
    /// Returns the item's name (field name, count-field name, or component name).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Group(g) => &g.name,
            Self::Component(c) => &c.name,
        }
    }

    /// Returns whether the item is required.
    #[must_use]
    pub const fn required(&self) -> bool {
        match self {
            Self::Field(f) => f.required,
            Self::Group(g) => g.required,
            Self::Component(c) => c.required,
        }
    }
}

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageCategory {
    /// Administrative message (session level).
    Admin,
    /// Application message.
    #[default]
    App,
}

impl MessageCategory {
    /// Maps a `msgcat` attribute value to a category. Anything other than
    /// `"admin"` is an application message.
    #[must_use]
    pub fn from_name(s: &str) -> Self {
        if s.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::App
        }
    }
}

/// Definition of a FIX message type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message type value (tag 35), e.g. `"D"`.
    pub msg_type: String,
    /// Message name, e.g. `"NewOrderSingle"`.
    pub name: String,
    /// Message category.
    pub category: MessageCategory,
    /// Ordered structural items forming the message body.
    pub items: Vec<ItemDef>,
}

/// Complete FIX dictionary for one version.
///
/// Header and trailer membership is indexed by name; the index is rebuilt
/// whenever [`Dictionary::set_header`] or [`Dictionary::set_trailer`] runs
/// and flattens nested groups and component references, so a field declared
/// inside a header group still counts as a header field. Components must
/// therefore be registered before the header and trailer are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    /// FIX version.
    pub version: Version,
    /// Field definitions indexed by tag.
    pub fields: HashMap<u32, FieldDef>,
    /// Field tags indexed by name.
    pub fields_by_name: HashMap<String, u32>,
    /// Message definitions indexed by msg_type.
    pub messages: HashMap<String, MessageDef>,
    /// Component definitions indexed by name.
    pub components: HashMap<String, ComponentDef>,
    header: Vec<ItemDef>,
    trailer: Vec<ItemDef>,
    header_names: HashSet<String>,
    trailer_names: HashSet<String>,
}

impl Dictionary {
    /// Creates a new empty dictionary for the specified version.
    #[must_use]
    pub fn new(version: Version) -> Self {
        Self {
            version,
            fields: HashMap::new(),
            fields_by_name: HashMap::new(),
            messages: HashMap::new(),
            components: HashMap::new(),
            header: Vec::new(),
            trailer: Vec::new(),
            header_names: HashSet::new(),
            trailer_names: HashSet::new(),
        }
    }

    /// Adds a field definition to the catalogue.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields_by_name.insert(field.name.clone(), field.tag);
        self.fields.insert(field.tag, field);
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.insert(message.msg_type.clone(), message);
    }

    /// Adds a component definition.
    pub fn add_component(&mut self, component: ComponentDef) {
        self.components.insert(component.name.clone(), component);
    }

    /// Sets the header structure and rebuilds the header membership index.
    pub fn set_header(&mut self, items: Vec<ItemDef>) {
        self.header_names = self.flatten_names(&items);
        self.header = items;
    }

    /// Sets the trailer structure and rebuilds the trailer membership index.
    pub fn set_trailer(&mut self, items: Vec<ItemDef>) {
        self.trailer_names = self.flatten_names(&items);
        self.trailer = items;
    }

    /// Returns the ordered header items.
    #[must_use]
    pub fn header_items(&self) -> &[ItemDef] {
        &self.header
    }

    /// Returns the ordered trailer items.
    #[must_use]
    pub fn trailer_items(&self) -> &[ItemDef] {
        &self.trailer
    }

    /// Returns true if the dictionary places a field with this name in the
    /// header (directly or inside a header group or component).
    #[must_use]
    pub fn header_contains(&self, name: &str) -> bool {
        self.header_names.contains(name)
    }

    /// Returns true if the dictionary places a field with this name in the
    /// trailer.
    #[must_use]
    pub fn trailer_contains(&self, name: &str) -> bool {
        self.trailer_names.contains(name)
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields_by_name
            .get(name)
            .and_then(|tag| self.fields.get(tag))
    }

    /// Gets a message definition by type.
    #[must_use]
    pub fn message(&self, msg_type: &str) -> Option<&MessageDef> {
        self.messages.get(msg_type)
    }

    /// Gets a component definition by name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.get(name)
    }

    /// Collects every field name reachable from `items`, recursing through
    /// groups and resolving component references. A group contributes its
    /// count field's name as well as its children.
    fn flatten_names(&self, items: &[ItemDef]) -> HashSet<String> {
        let mut out = HashSet::new();
        let mut visited = HashSet::new();
        self.collect_names(items, &mut visited, &mut out);
        out
    }

    fn collect_names(
        &self,
        items: &[ItemDef],
        visited: &mut HashSet<String>,
        out: &mut HashSet<String>,
    ) {
        for item in items {
            match item {
                ItemDef::Field(f) => {
                    out.insert(f.name.clone());
                }
                ItemDef::Group(g) => {
                    out.insert(g.name.clone());
                    self.collect_names(&g.items, visited, out);
                }
                ItemDef::Component(c) => {
                    if visited.insert(c.name.clone()) {
                        if let Some(def) = self.components.get(&c.name) {
                            self.collect_names(&def.items, visited, out);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_begin_string() {
        assert_eq!(Version::Fix44.begin_string(), "FIX.4.4");
        assert_eq!(Version::Fix44.dictionary_file_name(), "FIX44.xml");
    }

    #[test]
    fn test_field_type_from_name() {
        assert_eq!(FieldType::from_name("INT"), FieldType::Int);
        assert_eq!(FieldType::from_name("NUMINGROUP"), FieldType::NumInGroup);
        assert_eq!(FieldType::from_name("UTCTIMESTAMP"), FieldType::UtcTimestamp);
        assert_eq!(FieldType::from_name("nonsense"), FieldType::String);
    }

    #[test]
    fn test_message_category_from_name() {
        assert_eq!(MessageCategory::from_name("admin"), MessageCategory::Admin);
        assert_eq!(MessageCategory::from_name("app"), MessageCategory::App);
        assert_eq!(MessageCategory::from_name(""), MessageCategory::App);
    }

    #[test]
    fn test_dictionary_field_operations() {
        let mut dict = Dictionary::new(Version::Fix44);
        dict.add_field(FieldDef::new(35, "MsgType", FieldType::String));

        assert!(dict.field(35).is_some());
        assert!(dict.field_by_name("MsgType").is_some());
        assert!(dict.field(999).is_none());
        assert!(dict.field_by_name("Symbol").is_none());
    }

    #[test]
    fn test_header_membership_is_flat_over_groups() {
        let mut dict = Dictionary::new(Version::Fix44);
        dict.set_header(vec![
            ItemDef::Field(FieldRef {
                tag: 8,
                name: "BeginString".to_string(),
                required: true,
            }),
            ItemDef::Group(GroupDef {
                name: "NoHops".to_string(),
                required: false,
                items: vec![ItemDef::Field(FieldRef {
                    tag: 628,
                    name: "HopCompID".to_string(),
                    required: false,
                })],
            }),
        ]);

        assert!(dict.header_contains("BeginString"));
        assert!(dict.header_contains("NoHops"));
        assert!(dict.header_contains("HopCompID"));
        assert!(!dict.header_contains("Symbol"));
    }

    #[test]
    fn test_membership_resolves_components() {
        let mut dict = Dictionary::new(Version::Fix44);
        dict.add_component(ComponentDef {
            name: "Stamp".to_string(),
            items: vec![ItemDef::Field(FieldRef {
                tag: 93,
                name: "SignatureLength".to_string(),
                required: false,
            })],
        });
        dict.set_trailer(vec![
            ItemDef::Component(ComponentRef {
                name: "Stamp".to_string(),
                required: false,
            }),
            ItemDef::Field(FieldRef {
                tag: 10,
                name: "CheckSum".to_string(),
                required: true,
            }),
        ]);

        assert!(dict.trailer_contains("CheckSum"));
        assert!(dict.trailer_contains("SignatureLength"));
        assert!(!dict.trailer_contains("Stamp"));
    }

    #[test]
    fn test_item_def_accessors() {
        let item = ItemDef::Group(GroupDef {
            name: "NoRelatedSym".to_string(),
            required: true,
            items: Vec::new(),
        });
        assert_eq!(item.name(), "NoRelatedSym");
        assert!(item.required());
    }
}
