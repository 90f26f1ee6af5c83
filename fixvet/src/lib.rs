/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixVet
//!
//! FIX 4.4 message validation against a declarative data dictionary.
//!
//! FixVet takes a single FIX message in tag-value wire form and checks it
//! against a dictionary defining legal tags, required fields,
//! message-type-specific structure (repeating groups and components),
//! header/trailer membership, body length, and checksum.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixvet::prelude::*;
//!
//! let dict = Dictionary::load("/usr/local/etc/fixparser/FIX44.xml")?;
//! let config = ValidatorConfig::new();
//!
//! let outcome = validate(&dict, raw_message, &config);
//! if !outcome.valid {
//!     for error in &outcome.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: error types, parsed fields and messages
//! - [`dictionary`]: schema model and XML dictionary loading
//! - [`tagvalue`]: tokenisation and checksum arithmetic
//! - [`validator`]: the staged validation pipeline
//!
//! ## Threading
//!
//! A [`dictionary::Dictionary`] is immutable once loaded and freely
//! shareable across threads; each `validate` call owns its outcome.

pub mod core {
    //! Error types, parsed fields and messages.
    pub use fixvet_core::*;
}

pub mod dictionary {
    //! Schema model and XML dictionary loading.
    pub use fixvet_dictionary::*;
}

pub mod tagvalue {
    //! Tokenisation and checksum arithmetic.
    pub use fixvet_tagvalue::*;
}

pub mod validator {
    //! The staged validation pipeline.
    pub use fixvet_validator::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixvet_core::{ErrorBag, ParsedField, ParsedMessage, Section, ValidationError};

    // Dictionary
    pub use fixvet_dictionary::{
        ComponentDef, Dictionary, FieldDef, FieldType, GroupDef, ItemDef, LoadError, MessageDef,
        Version,
    };

    // Tag-value
    pub use fixvet_tagvalue::{calculate_checksum, tokenize, SOH};

    // Validator
    pub use fixvet_validator::{load_dictionary, validate, ValidationOutcome, ValidatorConfig};
}
