/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixVet Dictionary
//!
//! FIX 4.4 data dictionary model and XML loader for the FixVet validator.
//!
//! This crate provides:
//! - **Schema definitions**: field catalogue, header/trailer membership,
//!   components, and per-message-type structure
//! - **Dictionary loading**: QuickFIX-style XML parsing with load-time
//!   reference and cycle checks
//!
//! The [`Dictionary`] is built once, is immutable afterwards, and may be
//! freely shared across threads.

pub mod loader;
pub mod schema;

pub use loader::LoadError;
pub use schema::{
    ComponentDef, ComponentRef, Dictionary, FieldDef, FieldRef, FieldType, GroupDef, ItemDef,
    MessageCategory, MessageDef, Version,
};
