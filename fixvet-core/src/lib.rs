/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixVet Core
//!
//! Core types for the FixVet FIX 4.4 message validator.
//!
//! This crate provides the building blocks shared across all FixVet crates:
//! - **Error types**: the closed [`ValidationError`] set and the ordered [`ErrorBag`]
//! - **Field types**: [`ParsedField`] and tag parsing helpers
//! - **Message types**: [`ParsedMessage`], the categorised view of a wire message
//!
//! ## Ownership
//!
//! A [`ParsedMessage`] owns string copies of every field value and an owned
//! copy of the raw wire bytes, so an outcome outlives the caller's buffer.

pub mod error;
pub mod field;
pub mod message;

pub use error::{ErrorBag, Section, ValidationError};
pub use field::{parse_tag, tags, ParsedField};
pub use message::ParsedMessage;
