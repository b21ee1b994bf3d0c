//! Vista Core Types and Definitions
//!
//! This crate provides the foundational types of a Vista workspace:
//!
//! - **Identifiers**: string-interned identifiers ([`identifier::Id`])
//! - **Model**: elements and relationships of the architecture ([`model`] module)
//! - **Views**: typed view membership and the element classifier ([`view`] module)

pub mod identifier;
pub mod model;
pub mod view;
