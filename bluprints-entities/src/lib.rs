#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # bluprints-entities
//!
//! Reusable, agnostic domain entities for bluprints.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod description;
pub mod document;
pub mod tag;
