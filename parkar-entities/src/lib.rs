#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # parkar-entities
//!
//! Reusable, agnostic domain entities for the Parkar demo page.
//!
//! The entities only contain generic functionality that does not reveal any presentation details.

pub mod canvas;
pub mod id;
pub mod sample;
pub mod spot;
pub mod zoom;
