//! gramdrill-core — Exercise engine, question banks, and grading.
//!
//! This crate defines the fundamental data model, the grading rules for the
//! three exercise kinds, and the report types that the rest of the gramdrill
//! system builds on.

pub mod banks;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
