//! Core query engine.
//!
//! `engine` orchestrates the text stage, attribute filters, sorting
//! and pagination; `filter` and `text` hold the per-record predicates.

pub mod datetime;
pub mod engine;
pub mod filter;
pub mod text;
