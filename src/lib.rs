//! Signgraph - road-sign inventory to RDF converter
//!
//! This crate converts a relational inventory of physical road-sign
//! installations into an AWV/OSLO-conformant semantic graph through:
//! - Ordered, windowed streaming over the SQLite source
//! - Pure per-entity mappers with closed code→concept dispatches
//! - Enrichment from the sign code register
//! - Bounded-memory accumulation flushed to numbered Turtle units

pub mod config;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod model;
pub mod pipeline;
pub mod register;
pub mod source;
pub mod vocab;
