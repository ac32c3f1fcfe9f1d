//! Core types, traits, errors, config, events and tracing for costlens.
//!
//! Nothing in this crate inspects source text; the analysis crate builds on
//! these pieces.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
