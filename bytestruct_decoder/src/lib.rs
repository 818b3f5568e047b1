//! Decodes raw byte buffers into [`Record`](bytestruct_types::types::Record)s,
//! per a [`Schema`](bytestruct_types::types::Schema).
//!
//! The production path is [`Decoder`], which compiles its schema once.
//! [`adhoc::Interpreter`] decodes the same way without compiling, and serves as a cross-check.

pub mod adhoc;
pub mod config;
mod engine;
pub mod error;
pub mod plan;
pub mod readers;

pub use engine::Decoder;
