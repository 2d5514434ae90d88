//! Blockfall (workspace facade crate).
//!
//! Re-exports the table crates under `blockfall::{core, types}` and hosts the
//! inspection front end used by the `blockfall` binary.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod cli;
pub mod preview;
