//! Memory Match (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths
//! (`memory_match::{core,input,term,types}`) and hosts the runtime
//! configuration shared by the binary and the tests.

pub mod config;

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub use config::GameConfig;
