//! TUI Boulders (workspace facade crate).
//!
//! This package keeps the public `tui_boulders::{core,input,term,types}` API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_boulders_core as core;
pub use tui_boulders_input as input;
pub use tui_boulders_term as term;
pub use tui_boulders_types as types;
