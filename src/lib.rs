//! TUI Dots (workspace facade crate).
//!
//! This package keeps the `tui_dots::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under `crates/`.

pub use tui_dots_core as core;
pub use tui_dots_input as input;
pub use tui_dots_term as term;
pub use tui_dots_types as types;
