//! Terminal input module (driver-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the
//! keyboard cursor that lets a plain terminal play the same touch gestures a
//! pointer would.

pub mod cursor;
pub mod map;

pub use tui_dots_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
