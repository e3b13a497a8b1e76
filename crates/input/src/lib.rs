//! Keyboard input mapped to game actions.
//!
//! # Invariants
//! - The game consumes actions, never raw key events.
//! - Keys are windowing-system agnostic; each frontend translates its own codes.

pub mod action;

pub use action::{Action, Bindings, Key};
