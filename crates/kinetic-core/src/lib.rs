//! # kinetic-core
//!
//! Core types and primitives for the Kinetic animation editor.
//! This crate contains foundational types shared across all Kinetic crates:
//! parsed CSS values, id generation, display helpers, configuration and
//! error types.

pub mod config;
pub mod css;
pub mod error;
pub mod ids;
pub mod text;

pub use config::*;

pub use css::{is_custom_ident, parse_css_value, StyleProperty, StyleValue, UnitValue};
pub use error::{KineticError, KineticResult};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use text::title_case;
