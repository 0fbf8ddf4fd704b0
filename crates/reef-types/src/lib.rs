//! Foundation types for reef.
//!
//! Shared by every reef crate: the error taxonomy surfaced in the
//! transcript, the `$1` message templates used to render it, and the
//! TOML-backed shell configuration.

pub mod config;
pub mod error;
pub mod messages;
