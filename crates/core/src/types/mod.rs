//! Core types for Minicart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::round_to_cents;
pub use status::OrderStatus;
