//! # jot-core
//!
//! Core types, traits, and abstractions for the jot notes API.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other jot crates depend on.

pub mod error;
pub mod models;
pub mod traits;
pub mod uuid_utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use uuid_utils::{extract_timestamp, is_v7, new_v7};
