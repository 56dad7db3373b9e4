//! Utility modules for catalog search
//!
//! - Normalization: Query trimming, case folding and containment checks

pub mod normalization;

pub use normalization::{normalize_query, contains_normalized, any_contains_normalized};
