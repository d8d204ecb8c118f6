//! # pausa_core
//!
//! Core domain logic for Pausa: nearby-place lookup against OpenStreetMap,
//! walking loops, soundtrack suggestions and coaching messages.

pub mod coach;
pub mod config;
pub mod models;
pub mod mood;
pub mod places;
pub mod route;
pub mod soundtrack;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
