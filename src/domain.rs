//! Domain utilities
//!
//! Pure helpers shared by the presentation layer.

pub mod classes;
