//! Infrastructure layer
//!
//! Terminal handling and configuration loading.

pub mod config;
pub mod tui;
