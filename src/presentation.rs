//! Presentation layer
//!
//! Stateless rendering: widgets, components and UI configuration.

pub mod components;
pub mod config;
pub mod widgets;
