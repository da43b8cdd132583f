//! Application state models

pub mod desktop;
