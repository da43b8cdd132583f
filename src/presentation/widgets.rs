//! Reusable UI widgets
//!
//! This module contains pure widgets that can be used
//! across different components.

pub mod window;
