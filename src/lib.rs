//! # xptui - Retro window chrome for the terminal
//!
//! Renders desktop-style "windows" (title bar, decorative minimize /
//! maximize / close markers, body region) inside a terminal, styled through
//! a class-based stylesheet the way retro CSS kits do it. Ships a small demo
//! desktop application around the widget.
//!
//! ## Example Usage
//!
//! ```rust
//! use ratatui::prelude::*;
//! use xptui::presentation::config::Styles;
//! use xptui::presentation::widgets::window::{ViewContext, WindowFrameWidget};
//!
//! let styles = Styles::default();
//! let window = WindowFrameWidget::new("Hello", ViewContext { styles: &styles })
//!     .title("Inbox")
//!     .class_name("wide");
//!
//! assert_eq!(window.outer_classes(), "window wide");
//! assert_eq!(window.body_classes(), "window-body");
//!
//! let area = Rect::new(0, 0, 40, 10);
//! let mut buf = Buffer::empty(area);
//! window.render(area, &mut buf);
//! ```
//!
//! ## Modules
//!
//! - [`presentation`] - Widgets, components and UI configuration
//! - [`model`] - Desktop state
//! - [`infrastructure`] - Terminal handling and config loading
//! - [`app`] - The demo application loop

#![deny(warnings)]
#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod model;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use action::Action;
pub use app::App;
pub use model::desktop::Desktop;
pub use presentation::widgets::window::{WindowControl, WindowFrameWidget};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
