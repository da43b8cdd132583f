//! UI components
//!
//! Components are stateless renderers that receive state as parameters.

pub mod desktop;

pub use desktop::DesktopComponent;
