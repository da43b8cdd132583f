//! Desktop model
//!
//! State for the demo desktop: an ordered list of window definitions and a
//! focus index. Messages are named in past tense and applied through
//! `update`. The window chrome itself stays decorative; focus and the
//! controls toggle are application behavior layered on top of it.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Focus moved to the next window (wraps around)
    NextWindowFocused,
    /// Focus moved to the previous window (wraps around)
    PreviousWindowFocused,
    /// The decorative control markers of the focused window were toggled
    ControlsToggled,
}

/// A single window definition, as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesktopWindow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub body_class: Option<String>,
    #[serde(default = "default_controls")]
    pub controls: bool,
}

fn default_controls() -> bool {
    true
}

impl Default for DesktopWindow {
    fn default() -> Self {
        Self {
            title: None,
            body: String::new(),
            class: None,
            body_class: None,
            controls: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Desktop {
    windows: Vec<DesktopWindow>,
    focused: usize,
}

impl Desktop {
    pub fn new(windows: Vec<DesktopWindow>) -> Self {
        Self {
            windows,
            focused: 0,
        }
    }

    pub fn windows(&self) -> &[DesktopWindow] {
        &self.windows
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_window(&self) -> Option<&DesktopWindow> {
        self.windows.get(self.focused)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NextWindowFocused => {
                if !self.windows.is_empty() {
                    self.focused = (self.focused + 1) % self.windows.len();
                }
            }
            Message::PreviousWindowFocused => {
                if !self.windows.is_empty() {
                    self.focused = (self.focused + self.windows.len() - 1) % self.windows.len();
                }
            }
            Message::ControlsToggled => {
                if let Some(window) = self.windows.get_mut(self.focused) {
                    window.controls = !window.controls;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_windows() -> Vec<DesktopWindow> {
        vec![
            DesktopWindow {
                title: Some("Welcome".to_string()),
                body: "Hello".to_string(),
                ..DesktopWindow::default()
            },
            DesktopWindow {
                title: Some("Inbox".to_string()),
                body: "Hi".to_string(),
                ..DesktopWindow::default()
            },
        ]
    }

    #[test]
    fn test_default_window_has_controls() {
        let window = DesktopWindow::default();
        assert!(window.controls);
        assert_eq!(window.title, None);
    }

    #[test]
    fn test_deserialize_window_defaults() {
        let window: DesktopWindow =
            serde_json::from_str(r#"{"title": "Inbox", "body": "Hi"}"#).expect("valid window");
        assert_eq!(window.title, Some("Inbox".to_string()));
        assert_eq!(window.body, "Hi");
        assert_eq!(window.class, None);
        assert!(window.controls);
    }

    #[test]
    fn test_deserialize_window_controls_disabled() {
        let window: DesktopWindow =
            serde_json::from_str(r#"{"body": "Hi", "controls": false}"#).expect("valid window");
        assert!(!window.controls);
    }

    #[test]
    fn test_focus_wraps_forward() {
        let mut desktop = Desktop::new(two_windows());
        assert_eq!(desktop.focused_index(), 0);

        desktop.update(Message::NextWindowFocused);
        assert_eq!(desktop.focused_index(), 1);

        desktop.update(Message::NextWindowFocused);
        assert_eq!(desktop.focused_index(), 0);
    }

    #[test]
    fn test_focus_wraps_backward() {
        let mut desktop = Desktop::new(two_windows());
        desktop.update(Message::PreviousWindowFocused);
        assert_eq!(desktop.focused_index(), 1);
    }

    #[test]
    fn test_focus_on_empty_desktop() {
        let mut desktop = Desktop::default();
        desktop.update(Message::NextWindowFocused);
        desktop.update(Message::PreviousWindowFocused);
        assert_eq!(desktop.focused_index(), 0);
        assert!(desktop.focused_window().is_none());
    }

    #[test]
    fn test_controls_toggled_on_focused_window() {
        let mut desktop = Desktop::new(two_windows());
        desktop.update(Message::NextWindowFocused);
        desktop.update(Message::ControlsToggled);

        assert!(desktop.windows()[0].controls);
        assert!(!desktop.windows()[1].controls);

        desktop.update(Message::ControlsToggled);
        assert!(desktop.windows()[1].controls);
    }

    #[test]
    fn test_controls_toggled_on_empty_desktop() {
        let mut desktop = Desktop::default();
        desktop.update(Message::ControlsToggled);
        assert_eq!(desktop, Desktop::default());
    }
}
