//! Desktop component
//!
//! Stateless renderer that cascades the configured windows across the frame
//! area through `WindowFrameWidget`. The focused window is rendered last so
//! it sits on top, and gets the `"active"` class appended to its caller
//! classes. The widget itself stays oblivious to focus.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear};

use crate::{
    domain::classes::class_list,
    model::desktop::{Desktop, DesktopWindow},
    presentation::config::Styles,
    presentation::widgets::window::{ViewContext, WindowFrameWidget},
};

pub const DESKTOP_CLASS: &str = "desktop";
pub const ACTIVE_CLASS: &str = "active";

/// Horizontal offset between cascaded windows.
const CASCADE_X: u16 = 4;
/// Vertical offset between cascaded windows.
const CASCADE_Y: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct DesktopComponent;

impl DesktopComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole desktop into the given area.
    pub fn view(&self, desktop: &Desktop, styles: &Styles, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(styles.resolve(DESKTOP_CLASS)), area);

        let focused = desktop.focused_index();
        for (index, window) in desktop.windows().iter().enumerate() {
            if index == focused {
                continue;
            }
            self.render_window(window, false, Self::cascade_area(area, index), styles, frame);
        }
        if let Some(window) = desktop.focused_window() {
            self.render_window(window, true, Self::cascade_area(area, focused), styles, frame);
        }
    }

    /// Area of the window at `index`, offset diagonally and clipped to the
    /// desktop.
    pub fn cascade_area(area: Rect, index: usize) -> Rect {
        let index = index as u16;
        let window = Rect::new(
            area.x.saturating_add(index.saturating_mul(CASCADE_X)),
            area.y.saturating_add(index.saturating_mul(CASCADE_Y)),
            area.width.saturating_sub(area.width / 3),
            area.height.saturating_sub(area.height / 3),
        );
        window.intersection(area)
    }

    fn render_window(
        &self,
        window: &DesktopWindow,
        focused: bool,
        area: Rect,
        styles: &Styles,
        frame: &mut Frame,
    ) {
        let ctx = ViewContext { styles };
        let mut widget =
            WindowFrameWidget::new(Text::raw(window.body.as_str()), ctx).controls(window.controls);
        if let Some(title) = &window.title {
            widget = widget.title(title.as_str());
        }
        let class = class_list([window.class.as_deref(), focused.then_some(ACTIVE_CLASS)]);
        if !class.is_empty() {
            widget = widget.class_name(class);
        }
        if let Some(body_class) = &window.body_class {
            widget = widget.body_class_name(body_class.as_str());
        }

        // Windows overlap; clear what is underneath first.
        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }
}
