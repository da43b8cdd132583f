//! Retro window chrome widget
//!
//! Renders a desktop-style "window": an outer container, an optional title
//! bar with three decorative control markers, and a body region holding the
//! caller's content verbatim. Appearance is driven entirely by style classes
//! resolved through the configured stylesheet; the widget itself attaches no
//! behavior to anything it draws.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::domain::classes::class_list;
use crate::presentation::config::styles::Styles;

pub const WINDOW_CLASS: &str = "window";
pub const WINDOW_BODY_CLASS: &str = "window-body";
pub const TITLE_BAR_CLASS: &str = "title-bar";
pub const TITLE_BAR_TEXT_CLASS: &str = "title-bar-text";
pub const TITLE_BAR_CONTROLS_CLASS: &str = "title-bar-controls";

/// Decorative title-bar control marker.
///
/// Controls are purely visual: activating them is not possible and they carry
/// no event handling. Each one owns a fixed glyph and an accessible label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

impl WindowControl {
    /// All controls in their fixed rendering order.
    pub const ALL: [Self; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimize => "Minimize",
            Self::Maximize => "Maximize",
            Self::Close => "Close",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Minimize => "_",
            Self::Maximize => "□",
            Self::Close => "✕",
        }
    }
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub styles: &'a Styles,
}

#[derive(Clone)]
pub struct WindowFrameWidget<'a> {
    body: Text<'a>,
    title: Option<Line<'a>>,
    class_name: Option<String>,
    body_class_name: Option<String>,
    controls: bool,
    ctx: ViewContext<'a>,
}

impl<'a> WindowFrameWidget<'a> {
    pub fn new<T>(body: T, ctx: ViewContext<'a>) -> Self
    where
        T: Into<Text<'a>>,
    {
        Self {
            body: body.into(),
            title: None,
            class_name: None,
            body_class_name: None,
            controls: true,
            ctx,
        }
    }

    pub fn title<T>(mut self, title: T) -> Self
    where
        T: Into<Line<'a>>,
    {
        self.title = Some(title.into());
        self
    }

    pub fn class_name<S>(mut self, class_name: S) -> Self
    where
        S: Into<String>,
    {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn body_class_name<S>(mut self, body_class_name: S) -> Self
    where
        S: Into<String>,
    {
        self.body_class_name = Some(body_class_name.into());
        self
    }

    pub fn controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    /// Merged class string of the outer container: base class first, caller
    /// override second.
    pub fn outer_classes(&self) -> String {
        class_list([Some(WINDOW_CLASS), self.class_name.as_deref()])
    }

    /// Merged class string of the body region.
    pub fn body_classes(&self) -> String {
        class_list([Some(WINDOW_BODY_CLASS), self.body_class_name.as_deref()])
    }

    /// Whether a title bar will be rendered. An empty title counts as absent.
    pub fn has_title(&self) -> bool {
        self.title.as_ref().is_some_and(|title| title.width() > 0)
    }

    /// Controls to render in the title bar, in fixed order. Empty when
    /// controls are disabled.
    pub fn visible_controls(&self) -> &'static [WindowControl] {
        if self.controls {
            &WindowControl::ALL
        } else {
            &[]
        }
    }

    fn controls_line(&self) -> Line<'static> {
        let style = self.ctx.styles.resolve(TITLE_BAR_CONTROLS_CLASS);
        let mut spans = Vec::with_capacity(WindowControl::ALL.len() * 2);
        for control in self.visible_controls() {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(control.glyph(), style));
        }
        Line::from(spans)
    }

    fn render_title_bar(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.ctx.styles.resolve(TITLE_BAR_CLASS));

        let controls_line = self.controls_line();
        let layout = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Min(0),                            // Title text
                Constraint::Length(controls_line.width() as u16), // Control markers
            ],
        )
        .split(area);

        if let Some(title) = &self.title {
            let text_style = self.ctx.styles.resolve(TITLE_BAR_TEXT_CLASS);
            Paragraph::new(title.clone())
                .style(text_style)
                .render(layout[0], buf);
        }

        if self.controls {
            controls_line.render(layout[1], buf);
        }
    }
}

impl Widget for WindowFrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, self.ctx.styles.resolve(&self.outer_classes()));

        let title_height = if self.has_title() { 1 } else { 0 };
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(title_height), // Title bar (absent without a title)
                Constraint::Min(0),               // Body region
            ],
        )
        .split(area);

        if self.has_title() {
            self.render_title_bar(layout[0], buf);
        }

        let body_style = self.ctx.styles.resolve(&self.body_classes());
        Paragraph::new(self.body)
            .style(body_style)
            .render(layout[1], buf);
    }
}
