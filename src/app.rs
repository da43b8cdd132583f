//! Application loop
//!
//! Owns the configuration and the desktop state, maps terminal events to
//! actions through the configured keybindings, and renders the desktop
//! component on render events.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error};

use crate::{
    action::Action,
    infrastructure::config::Config,
    infrastructure::tui::{Event, TuiLike},
    model::desktop::{Desktop, Message},
    presentation::components::DesktopComponent,
};

pub struct App {
    pub config: Config,
    pub desktop: Desktop,
    pub components: DesktopComponent,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub last_tick_key_events: Vec<KeyEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let desktop = Desktop::new(config.windows.clone());
        Self {
            config,
            desktop,
            components: DesktopComponent::new(),
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
        }
    }

    pub async fn run<T>(&mut self, tui: Arc<Mutex<T>>) -> Result<()>
    where
        T: TuiLike + ?Sized,
    {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        tui.lock().await.enter()?;

        loop {
            let event = {
                let mut guard = tui.lock().await;
                guard.next().await
            };
            match event {
                Some(Event::Quit) => action_tx.send(Action::Quit)?,
                Some(Event::Tick) => action_tx.send(Action::Tick)?,
                Some(Event::Render) => action_tx.send(Action::Render)?,
                Some(Event::Resize(x, y)) => action_tx.send(Action::Resize(x, y))?,
                Some(Event::Key(key)) => self.handle_key(key, &action_tx)?,
                Some(_) => {}
                // Event source closed; there is nothing left to drive us.
                None => self.should_quit = true,
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(action, Action::Tick | Action::Render) {
                    debug!("{action:?}");
                }
                match action {
                    Action::Tick => {
                        self.last_tick_key_events.clear();
                    }
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::FocusNext => self.desktop.update(Message::NextWindowFocused),
                    Action::FocusPrev => self.desktop.update(Message::PreviousWindowFocused),
                    Action::ToggleControls => self.desktop.update(Message::ControlsToggled),
                    Action::Resize(w, h) => {
                        let mut guard = tui.lock().await;
                        guard.resize(Rect::new(0, 0, w, h))?;
                        self.draw(&mut *guard)?;
                    }
                    Action::Render | Action::Refresh => {
                        let mut guard = tui.lock().await;
                        self.draw(&mut *guard)?;
                    }
                    Action::Error(msg) => error!("{msg}"),
                }
            }

            if self.should_suspend {
                let mut guard = tui.lock().await;
                guard.exit()?;
                #[cfg(not(windows))]
                signal_hook::low_level::raise(signal_hook::consts::signal::SIGTSTP)?;
                action_tx.send(Action::Resume)?;
                guard.enter()?;
            } else if self.should_quit {
                tui.lock().await.exit()?;
                break;
            }
        }
        Ok(())
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if let Some(action) = self.config.keybindings.get(&vec![key]) {
            action_tx.send(action.clone())?;
        } else {
            // Multi-key sequences accumulate until a tick clears them.
            self.last_tick_key_events.push(key);
            if let Some(action) = self.config.keybindings.get(&self.last_tick_key_events) {
                action_tx.send(action.clone())?;
                self.last_tick_key_events.clear();
            }
        }
        Ok(())
    }

    fn draw<T>(&self, tui: &mut T) -> Result<()>
    where
        T: TuiLike + ?Sized,
    {
        let components = &self.components;
        let desktop = &self.desktop;
        let styles = &self.config.styles;
        tui.draw(&mut |frame| {
            components.view(desktop, styles, frame, frame.area());
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::infrastructure::tui::test::TestTui;
    use crate::model::desktop::DesktopWindow;

    fn test_config() -> Config {
        let keybindings = serde_json::from_str(
            r#"{"<q>": "Quit", "<tab>": "FocusNext", "<space>": "ToggleControls"}"#,
        )
        .expect("valid keybindings");
        let windows = vec![
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
        ];
        Config {
            keybindings,
            windows,
            ..Config::default()
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[tokio::test]
    async fn test_run_quits_on_bound_key() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [Event::Init, key(KeyCode::Char('q'))])
                .expect("test tui"),
        ));
        app.run(Arc::clone(&tui)).await.expect("run");
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_run_renders_desktop() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [Event::Render, key(KeyCode::Char('q'))])
                .expect("test tui"),
        ));
        app.run(Arc::clone(&tui)).await.expect("run");

        let guard = tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        let content = guard.buffer_content();
        assert!(content.contains("Welcome"));
        assert!(content.contains("Inbox"));
    }

    #[tokio::test]
    async fn test_focus_next_changes_focused_window() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [key(KeyCode::Tab), key(KeyCode::Char('q'))])
                .expect("test tui"),
        ));
        app.run(Arc::clone(&tui)).await.expect("run");
        assert_eq!(app.desktop.focused_index(), 1);
    }

    #[tokio::test]
    async fn test_toggle_controls_on_focused_window() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [key(KeyCode::Char(' ')), key(KeyCode::Char('q'))])
                .expect("test tui"),
        ));
        app.run(Arc::clone(&tui)).await.expect("run");
        assert!(!app.desktop.windows()[0].controls);
    }

    #[tokio::test]
    async fn test_run_stops_when_event_source_is_drained() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(TestTui::new(80, 24).expect("test tui")));
        app.run(Arc::clone(&tui)).await.expect("run");
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_unbound_key_is_ignored() {
        let mut app = App::new(test_config());
        let tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [key(KeyCode::Char('x')), key(KeyCode::Char('q'))])
                .expect("test tui"),
        ));
        app.run(Arc::clone(&tui)).await.expect("run");
        assert!(app.should_quit);
        assert_eq!(app.desktop.focused_index(), 0);
    }
}
