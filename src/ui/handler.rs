use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    event::Event,
    input::{Command, InputHandler},
    nav::SIDEBAR,
    ui::{
        app::{App, InputMode},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for one terminal event, then drains everything the library and
    /// the search task have queued since the last frame.
    pub async fn handle_events(app: &mut App, tui: &Tui) {
        if let Some(TerminalEvent::Key(key)) = tui.next_event().await {
            match app.mode {
                InputMode::Browse => Self::handle_browse_key(app, key),
                InputMode::Search => Self::handle_search_key(app, key),
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.scene.handle(evt);
        }
    }

    fn handle_browse_key(app: &mut App, key: KeyEvent) {
        let Some(command) = InputHandler::handle_key(key) else {
            return;
        };
        debug!(?command, "key_command");

        match command {
            Command::Quit => app.should_quit = true,
            Command::Navigate(direction) => {
                app.scene.handle(Event::Direction(direction));
            }
            Command::Back => {
                app.scene.handle(Event::Back);
            }
            Command::StartSearch => app.mode = InputMode::Search,
            Command::Sidebar(index) => {
                if let Some(route) = SIDEBAR.get(index) {
                    app.scene.handle(Event::SelectSidebar(route.clone()));
                }
            }
        }
    }

    fn handle_search_key(app: &mut App, key: KeyEvent) {
        let mut query = app.scene.nav().search_query().to_string();

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                app.should_quit = true;
                return;
            }
            (KeyCode::Esc | KeyCode::Enter, _) => {
                app.mode = InputMode::Browse;
                return;
            }
            (KeyCode::Backspace, _) => {
                if query.pop().is_none() {
                    return;
                }
            }
            (KeyCode::Char(c), _) => query.push(c),
            _ => return,
        }

        app.scene.handle(Event::QueryChanged(query));
    }
}
