use std::{io::Stdout, time::Duration};

use color_eyre::eyre::Result;
use crossterm::{
    cursor, execute,
    event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use flume::Receiver;
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::task::JoinHandle;
use tracing::error;

/// Redraw cadence while no key arrives; keeps the spinner moving.
const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Tick,
    Key(KeyEvent),
}

/// Alternate-screen terminal plus the task feeding it key presses and ticks.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: Receiver<TerminalEvent>,
    reader: JoinHandle<()>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
        terminal::enable_raw_mode()?;
        execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;

        let (tx, events) = flume::unbounded();
        let reader = tokio::spawn(async move {
            let mut keys = EventStream::new();
            let mut ticks = tokio::time::interval(TICK_RATE);
            loop {
                let event = tokio::select! {
                    _ = ticks.tick() => TerminalEvent::Tick,
                    Some(Ok(CrosstermEvent::Key(key))) = keys.next() => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        TerminalEvent::Key(key)
                    }
                };
                if tx.send_async(event).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            terminal,
            events,
            reader,
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    pub async fn next_event(&self) -> Option<TerminalEvent> {
        self.events.recv_async().await.ok()
    }

    pub fn restore() -> Result<()> {
        if terminal::is_raw_mode_enabled()? {
            execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.reader.abort();
        if let Err(e) = Self::restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}
