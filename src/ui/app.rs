use std::{sync::Arc, time::Duration};

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{
    config::Config,
    event::Event,
    library::{ConnectorStatus, MemoryLibrary, fixture},
    scene::Scene,
};

use super::{handler::EventHandler, layout::AppLayout, tui::Tui};

/// How long the demo library pretends to take before it is connected.
const CONNECT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub library: Arc<MemoryLibrary>,
    pub scene: Scene,
    pub mode: InputMode,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let library = Arc::new(MemoryLibrary::new(
            fixture::snapshot(),
            ConnectorStatus::None,
        ));
        library.subscribe(event_tx.clone());
        let scene = Scene::new(library.clone(), event_tx, config);

        Self {
            event_rx,
            library,
            scene,
            mode: InputMode::Browse,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::enter()?;

        self.scene.start();
        self.connect();

        while !self.should_quit {
            tui.draw(|f| self.ui(f))?;
            EventHandler::handle_events(self, &tui).await;
        }

        Ok(())
    }

    fn connect(&self) {
        let library = self.library.clone();
        tokio::spawn(async move {
            tokio::time::sleep(CONNECT_DELAY).await;
            info!("demo library connected");
            library.set_status(ConnectorStatus::Loaded);
        });
    }

    fn ui(&self, frame: &mut Frame) {
        let area = frame.area();
        AppLayout::new(self).render(frame, area);
    }
}
