use std::{sync::Arc, time::Duration};

use flume::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    event::Event,
    library::{LibraryProvider, SearchResults},
};

/// Delay for incremental type-ahead search.
pub const TYPE_AHEAD_DELAY: Duration = Duration::from_millis(300);
/// Delay where the query also moves the visible selection.
pub const SELECTION_DELAY: Duration = Duration::from_secs(1);

/// Coalesces keystrokes into one catalogue query.
///
/// Every change aborts the pending delay and starts a new one, so only the
/// last keystroke's query is ever sent. Outcomes come back on the event
/// channel tagged with a generation; only the latest one passes
/// [`SearchDebouncer::is_current`].
pub struct SearchDebouncer {
    library: Arc<dyn LibraryProvider>,
    event_tx: Sender<Event>,
    pending_query: String,
    active_delay: Option<JoinHandle<()>>,
    generation: u64,
}

impl SearchDebouncer {
    pub fn new(library: Arc<dyn LibraryProvider>, event_tx: Sender<Event>) -> Self {
        Self {
            library,
            event_tx,
            pending_query: String::new(),
            active_delay: None,
            generation: 0,
        }
    }

    pub fn pending_query(&self) -> &str {
        &self.pending_query
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Schedules `text` to be dispatched once `delay` passes without another
    /// change.
    pub fn on_query_changed(&mut self, text: impl Into<String>, delay: Duration) {
        self.cancel();

        self.pending_query = text.into();
        self.generation += 1;

        let generation = self.generation;
        let query = self.pending_query.clone();
        let library = self.library.clone();
        let tx = self.event_tx.clone();

        debug!(query = query.as_str(), generation, ?delay, "search_debounce_scheduled");

        self.active_delay = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if query.is_empty() {
                info!(generation, "search_cleared");
                let _ = tx.send_async(Event::SearchCleared { generation }).await;
                return;
            }

            info!(query = query.as_str(), generation, "search_dispatch");
            let results = match library.search(&query).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("Search for '{}' failed: {}", query, e);
                    SearchResults::empty(query)
                }
            };
            let _ = tx
                .send_async(Event::SearchResults {
                    generation,
                    results,
                })
                .await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.active_delay.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{ConnectorStatus, MemoryLibrary, fixture};

    fn setup(status: ConnectorStatus) -> (Arc<MemoryLibrary>, SearchDebouncer, flume::Receiver<Event>) {
        let library = Arc::new(MemoryLibrary::new(fixture::snapshot(), status));
        let (tx, rx) = flume::unbounded();
        let debouncer = SearchDebouncer::new(library.clone(), tx);
        (library, debouncer, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_keystroke_dispatches() {
        let (library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        for text in ["a", "ab", "abc"] {
            debouncer.on_query_changed(text, TYPE_AHEAD_DELAY);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;

        let events: Vec<_> = rx.drain().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            Event::SearchResults { generation: 3, results } if results.query == "abc"
        ));
        assert_eq!(library.queries(), vec!["abc".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_before_the_delay() {
        let (library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        debouncer.on_query_changed("alien", TYPE_AHEAD_DELAY);
        tokio::time::sleep(TYPE_AHEAD_DELAY - Duration::from_millis(1)).await;
        assert!(rx.is_empty());
        assert!(library.queries().is_empty());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(rx.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_chosen_per_change() {
        let (_library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        debouncer.on_query_changed("andor", SELECTION_DELAY);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(rx.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_query_clears_without_searching() {
        let (library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        debouncer.on_query_changed("", TYPE_AHEAD_DELAY);
        let event = rx.recv_async().await.unwrap();

        assert!(matches!(event, Event::SearchCleared { generation: 1 }));
        assert!(library.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_query() {
        let (library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        debouncer.on_query_changed("alien", TYPE_AHEAD_DELAY);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(rx.is_empty());
        assert!(library.queries().is_empty());
        assert_eq!(debouncer.pending_query(), "alien");
    }

    #[tokio::test(start_paused = true)]
    async fn separate_pauses_dispatch_separately() {
        let (_library, mut debouncer, rx) = setup(ConnectorStatus::Loaded);

        debouncer.on_query_changed("ali", TYPE_AHEAD_DELAY);
        tokio::time::sleep(Duration::from_secs(1)).await;
        debouncer.on_query_changed("alien", TYPE_AHEAD_DELAY);
        tokio::time::sleep(Duration::from_secs(1)).await;

        let generations: Vec<_> = rx
            .drain()
            .map(|e| match e {
                Event::SearchResults { generation, .. } => generation,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(generations, vec![1, 2]);
        assert!(debouncer.is_current(2));
        assert!(!debouncer.is_current(1));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_reports_empty_results() {
        let (_library, mut debouncer, rx) = setup(ConnectorStatus::Offline);

        debouncer.on_query_changed("alien", TYPE_AHEAD_DELAY);
        match rx.recv_async().await.unwrap() {
            Event::SearchResults { results, .. } => {
                assert_eq!(results.query, "alien");
                assert!(results.items.is_empty());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
