//! Item Loading
//!
//! Fetch orchestration behind `ItemList`, kept free of the DOM so it can be
//! driven from plain tests.

use async_trait::async_trait;

use crate::api;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::Item;

/// Where the item collection comes from
#[async_trait(?Send)]
pub trait ItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, ApiError>;
}

/// Item source backed by the HTTP API
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    config: Config,
}

impl HttpItemSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        api::fetch_items(&self.config).await
    }
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Decides when a reload flag value should start a fetch.
///
/// Only a transition into `true` issues a ticket. Every new ticket supersedes
/// the previous one.
#[derive(Debug, Default)]
pub struct ReloadGate {
    last: bool,
    issued: u64,
}

impl ReloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, reload: bool) -> Option<Ticket> {
        let rising = reload && !self.last;
        self.last = reload;
        if rising {
            self.issued += 1;
            Some(Ticket(self.issued))
        } else {
            None
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Item>),
    Failed(ApiError),
}

/// Run one fetch
pub async fn load_items<S: ItemSource + ?Sized>(source: &S) -> LoadOutcome {
    match source.fetch_items().await {
        Ok(items) => LoadOutcome::Loaded(items),
        Err(err) => LoadOutcome::Failed(err),
    }
}

/// Apply an outcome: store the items, then report completion.
///
/// Failures are logged and touch nothing, superseded responses are dropped.
/// Returns whether the outcome was applied.
pub fn deliver(
    outcome: LoadOutcome,
    current: bool,
    store: impl FnOnce(Vec<Item>),
    completed: impl FnOnce(),
) -> bool {
    match outcome {
        LoadOutcome::Loaded(items) if current => {
            log::debug!("GET success: {} items", items.len());
            store(items);
            completed();
            true
        }
        LoadOutcome::Loaded(_) => {
            log::debug!("GET response superseded, dropped");
            false
        }
        LoadOutcome::Failed(err) => {
            log::error!("GET error: {err}");
            false
        }
    }
}
