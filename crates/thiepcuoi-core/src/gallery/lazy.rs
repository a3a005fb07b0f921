//! Batched lazy reveal of gallery images.
//!
//! Images are revealed in small batches with a pause in between so the page
//! never decodes the whole gallery at once.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  LazyLoadBatcher                                                │
//! │  ├── observe(tile, resource)                                    │
//! │  │   └── proximity observer watches the tile                    │
//! │  ├── viewport_changed(viewport, rects)                          │
//! │  │   └── near tiles are queued (once) and the drain task woken  │
//! │  └── drain task (single tokio task)                             │
//! │      ├── pops up to batch_size tiles                            │
//! │      ├── settled -> reveal now, else await settle -> reveal     │
//! │      ├── sleep(batch_delay) while the queue is non-empty        │
//! │      └── RevealEvent -> broadcast::Sender                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Without proximity detection ([`VisibilityMode::Unavailable`]) every
//! observed tile is revealed in order, still batch by batch, through a
//! cursor over the registration list.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::error::{InvitationError, InvitationResult};
use crate::viewport::{ProximityConfig, ProximityObserver, Rect};

/// Images revealed per tick
pub const BATCH_SIZE: usize = 3;

/// Pause between two batches
pub const BATCH_DELAY: Duration = Duration::from_millis(200);

/// Capacity of the reveal broadcast channel
const REVEAL_CHANNEL_CAPACITY: usize = 256;

/// Position of a tile in the gallery registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Revealed,
}

/// How an image resource finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Loaded,
    Failed,
}

/// Something that eventually finishes loading, successfully or not.
pub trait ImageResource: Send + Sync + 'static {
    /// `Some` once the resource has finished loading.
    fn settled_now(&self) -> Option<Settle>;

    /// Resolves when the resource finishes loading.
    fn wait_settled(&self) -> BoxFuture<'static, Settle>;
}

/// One-shot load/error signal for an image element.
///
/// The first call to [`SettleSignal::settle`] wins; later calls are ignored.
/// Dropping every handle without settling counts as a failure so waiters
/// never hang.
#[derive(Debug, Clone)]
pub struct SettleSignal {
    tx: Arc<watch::Sender<Option<Settle>>>,
}

impl SettleSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// A signal that has already fired.
    pub fn settled(outcome: Settle) -> Self {
        let signal = Self::new();
        signal.settle(outcome);
        signal
    }

    /// Record the outcome. Returns `false` if it was already settled.
    pub fn settle(&self, outcome: Settle) -> bool {
        self.tx.send_if_modified(|state| {
            if state.is_some() {
                return false;
            }
            *state = Some(outcome);
            true
        })
    }

    pub fn loaded(&self) -> bool {
        self.settle(Settle::Loaded)
    }

    pub fn failed(&self) -> bool {
        self.settle(Settle::Failed)
    }
}

impl Default for SettleSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResource for SettleSignal {
    fn settled_now(&self) -> Option<Settle> {
        *self.tx.borrow()
    }

    fn wait_settled(&self) -> BoxFuture<'static, Settle> {
        let mut rx = self.tx.subscribe();
        async move {
            loop {
                let current = *rx.borrow_and_update();
                if let Some(outcome) = current {
                    return outcome;
                }
                if rx.changed().await.is_err() {
                    return Settle::Failed;
                }
            }
        }
        .boxed()
    }
}

/// Emitted once per tile when it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub tile: TileId,
    pub outcome: Settle,
}

/// How visibility is detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisibilityMode {
    /// Tiles are queued when they come near the viewport
    Proximity(ProximityConfig),
    /// No visibility signal: reveal everything, batch by batch
    Unavailable,
}

/// Tuning for the batcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub visibility: VisibilityMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            batch_delay: BATCH_DELAY,
            visibility: VisibilityMode::Proximity(ProximityConfig::lazy_load()),
        }
    }
}

impl BatchConfig {
    pub fn without_proximity() -> Self {
        Self {
            visibility: VisibilityMode::Unavailable,
            ..Self::default()
        }
    }
}

struct BatcherState {
    observer: Option<ProximityObserver<TileId>>,
    resources: HashMap<TileId, Arc<dyn ImageResource>>,
    load_states: HashMap<TileId, LoadState>,
    queue: VecDeque<TileId>,
    /// Registration order, walked by `cursor` when proximity is unavailable
    registered: Vec<TileId>,
    cursor: usize,
    processing: bool,
    /// When the previous batch went out, across drain cycles
    last_dispatch: Option<Instant>,
}

impl BatcherState {
    fn new(visibility: VisibilityMode) -> Self {
        let observer = match visibility {
            VisibilityMode::Proximity(config) => Some(ProximityObserver::new(config)),
            VisibilityMode::Unavailable => None,
        };
        Self {
            observer,
            resources: HashMap::new(),
            load_states: HashMap::new(),
            queue: VecDeque::new(),
            registered: Vec::new(),
            cursor: 0,
            processing: false,
            last_dispatch: None,
        }
    }

    fn has_backlog(&self) -> bool {
        !self.queue.is_empty() || self.cursor < self.registered.len()
    }

    /// Take the next batch of tiles that still need revealing.
    fn next_batch(&mut self, size: usize) -> Vec<(TileId, Arc<dyn ImageResource>)> {
        let mut batch = Vec::with_capacity(size);
        while batch.len() < size {
            let next = if let Some(tile) = self.queue.pop_front() {
                tile
            } else if self.cursor < self.registered.len() {
                self.cursor += 1;
                self.registered[self.cursor - 1]
            } else {
                break;
            };

            if self.load_states.get(&next) != Some(&LoadState::Pending) {
                continue;
            }
            if let Some(resource) = self.resources.get(&next) {
                batch.push((next, resource.clone()));
            }
        }
        batch
    }
}

/// Reveals observed images in batches as they approach the viewport.
///
/// Dropping the batcher (or calling [`LazyLoadBatcher::disconnect`]) stops
/// the background task and any pending settle waits.
pub struct LazyLoadBatcher {
    config: BatchConfig,
    state: Arc<Mutex<BatcherState>>,
    wake_tx: mpsc::UnboundedSender<()>,
    reveal_tx: broadcast::Sender<RevealEvent>,
    cancel: CancellationToken,
}

impl LazyLoadBatcher {
    /// Start the batcher on the current tokio runtime.
    ///
    /// Fails if called outside a runtime.
    pub fn spawn(config: BatchConfig) -> InvitationResult<Self> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| InvitationError::Runtime(e.to_string()))?;

        let state = Arc::new(Mutex::new(BatcherState::new(config.visibility)));
        let (wake_tx, wake_rx) = mpsc::unbounded_channel();
        let (reveal_tx, _) = broadcast::channel(REVEAL_CHANNEL_CAPACITY);
        let cancel = CancellationToken::new();

        handle.spawn(drain_task(
            config,
            state.clone(),
            wake_rx,
            reveal_tx.clone(),
            cancel.clone(),
        ));

        info!(
            batch_size = config.batch_size,
            delay_ms = config.batch_delay.as_millis() as u64,
            "Lazy-load batcher started"
        );

        Ok(Self {
            config,
            state,
            wake_tx,
            reveal_tx,
            cancel,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Subscribe to reveal events.
    pub fn subscribe(&self) -> broadcast::Receiver<RevealEvent> {
        self.reveal_tx.subscribe()
    }

    /// Register a tile for deferred reveal.
    ///
    /// Registering a tile twice keeps the first resource.
    pub fn observe(&self, tile: TileId, resource: Arc<dyn ImageResource>) {
        let mut state = self.state.lock();
        if state.load_states.contains_key(&tile) {
            return;
        }
        state.load_states.insert(tile, LoadState::Pending);
        state.resources.insert(tile, resource);

        let watched = match state.observer.as_mut() {
            Some(observer) => {
                observer.observe(tile);
                true
            }
            None => false,
        };
        if !watched {
            state.registered.push(tile);
            drop(state);
            self.wake();
        }
    }

    /// Feed a new viewport position. Tiles that came near are queued once.
    ///
    /// Returns how many tiles were queued.
    pub fn viewport_changed<F>(&self, viewport: &Rect, rect_of: F) -> usize
    where
        F: FnMut(&TileId) -> Option<Rect>,
    {
        let mut state = self.state.lock();
        let Some(observer) = state.observer.as_mut() else {
            return 0;
        };
        let triggered = observer.check(viewport, rect_of);

        let mut queued = 0;
        for tile in triggered {
            if state.load_states.get(&tile) == Some(&LoadState::Pending)
                && !state.queue.contains(&tile)
            {
                trace!(%tile, "Queued for reveal");
                state.queue.push_back(tile);
                queued += 1;
            }
        }
        drop(state);

        if queued > 0 {
            self.wake();
        }
        queued
    }

    pub fn load_state(&self, tile: TileId) -> Option<LoadState> {
        self.state.lock().load_states.get(&tile).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.state
            .lock()
            .load_states
            .values()
            .filter(|s| **s == LoadState::Revealed)
            .count()
    }

    pub fn queued_count(&self) -> usize {
        let state = self.state.lock();
        state.queue.len() + (state.registered.len() - state.cursor)
    }

    /// Whether a batch drain is in progress.
    pub fn is_processing(&self) -> bool {
        self.state.lock().processing
    }

    /// Whether tiles are still watched for proximity.
    pub fn observed_count(&self) -> usize {
        self.state
            .lock()
            .observer
            .as_ref()
            .map(|o| o.observed_count())
            .unwrap_or(0)
    }

    /// Stop watching and cancel all background work.
    pub fn disconnect(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.cancel.cancel();
        if let Some(observer) = self.state.lock().observer.as_mut() {
            observer.disconnect();
        }
        debug!("Lazy-load batcher disconnected");
    }

    pub fn is_disconnected(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn wake(&self) {
        let _ = self.wake_tx.send(());
    }
}

impl Drop for LazyLoadBatcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Mark a tile revealed. Only the first call per tile has an effect.
fn reveal(
    state: &Mutex<BatcherState>,
    reveal_tx: &broadcast::Sender<RevealEvent>,
    tile: TileId,
    outcome: Settle,
) {
    {
        let mut state = state.lock();
        match state.load_states.get_mut(&tile) {
            Some(load) if *load == LoadState::Pending => *load = LoadState::Revealed,
            _ => return,
        }
        state.resources.remove(&tile);
    }
    trace!(%tile, ?outcome, "Revealed");
    let _ = reveal_tx.send(RevealEvent { tile, outcome });
}

async fn drain_task(
    config: BatchConfig,
    state: Arc<Mutex<BatcherState>>,
    mut wake_rx: mpsc::UnboundedReceiver<()>,
    reveal_tx: broadcast::Sender<RevealEvent>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            msg = wake_rx.recv() => {
                if msg.is_none() {
                    break;
                }
            }
        }
        drain(&config, &state, &reveal_tx, &cancel).await;
    }
    debug!("Lazy-load drain task stopped");
}

async fn drain(
    config: &BatchConfig,
    state: &Arc<Mutex<BatcherState>>,
    reveal_tx: &broadcast::Sender<RevealEvent>,
    cancel: &CancellationToken,
) {
    {
        let mut guard = state.lock();
        if guard.processing {
            return;
        }
        guard.processing = true;
    }

    loop {
        // The delay holds between any two batches, even when the queue ran
        // dry in between
        let ready_at = {
            let guard = state.lock();
            if !guard.has_backlog() {
                break;
            }
            guard.last_dispatch.map(|last| last + config.batch_delay)
        };
        if let Some(ready_at) = ready_at {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep_until(ready_at) => {}
            }
        }

        let batch = {
            let mut guard = state.lock();
            let batch = guard.next_batch(config.batch_size.max(1));
            if !batch.is_empty() {
                guard.last_dispatch = Some(Instant::now());
            }
            batch
        };
        if batch.is_empty() {
            break;
        }
        debug!(size = batch.len(), "Dispatching reveal batch");

        for (tile, resource) in batch {
            match resource.settled_now() {
                Some(outcome) => reveal(state, reveal_tx, tile, outcome),
                None => {
                    let settled = resource.wait_settled();
                    let state = state.clone();
                    let reveal_tx = reveal_tx.clone();
                    let cancel = cancel.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            _ = cancel.cancelled() => {}
                            outcome = settled => reveal(&state, &reveal_tx, tile, outcome),
                        }
                    });
                }
            }
        }
    }

    state.lock().processing = false;
}
