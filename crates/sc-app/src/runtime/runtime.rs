//! Single-owner runtime for the clipboard history.
//!
//! One task owns the [`ClipboardHistory`]. UI commands and clipboard poll
//! results reach it over channels and are handled one at a time, so every
//! handler runs to completion without locks.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use sc_core::ports::SystemClipboardPort;

use super::{HistoryCommand, HistoryCommandReceiver, HistoryRuntimeHandle};
use crate::deps::HistoryDeps;
use crate::history::ClipboardHistory;

const COMMAND_BUFFER: usize = 64;
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

pub struct HistoryRuntime {
    history: ClipboardHistory,
    clipboard: Arc<dyn SystemClipboardPort>,
    command_rx: HistoryCommandReceiver,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl HistoryRuntime {
    /// Load the history and start polling the clipboard on a new task.
    ///
    /// Must be called from within a tokio runtime. A zero `poll_interval` is
    /// raised to one millisecond.
    pub fn spawn(deps: HistoryDeps, capacity: usize, poll_interval: Duration) -> HistoryRuntimeHandle {
        if poll_interval < MIN_POLL_INTERVAL {
            warn!(?poll_interval, "Poll interval too small, using 1ms");
        }
        let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        let clipboard = deps.clipboard.clone();
        let history = ClipboardHistory::start(deps, capacity);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let cancel = CancellationToken::new();

        let runtime = Self {
            history,
            clipboard,
            command_rx,
            poll_interval,
            cancel: cancel.clone(),
        };

        let span = info_span!(
            "history.runtime",
            poll_interval_ms = poll_interval.as_millis() as u64
        );
        let join = tokio::spawn(runtime.run().instrument(span));
        HistoryRuntimeHandle::new(command_tx, cancel, join)
    }

    async fn run(self) -> ClipboardHistory {
        let Self {
            mut history,
            clipboard,
            mut command_rx,
            poll_interval,
            cancel,
        } = self;

        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Each read carries the write generation it started under.
        let (read_tx, mut read_rx) = mpsc::channel::<(u64, Result<String>)>(1);
        let mut pending_read: Option<JoinHandle<()>> = None;

        info!("History runtime started");

        loop {
            let can_poll = pending_read.as_ref().map_or(true, JoinHandle::is_finished);

            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    debug!("History runtime cancelled");
                    break;
                }
                command = command_rx.recv() => match command {
                    Some(command) => handle_command(&mut history, command),
                    None => {
                        debug!("All history command senders dropped");
                        break;
                    }
                },
                Some((generation, result)) = read_rx.recv() => {
                    pending_read = None;
                    if generation != history.write_generation() {
                        debug!("Discarding clipboard read that predates a clipboard write");
                        continue;
                    }
                    match result {
                        Ok(text) => history.on_clipboard_text(&text),
                        Err(err) => warn!(error = %err, "Failed to read system clipboard"),
                    }
                }
                _ = ticker.tick(), if can_poll => {
                    let clipboard = clipboard.clone();
                    let read_tx = read_tx.clone();
                    let generation = history.write_generation();
                    pending_read = Some(tokio::spawn(async move {
                        let result = clipboard.read_text().await;
                        // The runtime may already be gone; a dropped result is fine then.
                        let _ = read_tx.send((generation, result)).await;
                    }));
                }
            }
        }

        if let Some(read) = pending_read.take() {
            read.abort();
        }
        drop(ticker);
        drop(read_rx);

        history.flush();
        info!("History runtime stopped");
        history
    }
}

fn handle_command(history: &mut ClipboardHistory, command: HistoryCommand) {
    debug!(?command, "History command received");
    match command {
        HistoryCommand::ClickEntry(id) => history.click_entry(&id),
        HistoryCommand::ToggleClearMode(enabled) => history.toggle_clear_mode(enabled),
        HistoryCommand::DragStart(id) => history.drag_start(&id),
        HistoryCommand::DragMotion(zone) => history.drag_motion(zone),
        HistoryCommand::DragEnd => history.drag_end(),
        HistoryCommand::DropOnDeleteZone(id) => history.drop_on_delete_zone(&id),
        HistoryCommand::DropOnStickyZone(id) => history.drop_on_sticky_zone(&id),
        HistoryCommand::SetSticky { id, sticky } => {
            history.set_sticky(&id, sticky);
        }
        HistoryCommand::Snapshot(reply) => {
            if reply.send(history.snapshot()).is_err() {
                debug!("Snapshot requester went away");
            }
        }
    }
}
