//! Tests for [`HistoryRuntime`] polling, commands and shutdown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;
use sc_app::{HistoryCommand, HistoryDeps, HistoryRuntime};
use sc_core::ports::{HistoryNotifierPort, HistoryStorePort, SystemClipboardPort};
use sc_core::{DropZone, HistoryMode, HistoryNotification, HistoryRecord, MAX_REGISTRY_LENGTH};
use tracing_subscriber::EnvFilter;

mock! {
    pub Clipboard {}

    #[async_trait]
    impl SystemClipboardPort for Clipboard {
        async fn read_text(&self) -> Result<String>;
        fn write_text(&self, text: &str) -> Result<()>;
    }
}

#[derive(Default)]
struct MemoryStore {
    records: Mutex<Vec<HistoryRecord>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            saves: AtomicUsize::new(0),
        }
    }
}

impl HistoryStorePort for MemoryStore {
    fn load(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<HistoryNotification>>,
}

impl HistoryNotifierPort for RecordingNotifier {
    fn notify(&self, notification: HistoryNotification) {
        self.events.lock().unwrap().push(notification);
    }
}

/// Clipboard whose reads never finish before the next tick.
#[derive(Default)]
struct SlowClipboard {
    reads: AtomicUsize,
}

#[async_trait]
impl SystemClipboardPort for SlowClipboard {
    async fn read_text(&self) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("slow".to_string())
    }

    fn write_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Clipboard whose reads report the text seen when the read started.
struct LaggingClipboard {
    current: Mutex<String>,
}

impl LaggingClipboard {
    fn with_text(text: &str) -> Self {
        Self {
            current: Mutex::new(text.to_string()),
        }
    }
}

#[async_trait]
impl SystemClipboardPort for LaggingClipboard {
    async fn read_text(&self) -> Result<String> {
        let text = self.current.lock().unwrap().clone();
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(text)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        *self.current.lock().unwrap() = text.to_string();
        Ok(())
    }
}

const POLL: Duration = Duration::from_millis(1000);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A mock clipboard backed by a shared string, counting reads.
fn shared_clipboard(initial: &str) -> (MockClipboard, Arc<Mutex<String>>, Arc<AtomicUsize>) {
    let current = Arc::new(Mutex::new(initial.to_string()));
    let reads = Arc::new(AtomicUsize::new(0));
    let mut clipboard = MockClipboard::new();

    let read_current = current.clone();
    let read_count = reads.clone();
    clipboard.expect_read_text().returning(move || {
        read_count.fetch_add(1, Ordering::SeqCst);
        Ok(read_current.lock().unwrap().clone())
    });

    let write_current = current.clone();
    clipboard.expect_write_text().returning(move |text| {
        *write_current.lock().unwrap() = text.to_string();
        Ok(())
    });

    (clipboard, current, reads)
}

fn deps(
    clipboard: Arc<dyn SystemClipboardPort>,
    store: Arc<MemoryStore>,
) -> (HistoryDeps, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let deps = HistoryDeps {
        clipboard,
        store,
        notifier: notifier.clone(),
    };
    (deps, notifier)
}

#[tokio::test(start_paused = true)]
async fn test_poll_records_new_clipboard_text() {
    init_tracing();
    let (clipboard, current, _) = shared_clipboard("hello");
    let store = Arc::new(MemoryStore::default());
    let (deps, _) = deps(Arc::new(clipboard), store.clone());

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    tokio::time::sleep(Duration::from_millis(10)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.mode, HistoryMode::Normal);
    assert_eq!(snapshot.texts(), vec!["hello"]);

    *current.lock().unwrap() = "world".to_string();
    tokio::time::sleep(POLL).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.texts(), vec!["hello", "world"]);
    assert_eq!(snapshot.selected().map(|e| e.text.as_str()), Some("world"));

    handle.shutdown().await.unwrap();
    let saved: Vec<String> = store
        .records
        .lock()
        .unwrap()
        .iter()
        .map(|record| record.text.clone())
        .collect();
    assert_eq!(saved, vec!["hello", "world"]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_persists_once_and_stops_polling() {
    init_tracing();
    let (clipboard, _, reads) = shared_clipboard("kept");
    let store = Arc::new(MemoryStore::with_records(vec![HistoryRecord::new(
        "kept", false,
    )]));
    let (deps, _) = deps(Arc::new(clipboard), store.clone());

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    tokio::time::sleep(POLL * 3).await;
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);

    let history = handle.shutdown().await.unwrap();
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(history.registry().len(), 1);

    let reads_at_shutdown = reads.load(Ordering::SeqCst);
    tokio::time::sleep(POLL * 5).await;
    assert_eq!(reads.load(Ordering::SeqCst), reads_at_shutdown);
}

#[tokio::test(start_paused = true)]
async fn test_read_errors_are_skipped() {
    init_tracing();
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Err(anyhow::anyhow!("clipboard unavailable")));
    clipboard.expect_write_text().never();
    let store = Arc::new(MemoryStore::default());
    let (deps, _) = deps(Arc::new(clipboard), store);

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    tokio::time::sleep(POLL * 3).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.mode, HistoryMode::Empty);
    assert!(snapshot.entries.is_empty());

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_slow_read_keeps_a_single_request_in_flight() {
    init_tracing();
    let clipboard = Arc::new(SlowClipboard::default());
    let store = Arc::new(MemoryStore::default());
    let (deps, _) = deps(clipboard.clone(), store);

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(clipboard.reads.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.texts(), vec!["slow"]);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_commands_drive_selection_clear_mode_and_drag() {
    init_tracing();
    let (clipboard, current, _) = shared_clipboard("b");
    let store = Arc::new(MemoryStore::with_records(vec![
        HistoryRecord::new("a", false),
        HistoryRecord::new("b", false),
    ]));
    let (deps, notifier) = deps(Arc::new(clipboard), store.clone());

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    tokio::time::sleep(Duration::from_millis(10)).await;

    let snapshot = handle.snapshot().await.unwrap();
    let a = snapshot.entries[0].id.clone();
    let b = snapshot
        .entries
        .iter()
        .find(|entry| entry.text == "b")
        .map(|entry| entry.id.clone())
        .unwrap();

    handle.send(HistoryCommand::ClickEntry(a.clone())).await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.selected().map(|e| e.id.clone()), Some(a.clone()));
    assert_eq!(current.lock().unwrap().as_str(), "a");

    handle.send(HistoryCommand::ToggleClearMode(true)).await.unwrap();
    handle.send(HistoryCommand::ClickEntry(b.clone())).await.unwrap();
    handle.send(HistoryCommand::ToggleClearMode(false)).await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.texts(), vec!["a"]);
    assert_eq!(snapshot.mode, HistoryMode::Normal);

    handle.send(HistoryCommand::DragStart(a.clone())).await.unwrap();
    handle
        .send(HistoryCommand::DragMotion(Some(DropZone::DeleteZone)))
        .await
        .unwrap();
    handle
        .send(HistoryCommand::DragMotion(Some(DropZone::StickyZone)))
        .await
        .unwrap();
    handle
        .send(HistoryCommand::DropOnStickyZone(a.clone()))
        .await
        .unwrap();
    handle.send(HistoryCommand::DragEnd).await.unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.mode, HistoryMode::Normal);
    assert!(snapshot.entries[0].sticky);

    let events = notifier.events.lock().unwrap().clone();
    assert!(events.contains(&HistoryNotification::DeleteTargetHover(true)));
    assert!(events.contains(&HistoryNotification::DeleteTargetHover(false)));
    assert!(events.contains(&HistoryNotification::EntryStickyChanged {
        id: a,
        sticky: true
    }));

    handle.shutdown().await.unwrap();
    assert_eq!(
        store.records.lock().unwrap().clone(),
        vec![HistoryRecord::new("a", true)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_commands_fail_after_shutdown() {
    init_tracing();
    let (clipboard, _, _) = shared_clipboard("");
    let (deps, _) = deps(Arc::new(clipboard), Arc::new(MemoryStore::default()));

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    let commands = handle.commands();
    handle.shutdown().await.unwrap();

    assert!(commands.send(HistoryCommand::DragEnd).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_read_started_before_a_delete_does_not_restore_the_entry() {
    init_tracing();
    let clipboard = Arc::new(LaggingClipboard::with_text("b"));
    let store = Arc::new(MemoryStore::with_records(vec![
        HistoryRecord::new("a", false),
        HistoryRecord::new("b", false),
    ]));
    let (deps, _) = deps(clipboard, store);

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, POLL);
    // The second read starts at 1000ms and still reports "b" at 1500ms.
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let snapshot = handle.snapshot().await.unwrap();
    let b = snapshot
        .entries
        .iter()
        .find(|entry| entry.text == "b")
        .map(|entry| entry.id.clone())
        .unwrap();
    handle.send(HistoryCommand::DragStart(b.clone())).await.unwrap();
    handle.send(HistoryCommand::DropOnDeleteZone(b)).await.unwrap();
    handle.send(HistoryCommand::DragEnd).await.unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.texts(), vec!["a"]);

    tokio::time::sleep(POLL * 2).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.texts(), vec!["a"]);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_zero_poll_interval_does_not_kill_the_runtime() {
    init_tracing();
    let (clipboard, _, _) = shared_clipboard("");
    let store = Arc::new(MemoryStore::default());
    let (deps, _) = deps(Arc::new(clipboard), store.clone());

    let handle = HistoryRuntime::spawn(deps, MAX_REGISTRY_LENGTH, Duration::ZERO);
    tokio::time::sleep(Duration::from_millis(10)).await;

    handle.shutdown().await.unwrap();
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
}
