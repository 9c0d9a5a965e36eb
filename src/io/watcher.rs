use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::store::ITEMS_FILE;

/// Watches the fade directory for external rewrites of the snapshot file.
///
/// The TUI polls this each tick and reloads the list when another process
/// (typically a `fade` CLI invocation) has replaced items.json.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl StoreWatcher {
    pub fn start(fade_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }
                let touched_items = event.paths.iter().any(|p| {
                    p.file_name().and_then(|n| n.to_str()) == Some(ITEMS_FILE)
                });
                if touched_items {
                    let _ = tx.send(());
                }
            },
            Config::default(),
        )?;

        watcher.watch(fade_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking: true if the snapshot changed since the last poll.
    /// Drains all queued notifications.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
