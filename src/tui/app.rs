use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::lock::{LockError, StoreLock};
use crate::io::paths::resolve_fade_dir;
use crate::io::store::{self, StoreError};
use crate::io::watcher::StoreWatcher;
use crate::model::{Config, Item, ItemList, RowId};
use crate::ops::complete::{self, ToggleOutcome};
use crate::ops::countdown::Countdowns;
use crate::util::unicode;

use super::input::{self, Intent};
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal operation: the focused row's text field is live
    Edit,
    /// Waiting for y/n on "delete all items?"
    ConfirmClear,
}

#[derive(Debug, thiserror::Error)]
enum PersistError {
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Main application state
pub struct App {
    pub fade_dir: PathBuf,
    /// The authoritative item collection; the screen is a projection of it
    pub list: ItemList,
    pub countdowns: Countdowns,
    pub countdown_window: Duration,
    /// Index of the focused row
    pub focus: usize,
    /// Byte offset of the text cursor within the focused row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Transient message for the status row, cleared on the next keypress
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(fade_dir: PathBuf, config: &Config, items: Vec<Item>) -> Self {
        let list = ItemList::from_items(items);
        let cursor = list.rows().first().map_or(0, |r| r.item.text.len());
        App {
            fade_dir,
            list,
            countdowns: Countdowns::new(),
            countdown_window: config.countdown(),
            focus: 0,
            cursor,
            scroll_offset: 0,
            mode: Mode::Edit,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn focused_id(&self) -> Option<RowId> {
        self.list.id_at(self.focus)
    }

    fn focused_text(&self) -> Option<&str> {
        self.list
            .rows()
            .get(self.focus)
            .map(|r| r.item.text.as_str())
    }

    /// Move focus to `index` (clamped), cursor to the end of that row's text.
    pub fn focus_row(&mut self, index: usize) {
        if self.list.is_empty() {
            self.focus = 0;
            self.cursor = 0;
            return;
        }
        self.focus = index.min(self.list.len() - 1);
        self.cursor = self.focused_text().map_or(0, str::len);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Write the full snapshot to disk. Every mutation goes through this;
    /// failures are surfaced on the status row and the in-memory list stays
    /// authoritative for the session.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            self.set_error(format!("save failed: {e}"));
        }
    }

    fn try_persist(&self) -> Result<(), PersistError> {
        let _lock = StoreLock::acquire(&self.fade_dir, Duration::from_millis(250))?;
        store::save_items(&self.fade_dir, &self.list.snapshot())?;
        Ok(())
    }

    /// Apply a decoded user intent.
    pub fn apply(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Quit => {
                self.should_quit = true;
            }

            Intent::CreateRow => {
                let id = self.list.push_empty();
                self.focus = self.list.index_of(id).unwrap_or(0);
                self.cursor = 0;
                self.persist();
            }

            Intent::FocusUp => {
                if self.focus > 0 {
                    self.focus_row(self.focus - 1);
                }
            }
            Intent::FocusDown => {
                if self.focus + 1 < self.list.len() {
                    self.focus_row(self.focus + 1);
                }
            }

            Intent::CursorLeft => {
                if let Some(text) = self.focused_text()
                    && let Some(prev) = unicode::prev_grapheme_boundary(text, self.cursor)
                {
                    self.cursor = prev;
                }
            }
            Intent::CursorRight => {
                if let Some(text) = self.focused_text()
                    && let Some(next) = unicode::next_grapheme_boundary(text, self.cursor)
                {
                    self.cursor = next;
                }
            }
            Intent::CursorHome => {
                self.cursor = 0;
            }
            Intent::CursorEnd => {
                self.cursor = self.focused_text().map_or(0, str::len);
            }

            Intent::InsertChar(c) => {
                let cursor = self.cursor;
                let Some(id) = self.focused_id() else { return };
                if let Some(row) = self.list.get_mut(id) {
                    row.item.text.insert(cursor, c);
                    self.cursor = cursor + c.len_utf8();
                    self.persist();
                }
            }

            Intent::DeleteBack => self.delete_back(),

            Intent::DeleteForward => {
                let cursor = self.cursor;
                let Some(id) = self.focused_id() else { return };
                if let Some(row) = self.list.get_mut(id)
                    && let Some(next) = unicode::next_grapheme_boundary(&row.item.text, cursor)
                {
                    row.item.text.replace_range(cursor..next, "");
                    self.persist();
                }
            }

            Intent::ToggleComplete => {
                let Some(id) = self.focused_id() else { return };
                let outcome = complete::toggle_complete(
                    &mut self.list,
                    &mut self.countdowns,
                    id,
                    now,
                    self.countdown_window,
                );
                if outcome == Some(ToggleOutcome::RemovedNow) {
                    let last = self.list.len().saturating_sub(1);
                    self.focus_row(self.focus.min(last));
                }
                self.persist();
            }

            Intent::RequestClearAll => {
                if !self.list.is_empty() {
                    self.mode = Mode::ConfirmClear;
                }
            }
        }
    }

    /// Backspace: delete the grapheme before the cursor, or the whole row
    /// when its text is already empty. Deleting the focused row refocuses
    /// the previous row if one exists, else the new first row.
    fn delete_back(&mut self) {
        let Some(id) = self.focused_id() else { return };

        let text_empty = self.focused_text().is_some_and(str::is_empty);
        if text_empty {
            self.countdowns.cancel(id);
            self.list.remove(id);
            let target = self.focus.saturating_sub(1);
            self.focus_row(target);
            self.persist();
            return;
        }

        let cursor = self.cursor;
        if let Some(row) = self.list.get_mut(id)
            && let Some(prev) = unicode::prev_grapheme_boundary(&row.item.text, cursor)
        {
            row.item.text.replace_range(prev..cursor, "");
            self.cursor = prev;
            self.persist();
        }
    }

    /// Confirmed "delete all": drop every row and pending countdown.
    pub fn confirm_clear_all(&mut self) {
        self.list.clear();
        self.countdowns.clear();
        self.mode = Mode::Edit;
        self.focus = 0;
        self.cursor = 0;
        self.persist();
    }

    pub fn cancel_clear(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Remove rows whose countdown elapsed. Called every loop iteration.
    pub fn tick(&mut self, now: Instant) {
        let focused = self.focused_id();
        let removed = complete::expire_due(&mut self.list, &mut self.countdowns, now);
        if removed.is_empty() {
            return;
        }
        match focused.and_then(|id| self.list.index_of(id)) {
            // The focused row survived; follow it to its new position
            Some(idx) => self.focus = idx,
            None => {
                let last = self.list.len().saturating_sub(1);
                self.focus_row(self.focus.min(last));
            }
        }
        self.persist();
    }

    /// The snapshot file changed under us (external writer). Reload it
    /// wholesale; a reload that matches the current list is a no-op, which
    /// also makes the watcher insensitive to our own saves.
    pub fn reload_from_disk(&mut self) {
        let items = match store::load_items(&self.fade_dir) {
            Ok(items) => items,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };
        if items == self.list.snapshot() {
            return;
        }
        self.list = ItemList::from_items(items);
        self.countdowns.clear();
        let last = self.list.len().saturating_sub(1);
        self.focus_row(self.focus.min(last));
        self.set_status("list changed on disk, reloaded");
    }

    /// Poll timeout for the event loop, clamped to the nearest countdown
    /// deadline so expiry fires promptly.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let tick = Duration::from_millis(250);
        match self.countdowns.next_deadline() {
            Some(deadline) => tick.min(deadline.saturating_duration_since(now)),
            None => tick,
        }
    }
}

/// Run the TUI application
pub fn run(dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let fade_dir = resolve_fade_dir(dir_override);
    let config = load_config(&fade_dir)?;

    let (items, load_error) = match store::load_items(&fade_dir) {
        Ok(items) => (items, None),
        Err(e) => (Vec::new(), Some(e)),
    };

    let mut app = App::new(fade_dir.clone(), &config, items);
    if let Some(e) = load_error {
        app.set_error(format!("{e}; starting with an empty list"));
    }

    // The watcher needs the directory to exist
    let _ = std::fs::create_dir_all(&fade_dir);
    let watcher = StoreWatcher::start(&fade_dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
        }

        if watcher.is_some_and(StoreWatcher::poll_changed) {
            app.reload_from_disk();
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
