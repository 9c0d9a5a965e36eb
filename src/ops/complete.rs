use std::time::{Duration, Instant};

use crate::model::{ItemList, RowId};
use crate::ops::countdown::Countdowns;

/// What a completion toggle did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Blank row: removed immediately, no countdown.
    RemovedNow,
    /// Row marked completed; removal scheduled after the countdown window.
    Scheduled,
    /// Completed row restored to active; any pending countdown cancelled.
    Undone,
}

/// Toggle the completion state of a row.
///
/// Active rows with blank text are deleted on the spot. Active rows with
/// text are marked completed and scheduled for removal at `now + window`.
/// Completed rows (whether or not a countdown is pending; rows loaded
/// from disk as completed have none) go back to active and their countdown
/// is cancelled.
///
/// Returns None if the row does not exist.
pub fn toggle_complete(
    list: &mut ItemList,
    countdowns: &mut Countdowns,
    id: RowId,
    now: Instant,
    window: Duration,
) -> Option<ToggleOutcome> {
    let (is_completed, is_blank) = {
        let row = list.get(id)?;
        (row.item.is_completed, row.item.is_blank())
    };

    if is_completed {
        countdowns.cancel(id);
        list.get_mut(id)?.item.is_completed = false;
        return Some(ToggleOutcome::Undone);
    }

    if is_blank {
        countdowns.cancel(id);
        list.remove(id);
        return Some(ToggleOutcome::RemovedNow);
    }

    list.get_mut(id)?.item.is_completed = true;
    countdowns.schedule(id, now, window);
    Some(ToggleOutcome::Scheduled)
}

/// Remove every row whose countdown has elapsed. Returns the removed ids
/// in expiry order; empty when nothing was due.
pub fn expire_due(list: &mut ItemList, countdowns: &mut Countdowns, now: Instant) -> Vec<RowId> {
    let due = countdowns.drain_due(now);
    let mut removed = Vec::new();
    for id in due {
        // A row may have been deleted by other means after scheduling
        if list.remove(id).is_some() {
            removed.push(id);
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    const WINDOW: Duration = Duration::from_millis(2000);

    fn list_with(texts: &[&str]) -> ItemList {
        ItemList::from_items(texts.iter().map(|t| Item::new(*t)).collect())
    }

    #[test]
    fn complete_schedules_and_expiry_removes() {
        let mut list = list_with(&["buy milk"]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();
        let t0 = Instant::now();

        let outcome = toggle_complete(&mut list, &mut cd, id, t0, WINDOW);
        assert_eq!(outcome, Some(ToggleOutcome::Scheduled));
        assert!(list.get(id).unwrap().item.is_completed);
        assert!(cd.is_pending(id));

        // Nothing happens before the window elapses
        assert!(expire_due(&mut list, &mut cd, t0 + Duration::from_millis(1999)).is_empty());
        assert_eq!(list.len(), 1);

        assert_eq!(expire_due(&mut list, &mut cd, t0 + WINDOW), vec![id]);
        assert!(list.is_empty());
    }

    #[test]
    fn undo_within_window_keeps_row_forever() {
        let mut list = list_with(&["buy milk"]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();
        let t0 = Instant::now();

        toggle_complete(&mut list, &mut cd, id, t0, WINDOW);
        let outcome = toggle_complete(&mut list, &mut cd, id, t0 + Duration::from_millis(500), WINDOW);
        assert_eq!(outcome, Some(ToggleOutcome::Undone));

        let row = list.get(id).unwrap();
        assert!(!row.item.is_completed);
        assert_eq!(row.item.text, "buy milk");
        assert!(!cd.is_pending(id));

        // Even long after the original deadline, nothing is deleted
        assert!(expire_due(&mut list, &mut cd, t0 + Duration::from_secs(60)).is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn blank_row_is_removed_immediately() {
        let mut list = list_with(&["  "]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();

        let outcome = toggle_complete(&mut list, &mut cd, id, Instant::now(), WINDOW);
        assert_eq!(outcome, Some(ToggleOutcome::RemovedNow));
        assert!(list.is_empty());
        assert!(cd.is_empty());
    }

    #[test]
    fn double_complete_has_one_deadline() {
        let mut list = list_with(&["a"]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();
        let t0 = Instant::now();

        // complete, undo, complete again shortly after
        toggle_complete(&mut list, &mut cd, id, t0, WINDOW);
        toggle_complete(&mut list, &mut cd, id, t0 + Duration::from_millis(100), WINDOW);
        toggle_complete(&mut list, &mut cd, id, t0 + Duration::from_millis(200), WINDOW);

        // Only the second deadline exists; the first must not fire
        assert!(expire_due(&mut list, &mut cd, t0 + WINDOW).is_empty());
        assert_eq!(
            expire_due(&mut list, &mut cd, t0 + WINDOW + Duration::from_millis(200)),
            vec![id]
        );
    }

    #[test]
    fn undo_on_loaded_completed_row_without_countdown() {
        // A row persisted as completed has no countdown after load
        let mut list = ItemList::from_items(vec![Item {
            text: "carry over".into(),
            is_completed: true,
        }]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();

        let outcome = toggle_complete(&mut list, &mut cd, id, Instant::now(), WINDOW);
        assert_eq!(outcome, Some(ToggleOutcome::Undone));
        assert!(!list.get(id).unwrap().item.is_completed);
    }

    #[test]
    fn toggle_unknown_row_is_none() {
        let mut list = list_with(&["a"]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();
        list.remove(id);
        assert_eq!(
            toggle_complete(&mut list, &mut cd, id, Instant::now(), WINDOW),
            None
        );
    }

    #[test]
    fn expiry_skips_rows_already_gone() {
        let mut list = list_with(&["a"]);
        let mut cd = Countdowns::new();
        let id = list.id_at(0).unwrap();
        let t0 = Instant::now();

        toggle_complete(&mut list, &mut cd, id, t0, WINDOW);
        list.remove(id);
        assert!(expire_due(&mut list, &mut cd, t0 + WINDOW).is_empty());
    }
}
