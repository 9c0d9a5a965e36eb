use crate::model::{Item, ItemList, RowId};

/// Error type for positional list operations (CLI surface)
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error("no item at position {0}")]
    OutOfRange(usize),
}

/// Append a new active item with the given text.
pub fn add_item(list: &mut ItemList, text: &str) -> RowId {
    list.push(Item::new(text))
}

/// Set the completion flag of the item at a 0-based position.
pub fn set_completed(list: &mut ItemList, index: usize, completed: bool) -> Result<(), OpError> {
    let id = list.id_at(index).ok_or(OpError::OutOfRange(index))?;
    if let Some(row) = list.get_mut(id) {
        row.item.is_completed = completed;
    }
    Ok(())
}

/// Remove the item at a 0-based position, returning it.
pub fn remove_at(list: &mut ItemList, index: usize) -> Result<Item, OpError> {
    let id = list.id_at(index).ok_or(OpError::OutOfRange(index))?;
    list.remove(id).ok_or(OpError::OutOfRange(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_set_remove_round_trip() {
        let mut list = ItemList::new();
        add_item(&mut list, "a");
        add_item(&mut list, "b");

        set_completed(&mut list, 1, true).unwrap();
        assert!(list.rows()[1].item.is_completed);

        let removed = remove_at(&mut list, 0).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].item.text, "b");
    }

    #[test]
    fn out_of_range_errors() {
        let mut list = ItemList::new();
        assert!(matches!(
            set_completed(&mut list, 0, true),
            Err(OpError::OutOfRange(0))
        ));
        assert!(matches!(remove_at(&mut list, 3), Err(OpError::OutOfRange(3))));
    }
}
