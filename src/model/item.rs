use serde::{Deserialize, Serialize};

/// A single to-do entry as it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The text typed into the row
    pub text: String,
    /// Whether the row is marked as completed
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Item {
    /// A new active item with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            is_completed: false,
        }
    }

    /// True if the text is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Session-local identity of a displayed row. Never persisted; the stored
/// snapshot identifies items by position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// One displayed row: an item plus its session identity.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    pub item: Item,
}

/// The authoritative ordered item collection. Insertion order is display
/// order is persistence order. The rendered list is a projection of this.
#[derive(Debug, Default)]
pub struct ItemList {
    rows: Vec<Row>,
    next_id: u64,
}

impl ItemList {
    pub fn new() -> Self {
        ItemList::default()
    }

    /// Build a list from a loaded snapshot, assigning fresh row ids.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut list = ItemList::new();
        for item in items {
            list.push(item);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).map(|r| r.id)
    }

    /// Append an item at the end, returning the new row's id.
    pub fn push(&mut self, item: Item) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, item });
        id
    }

    /// Append a new empty active row (the "new item" action).
    pub fn push_empty(&mut self) -> RowId {
        self.push(Item::new(""))
    }

    /// Remove the row with the given id, returning its item.
    pub fn remove(&mut self, id: RowId) -> Option<Item> {
        let idx = self.index_of(id)?;
        Some(self.rows.remove(idx).item)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Project the rows to the persisted form. The store file must equal
    /// this after every mutation.
    pub fn snapshot(&self) -> Vec<Item> {
        self.rows.iter().map(|r| r.item.clone()).collect()
    }
}
