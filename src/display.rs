use tracing::warn;

use crate::error::FetchError;

/// A piece of visible text. Empty means blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot(String);

impl TextSlot {
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry in the list pane; `id` is the record it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPane {
    pub rows: Vec<Row>,
    pub error: TextSlot,
}

impl ListPane {
    pub fn clear_data(&mut self) {
        self.rows.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPane {
    pub loader: TextSlot,
    pub title: TextSlot,
    pub message: TextSlot,
    pub user_id: TextSlot,
    pub error: TextSlot,
}

impl DetailPane {
    pub fn clear_data(&mut self) {
        self.loader.clear();
        self.title.clear();
        self.message.clear();
        self.user_id.clear();
    }

    pub fn has_data(&self) -> bool {
        !(self.title.is_empty() && self.message.is_empty() && self.user_id.is_empty())
    }
}

/// Every slot the pipeline writes into, for one page/session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTarget {
    pub list: ListPane,
    pub detail: DetailPane,
}

impl DisplayTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.list.rows
    }
}

/// Writes a failure's message into `slot`.
pub fn show_error(slot: &mut TextSlot, err: &FetchError) {
    warn!(kind = ?err.kind(), error = %err, "request failed");
    slot.set(err.to_string());
}
