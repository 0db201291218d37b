use std::sync::Arc;

use crate::models::NotesView;
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const NOTES_KEY: &str = "quickNotes";

pub struct NotesWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    text: String,
    status: WidgetStatus,
}

impl NotesWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            text: String::new(),
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.text = self.store.get(NOTES_KEY).unwrap_or_default();
        self.status = WidgetStatus::Ready;
    }

    /// Saves silently on every edit; an empty text is a valid note.
    pub fn set_notes(&mut self, text: &str) {
        self.text = text.to_string();
        write_through(&self.store, &self.notifier, NOTES_KEY, &self.text);
    }

    pub fn notes(&self) -> &str {
        &self.text
    }

    pub fn render(&self) -> NotesView {
        NotesView {
            text: self.text.clone(),
            characters: self.text.chars().count(),
        }
    }
}

impl Widget for NotesWidget {
    fn name(&self) -> &'static str {
        "notes"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
