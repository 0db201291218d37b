use chrono::Utc;
use std::sync::Arc;

use crate::models::{FileMeta, FilePreview, NotificationKind, StorageView};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::utils::format::format_file_size;
use crate::widgets::{write_through, Widget, WidgetStatus};

const FILES_KEY: &str = "uploadedFiles";

/// Nominal budget shown in the usage meter; uploads are metadata-only so
/// this bounds nothing physically.
pub const STORAGE_BUDGET_BYTES: u64 = 100 * 1024 * 1024;

pub struct FilesWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    files: Vec<FileMeta>,
    status: WidgetStatus,
}

impl FilesWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            files: Vec::new(),
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.files = self.store.get(FILES_KEY).unwrap_or_default();
        self.status = WidgetStatus::Ready;
    }

    /// Records upload metadata. A blank file name is rejected with an error
    /// notification and nothing is persisted.
    pub fn add_file(&mut self, name: &str, size: u64, kind: &str, last_modified: i64) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.notifier.notify(
                NotificationKind::Error,
                "No File Selected",
                "Please select a file to upload.",
                false,
            );
            return false;
        }

        self.files.push(FileMeta {
            name: name.to_string(),
            size,
            kind: kind.to_string(),
            last_modified,
            upload_date: Utc::now().to_rfc3339(),
        });
        write_through(&self.store, &self.notifier, FILES_KEY, &self.files);

        self.notifier.notify(
            NotificationKind::Success,
            "File Uploaded",
            &format!("\"{}\" has been uploaded.", name),
            false,
        );
        true
    }

    pub fn files(&self) -> &[FileMeta] {
        &self.files
    }

    pub fn render(&self) -> StorageView {
        let used: u64 = self.files.iter().map(|f| f.size).sum();
        let used_mb = used as f64 / (1024.0 * 1024.0);
        let budget_mb = STORAGE_BUDGET_BYTES as f64 / (1024.0 * 1024.0);

        StorageView {
            file_count: self.files.len(),
            used_label: format!("{:.2} MB / {:.0} MB", used_mb, budget_mb),
            percent: (used_mb / budget_mb * 100.0).min(100.0),
            latest: self.files.last().map(|f| FilePreview {
                name: f.name.clone(),
                size_label: format_file_size(f.size),
            }),
        }
    }
}

impl Widget for FilesWidget {
    fn name(&self) -> &'static str {
        "files"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
