use serde::{Deserialize, Serialize};

/// Metadata-only record of an uploaded file; contents never enter storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub last_modified: i64,
    pub upload_date: String,
}

/// Preview of the most recent upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePreview {
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageView {
    pub file_count: usize,
    pub used_label: String,
    pub percent: f64,
    pub latest: Option<FilePreview>,
}
