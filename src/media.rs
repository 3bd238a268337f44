use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text;

/// Broad media classification derived from a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

/// Data record describing a multimedia file.
///
/// Purely descriptive: the file is never opened and `local_url` is never
/// checked for existence. Serializes with camelCase field names to match the
/// JSON the surrounding application exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescriptor {
    /// Display/storage name
    pub file_name: String,
    /// File size in bytes
    pub file_size: u64,
    /// Short type tag (e.g. "jpg", "mp4")
    pub file_type: String,
    /// Local filesystem path or URI
    pub local_url: String,
}

impl MediaDescriptor {
    pub fn new(file_name: String, file_size: u64, file_type: String, local_url: String) -> Self {
        Self {
            file_name,
            file_size,
            file_type,
            local_url,
        }
    }

    /// Effective type tag: the explicit `file_type` when set, otherwise the
    /// extension parsed from the file name
    pub fn type_tag(&self) -> Option<&str> {
        if text::is_not_blank(Some(&self.file_type)) {
            return Some(self.file_type.trim());
        }
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
    }

    /// Classify by file name via its guessed MIME type
    pub fn kind(&self) -> MediaKind {
        match mime_guess::from_path(&self.file_name).first() {
            Some(m) if m.type_() == mime_guess::mime::IMAGE => MediaKind::Image,
            Some(m) if m.type_() == mime_guess::mime::VIDEO => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }
}
