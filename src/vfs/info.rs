use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Metadata snapshot for an embedded file or a synthesized directory.
///
/// Taken once when the asset is embedded and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    name: String,
    size: u64,
    mod_time: DateTime<Utc>,
    is_dir: bool,
    /// Children of a synthesized directory, empty for plain files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<FileInfo>,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mod_time: DateTime<Utc>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            mod_time,
            is_dir,
            files: Vec::new(),
        }
    }

    /// Metadata for a plain file, modification time in nanoseconds since
    /// the Unix epoch. This is the form generated modules use.
    pub fn file(name: impl Into<String>, size: u64, mod_time_nanos: i64) -> Self {
        Self::new(name, size, Utc.timestamp_nanos(mod_time_nanos), false)
    }

    /// Metadata for an explicitly embedded directory entry
    pub fn dir(name: impl Into<String>, mod_time_nanos: i64) -> Self {
        Self::new(name, 0, Utc.timestamp_nanos(mod_time_nanos), true)
    }

    /// Directory fabricated on a lookup miss
    pub(crate) fn synthetic_dir(name: impl Into<String>, files: Vec<FileInfo>) -> Self {
        Self {
            files,
            ..Self::new(name, 0, Utc.timestamp_nanos(0), true)
        }
    }

    pub(crate) fn with_files(mut self, files: Vec<FileInfo>) -> Self {
        self.files = files;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    /// Modification time as nanoseconds since the Unix epoch, if representable
    pub fn mod_time_nanos(&self) -> Option<i64> {
        self.mod_time.timestamp_nanos_opt()
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Children of this entry.
    ///
    /// `count` is accepted for parity with conventional directory APIs; the
    /// complete listing is always returned.
    pub fn readdir(&self, _count: usize) -> &[FileInfo] {
        &self.files
    }
}
