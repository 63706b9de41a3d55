mod entry;
mod error;
mod file;
mod info;
mod synth;


pub use entry::AssetEntry;
pub use error::VfsError;
pub use file::{AssetBytes, Directory, File, RegularFile};
pub use info::FileInfo;

use crate::security::PathResolver;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Read-only filesystem over embedded assets, backed by a single arena.
///
/// Built once with [`FileSystemBuilder`] and never modified afterwards, so
/// it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct FileSystem {
    /// Single contiguous blob containing all file data
    arena: Arc<[u8]>,
    /// Index mapping logical paths to arena slices
    index: BTreeMap<String, AssetEntry>,
}

/// Mutable builder for constructing a filesystem
pub struct FileSystemBuilder {
    arena: Vec<u8>,
    index: BTreeMap<String, AssetEntry>,
    max_file_size: u64,
    max_total_size: u64,
}

impl FileSystemBuilder {
    /// Create a new builder with default limits
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            index: BTreeMap::new(),
            max_file_size: 50 * 1024 * 1024,   // 50 MB per file
            max_total_size: 500 * 1024 * 1024, // 500 MB total
        }
    }

    /// Set maximum individual file size
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set maximum total arena size
    pub fn max_total_size(mut self, size: u64) -> Self {
        self.max_total_size = size;
        self
    }

    /// Add an asset under a logical path.
    ///
    /// The path gets a leading `/` if it has none. Inserting at an existing
    /// path replaces the earlier asset. Directory metadata is routed to
    /// [`insert_dir`](Self::insert_dir) and `data` is ignored.
    pub fn insert(&mut self, raw_path: &str, info: FileInfo, data: &[u8]) -> Result<(), VfsError> {
        if info.is_dir() {
            return self.insert_dir(raw_path, info);
        }

        let path = PathResolver::resolve(raw_path)?;

        if info.size() != data.len() as u64 {
            return Err(VfsError::SizeMismatch {
                path,
                declared: info.size(),
                actual: data.len() as u64,
            });
        }

        if data.len() as u64 > self.max_file_size {
            return Err(VfsError::FileTooLarge {
                size: data.len() as u64,
                max: self.max_file_size,
            });
        }

        let new_total = self.arena.len() as u64 + data.len() as u64;
        if new_total > self.max_total_size {
            return Err(VfsError::FileTooLarge {
                size: new_total,
                max: self.max_total_size,
            });
        }

        let offset = self.arena.len();
        self.arena.extend_from_slice(data);

        self.index.insert(
            path,
            AssetEntry {
                offset,
                length: data.len(),
                info,
            },
        );

        Ok(())
    }

    /// Add an explicit directory entry. Directories carry no content.
    pub fn insert_dir(&mut self, raw_path: &str, info: FileInfo) -> Result<(), VfsError> {
        let path = PathResolver::resolve(raw_path)?;
        self.index.insert(
            path,
            AssetEntry {
                offset: self.arena.len(),
                length: 0,
                info,
            },
        );
        Ok(())
    }

    /// Freeze into an immutable filesystem
    pub fn build(self) -> FileSystem {
        FileSystem {
            arena: Arc::from(self.arena),
            index: self.index,
        }
    }
}

impl Default for FileSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// Open a path.
    ///
    /// An exact match yields a file handle with its own cursor. Otherwise
    /// every asset whose path starts with `raw_path` is gathered into a
    /// synthesized directory; if there are none the result is `NotExist`.
    pub fn open(&self, raw_path: &str) -> Result<File, VfsError> {
        let path = PathResolver::resolve(raw_path)?;

        match self.index.get(&path) {
            Some(entry) if entry.info.is_dir() => {
                let children = synth::synthesize(&self.index, &path).unwrap_or_default();
                Ok(File::Directory(Directory::new(entry.info.clone().with_files(children))))
            }
            Some(entry) => Ok(File::Regular(RegularFile::new(
                path.clone(),
                self.slice(entry),
                entry.info.clone(),
            ))),
            None => {
                let children = synth::synthesize(&self.index, &path)
                    .ok_or_else(|| VfsError::NotExist(path.clone()))?;
                let name = synth::base_name(&path);
                Ok(File::Directory(Directory::new(FileInfo::synthetic_dir(name, children))))
            }
        }
    }

    /// Content of an exact match as text, `None` on a miss or invalid path.
    /// Non-UTF-8 bytes are replaced.
    pub fn string(&self, raw_path: &str) -> Option<String> {
        self.bytes(raw_path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Content of an exact match as a byte slice (zero-copy)
    pub fn bytes(&self, raw_path: &str) -> Option<&[u8]> {
        let path = PathResolver::resolve(raw_path).ok()?;
        self.index
            .get(&path)
            .map(|entry| &self.arena[entry.offset..entry.offset + entry.length])
    }

    /// Whether an asset is stored at exactly this path
    pub fn contains(&self, raw_path: &str) -> bool {
        PathResolver::resolve(raw_path)
            .map(|path| self.index.contains_key(&path))
            .unwrap_or(false)
    }

    /// All stored paths, in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Get metadata for a stored asset without opening it
    pub fn get_entry(&self, raw_path: &str) -> Option<&AssetEntry> {
        let path = PathResolver::resolve(raw_path).ok()?;
        self.index.get(&path)
    }

    /// Get the total number of assets
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get the total arena size in bytes
    pub fn total_size(&self) -> usize {
        self.arena.len()
    }

    fn slice(&self, entry: &AssetEntry) -> AssetBytes {
        AssetBytes::new(Arc::clone(&self.arena), entry.offset, entry.length)
    }
}
