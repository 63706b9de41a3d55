use super::{FileInfo, VfsError};
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;

/// Shared view of one asset's bytes inside the arena
#[derive(Debug, Clone)]
pub struct AssetBytes {
    arena: Arc<[u8]>,
    offset: usize,
    length: usize,
}

impl AssetBytes {
    pub(crate) fn new(arena: Arc<[u8]>, offset: usize, length: usize) -> Self {
        Self {
            arena,
            offset,
            length,
        }
    }
}

impl AsRef<[u8]> for AssetBytes {
    fn as_ref(&self) -> &[u8] {
        &self.arena[self.offset..self.offset + self.length]
    }
}

/// Handle returned by [`FileSystem::open`](super::FileSystem::open)
#[derive(Debug, Clone)]
pub enum File {
    Regular(RegularFile),
    Directory(Directory),
}

impl File {
    /// Metadata snapshot, never fails
    pub fn stat(&self) -> &FileInfo {
        match self {
            File::Regular(file) => file.stat(),
            File::Directory(dir) => dir.stat(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, File::Directory(_))
    }

    /// List a directory handle's children.
    ///
    /// Plain files are not directories and report `NotExist`. `count` is
    /// ignored: the complete listing is returned.
    pub fn readdir(&self, count: usize) -> Result<&[FileInfo], VfsError> {
        match self {
            File::Regular(file) => Err(VfsError::NotExist(file.path().to_string())),
            File::Directory(dir) => Ok(dir.stat().readdir(count)),
        }
    }

    /// Nothing is held open, so this always succeeds
    pub fn close(self) -> Result<(), VfsError> {
        Ok(())
    }

    pub fn into_regular(self) -> Option<RegularFile> {
        match self {
            File::Regular(file) => Some(file),
            File::Directory(_) => None,
        }
    }

    pub fn into_directory(self) -> Option<Directory> {
        match self {
            File::Regular(_) => None,
            File::Directory(dir) => Some(dir),
        }
    }
}

/// An embedded file with its own read position
#[derive(Debug, Clone)]
pub struct RegularFile {
    path: String,
    cursor: Cursor<AssetBytes>,
    info: FileInfo,
}

impl RegularFile {
    pub(crate) fn new(path: String, bytes: AssetBytes, info: FileInfo) -> Self {
        Self {
            path,
            cursor: Cursor::new(bytes),
            info,
        }
    }

    /// Logical path this handle was opened at
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn stat(&self) -> &FileInfo {
        &self.info
    }

    /// Full content, independent of the read position
    pub fn data(&self) -> &[u8] {
        self.cursor.get_ref().as_ref()
    }

    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Read for RegularFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for RegularFile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl Seek for RegularFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

/// A directory handle: metadata and child listing, no byte content
#[derive(Debug, Clone)]
pub struct Directory {
    info: FileInfo,
}

impl Directory {
    pub(crate) fn new(info: FileInfo) -> Self {
        Self { info }
    }

    pub fn stat(&self) -> &FileInfo {
        &self.info
    }

    pub fn entries(&self) -> &[FileInfo] {
        self.info.readdir(0)
    }
}
