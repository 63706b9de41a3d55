use crate::vfs::FileInfo;
use chrono::{DateTime, Utc};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Something that can be embedded: a byte stream plus its metadata
pub trait AssetSource: Send + Sync {
    /// Metadata snapshot recorded in the generated module
    fn stat(&self) -> io::Result<FileInfo>;

    /// Fresh reader over the full content
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Asset held in memory
pub struct MemorySource {
    data: Vec<u8>,
    info: FileInfo,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>, mod_time: DateTime<Utc>) -> Self {
        let data = data.into();
        let info = FileInfo::new(name, data.len() as u64, mod_time, false);
        Self { data, info }
    }
}

impl AssetSource for MemorySource {
    fn stat(&self) -> io::Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.data.as_slice()))
    }
}

/// Asset read from disk when the bundle is built
pub struct DiskSource {
    path: PathBuf,
}

impl DiskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssetSource for DiskSource {
    fn stat(&self) -> io::Result<FileInfo> {
        let metadata = fs::metadata(&self.path)?;
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mod_time = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_default();
        let size = if metadata.is_dir() { 0 } else { metadata.len() };

        Ok(FileInfo::new(name, size, mod_time, metadata.is_dir()))
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}

/// Counts bytes as they pass through, so the generator can check the
/// stream against the recorded size.
pub(crate) struct CountingReader<R> {
    inner: R,
    count: u64,
}

impl<R: Read> CountingReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}
