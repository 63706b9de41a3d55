use super::FileInfo;

/// Location of one asset inside the filesystem arena
#[derive(Debug, Clone)]
pub struct AssetEntry {
    /// Byte offset into the arena
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
    /// Metadata captured when the asset was embedded
    pub info: FileInfo,
}
