//! Embed static files into generated Rust source and serve them back through
//! a read-only, path-addressed virtual filesystem.
//!
//! At build time a [`Bundle`] encodes each asset as a block of byte literals
//! and renders a constructor function. At run time that function returns a
//! [`FileSystem`], which answers [`FileSystem::open`] with either a readable
//! [`RegularFile`] or a synthesized [`Directory`].

// Public API exports
pub mod encoder;
pub mod generator;
pub mod security;
pub mod vfs;

// Re-export main types for convenience
pub use encoder::{decode, encode, DecodeError, Encoder, DEFAULT_BLOCK_WIDTH};
pub use generator::{AssetSource, Bundle, DiskSource, GeneratorConfig, MemorySource};
pub use security::PathResolver;
pub use vfs::{
    AssetBytes, AssetEntry, Directory, File, FileInfo, FileSystem, FileSystemBuilder,
    RegularFile, VfsError,
};
