mod config;
mod source;


pub use config::GeneratorConfig;
pub use source::{AssetSource, DiskSource, MemorySource};

use crate::encoder::Encoder;
use crate::security::PathResolver;
use crate::vfs::FileInfo;
use anyhow::{bail, Context, Result};
use source::CountingReader;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

const HEADER: &str = "// Code generated by assetpack. DO NOT EDIT.";

/// Indent level of the byte literals inside the generated function
const DATA_INDENT: usize = 4;

/// A collection of assets and how to render them into a Rust module
pub struct Bundle {
    config: GeneratorConfig,
    assets: BTreeMap<String, Box<dyn AssetSource>>,
}

impl Bundle {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            assets: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Add an asset under a logical path. A later add at the same path wins.
    pub fn add(&mut self, logical_path: &str, source: impl AssetSource + 'static) -> Result<()> {
        let path = PathResolver::resolve(logical_path)?;
        log::debug!("[bundle] added {}", path);
        self.assets.insert(path, Box::new(source));
        Ok(())
    }

    /// Add a file from disk under a logical path
    pub fn add_file(&mut self, logical_path: &str, file: &Path) -> Result<()> {
        if !file.is_file() {
            bail!("Not a regular file: {}", file.display());
        }
        self.add(logical_path, DiskSource::new(file))
    }

    /// Add every file below `root`.
    ///
    /// Logical paths are the walked paths with `strip` removed from the
    /// front. Returns the number of files added.
    pub fn add_dir(&mut self, root: &Path, strip: &Path) -> Result<usize> {
        let mut added = 0;

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.context(format!("Failed to walk {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(strip).unwrap_or(path);
            let logical = PathResolver::sanitize(relative)
                .context(format!("Cannot embed {} (try --strip)", path.display()))?;

            self.add(&logical, DiskSource::new(path))?;
            added += 1;
        }

        Ok(added)
    }

    /// Number of assets collected
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Metadata for every asset, in path order
    pub fn infos(&self) -> Result<Vec<(String, FileInfo)>> {
        self.assets
            .iter()
            .map(|(path, source)| {
                let info = source
                    .stat()
                    .context(format!("Failed to stat asset: {}", path))?;
                Ok((path.clone(), info))
            })
            .collect()
    }

    /// Render the generated module into `out`
    pub fn build<W: Write>(&self, out: &mut W) -> Result<()> {
        self.config.validate()?;

        let crate_path = &self.config.crate_path;
        let encoder = Encoder::new()
            .block_width(self.config.block_width)
            .indent(DATA_INDENT);

        writeln!(out, "{}", HEADER)?;
        writeln!(out)?;
        if let Some(feature) = &self.config.cfg_feature {
            writeln!(out, "#[cfg(feature = \"{}\")]", feature)?;
        }
        writeln!(
            out,
            "{}fn {}() -> ::std::result::Result<{cp}::FileSystem, {cp}::VfsError> {{",
            if self.config.public { "pub " } else { "" },
            self.config.function,
            cp = crate_path,
        )?;
        writeln!(
            out,
            "    let mut builder = {}::FileSystemBuilder::new()",
            crate_path
        )?;
        writeln!(out, "        .max_file_size(u64::MAX)")?;
        writeln!(out, "        .max_total_size(u64::MAX);")?;

        for (path, source) in &self.assets {
            self.render_asset(out, &encoder, path, source.as_ref())
                .context(format!("Failed to embed asset: {}", path))?;
        }

        writeln!(out, "    Ok(builder.build())")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Render into memory, then write to `path`. Nothing is written if any
    /// asset fails to encode.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut rendered = Vec::new();
        self.build(&mut rendered)?;

        fs::write(path, &rendered)
            .context(format!("Failed to write output file: {}", path.display()))?;

        log::info!(
            "[bundle] wrote {} assets ({} bytes of source) to {}",
            self.assets.len(),
            rendered.len(),
            path.display()
        );
        Ok(())
    }

    fn render_asset<W: Write>(
        &self,
        out: &mut W,
        encoder: &Encoder,
        path: &str,
        source: &dyn AssetSource,
    ) -> Result<()> {
        let crate_path = &self.config.crate_path;
        let info = source.stat().context("Failed to read metadata")?;
        let mod_time = info.mod_time_nanos().unwrap_or_else(|| {
            log::warn!("[bundle] {}: modification time out of range, using epoch", path);
            0
        });

        if info.is_dir() {
            writeln!(
                out,
                "    builder.insert_dir({:?}, {}::FileInfo::dir({:?}, {}))?;",
                path,
                crate_path,
                info.name(),
                mod_time
            )?;
            return Ok(());
        }

        let mut reader = CountingReader::new(source.open().context("Failed to open")?);
        let literal = encoder.encode(&mut reader).context("Failed to read")?;
        if reader.count() != info.size() {
            bail!(
                "Size changed while reading: expected {} bytes, read {}",
                info.size(),
                reader.count()
            );
        }

        writeln!(out, "    builder.insert(")?;
        writeln!(out, "        {:?},", path)?;
        writeln!(
            out,
            "        {}::FileInfo::file({:?}, {}, {}),",
            crate_path,
            info.name(),
            info.size(),
            mod_time
        )?;
        if literal.is_empty() {
            writeln!(out, "        &[],")?;
        } else {
            let indent = "    ".repeat(DATA_INDENT);
            writeln!(out, "        &[")?;
            writeln!(out, "{}{}", indent, literal.trim_end())?;
            writeln!(out, "        ],")?;
        }
        writeln!(out, "    )?;")?;

        log::debug!("[bundle] encoded {} ({} bytes)", path, info.size());
        Ok(())
    }
}
