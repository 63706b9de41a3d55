use crate::vfs::VfsError;
use std::path::{Component, Path, MAIN_SEPARATOR};

/// Validates paths before they reach the virtual filesystem index.
pub struct PathResolver;

impl PathResolver {
    /// Validate a request path and normalize it to an index key.
    ///
    /// Rejects NUL bytes and, on platforms whose native separator is not
    /// `/`, the native separator. Accepted paths get a leading `/` if they
    /// lack one. `.` and `..` segments are left alone: the index is flat, so
    /// they can only ever miss.
    pub fn resolve(raw_path: &str) -> Result<String, VfsError> {
        if raw_path.contains('\0') {
            return Err(VfsError::InvalidPath(format!(
                "NUL byte in path: {:?}",
                raw_path
            )));
        }

        if Self::has_reserved_separator(raw_path) {
            return Err(VfsError::InvalidPath(format!(
                "Reserved separator {:?} in path: {}",
                MAIN_SEPARATOR, raw_path
            )));
        }

        if raw_path.starts_with('/') {
            Ok(raw_path.to_string())
        } else {
            Ok(format!("/{}", raw_path))
        }
    }

    /// Turn a path relative to an embed root into a logical index key.
    ///
    /// Rejects absolute paths, parent traversal and non-UTF-8 components.
    /// `.` components are dropped. The result always starts with `/`.
    pub fn sanitize(relative: &Path) -> Result<String, VfsError> {
        let mut components = Vec::new();

        for component in relative.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(VfsError::InvalidPath(format!(
                        "Absolute path not allowed: {}",
                        relative.display()
                    )));
                }
                Component::ParentDir => {
                    return Err(VfsError::InvalidPath(format!(
                        "Parent directory traversal not allowed: {}",
                        relative.display()
                    )));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    let part_str = part.to_str().ok_or_else(|| {
                        VfsError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", part))
                    })?;
                    components.push(part_str);
                }
            }
        }

        if components.is_empty() {
            return Err(VfsError::InvalidPath(format!(
                "No valid components: {}",
                relative.display()
            )));
        }

        Self::resolve(&format!("/{}", components.join("/")))
    }

    fn has_reserved_separator(raw_path: &str) -> bool {
        MAIN_SEPARATOR != '/' && raw_path.contains(MAIN_SEPARATOR)
    }
}
