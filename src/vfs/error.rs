use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File does not exist: {0}")]
    NotExist(String),

    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Size mismatch for {path}: metadata says {declared} bytes, data has {actual}")]
    SizeMismatch {
        path: String,
        declared: u64,
        actual: u64,
    },
}

impl VfsError {
    /// Whether this is the conventional "no such file" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotExist(_))
    }
}

impl From<VfsError> for io::Error {
    fn from(err: VfsError) -> Self {
        let kind = match &err {
            VfsError::InvalidPath(_) => io::ErrorKind::InvalidInput,
            VfsError::NotExist(_) => io::ErrorKind::NotFound,
            VfsError::FileTooLarge { .. } | VfsError::SizeMismatch { .. } => {
                io::ErrorKind::InvalidData
            }
        };
        io::Error::new(kind, err)
    }
}
