//! Error types for rule loading, tileset access, and image I/O

use std::fmt;
use std::path::PathBuf;

use crate::rules::TileIndex;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Rule document is missing a required field or has a malformed type
    InvalidDocument {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// `get_rule_by_index` (or an internal lookup derived from it) was called
    /// with a tile index absent from the rule set
    UnknownTile {
        /// The tile index that was not found
        index: TileIndex,
    },

    /// `get_tile_by_index` was called with an index outside `[1, cols*rows]`
    OutOfRange {
        /// The offending index
        index: TileIndex,
        /// The maximum valid index
        max: usize,
    },

    /// Failed to load a tileset image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to export a grid snapshot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A CLI or constructor parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDocument { reason } => write!(f, "invalid rule document: {reason}"),
            Self::UnknownTile { index } => write!(f, "unknown tile index {index}"),
            Self::OutOfRange { index, max } => {
                write!(f, "tile index {index} out of range (max: {max})")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

