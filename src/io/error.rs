//! Error taxonomy for report generation and the non-fatal diagnostics collector

use std::fmt;
use std::path::PathBuf;

/// Main error type for scanning, sampling, planning and rendering
#[derive(Debug)]
pub enum ReportError {
    /// Dataset root is missing or unreadable; fatal for the run
    RootNotFound {
        /// Root path that was probed
        path: PathBuf,
        /// Underlying I/O error when the directory exists but cannot be read
        source: Option<std::io::Error>,
    },

    /// Category directory holds no file with an allowed extension
    EmptyCategory {
        /// Category identifier
        category: String,
    },

    /// Failed to decode a single image file
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Every drawn image of a category failed to load
    InsufficientSamples {
        /// Category identifier
        category: String,
        /// Number of files that were drawn
        attempted: usize,
    },

    /// A requested category is not present under the dataset root
    UnknownCategory {
        /// Requested category identifier
        category: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a rendered artifact
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

    /// Global log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path, source } => match source {
                Some(source) => write!(
                    f,
                    "Dataset root '{}' is not readable: {source}",
                    path.display()
                ),
                None => write!(f, "Dataset root '{}' does not exist", path.display()),
            },
            Self::EmptyCategory { category } => {
                write!(f, "Category '{category}' contains no images")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InsufficientSamples {
                category,
                attempted,
            } => {
                write!(
                    f,
                    "Category '{category}' yielded no loadable images ({attempted} attempted)"
                )
            }
            Self::UnknownCategory { category } => {
                write!(f, "Category '{category}' not found under dataset root")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => write!(f, "Failed to initialize logging: {reason}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::RootNotFound {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

impl ReportError {
    /// Whether this error aborts the run rather than degrading the artifact
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::ImageExport { .. }
                | Self::Logging { .. }
        )
    }
}

/// Convenience type alias for report results
pub type Result<T> = std::result::Result<T, ReportError>;

impl From<image::ImageError> for ReportError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ReportError {
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
) -> ReportError {
    ReportError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Non-fatal failures gathered while scanning and sampling
///
/// Every recorded error is logged at WARN as it arrives, so a run that
/// ends with a partially filled grid still explains the gaps.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<ReportError>,
}

impl Diagnostics {
    /// Create an empty collector
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Log and keep a non-fatal error
    pub fn record(&mut self, error: ReportError) {
        tracing::warn!("{error}");
        self.entries.push(error);
    }

    /// Recorded errors in arrival order
    pub fn entries(&self) -> &[ReportError] {
        &self.entries
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every entry of `other` into this collector without logging again
    pub fn absorb(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}
