//! Directory-per-category dataset enumeration
//!
//! Every immediate subdirectory of the root is a category; its files with an
//! allowed extension are the category's images. Output order is canonical
//! (sorted by identifier, files sorted by path) so that grid positions only
//! depend on dataset contents and the seed.

use crate::dataset::taxon::{Taxon, plant_key};
use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{Diagnostics, ReportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One labeled class of the dataset, backed by a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Directory name, e.g. `Apple___healthy`
    pub id: String,
    /// Directory path
    pub path: PathBuf,
    /// Image files in sorted order
    pub images: Vec<PathBuf>,
}

impl Category {
    /// Plant/condition view of the identifier
    pub fn taxon(&self) -> Taxon<'_> {
        Taxon::parse(&self.id)
    }

    /// Group key used by the by-plant layout
    pub fn plant_key(&self) -> String {
        plant_key(&self.id)
    }
}

/// Result of scanning a dataset root
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Non-empty categories in canonical order
    pub categories: Vec<Category>,
    /// Excluded categories and unreadable directories
    pub diagnostics: Diagnostics,
}

impl ScanOutcome {
    /// Look up a category by identifier
    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

/// Enumerates categories and their images under a dataset root
#[derive(Debug, Clone)]
pub struct CategoryScanner {
    extensions: Vec<String>,
}

impl Default for CategoryScanner {
    fn default() -> Self {
        Self::new(&IMAGE_EXTENSIONS)
    }
}

impl CategoryScanner {
    /// Create a scanner accepting the given extensions (without dot, any case)
    pub fn new(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|ext| ext.to_lowercase()).collect(),
        }
    }

    /// Whether a path carries one of the allowed extensions
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }

    /// Enumerate the categories under `root`
    ///
    /// Categories without images and category directories that cannot be
    /// listed are recorded as diagnostics and left out.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RootNotFound`] if `root` is not an existing,
    /// readable directory
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        if !root.is_dir() {
            return Err(ReportError::RootNotFound {
                path: root.to_path_buf(),
                source: None,
            });
        }

        let entries = std::fs::read_dir(root).map_err(|e| ReportError::RootNotFound {
            path: root.to_path_buf(),
            source: Some(e),
        })?;

        let mut directories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReportError::RootNotFound {
                path: root.to_path_buf(),
                source: Some(e),
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => directories.push((name.to_string(), path)),
                None => tracing::debug!("Skipping non UTF-8 directory {}", path.display()),
            }
        }
        directories.sort_by(|a, b| a.0.cmp(&b.0));

        let mut outcome = ScanOutcome::default();
        for (id, path) in directories {
            let images = self.list_images(&path, &mut outcome.diagnostics);
            if images.is_empty() {
                outcome
                    .diagnostics
                    .record(ReportError::EmptyCategory { category: id });
                continue;
            }

            tracing::debug!("Category {id}: {} images", images.len());
            outcome.categories.push(Category { id, path, images });
        }

        tracing::info!(
            "Found {} categories under {}",
            outcome.categories.len(),
            root.display()
        );
        Ok(outcome)
    }

    fn list_images(&self, directory: &Path, diagnostics: &mut Diagnostics) -> Vec<PathBuf> {
        let mut images = Vec::new();
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            match entry {
                Ok(entry) => {
                    let path = entry.into_path();
                    if path.is_file() && self.accepts(&path) {
                        images.push(path);
                    }
                }
                Err(error) => diagnostics.record(ReportError::FileSystem {
                    path: error
                        .path()
                        .map_or_else(|| directory.to_path_buf(), Path::to_path_buf),
                    operation: "list category",
                    source: error.into(),
                }),
            }
        }
        images.sort();
        images
    }
}
