//! Recursive discovery of rule and document files.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions picked up by the walker.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx", "mdc"];

/// Hidden directories that commonly hold rule files and are walked anyway.
const HIDDEN_ALLOWLIST: &[&str] = &[".cursor"];

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("scan root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk directory {0}: {1}")]
    Walk(String, #[source] walkdir::Error),
}

/// A discovered file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub absolute_path: PathBuf,
    /// Path relative to the scan root.
    pub relative_path: PathBuf,
}

#[derive(Debug)]
pub struct DocumentWalker {
    root: PathBuf,
    /// Folders to skip (relative to root).
    excluded_folders: Vec<PathBuf>,
}

impl DocumentWalker {
    pub fn new(root: &Path) -> Result<Self, WalkError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips `excluded_folders`.
    ///
    /// Exclusions may be relative to the root or absolute paths inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, WalkError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// All matching files under the root, sorted by relative path.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, WalkError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry =
                entry.map_err(|e| WalkError::Walk(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_document_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::debug!("found {} files under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let file_name = entry.file_name().to_string_lossy();
        let name: &str = &file_name;

        if name.starts_with('.') && !HIDDEN_ALLOWLIST.contains(&name) {
            return true;
        }

        if matches!(name, "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        if let Ok(relative) = entry.path().strip_prefix(&self.root) {
            return self.excluded_folders.iter().any(|ex| relative.starts_with(ex));
        }

        false
    }
}

fn is_document_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| DOCUMENT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}
