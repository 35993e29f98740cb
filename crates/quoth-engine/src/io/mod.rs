use crate::models::DocMetadata;
use crate::parsing::extract_metadata;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// A markdown file's text together with the metadata extracted from it.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub text: String,
    pub metadata: DocMetadata,
}

/// Read a file by absolute or working-directory-relative path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Resolve a user supplied path: absolute paths are kept, relative ones are
/// joined onto `notes_root` when one is given.
pub fn locate(path: &str, notes_root: Option<&Path>) -> PathBuf {
    let candidate = Path::new(path);
    match notes_root {
        Some(root) if candidate.is_relative() => RelativePath::new(path).to_path(root),
        _ => candidate.to_path_buf(),
    }
}

/// Read a file and extract its outline in one step
pub fn load_document(path: &Path) -> Result<LoadedDocument, IoError> {
    let text = read_path(path)?;
    let metadata = extract_metadata(&text);
    Ok(LoadedDocument {
        path: path.to_path_buf(),
        text,
        metadata,
    })
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
