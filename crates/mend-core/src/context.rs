//! Per-page working state.
//!
//! One `PageContext` is live at a time; it is created fresh for each source
//! file and owns that file's artifact paths (backup snapshot, fix-fragment
//! file, per-page audit report) for the duration of processing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MendError, MendResult};

/// Working state for a single page's remediation cycle.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// The source file being remediated.
    pub source_path: PathBuf,
    /// Page identifier: path relative to the pages root, forward slashes.
    pub page: String,
    /// Pristine pre-fix snapshot, written once per run and never overwritten.
    pub backup_path: PathBuf,
    /// Latest batch of LLM-proposed fix fragments.
    pub fragment_path: PathBuf,
    /// Per-page audit report written by the audit subprocess.
    pub report_path: PathBuf,
}

impl PageContext {
    /// Build the context for one source file. Artifacts mirror the file's
    /// position under the pages root into the backup root.
    pub fn new(pages_root: &Path, backup_root: &Path, source: &Path) -> Self {
        let relative = source.strip_prefix(pages_root).unwrap_or(source);
        let page = relative.to_string_lossy().replace('\\', "/");

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let backup_name = match source.extension() {
            Some(ext) => format!("{stem}_backup.{}", ext.to_string_lossy()),
            None => format!("{stem}_backup"),
        };

        let artifact_dir = match relative.parent() {
            Some(parent) => backup_root.join(parent),
            None => backup_root.to_path_buf(),
        };

        Self {
            source_path: source.to_path_buf(),
            page,
            backup_path: artifact_dir.join(backup_name),
            fragment_path: artifact_dir.join("fix-suggestions.txt"),
            report_path: artifact_dir.join("accessibility-report.json"),
        }
    }

    /// Create parent directories for every artifact. Safe to repeat.
    pub fn ensure_dirs(&self) -> MendResult<()> {
        for path in [&self.backup_path, &self.fragment_path, &self.report_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| MendError::io(parent, e))?;
            }
        }
        Ok(())
    }

    /// Write the pristine snapshot unless one already exists for this run.
    pub fn write_backup_once(&self, content: &str) -> MendResult<()> {
        if self.backup_path.exists() {
            return Ok(());
        }
        fs::write(&self.backup_path, content).map_err(|e| MendError::io(&self.backup_path, e))
    }

    /// Read the backup snapshot, if one has been written.
    pub fn read_backup(&self) -> MendResult<Option<String>> {
        if !self.backup_path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.backup_path)
            .map(Some)
            .map_err(|e| MendError::io(&self.backup_path, e))
    }

    /// Read the current source file content.
    pub fn read_source(&self) -> MendResult<String> {
        if !self.source_path.exists() {
            return Err(MendError::MissingFile {
                path: self.source_path.clone(),
            });
        }
        fs::read_to_string(&self.source_path).map_err(|e| MendError::io(&self.source_path, e))
    }

    /// Overwrite the source file with remediated content.
    pub fn write_source(&self, content: &str) -> MendResult<()> {
        fs::write(&self.source_path, content).map_err(|e| MendError::io(&self.source_path, e))
    }

    /// Persist the latest fix-fragment batch, replacing any previous batch.
    pub fn write_fragments(&self, content: &str) -> MendResult<()> {
        fs::write(&self.fragment_path, content).map_err(|e| MendError::io(&self.fragment_path, e))
    }

    /// Read the persisted fragment batch.
    pub fn read_fragments(&self) -> MendResult<String> {
        if !self.fragment_path.exists() {
            return Err(MendError::MissingFile {
                path: self.fragment_path.clone(),
            });
        }
        fs::read_to_string(&self.fragment_path).map_err(|e| MendError::io(&self.fragment_path, e))
    }
}
