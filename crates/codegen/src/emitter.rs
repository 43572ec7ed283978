//! # File Emitter
//!
//! Writes generated files below an output directory. Existing files are left
//! untouched unless overwriting is enabled. The emitter records every path
//! it actually wrote; a fresh emitter is used for each generation run.

use sdlgen_core::{EngineError, EngineResult};
use std::path::PathBuf;

use crate::{GeneratedFile, GeneratorConfig};

/// Writes files and records what was written
#[derive(Debug, Clone)]
pub struct FileEmitter {
    base_dir: PathBuf,
    overwrite: bool,
    verbose: bool,
    written: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl FileEmitter {
    pub fn new(base_dir: impl Into<PathBuf>, overwrite: bool, verbose: bool) -> Self {
        Self {
            base_dir: base_dir.into(),
            overwrite,
            verbose,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Emitter for the configured output directory and flags
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.output_dir, config.overwrite, config.verbose)
    }

    /// Write one file. Returns `false` when an existing file was kept.
    pub fn emit(&mut self, file: &GeneratedFile) -> EngineResult<bool> {
        let full_path = self.base_dir.join(&file.path);

        if full_path.exists() && !self.overwrite {
            if self.verbose {
                tracing::info!(path = %full_path.display(), "Skipping existing file");
            } else {
                tracing::debug!(path = %full_path.display(), "Skipping existing file");
            }
            self.skipped.push(full_path);
            return Ok(false);
        }

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(&full_path, &file.content).map_err(|e| EngineError::FileWrite {
            path: full_path.clone(),
            message: e.to_string(),
        })?;

        if self.verbose {
            tracing::info!(path = %full_path.display(), bytes = file.content.len(), "Wrote file");
        } else {
            tracing::debug!(path = %full_path.display(), bytes = file.content.len(), "Wrote file");
        }
        self.written.push(full_path);
        Ok(true)
    }

    /// Write files in order, stopping at the first failure
    pub fn emit_all<'f>(&mut self, files: impl IntoIterator<Item = &'f GeneratedFile>) -> EngineResult<()> {
        for file in files {
            self.emit(file)?;
        }
        Ok(())
    }

    /// Consume the emitter, returning written and skipped paths
    pub fn finish(self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        (self.written, self.skipped)
    }
}

// ============================================================================
// Tests
// ============================================================================
