//! Artifact output.
//!
//! Writes the generated grammar and dictionary as `<name>.gram` and
//! `<name>.dic`. Both files are staged as temporary files in the output
//! directory and renamed into place, so a failed write never leaves a
//! truncated artifact or one file without the other. When a write over an
//! earlier pair fails halfway, the earlier grammar is put back so the pair
//! on disk still matches.
//!
//! Artifacts are created world-readable (`0644` on Unix) since the
//! recognizer loading them often runs as a different user.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::compiler::CompiledGrammar;
use crate::error::{GrammarError, Result};

/// Extension of generated grammar files.
pub const GRAMMAR_EXTENSION: &str = "gram";

/// Extension of generated dictionary files.
pub const DICTIONARY_EXTENSION: &str = "dic";

/// Permission bits applied to written artifacts.
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Paths of a written grammar/dictionary pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFiles {
    pub grammar_path: PathBuf,
    pub dictionary_path: PathBuf,
}

/// Writes compiled artifacts into an output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `<base_name>.gram` and `<base_name>.dic`.
    pub fn write(&self, base_name: &str, compiled: &CompiledGrammar) -> Result<GeneratedFiles> {
        validate_base_name(base_name)?;

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| GrammarError::write(&self.output_dir, e))?;

        let grammar_path = self
            .output_dir
            .join(format!("{base_name}.{GRAMMAR_EXTENSION}"));
        let dictionary_path = self
            .output_dir
            .join(format!("{base_name}.{DICTIONARY_EXTENSION}"));

        let grammar_file = self.stage(&grammar_path, &compiled.grammar_text)?;
        let dictionary_file = self.stage(&dictionary_path, &compiled.dictionary_text)?;
        let previous_grammar = self.backup(&grammar_path)?;

        grammar_file
            .persist(&grammar_path)
            .map_err(|e| GrammarError::write(&grammar_path, e.error))?;

        if let Err(e) = dictionary_file.persist(&dictionary_path) {
            restore(&grammar_path, previous_grammar);
            return Err(GrammarError::write(&dictionary_path, e.error));
        }

        tracing::info!(
            "Wrote grammar {:?} and dictionary {:?}",
            grammar_path,
            dictionary_path
        );

        Ok(GeneratedFiles {
            grammar_path,
            dictionary_path,
        })
    }

    /// Write `contents` to a temporary file next to `target`.
    fn stage(&self, target: &Path, contents: &str) -> Result<NamedTempFile> {
        let mut file =
            NamedTempFile::new_in(&self.output_dir).map_err(|e| GrammarError::write(target, e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| GrammarError::write(target, e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE))
                .map_err(|e| GrammarError::write(target, e))?;
        }
        Ok(file)
    }

    /// Copy an existing `target` aside so a failed write can put it back.
    fn backup(&self, target: &Path) -> Result<Option<NamedTempFile>> {
        if !target.is_file() {
            return Ok(None);
        }
        let backup =
            NamedTempFile::new_in(&self.output_dir).map_err(|e| GrammarError::write(target, e))?;
        std::fs::copy(target, backup.path()).map_err(|e| GrammarError::write(target, e))?;
        Ok(Some(backup))
    }
}

/// Undo a persisted grammar: put the earlier file back, or remove the new one.
fn restore(target: &Path, previous: Option<NamedTempFile>) {
    let outcome = match previous {
        Some(backup) => backup.persist(target).map(|_| ()).map_err(|e| e.error),
        None => std::fs::remove_file(target),
    };
    if let Err(e) = outcome {
        tracing::warn!(
            "Failed to roll back {:?} after incomplete write: {}",
            target,
            e
        );
    }
}

/// A base name must be a plain file name stem.
fn validate_base_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(GrammarError::InvalidFileName {
            name: name.to_string(),
        })
    }
}
