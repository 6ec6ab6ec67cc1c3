//! End-to-end generation: specification in, grammar and dictionary files out.

use std::path::{Path, PathBuf};

use super::GrammarCompiler;
use crate::error::Result;
use crate::phonetics::{PhoneticTable, DEFAULT_LOOKUP_LIST};
use crate::rules::{self, GrammarTree};
use crate::writer::{ArtifactWriter, GeneratedFiles};

/// Configuration for grammar generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the `.gram` and `.dic` files.
    pub output_dir: PathBuf,
    /// Public rule name; the file base name when unset.
    pub rule_name: Option<String>,
    /// Name of the phonetic lookup list inside the acoustic model directory.
    pub lookup_list_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            rule_name: None,
            lookup_list_name: DEFAULT_LOOKUP_LIST.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the public rule name.
    pub fn with_rule_name(mut self, rule_name: impl Into<String>) -> Self {
        self.rule_name = Some(rule_name.into());
        self
    }

    /// Set the lookup list file name.
    pub fn with_lookup_list_name(mut self, name: impl Into<String>) -> Self {
        self.lookup_list_name = name.into();
        self
    }
}

/// Parses, compiles and writes grammars.
#[derive(Debug, Clone, Default)]
pub struct GrammarGenerator {
    config: GeneratorConfig,
}

impl GrammarGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate `<file_base_name>.gram` and `.dic` from a JSON specification.
    ///
    /// The specification is fully validated before the acoustic model is
    /// touched; nothing is written unless both artifacts compile.
    pub fn generate(
        &self,
        spec: &str,
        file_base_name: &str,
        acoustic_model: &Path,
    ) -> Result<GeneratedFiles> {
        let tree = rules::parse(spec)?;
        self.generate_tree(&tree, file_base_name, acoustic_model)
    }

    /// Generate artifacts for an already built rule tree.
    pub fn generate_tree(
        &self,
        tree: &GrammarTree,
        file_base_name: &str,
        acoustic_model: &Path,
    ) -> Result<GeneratedFiles> {
        let table = PhoneticTable::load(acoustic_model, &self.config.lookup_list_name)?;
        let rule_name = self.config.rule_name.as_deref().unwrap_or(file_base_name);
        let compiled = GrammarCompiler::new(&table).compile(tree, rule_name)?;
        ArtifactWriter::new(&self.config.output_dir).write(file_base_name, &compiled)
    }
}

/// Generate grammar files with the default configuration.
pub fn generate_grammar(
    spec: &str,
    file_base_name: &str,
    acoustic_model: impl AsRef<Path>,
) -> Result<GeneratedFiles> {
    GrammarGenerator::default().generate(spec, file_base_name, acoustic_model.as_ref())
}
