//! Voxgram - voice-command grammar compiler
//!
//! Compiles a JSON rule specification into a JSGF grammar and a
//! pronunciation dictionary for a grammar-constrained recognizer.
//!
//! # Usage
//!
//! ```bash
//! voxgram commands.json --name robot --acoustic-model models/AcousticModelEnglish --out-dir build
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use voxgram::{
    compiler::{GeneratorConfig, GrammarCompiler, GrammarGenerator},
    error::{GrammarError, Result},
    grammar::Expansion,
    phonetics::{PhoneticTable, DEFAULT_LOOKUP_LIST},
    rules,
};

/// Voice-command grammar compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON rule specification
    #[arg(value_name = "SPEC_FILE")]
    spec_file: PathBuf,

    /// Base name of the generated .gram and .dic files
    #[arg(short, long)]
    name: String,

    /// Acoustic model directory containing the phonetic lookup list
    #[arg(short, long, value_name = "DIR")]
    acoustic_model: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Public rule name (defaults to the file base name)
    #[arg(long)]
    rule_name: Option<String>,

    /// Phonetic lookup list file name inside the acoustic model directory
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOOKUP_LIST)]
    lookup_list: String,

    /// Print the grammar and dictionary instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the generated file paths as JSON
    #[arg(long)]
    json: bool,

    /// Report whether an utterance is accepted by the rules (repeatable)
    #[arg(long, value_name = "UTTERANCE")]
    check: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a rule specification that failed validation.
const EXIT_INVALID_SPEC: u8 = 2;

/// Exit status for any other failure.
const EXIT_FAILURE: u8 = 1;

fn exit_status(err: &GrammarError) -> u8 {
    if err.is_validation() {
        EXIT_INVALID_SPEC
    } else {
        EXIT_FAILURE
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Parse and validate the specification
    let tree = rules::parse_file(&args.spec_file)?;

    if !args.check.is_empty() {
        let expansion = Expansion::from_group(&tree);
        for utterance in &args.check {
            let verdict = if expansion.accepts(utterance) {
                "accepted"
            } else {
                "rejected"
            };
            println!("{verdict}: {utterance}");
        }
    }

    let config = GeneratorConfig::new()
        .with_output_dir(&args.out_dir)
        .with_lookup_list_name(&args.lookup_list);
    let config = match &args.rule_name {
        Some(rule_name) => config.with_rule_name(rule_name),
        None => config,
    };

    if args.dry_run {
        let table = PhoneticTable::load(&args.acoustic_model, &config.lookup_list_name)?;
        let rule_name = config.rule_name.as_deref().unwrap_or(&args.name);
        let compiled = GrammarCompiler::new(&table).compile(&tree, rule_name)?;
        print!("{}", compiled.grammar_text);
        println!();
        print!("{}", compiled.dictionary_text);
        return Ok(());
    }

    // Compile and write
    let files = GrammarGenerator::new(config).generate_tree(&tree, &args.name, &args.acoustic_model)?;

    if args.json {
        match serde_json::to_string_pretty(&files) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("Failed to serialize output paths: {}", e),
        }
    } else {
        println!("{}", files.grammar_path.display());
        println!("{}", files.dictionary_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        let invalid = voxgram::rules::parse(r#"{"ThisWillBeSaidOnce": ["go"]}"#).unwrap_err();
        assert_eq!(exit_status(&invalid), EXIT_INVALID_SPEC);

        let io = GrammarError::write(
            std::path::Path::new("out/cmd.gram"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(exit_status(&io), EXIT_FAILURE);
    }
}
