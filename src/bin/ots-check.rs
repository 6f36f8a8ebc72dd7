//! OTS document checker
//!
//! Parses each file, resolving includes relative to it, and reports
//! duplicate identifiers.
//!
//! Usage: ots-check <file.xml>...

use std::env;
use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use log::{error, info, warn};
use otsxml::{Document, ValidationResult, validate_identifiers};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("Usage: ots-check <file.xml>...");
        process::exit(2);
    }

    for file in &files {
        if let Err(e) = check(Path::new(file)) {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}

fn check(path: &Path) -> Result<()> {
    let document = Document::from_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    info!(
        "{}: {} definition sections, {} controllers, {} OD matrices, {} replications",
        path.display(),
        document.definitions.len(),
        document.controllers.len(),
        document.ods.len(),
        document.run.number_replications
    );

    match validate_identifiers(&document) {
        ValidationResult::Valid(()) => Ok(()),
        ValidationResult::Warnings((), warnings) => {
            for warning in &warnings {
                warn!("{}: {}", path.display(), warning);
            }
            Ok(())
        }
        ValidationResult::Invalid(warnings, errors) => {
            for warning in &warnings {
                warn!("{}: {}", path.display(), warning);
            }
            for message in &errors {
                error!("{}: {}", path.display(), message);
            }
            bail!("{} has {} identifier errors", path.display(), errors.len())
        }
    }
}
