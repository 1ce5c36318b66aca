use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::config::ResolverConfig;
use crate::resolver::{resolve, Resolution};
use crate::AlmanacError;

/// Error shown to the command line user: a message with an optional cause.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CliError {
    pub msg: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Suggestion for the read failures an almanac file can hit.
fn read_suggestion(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check the file's read permissions.",
        io::ErrorKind::InvalidData => "The almanac must be UTF-8 text.",
        _ => "Check that the file is readable.",
    }
}

/// Wrap a read failure on `path` with a suggestion.
pub fn read_cli_error(path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format!(
            "Error reading almanac '{}': {}. {}",
            path.display(),
            err,
            read_suggestion(err.kind())
        ),
        source: Some(Box::new(err)),
    }
}

/// Convert a resolver error into a CLI error with a hint.
pub fn almanac_cli_error(path: &Path, err: AlmanacError) -> CliError {
    match err {
        AlmanacError::Io(io) => read_cli_error(path, io),
        other => CliError {
            msg: format!("{}: {}", path.display(), cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for an almanac error variant.
pub fn cli_hint(err: &AlmanacError) -> String {
    use AlmanacError::*;
    match err {
        Parse { line, reason } => {
            format!("line {line}: {reason}. Rule lines need three integers.")
        }
        Overflow { .. } => format!("{err}. Check the rule's destination start."),
        EmptyInput => "no seeds found. The first line must look like 'seeds: 1 2 3'.".into(),
        VerificationMismatch { .. } => format!("{err}. This is a bug."),
        Io(io) => format!("{io}"),
    }
}

/// Open an almanac file and resolve it. The file is closed on every
/// return path, including resolution failures.
pub fn resolve_path(path: &Path, config: &ResolverConfig) -> Result<Resolution, AlmanacError> {
    let file = File::open(path)?;
    resolve(BufReader::new(file), config)
}
