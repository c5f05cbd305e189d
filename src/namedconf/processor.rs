//! File processing API for named.conf documents
//!
//! Parses a document and renders it with one of the registered output
//! formats (see [`FormatRegistry`]).
//!
//! # Sample Sources
//!
//! The `samples` module gives access to the verified sample documents under
//! `docs/samples`. Tests should load their input from there instead of
//! writing configuration text inline.
//!
//! ```rust,ignore
//! use namedconf::namedconf::processor::samples::NamedConfSources;
//!
//! let content = NamedConfSources::get_string("020-zones.conf").unwrap();
//! let outline = NamedConfSources::get_processed("020-zones.conf", "treeviz").unwrap();
//! ```

use crate::namedconf::ast::Results;
use crate::namedconf::formats::{FormatError, FormatRegistry};
use crate::namedconf::parser::{self, parse_document};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document: {0}")]
    Parse(#[from] parser::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("sample '{0}' is not available")]
    SampleNotFound(String),
}

/// Read a file into a string
pub fn read_source<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.display().to_string(),
        source,
    })
}

/// Parse a file without rendering it
pub fn parse_file<P: AsRef<Path>>(file_path: P) -> Result<Results, ProcessingError> {
    let content = read_source(file_path)?;
    Ok(parse_document(&content)?)
}

/// Parse `source` and render it in `format`
pub fn process_str(source: &str, format: &str) -> Result<String, ProcessingError> {
    let registry = FormatRegistry::default();
    // Unknown formats fail before any parsing happens.
    if !registry.has(format) {
        return Err(FormatError::FormatNotFound(format.to_string()).into());
    }
    let results = parse_document(source)?;
    Ok(registry.serialize(&results, format)?)
}

/// Process a named.conf file into the given output format
pub fn process_file<P: AsRef<Path>>(file_path: P, format: &str) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    debug!(path = %file_path.display(), format, "processing file");
    let content = read_source(file_path)?;
    process_str(&content, format)
}

/// Render only the top-level statements matching `kind`
pub fn search_str(source: &str, kind: &str, format: &str) -> Result<String, ProcessingError> {
    let registry = FormatRegistry::default();
    let results = parse_document(source)?;
    let matches = Results::new(results.search(kind).into_iter().cloned().collect());
    debug!(kind, found = matches.len(), "search");
    Ok(registry.serialize(&matches, format)?)
}

pub fn search_file<P: AsRef<Path>>(
    file_path: P,
    kind: &str,
    format: &str,
) -> Result<String, ProcessingError> {
    let content = read_source(file_path)?;
    search_str(&content, kind, format)
}

/// Names of every registered output format
pub fn available_formats() -> Vec<String> {
    FormatRegistry::default().list_formats()
}

/// Sample sources module for accessing verified named.conf test files
pub mod samples {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-statements.conf",
        "010-options.conf",
        "020-zones.conf",
        "030-keys-controls.conf",
        "040-acl.conf",
        "050-unknown-blocks.conf",
        "060-full.conf",
        "070-key-references.conf",
    ];

    const SAMPLES_DIR: &str = "docs/samples";

    /// Main interface for accessing sample files
    pub struct NamedConfSources;

    impl NamedConfSources {
        fn sample_path(filename: &str) -> String {
            format!("{}/{}/{}", env!("CARGO_MANIFEST_DIR"), SAMPLES_DIR, filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if AVAILABLE_SAMPLES.contains(&filename) {
                Ok(())
            } else {
                Err(ProcessingError::SampleNotFound(filename.to_string()))
            }
        }

        /// Raw sample text
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            read_source(Self::sample_path(filename))
        }

        /// Parsed sample
        pub fn get_results(filename: &str) -> Result<Results, ProcessingError> {
            Self::validate_sample(filename)?;
            parse_file(Self::sample_path(filename))
        }

        /// Sample rendered with the named output format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            process_file(Self::sample_path(filename), format)
        }

        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

}
