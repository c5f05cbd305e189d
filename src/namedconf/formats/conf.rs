//! Canonical named.conf text

use super::registry::{FormatError, Formatter};
use crate::namedconf::ast::Results;

/// Renders the document the way the nodes write themselves back
pub struct ConfFormatter;

impl Formatter for ConfFormatter {
    fn name(&self) -> &str {
        "conf"
    }

    fn serialize(&self, results: &Results) -> Result<String, FormatError> {
        Ok(results.to_string())
    }

    fn description(&self) -> &str {
        "Canonical named.conf text"
    }
}
