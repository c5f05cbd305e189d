//! JSON output

use super::registry::{FormatError, Formatter};
use crate::namedconf::ast::Results;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, results: &Results) -> Result<String, FormatError> {
        serde_json::to_string_pretty(results)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Node tree as pretty-printed JSON"
    }
}
