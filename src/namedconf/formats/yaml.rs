//! YAML output

use super::registry::{FormatError, Formatter};
use crate::namedconf::ast::Results;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, results: &Results) -> Result<String, FormatError> {
        serde_yaml::to_string(results).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Node tree as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedconf::parser::parse_document;

    #[test]
    fn test_yaml_lists_top_level_nodes() {
        let results = parse_document("directory \"/var/named\";").unwrap();
        let text = YamlFormatter.serialize(&results).unwrap();
        assert_eq!(text, "- node_type: directory\n  value: /var/named\n");
    }
}
