//! Treeviz formatter for parsed documents
//!
//! One line per node, `<connector> <node_type>: <label>`, with children
//! indented under their block. Key and inet statements show their extracted
//! parts as children; value lists show one line per entry.

use super::registry::{FormatError, Formatter};
use crate::namedconf::ast::{AstNode, Node, Results, UnknownValue, ValueList};

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, results: &Results) -> Result<String, FormatError> {
        Ok(to_treeviz_str(results))
    }

    fn description(&self) -> &str {
        "Tree outline of node types and labels"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(results: &Results) -> String {
    let mut result = String::new();
    append_nodes(&mut result, results.nodes(), "");
    result
}

fn append_line(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(label, 30);
    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node_type));
    } else {
        result.push_str(&format!("{}{} {}: {}\n", prefix, connector, node_type, label));
    }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    append_line(
        result,
        prefix,
        is_last,
        node.node_type(),
        &node.display_label(),
    );
    let new_prefix = child_prefix(prefix, is_last);

    match node {
        Node::Key(key) => {
            for (i, part) in [&key.algorithm, &key.secret].into_iter().enumerate() {
                append_line(
                    result,
                    &new_prefix,
                    i == 1,
                    part.node_type(),
                    &part.display_label(),
                );
            }
        }
        Node::Inet(inet) => {
            append_list(result, "allow", &inet.allows, &new_prefix, false);
            append_list(result, "keys", &inet.keys, &new_prefix, true);
        }
        Node::Unknown(unknown) => {
            if let Some(UnknownValue::List(list)) = &unknown.value {
                append_entries(result, list, &new_prefix);
            }
        }
        _ => {}
    }

    if let Some(children) = node.children() {
        append_nodes(result, children.nodes(), &new_prefix);
    }
}

fn append_nodes(result: &mut String, nodes: &[Node], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(result, node, prefix, is_last);
    }
}

fn append_list(result: &mut String, name: &str, list: &ValueList, prefix: &str, is_last: bool) {
    append_line(result, prefix, is_last, name, &format!("{} entries", list.len()));
    append_entries(result, list, &child_prefix(prefix, is_last));
}

fn append_entries(result: &mut String, list: &ValueList, prefix: &str) {
    for (i, value) in list.iter().enumerate() {
        let connector = if i == list.len() - 1 { "└─" } else { "├─" };
        result.push_str(&format!("{}{} {}\n", prefix, connector, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedconf::parser::parse_document;

    #[test]
    fn test_flat_document() {
        let results = parse_document(
            "directory \"/var/na/named\"; aaa master; check-names slave ignore;",
        )
        .unwrap();
        assert_eq!(
            to_treeviz_str(&results),
            "├─ directory: /var/na/named\n├─ aaa: master\n└─ check-names: slave ignore\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        let results = parse_document(
            "zone \"example.com\" { type master; allow-update { none; }; };",
        )
        .unwrap();
        assert_eq!(
            to_treeviz_str(&results),
            "└─ zone: example.com\n  ├─ type: master\n  └─ allow-update\n    └─ none\n"
        );
    }

    #[test]
    fn test_key_parts() {
        let results =
            parse_document("key \"k\" { algorithm hmac-md5; secret \"abc\"; };").unwrap();
        assert_eq!(
            to_treeviz_str(&results),
            "└─ key: k\n  ├─ algorithm: hmac-md5\n  └─ secret: abc\n"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_treeviz_str(&Results::default()), "");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let results = parse_document(
            "include \"/a/very/long/path/that/keeps/going/named.conf\";",
        )
        .unwrap();
        assert_eq!(
            to_treeviz_str(&results),
            "└─ include: /a/very/long/path/that/keeps/g...\n"
        );
    }
}
