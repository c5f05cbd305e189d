//! Fallback node for statements the registry does not know

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::{ParseRecord, RawValue, RecordValue, Word};
use super::super::traits::AstNode;
use super::{NodeSequence, ValueList};

/// Payload of an unrecognized statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnknownValue {
    Word(Word),
    Nodes(NodeSequence),
    List(ValueList),
}

/// Any statement whose tag is not registered.
///
/// `node_type` is whatever the grammar supplied. Plain statements keep their
/// first word as `value` and the remaining words as `args`; block statements
/// keep their leading words as `name`/`args` and the block as `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownNode {
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Word>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Word>,
    pub value: Option<UnknownValue>,
}

impl UnknownNode {
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = record.node_type()?.to_string();
        let name = match record.get("name") {
            Some(_) => Some(record.first_value("name")?.clone()),
            None => None,
        };
        let mut args = match record.get("args") {
            Some(_) => record.words("args")?.to_vec(),
            None => Vec::new(),
        };

        let value = match record.take("value")? {
            RecordValue::Raw(raw) => {
                let mut words = match raw {
                    RawValue::Scalar(word) => vec![word],
                    RawValue::Sequence(words) => words,
                };
                if words.is_empty() {
                    None
                } else {
                    let first = words.remove(0);
                    args.extend(words);
                    Some(UnknownValue::Word(first))
                }
            }
            RecordValue::Nodes(nodes) => Some(UnknownValue::Nodes(nodes)),
            RecordValue::List(list) => Some(UnknownValue::List(list)),
            RecordValue::Record(_) => {
                return Err(NodeError::shape(node_type, "value", "a word or a block"))
            }
        };

        Ok(Self {
            node_type,
            name,
            args,
            value,
        })
    }

    /// Text of a word value.
    pub fn value_text(&self) -> Option<&str> {
        match &self.value {
            Some(UnknownValue::Word(word)) => Some(word.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&NodeSequence> {
        match &self.value {
            Some(UnknownValue::Nodes(nodes)) => Some(nodes),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<Vec<&str>> {
        self.value_text()
            .map(|value| vec![self.node_type.as_str(), value])
    }
}

impl AstNode for UnknownNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    // No class name to derive a keyword from, compare the tag directly.
    fn is_same_nodetype(&self, kind: &str) -> bool {
        self.node_type == kind
    }

    fn display_label(&self) -> String {
        let mut words: Vec<&str> = self.name.iter().map(Word::as_str).collect();
        words.extend(self.value_text());
        words.extend(self.args.iter().map(Word::as_str));
        words.join(" ")
    }
}

impl fmt::Display for UnknownNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_type)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        if let Some(UnknownValue::Word(word)) = &self.value {
            write!(f, " {word}")?;
        }
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        match &self.value {
            Some(UnknownValue::Nodes(nodes)) => write!(f, " {{\n{nodes}\n}}")?,
            Some(UnknownValue::List(list)) => write!(f, " {list}")?,
            _ => {}
        }
        f.write_str(";")
    }
}
