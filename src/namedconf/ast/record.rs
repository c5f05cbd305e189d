//! Structured parse records
//!
//! A [`ParseRecord`] is what the grammar hands to the node model for each
//! statement: a key-addressable bag of fields (`node_type`, `value`, `name`,
//! `ipaddr`, sub-records such as `allow-section`, ...). Child statements of a
//! block arrive already built, as a [`NodeSequence`] or a [`ValueList`].

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::elements::{NodeSequence, ValueList};
use super::error::NodeError;

/// A single word of input, remembering whether it was written quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub text: String,
    pub quoted: bool,
}

impl Word {
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// Serialized as its text; quoting only matters to the conf rendering.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write_quoted(f, &self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// Write `text` wrapped in double quotes, escaping quotes and backslashes.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            write!(f, "\\{c}")?;
        } else {
            write!(f, "{c}")?;
        }
    }
    f.write_str("\"")
}

/// A raw field as the grammar produces it: a scalar or a short ordered
/// sequence of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Scalar(Word),
    Sequence(Vec<Word>),
}

impl RawValue {
    /// First-value detection: the scalar itself, or the first element of a
    /// sequence.
    pub fn first(&self) -> Option<&Word> {
        match self {
            RawValue::Scalar(word) => Some(word),
            RawValue::Sequence(words) => words.first(),
        }
    }

    pub fn words(&self) -> &[Word] {
        match self {
            RawValue::Scalar(word) => std::slice::from_ref(word),
            RawValue::Sequence(words) => words,
        }
    }
}

/// Any value a record field can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Raw(RawValue),
    Nodes(NodeSequence),
    List(ValueList),
    Record(ParseRecord),
}

impl RecordValue {
    fn kind(&self) -> &'static str {
        match self {
            RecordValue::Raw(_) => "a word",
            RecordValue::Nodes(_) => "a statement block",
            RecordValue::List(_) => "a value list",
            RecordValue::Record(_) => "a sub-record",
        }
    }
}

impl From<Word> for RecordValue {
    fn from(word: Word) -> Self {
        RecordValue::Raw(RawValue::Scalar(word))
    }
}

impl From<&str> for RecordValue {
    fn from(text: &str) -> Self {
        RecordValue::Raw(RawValue::Scalar(Word::bare(text)))
    }
}

impl From<Vec<Word>> for RecordValue {
    fn from(words: Vec<Word>) -> Self {
        RecordValue::Raw(RawValue::Sequence(words))
    }
}

impl From<RawValue> for RecordValue {
    fn from(raw: RawValue) -> Self {
        RecordValue::Raw(raw)
    }
}

impl From<NodeSequence> for RecordValue {
    fn from(nodes: NodeSequence) -> Self {
        RecordValue::Nodes(nodes)
    }
}

impl From<ValueList> for RecordValue {
    fn from(list: ValueList) -> Self {
        RecordValue::List(list)
    }
}

impl From<ParseRecord> for RecordValue {
    fn from(record: ParseRecord) -> Self {
        RecordValue::Record(record)
    }
}

/// Key-addressable record for one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseRecord {
    fields: BTreeMap<String, RecordValue>,
}

impl ParseRecord {
    /// A record tagged with `node_type`.
    pub fn new(node_type: impl Into<String>) -> Self {
        let mut record = Self::default();
        record.insert("node_type", Word::bare(node_type));
        record
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RecordValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The statement tag.
    pub fn node_type(&self) -> Result<&str, NodeError> {
        match self.fields.get("node_type") {
            Some(RecordValue::Raw(raw)) => raw
                .first()
                .map(Word::as_str)
                .ok_or_else(|| NodeError::missing("<unknown>", "node_type")),
            Some(other) => Err(NodeError::shape("<unknown>", "node_type", other.kind())),
            None => Err(NodeError::missing("<unknown>", "node_type")),
        }
    }

    fn tag(&self) -> String {
        self.node_type().unwrap_or("<unknown>").to_string()
    }

    /// Remove and return a required field.
    pub fn take(&mut self, key: &str) -> Result<RecordValue, NodeError> {
        match self.fields.remove(key) {
            Some(value) => Ok(value),
            None => Err(NodeError::missing(self.tag(), key)),
        }
    }

    /// Words of a raw field, in order.
    pub fn words(&self, key: &str) -> Result<&[Word], NodeError> {
        match self.fields.get(key) {
            Some(RecordValue::Raw(raw)) => Ok(raw.words()),
            Some(_) => Err(NodeError::shape(self.tag(), key, "a word")),
            None => Err(NodeError::missing(self.tag(), key)),
        }
    }

    /// First-value detection applied to a raw field.
    pub fn first_value(&self, key: &str) -> Result<&Word, NodeError> {
        self.words(key)?
            .first()
            .ok_or_else(|| NodeError::missing(self.tag(), key))
    }

    pub fn take_nodes(&mut self, key: &str) -> Result<NodeSequence, NodeError> {
        match self.take(key)? {
            RecordValue::Nodes(nodes) => Ok(nodes),
            _ => Err(NodeError::shape(self.tag(), key, "a statement block")),
        }
    }

    pub fn take_list(&mut self, key: &str) -> Result<ValueList, NodeError> {
        match self.take(key)? {
            RecordValue::List(list) => Ok(list),
            _ => Err(NodeError::shape(self.tag(), key, "a value list")),
        }
    }

    pub fn take_record(&mut self, key: &str) -> Result<ParseRecord, NodeError> {
        match self.take(key)? {
            RecordValue::Record(record) => Ok(record),
            _ => Err(NodeError::shape(self.tag(), key, "a sub-record")),
        }
    }
}
