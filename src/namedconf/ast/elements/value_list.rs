//! Quoting-aware list of scalar values

use crate::namedconf::ast::record::write_quoted;
use serde::Serialize;
use std::fmt;

/// Scalar entries of a braced list such as `allow { 127.0.0.1; }` or
/// `keys { "rndc-key"; }`. Every entry is written wrapped in `quote`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueList {
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<char>,
}

impl ValueList {
    pub fn new(values: Vec<String>, quote: Option<char>) -> Self {
        Self { values, quote }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return f.write_str("{\n}");
        }
        f.write_str("{\n")?;
        for value in &self.values {
            match self.quote {
                Some('"') => write_quoted(f, value)?,
                Some(q) => write!(f, "{q}{value}{q}")?,
                None => f.write_str(value)?,
            }
            f.write_str(";\n")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_list() {
        let list = ValueList::new(vec!["127.0.0.1".into(), "::1".into()], None);
        assert_eq!(list.to_string(), "{\n127.0.0.1;\n::1;\n}");
    }

    #[test]
    fn test_quoted_list() {
        let list = ValueList::new(vec!["rndc-key".into()], Some('"'));
        assert_eq!(list.to_string(), "{\n\"rndc-key\";\n}");
    }

    #[test]
    fn test_quoted_entries_are_escaped() {
        let list = ValueList::new(vec!["a\"b".into(), "c\\d".into()], Some('"'));
        assert_eq!(list.to_string(), "{\n\"a\\\"b\";\n\"c\\\\d\";\n}");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(ValueList::default().to_string(), "{\n}");
    }
}
