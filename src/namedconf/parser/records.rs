//! Shaping raw statements into parse records
//!
//! Each raw statement becomes one [`ParseRecord`], bottom-up: the children of
//! a block are built into nodes (through the type registry) before the record
//! of the block itself is assembled.
//!
//! - `kw w1 .. wn;` gives `{node_type, value: [w1 .. wn]}`
//! - `kw [name [args..]] { .. };` gives `{node_type, name, args, value: body}`
//! - `controls { .. };` puts its body under an `inet-node` sub-record
//! - `inet addr [port n] allow { .. } keys { .. };` gives
//!   `{node_type, ipaddr, port, allow-section, keys-section}`

use crate::namedconf::ast::{
    build_node, Node, NodeError, NodeKind, NodeSequence, ParseRecord, RecordValue, UnknownNode,
    ValueList, Word,
};
use tracing::trace;

use super::intermediate_ast::{RawItem, RawStatement};

/// Build every statement of a block, in order.
pub fn build_sequence(statements: Vec<RawStatement>) -> Result<NodeSequence, NodeError> {
    Ok(NodeSequence::new(build_nodes(statements)?))
}

pub fn build_nodes(statements: Vec<RawStatement>) -> Result<Vec<Node>, NodeError> {
    statements.into_iter().map(build_statement).collect()
}

/// Statements without a registered kind become unknown nodes, whatever
/// their tag.
pub fn build_statement(statement: RawStatement) -> Result<Node, NodeError> {
    match statement_kind(&statement) {
        Some(_) => build_node(shape_record(statement)?),
        None => UnknownNode::from_record(shape_record(statement)?).map(Node::Unknown),
    }
}

/// The registered kind a statement is built as.
///
/// Quoted keywords are never looked up (`"key";` inside a list is just a
/// name). A block keyword used without a block, such as the `key "xfer";`
/// reference of an address match list, is not that block either.
pub fn statement_kind(statement: &RawStatement) -> Option<NodeKind> {
    if statement.keyword.quoted {
        return None;
    }
    let kind = NodeKind::from_keyword(statement.keyword.as_str())?;
    let has_block = statement
        .items
        .iter()
        .any(|item| matches!(item, RawItem::Block(_)));
    if kind.is_block() && !has_block {
        trace!(keyword = %statement.keyword.as_str(), "block keyword without a block");
        return None;
    }
    Some(kind)
}

/// Turn one raw statement into the record its node is built from.
pub fn shape_record(statement: RawStatement) -> Result<ParseRecord, NodeError> {
    let kind = statement_kind(&statement);
    let RawStatement { keyword, items } = statement;

    match kind {
        Some(NodeKind::Inet) => shape_inet(keyword, items),
        Some(NodeKind::Controls) => shape_controls(keyword, items),
        _ => shape_generic(keyword, kind, items),
    }
}

fn shape_generic(
    keyword: Word,
    kind: Option<NodeKind>,
    items: Vec<RawItem>,
) -> Result<ParseRecord, NodeError> {
    let mut words = Vec::new();
    let mut body = None;
    for item in items {
        match item {
            RawItem::Word(word) if body.is_none() => words.push(word),
            RawItem::Block(statements) if body.is_none() => body = Some(statements),
            _ => {
                return Err(NodeError::shape(
                    keyword.text,
                    "value",
                    "words followed by at most one block",
                ))
            }
        }
    }

    let mut record = ParseRecord::new(keyword.text);
    match body {
        None => record.insert("value", words),
        Some(statements) => {
            let mut words = words.into_iter();
            if let Some(name) = words.next() {
                record.insert("name", name);
            }
            let args: Vec<Word> = words.collect();
            if !args.is_empty() {
                record.insert("args", args);
            }
            let block_kind = kind.map_or(false, NodeKind::is_block);
            record.insert("value", shape_body(statements, block_kind)?);
        }
    }
    Ok(record)
}

/// Registered blocks always hold statements; other blocks made only of
/// single words become a value list.
fn shape_body(statements: Vec<RawStatement>, block_kind: bool) -> Result<RecordValue, NodeError> {
    let is_list = !block_kind
        && !statements.is_empty()
        && statements.iter().all(RawStatement::is_single_word);
    if is_list {
        Ok(RecordValue::List(value_list(statements)))
    } else {
        Ok(RecordValue::Nodes(build_sequence(statements)?))
    }
}

/// Entries all quoted (or all bare) share the list's quote; with mixed
/// quoting each entry keeps its own.
fn value_list(statements: Vec<RawStatement>) -> ValueList {
    let words: Vec<Word> = statements.into_iter().map(|s| s.keyword).collect();
    if words.iter().all(|w| w.quoted) {
        ValueList::new(words.into_iter().map(|w| w.text).collect(), Some('"'))
    } else if words.iter().all(|w| !w.quoted) {
        ValueList::new(words.into_iter().map(|w| w.text).collect(), None)
    } else {
        ValueList::new(words.iter().map(Word::to_string).collect(), None)
    }
}

fn shape_controls(keyword: Word, items: Vec<RawItem>) -> Result<ParseRecord, NodeError> {
    let mut items = items.into_iter();
    let statements = match (items.next(), items.next()) {
        (Some(RawItem::Block(statements)), None) => statements,
        _ => return Err(NodeError::shape(keyword.text, "inet-node", "a single block")),
    };
    let inet_node = ParseRecord::default().with("value", build_sequence(statements)?);
    Ok(ParseRecord::new(keyword.text).with("inet-node", inet_node))
}

fn shape_inet(keyword: Word, items: Vec<RawItem>) -> Result<ParseRecord, NodeError> {
    let node_type = keyword.text;
    let mut items = items.into_iter();
    let ipaddr = match items.next() {
        Some(RawItem::Word(word)) => word,
        _ => return Err(NodeError::missing(node_type, "ipaddr")),
    };
    let mut record = ParseRecord::new(node_type.as_str()).with("ipaddr", ipaddr);

    while let Some(item) = items.next() {
        let clause = match item {
            RawItem::Word(word) if !word.quoted => word.text,
            _ => {
                return Err(NodeError::shape(
                    node_type,
                    "value",
                    "port, allow and keys clauses",
                ))
            }
        };
        match (clause.as_str(), items.next()) {
            ("port", Some(RawItem::Word(port))) => {
                record.insert("port", ParseRecord::default().with("value", port));
            }
            ("allow", Some(RawItem::Block(statements))) => {
                let list = section_list(&node_type, "allow-section", statements)?;
                record.insert("allow-section", ParseRecord::default().with("value", list));
            }
            ("keys", Some(RawItem::Block(statements))) => {
                let list = section_list(&node_type, "keys-section", statements)?;
                record.insert("keys-section", ParseRecord::default().with("value", list));
            }
            _ => {
                return Err(NodeError::shape(
                    node_type,
                    clause.as_str(),
                    "port <n>, allow { .. } or keys { .. }",
                ))
            }
        }
    }
    Ok(record)
}

fn section_list(
    node_type: &str,
    section: &str,
    statements: Vec<RawStatement>,
) -> Result<ValueList, NodeError> {
    if statements.iter().all(RawStatement::is_single_word) {
        Ok(value_list(statements))
    } else {
        Err(NodeError::shape(node_type, section, "a list of single values"))
    }
}
