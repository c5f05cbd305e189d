//! Raw statement tree produced by the grammar
//!
//! The grammar only knows about words, blocks and terminators. Giving the
//! statements their meaning is left to [`records`](super::records).

use crate::namedconf::ast::Word;

/// `keyword item* ;`
#[derive(Debug, Clone, PartialEq)]
pub struct RawStatement {
    pub keyword: Word,
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawItem {
    Word(Word),
    Block(Vec<RawStatement>),
}

impl RawStatement {
    /// A statement made of a single word, like `any;` or `"rndc-key";`
    pub fn is_single_word(&self) -> bool {
        self.items.is_empty()
    }
}
