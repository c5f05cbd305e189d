//! Parser combinator functions for building the named.conf grammar.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::intermediate_ast::{RawItem, RawStatement};
use crate::namedconf::ast::Word;
use crate::namedconf::lexer::{unquote, Token};

/// Type alias for token with span
pub(crate) type TokenSpan = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token type, ignoring the span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

/// A bare or quoted word, with its text extracted from the source
pub(crate) fn word(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Word, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_word()).map(move |(t, span): TokenSpan| {
        let slice = &source.as_str()[span];
        match t {
            Token::QuotedString => Word::quoted(unquote(slice)),
            _ => Word::bare(slice),
        }
    })
}

/// Zero or more statements; blocks recurse into the same parser
pub(crate) fn statements(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<RawStatement>, Error = ParserError> + Clone {
    recursive(move |statements| {
        let block = token(Token::OpenBrace)
            .ignore_then(statements)
            .then_ignore(token(Token::CloseBrace))
            .map(RawItem::Block);
        let item = word(source.clone()).map(RawItem::Word).or(block);

        word(source.clone())
            .then(item.repeated())
            .then_ignore(token(Token::Semicolon))
            .map(|(keyword, items)| RawStatement { keyword, items })
            .repeated()
    })
}
