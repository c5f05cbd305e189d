//! Implementation of the named.conf lexer
//!
//! Convenience functions over the logos lexer. Unlike a plain token
//! iterator, unrecognized input is reported instead of dropped.

use crate::namedconf::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;
use thiserror::Error;

/// Input the lexer could not match
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input {text:?} at byte {}", span.start)]
pub struct LexError {
    pub span: Range<usize>,
    pub text: String,
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    text: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

/// Tokenize a string, keeping only the tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Strip the quotes of a quoted-string token and resolve backslash escapes
pub fn unquote(slice: &str) -> String {
    let inner = slice
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(slice);

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                text.push(escaped);
            }
        } else {
            text.push(c);
        }
    }
    text
}
