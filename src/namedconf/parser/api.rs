//! Public API for the parser.

use chumsky::prelude::*;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::combinators::{ParserError, TokenSpan};
use super::document::document;
use super::intermediate_ast::RawStatement;
use super::records::build_nodes;
use crate::namedconf::ast::{NodeError, Results};
use crate::namedconf::lexer::{tokenize_with_spans, LexError};

/// Why a document could not be turned into [`Results`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("syntax error: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Syntax(Vec<SyntaxError>),

    #[error(transparent)]
    Node(#[from] NodeError),
}

/// One grammar failure, located in the source text (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl SyntaxError {
    fn from_parser_error(source: &str, error: &ParserError) -> Self {
        let offset = error
            .found()
            .map(|(_, span)| span.start)
            .unwrap_or(source.len());
        let (line, column) = line_column(source, offset);
        let found = match error.found() {
            Some((_, span)) => format!("`{}`", &source[span.clone()]),
            None => "end of input".to_string(),
        };
        let message = match error.reason() {
            chumsky::error::SimpleReason::Unclosed { .. } => {
                format!("unclosed block, found {found}")
            }
            chumsky::error::SimpleReason::Custom(msg) => msg.clone(),
            chumsky::error::SimpleReason::Unexpected => format!("unexpected {found}"),
        };
        Self {
            line,
            column,
            message,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}

/// Parse with source text, stopping before any node is built.
pub fn parse_statements(source: &str) -> Result<Vec<RawStatement>, Error> {
    let tokens_with_spans: Vec<TokenSpan> = tokenize_with_spans(source)?;
    document(Arc::new(source.to_string()))
        .parse(tokens_with_spans)
        .map_err(|errors| {
            Error::Syntax(
                errors
                    .iter()
                    .map(|error| SyntaxError::from_parser_error(source, error))
                    .collect(),
            )
        })
}

/// Main entry point: parse a complete named.conf document.
pub fn parse_document(source: &str) -> Result<Results, Error> {
    let statements = parse_statements(source)?;
    let results = Results::new(build_nodes(statements)?);
    debug!(nodes = results.len(), "parsed document");
    Ok(results)
}
