//! Document-level parser: every top-level statement up to end of input.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{statements, ParserError, TokenSpan};
use super::intermediate_ast::RawStatement;

pub(crate) fn document(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<RawStatement>, Error = ParserError> + Clone {
    statements(source).then_ignore(end())
}
