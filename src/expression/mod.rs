//! Expression model, parsing and canonicalization

mod ast;
mod canonical;
mod display;
mod errors;
mod eval;
mod parser;
mod tokenizer;

pub use ast::{Binding, Expression, Operator};
pub use canonical::{
    CanonicalExpr, CanonicalKind, Factor, Sign, Term, canonicalize, canonicalize_str, normalize,
};
pub use errors::{ExpressionError, ParseError, TokenizeError};
pub use eval::apply_exact;
pub use parser::{parse, parse_tokens};
pub use tokenizer::{Token, tokenize};
