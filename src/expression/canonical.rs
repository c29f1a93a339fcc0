//! Canonical form of an arithmetic expression.
//!
//! Chains of `+`/`-` collapse into a signed, sorted list of terms and chains of
//! `*`/`/` into a sorted list of factors, so that reordering commutative
//! operands or re-associating a chain does not change the result. The
//! printed form of a canonical tree is its signature: two expressions are
//! the same solution iff their signatures are equal.
//!
//! Multiplication is never distributed over addition.

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;
use crate::expression::parser::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn negate(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub sign: Sign,
    pub node: CanonicalExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub inverse: bool,
    pub node: CanonicalExpr,
}

impl Factor {
    fn symbol(&self) -> char {
        if self.inverse { '/' } else { '*' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalKind {
    Number(i64),
    Sum(Vec<Term>),
    Product(Vec<Factor>),
}

/// A canonical node together with its signature, computed once on construction.
///
/// A `Sum` never holds another `Sum` as a direct child and a `Product` never
/// holds another `Product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalExpr {
    kind: CanonicalKind,
    signature: String,
}

impl CanonicalExpr {
    fn number(value: i64) -> Self {
        Self {
            kind: CanonicalKind::Number(value),
            signature: value.to_string(),
        }
    }

    fn sum(mut terms: Vec<Term>) -> Self {
        terms.sort_by(compare_terms);
        let body: Vec<String> = terms
            .iter()
            .map(|t| format!("{}{}", t.sign.symbol(), t.node.signature))
            .collect();
        Self {
            signature: format!("Sum({})", body.join(",")),
            kind: CanonicalKind::Sum(terms),
        }
    }

    fn product(factors: Vec<Factor>) -> Self {
        let mut factors: Vec<Factor> = factors
            .into_iter()
            .map(|f| Factor {
                inverse: f.inverse,
                node: f.node.orient_difference(),
            })
            .collect();
        factors.sort_by(compare_factors);
        let body: Vec<String> = factors
            .iter()
            .map(|f| format!("{}{}", f.symbol(), f.node.signature))
            .collect();
        Self {
            signature: format!("Prod({})", body.join(",")),
            kind: CanonicalKind::Product(factors),
        }
    }

    /// Pick the lexicographically smaller orientation of a plain difference `A - B`.
    ///
    /// The enclosing product does not receive a compensating sign, so a
    /// flipped factor may change the numeric value of the product.
    fn orient_difference(self) -> Self {
        let flipped = match &self.kind {
            CanonicalKind::Sum(terms) => match terms.as_slice() {
                [a, b] if a.sign != b.sign => {
                    let (pos, neg) = if a.sign == Sign::Positive { (a, b) } else { (b, a) };
                    Some(Self::sum(vec![
                        Term {
                            sign: Sign::Positive,
                            node: neg.node.clone(),
                        },
                        Term {
                            sign: Sign::Negative,
                            node: pos.node.clone(),
                        },
                    ]))
                }
                _ => None,
            },
            _ => None,
        };

        match flipped {
            Some(flipped) if flipped.signature < self.signature => {
                debug!(
                    "Orienting difference {} as {}",
                    self.signature, flipped.signature
                );
                flipped
            }
            _ => self,
        }
    }

    pub fn kind(&self) -> &CanonicalKind {
        &self.kind
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_signature(self) -> String {
        self.signature
    }

    /// Render the canonical tree back into a parseable arithmetic expression.
    ///
    /// Normalizing the rendered string gives back the same signature.
    pub fn to_expression_string(&self) -> String {
        match &self.kind {
            CanonicalKind::Number(n) => n.to_string(),
            CanonicalKind::Sum(terms) => {
                let mut out = String::new();
                for (idx, term) in terms.iter().enumerate() {
                    let text = term.node.operand_text(matches!(
                        term.node.kind,
                        CanonicalKind::Sum(_)
                    ));
                    match (idx, term.sign) {
                        (0, Sign::Positive) => out.push_str(&text),
                        (0, Sign::Negative) => out.push_str(&format!("0 - {}", text)),
                        (_, sign) => out.push_str(&format!(" {} {}", sign.symbol(), text)),
                    }
                }
                out
            }
            CanonicalKind::Product(factors) => {
                // dividends first so the rendered chain never starts with a division
                let ordered = factors
                    .iter()
                    .filter(|f| !f.inverse)
                    .chain(factors.iter().filter(|f| f.inverse));
                let mut out = String::new();
                for (idx, factor) in ordered.enumerate() {
                    let text = factor
                        .node
                        .operand_text(!matches!(factor.node.kind, CanonicalKind::Number(_)));
                    match (idx, factor.inverse) {
                        (0, false) => out.push_str(&text),
                        (0, true) => out.push_str(&format!("1 / {}", text)),
                        (_, _) => out.push_str(&format!(" {} {}", factor.symbol(), text)),
                    }
                }
                out
            }
        }
    }

    fn operand_text(&self, parenthesize: bool) -> String {
        let text = self.to_expression_string();
        if parenthesize {
            format!("({})", text)
        } else {
            text
        }
    }
}

impl fmt::Display for CanonicalExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.signature)
    }
}

/// Positive terms first, then by signature
fn compare_terms(a: &Term, b: &Term) -> Ordering {
    a.sign
        .cmp(&b.sign)
        .then_with(|| a.node.signature.cmp(&b.node.signature))
}

/// By signature; on equal signatures multiplied factors precede divided ones
fn compare_factors(a: &Factor, b: &Factor) -> Ordering {
    a.node
        .signature
        .cmp(&b.node.signature)
        .then(a.inverse.cmp(&b.inverse))
}

fn flatten_sum(expr: &Expression, sign: Sign, terms: &mut Vec<Term>) {
    match expr {
        Expression::Binary(Operator::Add, l, r) => {
            flatten_sum(l, sign, terms);
            flatten_sum(r, sign, terms);
        }
        Expression::Binary(Operator::Sub, l, r) => {
            flatten_sum(l, sign, terms);
            flatten_sum(r, sign.negate(), terms);
        }
        _ => terms.push(Term {
            sign,
            node: canonicalize(expr),
        }),
    }
}

fn flatten_product(expr: &Expression, inverse: bool, factors: &mut Vec<Factor>) {
    match expr {
        Expression::Binary(Operator::Mul, l, r) => {
            flatten_product(l, inverse, factors);
            flatten_product(r, inverse, factors);
        }
        Expression::Binary(Operator::Div, l, r) => {
            flatten_product(l, inverse, factors);
            flatten_product(r, !inverse, factors);
        }
        _ => factors.push(Factor {
            inverse,
            node: canonicalize(expr),
        }),
    }
}

/// Build the canonical form of a raw expression tree, bottom-up
pub fn canonicalize(expr: &Expression) -> CanonicalExpr {
    match expr {
        Expression::Number(n) => CanonicalExpr::number(*n),
        Expression::Binary(Operator::Add | Operator::Sub, _, _) => {
            let mut terms = Vec::new();
            flatten_sum(expr, Sign::Positive, &mut terms);
            CanonicalExpr::sum(terms)
        }
        Expression::Binary(Operator::Mul | Operator::Div, _, _) => {
            let mut factors = Vec::new();
            flatten_product(expr, false, &mut factors);
            CanonicalExpr::product(factors)
        }
    }
}

/// Parse `input` and return its canonical form
///
/// # Errors
///
/// Returns an error if `input` cannot be tokenized or parsed.
pub fn canonicalize_str(input: &str) -> Result<CanonicalExpr, ExpressionError> {
    let expr = parse(input)?;
    Ok(canonicalize(&expr))
}

/// Compute the canonical signature of an arithmetic expression string
///
/// # Errors
///
/// Returns an error if `input` cannot be tokenized or parsed.
pub fn normalize(input: &str) -> Result<String, ExpressionError> {
    let signature = canonicalize_str(input)?.into_signature();
    debug!("Normalized '{}' to {}", input, signature);
    Ok(signature)
}
