use std::collections::BTreeSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Binding, Operator, apply_exact};
use crate::solver::constants::TARGET;

/// A partially reduced operand: its value, its rendered text and the binding
/// strength of the operator at the top of that text
#[derive(Debug, Clone)]
struct SearchItem {
    value: i64,
    text: String,
    binding: Binding,
}

impl SearchItem {
    fn atom(value: i64) -> Self {
        Self {
            value,
            text: value.to_string(),
            binding: Binding::Atom,
        }
    }

    /// Combine `self op right`; `None` when the result is not an exact integer
    fn combine(&self, op: Operator, right: &SearchItem) -> Option<SearchItem> {
        let value = apply_exact(op, self.value, right.value).ok()?;
        let text = format!(
            "{} {} {}",
            self.operand_text(op, false),
            op.symbol(),
            right.operand_text(op, true)
        );
        Some(SearchItem {
            value,
            text,
            binding: op.binding(),
        })
    }

    fn operand_text(&self, op: Operator, is_right: bool) -> String {
        if self.binding.needs_parens(op, is_right) {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Every ordered pair of distinct indices below `len`
fn ordered_pairs(len: usize) -> Vec<(usize, usize)> {
    (0..len)
        .flat_map(|i| (0..len).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect()
}

/// Replace items `i` and `j` with `items[i] op items[j]`
fn reduce_pair(
    items: &[SearchItem],
    i: usize,
    j: usize,
    op: Operator,
) -> Option<Vec<SearchItem>> {
    let (left, right) = (items.get(i)?, items.get(j)?);
    let combined = left.combine(op, right)?;
    let mut next: Vec<SearchItem> = items
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, item)| item.clone())
        .collect();
    next.push(combined);
    Some(next)
}

/// Exhaustive search for expressions over all the numbers that reach a target
pub struct ExpressionSolver {
    target: i64,
}

impl ExpressionSolver {
    /// Create a solver for the reach-24 target
    pub fn new() -> Self {
        Self { target: TARGET }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Find every rendered expression using each of `numbers` exactly once
    /// that evaluates to the target.
    ///
    /// Only exact integer division is allowed. The result is sorted and free
    /// of textual duplicates; algebraically equivalent expressions are not
    /// merged here.
    pub fn find_solutions(&self, numbers: &[i64]) -> Vec<String> {
        info!(
            "Searching for expressions over {:?} that equal {}",
            numbers, self.target
        );

        let items: Vec<SearchItem> = numbers.iter().copied().map(SearchItem::atom).collect();
        let solutions = if items.len() < 2 {
            let mut found = BTreeSet::new();
            self.search(items, &mut found);
            found
        } else {
            // first-level branches share nothing, so they run in parallel
            ordered_pairs(items.len())
                .into_par_iter()
                .map(|(i, j)| {
                    let mut found = BTreeSet::new();
                    for op in Operator::ALL {
                        if let Some(next) = reduce_pair(&items, i, j, op) {
                            self.search(next, &mut found);
                        }
                    }
                    found
                })
                .reduce(BTreeSet::new, |mut acc, found| {
                    acc.extend(found);
                    acc
                })
        };

        info!("Found {} raw solutions", solutions.len());
        solutions.into_iter().collect()
    }

    /// Whether any expression over `numbers` reaches the target
    pub fn is_solvable(&self, numbers: &[i64]) -> bool {
        !self.find_solutions(numbers).is_empty()
    }

    fn search(&self, items: Vec<SearchItem>, found: &mut BTreeSet<String>) {
        if let [last] = items.as_slice() {
            if last.value == self.target && found.insert(last.text.clone()) {
                debug!("Solution: {}", last.text);
            }
            return;
        }

        for (i, j) in ordered_pairs(items.len()) {
            for op in Operator::ALL {
                if let Some(next) = reduce_pair(&items, i, j, op) {
                    self.search(next, found);
                }
            }
        }
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{SearchItem, ordered_pairs, reduce_pair};
    use crate::expression::{Binding, Operator};

    #[test]
    fn test_ordered_pairs_visits_both_orders() {
        let pairs = ordered_pairs(3);
        assert_eq!(pairs.len(), 6);
        assert!(pairs.contains(&(0, 1)));
        assert!(pairs.contains(&(1, 0)));
        assert!(!pairs.contains(&(2, 2)));
    }

    #[test]
    fn test_combine_guards_division() {
        let eight = SearchItem::atom(8);
        let three = SearchItem::atom(3);
        let zero = SearchItem::atom(0);
        assert!(eight.combine(Operator::Div, &three).is_none());
        assert!(eight.combine(Operator::Div, &zero).is_none());
        let result = eight.combine(Operator::Div, &SearchItem::atom(4));
        assert!(result.is_some());
        if let Some(item) = result {
            assert_eq!(item.value, 2);
            assert_eq!(item.text, "8 / 4");
            assert_eq!(item.binding, Binding::MulDiv);
        }
    }

    #[test]
    fn test_combine_parenthesizes_right_operand() {
        let diff = SearchItem {
            value: 1,
            text: "3 - 2".to_string(),
            binding: Binding::AddSub,
        };
        let product = SearchItem {
            value: 6,
            text: "2 * 3".to_string(),
            binding: Binding::MulDiv,
        };
        let twelve = SearchItem::atom(12);
        let three = SearchItem::atom(3);

        let cases = [
            (&twelve, Operator::Sub, &diff, "12 - (3 - 2)"),
            (&twelve, Operator::Add, &diff, "12 + 3 - 2"),
            (&diff, Operator::Sub, &twelve, "3 - 2 - 12"),
            (&diff, Operator::Mul, &twelve, "(3 - 2) * 12"),
            (&twelve, Operator::Div, &product, "12 / (2 * 3)"),
            (&twelve, Operator::Mul, &product, "12 * 2 * 3"),
            (&product, Operator::Div, &three, "2 * 3 / 3"),
            (&twelve, Operator::Sub, &product, "12 - 2 * 3"),
        ];
        for (left, op, right, expected) in cases {
            let result = reduce_pair(&[left.clone(), right.clone()], 0, 1, op);
            assert!(result.is_some(), "{} should combine", expected);
            if let Some(items) = result {
                assert_eq!(items.len(), 1);
                assert_eq!(items.first().map(|i| i.text.as_str()), Some(expected));
            }
        }
    }
}
