use std::collections::HashMap;

use log::{debug, warn};

use crate::expression::normalize;

/// Keeps one representative expression per canonical signature.
///
/// The first expression seen for a signature wins. An expression that cannot
/// be canonicalized is kept as its own representative.
#[derive(Debug, Default)]
pub struct SolutionDeduplicator {
    representatives: HashMap<String, usize>,
    solutions: Vec<String>,
    raw_count: usize,
}

impl SolutionDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a raw solution; returns `true` if it was kept
    pub fn insert(&mut self, raw: String) -> bool {
        self.raw_count += 1;

        let signature = match normalize(&raw) {
            Ok(signature) => signature,
            Err(e) => {
                warn!("Keeping '{}' unmerged, canonicalization failed: {}", raw, e);
                self.solutions.push(raw);
                return true;
            }
        };

        if let Some(&idx) = self.representatives.get(&signature) {
            debug!(
                "'{}' duplicates '{}' ({})",
                raw,
                self.solutions.get(idx).map_or("", String::as_str),
                signature
            );
            return false;
        }

        self.representatives.insert(signature, self.solutions.len());
        self.solutions.push(raw);
        true
    }

    /// Representative kept for `signature`, if any
    pub fn representative(&self, signature: &str) -> Option<&str> {
        self.representatives
            .get(signature)
            .and_then(|&idx| self.solutions.get(idx))
            .map(String::as_str)
    }

    /// Number of solutions kept so far
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Number of raw solutions offered so far
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<String> {
        self.solutions
    }
}

impl Extend<String> for SolutionDeduplicator {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw);
        }
    }
}

/// Reduce raw solutions to one representative per canonical signature, in
/// first-seen order
pub fn deduplicate<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut dedup = SolutionDeduplicator::new();
    dedup.extend(raw);
    debug!(
        "Deduplicated {} raw solutions into {}",
        dedup.raw_count(),
        dedup.len()
    );
    dedup.into_solutions()
}
