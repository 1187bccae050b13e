use crate::error::{AggregationError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Per-category sums while aggregation is still running.
///
/// Amounts accumulate in `i128`, which no realistic number of `i64` amounts
/// can overflow, so adding and merging never fail and the outcome does not
/// depend on the order records or partials arrive in. The range check
/// against `i64` happens once, in [`PartialTotals::finish`].
#[derive(Debug, Clone, Default)]
pub struct PartialTotals(HashMap<String, i128>);

impl PartialTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the entry for `category`, creating it at zero if absent.
    pub fn add(&mut self, category: &str, amount: i64) {
        match self.0.get_mut(category) {
            Some(total) => *total += i128::from(amount),
            None => {
                self.0.insert(category.to_owned(), i128::from(amount));
            }
        }
    }

    /// Key-wise addition of `other` into `self`.
    pub fn merge(&mut self, other: PartialTotals) {
        for (category, amount) in other.0 {
            *self.0.entry(category).or_insert(0) += amount;
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts to final totals. When several categories are out of range
    /// the error names the smallest category code.
    pub fn finish(self) -> Result<CategoryTotals> {
        let mut totals = HashMap::with_capacity(self.0.len());
        let mut overflowed: Option<String> = None;
        for (category, total) in self.0 {
            match i64::try_from(total) {
                Ok(total) => {
                    totals.insert(category, total);
                }
                Err(_) => {
                    if overflowed.as_ref().is_none_or(|seen| category < *seen) {
                        overflowed = Some(category);
                    }
                }
            }
        }
        match overflowed {
            Some(category) => Err(AggregationError::Overflow { category }),
            None => Ok(CategoryTotals(totals)),
        }
    }
}

/// Final per-category sums of transaction amounts.
///
/// A category that is absent is equivalent to a total of zero, both for
/// [`CategoryTotals::get`] and for equality.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(HashMap<String, i64>);

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> i64 {
        self.0.get(category).copied().unwrap_or(0)
    }

    /// Combined total of the listed categories.
    pub fn sum_of<S: AsRef<str>>(&self, categories: &[S]) -> Result<i64> {
        let sum: i128 = categories
            .iter()
            .map(|category| i128::from(self.get(category.as_ref())))
            .sum();
        i64::try_from(sum).map_err(|_| AggregationError::Overflow {
            category: categories
                .iter()
                .map(|category| category.as_ref())
                .collect::<Vec<_>>()
                .join("+"),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, i64> {
        self.0.iter()
    }

    /// Entries ordered by category code.
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self
            .0
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl PartialEq for CategoryTotals {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().all(|(category, total)| other.get(category) == *total)
            && other.0.iter().all(|(category, total)| self.get(category) == *total)
    }
}

impl Eq for CategoryTotals {}

/// Later pairs for the same category replace earlier ones.
impl<K: Into<String>> FromIterator<(K, i64)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(category, total)| (category.into(), total))
                .collect(),
        )
    }
}

impl<K: Into<String>, const N: usize> From<[(K, i64); N]> for CategoryTotals {
    fn from(pairs: [(K, i64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<CategoryTotals> for HashMap<String, i64> {
    fn from(totals: CategoryTotals) -> Self {
        totals.0
    }
}
