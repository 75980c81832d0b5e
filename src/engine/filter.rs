use chrono::NaiveDate;

use crate::models::Transaction;

/// Inclusive calendar-date window. The range only takes effect when both
/// bounds are present; a half-open range filters nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
}

impl DateRange {
    pub(crate) fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub(crate) fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn admits(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}

/// Caller-held filter state. `apply` runs three independent passes over
/// the full collection: text query, category membership, date range.
/// Output preserves input order; the input is never mutated.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionFilter {
    /// Case-insensitive substring against description or category.
    /// Whitespace-only means no text filtering.
    pub(crate) query: String,
    /// Exact, case-sensitive membership. Empty means no category filtering.
    pub(crate) categories: Vec<String>,
    pub(crate) date_range: DateRange,
}

impl TransactionFilter {
    pub(crate) fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.categories.is_empty()
            && !self.date_range.is_bounded()
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        self.matches_query(txn) && self.matches_categories(txn) && self.date_range.admits(txn.date)
    }

    pub(crate) fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }

    fn matches_query(&self, txn: &Transaction) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        txn.description.to_lowercase().contains(&needle)
            || txn.category.to_lowercase().contains(&needle)
    }

    fn matches_categories(&self, txn: &Transaction) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| *c == txn.category)
    }
}
