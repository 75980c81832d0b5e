use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single spending record. Transactions are seeded from the sample data
/// provider and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    /// Always positive; the tracker records spending only.
    pub amount: Decimal,
    /// Calendar date, no time component.
    pub date: NaiveDate,
    /// Free-text category label, correlated with budgets by string equality.
    pub category: String,
}
