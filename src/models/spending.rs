use rust_decimal::Decimal;

/// One point on the dashboard's monthly trend line. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySpending {
    /// Short month label, e.g. "Jun".
    pub month: String,
    pub amount: Decimal,
}

/// Per-category spending snapshot for the dashboard chart. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub name: String,
    pub amount: Decimal,
    /// Hex display color.
    pub color: String,
}
