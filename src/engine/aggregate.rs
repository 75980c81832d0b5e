use rust_decimal::Decimal;

use crate::models::{Budget, CategorySpending};

/// Usage tiers: below 0.7 of the limit is comfortable, below 1.0 is
/// nearing it, 1.0 and above is at or over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UsageTier {
    Low,
    Medium,
    High,
}

impl UsageTier {
    pub(crate) fn from_ratio(ratio: Decimal) -> Self {
        if ratio < Decimal::new(7, 1) {
            Self::Low
        } else if ratio < Decimal::ONE {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// The month's position against the combined limits. Using exactly the
/// whole budget still counts as remaining (of zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Standing {
    Remaining(Decimal),
    OverBudget(Decimal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetSummary {
    pub(crate) total_budget: Decimal,
    pub(crate) total_spent: Decimal,
}

impl BudgetSummary {
    pub(crate) fn from_budgets(budgets: &[Budget]) -> Self {
        Self {
            total_budget: budgets.iter().map(|b| b.amount).sum(),
            total_spent: budgets.iter().map(|b| b.spent).sum(),
        }
    }

    /// total_spent / total_budget, or zero when there are no limits at
    /// all. Never divides by zero.
    pub(crate) fn usage_ratio(&self) -> Decimal {
        if self.total_budget > Decimal::ZERO {
            self.total_spent / self.total_budget
        } else {
            Decimal::ZERO
        }
    }

    pub(crate) fn tier(&self) -> UsageTier {
        UsageTier::from_ratio(self.usage_ratio())
    }

    pub(crate) fn standing(&self) -> Standing {
        if self.usage_ratio() <= Decimal::ONE {
            Standing::Remaining(self.total_budget - self.total_spent)
        } else {
            Standing::OverBudget(self.total_spent - self.total_budget)
        }
    }
}

/// Total across the per-category snapshots.
pub(crate) fn spending_total(spending: &[CategorySpending]) -> Decimal {
    spending.iter().map(|s| s.amount).sum()
}

/// Highest-spending category. Ties keep the earliest entry.
pub(crate) fn top_category(spending: &[CategorySpending]) -> Option<&CategorySpending> {
    spending.iter().fold(None, |top, entry| match top {
        Some(current) if entry.amount > current.amount => Some(entry),
        None => Some(entry),
        _ => top,
    })
}
