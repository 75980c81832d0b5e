use rust_decimal::Decimal;
use uuid::Uuid;

/// A monthly spending limit for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    pub id: String,
    pub category: String,
    /// Monthly limit; the editor enforces > 0 on entry.
    pub amount: Decimal,
    /// Amount already spent. Static snapshot, not recomputed from
    /// transactions.
    pub spent: Decimal,
    /// Hex display color (e.g. "#4CC9F0"), resolved once at creation and
    /// kept through edits.
    pub color: String,
}

impl Budget {
    /// A freshly created budget starts with nothing spent.
    pub fn new(category: String, amount: Decimal, color: String) -> Self {
        Self {
            id: format!("budget-{}", Uuid::new_v4()),
            category,
            amount,
            spent: Decimal::ZERO,
            color,
        }
    }

    /// spent / amount, or zero when the limit is zero.
    pub fn usage_ratio(&self) -> Decimal {
        if self.amount > Decimal::ZERO {
            self.spent / self.amount
        } else {
            Decimal::ZERO
        }
    }

    /// Strictly over: spending exactly the limit is not over budget.
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    pub fn remaining(&self) -> Decimal {
        self.amount - self.spent
    }
}
