//! Single application-state container. Every mutation is a small
//! transition method that re-runs the pure engine, so the UI layer never
//! filters, sorts, or aggregates on its own.

use rust_decimal::Decimal;

use crate::data;
use crate::engine::{
    self, category_color, sort_transactions, BudgetSummary, DateRange, SortDirection, SortKey,
    TransactionFilter,
};
use crate::models::{Budget, CategorySpending, MonthlySpending, Transaction};

pub(crate) struct Store {
    /// Seed collection in insertion order. Never mutated after seeding.
    transactions: Vec<Transaction>,
    /// What the transactions screen shows: the filtered view, in input
    /// order until a sort toggle reorders it.
    pub(crate) visible: Vec<Transaction>,
    pub(crate) budgets: Vec<Budget>,
    pub(crate) monthly_spending: Vec<MonthlySpending>,
    pub(crate) spending_by_category: Vec<CategorySpending>,
    pub(crate) filter: TransactionFilter,
    pub(crate) sort_key: SortKey,
    pub(crate) sort_direction: SortDirection,
}

impl Store {
    pub(crate) fn new() -> Self {
        let transactions = data::transactions();
        Self {
            visible: transactions.clone(),
            transactions,
            budgets: data::budgets(),
            monthly_spending: data::monthly_spending(),
            spending_by_category: data::spending_by_category(),
            filter: TransactionFilter::default(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }

    /// Throw everything away and re-seed. Used by the settings screen.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    // ── Filter transitions ────────────────────────────────────

    pub(crate) fn set_query(&mut self, query: String) {
        self.filter.query = query;
        self.refresh_visible();
    }

    pub(crate) fn set_categories(&mut self, categories: Vec<String>) {
        self.filter.categories = categories;
        self.refresh_visible();
    }

    pub(crate) fn remove_category(&mut self, category: &str) {
        self.filter.categories.retain(|c| c != category);
        self.refresh_visible();
    }

    pub(crate) fn set_date_range(&mut self, range: DateRange) {
        self.filter.date_range = range;
        self.refresh_visible();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.filter = TransactionFilter::default();
        self.refresh_visible();
    }

    /// Every filter change re-runs the whole pipeline over the full
    /// collection, which also restores input ordering.
    fn refresh_visible(&mut self) {
        self.visible = self.filter.apply(&self.transactions);
    }

    // ── Sort transitions ──────────────────────────────────────
    //
    // Sorting acts on the currently visible list and stays in effect
    // until the next filter change.

    pub(crate) fn toggle_sort_key(&mut self) {
        self.sort_key = self.sort_key.toggled();
        self.sort_visible();
    }

    pub(crate) fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
        self.sort_visible();
    }

    pub(crate) fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.sort_visible();
    }

    fn sort_visible(&mut self) {
        sort_transactions(&mut self.visible, self.sort_key, self.sort_direction);
    }

    // ── Budget transitions (category editor commits) ──────────

    /// Create-mode commit: append a budget with nothing spent and a color
    /// freshly resolved from the category label.
    pub(crate) fn add_budget(&mut self, category: &str, amount: Decimal) {
        let color = category_color(category).to_string();
        self.budgets
            .push(Budget::new(category.to_string(), amount, color));
    }

    /// Edit-mode commit: replace category and amount only. Spent and color
    /// stay as they are; in particular the color is not re-resolved.
    pub(crate) fn update_budget(&mut self, id: &str, category: String, amount: Decimal) -> bool {
        match self.budgets.iter_mut().find(|b| b.id == id) {
            Some(budget) => {
                budget.category = category;
                budget.amount = amount;
                true
            }
            None => false,
        }
    }

    pub(crate) fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    // ── Derivations ───────────────────────────────────────────

    pub(crate) fn budget_summary(&self) -> BudgetSummary {
        BudgetSummary::from_budgets(&self.budgets)
    }

    pub(crate) fn visible_total(&self) -> Decimal {
        self.visible.iter().map(|t| t.amount).sum()
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn spending_total(&self) -> Decimal {
        engine::spending_total(&self.spending_by_category)
    }

    pub(crate) fn top_category(&self) -> Option<&CategorySpending> {
        engine::top_category(&self.spending_by_category)
    }

    /// Distinct transaction categories in first-seen order; feeds the
    /// filter overlay's toggle list.
    pub(crate) fn known_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for txn in &self.transactions {
            if !seen.contains(&txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }

    /// Transaction categories with no budget covering them. Reported on
    /// the budgets screen; never an error.
    pub(crate) fn unbudgeted_categories(&self) -> Vec<String> {
        self.known_categories()
            .into_iter()
            .filter(|cat| !self.budgets.iter().any(|b| b.category == *cat))
            .collect()
    }
}

#[cfg(test)]
mod tests;
