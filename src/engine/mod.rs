//! The pure core: category colors, transaction filtering and sorting,
//! budget aggregation, and the budget-editor state machine. Nothing in
//! here touches the terminal or mutates shared state.

mod aggregate;
mod colors;
mod editor;
mod filter;
mod sort;

pub(crate) use aggregate::{spending_total, top_category, BudgetSummary, Standing, UsageTier};
pub(crate) use colors::category_color;
pub(crate) use editor::{BudgetEditor, EditorField, EditorMode};
pub(crate) use filter::{DateRange, TransactionFilter};
pub(crate) use sort::{sort_transactions, SortDirection, SortKey};

#[cfg(test)]
mod tests;
