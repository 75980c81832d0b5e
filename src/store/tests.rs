#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::engine::Standing;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn visible_ids(store: &Store) -> Vec<&str> {
    store.visible.iter().map(|t| t.id.as_str()).collect()
}

// ── Seeding ───────────────────────────────────────────────────

#[test]
fn test_seed_collections() {
    let store = Store::new();
    assert_eq!(store.transaction_count(), 10);
    assert_eq!(store.budgets.len(), 7);
    assert_eq!(store.monthly_spending.len(), 6);
    assert_eq!(store.spending_by_category.len(), 7);
    assert!(store.filter.is_empty());
    // With no filter, the view is the seed collection in input order.
    assert_eq!(store.visible.len(), 10);
    assert_eq!(visible_ids(&store)[0], "txn-1");
    assert_eq!(visible_ids(&store)[9], "txn-10");
}

#[test]
fn test_seed_totals_are_consistent() {
    let store = Store::new();
    // The sample set's transaction total matches its budget spent total.
    assert_eq!(store.visible_total(), dec!(1952.09));
    assert_eq!(store.budget_summary().total_spent, dec!(1952.09));
    assert_eq!(store.spending_total(), dec!(1952.09));
}

#[test]
fn test_known_categories_first_seen_order() {
    let store = Store::new();
    assert_eq!(
        store.known_categories(),
        [
            "Food",
            "Transportation",
            "Entertainment",
            "Shopping",
            "Housing",
            "Utilities",
            "Health"
        ]
    );
}

// ── Filter transitions ────────────────────────────────────────

#[test]
fn test_set_query() {
    let mut store = Store::new();
    store.set_query("food".into());
    assert_eq!(visible_ids(&store), ["txn-1", "txn-3", "txn-6"]);

    store.set_query(String::new());
    assert_eq!(store.visible.len(), 10);
}

#[test]
fn test_set_and_remove_categories() {
    let mut store = Store::new();
    store.set_categories(vec!["Food".into(), "Housing".into()]);
    assert_eq!(visible_ids(&store), ["txn-1", "txn-3", "txn-6", "txn-8"]);

    store.remove_category("Housing");
    assert_eq!(visible_ids(&store), ["txn-1", "txn-3", "txn-6"]);

    store.remove_category("Food");
    assert_eq!(store.visible.len(), 10);
}

#[test]
fn test_set_date_range() {
    let mut store = Store::new();
    store.set_date_range(DateRange::between(date("2025-06-01"), date("2025-06-07")));
    assert_eq!(
        visible_ids(&store),
        ["txn-6", "txn-7", "txn-8", "txn-9", "txn-10"]
    );
}

#[test]
fn test_clear_filters() {
    let mut store = Store::new();
    store.set_query("food".into());
    store.set_categories(vec!["Food".into()]);
    store.set_date_range(DateRange::between(date("2025-06-01"), date("2025-06-07")));
    assert!(!store.filter.is_empty());

    store.clear_filters();
    assert!(store.filter.is_empty());
    assert_eq!(store.visible.len(), 10);
}

// ── Sort transitions ──────────────────────────────────────────

#[test]
fn test_toggle_sort_direction_sorts_visible() {
    let mut store = Store::new();
    // Default is date desc; the first toggle lands on ascending.
    store.toggle_sort_direction();
    assert_eq!(store.sort_direction, SortDirection::Asc);
    assert_eq!(visible_ids(&store)[0], "txn-8"); // June 1st
    assert_eq!(visible_ids(&store)[9], "txn-1"); // June 15th
}

#[test]
fn test_toggle_sort_key_sorts_visible() {
    let mut store = Store::new();
    store.toggle_sort_key();
    assert_eq!(store.sort_key, SortKey::Amount);
    assert_eq!(store.sort_direction, SortDirection::Desc);
    assert_eq!(visible_ids(&store)[0], "txn-8"); // 1450.00
    assert_eq!(visible_ids(&store)[9], "txn-3"); // 5.67
}

#[test]
fn test_set_sort() {
    let mut store = Store::new();
    store.set_sort(SortKey::Amount, SortDirection::Asc);
    assert_eq!(visible_ids(&store)[0], "txn-3"); // 5.67
    assert_eq!(visible_ids(&store)[9], "txn-8"); // 1450.00
}

#[test]
fn test_sort_acts_on_filtered_view() {
    let mut store = Store::new();
    store.set_categories(vec!["Food".into()]);
    store.toggle_sort_key(); // amount desc
    assert_eq!(visible_ids(&store), ["txn-6", "txn-1", "txn-3"]);
}

#[test]
fn test_filter_change_restores_input_order() {
    let mut store = Store::new();
    store.toggle_sort_key();
    assert_eq!(visible_ids(&store)[0], "txn-8");

    // Any filter transition rebuilds the view in input order; the sort
    // state is kept only for the next explicit toggle.
    store.set_query(String::new());
    assert_eq!(visible_ids(&store)[0], "txn-1");
    assert_eq!(store.sort_key, SortKey::Amount);
}

// ── Budget transitions ────────────────────────────────────────

#[test]
fn test_add_budget() {
    let mut store = Store::new();
    store.add_budget("Gifts", dec!(50));

    assert_eq!(store.budgets.len(), 8);
    let added = store.budgets.last().unwrap();
    assert_eq!(added.category, "Gifts");
    assert_eq!(added.amount, dec!(50));
    assert_eq!(added.spent, Decimal::ZERO);
    // "gifts" is not a palette category, so it gets the fallback color.
    assert_eq!(added.color, "#118AB2");
    assert!(added.id.starts_with("budget-"));
    assert!(store.budgets.iter().filter(|b| b.id == added.id).count() == 1);
}

#[test]
fn test_update_budget_replaces_category_and_amount_only() {
    let mut store = Store::new();
    assert!(store.update_budget("budget-1", "Groceries".into(), dec!(600)));

    let updated = store.budget("budget-1").unwrap();
    assert_eq!(updated.category, "Groceries");
    assert_eq!(updated.amount, dec!(600));
    // Spent and color are untouched; the color is not re-resolved even
    // though "groceries" would fall back to a different hue.
    assert_eq!(updated.spent, dec!(168.66));
    assert_eq!(updated.color, "#4CC9F0");
}

#[test]
fn test_update_budget_unknown_id() {
    let mut store = Store::new();
    assert!(!store.update_budget("budget-999", "X".into(), dec!(1)));
    assert_eq!(store.budgets.len(), 7);
}

// ── Derivations ───────────────────────────────────────────────

#[test]
fn test_budget_summary() {
    let store = Store::new();
    let summary = store.budget_summary();
    assert_eq!(summary.total_budget, dec!(2950));
    assert_eq!(summary.total_spent, dec!(1952.09));
    assert_eq!(summary.standing(), Standing::Remaining(dec!(997.91)));
}

#[test]
fn test_visible_total_follows_filter() {
    let mut store = Store::new();
    store.set_categories(vec!["Food".into()]);
    assert_eq!(store.visible_total(), dec!(168.66));
}

#[test]
fn test_top_category() {
    let store = Store::new();
    assert_eq!(store.top_category().unwrap().name, "Housing");
}

#[test]
fn test_unbudgeted_categories() {
    let mut store = Store::new();
    // The seed data covers every transaction category.
    assert!(store.unbudgeted_categories().is_empty());

    store.budgets.retain(|b| b.category != "Health");
    assert_eq!(store.unbudgeted_categories(), ["Health"]);
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn test_reset_reseeds_everything() {
    let mut store = Store::new();
    store.add_budget("Gifts", dec!(50));
    store.set_query("rent".into());
    store.toggle_sort_direction();

    store.reset();
    assert_eq!(store.budgets.len(), 7);
    assert!(store.filter.is_empty());
    assert_eq!(store.visible.len(), 10);
    assert_eq!(store.sort_direction, SortDirection::Desc);
}
