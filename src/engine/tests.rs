#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Budget, CategorySpending, Transaction};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_txn(id: &str, description: &str, amount: Decimal, day: &str, category: &str) -> Transaction {
    Transaction {
        id: id.into(),
        description: description.into(),
        amount,
        date: date(day),
        category: category.into(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        make_txn("txn-1", "Grocery Store", dec!(75.49), "2025-06-15", "Food"),
        make_txn("txn-2", "Gas Station", dec!(45.23), "2025-06-14", "Transportation"),
        make_txn("txn-3", "Coffee Shop", dec!(5.67), "2025-06-13", "Food"),
        make_txn("txn-4", "Movie Tickets", dec!(32.00), "2025-06-10", "Entertainment"),
        make_txn("txn-5", "Monthly Rent", dec!(1450.00), "2025-06-01", "Housing"),
    ]
}

fn make_budget(amount: Decimal, spent: Decimal) -> Budget {
    Budget {
        id: "budget-1".into(),
        category: "Food".into(),
        amount,
        spent,
        color: "#4CC9F0".into(),
    }
}

// ── Category colors ───────────────────────────────────────────

#[test]
fn test_color_known_categories() {
    assert_eq!(category_color("food"), "#4CC9F0");
    assert_eq!(category_color("housing"), "#3A0CA3");
    assert_eq!(category_color("other"), "#118AB2");
}

#[test]
fn test_color_is_case_insensitive() {
    assert_eq!(category_color("Food"), category_color("food"));
    assert_eq!(category_color("FOOD"), category_color("food"));
    assert_eq!(category_color("TrAnSpOrTaTiOn"), "#4361EE");
}

#[test]
fn test_color_unknown_falls_back() {
    assert_eq!(category_color("gifts"), colors::FALLBACK_COLOR);
    assert_eq!(category_color("GIFTS"), colors::FALLBACK_COLOR);
    assert_eq!(category_color(""), colors::FALLBACK_COLOR);
    assert_eq!(category_color("  food  "), colors::FALLBACK_COLOR); // exact match, no trim
}

#[test]
fn test_palette_is_lowercase_keyed() {
    for (name, color) in super::colors::CATEGORY_COLORS {
        assert_eq!(*name, name.to_lowercase());
        assert!(color.starts_with('#') && color.len() == 7);
    }
}

// ── Filter: query ─────────────────────────────────────────────

#[test]
fn test_empty_filter_is_identity() {
    let txns = sample();
    let out = TransactionFilter::default().apply(&txns);
    assert_eq!(out, txns);
}

#[test]
fn test_whitespace_query_matches_all() {
    let txns = sample();
    let filter = TransactionFilter {
        query: "   ".into(),
        ..Default::default()
    };
    assert_eq!(filter.apply(&txns), txns);
}

#[test]
fn test_query_matches_description_case_insensitive() {
    let txns = sample();
    let filter = TransactionFilter {
        query: "GROCERY".into(),
        ..Default::default()
    };
    let out = filter.apply(&txns);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "txn-1");
}

#[test]
fn test_query_matches_category_too() {
    let txns = sample();
    let filter = TransactionFilter {
        query: "food".into(),
        ..Default::default()
    };
    let out = filter.apply(&txns);
    let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-1", "txn-3"]);
}

#[test]
fn test_query_soundness_and_completeness() {
    let txns = sample();
    let query = "o";
    let filter = TransactionFilter {
        query: query.into(),
        ..Default::default()
    };
    let out = filter.apply(&txns);
    for txn in &out {
        assert!(
            txn.description.to_lowercase().contains(query)
                || txn.category.to_lowercase().contains(query)
        );
    }
    for txn in txns.iter().filter(|t| !out.contains(t)) {
        assert!(
            !txn.description.to_lowercase().contains(query)
                && !txn.category.to_lowercase().contains(query)
        );
    }
}

#[test]
fn test_query_no_match() {
    let filter = TransactionFilter {
        query: "zzz".into(),
        ..Default::default()
    };
    assert!(filter.apply(&sample()).is_empty());
}

// ── Filter: categories ────────────────────────────────────────

#[test]
fn test_category_membership() {
    let txns = sample();
    let filter = TransactionFilter {
        categories: vec!["Food".into()],
        ..Default::default()
    };
    let out = filter.apply(&txns);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|t| t.category == "Food"));
}

#[test]
fn test_category_membership_multiple() {
    let txns = sample();
    let filter = TransactionFilter {
        categories: vec!["Food".into(), "Housing".into()],
        ..Default::default()
    };
    let out = filter.apply(&txns);
    let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-1", "txn-3", "txn-5"]);
}

#[test]
fn test_category_membership_is_case_sensitive() {
    // Unlike the text query, the category set matches exactly.
    let filter = TransactionFilter {
        categories: vec!["food".into()],
        ..Default::default()
    };
    assert!(filter.apply(&sample()).is_empty());
}

// ── Filter: date range ────────────────────────────────────────

#[test]
fn test_date_range_inclusive_bounds() {
    let txns = sample();
    let filter = TransactionFilter {
        date_range: DateRange::between(date("2025-06-13"), date("2025-06-15")),
        ..Default::default()
    };
    let out = filter.apply(&txns);
    let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-1", "txn-2", "txn-3"]);
}

#[test]
fn test_half_open_range_filters_nothing() {
    let txns = sample();
    let filter = TransactionFilter {
        date_range: DateRange {
            start: Some(date("2025-06-13")),
            end: None,
        },
        ..Default::default()
    };
    assert_eq!(filter.apply(&txns), txns);
}

#[test]
fn test_passes_compose() {
    let txns = sample();
    let filter = TransactionFilter {
        query: "o".into(),
        categories: vec!["Food".into()],
        date_range: DateRange::between(date("2025-06-14"), date("2025-06-30")),
    };
    let out = filter.apply(&txns);
    let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-1"]);
}

#[test]
fn test_filter_is_empty() {
    assert!(TransactionFilter::default().is_empty());
    assert!(TransactionFilter {
        query: "  ".into(),
        ..Default::default()
    }
    .is_empty());
    assert!(!TransactionFilter {
        categories: vec!["Food".into()],
        ..Default::default()
    }
    .is_empty());
    // A half-open range is inert, so the filter still counts as empty.
    assert!(TransactionFilter {
        date_range: DateRange {
            start: Some(date("2025-06-01")),
            end: None,
        },
        ..Default::default()
    }
    .is_empty());
}

// ── Sort ──────────────────────────────────────────────────────

#[test]
fn test_sort_by_date_asc() {
    let mut txns = sample();
    sort_transactions(&mut txns, SortKey::Date, SortDirection::Asc);
    let ids: Vec<&str> = txns.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-5", "txn-4", "txn-3", "txn-2", "txn-1"]);
}

#[test]
fn test_sort_by_amount_desc() {
    let mut txns = sample();
    sort_transactions(&mut txns, SortKey::Amount, SortDirection::Desc);
    let ids: Vec<&str> = txns.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn-5", "txn-1", "txn-2", "txn-4", "txn-3"]);
}

#[test]
fn test_sort_round_trip_reverses() {
    // With the id tie-break the order is total, so desc is exactly the
    // reverse of asc even with duplicate key values.
    let mut txns = sample();
    txns.push(make_txn("txn-9", "Second Rent", dec!(1450.00), "2025-06-01", "Housing"));

    for key in [SortKey::Date, SortKey::Amount] {
        let mut asc = txns.clone();
        sort_transactions(&mut asc, key, SortDirection::Asc);
        let mut desc = txns.clone();
        sort_transactions(&mut desc, key, SortDirection::Desc);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }
}

#[test]
fn test_sort_tie_breaks_on_id() {
    let mut txns = vec![
        make_txn("txn-b", "B", dec!(10), "2025-06-01", "Food"),
        make_txn("txn-a", "A", dec!(10), "2025-06-01", "Food"),
    ];
    sort_transactions(&mut txns, SortKey::Amount, SortDirection::Asc);
    assert_eq!(txns[0].id, "txn-a");
}

#[test]
fn test_sort_toggles() {
    assert_eq!(SortKey::Date.toggled(), SortKey::Amount);
    assert_eq!(SortKey::Amount.toggled(), SortKey::Date);
    assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    assert_eq!(SortKey::default(), SortKey::Date);
    assert_eq!(SortDirection::default(), SortDirection::Desc);
}

// ── Aggregation ───────────────────────────────────────────────

#[test]
fn test_summary_totals() {
    let budgets = vec![
        make_budget(dec!(500), dec!(168.66)),
        make_budget(dec!(200), dec!(63.98)),
    ];
    let summary = BudgetSummary::from_budgets(&budgets);
    assert_eq!(summary.total_budget, dec!(700));
    assert_eq!(summary.total_spent, dec!(232.64));

    let ratio = summary.usage_ratio();
    assert!(ratio > dec!(0.3323) && ratio < dec!(0.3324));
    assert_eq!(summary.tier(), UsageTier::Low);
}

#[test]
fn test_summary_empty_collection() {
    let summary = BudgetSummary::from_budgets(&[]);
    assert_eq!(summary.total_budget, Decimal::ZERO);
    assert_eq!(summary.usage_ratio(), Decimal::ZERO);
    assert_eq!(summary.tier(), UsageTier::Low);
    assert_eq!(summary.standing(), Standing::Remaining(Decimal::ZERO));
}

#[test]
fn test_tier_cut_points_are_exact() {
    assert_eq!(UsageTier::from_ratio(Decimal::ZERO), UsageTier::Low);
    assert_eq!(UsageTier::from_ratio(dec!(0.6999)), UsageTier::Low);
    assert_eq!(UsageTier::from_ratio(dec!(0.7)), UsageTier::Medium);
    assert_eq!(UsageTier::from_ratio(dec!(0.9999)), UsageTier::Medium);
    assert_eq!(UsageTier::from_ratio(Decimal::ONE), UsageTier::High);
    assert_eq!(UsageTier::from_ratio(dec!(1.5)), UsageTier::High);
}

#[test]
fn test_boundary_at_limit() {
    // Exactly at the limit: ratio 1.0, tier high, but not over budget.
    let budget = make_budget(dec!(100), dec!(100));
    assert_eq!(budget.usage_ratio(), Decimal::ONE);
    assert!(!budget.is_over_budget());
    assert_eq!(UsageTier::from_ratio(budget.usage_ratio()), UsageTier::High);
}

#[test]
fn test_zero_amount_guard() {
    let budget = make_budget(Decimal::ZERO, dec!(25));
    assert_eq!(budget.usage_ratio(), Decimal::ZERO);
}

#[test]
fn test_standing_remaining() {
    let budgets = vec![make_budget(dec!(700), dec!(232.64))];
    let summary = BudgetSummary::from_budgets(&budgets);
    assert_eq!(summary.standing(), Standing::Remaining(dec!(467.36)));
}

#[test]
fn test_standing_at_exactly_one_is_remaining_zero() {
    let budgets = vec![make_budget(dec!(100), dec!(100))];
    let summary = BudgetSummary::from_budgets(&budgets);
    assert_eq!(summary.standing(), Standing::Remaining(Decimal::ZERO));
}

#[test]
fn test_standing_over_budget() {
    let budgets = vec![make_budget(dec!(100), dec!(150))];
    let summary = BudgetSummary::from_budgets(&budgets);
    assert_eq!(summary.standing(), Standing::OverBudget(dec!(50)));
}

#[test]
fn test_spending_total_and_top_category() {
    let spending = vec![
        CategorySpending {
            name: "Food".into(),
            amount: dec!(168.66),
            color: "#4CC9F0".into(),
        },
        CategorySpending {
            name: "Housing".into(),
            amount: dec!(1450),
            color: "#3A0CA3".into(),
        },
        CategorySpending {
            name: "Utilities".into(),
            amount: dec!(79.99),
            color: "#06D6A0".into(),
        },
    ];
    assert_eq!(spending_total(&spending), dec!(1698.65));
    assert_eq!(top_category(&spending).unwrap().name, "Housing");
}

#[test]
fn test_top_category_tie_keeps_earliest() {
    let spending = vec![
        CategorySpending {
            name: "A".into(),
            amount: dec!(10),
            color: "#118AB2".into(),
        },
        CategorySpending {
            name: "B".into(),
            amount: dec!(10),
            color: "#118AB2".into(),
        },
    ];
    assert_eq!(top_category(&spending).unwrap().name, "A");
    assert!(top_category(&[]).is_none());
}

// ── Budget editor ─────────────────────────────────────────────

#[test]
fn test_editor_create_starts_empty() {
    let editor = BudgetEditor::create();
    assert_eq!(editor.mode, EditorMode::Create);
    assert!(editor.category.is_empty());
    assert!(editor.amount.is_empty());
    assert_eq!(editor.focus, EditorField::Category);
    assert!(editor.error.is_none());
    assert!(!editor.is_valid());
}

#[test]
fn test_editor_edit_prefills() {
    let budget = make_budget(dec!(500), dec!(168.66));
    let editor = BudgetEditor::edit(&budget);
    assert_eq!(editor.mode, EditorMode::Edit { id: "budget-1".into() });
    assert_eq!(editor.category, "Food");
    assert_eq!(editor.amount, "500");
    assert!(editor.is_valid());
}

#[test]
fn test_editor_whitespace_category_rejected() {
    let mut editor = BudgetEditor::create();
    editor.category = "  ".into();
    editor.amount = "50".into();
    assert!(!editor.is_valid());
    assert_eq!(editor.submit(), None);
    assert_eq!(editor.error.as_deref(), Some("Please enter a category name"));
    // The draft is untouched so the user can fix it in place.
    assert_eq!(editor.category, "  ");
    assert_eq!(editor.amount, "50");
}

#[test]
fn test_editor_bad_amount_rejected() {
    let mut editor = BudgetEditor::create();
    editor.category = "Gifts".into();

    for bad in ["", ".", "0"] {
        editor.amount = bad.into();
        assert!(!editor.is_valid(), "amount {bad:?} should be invalid");
        assert_eq!(editor.submit(), None);
        assert_eq!(editor.error.as_deref(), Some("Please enter a valid amount"));
    }
}

#[test]
fn test_editor_submit_valid_draft() {
    let mut editor = BudgetEditor::create();
    editor.category = "  Gifts  ".into();
    editor.amount = "50".into();
    assert!(editor.is_valid());
    assert_eq!(editor.submit(), Some(("Gifts".into(), dec!(50))));
    assert!(editor.error.is_none());
}

#[test]
fn test_editor_accepts_partial_decimals() {
    // The gate lets these through while typing, so submit takes them too.
    let mut editor = BudgetEditor::create();
    editor.category = "Gifts".into();

    editor.amount = "50.".into();
    assert_eq!(editor.submit(), Some(("Gifts".into(), dec!(50))));

    editor.amount = ".5".into();
    assert_eq!(editor.submit(), Some(("Gifts".into(), dec!(0.5))));
}

#[test]
fn test_editor_amount_keystroke_gate() {
    let mut editor = BudgetEditor::create();
    editor.toggle_focus();
    assert_eq!(editor.focus, EditorField::Amount);

    for c in "12.50".chars() {
        editor.push_char(c);
    }
    assert_eq!(editor.amount, "12.50");

    // A second dot and any letter are swallowed whole.
    editor.push_char('.');
    editor.push_char('x');
    assert_eq!(editor.amount, "12.50");

    editor.backspace();
    assert_eq!(editor.amount, "12.5");
}

#[test]
fn test_editor_category_accepts_anything() {
    let mut editor = BudgetEditor::create();
    for c in "Caffè & Co.".chars() {
        editor.push_char(c);
    }
    assert_eq!(editor.category, "Caffè & Co.");
}

#[test]
fn test_editor_typing_clears_error() {
    let mut editor = BudgetEditor::create();
    assert_eq!(editor.submit(), None);
    assert!(editor.error.is_some());
    editor.push_char('G');
    assert!(editor.error.is_none());
}
