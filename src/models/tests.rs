#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal) -> Transaction {
    Transaction {
        id: "txn-1".into(),
        description: "Grocery Store".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        category: "Food".into(),
    }
}

#[test]
fn test_transaction_fields() {
    let txn = make_txn(dec!(75.49));
    assert_eq!(txn.id, "txn-1");
    assert_eq!(txn.amount, dec!(75.49));
    assert_eq!(txn.date.to_string(), "2025-06-15");
}

// ── Budget ────────────────────────────────────────────────────

fn make_budget(amount: Decimal, spent: Decimal) -> Budget {
    Budget {
        id: "budget-1".into(),
        category: "Food".into(),
        amount,
        spent,
        color: "#4CC9F0".into(),
    }
}

#[test]
fn test_budget_new_defaults() {
    let budget = Budget::new("Gifts".into(), dec!(50), "#118AB2".into());
    assert!(budget.id.starts_with("budget-"));
    assert_eq!(budget.category, "Gifts");
    assert_eq!(budget.amount, dec!(50));
    assert_eq!(budget.spent, Decimal::ZERO);
    assert_eq!(budget.color, "#118AB2");
}

#[test]
fn test_budget_new_ids_are_unique() {
    let a = Budget::new("A".into(), dec!(1), "#118AB2".into());
    let b = Budget::new("B".into(), dec!(1), "#118AB2".into());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_usage_ratio() {
    let budget = make_budget(dec!(500), dec!(168.66));
    assert_eq!(budget.usage_ratio(), dec!(0.33732));
}

#[test]
fn test_usage_ratio_zero_limit() {
    let budget = make_budget(Decimal::ZERO, dec!(25));
    assert_eq!(budget.usage_ratio(), Decimal::ZERO);
}

#[test]
fn test_over_budget_is_strict() {
    // Spending exactly the limit is not over budget.
    let at_limit = make_budget(dec!(100), dec!(100));
    assert!(!at_limit.is_over_budget());
    assert_eq!(at_limit.usage_ratio(), Decimal::ONE);

    let over = make_budget(dec!(100), dec!(100.01));
    assert!(over.is_over_budget());
}

#[test]
fn test_remaining() {
    assert_eq!(make_budget(dec!(500), dec!(168.66)).remaining(), dec!(331.34));
    assert_eq!(make_budget(dec!(100), dec!(150)).remaining(), dec!(-50));
}

// ── Spending snapshots ────────────────────────────────────────

#[test]
fn test_spending_records() {
    let month = MonthlySpending {
        month: "Jun".into(),
        amount: dec!(1952),
    };
    assert_eq!(month.month, "Jun");

    let cat = CategorySpending {
        name: "Housing".into(),
        amount: dec!(1450),
        color: "#3A0CA3".into(),
    };
    assert_eq!(cat.color, "#3A0CA3");
}
