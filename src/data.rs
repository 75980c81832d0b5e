//! Static sample data. The tracker has no persistence or ingestion; these
//! collections seed the store at startup and again on reset.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::category_color;
use crate::models::{Budget, CategorySpending, MonthlySpending, Transaction};

/// The month the sample set covers, shown in the status bar and summaries.
pub(crate) const MONTH_LABEL: &str = "June 2025";

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap_or_default()
}

pub(crate) fn transactions() -> Vec<Transaction> {
    [
        ("txn-1", "Grocery Store", 7549, 15, "Food"),
        ("txn-2", "Gas Station", 4523, 14, "Transportation"),
        ("txn-3", "Coffee Shop", 567, 13, "Food"),
        ("txn-4", "Movie Tickets", 3200, 10, "Entertainment"),
        ("txn-5", "Clothing Store", 12499, 8, "Shopping"),
        ("txn-6", "Restaurant", 8750, 7, "Food"),
        ("txn-7", "Uber Ride", 1875, 6, "Transportation"),
        ("txn-8", "Monthly Rent", 145000, 1, "Housing"),
        ("txn-9", "Internet Bill", 7999, 2, "Utilities"),
        ("txn-10", "Pharmacy", 3247, 4, "Health"),
    ]
    .into_iter()
    .map(|(id, description, cents, day, category)| Transaction {
        id: id.into(),
        description: description.into(),
        amount: Decimal::new(cents, 2),
        date: june(day),
        category: category.into(),
    })
    .collect()
}

pub(crate) fn budgets() -> Vec<Budget> {
    [
        ("budget-1", "Food", 50000, 16866),
        ("budget-2", "Transportation", 20000, 6398),
        ("budget-3", "Entertainment", 15000, 3200),
        ("budget-4", "Shopping", 30000, 12499),
        ("budget-5", "Housing", 150000, 145000),
        ("budget-6", "Utilities", 20000, 7999),
        ("budget-7", "Health", 10000, 3247),
    ]
    .into_iter()
    .map(|(id, category, amount_cents, spent_cents)| Budget {
        id: id.into(),
        category: category.into(),
        amount: Decimal::new(amount_cents, 2),
        spent: Decimal::new(spent_cents, 2),
        color: category_color(category).into(),
    })
    .collect()
}

pub(crate) fn monthly_spending() -> Vec<MonthlySpending> {
    [
        ("Jan", 2312),
        ("Feb", 1980),
        ("Mar", 2350),
        ("Apr", 2590),
        ("May", 2190),
        ("Jun", 1952),
    ]
    .into_iter()
    .map(|(month, dollars)| MonthlySpending {
        month: month.into(),
        amount: Decimal::from(dollars),
    })
    .collect()
}

pub(crate) fn spending_by_category() -> Vec<CategorySpending> {
    [
        ("Food", 16866),
        ("Transportation", 6398),
        ("Entertainment", 3200),
        ("Shopping", 12499),
        ("Housing", 145000),
        ("Utilities", 7999),
        ("Health", 3247),
    ]
    .into_iter()
    .map(|(name, cents)| CategorySpending {
        name: name.into(),
        amount: Decimal::new(cents, 2),
        color: category_color(name).into(),
    })
    .collect()
}
