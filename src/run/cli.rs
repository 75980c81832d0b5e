use anyhow::Result;

use crate::engine::Standing;
use crate::store::Store;
use crate::ui::util::{format_amount, format_date, format_percent, truncate};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(),
        "transactions" | "t" => cli_transactions(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI — personal finance tracker");
    println!();
    println!("Usage: spendtui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print the monthly budget summary");
    println!("  transactions [query]          List transactions, optionally filtered");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary() -> Result<()> {
    let store = Store::new();
    let summary = store.budget_summary();

    println!("SpendTUI — {}", crate::data::MONTH_LABEL);
    println!("{}", "─".repeat(52));
    println!(
        "  Budget:  {} of {} ({} used)",
        format_amount(summary.total_spent),
        format_amount(summary.total_budget),
        format_percent(summary.usage_ratio()),
    );
    match summary.standing() {
        Standing::Remaining(amount) => {
            println!("  {} remaining", format_amount(amount));
        }
        Standing::OverBudget(amount) => {
            println!("  {} over budget", format_amount(amount));
        }
    }

    println!();
    println!("By category:");
    for budget in &store.budgets {
        let marker = if budget.is_over_budget() { "!" } else { " " };
        println!(
            " {marker}{:<18} {:>12} / {:<12} {:>5}",
            budget.category,
            format_amount(budget.spent),
            format_amount(budget.amount),
            format_percent(budget.usage_ratio()),
        );
    }

    let unbudgeted = store.unbudgeted_categories();
    if !unbudgeted.is_empty() {
        println!();
        println!("No budget set for: {}", unbudgeted.join(", "));
    }

    Ok(())
}

fn cli_transactions(args: &[String]) -> Result<()> {
    let mut store = Store::new();
    let query = args.join(" ");
    if !query.is_empty() {
        store.set_query(query.clone());
    }

    if store.visible.is_empty() {
        println!("No transactions matching '{query}'");
        return Ok(());
    }

    println!(
        "{:<14} {:<32} {:<16} {:>12}",
        "Date", "Description", "Category", "Amount"
    );
    println!("{}", "─".repeat(78));
    for txn in &store.visible {
        println!(
            "{:<14} {:<32} {:<16} {:>12}",
            format_date(txn.date),
            truncate(&txn.description, 32),
            txn.category,
            format_amount(txn.amount),
        );
    }
    println!("{}", "─".repeat(78));
    println!(
        "{} transactions, {} total",
        store.visible.len(),
        format_amount(store.visible_total()),
    );

    Ok(())
}
