use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen, UploadStep};
use crate::engine::{SortDirection, SortKey};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("u", "Go to Upload", cmd_upload, r);
    register_command!("upload", "Go to Upload", cmd_upload, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("settings", "Go to Settings", cmd_settings, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "sort",
        "Sort transactions (e.g. :sort amount desc)",
        cmd_sort,
        r
    );
    register_command!(
        "filter",
        "Toggle a category filter (e.g. :filter Food)",
        cmd_filter,
        r
    );
    register_command!(
        "range",
        "Set date range (:range 7|30|3m|clear)",
        cmd_range,
        r
    );
    register_command!("clear", "Clear search and all filters", cmd_clear, r);
    register_command!(
        "add-budget",
        "Open the budget editor on a blank form",
        cmd_add_budget,
        r
    );
    register_command!("reset", "Reset all data to the sample set", cmd_reset, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_upload(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Upload;
    // A run already in flight keeps its state; only a fresh picker needs
    // the directory listing.
    if app.upload_step == UploadStep::SelectFile {
        app.refresh_file_browser();
    }
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_settings(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Settings;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.store.set_query(args.to_string());
    app.screen = Screen::Transactions;
    app.transaction_cursor.to_top();

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_sort(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Sorting by {} {}. Usage: :sort <date|amount> [asc|desc]",
            app.store.sort_key.as_str(),
            app.store.sort_direction.as_str()
        ));
        return Ok(());
    }

    let mut parts = args.split_whitespace();
    let key = match parts.next() {
        Some("date") => SortKey::Date,
        Some("amount") => SortKey::Amount,
        _ => {
            app.set_status("Usage: :sort <date|amount> [asc|desc]");
            return Ok(());
        }
    };
    let direction = match parts.next() {
        None => app.store.sort_direction,
        Some("asc") => SortDirection::Asc,
        Some("desc") => SortDirection::Desc,
        _ => {
            app.set_status("Usage: :sort <date|amount> [asc|desc]");
            return Ok(());
        }
    };

    app.store.set_sort(key, direction);
    app.screen = Screen::Transactions;
    app.transaction_cursor.to_top();
    app.set_status(format!("Sorted by {} {}", key.as_str(), direction.as_str()));
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :filter <category>. Example: :filter Food");
        return Ok(());
    }

    // Category membership is exact, so resolve what the user typed
    // against the categories that actually occur.
    let known = app.store.known_categories();
    let Some(canonical) = known.iter().find(|c| c.eq_ignore_ascii_case(args)) else {
        app.set_status(format!(
            "No transactions in category '{args}'. Categories: {}",
            known.join(", ")
        ));
        return Ok(());
    };

    if app.store.filter.categories.contains(canonical) {
        app.store.remove_category(canonical);
        app.set_status(format!("Removed filter: {canonical}"));
    } else {
        let mut categories = app.store.filter.categories.clone();
        categories.push(canonical.clone());
        app.store.set_categories(categories);
        app.set_status(format!("Filtering by: {canonical}"));
    }
    app.screen = Screen::Transactions;
    app.transaction_cursor.to_top();
    Ok(())
}

fn cmd_range(args: &str, app: &mut App) -> anyhow::Result<()> {
    let range = match args {
        "7" => super::app::preset_range(0),
        "30" => super::app::preset_range(1),
        "3m" => super::app::preset_range(2),
        "clear" => crate::engine::DateRange::default(),
        _ => {
            app.set_status("Usage: :range <7|30|3m|clear>");
            return Ok(());
        }
    };

    app.store.set_date_range(range);
    app.screen = Screen::Transactions;
    app.transaction_cursor.to_top();
    if args == "clear" {
        app.set_status("Date range cleared");
    } else {
        app.set_status(format!(
            "{} transactions in range",
            app.store.visible.len()
        ));
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.store.clear_filters();
    app.search_input.clear();
    app.transaction_cursor.to_top();
    app.set_status("Search and filters cleared");
    Ok(())
}

fn cmd_add_budget(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.open_editor_create();
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.confirm_message = "Reset all data to the sample set?".into();
    app.pending_action = Some(PendingAction::ResetData);
    app.input_mode = InputMode::Confirm;
    Ok(())
}
