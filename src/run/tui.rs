use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::DateRange;
use crate::ui::app::{preset_range, App, InputMode, PendingAction, Screen, UploadStep};
use crate::ui::commands;

/// Input poll timeout. Keeps the screen repainting while a background
/// job reports progress.
const TICK: Duration = Duration::from_millis(100);

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();
    app.refresh_file_browser();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.poll_job();

        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            if app.show_filter {
                handle_filter_input(key, app);
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if app.screen == Screen::Upload {
        match app.upload_step {
            UploadStep::SelectFile if app.file_browser_input_focused => {
                handle_file_browser_input(key, app);
                return Ok(());
            }
            UploadStep::Details => {
                handle_upload_details_input(key, app);
                return Ok(());
            }
            UploadStep::Processing => {
                handle_upload_processing_input(key, app);
                return Ok(());
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
            app.store.set_query(String::new());
            app.transaction_cursor.to_top();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Transactions),
        KeyCode::Char('3') => switch_screen(app, Screen::Upload),
        KeyCode::Char('4') => switch_screen(app, Screen::Budgets),
        KeyCode::Char('5') => switch_screen(app, Screen::Settings),
        KeyCode::Tab
            if app.screen == Screen::Upload && app.upload_step == UploadStep::SelectFile =>
        {
            app.file_browser_input_focused = true;
        }
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('.')
            if app.screen == Screen::Upload && app.upload_step == UploadStep::SelectFile =>
        {
            app.file_browser_show_hidden = !app.file_browser_show_hidden;
            app.refresh_file_browser();
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('f') if app.screen == Screen::Transactions => {
            app.open_filter_overlay();
        }
        KeyCode::Char('s') if app.screen == Screen::Transactions => {
            app.store.toggle_sort_key();
            app.transaction_cursor.to_top();
            app.set_status(format!(
                "Sorted by {} {}",
                app.store.sort_key.as_str(),
                app.store.sort_direction.as_str()
            ));
        }
        KeyCode::Char('S') if app.screen == Screen::Transactions => {
            app.store.toggle_sort_direction();
            app.transaction_cursor.to_top();
            app.set_status(format!(
                "Sorted by {} {}",
                app.store.sort_key.as_str(),
                app.store.sort_direction.as_str()
            ));
        }
        KeyCode::Char('c') if app.screen == Screen::Transactions => {
            app.store.clear_filters();
            app.search_input.clear();
            app.transaction_cursor.to_top();
            app.set_status("Search and filters cleared");
        }
        KeyCode::Char('a') if app.screen == Screen::Budgets => {
            app.open_editor_create();
        }
        KeyCode::Char(' ') if app.screen == Screen::Settings => {
            activate_settings_row(app);
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_file_browser_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => {
            app.file_browser_filter.push(c);
            app.file_browser_cursor.to_top();
        }
        KeyCode::Backspace => {
            if app.file_browser_filter.pop().is_none() {
                if let Some(parent) = app.file_browser_path.parent().map(|p| p.to_path_buf()) {
                    app.file_browser_path = parent;
                    app.refresh_file_browser();
                }
            }
            app.file_browser_cursor.to_top();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.file_browser_input_focused = false;
        }
        KeyCode::Esc => {
            if !app.file_browser_filter.is_empty() {
                app.file_browser_filter.clear();
                app.file_browser_cursor.to_top();
            } else {
                app.file_browser_input_focused = false;
            }
        }
        KeyCode::Enter => {
            let filtered = app.file_browser_filtered();
            if filtered.len() == 1 {
                let path = app.file_browser_entries[filtered[0]].clone();
                if path.is_dir() {
                    app.file_browser_path = path;
                    app.refresh_file_browser();
                } else {
                    choose_statement(app, path);
                }
            } else {
                app.file_browser_input_focused = false;
            }
        }
        _ => {}
    }
}

fn handle_upload_details_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.start_upload(),
        KeyCode::Esc => {
            app.reset_upload();
            app.set_status("Statement removed");
        }
        KeyCode::Tab => {
            app.password_visible = !app.password_visible;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.password.clear();
        }
        KeyCode::Backspace => {
            app.password.pop();
        }
        KeyCode::Char(c) => {
            app.password.push(c);
        }
        _ => {}
    }
}

fn handle_upload_processing_input(key: event::KeyEvent, app: &mut App) {
    // Cancellation is cooperative; the outcome lands via poll_job.
    if key.code == KeyCode::Esc {
        app.cancel_upload();
    }
}

fn handle_filter_input(key: event::KeyEvent, app: &mut App) {
    let len = app.filter_row_count();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.filter_cursor.down(len, len.max(1)),
        KeyCode::Char('k') | KeyCode::Up => app.filter_cursor.up(),
        KeyCode::Char('g') => app.filter_cursor.to_top(),
        KeyCode::Char('G') => app.filter_cursor.to_bottom(len, len.max(1)),
        KeyCode::Char(' ') => toggle_filter_row(app),
        KeyCode::Char('r') => {
            app.filter_selected.clear();
            app.filter_range = DateRange::default();
        }
        KeyCode::Enter => app.apply_filter_overlay(),
        KeyCode::Esc => {
            app.show_filter = false;
        }
        _ => {}
    }
}

/// Space on an overlay row: toggle a category, stage a preset range, or
/// clear the staged range.
fn toggle_filter_row(app: &mut App) {
    let idx = app.filter_cursor.index;
    let cats = app.filter_options.len();
    if idx < cats {
        let category = app.filter_options[idx].clone();
        if let Some(pos) = app.filter_selected.iter().position(|c| *c == category) {
            app.filter_selected.remove(pos);
        } else {
            app.filter_selected.push(category);
        }
    } else if idx < cats + crate::ui::app::FILTER_PRESETS.len() {
        app.filter_range = preset_range(idx - cats);
    } else {
        app.filter_range = DateRange::default();
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.screen = Screen::Transactions;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.store.set_query(String::new());
            app.transaction_cursor.to_top();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            // Live search: re-filter as you type
            app.screen = Screen::Transactions;
            app.store.set_query(app.search_input.clone());
            app.transaction_cursor.to_top();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.screen = Screen::Transactions;
            app.store.set_query(app.search_input.clone());
            app.transaction_cursor.to_top();
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.commit_editor(),
        KeyCode::Esc => {
            app.cancel_editor();
            app.set_status("Edit cancelled");
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            if let Some(editor) = app.editor.as_mut() {
                editor.toggle_focus();
            }
        }
        KeyCode::Backspace => {
            if let Some(editor) = app.editor.as_mut() {
                editor.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(editor) = app.editor.as_mut() {
                editor.push_char(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::ResetData => {
                        app.store.reset();
                        app.search_input.clear();
                        app.transaction_cursor.to_top();
                        app.budget_cursor.to_top();
                        app.set_status("Sample data restored");
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Transactions => app.transaction_cursor.clamp(app.store.visible.len()),
        Screen::Upload => {
            if app.upload_step == UploadStep::SelectFile {
                app.refresh_file_browser();
            }
        }
        Screen::Budgets => app.budget_cursor.clamp(app.store.budgets.len()),
        _ => {}
    }
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let page = app.transaction_page();
            app.transaction_cursor.down(app.store.visible.len(), page);
        }
        Screen::Upload if app.upload_step == UploadStep::SelectFile => {
            let len = app.file_browser_filtered().len();
            let page = app.file_browser_page();
            app.file_browser_cursor.down(len, page);
        }
        Screen::Budgets => {
            let page = app.budget_page();
            app.budget_cursor.down(app.store.budgets.len(), page);
        }
        Screen::Settings => {
            if app.settings_index + 1 < crate::ui::screens::settings::ROWS {
                app.settings_index += 1;
            }
        }
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => app.transaction_cursor.up(),
        Screen::Upload if app.upload_step == UploadStep::SelectFile => {
            if app.file_browser_cursor.index == 0 {
                app.file_browser_input_focused = true;
            } else {
                app.file_browser_cursor.up();
            }
        }
        Screen::Budgets => app.budget_cursor.up(),
        Screen::Settings => {
            app.settings_index = app.settings_index.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => app.transaction_cursor.to_top(),
        Screen::Upload if app.upload_step == UploadStep::SelectFile => {
            app.file_browser_cursor.to_top();
        }
        Screen::Budgets => app.budget_cursor.to_top(),
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let page = app.transaction_page();
            app.transaction_cursor
                .to_bottom(app.store.visible.len(), page);
        }
        Screen::Upload if app.upload_step == UploadStep::SelectFile => {
            let len = app.file_browser_filtered().len();
            let page = app.file_browser_page();
            app.file_browser_cursor.to_bottom(len, page);
        }
        Screen::Budgets => {
            let page = app.budget_page();
            app.budget_cursor.to_bottom(app.store.budgets.len(), page);
        }
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Budgets => app.open_editor_edit(),
        Screen::Settings => activate_settings_row(app),
        Screen::Upload => match app.upload_step {
            UploadStep::SelectFile => {
                let filtered = app.file_browser_filtered();
                if let Some(&real_idx) = filtered.get(app.file_browser_cursor.index) {
                    let path = app.file_browser_entries[real_idx].clone();
                    if path.is_dir() {
                        app.file_browser_path = path;
                        app.refresh_file_browser();
                    } else {
                        choose_statement(app, path);
                    }
                }
            }
            UploadStep::Complete => {
                app.reset_upload();
                app.screen = Screen::Dashboard;
            }
            UploadStep::Cancelled | UploadStep::Failed => {
                app.reset_upload();
            }
            // Details and Processing are handled before the main match
            _ => {}
        },
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Upload => match app.upload_step {
            UploadStep::SelectFile => {
                if !app.file_browser_filter.is_empty() {
                    app.file_browser_filter.clear();
                    app.file_browser_cursor.to_top();
                } else {
                    app.screen = Screen::Dashboard;
                }
            }
            UploadStep::Complete | UploadStep::Cancelled | UploadStep::Failed => {
                app.reset_upload();
                app.screen = Screen::Dashboard;
            }
            _ => {}
        },
        _ => {
            app.status_message.clear();
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.store.set_query(String::new());
                app.transaction_cursor.to_top();
                app.set_status("Search cleared");
            }
        }
    }
}

fn activate_settings_row(app: &mut App) {
    match app.settings_index {
        0 => {
            app.dark_mode = !app.dark_mode;
            app.set_status(if app.dark_mode {
                "Dark mode on"
            } else {
                "Dark mode off"
            });
        }
        1 => {
            app.notifications = !app.notifications;
            app.set_status(if app.notifications {
                "Notifications on"
            } else {
                "Notifications off"
            });
        }
        _ => {
            app.confirm_message = "Reset all data to the sample set?".into();
            app.pending_action = Some(PendingAction::ResetData);
            app.input_mode = InputMode::Confirm;
        }
    }
}

fn choose_statement(app: &mut App, path: PathBuf) {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("statement")
        .to_string();
    app.selected_file = Some(path);
    app.upload_step = UploadStep::Details;
    app.set_status(format!("Selected: {name}"));
}
