use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::engine::{EditorField, EditorMode, Standing, UsageTier};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Overall summary
            Constraint::Length(1), // Unbudgeted categories
            Constraint::Min(5),    // Budget list
        ])
        .split(area);

    render_summary(f, chunks[0], app);
    render_unbudgeted(f, chunks[1], app);
    render_list(f, chunks[2], app);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.store.budget_summary();
    let tier = summary.tier();
    let color = theme::tier_color(tier);
    let ratio = summary.usage_ratio().to_f64().unwrap_or(0.0);

    let bar_width = (area.width.saturating_sub(6) as usize).min(40);
    let standing_line = match summary.standing() {
        Standing::Remaining(amount) => Line::from(Span::styled(
            format!(" {} remaining", format_amount(amount)),
            theme::success_style(),
        )),
        Standing::OverBudget(amount) => Line::from(Span::styled(
            format!(" {} over budget", format_amount(amount)),
            theme::over_budget_style().add_modifier(Modifier::BOLD),
        )),
    };

    let text = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", format_amount(summary.total_spent)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("of {} ", format_amount(summary.total_budget)),
                theme::normal_style(),
            ),
            Span::styled(
                format!("({} used)", format_percent(summary.usage_ratio())),
                theme::dim_style(),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", create_progress_bar(ratio.min(1.0), bar_width)),
            Style::default().fg(color),
        )),
        standing_line,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Monthly Budget — {} ", app.month_label),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(text, area);
}

/// Transaction categories with no budget. Informational only.
fn render_unbudgeted(f: &mut Frame, area: Rect, app: &App) {
    let unbudgeted = app.store.unbudgeted_categories();
    if unbudgeted.is_empty() {
        return;
    }
    let notice = Paragraph::new(Line::from(Span::styled(
        format!(" No budget set for: {}", unbudgeted.join(", ")),
        theme::dim_style(),
    )));
    f.render_widget(notice, area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    if app.store.budgets.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .budgets
        .iter()
        .enumerate()
        .skip(app.budget_cursor.scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, budget)| {
            let ratio = budget.usage_ratio();
            let tier = UsageTier::from_ratio(ratio);
            let color = theme::tier_color(tier);

            let style = if i == app.budget_cursor.index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = create_progress_bar(ratio.to_f64().unwrap_or(0.0).min(1.0), 20);
            let display_name = truncate(&budget.category, 17);
            let over_marker = if budget.is_over_budget() { " OVER" } else { "" };

            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(theme::hex_color(&budget.color))),
                Span::styled(format!("{display_name:<18}"), style),
                Span::styled(
                    format!(
                        "{} of {} ",
                        format_amount(budget.spent),
                        format_amount(budget.amount)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:>4}{over_marker}", format_percent(ratio)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budgets ({}) ", app.store.budgets.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budgets yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Press a to add a spending limit for a category",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Budgets ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(msg, area);
}

/// The category editor form. Draft state lives in `BudgetEditor`; this
/// only paints it.
pub(crate) fn render_editor_overlay(f: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = &app.editor else {
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Category",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        field_line(&editor.category, editor.focus == EditorField::Category),
        Line::from(""),
        Line::from(Span::styled(
            " Monthly limit",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        field_line(
            &format!("$ {}", editor.amount),
            editor.focus == EditorField::Amount,
        ),
    ];

    if let EditorMode::Edit { id } = &editor.mode {
        if let Some(budget) = app.store.budget(id) {
            let position = if budget.is_over_budget() {
                format!("{} over", format_amount(-budget.remaining()))
            } else {
                format!("{} left", format_amount(budget.remaining()))
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    " Current spending: {} ({} used, {position})",
                    format_amount(budget.spent),
                    format_percent(budget.usage_ratio())
                ),
                theme::dim_style(),
            )));
        }
    }

    lines.push(Line::from(""));
    match &editor.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!(" {error}"),
            theme::over_budget_style(),
        ))),
        None => {
            let save_style = if editor.is_valid() {
                theme::success_style().add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            lines.push(Line::from(vec![
                Span::styled(" [ Save ]", save_style),
                Span::styled("  Tab field | Enter save | Esc cancel", theme::dim_style()),
            ]));
        }
    }

    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 48.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let overlay = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(
                format!(" {} ", editor.title()),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(overlay, popup_area);
}

fn field_line(value: &str, focused: bool) -> Line<'static> {
    if focused {
        Line::from(vec![
            Span::styled(
                format!("  {value}"),
                Style::default().fg(theme::TEXT).bg(theme::OVERLAY),
            ),
            Span::styled("█", Style::default().fg(theme::ACCENT).bg(theme::OVERLAY)),
        ])
    } else {
        Line::from(Span::styled(
            format!("  {value}"),
            theme::normal_style(),
        ))
    }
}

fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
