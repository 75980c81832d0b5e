use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::engine::{category_color, SortKey};
use crate::ui::app::{App, FILTER_PRESETS};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary strip
            Constraint::Length(1), // Active filter chips
            Constraint::Min(5),    // Table
        ])
        .split(area);

    render_summary(f, chunks[0], app);
    render_chips(f, chunks[1], app);
    render_table(f, chunks[2], app);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} Transactions", app.store.visible.len()),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(theme::OVERLAY)),
        Span::styled(
            format!("{} total", format_amount(app.store.visible_total())),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(theme::OVERLAY)),
        Span::styled("Last 30 days", theme::dim_style()),
    ]);

    let strip = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(strip, area);
}

/// One chip per active filter. Individual removal goes through the
/// overlay or `:filter`; `c` clears everything at once.
fn render_chips(f: &mut Frame, area: Rect, app: &App) {
    let filter = &app.store.filter;
    if filter.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            " No filters active — press f to filter",
            theme::dim_style(),
        )));
        f.render_widget(hint, area);
        return;
    }

    let chip_style = Style::default().fg(theme::HEADER_BG).bg(theme::ACCENT);
    let mut spans: Vec<Span> = vec![Span::styled(" ", theme::dim_style())];

    if !filter.query.trim().is_empty() {
        spans.push(Span::styled(
            format!(" /{} ", truncate(filter.query.trim(), 16)),
            Style::default().fg(theme::HEADER_BG).bg(theme::YELLOW),
        ));
        spans.push(Span::raw(" "));
    }
    for category in &filter.categories {
        spans.push(Span::styled(format!(" {category} "), chip_style));
        spans.push(Span::raw(" "));
    }
    if let (Some(start), Some(end)) = (filter.date_range.start, filter.date_range.end) {
        spans.push(Span::styled(
            format!(" {} – {} ", format_date(start), format_date(end)),
            chip_style,
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  c clear all", theme::dim_style()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.store.visible.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let arrow = app.store.sort_direction.arrow();
    let date_label = if app.store.sort_key == SortKey::Date {
        format!("Date {arrow}")
    } else {
        "Date".into()
    };
    let amount_label = if app.store.sort_key == SortKey::Amount {
        format!("Amount {arrow}")
    } else {
        "Amount".into()
    };

    let header_labels = [
        date_label.as_str(),
        "Description",
        "Category",
        amount_label.as_str(),
    ];
    let header_cells = header_labels
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .store
        .visible
        .iter()
        .enumerate()
        .skip(app.transaction_cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let is_cursor = i == app.transaction_cursor.index;

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let category_cell = if is_cursor {
                Cell::from(txn.category.clone())
            } else {
                Cell::from(Span::styled(
                    txn.category.clone(),
                    Style::default().fg(theme::hex_color(category_color(&txn.category))),
                ))
            };

            Row::new(vec![
                Cell::from(format!("  {}", format_date(txn.date))),
                Cell::from(truncate(&txn.description, 40)),
                category_cell,
                Cell::from(format_amount(txn.amount)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Transactions ({}) {}",
                    app.store.visible.len(),
                    if !app.store.filter.query.trim().is_empty() {
                        format!("search: '{}' ", app.store.filter.query.trim())
                    } else {
                        String::new()
                    }
                ),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = if !app.store.filter.query.trim().is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "No transactions matching '{}'",
                    app.store.filter.query.trim()
                ),
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to clear the search",
                theme::dim_style(),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No transactions match the active filters",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press c to clear filters, or f to adjust them",
                theme::dim_style(),
            )),
        ]
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Transactions (0) ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(msg).centered().block(block), area);
}

/// Staged filter editor. Nothing here touches the store; Enter hands the
/// staged selections to `apply_filter_overlay`.
pub(crate) fn render_filter_overlay(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        " Categories",
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))];

    let cats = app.filter_options.len();
    for (i, category) in app.filter_options.iter().enumerate() {
        let mark = if app.filter_selected.contains(category) {
            "[x]"
        } else {
            "[ ]"
        };
        lines.push(row_line(
            format!("  {mark} {category}"),
            i == app.filter_cursor.index,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Date range",
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    )));

    for (j, preset) in FILTER_PRESETS.iter().enumerate() {
        let staged = app.filter_range == crate::ui::app::preset_range(j);
        let mark = if staged { "(x)" } else { "( )" };
        lines.push(row_line(
            format!("  {mark} {preset}"),
            cats + j == app.filter_cursor.index,
        ));
    }

    let none_mark = if app.filter_range.is_bounded() {
        "( )"
    } else {
        "(x)"
    };
    lines.push(row_line(
        format!("  {none_mark} Any date"),
        cats + FILTER_PRESETS.len() == app.filter_cursor.index,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Space toggle | Enter apply | r reset | Esc close",
        theme::dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 44.min(area.width.saturating_sub(4));
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
                " Filter Transactions ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(overlay, popup_area);
}

fn row_line(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(text, theme::selected_style()))
    } else {
        Line::from(Span::styled(text, theme::normal_style()))
    }
}
