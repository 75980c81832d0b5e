use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

/// Row count, shared with the key handlers that move the selection.
pub(crate) const ROWS: usize = 3;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_rows(f, chunks[0], app);
    render_footer(f, chunks[1]);
}

fn render_rows(f: &mut Frame, area: Rect, app: &App) {
    let toggle = |on: bool| if on { "[on] " } else { "[off]" };
    let rows: [(&str, String); ROWS] = [
        ("Dark Mode", toggle(app.dark_mode).to_string()),
        ("Notifications", toggle(app.notifications).to_string()),
        ("Reset Sample Data", "restores the bundled dataset".to_string()),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == app.settings_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let value_style = if i == app.settings_index {
                style
            } else if i == 2 {
                theme::dim_style()
            } else {
                Style::default().fg(theme::ACCENT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {label:<22}"), style),
                Span::styled(value.clone(), value_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Settings — Space or Enter to change ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" SpendTUI v{}", env!("CARGO_PKG_VERSION")),
        theme::dim_style(),
    )));
    f.render_widget(footer, area);
}
