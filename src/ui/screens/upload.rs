use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::job::{JobOutcome, JobPhase};
use crate::ui::app::{App, UploadStep};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    render_step_indicator(f, chunks[0], app);

    match app.upload_step {
        UploadStep::SelectFile => render_file_browser(f, chunks[1], app),
        UploadStep::Details => render_details(f, chunks[1], app),
        UploadStep::Processing => render_processing(f, chunks[1], app),
        UploadStep::Complete => render_complete(f, chunks[1]),
        UploadStep::Cancelled => render_cancelled(f, chunks[1]),
        UploadStep::Failed => render_failed(f, chunks[1], app),
    }
}

fn render_step_indicator(f: &mut Frame, area: Rect, app: &App) {
    let steps = [
        (UploadStep::SelectFile, "1:File"),
        (UploadStep::Details, "2:Details"),
        (UploadStep::Processing, "3:Process"),
        (UploadStep::Complete, "4:Done"),
    ];
    // Cancelled and Failed end the flow mid-processing.
    let current_idx = steps
        .iter()
        .position(|(s, _)| *s == app.upload_step)
        .unwrap_or(2);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(theme::HEADER_BG)));
    for (i, (_, label)) in steps.iter().enumerate() {
        let style = if i == current_idx {
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if i < current_idx {
            Style::default().fg(theme::GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_DIM)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        if i < steps.len() - 1 {
            let connector_style = if i < current_idx {
                Style::default().fg(theme::GREEN)
            } else {
                Style::default().fg(theme::TEXT_DIM)
            };
            spans.push(Span::styled(" > ", connector_style));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_file_browser(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let mut path_spans = vec![
        Span::styled(" Path: ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            app.file_browser_path.display().to_string(),
            Style::default().fg(theme::ACCENT),
        ),
    ];
    if app.file_browser_input_focused || !app.file_browser_filter.is_empty() {
        path_spans.push(Span::styled("  filter: ", Style::default().fg(theme::TEXT_DIM)));
        path_spans.push(Span::styled(
            app.file_browser_filter.clone(),
            Style::default().fg(theme::YELLOW),
        ));
        if app.file_browser_input_focused {
            path_spans.push(Span::styled("█", Style::default().fg(theme::ACCENT)));
        }
    }
    let path_display = Paragraph::new(Line::from(path_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if app.file_browser_input_focused {
                theme::ACCENT
            } else {
                theme::OVERLAY
            }))
            .title(Span::styled(
                " Select PDF Statement ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(path_display, chunks[0]);

    // The cursor walks the filtered view, not the raw entry list.
    let filtered = app.file_browser_filtered();
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .skip(app.file_browser_cursor.scroll)
        .take(chunks[1].height.saturating_sub(2) as usize)
        .map(|(i, &entry_idx)| {
            let path = &app.file_browser_entries[entry_idx];
            let name = if Some(path.as_path()) == app.file_browser_path.parent() {
                "📁 ..".to_string()
            } else if path.is_dir() {
                format!(
                    "📁 {}",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
                )
            } else {
                format!(
                    "📄 {}",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
                )
            };

            let style = if i == app.file_browser_cursor.index && !app.file_browser_input_focused {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            ListItem::new(Line::from(Span::styled(name, style)))
        })
        .collect();

    let title = if filtered.is_empty() {
        " No PDF files here — j/k to navigate, . hidden files, Esc back ".to_string()
    } else {
        format!(
            " {} entries | j/k navigate, Enter select, Tab filter, . hidden ",
            filtered.len()
        )
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::dim_style())),
    );
    f.render_widget(list, chunks[1]);
}

fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let file_name = app
        .selected_file
        .as_deref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("statement.pdf");

    let password_display = if app.password_visible {
        app.password.clone()
    } else {
        "•".repeat(app.password.chars().count())
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Statement: ", Style::default().fg(theme::TEXT_DIM)),
            Span::styled(
                format!(" 📄 {file_name} "),
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Password (leave empty if none)",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {password_display}"),
                Style::default().fg(theme::TEXT).bg(theme::OVERLAY),
            ),
            Span::styled("█", Style::default().fg(theme::ACCENT).bg(theme::OVERLAY)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                " Tab {} password | Ctrl+u clear",
                if app.password_visible { "hide" } else { "show" }
            ),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [ Enter ] ",
                theme::success_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled("process statement   ", theme::normal_style()),
            Span::styled("[ Esc ] ", theme::dim_style()),
            Span::styled("choose another file", theme::dim_style()),
        ]),
    ];

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Statement Details ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(body, area);
}

fn render_processing(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Phase strip
            Constraint::Length(3), // Gauge
            Constraint::Min(2),    // Message + hint
        ])
        .split(area);

    let current_idx = JobPhase::ALL
        .iter()
        .position(|p| *p == app.job_phase)
        .unwrap_or(0);
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, phase) in JobPhase::ALL.iter().enumerate() {
        let style = if i == current_idx {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else if i < current_idx {
            Style::default().fg(theme::GREEN)
        } else {
            Style::default().fg(theme::TEXT_DIM)
        };
        let marker = if i < current_idx { "✓" } else { "•" };
        spans.push(Span::styled(format!("{marker} {} ", phase.label()), style));
        if i < JobPhase::ALL.len() - 1 {
            spans.push(Span::styled("─ ", Style::default().fg(theme::OVERLAY)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    format!(" {} ", app.job_phase.label()),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::SURFACE))
        .ratio(app.job_ratio.clamp(0.0, 1.0));
    f.render_widget(gauge, chunks[1]);

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", app.job_phase.message()),
            theme::normal_style(),
        )),
        Line::from(Span::styled(" Esc to cancel", theme::dim_style())),
    ]);
    f.render_widget(message, chunks[2]);
}

fn render_complete(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Statement processed!",
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your transactions are up to date.",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the dashboard",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GREEN)),
    );
    f.render_widget(msg, area);
}

fn render_cancelled(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Upload cancelled",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to pick another statement",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::YELLOW)),
    );
    f.render_widget(msg, area);
}

fn render_failed(f: &mut Frame, area: Rect, app: &App) {
    let reason = match &app.job_outcome {
        Some(JobOutcome::Failed(reason)) => reason.clone(),
        _ => "Something went wrong".into(),
    };
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Upload failed",
            Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(reason, theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to try again",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::RED)),
    );
    f.render_widget(msg, area);
}
