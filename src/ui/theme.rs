use ratatui::style::{Color, Modifier, Style};

use crate::engine::UsageTier;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

// Usage-tier status colors, one fixed color per tier.
pub(crate) const TIER_LOW: Color = Color::Rgb(0x06, 0xD6, 0xA0);
pub(crate) const TIER_MEDIUM: Color = Color::Rgb(0xF9, 0xC7, 0x4F);
pub(crate) const TIER_HIGH: Color = Color::Rgb(0xEF, 0x47, 0x6F);

pub(crate) fn tier_color(tier: UsageTier) -> Color {
    match tier {
        UsageTier::Low => TIER_LOW,
        UsageTier::Medium => TIER_MEDIUM,
        UsageTier::High => TIER_HIGH,
    }
}

/// Bridge a "#RRGGBB" display color into a terminal color. Anything
/// malformed renders dim rather than failing.
pub(crate) fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let (Some(r), Some(g), Some(b)) = (hex.get(0..2), hex.get(2..4), hex.get(4..6)) else {
        return TEXT_DIM;
    };
    if hex.len() != 6 {
        return TEXT_DIM;
    }
    match (
        u8::from_str_radix(r, 16),
        u8::from_str_radix(g, 16),
        u8::from_str_radix(b, 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => TEXT_DIM,
    }
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn success_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn over_budget_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
