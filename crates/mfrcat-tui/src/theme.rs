//! Workshop palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const AMBER: Color = Color::Rgb(255, 184, 108); // #ffb86c
pub const STEEL_BLUE: Color = Color::Rgb(130, 170, 255); // #82aaff
pub const MINT: Color = Color::Rgb(152, 224, 158); // #98e09e
pub const SIGNAL_RED: Color = Color::Rgb(240, 98, 92); // #f0625c

// ── Extended Palette ──────────────────────────────────────────────────

pub const FOG: Color = Color::Rgb(196, 200, 212); // #c4c8d4
pub const GRAPHITE: Color = Color::Rgb(96, 104, 128); // #606880
pub const BG_PANEL: Color = Color::Rgb(24, 26, 32); // #181a20
pub const BG_ROW: Color = Color::Rgb(40, 44, 56); // #282c38

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(STEEL_BLUE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(GRAPHITE)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(AMBER)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(FOG)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default().bg(BG_ROW).add_modifier(Modifier::BOLD)
}

/// Error text (failed loads, failed fetches).
pub fn error_style() -> Style {
    Style::default().fg(SIGNAL_RED)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(GRAPHITE)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}
