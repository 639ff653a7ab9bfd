//! Help tab view

use crate::app::App;
use debuff_core::{format_chance, LOW_CHANCE_PERCENT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let points = app.calculator.key_points();

    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Calculator ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("↑/↓", "Switch between accuracy and resistance"),
        key_line("0-9  -  +", "Type into the selected field"),
        key_line("Backspace / Del", "Delete a character / clear the field"),
        key_line("←/→  PgUp/PgDn", "Adjust by 1 / by 10"),
        key_line("r", "Reset both fields to 100"),
        key_line("x", "Export the curve to debuff_curve.json"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Models & Rolls ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("Enter (Models)", "Activate the selected preset"),
        key_line("←/→ (Rolls)", "Change batch size"),
        key_line("Enter/Space (Rolls)", "Roll a batch at the current difference"),
        key_line("c (Rolls)", "Clear roll history"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Mechanics ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Debuff chance:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  d = Accuracy - Resistance"),
        Line::from(format!("  Chance = {}", app.calculator.model().formula())),
        Line::from(format!(
            "  Active model: floor {}, ceiling {}, chance at d = 0: {}",
            format_chance(points.floor),
            format_chance(points.ceiling),
            format_chance(points.at_zero)
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Inputs:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Whole numbers only. Invalid text is flagged and"),
        Line::from("  the last valid value keeps driving the result."),
        Line::from(""),
        Line::from(Span::styled(
            "Tiny chance zone:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!("  Chances at or below {:.0}% are marked red", LOW_CHANCE_PERCENT)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:22}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
