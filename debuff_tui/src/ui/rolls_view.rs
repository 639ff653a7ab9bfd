//! Rolls tab view - simulated debuff rolls at the current difference

use super::{section, status_line, value_line};
use crate::app::App;
use debuff_core::format_chance;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Setup
            Constraint::Length(3), // Observed rate gauge
            Constraint::Min(0),    // History
        ])
        .split(area);

    draw_setup(f, app, chunks[0]);
    draw_gauge(f, app, chunks[1]);
    draw_history(f, app, chunks[2]);
}

fn draw_setup(f: &mut Frame, app: &App, area: Rect) {
    let calculation = app.calculator.calculation();

    let lines = vec![
        section("Next Batch"),
        value_line("Model", app.active_label().to_string(), Color::White),
        value_line("Difference", calculation.difference.to_string(), Color::White),
        value_line("Expected chance", calculation.display_chance(), Color::Cyan),
        value_line("Attempts", app.simulation.attempts().to_string(), Color::Yellow),
        status_line(app),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Roll Simulation "));

    f.render_widget(paragraph, area);
}

fn draw_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (ratio, label) = match app.simulation.latest() {
        Some(run) => (
            (run.summary.observed_rate() / 100.0).clamp(0.0, 1.0),
            format!(
                "observed {} vs expected {}",
                format_chance(run.summary.observed_rate()),
                format_chance(run.summary.chance)
            ),
        ),
        None => (0.0, "no rolls yet".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Latest "))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label(label);

    f.render_widget(gauge, area);
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .simulation
        .runs
        .iter()
        .map(|run| {
            let deviation = run.summary.deviation();
            let deviation_color = if deviation.abs() < 1.0 {
                Color::Green
            } else {
                Color::Yellow
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:24}", run.model), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("d={:<6}", run.difference),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>7}/{:<7}", run.summary.applied, run.summary.attempts),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {:>8}", format_chance(run.summary.observed_rate())),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" ({:+.2} pts)", deviation),
                    Style::default().fg(deviation_color),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" History (newest first) "),
    );

    f.render_widget(list, area);
}
