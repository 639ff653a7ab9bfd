//! Calculator tab view - input form, result and key points above the chart

use super::{chance_color, chart_view, section, status_line, value_line};
use crate::app::App;
use debuff_core::{format_chance, StatField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Form + key points
            Constraint::Min(0),     // Chart
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(chunks[0]);

    draw_form(f, app, top[0]);
    draw_key_points(f, app, top[1]);
    chart_view::draw(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let calculation = app.calculator.calculation();
    let markers = app.calculator.markers();

    let mut lines = vec![section("Calculate Chance")];
    for field in StatField::all() {
        lines.push(field_line(app, *field));
    }
    lines.push(Line::from(""));
    lines.push(value_line(
        "Accuracy - Resistance:",
        calculation.difference.to_string(),
        Color::White,
    ));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:24}", "Chance to apply debuff:"),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            calculation.display_chance(),
            Style::default()
                .fg(chance_color(calculation.chance, markers.low_chance_ceiling))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if app.calculator.has_errors() {
        lines.push(Line::from(Span::styled(
            "Invalid input - showing last valid values",
            Style::default().fg(Color::Red),
        )));
    } else if markers.is_low_chance(calculation.chance) {
        lines.push(Line::from(Span::styled(
            format!("Tiny chance zone (≤{:.0}%)", markers.low_chance_ceiling),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(status_line(app));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Inputs "));

    f.render_widget(paragraph, area);
}

fn field_line(app: &App, field: StatField) -> Line<'static> {
    let focused = app.focused == field;
    let text = app.text(field);

    let mut spans = vec![
        Span::styled(
            if focused { "▶ " } else { "  " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:22}", field.name()),
            Style::default().fg(if focused { Color::White } else { Color::Gray }),
        ),
        Span::styled(
            format!("[{}{}]", text, if focused { "_" } else { "" }),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(if focused { Modifier::BOLD } else { Modifier::empty() }),
        ),
    ];

    if let Some(error) = app.calculator.error(field) {
        spans.push(Span::styled(
            format!("  ✗ {} (using {})", error, app.calculator.inputs().get(field)),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

fn draw_key_points(f: &mut Frame, app: &App, area: Rect) {
    let points = app.calculator.key_points();
    let model = app.calculator.model();

    let fifty = match points.fifty_fifty {
        Some(d) => format!("{:.0} diff", d),
        None => "never".to_string(),
    };

    let lines = vec![
        section("Key Points"),
        value_line("50/50 chance at", fifty, Color::Blue),
        value_line(
            "Chance at 0 diff",
            format_chance(points.at_zero),
            Color::Green,
        ),
        value_line("Min chance", format_chance(points.floor), Color::Red),
        value_line("Max chance", format_chance(points.ceiling), Color::Magenta),
        Line::from(""),
        value_line("Model", app.active_label().to_string(), Color::White),
        Line::from(Span::styled(
            model.formula(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Key Points "))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
