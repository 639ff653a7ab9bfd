//! Models tab view - preset list and details of the selected preset

use super::{section, status_line, value_line};
use crate::app::App;
use debuff_core::{format_chance, ChanceModel, DebuffModel, KeyPoints};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(area);

    draw_preset_list(f, app, chunks[0]);
    draw_preset_details(f, app, chunks[1]);
}

fn draw_preset_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .presets
        .models
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let active = i == app.active_preset;
            let selected = i == app.selected_preset;

            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(if selected { "▶ " } else { "  " }, style),
                Span::styled(preset.label().to_string(), style),
                Span::styled(
                    if active { "  (active)" } else { "" },
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Presets ({}) ", app.presets_source)),
    );

    f.render_widget(list, area);
}

fn draw_preset_details(f: &mut Frame, app: &App, area: Rect) {
    let Some(preset) = app.presets.models.get(app.selected_preset) else {
        return;
    };
    let model = preset.curve;
    let points = KeyPoints::for_model(&model);

    let mut lines = vec![
        section(preset.label()),
        value_line("Id", preset.id.clone(), Color::White),
        value_line("Kind", model.kind_name().to_string(), Color::White),
        Line::from(Span::styled(
            model.formula(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section("Parameters"),
    ];
    lines.extend(parameter_lines(&model));
    lines.push(Line::from(""));
    lines.push(section("Key Points"));
    lines.push(value_line(
        "50/50 chance at",
        points
            .fifty_fifty
            .map(|d| format!("{:.2} diff", d))
            .unwrap_or_else(|| "never".to_string()),
        Color::Blue,
    ));
    lines.push(value_line("Chance at 0 diff", format_chance(points.at_zero), Color::Green));
    lines.push(value_line("Floor", format_chance(model.floor()), Color::Red));
    lines.push(value_line("Ceiling", format_chance(model.ceiling()), Color::Magenta));
    lines.push(Line::from(""));
    lines.push(status_line(app));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn parameter_lines(model: &DebuffModel) -> Vec<Line<'static>> {
    match model {
        DebuffModel::Calibrated(m) => vec![
            value_line("min_cap", m.min_cap.to_string(), Color::Cyan),
            value_line("max_cap", m.max_cap.to_string(), Color::Cyan),
            value_line("midpoint", m.midpoint.to_string(), Color::Cyan),
            value_line("steepness", m.steepness.to_string(), Color::Cyan),
        ],
        DebuffModel::Scaled(m) => vec![
            value_line("amplitude", m.amplitude.to_string(), Color::Cyan),
            value_line("offset", m.offset.to_string(), Color::Cyan),
            value_line("steepness", m.steepness.to_string(), Color::Cyan),
            value_line("scale", m.scale.to_string(), Color::Cyan),
        ],
    }
}
