//! Curve chart with the current input marker and reference lines

use crate::app::App;
use debuff_core::EVEN_DIFFERENCE;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let calculator = &app.calculator;
    let domain = calculator.domain();
    let curve = calculator.curve();
    let markers = calculator.markers();
    let calculation = calculator.calculation();

    let x_min = domain.min() as f64;
    let x_max = domain.max() as f64;

    let curve_data = curve.as_xy();
    let input_data: Vec<(f64, f64)> = curve
        .point_at(calculation.difference)
        .map(|p| vec![(p.difference as f64, p.chance)])
        .unwrap_or_default();
    let threshold_data: Vec<(f64, f64)> = markers
        .threshold
        .filter(|d| (x_min..=x_max).contains(d))
        .map(|d| vec![(d, 0.0), (d, 100.0)])
        .unwrap_or_default();
    let zero_data: Vec<(f64, f64)> = if (x_min..=x_max).contains(&EVEN_DIFFERENCE) {
        vec![(EVEN_DIFFERENCE, 0.0), (EVEN_DIFFERENCE, 100.0)]
    } else {
        Vec::new()
    };
    let low_band_data = vec![
        (x_min, markers.low_chance_ceiling),
        (x_max, markers.low_chance_ceiling),
    ];

    let mut datasets = vec![
        Dataset::default()
            .name("Debuff Chance (%)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&curve_data),
        Dataset::default()
            .name(format!("Tiny chance zone (≤{:.0}%)", markers.low_chance_ceiling))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&low_band_data),
    ];
    if !threshold_data.is_empty() {
        datasets.push(
            Dataset::default()
                .name("50/50 Threshold")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Gray))
                .data(&threshold_data),
        );
    }
    if !zero_data.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Attacker Bias")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&zero_data),
        );
    }
    if !input_data.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Your Input")
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
                .data(&input_data),
        );
    }

    let title = if input_data.is_empty() {
        format!(
            " Debuff Application Chance vs Accuracy - Resistance (input {} off chart) ",
            calculation.difference
        )
    } else {
        " Debuff Application Chance vs Accuracy - Resistance ".to_string()
    };

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title("Accuracy - Resistance")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("Chance (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 100.0])
                .labels(axis_labels(0.0, 100.0)),
        );

    f.render_widget(chart, area);
}

/// Five evenly spaced labels from `min` to `max`
fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    (0..=4)
        .map(|i| {
            let value = min + (max - min) * f64::from(i) / 4.0;
            Span::raw(format!("{:.0}", value))
        })
        .collect()
}
