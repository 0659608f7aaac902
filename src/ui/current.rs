//! Current weather screen rendering
//!
//! Renders the current conditions card for the searched city and, when
//! suggestions were returned, the "things to do" side panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{CurrentWeather, SkyCondition};

/// Sky condition to icon mapping
pub fn sky_icon(condition: &SkyCondition) -> &'static str {
    match condition {
        SkyCondition::ClearSky => "\u{2600}",      // ☀
        SkyCondition::PartlyCloudy => "\u{26C5}",  // ⛅
        SkyCondition::Foggy => "\u{1F32B}",        // 🌫
        SkyCondition::Drizzle => "\u{1F327}",      // 🌧
        SkyCondition::Rainy => "\u{1F327}",        // 🌧
        SkyCondition::RainShowers => "\u{1F326}",  // 🌦
        SkyCondition::Snowy => "\u{2744}",         // ❄
        SkyCondition::SnowShowers => "\u{2744}",   // ❄
        SkyCondition::Thunderstorm => "\u{26C8}",  // ⛈
        SkyCondition::Overcast => "\u{2601}",      // ☁
    }
}

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp: f64) -> Color {
    if temp >= 30.0 {
        Color::Red
    } else if temp >= 25.0 {
        Color::LightRed
    } else if temp >= 20.0 {
        Color::Yellow
    } else if temp >= 10.0 {
        Color::Green
    } else if temp >= 0.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the current weather screen
///
/// The weather card fills the width; when suggestions are present a
/// side panel takes the right third, matching the original layout of
/// card plus activities panel.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    weather: &CurrentWeather,
    suggestions: &[String],
) {
    if suggestions.is_empty() {
        render_weather_card(frame, area, app.city(), weather);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);

    render_weather_card(frame, chunks[0], app.city(), weather);
    render_suggestions_panel(frame, chunks[1], app.city(), suggestions);
}

/// Renders the bordered card with temperature, condition, and details
fn render_weather_card(frame: &mut Frame, area: Rect, city: &str, weather: &CurrentWeather) {
    let temp_line = Line::from(vec![
        Span::raw(sky_icon(&weather.condition)),
        Span::raw("  "),
        Span::styled(
            format!("{}\u{00B0}C", weather.temperature),
            Style::default()
                .fg(temperature_color(weather.temperature))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let lines = vec![
        Line::from(Span::styled(
            city.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        temp_line,
        Line::from(Span::styled(
            weather.condition.label(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        detail_line("Humidity", format!("{}%", weather.humidity)),
        detail_line("Precipitation", format!("{}%", weather.precipitation)),
        detail_line("Wind Speed", format!("{} km/h", weather.windspeed)),
    ];

    let block = Block::default()
        .title(" Current Weather ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Renders the activity suggestions side panel
fn render_suggestions_panel(frame: &mut Frame, area: Rect, city: &str, suggestions: &[String]) {
    let mut lines = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Yellow)),
            Span::raw(suggestion.clone()),
        ]));
    }

    let block = Block::default()
        .title(format!(" Things to Do in {} ", city))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Creates a label/value detail line
fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
