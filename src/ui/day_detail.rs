//! Day detail screen rendering
//!
//! Renders the detailed view for a single day record selected from the
//! historical or forecast grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::DayRecord;

/// Renders the day detail view
pub fn render(frame: &mut Frame, area: Rect, city: &str, day: &DayRecord) {
    let full_date = day.date.format("%A, %B %-d, %Y").to_string();

    let lines = vec![
        Line::from(Span::styled(
            "\u{2190} Esc to overview",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            city.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(full_date, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}\u{00B0}C", day.max_temp.round() as i64),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Temperature Range: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{}\u{00B0}C - {}\u{00B0}C",
                    day.min_temp.round() as i64,
                    day.max_temp.round() as i64
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Precipitation: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} mm", day.precipitation),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Wind Speed: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} km/h", day.windspeed),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Day Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
