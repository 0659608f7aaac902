//! Search bar, status line, and help footer rendering
//!
//! The search input sits at the top of every screen; the status line
//! below it carries pipeline errors, and the footer lists key bindings
//! for the active state.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Renders the bordered search input with a cursor when focused
pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.input_active {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let mut spans = vec![Span::styled(
        app.city_input.clone(),
        Style::default().fg(Color::White),
    )];
    if app.input_active {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(Color::Yellow),
        ));
    }
    if app.city_input.is_empty() && !app.input_active {
        spans.push(Span::styled(
            "Enter city name",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" City ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the status line: error banner, or suggestion-capability hint
pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!(" {} ", error),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
    } else if !app.suggestions_enabled {
        Line::from(Span::styled(
            " Suggestions disabled: no API key configured",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the key-binding footer for the current state
pub fn render_help_footer(frame: &mut Frame, area: Rect, app: &App) {
    let spans = if app.input_active {
        vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" Search  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Done  "),
        ]
    } else if app.state.in_day_detail() {
        vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Back to overview  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]
    } else {
        let mut spans = vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(" Edit city  "),
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::raw(" Current  "),
            Span::styled("h", Style::default().fg(Color::Yellow)),
            Span::raw(" Historical  "),
            Span::styled("f", Style::default().fg(Color::Yellow)),
            Span::raw(" Forecast  "),
        ];
        if app.state.daily().is_some() {
            spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Day  "));
            spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Details  "));
        }
        spans.push(Span::styled("?", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Help  "));
        spans.push(Span::styled("q", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Quit"));
        spans
    };

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
