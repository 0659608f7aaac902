//! UI rendering module for Skycast
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod current;
pub mod day_detail;
pub mod day_grid;
pub mod help_overlay;
pub mod search;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, DailyView, ViewState};
use crate::data::DisplayMode;

/// Renders the whole UI for the current application state
///
/// Layout, top to bottom: search input, status line, content area,
/// help footer. The help overlay, when open, draws on top.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Status / error line
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Help footer
        ])
        .split(area);

    search::render_search_bar(frame, chunks[0], app);
    search::render_status_line(frame, chunks[1], app);
    render_content(frame, chunks[2], app);
    search::render_help_footer(frame, chunks[3], app);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the content area for the active view state
fn render_content(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    if app.loading {
        render_loading(frame, area);
        return;
    }

    match &app.state {
        ViewState::Idle => render_idle(frame, area),
        ViewState::Current {
            weather,
            suggestions,
        } => current::render(frame, area, app, weather, suggestions),
        ViewState::Historical(view) => {
            render_daily(frame, area, app, DisplayMode::Historical, view)
        }
        ViewState::Forecast(view) => render_daily(frame, area, app, DisplayMode::Forecast, view),
    }
}

/// Renders a daily mode: the day grid, or the detail view when a day is open
fn render_daily(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    app: &App,
    mode: DisplayMode,
    view: &DailyView,
) {
    match view.selected_day() {
        Some(day) => day_detail::render(frame, area, app.city(), day),
        None => day_grid::render(frame, area, app.city(), mode, view),
    }
}

/// Renders a loading message while a fetch pipeline runs
fn render_loading(frame: &mut Frame, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Fetching weather data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Renders the empty-state hint before the first search
fn render_idle(frame: &mut Frame, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let hint = Paragraph::new("Type a city name and press Enter to search")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(hint, chunks[1]);
}
