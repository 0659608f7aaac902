//! Day grid rendering for historical and forecast modes
//!
//! Renders the fetched day records as a week-style grid of cells, one
//! per day, with the cursor highlighting the day that `Enter` opens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::DailyView;
use crate::data::{DayRecord, DisplayMode};

/// Days per grid row, matching the original week layout
const DAYS_PER_ROW: usize = 7;

/// Glyph shown in every grid cell
///
/// Daily aggregates carry no weather code, so the grid shows a neutral
/// sky glyph rather than a per-day condition icon.
const GRID_ICON: &str = "\u{26C5}"; // ⛅

/// Renders the day grid for a daily display mode
pub fn render(frame: &mut Frame, area: Rect, city: &str, mode: DisplayMode, view: &DailyView) {
    let block = Block::default()
        .title(format!(" {} — {} ", city, mode.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.days.is_empty() {
        let empty = Paragraph::new("No data for this range")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let row_count = view.days.len().div_ceil(DAYS_PER_ROW);
    let row_constraints: Vec<Constraint> =
        (0..row_count).map(|_| Constraint::Length(5)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row_index, chunk) in view.days.chunks(DAYS_PER_ROW).enumerate() {
        if row_index >= rows.len() {
            break;
        }
        render_row(frame, rows[row_index], chunk, row_index, view.cursor);
    }
}

/// Renders one row of up to seven day cells
fn render_row(frame: &mut Frame, area: Rect, days: &[DayRecord], row_index: usize, cursor: usize) {
    let cell_constraints: Vec<Constraint> = (0..DAYS_PER_ROW)
        .map(|_| Constraint::Ratio(1, DAYS_PER_ROW as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cell_constraints)
        .split(area);

    for (col_index, day) in days.iter().enumerate() {
        let day_index = row_index * DAYS_PER_ROW + col_index;
        render_cell(frame, cells[col_index], day, day_index == cursor);
    }
}

/// Renders a single day cell
fn render_cell(frame: &mut Frame, area: Rect, day: &DayRecord, is_cursor: bool) {
    let border_style = if is_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let weekday_style = if is_cursor {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let lines = vec![
        Line::from(Span::styled(
            day.date.format("%a").to_string(),
            weekday_style,
        )),
        Line::from(GRID_ICON),
        Line::from(vec![
            Span::styled(
                format!("{}\u{00B0}", day.max_temp.round() as i64),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{}\u{00B0}", day.min_temp.round() as i64),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
