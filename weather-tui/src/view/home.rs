//! Render the home page: title, city input and key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::HomeState;

pub(crate) fn draw_home(f: &mut Frame, home: &HomeState) {
    let area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("Weather Browser")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[1],
    );

    let input_area = centered_column(rows[3], 44);
    f.render_widget(
        Paragraph::new(home.input.value())
            .block(Block::default().borders(Borders::ALL).title(" City ")),
        input_area,
    );

    // Place the cursor inside the input box, after the typed text.
    let cursor_x = input_area.x + 1 + home.input.cursor() as u16;
    let cursor_y = input_area.y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    if let Some(alert) = &home.alert {
        f.render_widget(
            Paragraph::new(alert.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red)),
            rows[4],
        );
    }

    f.render_widget(
        Paragraph::new("Enter: show weather   Esc: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[5],
    );
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);

    columns[1]
}
