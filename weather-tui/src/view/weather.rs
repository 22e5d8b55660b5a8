//! Render the weather page: a loading indicator while the fetch is in
//! flight, the result card once it settles. A redirected visit renders
//! nothing at all, the route has already changed by the time we get here.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use weather_core::WeatherReading;

use crate::controller::ViewState;

pub(crate) fn draw_weather(f: &mut Frame, state: &ViewState) {
    match state {
        ViewState::Loading => draw_loading(f),
        ViewState::Loaded(reading) => draw_card(f, reading),
        ViewState::Redirected => {}
    }
}

/// The displayed card text, one string per line.
///
/// Kept as a pure function of the reading so the formatting is testable
/// without a terminal.
pub(crate) fn card_lines(reading: &WeatherReading) -> Vec<String> {
    vec![
        format!("Weather in {}", reading.location_name),
        format!(
            "Temp: {}°C / {:.2}°F",
            reading.temperature_c,
            reading.temperature_f()
        ),
        format!("Humidity: {}%", reading.humidity_pct),
        format!("Wind: {} m/s", reading.wind_speed_mps),
        format!("Condition: {}", reading.condition),
    ]
}

fn draw_loading(f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Min(0)])
        .split(f.area());

    f.render_widget(
        Paragraph::new("Loading...").alignment(Alignment::Center),
        rows[1],
    );
}

fn draw_card(f: &mut Frame, reading: &WeatherReading) {
    let lines = card_lines(reading);

    let card_height = lines.len() as u16 + 4;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(card_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    let card_area = centered_column(rows[1], 48);

    let mut text: Vec<Line> = Vec::with_capacity(lines.len() + 1);
    let mut it = lines.into_iter();
    if let Some(title) = it.next() {
        text.push(Line::styled(title, Style::default().add_modifier(Modifier::BOLD)));
    }
    text.extend(it.map(Line::from));
    text.push(Line::styled(
        format!("Updated {}", reading.observation_time.format("%H:%M UTC")),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        ),
        card_area,
    );

    f.render_widget(
        Paragraph::new("Enter/Esc: search again   q: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[2],
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

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    fn paris() -> WeatherReading {
        WeatherReading {
            location_name: "Paris".into(),
            temperature_c: 15.0,
            condition: "clear sky".into(),
            humidity_pct: 60,
            wind_speed_mps: 3.5,
            observation_time: Utc::now(),
        }
    }

    #[test]
    fn card_shows_expected_lines() {
        let lines = card_lines(&paris());

        assert_eq!(
            lines,
            vec![
                "Weather in Paris",
                "Temp: 15°C / 59.00°F",
                "Humidity: 60%",
                "Wind: 3.5 m/s",
                "Condition: clear sky",
            ]
        );
    }

    #[test]
    fn fahrenheit_is_rounded_to_two_decimals() {
        let mut reading = paris();
        reading.temperature_c = 20.0;

        let lines = card_lines(&reading);
        assert_eq!(lines[1], "Temp: 20°C / 68.00°F");
    }

    #[test]
    fn card_is_a_pure_function_of_the_reading() {
        let reading = paris();
        assert_eq!(card_lines(&reading), card_lines(&reading));
    }
}
