//! User interface rendering.
//!
//! Rendering is a pure function of the application state: [`draw`] is called
//! after every processed event and repaints the page the current route points
//! at. Nothing in here mutates state.

mod home;
mod weather;

use ratatui::Frame;

use crate::{app::App, router::Route};

/// Renders the current page to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    match &app.route {
        Route::Home => home::draw_home(f, &app.home),
        Route::Weather { .. } => weather::draw_weather(f, app.controller.state()),
    }
}
