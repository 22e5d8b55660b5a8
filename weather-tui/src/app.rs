//! Application state and the main event loop.
//!
//! The terminal lifecycle follows a strict setup-run-teardown pattern so the
//! terminal is restored even when the loop exits with an error. State changes
//! only happen while processing an event, and every processed event is
//! followed by an explicit redraw.

use std::{io, sync::Arc};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tui_input::{Input, backend::crossterm::EventHandler};

use weather_core::{CityQuery, Config, FetchWeather, OpenWeatherClient};

use crate::{
    controller::{Transition, WeatherController},
    event::{self, AppEvent},
    router::Route,
    view,
};

/// State of the home page: the city input and the one-shot alert shown after
/// a failed lookup redirected the visitor back here.
pub(crate) struct HomeState {
    pub(crate) input: Input,
    pub(crate) alert: Option<String>,
}

/// Application state.
pub(crate) struct App {
    pub(crate) route: Route,
    pub(crate) home: HomeState,
    pub(crate) controller: WeatherController,
}

impl App {
    pub(crate) fn new(fetcher: Arc<dyn FetchWeather>, event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            route: Route::Home,
            home: HomeState {
                input: Input::default(),
                alert: None,
            },
            controller: WeatherController::new(fetcher, event_tx),
        }
    }

    /// Switch pages. Entering the weather page mounts the controller, which
    /// may immediately bounce back home when no city travelled along.
    fn navigate(&mut self, route: Route) {
        if matches!(self.route, Route::Weather { .. }) && route == Route::Home {
            self.controller.unmount();
        }

        self.route = route;

        if let Route::Weather { city } = self.route.clone() {
            let transition = self.controller.mount(city.as_ref());
            self.apply(transition);
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Redirect { alert } => {
                self.home.alert = alert;
                self.route = Route::Home;
            }
        }
    }

    /// Handle one key event. Returns `true` when the application should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.route.clone() {
            Route::Home => match key.code {
                KeyCode::Esc => return true,

                KeyCode::Enter => {
                    if let Some(city) = CityQuery::new(self.home.input.value()) {
                        self.home.alert = None;
                        self.home.input.reset();
                        self.navigate(Route::Weather { city: Some(city) });
                    }
                }

                _ => {
                    // Delegate all other key events to the managed input component.
                    self.home.input.handle_event(&Event::Key(key));
                }
            },

            Route::Weather { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.navigate(Route::Home),
                KeyCode::Char('q') => return true,
                _ => {}
            },
        }

        false
    }

    /// Application event loop, process events until the user quits or the
    /// event channel is closed. The UI is redrawn after every event.
    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut event_rx: UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        terminal.draw(|f| view::draw(f, self))?;

        while let Some(event) = event_rx.recv().await {
            match event {
                AppEvent::Key(key) => {
                    if self.handle_key(key) {
                        break;
                    }
                }

                AppEvent::FetchSettled { generation, result } => {
                    let transition = self.controller.on_fetch_settled(generation, result);
                    self.apply(transition);
                }

                AppEvent::Tick => {}
            }

            terminal.draw(|f| view::draw(f, self))?;
        }

        Ok(())
    }
}

/// Build the application from configuration and run it to completion.
pub(crate) async fn run(config: &Config) -> Result<()> {
    let api_key = config.require_api_key()?;
    let fetcher: Arc<dyn FetchWeather> = Arc::new(OpenWeatherClient::new(api_key.to_owned()));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = App::new(fetcher, event_tx.clone());

    let mut terminal = setup_terminal()?;

    event::spawn_input_thread(event_tx.clone());
    event::spawn_tick_thread(event_tx);

    let res = app.event_loop(&mut terminal, event_rx).await;
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state. Best-effort, called during
/// cleanup even when the event loop failed.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}
