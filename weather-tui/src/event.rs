//! Application events and the threads that produce them.
//!
//! Raw terminal input and the periodic tick are captured on plain threads and
//! forwarded into a tokio channel, where the single event loop consumes them
//! alongside fetch results posted by background tasks.

use std::{thread, time::Duration};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use weather_core::{FetchError, WeatherReading};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A weather fetch finished. `generation` identifies the page visit that
    /// started it so settled results from abandoned visits can be discarded.
    FetchSettled {
        generation: u64,
        result: Result<WeatherReading, FetchError>,
    },

    Tick,
}

/// Spawn a thread to translate raw key events to application events.
pub(crate) fn spawn_input_thread(tx: UnboundedSender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread to send a periodic tick application event, this is
/// effectively the minimum "frame rate" for redrawing the UI.
pub(crate) fn spawn_tick_thread(tx: UnboundedSender<AppEvent>) {
    thread::spawn(move || {
        loop {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(250));
        }
    });
}
