//! View-state controller for the weather page.
//!
//! Each visit to the page is one `mount`: either the visit carries no city
//! and redirects immediately, or it enters `Loading` and starts exactly one
//! fetch. The fetch settles through the event loop as a
//! [`AppEvent::FetchSettled`] carrying the mount generation; settles from
//! superseded mounts are discarded, so an abandoned request can never touch
//! state after the page has moved on.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use weather_core::{CityQuery, FetchError, FetchWeather, WeatherReading};

use crate::event::AppEvent;

pub(crate) const FETCH_FAILED_ALERT: &str = "Failed to fetch weather. Try again.";

/// Lifecycle state of the weather page.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewState {
    Loading,
    Loaded(WeatherReading),
    Redirected,
}

/// What the application should do after a controller step.
#[derive(Debug, PartialEq)]
pub(crate) enum Transition {
    Stay,
    /// Navigate back home, optionally surfacing a one-shot alert there.
    Redirect { alert: Option<String> },
}

pub(crate) struct WeatherController {
    state: ViewState,
    generation: u64,
    fetcher: Arc<dyn FetchWeather>,
    event_tx: UnboundedSender<AppEvent>,
}

impl WeatherController {
    pub(crate) fn new(fetcher: Arc<dyn FetchWeather>, event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            state: ViewState::Redirected,
            generation: 0,
            fetcher,
            event_tx,
        }
    }

    pub(crate) fn state(&self) -> &ViewState {
        &self.state
    }

    /// Enter the page. Starts one fetch per mount; a missing city redirects
    /// without calling the adapter at all.
    pub(crate) fn mount(&mut self, city: Option<&CityQuery>) -> Transition {
        self.generation += 1;

        let Some(city) = city else {
            self.state = ViewState::Redirected;
            return Transition::Redirect { alert: None };
        };

        self.state = ViewState::Loading;

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.event_tx.clone();
        let city = city.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let result = fetcher.fetch_weather(&city).await;
            // The receiver may be gone on shutdown; nothing left to notify.
            let _ = tx.send(AppEvent::FetchSettled { generation, result });
        });

        Transition::Stay
    }

    /// Leave the page. Any fetch still in flight for this visit is
    /// invalidated; its eventual settle will be discarded.
    pub(crate) fn unmount(&mut self) {
        self.generation += 1;
        self.state = ViewState::Redirected;
    }

    /// Apply a settled fetch to the current visit.
    pub(crate) fn on_fetch_settled(
        &mut self,
        generation: u64,
        result: Result<WeatherReading, FetchError>,
    ) -> Transition {
        // A result from a superseded mount belongs to a dead page visit.
        if generation != self.generation || self.state != ViewState::Loading {
            return Transition::Stay;
        }

        match result {
            Ok(reading) => {
                self.state = ViewState::Loaded(reading);
                Transition::Stay
            }
            Err(err) => {
                log::warn!("weather fetch failed: {err}");
                self.state = ViewState::Redirected;
                Transition::Redirect {
                    alert: Some(FETCH_FAILED_ALERT.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    #[derive(Debug)]
    struct MockFetcher {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockFetcher {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), fail })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FetchWeather for MockFetcher {
        async fn fetch_weather(&self, city: &CityQuery) -> Result<WeatherReading, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.fail {
                Err(FetchError::MissingField("weather[0].description"))
            } else {
                Ok(paris_reading(city.as_str()))
            }
        }
    }

    fn paris_reading(name: &str) -> WeatherReading {
        WeatherReading {
            location_name: name.to_string(),
            temperature_c: 15.0,
            condition: "clear sky".into(),
            humidity_pct: 60,
            wind_speed_mps: 3.5,
            observation_time: Utc::now(),
        }
    }

    fn controller_with(
        fetcher: Arc<MockFetcher>,
    ) -> (WeatherController, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (WeatherController::new(fetcher, tx), rx)
    }

    async fn recv_settled(rx: &mut UnboundedReceiver<AppEvent>) -> (u64, Result<WeatherReading, FetchError>) {
        match rx.recv().await.expect("fetch task must post a settle event") {
            AppEvent::FetchSettled { generation, result } => (generation, result),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_city_redirects_without_fetching() {
        let fetcher = MockFetcher::new(false);
        let (mut controller, _rx) = controller_with(Arc::clone(&fetcher));

        let transition = controller.mount(None);

        assert_eq!(transition, Transition::Redirect { alert: None });
        assert_eq!(*controller.state(), ViewState::Redirected);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn successful_fetch_loads_reading() {
        let fetcher = MockFetcher::new(false);
        let (mut controller, mut rx) = controller_with(Arc::clone(&fetcher));

        let city = CityQuery::new("Paris").unwrap();
        assert_eq!(controller.mount(Some(&city)), Transition::Stay);
        assert_eq!(*controller.state(), ViewState::Loading);

        let (generation, result) = recv_settled(&mut rx).await;
        assert_eq!(controller.on_fetch_settled(generation, result), Transition::Stay);

        match controller.state() {
            ViewState::Loaded(reading) => assert_eq!(reading.location_name, "Paris"),
            other => panic!("expected Loaded, got {other:?}"),
        }
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_alerts_once_and_redirects() {
        let fetcher = MockFetcher::new(true);
        let (mut controller, mut rx) = controller_with(fetcher);

        let city = CityQuery::new("Paris").unwrap();
        controller.mount(Some(&city));

        let (generation, result) = recv_settled(&mut rx).await;
        let transition = controller.on_fetch_settled(generation, result);

        assert_eq!(
            transition,
            Transition::Redirect { alert: Some(FETCH_FAILED_ALERT.to_string()) }
        );
        assert_eq!(*controller.state(), ViewState::Redirected);

        // A duplicate settle for the same visit must not alert again.
        let duplicate = controller.on_fetch_settled(generation, Err(FetchError::MissingField("x")));
        assert_eq!(duplicate, Transition::Stay);
    }

    #[tokio::test]
    async fn remounting_same_city_fetches_again() {
        let fetcher = MockFetcher::new(false);
        let (mut controller, mut rx) = controller_with(Arc::clone(&fetcher));

        let city = CityQuery::new("Paris").unwrap();

        controller.mount(Some(&city));
        let (first_generation, _) = recv_settled(&mut rx).await;

        controller.mount(Some(&city));
        assert_eq!(*controller.state(), ViewState::Loading);
        let (second_generation, second_result) = recv_settled(&mut rx).await;

        assert_eq!(fetcher.calls(), 2);
        assert_ne!(first_generation, second_generation);

        controller.on_fetch_settled(second_generation, second_result);
        assert!(matches!(controller.state(), ViewState::Loaded(_)));
    }

    #[tokio::test]
    async fn settle_after_unmount_is_discarded() {
        let fetcher = MockFetcher::new(false);
        let (mut controller, mut rx) = controller_with(fetcher);

        let city = CityQuery::new("Paris").unwrap();
        controller.mount(Some(&city));
        let (generation, result) = recv_settled(&mut rx).await;

        // The user left the page before the result was applied.
        controller.unmount();

        let transition = controller.on_fetch_settled(generation, result);

        assert_eq!(transition, Transition::Stay);
        assert_eq!(*controller.state(), ViewState::Redirected);
    }

    #[tokio::test]
    async fn stale_settle_does_not_touch_current_visit() {
        let fetcher = MockFetcher::new(false);
        let (mut controller, mut rx) = controller_with(fetcher);

        let first = CityQuery::new("Paris").unwrap();
        controller.mount(Some(&first));
        let (first_generation, first_result) = recv_settled(&mut rx).await;

        // The user navigated again before the first fetch was applied.
        let second = CityQuery::new("London").unwrap();
        controller.mount(Some(&second));

        let transition = controller.on_fetch_settled(first_generation, first_result);

        assert_eq!(transition, Transition::Stay);
        assert_eq!(*controller.state(), ViewState::Loading);
    }
}
