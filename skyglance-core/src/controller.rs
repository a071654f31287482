//! View state machine: input -> gateway -> screen + persisted city.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    gateway::{GatewayError, WeatherGateway},
    model::WeatherResult,
    render::{WeatherView, render},
    store::CityStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Displaying,
    Error,
}

/// Everything currently shown to the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Screen {
    /// Last rendered weather; kept while hidden.
    pub weather: Option<WeatherView>,
    pub weather_visible: bool,
    pub error: Option<String>,
}

impl Screen {
    /// The weather region, if it is currently shown.
    pub fn visible_weather(&self) -> Option<&WeatherView> {
        self.weather.as_ref().filter(|_| self.weather_visible)
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }
}

/// What became of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, or nothing to load at startup.
    Ignored,
    /// Weather for the resolved city is on screen.
    Displayed { city: String },
    /// The lookup failed; the message is on screen.
    Failed(String),
    /// A newer submission started before this one finished; its outcome was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct ViewState {
    phase: Phase,
    screen: Screen,
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct ViewController {
    gateway: Box<dyn WeatherGateway>,
    store: Box<dyn CityStore>,
    generation: AtomicU64,
    state: Mutex<ViewState>,
    clock: Clock,
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("gateway", &self.gateway)
            .field("store", &self.store)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ViewController {
    pub fn new(gateway: Box<dyn WeatherGateway>, store: Box<dyn CityStore>) -> Self {
        Self {
            gateway,
            store,
            generation: AtomicU64::new(0),
            state: Mutex::new(ViewState::default()),
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the wall clock used to decide which forecast day is "today".
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    pub fn screen(&self) -> Screen {
        self.state.lock().screen.clone()
    }

    /// The remembered city, if any. Store failures count as "nothing remembered".
    pub fn last_city(&self) -> Option<String> {
        match self.store.load() {
            Ok(city) => city.filter(|c| !c.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "could not read last city");
                None
            }
        }
    }

    /// Forget the remembered city.
    pub fn forget(&self) -> anyhow::Result<()> {
        self.store.clear()
    }

    /// Look up the remembered city, if there is one.
    pub async fn start(&self) -> Submission {
        match self.last_city() {
            Some(city) => self.submit(&city).await,
            None => Submission::Ignored,
        }
    }

    /// Look up `input`. Blank input is ignored without touching any state.
    pub async fn submit(&self, input: &str) -> Submission {
        let city = input.trim();
        if city.is_empty() {
            return Submission::Ignored;
        }

        let generation = self.begin();
        let outcome = self.gateway.fetch(city).await;
        self.finish(generation, city, outcome)
    }

    fn begin(&self) -> u64 {
        let mut state = self.state.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        state.screen.error = None;
        state.phase = Phase::Loading;

        generation
    }

    fn finish(
        &self,
        generation: u64,
        query: &str,
        outcome: Result<WeatherResult, GatewayError>,
    ) -> Submission {
        let mut state = self.state.lock();

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(query, generation, "dropping superseded lookup");
            return Submission::Superseded;
        }

        match outcome {
            Ok(result) => {
                let today = self.today_at(result.utc_offset_seconds);

                state.screen.weather = Some(render(&result, today));
                state.screen.weather_visible = true;
                state.screen.error = None;
                state.phase = Phase::Displaying;

                // Still under the lock: an older lookup can't overwrite a newer city.
                let city = result.location.name;
                if let Err(err) = self.store.save(&city) {
                    tracing::warn!(error = %format!("{err:#}"), city = %city, "could not remember city");
                }

                tracing::info!(query, city = %city, days = result.daily.len(), "weather displayed");
                Submission::Displayed { city }
            }
            Err(err) => {
                tracing::error!(query, error = %err, "weather lookup failed");

                let message = err.user_message();
                state.screen.error = Some(message.clone());
                state.screen.weather_visible = false;
                state.phase = Phase::Error;

                Submission::Failed(message)
            }
        }
    }

    fn today_at(&self, utc_offset_seconds: i32) -> NaiveDate {
        let now = (self.clock)();
        match FixedOffset::east_opt(utc_offset_seconds) {
            Some(offset) => now.with_timezone(&offset).date_naive(),
            None => now.date_naive(),
        }
    }
}
