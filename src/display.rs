//! Display state and terminal rendering.
//!
//! The rendered forecast is a pure projection of [`DisplayState`]. The
//! single state slot is owned by [`ForecastController`] and replaced
//! atomically on each transition; rendering only ever borrows it.

use crate::condition::Condition;
use crate::models::ForecastDocument;
use crate::pipeline::PipelineError;

/// Current conditions ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentView {
    pub temp_c: f32,
    pub wind_kph: f32,
    pub condition: Condition,
}

/// One hourly entry ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct HourView {
    /// Time-of-day component of the hour timestamp, e.g. "14:00"
    pub time_of_day: String,
    pub temp_c: f32,
    pub wind_kph: f32,
    pub condition: Condition,
}

/// Classified forecast for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub location_name: String,
    pub current: CurrentView,
    pub hours: Vec<HourView>,
}

impl ForecastView {
    /// Project a forecast document into the display view.
    #[must_use]
    pub fn from_document(document: &ForecastDocument) -> Self {
        let current = CurrentView {
            temp_c: document.current.temp_c,
            wind_kph: document.current.wind_kph,
            condition: Condition::classify(&document.current.condition.text),
        };

        let hours = document
            .hours()
            .map(|hour| HourView {
                time_of_day: time_of_day(&hour.time).to_string(),
                temp_c: hour.temp_c,
                wind_kph: hour.wind_kph,
                condition: Condition::classify(&hour.condition.text),
            })
            .collect();

        Self {
            location_name: document.location.name.clone(),
            current,
            hours,
        }
    }
}

/// Extract the time-of-day component of a "date time" timestamp.
///
/// Pure string transform: the substring after the first space.
/// Timestamps without a space pass through unchanged.
#[must_use]
pub fn time_of_day(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(_, time)| time)
}

/// Display state machine: `Idle → Loading → {Ready, Failed}`.
#[derive(Debug)]
pub enum DisplayState {
    Idle,
    Loading,
    Ready(ForecastView),
    Failed(PipelineError),
}

/// Owner of the single display-state slot.
///
/// Fetch outcomes are applied in completion order; when two queries
/// overlap, the last one to resolve wins.
#[derive(Debug)]
pub struct ForecastController {
    state: DisplayState,
}

impl ForecastController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DisplayState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// A new query was submitted.
    pub fn begin_query(&mut self) {
        self.state = DisplayState::Loading;
    }

    /// A fetch resolved; replace the display state with its outcome.
    pub fn apply(&mut self, outcome: Result<ForecastView, PipelineError>) {
        self.state = match outcome {
            Ok(view) => DisplayState::Ready(view),
            Err(e) => DisplayState::Failed(e),
        };
    }
}

impl Default for ForecastController {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the display state as terminal text.
#[must_use]
pub fn render(state: &DisplayState) -> String {
    match state {
        DisplayState::Idle => String::new(),
        DisplayState::Loading => "Loading...".to_string(),
        DisplayState::Failed(e) => e.to_string(),
        DisplayState::Ready(view) => render_forecast(view),
    }
}

fn render_forecast(view: &ForecastView) -> String {
    let mut lines = vec![
        format!("Weather in {}", view.location_name),
        view.current.condition.glyph().to_string(),
        format!("Temperature: {:.1}°C", view.current.temp_c),
        format!("Condition: {}", view.current.condition),
        format!("Wind Speed: {:.1} kph", view.current.wind_kph),
        "Hourly Forecast".to_string(),
    ];

    for hour in &view.hours {
        lines.push(format!(
            "{} {} Temp: {:.1}°C Wind: {:.1} kph",
            hour.time_of_day,
            hour.condition.glyph(),
            hour.temp_c,
            hour.wind_kph
        ));
    }

    lines.join("\n")
}
