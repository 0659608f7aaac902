//! Application state management for Skycast
//!
//! This module contains the main application state, handling keyboard input,
//! the fetch pipelines, and state transitions between display modes.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{
    CurrentWeather, DayRecord, DisplayMode, GeocodeClient, WeatherClient,
};
use crate::suggest::{SuggestionClient, SuggestionError};

/// A daily dataset being browsed, with cursor and optional day-detail selection
#[derive(Debug, Clone, PartialEq)]
pub struct DailyView {
    /// Day records in chronological order
    pub days: Vec<DayRecord>,
    /// Grid cursor position
    pub cursor: usize,
    /// Index of the day opened in detail view, if any
    pub selected: Option<usize>,
}

impl DailyView {
    /// Creates a view over freshly fetched records, cursor at the start
    fn new(days: Vec<DayRecord>) -> Self {
        Self {
            days,
            cursor: 0,
            selected: None,
        }
    }

    /// Moves the cursor left, wrapping to the last day at the start
    fn move_cursor_left(&mut self) {
        if self.days.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.days.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor right, wrapping to the first day at the end
    fn move_cursor_right(&mut self) {
        if self.days.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.days.len();
    }

    /// The record currently open in detail view, if any
    pub fn selected_day(&self) -> Option<&DayRecord> {
        self.selected.and_then(|i| self.days.get(i))
    }
}

/// The view state: at most one mode's dataset exists at a time
///
/// Holding the datasets inside the variants (rather than as separate
/// optional fields) makes the exclusivity invariant structural: there
/// is no representable state with both a current snapshot and a daily
/// list, and suggestions exist only alongside current weather.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet
    Idle,
    /// Current conditions plus activity suggestions
    Current {
        weather: CurrentWeather,
        suggestions: Vec<String>,
    },
    /// Trailing-week daily records
    Historical(DailyView),
    /// Forward-window daily records
    Forecast(DailyView),
}

impl ViewState {
    /// The display mode this state belongs to, if any data is shown
    pub fn mode(&self) -> Option<DisplayMode> {
        match self {
            ViewState::Idle => None,
            ViewState::Current { .. } => Some(DisplayMode::Current),
            ViewState::Historical(_) => Some(DisplayMode::Historical),
            ViewState::Forecast(_) => Some(DisplayMode::Forecast),
        }
    }

    /// The daily view being browsed, if in a daily mode
    pub fn daily(&self) -> Option<&DailyView> {
        match self {
            ViewState::Historical(view) | ViewState::Forecast(view) => Some(view),
            _ => None,
        }
    }

    fn daily_mut(&mut self) -> Option<&mut DailyView> {
        match self {
            ViewState::Historical(view) | ViewState::Forecast(view) => Some(view),
            _ => None,
        }
    }

    /// Whether a day-detail view is open
    pub fn in_day_detail(&self) -> bool {
        self.daily().map_or(false, |view| view.selected.is_some())
    }
}

/// A fetch pipeline requested by a key press, run by the event loop
///
/// `handle_key` only records the request; the event loop takes it and
/// awaits the pipeline inline, so operations never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Resolve the city and fetch the dataset for this mode
    Fetch(DisplayMode),
}

/// Main application struct managing state and data
pub struct App {
    /// Current view state
    pub state: ViewState,
    /// City name being edited in the search input
    pub city_input: String,
    /// Whether keystrokes edit the search input
    pub input_active: bool,
    /// User-visible error message from the last pipeline, if any
    pub error: Option<String>,
    /// Whether a fetch pipeline is currently running
    pub loading: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Whether the suggestion capability has a key configured
    pub suggestions_enabled: bool,
    /// Pipeline requested by the last key press, if any
    pending_action: Option<Action>,
    /// Geocoding API client
    geocode_client: GeocodeClient,
    /// Weather API client
    weather_client: WeatherClient,
    /// Suggestion API client
    suggestion_client: SuggestionClient,
}

impl App {
    /// Creates a new App instance with default state and no suggestion key
    pub fn new() -> Self {
        let suggestion_client = SuggestionClient::new(None);
        Self {
            state: ViewState::Idle,
            city_input: String::new(),
            input_active: true,
            error: None,
            loading: false,
            should_quit: false,
            show_help: false,
            suggestions_enabled: suggestion_client.is_enabled(),
            pending_action: None,
            geocode_client: GeocodeClient::new(),
            weather_client: WeatherClient::new(),
            suggestion_client,
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// Seeds the search input and queues an initial fetch when a city
    /// was passed on the command line.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();

        app.suggestion_client = SuggestionClient::new(config.api_key);
        app.suggestions_enabled = app.suggestion_client.is_enabled();

        if let Some(city) = config.initial_city {
            app.city_input = city;
            app.input_active = false;
            app.pending_action = Some(Action::Fetch(config.initial_mode));
        }

        app
    }

    /// Creates a new App instance with custom clients (for testing)
    #[cfg(test)]
    pub fn with_clients(
        geocode_client: GeocodeClient,
        weather_client: WeatherClient,
        suggestion_client: SuggestionClient,
    ) -> Self {
        let mut app = Self::new();
        app.suggestions_enabled = suggestion_client.is_enabled();
        app.geocode_client = geocode_client;
        app.weather_client = weather_client;
        app.suggestion_client = suggestion_client;
        app
    }

    /// The city name as it will be sent to the geocoder
    pub fn city(&self) -> &str {
        self.city_input.trim()
    }

    /// Takes the pending action, leaving none
    ///
    /// Called by the event loop after each key press.
    pub fn take_action(&mut self) -> Option<Action> {
        self.pending_action.take()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Input focus: printable keys edit the city, `Enter` searches,
    ///   `Esc` leaves the input
    /// - `/` or `e`: focus the search input
    /// - `c` / `h` / `f`: fetch current / historical / forecast data
    /// - `Left`/`Right`: move the day cursor (historical/forecast)
    /// - `Enter`: open day detail for the day under the cursor
    /// - `Esc`: close day detail, otherwise quit
    /// - `?`: toggle help overlay
    /// - `q`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if self.input_active {
            self.handle_input_key(key_event);
        } else {
            self.handle_browse_key(key_event);
        }
    }

    /// Handles a key press while the search input has focus
    fn handle_input_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter => {
                if self.city().is_empty() {
                    self.error = Some("Enter a city name to search".to_string());
                } else {
                    self.input_active = false;
                    self.pending_action = Some(Action::Fetch(DisplayMode::Current));
                }
            }
            KeyCode::Esc => {
                self.input_active = false;
            }
            KeyCode::Backspace => {
                self.city_input.pop();
            }
            KeyCode::Char(c) => {
                self.city_input.push(c);
            }
            _ => {}
        }
    }

    /// Handles a key press in browse mode
    fn handle_browse_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('/') | KeyCode::Char('e') => {
                self.input_active = true;
            }
            KeyCode::Char('c') => {
                self.request_fetch(DisplayMode::Current);
            }
            KeyCode::Char('h') => {
                self.request_fetch(DisplayMode::Historical);
            }
            KeyCode::Char('f') => {
                self.request_fetch(DisplayMode::Forecast);
            }
            KeyCode::Left => {
                if !self.state.in_day_detail() {
                    if let Some(view) = self.state.daily_mut() {
                        view.move_cursor_left();
                    }
                }
            }
            KeyCode::Right => {
                if !self.state.in_day_detail() {
                    if let Some(view) = self.state.daily_mut() {
                        view.move_cursor_right();
                    }
                }
            }
            KeyCode::Enter => {
                // Day detail is reachable only from a daily overview
                if !self.state.in_day_detail() {
                    if let Some(view) = self.state.daily_mut() {
                        if !view.days.is_empty() {
                            view.selected = Some(view.cursor);
                        }
                    }
                }
            }
            KeyCode::Esc => {
                if self.state.in_day_detail() {
                    self.back_to_overview();
                } else {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    /// Queues a fetch for the given mode, or complains about a missing city
    fn request_fetch(&mut self, mode: DisplayMode) {
        if self.city().is_empty() {
            self.error = Some("Enter a city name first".to_string());
            self.input_active = true;
        } else {
            self.pending_action = Some(Action::Fetch(mode));
        }
    }

    /// Closes the day-detail view, staying in the same display mode
    pub fn back_to_overview(&mut self) {
        if let Some(view) = self.state.daily_mut() {
            view.selected = None;
        }
    }

    /// Runs a queued fetch pipeline to completion
    ///
    /// Network calls are strictly sequential: geocode, then weather,
    /// then (current mode only) suggestions. The event loop awaits this
    /// inline, so pipelines never overlap.
    pub async fn run_action(&mut self, action: Action) {
        let Action::Fetch(mode) = action;
        let city = self.city().to_string();

        self.loading = true;
        self.error = None;

        match mode {
            DisplayMode::Current => self.run_search(&city).await,
            DisplayMode::Historical | DisplayMode::Forecast => {
                self.run_daily_fetch(&city, mode).await
            }
        }

        self.loading = false;
    }

    /// Search pipeline: resolve, fetch current weather, then suggestions
    async fn run_search(&mut self, city: &str) {
        let place = match self.geocode_client.resolve(city).await {
            Ok(place) => place,
            Err(e) => {
                self.apply_error(e.to_string());
                return;
            }
        };

        let weather = match self.weather_client.fetch_current(place).await {
            Ok(weather) => weather,
            Err(e) => {
                self.apply_error(e.to_string());
                return;
            }
        };

        // Suggestion failures never roll back a successful weather fetch:
        // the card renders either way and the panel just stays empty.
        let suggestions = match self
            .suggestion_client
            .suggest(city, weather.condition, weather.temperature)
            .await
        {
            Ok(suggestions) => suggestions,
            Err(SuggestionError::MissingApiKey) => Vec::new(),
            Err(e) => {
                self.error = Some(format!("Failed to fetch activity suggestions: {}", e));
                Vec::new()
            }
        };

        self.apply_search_result(weather, suggestions);
    }

    /// Daily pipeline: resolve, then fetch the mode's daily aggregates
    async fn run_daily_fetch(&mut self, city: &str, mode: DisplayMode) {
        let place = match self.geocode_client.resolve(city).await {
            Ok(place) => place,
            Err(e) => {
                self.apply_error(e.to_string());
                return;
            }
        };

        let result = match mode {
            DisplayMode::Historical => self.weather_client.fetch_historical(place).await,
            DisplayMode::Forecast => self.weather_client.fetch_forecast(place).await,
            DisplayMode::Current => unreachable!("current mode uses run_search"),
        };

        match result {
            Ok(days) => self.apply_daily_result(mode, days),
            Err(e) => self.apply_error(e.to_string()),
        }
    }

    /// Applies a successful search: replaces whatever was shown before
    pub fn apply_search_result(&mut self, weather: CurrentWeather, suggestions: Vec<String>) {
        self.state = ViewState::Current {
            weather,
            suggestions,
        };
    }

    /// Applies a successful daily fetch for historical or forecast mode
    pub fn apply_daily_result(&mut self, mode: DisplayMode, days: Vec<DayRecord>) {
        let view = DailyView::new(days);
        self.state = match mode {
            DisplayMode::Historical => ViewState::Historical(view),
            DisplayMode::Forecast => ViewState::Forecast(view),
            // A current snapshot carries weather, not day records
            DisplayMode::Current => return,
        };
    }

    /// Records a pipeline failure, leaving the previous view untouched
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
