//! Application state management

use std::path::Path;
use std::rc::Rc;

use pms_core::clock::{format_date, format_time};
use pms_core::{Dashboard, DashboardConfig, Result, SharedClock, SystemClock};

/// Main application state
pub struct AppState {
    pub dashboard: Dashboard,
    pub config: DashboardConfig,
    /// Header clock text, refreshed by the tick
    clock_text: String,
    date_text: String,
}

impl AppState {
    pub fn new(config_path: &Path) -> Result<Self> {
        let config = DashboardConfig::load(config_path)?;
        Self::with_clock(config, Rc::new(SystemClock))
    }

    pub fn with_clock(config: DashboardConfig, clock: SharedClock) -> Result<Self> {
        let dashboard = Dashboard::from_config(&config, clock)?;
        let mut state = Self {
            dashboard,
            config,
            clock_text: String::new(),
            date_text: String::new(),
        };
        state.tick();
        Ok(state)
    }

    /// Refresh the header clock; reads no store state
    pub fn tick(&mut self) {
        let now = self.dashboard.now();
        self.clock_text = format_time(now);
        self.date_text = format_date(now);
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}
