//! Shared fixtures: a four-section portfolio page and a manually clocked
//! runtime around it.

#![allow(dead_code)]

use folio_core::NavRuntime;
use folio_core::clock::ManualClock;
use folio_core::config::NavConfig;
use folio_core::headless::HeadlessPage;
use folio_core::messages::NavEvent;
use std::time::Duration;

/// Home 0..900, about 900..1500, projects 1500..2700, contact 2700..3200,
/// footer to 3600.
pub fn portfolio_page(width: u32) -> HeadlessPage {
    HeadlessPage::new(width, 800.0)
        .with_section("home", 900.0)
        .with_section("about", 600.0)
        .with_section("projects", 1200.0)
        .with_section("contact", 500.0)
        .with_trailing(400.0)
}

pub struct Harness {
    pub runtime: NavRuntime<HeadlessPage, ManualClock>,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new(page: HeadlessPage) -> Self {
        Self::with_config(page, NavConfig::default())
    }

    pub fn with_config(page: HeadlessPage, config: NavConfig) -> Self {
        let clock = ManualClock::new();
        let runtime = NavRuntime::init(page, config, clock.clone());
        Self { runtime, clock }
    }

    pub fn dispatch(&mut self, event: NavEvent) {
        self.runtime.dispatch(event);
    }

    /// Advance the clock and fire whatever became due. Returns the number
    /// of timers fired.
    pub fn advance_ms(&mut self, ms: u64) -> usize {
        self.clock.advance(Duration::from_millis(ms));
        self.runtime.fire_due()
    }

    /// Resize the page and notify the runtime.
    pub fn resize(&mut self, width: u32) {
        self.runtime.env_mut().set_width(width);
        self.runtime.dispatch(NavEvent::Resized { width });
    }

    /// Scroll the page and notify the runtime.
    pub fn scroll_to(&mut self, y: f32) {
        self.runtime.env_mut().scroll_to(y);
        self.runtime.dispatch(NavEvent::Scrolled);
    }

    pub fn page(&self) -> &HeadlessPage {
        self.runtime.env()
    }
}
