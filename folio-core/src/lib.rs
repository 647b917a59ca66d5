//! # Folio Core
//!
//! Navigation and scroll synchronization for the folio portfolio site.
//!
//! ## Overview
//!
//! A single-page portfolio with four anchored sections and per-project
//! detail views needs a handful of small, cooperating state machines:
//!
//! - **Viewport classification**: compact vs. wide with a trailing resize
//!   debounce ([`domains::viewport`])
//! - **Motion preference**: the reduced-motion signal, defaulting to full
//!   motion where the host cannot answer ([`domains::motion`])
//! - **Animation profiles**: entrance/stagger timings and decorative effects
//!   derived from the two above ([`domains::animation`])
//! - **Scroll spy**: the active navigation item, tracked only on the root
//!   view of a wide viewport ([`domains::scroll_spy`])
//! - **Scroll restoration**: a one-shot scroll to the projects section after
//!   "back to projects" ([`domains::restoration`])
//! - **Navigation menu**: nav items and the compact-layout menu
//!   ([`domains::menu`])
//!
//! ## Architecture
//!
//! Components never touch the host directly. Everything they consume goes
//! through the traits in [`ports`]; [`headless::HeadlessPage`] implements
//! all of them in memory. [`runtime::NavRuntime`] owns the environment,
//! routes [`messages::NavEvent`]s to the components and fires the two
//! deferred timers ([`timers`]) against an injected [`clock::Clock`].
//!
//! ## Examples
//!
//! ```
//! use folio_core::{
//!     clock::ManualClock, config::NavConfig, headless::HeadlessPage,
//!     messages::NavEvent, runtime::NavRuntime, types::Section,
//! };
//! use std::time::Duration;
//!
//! let page = HeadlessPage::new(1280, 800.0)
//!     .with_section("home", 900.0)
//!     .with_section("about", 600.0)
//!     .with_section("projects", 1200.0)
//!     .with_section("contact", 500.0)
//!     .with_path("/projects/holidaze");
//!
//! let clock = ManualClock::new();
//! let mut runtime = NavRuntime::init(page, NavConfig::default(), clock.clone());
//!
//! runtime.dispatch(NavEvent::BackToProjects);
//! clock.advance(Duration::from_millis(100));
//! runtime.fire_due();
//!
//! assert_eq!(runtime.snapshot().active_section, Section::Projects);
//! ```

pub mod clock;
pub mod config;
pub mod constants;
pub mod domains;
pub mod error;
pub mod headless;
pub mod messages;
pub mod ports;
pub mod runtime;
pub mod snapshot;
pub mod state;
pub mod timers;
pub mod types;

mod update;

pub use config::{ConfigLoader, NavConfig};
pub use error::{ConfigError, Result};
pub use messages::NavEvent;
pub use runtime::NavRuntime;
pub use snapshot::NavSnapshot;
pub use types::{DeviceClass, NavigationKind, NavigationState, Section, View};
