//! Scenario files and deterministic replay
//!
//! A scenario is a page layout plus a list of timestamped steps. Replay runs
//! a [`NavRuntime`] on a [`ManualClock`]: before each step the clock is moved
//! from deadline to deadline so timers fire in order, then the step is
//! applied and a [`Frame`] recorded.

use folio_core::clock::ManualClock;
use folio_core::headless::{HeadlessPage, PageLayout};
use folio_core::ports::{HistoryPort, MotionQueryPort};
use folio_core::types::{NavigationKind, NavigationState, Section};
use folio_core::{NavConfig, NavEvent, NavRuntime, NavSnapshot};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Failures loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Scenario file could not be read
    #[error("failed to read scenario {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario is not valid JSON
    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario is not valid TOML
    #[error("invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    /// Extension is neither `.json` nor `.toml`
    #[error("unsupported scenario format for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// Step timestamps go backwards
    #[error("step {index} at {at_ms}ms is earlier than the previous step at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

/// A page layout and the steps replayed against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Page the runtime starts on
    #[serde(default)]
    pub page: PageLayout,
    /// Steps in time order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One timestamped event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Milliseconds since the page was initialized
    #[serde(default)]
    pub at_ms: u64,
    /// What happens
    pub event: StepEvent,
}

/// What happens at a step. Page-moving steps update the headless page
/// before notifying the runtime, the way a browser would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    /// Viewport width changes
    Resize {
        width: u32,
    },
    /// Page scrolls to an offset
    ScrollTo {
        y: f32,
    },
    /// Motion preference flips
    ReducedMotion {
        reduced: bool,
    },
    /// Application navigation (`push` or `replace`)
    Navigate {
        path: String,
        #[serde(default)]
        state: NavigationState,
        #[serde(default)]
        kind: NavigationKind,
    },
    /// Browser back button
    Back,
    /// Browser forward button
    Forward,
    /// Browser reload
    Reload,
    /// Detail view's back action
    BackToProjects,
    /// Menu button press
    MenuToggle,
    /// Navigation bar entry chosen
    MenuSelect {
        section: Section,
    },
    /// Only let time pass
    Wait,
}

impl StepEvent {
    /// Stable name used in frames and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize { .. } => "resize",
            Self::ScrollTo { .. } => "scroll_to",
            Self::ReducedMotion { .. } => "reduced_motion",
            Self::Navigate { .. } => "navigate",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Reload => "reload",
            Self::BackToProjects => "back_to_projects",
            Self::MenuToggle => "menu_toggle",
            Self::MenuSelect { .. } => "menu_select",
            Self::Wait => "wait",
        }
    }
}

impl Scenario {
    /// Read a `.json` or `.toml` scenario.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ScenarioError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&raw),
            Some("toml") => Self::from_toml(&raw),
            _ => Err(ScenarioError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a JSON scenario and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(raw)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Parse a TOML scenario and validate it.
    pub fn from_toml(raw: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(raw)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Steps must be in non-decreasing time order.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut previous_ms = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if step.at_ms < previous_ms {
                return Err(ScenarioError::OutOfOrder {
                    index,
                    at_ms: step.at_ms,
                    previous_ms,
                });
            }
            previous_ms = step.at_ms;
        }
        Ok(())
    }
}

/// State after one step (or after initialization / final settling).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Milliseconds since initialization
    pub at_ms: u64,
    /// Step name, `init` or `settled`
    pub step: &'static str,
    /// Timers fired since the previous frame
    pub timers_fired: usize,
    /// Page scroll offset
    pub scroll_y: f32,
    /// Full runtime state
    pub snapshot: NavSnapshot,
}

type SimRuntime = NavRuntime<HeadlessPage, ManualClock>;

/// Replay `scenario` and return one frame for initialization, one per step
/// and, when timers were still armed after the last step, one for the final
/// settled state.
pub fn simulate(scenario: &Scenario, config: NavConfig) -> Vec<Frame> {
    let clock = ManualClock::new();
    let base = clock.base();
    let mut runtime =
        NavRuntime::init(HeadlessPage::from_layout(&scenario.page), config, clock.clone());

    let mut frames = vec![frame(&runtime, &clock, "init", 0)];

    for step in &scenario.steps {
        let target = base + Duration::from_millis(step.at_ms);
        let mut fired = advance_to(&mut runtime, &clock, Some(target));
        apply(&mut runtime, &step.event);
        fired += runtime.fire_due();

        tracing::debug!(at_ms = step.at_ms, step = step.event.name(), fired, "step applied");
        frames.push(frame(&runtime, &clock, step.event.name(), fired));
    }

    let fired = advance_to(&mut runtime, &clock, None);
    if fired > 0 {
        frames.push(frame(&runtime, &clock, "settled", fired));
    }

    runtime.dispose();
    frames
}

/// Move the clock deadline by deadline up to `target` (or until no timer
/// is armed), firing as it goes.
fn advance_to(
    runtime: &mut SimRuntime,
    clock: &ManualClock,
    target: Option<Instant>,
) -> usize {
    let mut fired = 0;
    while let Some(deadline) = runtime.next_deadline() {
        if target.is_some_and(|target| deadline > target) {
            break;
        }
        clock.advance_to(deadline);
        fired += runtime.fire_due();
    }
    if let Some(target) = target {
        clock.advance_to(target);
    }
    fired
}

fn apply(runtime: &mut SimRuntime, event: &StepEvent) {
    match event {
        StepEvent::Resize { width } => {
            runtime.env_mut().set_width(*width);
            runtime.dispatch(NavEvent::Resized { width: *width });
        }
        StepEvent::ScrollTo { y } => {
            runtime.env_mut().scroll_to(*y);
            runtime.dispatch(NavEvent::Scrolled);
        }
        StepEvent::ReducedMotion { reduced } => {
            runtime.env_mut().set_reduced_motion(*reduced);
            if runtime.env().prefers_reduced_motion().is_some() {
                runtime.dispatch(NavEvent::ReducedMotionChanged {
                    reduced: *reduced,
                });
            }
        }
        StepEvent::Navigate { path, state, kind } => {
            match kind {
                NavigationKind::Push => runtime.env_mut().push(path, *state),
                NavigationKind::Replace => runtime.env_mut().replace(path, *state),
                NavigationKind::Traverse | NavigationKind::Reload => {}
            }
            runtime.dispatch(NavEvent::Navigated {
                path: path.clone(),
                state: *state,
                kind: *kind,
            });
        }
        StepEvent::Back | StepEvent::Forward => {
            let entry = match event {
                StepEvent::Back => runtime.env_mut().back(),
                _ => runtime.env_mut().forward(),
            };
            match entry {
                Some(entry) => runtime.dispatch(NavEvent::Navigated {
                    path: entry.path,
                    state: entry.state,
                    kind: NavigationKind::Traverse,
                }),
                None => tracing::debug!(step = event.name(), "no history entry"),
            }
        }
        StepEvent::Reload => {
            let path = runtime.env().current_path();
            let state = runtime.env().current_state();
            runtime.dispatch(NavEvent::Navigated {
                path,
                state,
                kind: NavigationKind::Reload,
            });
        }
        StepEvent::BackToProjects => runtime.request_back_with_restore(),
        StepEvent::MenuToggle => runtime.dispatch(NavEvent::MenuToggled),
        StepEvent::MenuSelect { section } => {
            runtime.dispatch(NavEvent::MenuItemSelected { section: *section })
        }
        StepEvent::Wait => {}
    }
}

fn frame(
    runtime: &SimRuntime,
    clock: &ManualClock,
    step: &'static str,
    timers_fired: usize,
) -> Frame {
    Frame {
        at_ms: u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX),
        step,
        timers_fired,
        scroll_y: runtime.env().scroll_y(),
        snapshot: runtime.snapshot(),
    }
}
