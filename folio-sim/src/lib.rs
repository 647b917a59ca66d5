//! Headless replay of navigation scenarios.
//!
//! Used by the `folio-sim` binary; exposed as a library so scenarios can be
//! replayed from tests.

pub mod scenario;

pub use scenario::{Frame, Scenario, ScenarioError, Step, StepEvent, simulate};
