//! Restoration state machine and the back action that arms it

use crate::constants::restoration::ROOT_PATH;
use crate::ports::{DocumentPort, HistoryPort};
use crate::types::{
    NavigationKind, NavigationState, ScrollIntoViewOptions, Section, View,
};
use serde::Serialize;

/// Restoration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorationState {
    /// No restoration pending
    #[default]
    Idle,
    /// Intent consumed from navigation; waiting for layout to settle
    PendingRestore,
}

/// What happened when the settle delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorationOutcome {
    /// The target anchor was scrolled into view
    Scrolled,
    /// The target anchor was not in the document
    AnchorMissing,
}

/// Decision taken when a view is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalDecision {
    /// Moved to `PendingRestore`; arm the settle timer
    Armed,
    /// A stale intent reached us through traversal or reload and was
    /// cleared without scrolling
    Swept,
    /// Nothing to do
    Ignored,
}

/// Scrolls the target anchor into view exactly once after a
/// "back to projects" navigation.
#[derive(Debug)]
pub struct ScrollRestorationCoordinator {
    state: RestorationState,
    target: Section,
    restorations: u64,
}

impl Default for ScrollRestorationCoordinator {
    fn default() -> Self {
        Self::new(Section::Projects)
    }
}

impl ScrollRestorationCoordinator {
    /// Coordinator restoring to `target`.
    pub fn new(target: Section) -> Self {
        Self {
            state: RestorationState::Idle,
            target,
            restorations: 0,
        }
    }

    /// Evaluate an arrival at `view` carrying `nav_state`.
    ///
    /// Only an application-initiated transition onto the root view can arm
    /// the coordinator. An intent still present on a traversed or reloaded
    /// entry belongs to an earlier, cancelled restoration and is cleared.
    pub fn on_view_entered<H: HistoryPort + ?Sized>(
        &mut self,
        view: &View,
        nav_state: &NavigationState,
        kind: NavigationKind,
        history: &mut H,
    ) -> ArrivalDecision {
        if !view.is_root() || !nav_state.has_restoration_intent() {
            return ArrivalDecision::Ignored;
        }

        if !kind.may_arm_restoration() {
            tracing::debug!(?kind, "clearing stale restoration intent");
            history.replace_state(NavigationState::cleared());
            return ArrivalDecision::Swept;
        }

        match self.state {
            RestorationState::PendingRestore => ArrivalDecision::Ignored,
            RestorationState::Idle => {
                self.state = RestorationState::PendingRestore;
                tracing::debug!(target = %self.target, "scroll restoration armed");
                ArrivalDecision::Armed
            }
        }
    }

    /// Perform the restoration once the settle delay has elapsed.
    ///
    /// Scrolling and clearing the intent happen in this one transition:
    /// whether or not the anchor exists, the intent is removed from the
    /// current history entry and the coordinator returns to `Idle`.
    pub fn settle<E>(&mut self, env: &mut E) -> Option<RestorationOutcome>
    where
        E: DocumentPort + HistoryPort + ?Sized,
    {
        if self.state != RestorationState::PendingRestore {
            return None;
        }

        let outcome = if env
            .scroll_into_view(self.target.anchor(), ScrollIntoViewOptions::SMOOTH_START)
        {
            RestorationOutcome::Scrolled
        } else {
            RestorationOutcome::AnchorMissing
        };

        env.replace_state(NavigationState::cleared());
        self.state = RestorationState::Idle;
        self.restorations += 1;

        tracing::debug!(?outcome, target = %self.target, "scroll restoration settled");
        Some(outcome)
    }

    /// Abandon a pending restoration. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.state == RestorationState::PendingRestore;
        self.state = RestorationState::Idle;
        if was_pending {
            tracing::debug!("pending scroll restoration cancelled");
        }
        was_pending
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RestorationState {
        self.state
    }

    /// Whether a restoration waits for its settle delay.
    pub fn is_pending(&self) -> bool {
        self.state == RestorationState::PendingRestore
    }

    /// Section restored to.
    pub fn target(&self) -> Section {
        self.target
    }

    /// Completed restorations, successful or not.
    pub fn restorations(&self) -> u64 {
        self.restorations
    }
}

/// The detail view's "back" action: navigate to the root view carrying a
/// fresh restoration intent.
pub fn request_back_with_restore<H: HistoryPort + ?Sized>(
    history: &mut H,
) -> NavigationState {
    let state = NavigationState::restore_projects();
    history.push(ROOT_PATH, state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;
    use crate::ports::MockHistoryPort;

    fn page() -> HeadlessPage {
        HeadlessPage::new(1280, 800.0)
            .with_section("home", 800.0)
            .with_section("projects", 900.0)
            .with_path("/projects/holidaze")
    }

    #[test]
    fn back_action_pushes_root_with_intent() {
        let mut history = MockHistoryPort::new();
        history
            .expect_push()
            .withf(|path, state| {
                path.to_string() == "/" && state.has_restoration_intent()
            })
            .times(1)
            .return_const(());

        let state = request_back_with_restore(&mut history);
        assert!(state.scroll_to_projects);
    }

    #[test]
    fn arrival_with_intent_arms_once() {
        let mut page = page();
        let mut coordinator = ScrollRestorationCoordinator::default();
        let intent = request_back_with_restore(&mut page);

        let first = coordinator.on_view_entered(
            &View::Root,
            &intent,
            NavigationKind::Push,
            &mut page,
        );
        let second = coordinator.on_view_entered(
            &View::Root,
            &intent,
            NavigationKind::Push,
            &mut page,
        );

        assert_eq!(first, ArrivalDecision::Armed);
        assert_eq!(second, ArrivalDecision::Ignored);
        assert!(coordinator.is_pending());
    }

    #[test]
    fn settle_scrolls_and_clears_in_one_step() {
        let mut page = page();
        let mut coordinator = ScrollRestorationCoordinator::default();
        let intent = request_back_with_restore(&mut page);
        coordinator.on_view_entered(
            &View::Root,
            &intent,
            NavigationKind::Push,
            &mut page,
        );

        assert_eq!(
            coordinator.settle(&mut page),
            Some(RestorationOutcome::Scrolled)
        );
        assert_eq!(page.scroll_requests().len(), 1);
        assert_eq!(page.scroll_requests()[0].anchor, "projects");
        assert!(!page.current_state().has_restoration_intent());
        assert_eq!(coordinator.state(), RestorationState::Idle);

        // Settling again is a no-op
        assert_eq!(coordinator.settle(&mut page), None);
        assert_eq!(page.scroll_requests().len(), 1);
    }

    #[test]
    fn missing_anchor_still_clears_intent() {
        let mut page = HeadlessPage::new(1280, 800.0).with_section("home", 800.0);
        let mut coordinator = ScrollRestorationCoordinator::default();
        let intent = request_back_with_restore(&mut page);
        coordinator.on_view_entered(
            &View::Root,
            &intent,
            NavigationKind::Push,
            &mut page,
        );

        assert_eq!(
            coordinator.settle(&mut page),
            Some(RestorationOutcome::AnchorMissing)
        );
        assert!(!page.current_state().has_restoration_intent());
        assert!(page.scroll_requests().is_empty());
    }

    #[test]
    fn traversal_sweeps_stale_intent() {
        let mut page = page();
        page.push("/", NavigationState::restore_projects());
        let mut coordinator = ScrollRestorationCoordinator::default();

        let decision = coordinator.on_view_entered(
            &View::Root,
            &NavigationState::restore_projects(),
            NavigationKind::Traverse,
            &mut page,
        );

        assert_eq!(decision, ArrivalDecision::Swept);
        assert!(!coordinator.is_pending());
        assert!(!page.current_state().has_restoration_intent());
    }

    #[test]
    fn detail_view_never_arms() {
        let mut page = page();
        let mut coordinator = ScrollRestorationCoordinator::default();
        let decision = coordinator.on_view_entered(
            &View::from_path("/projects/auction-site"),
            &NavigationState::restore_projects(),
            NavigationKind::Push,
            &mut page,
        );
        assert_eq!(decision, ArrivalDecision::Ignored);
    }
}
