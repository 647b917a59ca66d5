//! One-shot scroll restoration after "back to projects".

#[path = "support/mod.rs"]
mod support;

use folio_core::domains::restoration::RestorationState;
use folio_core::ports::HistoryPort;
use folio_core::timers::TimerSlot;
use folio_core::types::{NavigationKind, NavigationState, ScrollIntoViewOptions};
use folio_core::{NavEvent, Section};
use support::{Harness, portfolio_page};

fn on_detail_page() -> Harness {
    let mut h = Harness::new(portfolio_page(1280));
    h.runtime
        .env_mut()
        .push("/projects/holidaze", NavigationState::default());
    h.dispatch(NavEvent::Navigated {
        path: "/projects/holidaze".into(),
        state: NavigationState::default(),
        kind: NavigationKind::Push,
    });
    h
}

#[test]
fn back_to_projects_scrolls_once_after_settle() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();

    assert_eq!(h.runtime.snapshot().restoration, RestorationState::PendingRestore);
    assert!(h.page().current_state().has_restoration_intent());
    assert_eq!(h.advance_ms(99), 0);
    assert!(h.page().scroll_requests().is_empty());

    assert_eq!(h.advance_ms(1), 1);
    let requests = h.page().scroll_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].anchor, "projects");
    assert_eq!(requests[0].options, ScrollIntoViewOptions::SMOOTH_START);
    assert!(!h.page().current_state().has_restoration_intent());

    let snapshot = h.runtime.snapshot();
    assert_eq!(snapshot.restoration, RestorationState::Idle);
    assert_eq!(snapshot.active_section, Section::Projects);
}

#[test]
fn rerender_and_renavigation_do_not_scroll_again() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();
    h.advance_ms(100);

    h.dispatch(NavEvent::Reevaluate);
    h.dispatch(NavEvent::Navigated {
        path: "/".into(),
        state: NavigationState::default(),
        kind: NavigationKind::Push,
    });
    h.advance_ms(500);

    assert_eq!(h.page().scroll_requests().len(), 1);
    assert_eq!(h.runtime.state().restoration.restorations(), 1);
}

#[test]
fn duplicate_arrival_does_not_stack_timers() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();
    h.advance_ms(40);
    h.dispatch(NavEvent::Reevaluate);

    let pending = h.runtime.pending_timers();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].slot, TimerSlot::RestoreSettle);

    // Deadline still counts from the first arrival
    assert_eq!(h.advance_ms(60), 1);
    assert_eq!(h.page().scroll_requests().len(), 1);
}

#[test]
fn leaving_root_before_settle_cancels() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();
    h.advance_ms(50);

    h.runtime
        .env_mut()
        .push("/projects/auction-site", NavigationState::default());
    h.dispatch(NavEvent::Navigated {
        path: "/projects/auction-site".into(),
        state: NavigationState::default(),
        kind: NavigationKind::Push,
    });

    assert_eq!(h.advance_ms(200), 0);
    assert!(h.page().scroll_requests().is_empty());
    assert_eq!(h.runtime.snapshot().restoration, RestorationState::Idle);
}

#[test]
fn traversing_back_to_stale_intent_sweeps_it() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();
    h.advance_ms(50);
    h.runtime
        .env_mut()
        .push("/projects/auction-site", NavigationState::default());
    h.dispatch(NavEvent::Navigated {
        path: "/projects/auction-site".into(),
        state: NavigationState::default(),
        kind: NavigationKind::Push,
    });

    let entry = h.runtime.env_mut().back().expect("previous entry");
    assert!(entry.state.has_restoration_intent());
    h.dispatch(NavEvent::Navigated {
        path: entry.path,
        state: entry.state,
        kind: NavigationKind::Traverse,
    });

    assert_eq!(h.advance_ms(200), 0);
    assert!(h.page().scroll_requests().is_empty());
    assert!(!h.page().current_state().has_restoration_intent());
}

#[test]
fn missing_projects_anchor_still_clears_intent() {
    let page = folio_core::headless::HeadlessPage::new(1280, 800.0)
        .with_section("home", 900.0)
        .with_section("about", 600.0);
    let mut h = Harness::new(page);
    h.runtime.request_back_with_restore();
    h.advance_ms(100);

    assert!(h.page().scroll_requests().is_empty());
    assert!(!h.page().current_state().has_restoration_intent());
    assert_eq!(h.runtime.snapshot().restoration, RestorationState::Idle);
}

#[test]
fn dispose_cancels_pending_restoration() {
    let mut h = on_detail_page();
    h.runtime.request_back_with_restore();
    h.runtime.dispose();
    h.runtime.dispose();

    assert!(h.runtime.is_disposed());
    assert!(h.runtime.pending_timers().is_empty());
    assert_eq!(h.advance_ms(500), 0);
    assert!(h.page().scroll_requests().is_empty());
    assert_eq!(h.page().listener_count(folio_core::types::ListenerKind::Scroll), 0);
    assert_eq!(h.page().listener_count(folio_core::types::ListenerKind::Resize), 0);
    assert_eq!(h.page().motion_watch_count(), 0);
}

#[test]
fn stale_intent_at_startup_is_swept() {
    let page = portfolio_page(1280).with_state(NavigationState::restore_projects());
    let h = Harness::new(page);

    assert!(!h.page().current_state().has_restoration_intent());
    assert!(h.runtime.pending_timers().is_empty());
    assert_eq!(h.page().replace_count(), 1);
}
