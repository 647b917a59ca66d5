//! Event and timer handlers
//!
//! Handlers route one signal through the components that care about it.
//! They never fail: missing targets and absent capabilities degrade to
//! no-ops with a log line.

use crate::config::NavConfig;
use crate::constants::restoration::ROOT_PATH;
use crate::domains::animation::{DecorativeMotion, ScrollProgress};
use crate::domains::restoration::{
    ArrivalDecision, RestorationOutcome, request_back_with_restore,
};
use crate::messages::NavEvent;
use crate::ports::Environment;
use crate::state::NavState;
use crate::timers::TimerSlot;
use crate::types::{
    NavigationKind, NavigationState, ScrollIntoViewOptions, Section, View,
};
use std::time::Instant;

/// Initial synchronous pass: classify, read the motion preference, read
/// the route and bring every listener in line with it.
pub(crate) fn init_state<E: Environment + ?Sized>(
    state: &mut NavState,
    env: &mut E,
    config: &NavConfig,
    now: Instant,
) {
    let viewport = state.viewport.init(env);
    let preference = state.motion.init(env);
    let device = viewport.device_class();

    state.profile.update(device);
    state.decor = DecorativeMotion::select(device, preference.reduced);
    state.progress = ScrollProgress::sample(env.scroll_metrics(), device);

    // A payload present at startup survived a reload
    let path = env.current_path();
    let nav_state = env.current_state();
    enter_view(
        state,
        env,
        config,
        now,
        View::from_path(&path),
        nav_state,
        NavigationKind::Reload,
    );

    tracing::debug!(
        width_px = viewport.width_px,
        is_compact = viewport.is_compact,
        reduced_motion = preference.reduced,
        view = ?state.view,
        "navigation runtime initialized"
    );
}

pub(crate) fn handle_event<E: Environment + ?Sized>(
    state: &mut NavState,
    env: &mut E,
    config: &NavConfig,
    now: Instant,
    event: NavEvent,
) {
    tracing::trace!(event = event.name(), "dispatch");

    match event {
        NavEvent::Resized { width } => handle_resize(state, config, now, width),
        NavEvent::Scrolled => after_scroll(state, env),
        NavEvent::ReducedMotionChanged { reduced } => {
            if !state.motion.is_watching() {
                tracing::debug!(reduced, "motion change without a subscription");
                return;
            }
            if state.motion.on_change(reduced) {
                state.decor =
                    DecorativeMotion::select(state.device_class(), reduced);
            }
        }
        NavEvent::Navigated {
            path,
            state: nav_state,
            kind,
        } => enter_view(
            state,
            env,
            config,
            now,
            View::from_path(&path),
            nav_state,
            kind,
        ),
        NavEvent::BackToProjects => {
            let nav_state = request_back_with_restore(env);
            enter_view(
                state,
                env,
                config,
                now,
                View::from_path(ROOT_PATH),
                nav_state,
                NavigationKind::Push,
            );
        }
        NavEvent::MenuToggled => {
            if state.is_compact() {
                state.menu.toggle();
            } else {
                tracing::debug!("menu toggle ignored on wide layout");
            }
        }
        NavEvent::MenuItemSelected { section } => {
            handle_menu_select(state, env, section);
        }
        NavEvent::Reevaluate => {
            let nav_state = env.current_state();
            let view = state.view.clone();
            enter_view(
                state,
                env,
                config,
                now,
                view,
                nav_state,
                NavigationKind::Replace,
            );
        }
    }
}

/// Run the callback of an expired timer slot.
pub(crate) fn handle_timer<E: Environment + ?Sized>(
    state: &mut NavState,
    env: &mut E,
    slot: TimerSlot,
) {
    match slot {
        TimerSlot::ResizeDebounce => settle_viewport(state, env),
        TimerSlot::RestoreSettle => {
            if let Some(RestorationOutcome::Scrolled) =
                state.restoration.settle(env)
            {
                after_scroll(state, env);
            }
        }
    }
}

fn handle_resize(
    state: &mut NavState,
    config: &NavConfig,
    now: Instant,
    width: u32,
) {
    if !state.viewport.is_bound() {
        return;
    }
    state.viewport.on_resize(width);
    state
        .timers
        .schedule(TimerSlot::ResizeDebounce, now, config.resize_debounce());
}

fn settle_viewport<E: Environment + ?Sized>(state: &mut NavState, env: &mut E) {
    let Some(change) = state.viewport.settle() else {
        return;
    };
    if !change.class_changed() {
        return;
    }

    let device = change.current.device_class();
    state.profile.update(device);
    state.decor = DecorativeMotion::select(device, state.motion.reduced());
    if !device.is_compact() && state.menu.close() {
        tracing::debug!("nav menu closed on switch to wide layout");
    }

    state.spy.reconcile(device.is_compact(), &state.view, env);
    state.progress = ScrollProgress::sample(env.scroll_metrics(), device);
}

/// Route to `view`, updating scroll tracking and restoration.
fn enter_view<E: Environment + ?Sized>(
    state: &mut NavState,
    env: &mut E,
    config: &NavConfig,
    now: Instant,
    view: View,
    nav_state: NavigationState,
    kind: NavigationKind,
) {
    if !view.is_root() && state.restoration.cancel() {
        state.timers.cancel(TimerSlot::RestoreSettle);
    }

    state.spy.reconcile(state.viewport.is_compact(), &view, env);

    let decision = state
        .restoration
        .on_view_entered(&view, &nav_state, kind, env);
    if decision == ArrivalDecision::Armed {
        state.timers.schedule(
            TimerSlot::RestoreSettle,
            now,
            config.restore_settle(),
        );
    }

    state.view = view;
}

fn handle_menu_select<E: Environment + ?Sized>(
    state: &mut NavState,
    env: &mut E,
    section: Section,
) {
    state.menu.close();
    if env.scroll_into_view(section.anchor(), ScrollIntoViewOptions::SMOOTH_START)
    {
        after_scroll(state, env);
    } else {
        tracing::debug!(%section, "menu target missing from document");
    }
}

fn after_scroll<E: Environment + ?Sized>(state: &mut NavState, env: &mut E) {
    state.progress =
        ScrollProgress::sample(env.scroll_metrics(), state.device_class());
    state.spy.on_scroll(&*env);
}
