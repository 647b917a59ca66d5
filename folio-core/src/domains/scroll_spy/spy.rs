//! Scroll spy listener lifecycle and the activation-line search

use crate::ports::{DocumentPort, WindowPort};
use crate::types::{ListenerId, ListenerKind, Section, View};

/// Tracking runs only on the root view of a wide viewport.
pub fn should_track(is_compact: bool, view: &View) -> bool {
    !is_compact && view.is_root()
}

/// First section, in [`Section::ORDER`], whose rect crosses the activation
/// line. Sections missing from the document are skipped.
pub fn find_active<D: DocumentPort + ?Sized>(
    document: &D,
    activation_line_px: f32,
) -> Option<Section> {
    Section::ORDER.into_iter().find(|section| {
        document
            .bounding_rect(section.anchor())
            .is_some_and(|rect| rect.spans(activation_line_px))
    })
}

/// Outcome of [`ScrollSpy::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpyTransition {
    /// Listener bound and an evaluation pass performed
    Enabled,
    /// Listener unbound
    Disabled,
    /// Already in the requested state
    Unchanged,
}

/// Tracks the active section while scroll tracking is enabled.
#[derive(Debug)]
pub struct ScrollSpy {
    activation_line_px: f32,
    active: Section,
    listener: Option<ListenerId>,
    passes: u64,
}

impl ScrollSpy {
    /// Idle spy with its activation line.
    pub fn new(activation_line_px: f32) -> Self {
        Self {
            activation_line_px,
            active: Section::default(),
            listener: None,
            passes: 0,
        }
    }

    /// Bring the scroll subscription in line with its governing inputs.
    ///
    /// Must be called whenever `is_compact` or `view` changes. Enabling
    /// performs one evaluation pass immediately.
    pub fn reconcile<E>(
        &mut self,
        is_compact: bool,
        view: &View,
        env: &mut E,
    ) -> SpyTransition
    where
        E: WindowPort + DocumentPort + ?Sized,
    {
        let wanted = should_track(is_compact, view);
        match (self.is_enabled(), wanted) {
            (true, true) | (false, false) => SpyTransition::Unchanged,
            (true, false) => {
                self.teardown(env);
                tracing::debug!(is_compact, ?view, "scroll spy disabled");
                SpyTransition::Disabled
            }
            (false, true) => {
                self.teardown(env);
                self.listener = Some(env.add_listener(ListenerKind::Scroll));
                tracing::debug!("scroll spy enabled");
                self.evaluate(&*env);
                SpyTransition::Enabled
            }
        }
    }

    /// Handle a scroll signal. Inert while disabled. Returns the new
    /// active section when it changed.
    pub fn on_scroll<D: DocumentPort + ?Sized>(
        &mut self,
        document: &D,
    ) -> Option<Section> {
        if !self.is_enabled() {
            return None;
        }
        self.evaluate(document)
    }

    fn evaluate<D: DocumentPort + ?Sized>(
        &mut self,
        document: &D,
    ) -> Option<Section> {
        self.passes += 1;
        let found = find_active(document, self.activation_line_px);
        tracing::trace!(?found, line = self.activation_line_px, "scroll spy pass");

        match found {
            Some(section) if section != self.active => {
                self.active = section;
                Some(section)
            }
            // No match keeps the last known section
            _ => None,
        }
    }

    /// Unbind the scroll listener if bound.
    pub fn teardown<W: WindowPort + ?Sized>(&mut self, window: &mut W) {
        if let Some(id) = self.listener.take() {
            window.remove_listener(id);
        }
    }

    /// Highlighted section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether the scroll listener is bound.
    pub fn is_enabled(&self) -> bool {
        self.listener.is_some()
    }

    /// Evaluation passes performed so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Activation line offset from the viewport top.
    pub fn activation_line_px(&self) -> f32 {
        self.activation_line_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;

    fn page() -> HeadlessPage {
        HeadlessPage::new(1280, 800.0)
            .with_section("home", 800.0)
            .with_section("about", 600.0)
            .with_section("projects", 900.0)
            .with_section("contact", 500.0)
    }

    #[test]
    fn gating_truth_table() {
        let detail = View::from_path("/projects/shopwave");
        assert!(should_track(false, &View::Root));
        assert!(!should_track(true, &View::Root));
        assert!(!should_track(false, &detail));
        assert!(!should_track(true, &detail));
    }

    #[test]
    fn enabling_evaluates_immediately() {
        let mut page = page();
        page.scroll_to(850.0);

        let mut spy = ScrollSpy::new(100.0);
        let transition = spy.reconcile(false, &View::Root, &mut page);

        assert_eq!(transition, SpyTransition::Enabled);
        assert_eq!(spy.active(), Section::About);
        assert_eq!(page.listener_count(ListenerKind::Scroll), 1);
    }

    #[test]
    fn reconcile_never_stacks_listeners() {
        let mut page = page();
        let mut spy = ScrollSpy::new(100.0);

        for _ in 0..3 {
            spy.reconcile(false, &View::Root, &mut page);
        }
        assert_eq!(page.listener_count(ListenerKind::Scroll), 1);

        spy.reconcile(true, &View::Root, &mut page);
        spy.reconcile(false, &View::Root, &mut page);
        assert_eq!(page.listener_count(ListenerKind::Scroll), 1);
    }

    #[test]
    fn no_match_keeps_last_section() {
        // A gap between about and projects
        let mut page = HeadlessPage::new(1280, 800.0)
            .with_section_at("home", 0.0, 500.0)
            .with_section_at("about", 500.0, 500.0)
            .with_section_at("projects", 1400.0, 500.0);
        let mut spy = ScrollSpy::new(100.0);
        spy.reconcile(false, &View::Root, &mut page);

        page.scroll_to(600.0);
        assert_eq!(spy.on_scroll(&page), Some(Section::About));

        page.scroll_to(1100.0);
        assert_eq!(spy.on_scroll(&page), None);
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn overlapping_sections_resolve_by_order() {
        let mut page = HeadlessPage::new(1280, 800.0)
            .with_section_at("about", 0.0, 400.0)
            .with_section_at("projects", 50.0, 400.0);
        let mut spy = ScrollSpy::new(100.0);
        spy.reconcile(false, &View::Root, &mut page);

        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn disabled_spy_is_inert() {
        let mut page = page();
        let mut spy = ScrollSpy::new(100.0);
        spy.reconcile(false, &View::Root, &mut page);
        spy.reconcile(true, &View::Root, &mut page);

        page.scroll_to(1500.0);
        let passes = spy.passes();
        assert_eq!(spy.on_scroll(&page), None);
        assert_eq!(spy.active(), Section::Home);
        assert_eq!(spy.passes(), passes);
        assert_eq!(page.listener_count(ListenerKind::Scroll), 0);
    }
}
