//! Navigation bar model: fixed items, active highlighting and the compact
//! layout's collapsible menu

use crate::types::Section;
use serde::Serialize;

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Target section
    pub section: Section,
    /// Display text
    pub label: &'static str,
    /// In-page link (`#<anchor>`)
    pub href: String,
    /// Highlighted
    pub active: bool,
}

/// Items in display order with the entry for `active` highlighted.
pub fn items(active: Section) -> Vec<NavItem> {
    Section::ORDER
        .into_iter()
        .map(|section| NavItem {
            section,
            label: section.label(),
            href: section.href(),
            active: section == active,
        })
        .collect()
}

/// Open/closed state of the compact-layout menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "nav menu toggled");
        self.open
    }

    /// Close the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_item_is_active() {
        let nav = items(Section::Projects);
        assert_eq!(nav.len(), 4);
        assert_eq!(nav.iter().filter(|item| item.active).count(), 1);
        assert_eq!(nav[2].href, "#projects");
        assert!(nav[2].active);
        assert_eq!(
            nav.iter().map(|item| item.label).collect::<Vec<_>>(),
            ["Home", "About", "Projects", "Contact"]
        );
    }

    #[test]
    fn toggle_and_close() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }
}
