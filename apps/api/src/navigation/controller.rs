//! View controller — which book section is showing, plus the chrome around it.
//!
//! There is no state machine here: the current section can be set to any
//! member from any other. The controller only tracks the value and derives
//! the nav bar, progress dots and scroll-to-top button from it.

use serde::Serialize;
use tracing::debug;

use crate::models::section::SectionId;

/// Page offset (px) past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Ordering of a page flip: `exiting` leaves the accessibility tree before
/// `entering` is added. Animation timing is left to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageTransition {
    pub exiting: SectionId,
    pub entering: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressDot {
    pub section: SectionId,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub section: SectionId,
    pub menu_open: bool,
    pub show_scroll_top: bool,
    /// Empty while the cover is showing.
    pub nav_items: Vec<NavItem>,
    /// Empty while the cover is showing.
    pub progress_dots: Vec<ProgressDot>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    current: SectionId,
    menu_open: bool,
    scroll_offset: f64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Shows `target`. Always succeeds and always closes the mobile menu.
    pub fn navigate(&mut self, target: SectionId) -> PageTransition {
        let transition = PageTransition {
            exiting: self.current,
            entering: target,
        };
        debug!("Navigating {} -> {}", transition.exiting, transition.entering);
        self.current = target;
        self.menu_open = false;
        transition
    }

    /// "Open Portfolio" on the cover. Nothing returns the view to the cover
    /// except an explicit `navigate(SectionId::Cover)`.
    pub fn enter_from_cover(&mut self) -> PageTransition {
        self.navigate(SectionId::Contents)
    }

    /// Flips the mobile menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn record_scroll(&mut self, offset_px: f64) {
        self.scroll_offset = offset_px.max(0.0);
    }

    pub fn show_scroll_top(&self) -> bool {
        self.current != SectionId::Cover && self.scroll_offset > SCROLL_TOP_THRESHOLD_PX
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        if self.current == SectionId::Cover {
            return Vec::new();
        }
        SectionId::NAVIGABLE
            .iter()
            .map(|&section| NavItem {
                section,
                label: section.nav_label(),
                active: section == self.current,
            })
            .collect()
    }

    pub fn progress_dots(&self) -> Vec<ProgressDot> {
        if self.current == SectionId::Cover {
            return Vec::new();
        }
        SectionId::NAVIGABLE
            .iter()
            .map(|&section| ProgressDot {
                section,
                title: section.title(),
                active: section == self.current,
            })
            .collect()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            section: self.current(),
            menu_open: self.menu_open(),
            show_scroll_top: self.show_scroll_top(),
            nav_items: self.nav_items(),
            progress_dots: self.progress_dots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_cover() {
        let view = ViewController::new();
        assert_eq!(view.current(), SectionId::Cover);
        assert!(!view.menu_open());
    }

    #[test]
    fn test_last_navigation_wins() {
        let sequences: [&[SectionId]; 3] = [
            &[SectionId::About, SectionId::Contact],
            &[SectionId::Contact, SectionId::Cover, SectionId::Skills],
            &[
                SectionId::Experience,
                SectionId::Projects,
                SectionId::Projects,
                SectionId::Contents,
            ],
        ];
        for sequence in sequences {
            let mut view = ViewController::new();
            for &target in sequence {
                view.navigate(target);
            }
            assert_eq!(Some(&view.current()), sequence.last());
        }
    }

    #[test]
    fn test_any_section_reachable_from_any_other() {
        for from in SectionId::ALL {
            for to in SectionId::ALL {
                let mut view = ViewController::new();
                view.navigate(from);
                let transition = view.navigate(to);
                assert_eq!(transition.exiting, from);
                assert_eq!(transition.entering, to);
                assert_eq!(view.current(), to);
            }
        }
    }

    #[test]
    fn test_navigate_twice_is_idempotent() {
        let mut once = ViewController::new();
        once.navigate(SectionId::About);

        let mut twice = ViewController::new();
        twice.navigate(SectionId::About);
        twice.navigate(SectionId::About);

        assert_eq!(once.current(), twice.current());
        assert_eq!(once.nav_items(), twice.nav_items());
        assert_eq!(once.menu_open(), twice.menu_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut view = ViewController::new();
        view.enter_from_cover();
        assert!(view.toggle_menu());
        view.navigate(SectionId::Skills);
        assert!(!view.menu_open());
    }

    #[test]
    fn test_enter_from_cover_lands_on_contents() {
        let mut view = ViewController::new();
        let transition = view.enter_from_cover();
        assert_eq!(transition.exiting, SectionId::Cover);
        assert_eq!(view.current(), SectionId::Contents);
    }

    #[test]
    fn test_cover_hides_chrome() {
        let mut view = ViewController::new();
        view.record_scroll(2_000.0);
        assert!(view.nav_items().is_empty());
        assert!(view.progress_dots().is_empty());
        assert!(!view.show_scroll_top(), "scroll-to-top never shows on the cover");
    }

    #[test]
    fn test_exactly_one_nav_item_active() {
        for section in SectionId::NAVIGABLE {
            let mut view = ViewController::new();
            view.navigate(section);
            let active: Vec<_> = view.nav_items().into_iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].section, section);
        }
    }

    #[test]
    fn test_nav_order_and_home_label() {
        let mut view = ViewController::new();
        view.enter_from_cover();
        let labels: Vec<_> = view.nav_items().iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "About", "Projects", "Skills", "Experience", "Contact"]
        );
    }

    #[test]
    fn test_scroll_top_threshold() {
        let mut view = ViewController::new();
        view.navigate(SectionId::Projects);
        view.record_scroll(SCROLL_TOP_THRESHOLD_PX);
        assert!(!view.show_scroll_top());
        view.record_scroll(SCROLL_TOP_THRESHOLD_PX + 1.0);
        assert!(view.show_scroll_top());
    }
}
