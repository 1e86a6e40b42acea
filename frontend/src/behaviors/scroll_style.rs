use crate::config::BehaviorConfig;
use crate::page::{EventHandle, EventKind, Page, PageError, Target};

pub const SCROLLED_CLASS: &str = "scrolled";

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Marks the navigation bar `scrolled` once the page leaves the top.
pub struct ScrollStyle<P: Page> {
    page: P,
    navbar: P::Element,
    threshold: f64,
}

impl<P: Page> ScrollStyle<P> {
    pub fn new(page: P, config: &BehaviorConfig) -> Result<Self, PageError> {
        let navbar = page.element(config.ids.navbar)?;
        Ok(Self {
            page,
            navbar,
            threshold: config.scroll_threshold,
        })
    }

    pub fn apply(&self) {
        let scrolled = is_scrolled(self.page.scroll_y(), self.threshold);
        self.page.set_class(&self.navbar, SCROLLED_CLASS, scrolled);
    }

    pub fn attach(self) {
        let page = self.page.clone();
        page.listen(
            Target::Window,
            EventKind::Scroll,
            Box::new(move |_: &dyn EventHandle| self.apply()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::mock::{landing_page, MockPage};

    fn attached() -> (MockPage, <MockPage as Page>::Element) {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        ScrollStyle::new(page.clone(), &config).unwrap().attach();
        let navbar = page.element(config.ids.navbar).unwrap();
        (page, navbar)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 60.0));
        assert!(!is_scrolled(60.0, 60.0));
        assert!(is_scrolled(60.5, 60.0));
        assert!(is_scrolled(2000.0, 60.0));
    }

    #[test]
    fn navbar_follows_every_scroll_event() {
        let (page, navbar) = attached();
        assert!(!page.has_class(&navbar, SCROLLED_CLASS));

        for (offset, expected) in [(61.0, true), (400.0, true), (60.0, false), (0.0, false), (90.0, true)] {
            page.scroll_to(offset);
            assert_eq!(page.has_class(&navbar, SCROLLED_CLASS), expected, "offset {offset}");
        }
    }

    #[test]
    fn listens_passively_on_the_window() {
        let (page, _) = attached();
        assert_eq!(page.listener_count(EventKind::Scroll), 1);
        assert!(EventKind::Scroll.is_passive());
    }

    #[test]
    fn missing_navbar_fails_construction() {
        let config = BehaviorConfig::default();
        let result = ScrollStyle::new(MockPage::new(), &config);
        assert!(matches!(result, Err(PageError::MissingElement(id)) if id == "navbar"));
    }
}
