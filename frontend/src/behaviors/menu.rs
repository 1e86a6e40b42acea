use std::rc::Rc;

use log::debug;

use crate::config::BehaviorConfig;
use crate::page::{EventHandle, EventKind, Page, PageError, Target};

pub const OPEN_CLASS: &str = "open";

/// Hamburger-driven mobile navigation panel.
///
/// The panel's `open` class is the single source of truth; the hamburger's
/// class, its `aria-expanded` attribute and the body scroll lock mirror it.
pub struct MobileMenu<P: Page> {
    page: P,
    hamburger: P::Element,
    panel: P::Element,
    links: Vec<P::Element>,
}

impl<P: Page> MobileMenu<P> {
    pub fn new(page: P, config: &BehaviorConfig) -> Result<Self, PageError> {
        let hamburger = page.element(config.ids.hamburger)?;
        let panel = page.element(config.ids.mobile_menu)?;
        let links = page.query_all(config.menu_link_selector)?;
        Ok(Self {
            page,
            hamburger,
            panel,
            links,
        })
    }

    pub fn is_open(&self) -> bool {
        self.page.has_class(&self.panel, OPEN_CLASS)
    }

    pub fn toggle(&self) {
        let open = self.page.toggle_class(&self.panel, OPEN_CLASS);
        self.mirror(open);
    }

    /// Unconditional close; a no-op on an already closed menu.
    pub fn close(&self) {
        self.page.set_class(&self.panel, OPEN_CLASS, false);
        self.mirror(false);
    }

    fn mirror(&self, open: bool) {
        debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        self.page.set_class(&self.hamburger, OPEN_CLASS, open);
        self.page
            .set_attribute(&self.hamburger, "aria-expanded", if open { "true" } else { "false" });
        self.page.set_scroll_lock(open);
    }

    pub fn attach(self) {
        let menu = Rc::new(self);

        {
            let toggler = menu.clone();
            menu.page.listen(
                Target::Element(&menu.hamburger),
                EventKind::Click,
                Box::new(move |_: &dyn EventHandle| toggler.toggle()),
            );
        }

        for link in &menu.links {
            let closer = menu.clone();
            menu.page.listen(
                Target::Element(link),
                EventKind::Click,
                Box::new(move |_: &dyn EventHandle| closer.close()),
            );
        }
    }
}
