use std::time::Duration;

use contact_site::behaviors::contact_form::ERROR_CLASS;
use contact_site::behaviors::menu::OPEN_CLASS;
use contact_site::behaviors::reveal::VISIBLE_CLASS;
use contact_site::behaviors::scroll_style::SCROLLED_CLASS;
use contact_site::page::mock::{landing_page, MockPage, NodeId};
use contact_site::page::Display;
use contact_site::scheduler::VirtualClock;
use contact_site::{BehaviorConfig, Behaviors, Page};

struct Site {
    page: MockPage,
    clock: VirtualClock,
    config: BehaviorConfig,
}

impl Site {
    fn load() -> Self {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        let clock = VirtualClock::new();
        let report = Behaviors::attach_all(&page, &clock, &config);
        assert!(report.skipped.is_empty(), "skipped units: {:?}", report.skipped);
        Self { page, clock, config }
    }

    fn el(&self, id: &str) -> NodeId {
        self.page.element(id).unwrap()
    }

    fn fill_valid(&self, consent: bool) {
        let ids = &self.config.ids;
        self.page.set_value(self.el(ids.name), "Giulia Bianchi");
        self.page.set_value(self.el(ids.email), "giulia@example.com");
        self.page.set_value(self.el(ids.phone), "02 1234 5678");
        self.page.set_value(self.el(ids.message), "Il termosifone del bagno non scalda.");
        self.page.set_checked(self.el(ids.consent), consent);
    }
}

#[test]
fn hero_cascade_runs_regardless_of_scroll_position() {
    let site = Site::load();
    let hero = site.page.query_all("#hero .reveal").unwrap();
    site.page.scroll_to(3000.0);

    let mut revealed_at = Vec::new();
    for _ in 0..500 {
        site.clock.advance(Duration::from_millis(1));
        let count = hero.iter().filter(|el| site.page.has_class(el, VISIBLE_CLASS)).count();
        if count > revealed_at.len() {
            revealed_at.push(site.clock.now().as_millis());
        }
    }
    assert_eq!(revealed_at, vec![100, 250, 400]);
}

#[test]
fn units_do_not_interfere() {
    let site = Site::load();
    let ids = &site.config.ids;
    let navbar = site.el(ids.navbar);
    let hamburger = site.el(ids.hamburger);
    let panel = site.el(ids.mobile_menu);

    site.page.click(hamburger);
    site.page.scroll_to(120.0);
    assert!(site.page.has_class(&navbar, SCROLLED_CLASS));
    assert!(site.page.has_class(&panel, OPEN_CLASS));
    assert!(site.page.is_scroll_locked());

    let below_fold = site.page.query_all("#servizi .reveal").unwrap();
    site.page.intersect(below_fold[0], 0.5);
    assert!(site.page.has_class(&below_fold[0], VISIBLE_CLASS));
    assert!(site.page.has_class(&panel, OPEN_CLASS));

    let links = site.page.query_all("#mobile-menu a").unwrap();
    site.page.click(links[2]);
    assert!(!site.page.has_class(&panel, OPEN_CLASS));
    assert!(!site.page.is_scroll_locked());
    assert!(site.page.has_class(&navbar, SCROLLED_CLASS));
}

#[test]
fn successful_submission_end_to_end() {
    let site = Site::load();
    let ids = &site.config.ids;
    let submit = site.el(ids.submit);
    site.fill_valid(true);

    assert!(site.page.submit(site.el(ids.form)));
    assert!(site.page.is_disabled(submit));
    assert!(site.page.text(submit).contains("Invio in corso..."));
    assert_eq!(site.page.display(site.el(ids.form_success)), None);

    site.clock.advance(Duration::from_millis(1200));
    assert_eq!(site.page.display(site.el(ids.form_wrapper)), Some(Display::Hidden));
    assert_eq!(site.page.display(site.el(ids.form_success)), Some(Display::Block));

    site.clock.advance(Duration::from_secs(10));
    assert_eq!(site.page.scrolled_into_view(), vec![site.el(ids.form_success)]);
}

#[test]
fn unchecked_consent_shows_only_consent_error() {
    let site = Site::load();
    let ids = &site.config.ids;
    // let the hero cascade finish so only submit timers could be pending
    site.clock.advance(Duration::from_millis(500));
    assert_eq!(site.clock.pending(), 0);
    site.fill_valid(false);

    assert!(site.page.submit(site.el(ids.form)));

    for input in [ids.name, ids.email, ids.phone, ids.message] {
        assert!(!site.page.has_class(&site.el(input), ERROR_CLASS));
    }
    assert_eq!(site.page.display(site.el(ids.consent_error)), Some(Display::Block));
    assert_eq!(site.page.focused(), None);
    assert_eq!(site.clock.pending(), 0);

    site.clock.advance(Duration::from_secs(5));
    assert_eq!(site.page.display(site.el(ids.form_success)), None);
    assert!(!site.page.is_disabled(site.el(ids.submit)));
}

#[test]
fn fixing_errors_after_a_failed_submit_allows_success() {
    let site = Site::load();
    let ids = &site.config.ids;
    site.fill_valid(true);
    site.page.set_value(site.el(ids.phone), "abc");

    site.page.submit(site.el(ids.form));
    assert_eq!(site.page.focused(), Some(site.el(ids.phone)));

    site.page.set_value(site.el(ids.phone), "+39 333 1234567");
    site.page.blur(site.el(ids.phone));
    assert_eq!(site.page.display(site.el(ids.phone_error)), Some(Display::Hidden));

    site.page.submit(site.el(ids.form));
    site.clock.advance(Duration::from_millis(1200));
    assert_eq!(site.page.display(site.el(ids.form_success)), Some(Display::Block));
}
