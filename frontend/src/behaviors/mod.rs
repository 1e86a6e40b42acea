//! The four independent page behaviors, attached once at load.

use log::{info, warn};

use crate::config::BehaviorConfig;
use crate::page::{Page, PageError};
use crate::scheduler::Scheduler;

pub mod contact_form;
pub mod menu;
pub mod reveal;
pub mod scroll_style;

pub use contact_form::{ContactForm, SubmissionState};
pub use menu::MobileMenu;
pub use reveal::Reveal;
pub use scroll_style::ScrollStyle;

/// Outcome of [`Behaviors::attach_all`].
#[derive(Debug, Default)]
pub struct Behaviors {
    pub attached: Vec<&'static str>,
    pub skipped: Vec<(&'static str, PageError)>,
}

impl Behaviors {
    /// Attaches every unit whose markup is present. A unit with missing
    /// markup is skipped without affecting the others.
    pub fn attach_all<P: Page, S: Scheduler>(page: &P, scheduler: &S, config: &BehaviorConfig) -> Self {
        let mut report = Behaviors::default();

        report.record(
            "scroll-style",
            ScrollStyle::new(page.clone(), config).map(ScrollStyle::attach),
        );
        report.record(
            "mobile-menu",
            MobileMenu::new(page.clone(), config).map(MobileMenu::attach),
        );
        report.record(
            "reveal",
            Reveal::new(page.clone(), scheduler.clone(), config).map(Reveal::attach),
        );
        report.record(
            "contact-form",
            ContactForm::new(page.clone(), scheduler.clone(), config).map(|form| {
                form.attach();
            }),
        );

        info!("Attached page behaviors: {}", report.attached.join(", "));
        report
    }

    fn record(&mut self, unit: &'static str, result: Result<(), PageError>) {
        match result {
            Ok(()) => self.attached.push(unit),
            Err(err) => {
                warn!("Skipping {}: {}", unit, err);
                self.skipped.push((unit, err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::mock::{landing_page, MockPage};
    use crate::page::EventKind;
    use crate::scheduler::VirtualClock;

    #[test]
    fn full_page_attaches_every_unit() {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        let report = Behaviors::attach_all(&page, &VirtualClock::new(), &config);

        assert_eq!(report.attached, vec!["scroll-style", "mobile-menu", "reveal", "contact-form"]);
        assert!(report.skipped.is_empty());
        assert_eq!(page.listener_count(EventKind::Scroll), 1);
        assert_eq!(page.listener_count(EventKind::Click), 4);
        assert_eq!(page.listener_count(EventKind::Submit), 1);
    }

    #[test]
    fn missing_markup_skips_only_that_unit() {
        let config = BehaviorConfig::default();
        let page = MockPage::new();
        page.append(None, &format!("nav#{}", config.ids.navbar));
        let report = Behaviors::attach_all(&page, &VirtualClock::new(), &config);

        assert_eq!(report.attached, vec!["scroll-style", "reveal"]);
        let skipped: Vec<_> = report.skipped.iter().map(|(unit, _)| *unit).collect();
        assert_eq!(skipped, vec!["mobile-menu", "contact-form"]);
    }
}
