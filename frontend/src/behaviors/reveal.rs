use std::time::Duration;

use log::{debug, warn};

use crate::config::BehaviorConfig;
use crate::page::{IntersectionEntry, ObserveOptions, Page, PageError, Watch};
use crate::scheduler::Scheduler;

pub const VISIBLE_CLASS: &str = "visible";

/// One-shot reveal of marked elements.
///
/// Hero elements are revealed on a fixed cascade right after load. Every
/// other marked element is watched until it first crosses the visibility
/// threshold, then marked `visible` and released. `visible` is never removed.
pub struct Reveal<P: Page, S: Scheduler> {
    page: P,
    scheduler: S,
    hero: Vec<P::Element>,
    watched: Vec<P::Element>,
    options: ObserveOptions,
    stagger_base: Duration,
    stagger_step: Duration,
}

impl<P: Page, S: Scheduler> Reveal<P, S> {
    pub fn new(page: P, scheduler: S, config: &BehaviorConfig) -> Result<Self, PageError> {
        let hero = page.query_all(config.hero_reveal_selector)?;
        let watched = page
            .query_all(config.reveal_selector)?
            .into_iter()
            .filter(|el| !hero.contains(el))
            .collect();
        Ok(Self {
            page,
            scheduler,
            hero,
            watched,
            options: ObserveOptions {
                threshold: config.reveal_threshold,
                root_margin: config.reveal_root_margin.to_string(),
            },
            stagger_base: config.hero_stagger_base,
            stagger_step: config.hero_stagger_step,
        })
    }

    pub fn hero_delay(&self, index: usize) -> Duration {
        self.stagger_base + self.stagger_step * index as u32
    }

    pub fn attach(self) {
        for (index, el) in self.hero.iter().enumerate() {
            let page = self.page.clone();
            let el = el.clone();
            self.scheduler.schedule(
                self.hero_delay(index),
                Box::new(move || page.set_class(&el, VISIBLE_CLASS, true)),
            );
        }

        if self.watched.is_empty() {
            return;
        }

        let page = self.page.clone();
        let on_entry = Box::new(move |entry: &IntersectionEntry<P::Element>| {
            if !entry.is_intersecting {
                return Watch::Keep;
            }
            debug!("Revealing {:?} at ratio {:.2}", entry.target, entry.ratio);
            page.set_class(&entry.target, VISIBLE_CLASS, true);
            Watch::Release
        });

        if let Err(err) = self.page.observe(&self.watched, &self.options, on_entry) {
            warn!("Reveal observation unavailable ({}), showing all elements", err);
            for el in &self.watched {
                self.page.set_class(el, VISIBLE_CLASS, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::mock::{landing_page, landing_page_without_observer, MockPage, NodeId};
    use crate::scheduler::VirtualClock;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn split(page: &MockPage, config: &BehaviorConfig) -> (Vec<NodeId>, Vec<NodeId>) {
        let hero = page.query_all(config.hero_reveal_selector).unwrap();
        let rest = page
            .query_all(config.reveal_selector)
            .unwrap()
            .into_iter()
            .filter(|el| !hero.contains(el))
            .collect();
        (hero, rest)
    }

    fn visible(page: &MockPage, els: &[NodeId]) -> Vec<bool> {
        els.iter().map(|el| page.has_class(el, VISIBLE_CLASS)).collect()
    }

    #[test]
    fn hero_cascades_at_fixed_offsets() {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        let clock = VirtualClock::new();
        Reveal::new(page.clone(), clock.clone(), &config).unwrap().attach();
        let (hero, _) = split(&page, &config);

        clock.advance(ms(99));
        assert_eq!(visible(&page, &hero), vec![false, false, false]);
        clock.advance(ms(1));
        assert_eq!(visible(&page, &hero), vec![true, false, false]);
        clock.advance(ms(150));
        assert_eq!(visible(&page, &hero), vec![true, true, false]);
        clock.advance(ms(149));
        assert_eq!(visible(&page, &hero), vec![true, true, false]);
        clock.advance(ms(1));
        assert_eq!(visible(&page, &hero), vec![true, true, true]);
    }

    #[test]
    fn hero_elements_are_not_observed() {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        Reveal::new(page.clone(), VirtualClock::new(), &config).unwrap().attach();
        let (hero, rest) = split(&page, &config);

        assert!(hero.iter().all(|el| !page.is_watched(*el)));
        assert!(rest.iter().all(|el| page.is_watched(*el)));
        assert_eq!(
            page.observer_options(),
            vec![ObserveOptions {
                threshold: 0.12,
                root_margin: "0px 0px -40px 0px".to_string(),
            }]
        );
    }

    #[test]
    fn reveal_is_one_shot_and_monotonic() {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        Reveal::new(page.clone(), VirtualClock::new(), &config).unwrap().attach();
        let (_, rest) = split(&page, &config);
        let target = rest[1];

        page.intersect(target, 0.05);
        assert!(!page.has_class(&target, VISIBLE_CLASS));

        page.intersect(target, 0.3);
        assert!(page.has_class(&target, VISIBLE_CLASS));
        assert!(!page.is_watched(target));
        assert_eq!(page.notifications(target), 1);

        page.intersect(target, 0.0);
        page.intersect(target, 0.9);
        assert!(page.has_class(&target, VISIBLE_CLASS));
        assert_eq!(page.notifications(target), 1);
        assert_eq!(visible(&page, &rest), vec![false, true]);
    }

    #[test]
    fn leaving_before_reveal_keeps_watching() {
        let config = BehaviorConfig::default();
        let page = landing_page(&config.ids);
        Reveal::new(page.clone(), VirtualClock::new(), &config).unwrap().attach();
        let (_, rest) = split(&page, &config);

        page.intersect(rest[0], 0.0);
        assert!(page.is_watched(rest[0]));
        assert!(!page.has_class(&rest[0], VISIBLE_CLASS));
    }

    #[test]
    fn without_observer_everything_is_shown() {
        let config = BehaviorConfig::default();
        let page = landing_page_without_observer(&config.ids);
        let clock = VirtualClock::new();
        Reveal::new(page.clone(), clock.clone(), &config).unwrap().attach();
        let (hero, rest) = split(&page, &config);

        assert_eq!(visible(&page, &rest), vec![true, true]);
        clock.advance(ms(1000));
        assert_eq!(visible(&page, &hero), vec![true, true, true]);
    }
}
