use std::time::Duration;

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose unit tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fixed element identifiers the page markup has to provide.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementIds {
    pub navbar: &'static str,
    pub hamburger: &'static str,
    pub mobile_menu: &'static str,
    pub form: &'static str,
    pub form_wrapper: &'static str,
    pub form_success: &'static str,
    pub submit: &'static str,
    pub name: &'static str,
    pub name_error: &'static str,
    pub email: &'static str,
    pub email_error: &'static str,
    pub phone: &'static str,
    pub phone_error: &'static str,
    pub message: &'static str,
    pub message_error: &'static str,
    pub consent: &'static str,
    pub consent_error: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            navbar: "navbar",
            hamburger: "hamburger",
            mobile_menu: "mobile-menu",
            form: "contact-form",
            form_wrapper: "contact-form-wrapper",
            form_success: "form-success",
            submit: "submit-btn",
            name: "nome",
            name_error: "nome-error",
            email: "email",
            email_error: "email-error",
            phone: "telefono",
            phone_error: "telefono-error",
            message: "problema-field",
            message_error: "problema-error",
            consent: "privacy",
            consent_error: "privacy-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    pub ids: ElementIds,
    /// Navigation gets `scrolled` strictly above this offset (px).
    pub scroll_threshold: f64,
    pub reveal_selector: &'static str,
    pub hero_reveal_selector: &'static str,
    pub menu_link_selector: &'static str,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub hero_stagger_base: Duration,
    pub hero_stagger_step: Duration,
    pub submit_delay: Duration,
    pub loading_label: &'static str,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            scroll_threshold: 60.0,
            reveal_selector: ".reveal",
            hero_reveal_selector: "#hero .reveal",
            menu_link_selector: "#mobile-menu a",
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -40px 0px",
            hero_stagger_base: Duration::from_millis(100),
            hero_stagger_step: Duration::from_millis(150),
            submit_delay: Duration::from_millis(1200),
            loading_label: "⏳ Invio in corso...",
        }
    }
}
