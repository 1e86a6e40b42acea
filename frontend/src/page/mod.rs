//! The document seam every behavior unit is written against.
//!
//! Units never touch `web_sys` directly. They read and write presentation
//! state through [`Page`], so the same code runs on [`web::WebPage`] in the
//! browser and on the in-memory `MockPage` (feature `test-support`) in
//! native tests.

use std::fmt;

use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;
pub mod web;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("element #{0} not found in page markup")]
    MissingElement(String),
    #[error("visibility observation is not available")]
    ObserverUnavailable,
    #[error("platform error: {0}")]
    Platform(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Click,
    Blur,
    Submit,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Scroll => "scroll",
            EventKind::Click => "click",
            EventKind::Blur => "blur",
            EventKind::Submit => "submit",
        }
    }

    /// Passive listeners promise never to cancel the event.
    pub fn is_passive(self) -> bool {
        matches!(self, EventKind::Scroll)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS `display` values the units switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Hidden,
}

impl Display {
    pub fn shown(show: bool) -> Self {
        if show {
            Display::Block
        } else {
            Display::Hidden
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Hidden => "none",
        }
    }
}

pub trait EventHandle {
    fn prevent_default(&self);
}

pub type Handler = Box<dyn FnMut(&dyn EventHandle)>;

pub enum Target<'a, E> {
    Window,
    Element(&'a E),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// What an observer callback wants done with the element it was notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Keep,
    Release,
}

pub type ObserverCallback<E> = Box<dyn FnMut(&IntersectionEntry<E>) -> Watch>;

pub trait Page: Clone + 'static {
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    fn element(&self, id: &str) -> Result<Self::Element, PageError>;
    /// Matching elements in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, PageError>;

    fn scroll_y(&self) -> f64;
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    /// Raw field content; callers trim.
    fn value(&self, el: &Self::Element) -> String;
    fn is_checked(&self, el: &Self::Element) -> bool;

    fn set_class(&self, el: &Self::Element, class: &str, on: bool);
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, el: &Self::Element, class: &str) -> bool;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);
    fn set_display(&self, el: &Self::Element, display: Display);
    fn set_scroll_lock(&self, locked: bool);
    fn set_disabled(&self, el: &Self::Element, disabled: bool);
    fn set_text(&self, el: &Self::Element, text: &str);
    fn focus(&self, el: &Self::Element);
    fn scroll_into_view_centered(&self, el: &Self::Element);

    /// Registers `handler` for the lifetime of the page.
    fn listen(&self, target: Target<'_, Self::Element>, kind: EventKind, handler: Handler);

    fn observe(
        &self,
        elements: &[Self::Element],
        options: &ObserveOptions,
        callback: ObserverCallback<Self::Element>,
    ) -> Result<(), PageError>;
}
