use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::{
    Display, EventHandle, EventKind, Handler, IntersectionEntry, ObserveOptions, ObserverCallback,
    Page, PageError, Target, Watch,
};

impl EventHandle for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

fn platform(err: JsValue) -> PageError {
    PageError::Platform(format!("{:?}", err))
}

/// The live browser document.
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, PageError> {
        let window =
            web_sys::window().ok_or_else(|| PageError::Platform("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Platform("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn style_target(el: &Element) -> Option<&HtmlElement> {
        el.dyn_ref::<HtmlElement>()
    }
}

impl Page for WebPage {
    type Element = Element;

    fn element(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let nodes = self.document.query_selector_all(selector).map_err(platform)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            el.text_content().unwrap_or_default()
        }
    }

    fn is_checked(&self, el: &Element) -> bool {
        el.dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn set_class(&self, el: &Element, class: &str, on: bool) {
        let _ = el.class_list().toggle_with_force(class, on);
    }

    fn toggle_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().toggle(class).unwrap_or(false)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        let _ = el.set_attribute(name, value);
    }

    fn set_display(&self, el: &Element, display: Display) {
        if let Some(html) = Self::style_target(el) {
            let _ = html.style().set_property("display", display.css_value());
        }
    }

    fn set_scroll_lock(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }

    fn set_disabled(&self, el: &Element, disabled: bool) {
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn focus(&self, el: &Element) {
        if let Some(html) = Self::style_target(el) {
            let _ = html.focus();
        }
    }

    fn scroll_into_view_centered(&self, el: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn listen(&self, target: Target<'_, Element>, kind: EventKind, mut handler: Handler) {
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handler(&event);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(kind.is_passive());

        let result = match target {
            Target::Window => self
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    kind.name(),
                    callback.as_ref().unchecked_ref(),
                    &options,
                ),
            Target::Element(el) => el.add_event_listener_with_callback_and_add_event_listener_options(
                kind.name(),
                callback.as_ref().unchecked_ref(),
                &options,
            ),
        };
        if let Err(err) = result {
            error!("Failed to register {} listener: {:?}", kind, err);
        }

        // Listeners live as long as the page.
        callback.forget();
    }

    fn observe(
        &self,
        elements: &[Element],
        options: &ObserveOptions,
        mut callback: ObserverCallback<Element>,
    ) -> Result<(), PageError> {
        let has_observer = web_sys::js_sys::Reflect::has(
            &self.window,
            &JsValue::from_str("IntersectionObserver"),
        )
        .unwrap_or(false);
        if !has_observer {
            return Err(PageError::ObserverUnavailable);
        }

        let on_entries = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let watch = callback(&IntersectionEntry {
                    target: target.clone(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
                if watch == Watch::Release {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
            .map_err(|_| PageError::ObserverUnavailable)?;
        for el in elements {
            observer.observe(el);
        }
        on_entries.forget();
        Ok(())
    }
}
