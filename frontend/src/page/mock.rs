//! In-memory page used to drive the behavior units without a browser.
//!
//! Elements live in an arena addressed by [`NodeId`]. Selector support is
//! limited to compound selectors (`tag#id.class`) joined by descendant
//! combinators, which is all the units ever ask for.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{
    Display, EventHandle, EventKind, Handler, IntersectionEntry, ObserveOptions, ObserverCallback,
    Page, PageError, Target, Watch,
};
use crate::config::ElementIds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    display: Option<Display>,
    value: String,
    checked: bool,
    disabled: bool,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Listener {
    target: Option<NodeId>,
    kind: EventKind,
    handler: Rc<RefCell<Handler>>,
}

struct Observer {
    options: ObserveOptions,
    watched: Vec<NodeId>,
    callback: Rc<RefCell<ObserverCallback<NodeId>>>,
}

struct State {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    observer_available: bool,
    scroll_y: f64,
    scroll_locked: bool,
    focused: Option<NodeId>,
    scrolled_into_view: Vec<NodeId>,
    notifications: HashMap<NodeId, usize>,
}

struct MockEvent {
    passive: bool,
    prevented: Cell<bool>,
}

impl EventHandle for MockEvent {
    fn prevent_default(&self) {
        if !self.passive {
            self.prevented.set(true);
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn parse_compound(input: &str) -> Compound {
    let mut compound = Compound::default();
    let mut marker: Option<char> = None;
    let mut token = String::new();
    // trailing '#' flushes the last token
    for ch in input.chars().chain(std::iter::once('#')) {
        if ch == '#' || ch == '.' {
            if !token.is_empty() {
                let part = std::mem::take(&mut token);
                match marker {
                    None => compound.tag = Some(part),
                    Some('#') => compound.id = Some(part),
                    Some(_) => compound.classes.push(part),
                }
            }
            marker = Some(ch);
        } else {
            token.push(ch);
        }
    }
    compound
}

fn matches(node: &Node, compound: &Compound) -> bool {
    compound
        .tag
        .as_ref()
        .map_or(true, |tag| node.tag.eq_ignore_ascii_case(tag))
        && compound
            .id
            .as_ref()
            .map_or(true, |id| node.id.as_ref() == Some(id))
        && compound.classes.iter().all(|class| node.classes.contains(class))
}

#[derive(Clone)]
pub struct MockPage {
    state: Rc<RefCell<State>>,
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPage {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                nodes: Vec::new(),
                roots: Vec::new(),
                listeners: Vec::new(),
                observers: Vec::new(),
                observer_available: true,
                scroll_y: 0.0,
                scroll_locked: false,
                focused: None,
                scrolled_into_view: Vec::new(),
                notifications: HashMap::new(),
            })),
        }
    }

    /// A page whose platform lacks visibility observation.
    pub fn without_observer() -> Self {
        let page = Self::new();
        page.state.borrow_mut().observer_available = false;
        page
    }

    /// Appends an element described as `tag#id.class.class` under `parent`.
    pub fn append(&self, parent: Option<NodeId>, descriptor: &str) -> NodeId {
        let compound = parse_compound(descriptor);
        let mut state = self.state.borrow_mut();
        let node_id = NodeId(state.nodes.len());
        state.nodes.push(Node {
            tag: compound.tag.unwrap_or_else(|| "div".to_string()),
            id: compound.id,
            classes: compound.classes,
            parent,
            ..Node::default()
        });
        match parent {
            Some(parent) => state.nodes[parent.0].children.push(node_id),
            None => state.roots.push(node_id),
        }
        node_id
    }

    pub fn set_value(&self, el: NodeId, value: &str) {
        self.state.borrow_mut().nodes[el.0].value = value.to_string();
    }

    pub fn set_checked(&self, el: NodeId, checked: bool) {
        self.state.borrow_mut().nodes[el.0].checked = checked;
    }

    pub fn click(&self, el: NodeId) {
        self.dispatch(Some(el), EventKind::Click);
    }

    pub fn blur(&self, el: NodeId) {
        {
            let mut state = self.state.borrow_mut();
            if state.focused == Some(el) {
                state.focused = None;
            }
        }
        self.dispatch(Some(el), EventKind::Blur);
    }

    /// Fires `submit` on `form`; returns whether the default action was prevented.
    pub fn submit(&self, form: NodeId) -> bool {
        self.dispatch(Some(form), EventKind::Submit)
    }

    pub fn scroll_to(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
        self.dispatch(None, EventKind::Scroll);
    }

    /// Reports `el` as visible by `ratio` to every observer still watching it.
    ///
    /// Mirrors threshold crossing: ratios between zero and an observer's
    /// threshold produce no notification for that observer.
    pub fn intersect(&self, el: NodeId, ratio: f64) {
        let deliveries: Vec<(usize, Rc<RefCell<ObserverCallback<NodeId>>>)> = {
            let state = self.state.borrow();
            state
                .observers
                .iter()
                .enumerate()
                .filter(|(_, observer)| observer.watched.contains(&el))
                .filter(|(_, observer)| ratio <= 0.0 || ratio >= observer.options.threshold)
                .map(|(index, observer)| (index, observer.callback.clone()))
                .collect()
        };

        for (index, callback) in deliveries {
            *self.state.borrow_mut().notifications.entry(el).or_insert(0) += 1;
            let entry = IntersectionEntry {
                target: el,
                is_intersecting: ratio > 0.0,
                ratio,
            };
            let watch = (callback.borrow_mut())(&entry);
            if watch == Watch::Release {
                self.state.borrow_mut().observers[index]
                    .watched
                    .retain(|watched| *watched != el);
            }
        }
    }

    pub fn attribute(&self, el: NodeId, name: &str) -> Option<String> {
        self.state.borrow().nodes[el.0].attributes.get(name).cloned()
    }

    pub fn display(&self, el: NodeId) -> Option<Display> {
        self.state.borrow().nodes[el.0].display
    }

    pub fn is_disabled(&self, el: NodeId) -> bool {
        self.state.borrow().nodes[el.0].disabled
    }

    pub fn text(&self, el: NodeId) -> String {
        self.state.borrow().nodes[el.0].text.clone()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.state.borrow().focused
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.state.borrow().scrolled_into_view.clone()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.state.borrow().scroll_locked
    }

    /// Number of intersection notifications delivered for `el`.
    pub fn notifications(&self, el: NodeId) -> usize {
        self.state.borrow().notifications.get(&el).copied().unwrap_or(0)
    }

    pub fn is_watched(&self, el: NodeId) -> bool {
        self.state
            .borrow()
            .observers
            .iter()
            .any(|observer| observer.watched.contains(&el))
    }

    pub fn observer_options(&self) -> Vec<ObserveOptions> {
        self.state
            .borrow()
            .observers
            .iter()
            .map(|observer| observer.options.clone())
            .collect()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    fn dispatch(&self, target: Option<NodeId>, kind: EventKind) -> bool {
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.target == target && listener.kind == kind)
            .map(|listener| listener.handler.clone())
            .collect();

        let event = MockEvent {
            passive: kind.is_passive(),
            prevented: Cell::new(false),
        };
        for handler in handlers {
            (handler.borrow_mut())(&event);
        }
        event.prevented.get()
    }

    fn document_order(&self) -> Vec<NodeId> {
        let state = self.state.borrow();
        let mut order = Vec::with_capacity(state.nodes.len());
        let mut stack: Vec<NodeId> = state.roots.iter().rev().copied().collect();
        while let Some(node_id) = stack.pop() {
            order.push(node_id);
            stack.extend(state.nodes[node_id.0].children.iter().rev().copied());
        }
        order
    }

    fn ancestors_match(&self, mut parent: Option<NodeId>, parts: &[Compound]) -> bool {
        let state = self.state.borrow();
        let mut remaining = parts.len();
        while remaining > 0 {
            let Some(node_id) = parent else {
                return false;
            };
            let node = &state.nodes[node_id.0];
            if matches(node, &parts[remaining - 1]) {
                remaining -= 1;
            }
            parent = node.parent;
        }
        true
    }
}

impl Page for MockPage {
    type Element = NodeId;

    fn element(&self, id: &str) -> Result<NodeId, PageError> {
        self.state
            .borrow()
            .nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(NodeId)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, PageError> {
        let parts: Vec<Compound> = selector.split_whitespace().map(parse_compound).collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return Err(PageError::Platform(format!("invalid selector {selector:?}")));
        };

        Ok(self
            .document_order()
            .into_iter()
            .filter(|node_id| {
                let (is_match, parent) = {
                    let state = self.state.borrow();
                    let node = &state.nodes[node_id.0];
                    (matches(node, last), node.parent)
                };
                is_match && self.ancestors_match(parent, ancestors)
            })
            .collect())
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.state.borrow().nodes[el.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn value(&self, el: &NodeId) -> String {
        self.state.borrow().nodes[el.0].value.clone()
    }

    fn is_checked(&self, el: &NodeId) -> bool {
        self.state.borrow().nodes[el.0].checked
    }

    fn set_class(&self, el: &NodeId, class: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[el.0].classes;
        let present = classes.iter().any(|c| c == class);
        if on && !present {
            classes.push(class.to_string());
        } else if !on && present {
            classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&self, el: &NodeId, class: &str) -> bool {
        let on = !self.has_class(el, class);
        self.set_class(el, class, on);
        on
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        self.state.borrow_mut().nodes[el.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_display(&self, el: &NodeId, display: Display) {
        self.state.borrow_mut().nodes[el.0].display = Some(display);
    }

    fn set_scroll_lock(&self, locked: bool) {
        self.state.borrow_mut().scroll_locked = locked;
    }

    fn set_disabled(&self, el: &NodeId, disabled: bool) {
        self.state.borrow_mut().nodes[el.0].disabled = disabled;
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.state.borrow_mut().nodes[el.0].text = text.to_string();
    }

    fn focus(&self, el: &NodeId) {
        self.state.borrow_mut().focused = Some(*el);
    }

    fn scroll_into_view_centered(&self, el: &NodeId) {
        self.state.borrow_mut().scrolled_into_view.push(*el);
    }

    fn listen(&self, target: Target<'_, NodeId>, kind: EventKind, handler: Handler) {
        let target = match target {
            Target::Window => None,
            Target::Element(el) => Some(*el),
        };
        self.state.borrow_mut().listeners.push(Listener {
            target,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
    }

    fn observe(
        &self,
        elements: &[NodeId],
        options: &ObserveOptions,
        callback: ObserverCallback<NodeId>,
    ) -> Result<(), PageError> {
        let mut state = self.state.borrow_mut();
        if !state.observer_available {
            return Err(PageError::ObserverUnavailable);
        }
        state.observers.push(Observer {
            options: options.clone(),
            watched: elements.to_vec(),
            callback: Rc::new(RefCell::new(callback)),
        });
        Ok(())
    }
}

/// Builds the landing page markup: navigation with a three-link mobile
/// panel, a hero with three reveal blocks, two reveal blocks further down,
/// and the contact form with its wrapper and success panel.
pub fn landing_page(ids: &ElementIds) -> MockPage {
    landing_page_on(MockPage::new(), ids)
}

/// Same markup as [`landing_page`] on a page without visibility observation.
pub fn landing_page_without_observer(ids: &ElementIds) -> MockPage {
    landing_page_on(MockPage::without_observer(), ids)
}

fn landing_page_on(page: MockPage, ids: &ElementIds) -> MockPage {
    let body = page.append(None, "body");

    let nav = page.append(Some(body), &format!("nav#{}", ids.navbar));
    page.append(Some(nav), &format!("button#{}.hamburger", ids.hamburger));
    let panel = page.append(Some(body), &format!("div#{}.mobile-menu", ids.mobile_menu));
    for _ in 0..3 {
        page.append(Some(panel), "a.mobile-link");
    }

    let hero = page.append(Some(body), "section#hero");
    for _ in 0..3 {
        page.append(Some(hero), "div.reveal");
    }
    let services = page.append(Some(body), "section#servizi");
    page.append(Some(services), "div.reveal");
    page.append(Some(services), "div.reveal");

    let contact = page.append(Some(body), "section#contatti");
    let wrapper = page.append(Some(contact), &format!("div#{}", ids.form_wrapper));
    let form = page.append(Some(wrapper), &format!("form#{}", ids.form));
    for (field, error) in [
        (ids.name, ids.name_error),
        (ids.email, ids.email_error),
        (ids.phone, ids.phone_error),
    ] {
        page.append(Some(form), &format!("input#{field}"));
        page.append(Some(form), &format!("span#{error}.field-error"));
    }
    page.append(Some(form), &format!("textarea#{}", ids.message));
    page.append(Some(form), &format!("span#{}.field-error", ids.message_error));
    page.append(Some(form), &format!("input#{}", ids.consent));
    page.append(Some(form), &format!("span#{}.field-error", ids.consent_error));
    page.append(Some(form), &format!("button#{}", ids.submit));
    page.append(Some(contact), &format!("div#{}", ids.form_success));

    page
}
