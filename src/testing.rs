//! In-memory [`Dom`] for unit tests.
//!
//! Supports the selector subset the behaviors use (tag, `.class`, `#id`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, comma lists), records every
//! scroll and dispatched event, and lets a test deliver intersection
//! batches by hand.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::dom::{
    Dom, IntersectionCallback, IntersectionEntry, IntersectionObserver,
    ObserverConfig, ScrollAlignment,
};
use crate::error::VeneerError;
use crate::events::FilterChange;

/// Element handle into a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    scroll_left: f64,
    offset_width: f64,
}

/// A scroll request recorded by [`MemoryDom`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScrollRecord {
    To { el: NodeId, left: f64 },
    IntoView { el: NodeId, alignment: ScrollAlignment },
}

struct ObserverState {
    config: ObserverConfig,
    observed: RefCell<Vec<NodeId>>,
    callback: RefCell<IntersectionCallback<NodeId>>,
}

/// Observer handle returned by [`MemoryDom::create_observer`].
pub(crate) struct MemoryObserver(Rc<ObserverState>);

impl IntersectionObserver<NodeId> for MemoryObserver {
    fn observe(&self, target: &NodeId) {
        let mut observed = self.0.observed.borrow_mut();
        if !observed.contains(target) {
            observed.push(*target);
        }
    }

    fn unobserve(&self, target: &NodeId) {
        self.0.observed.borrow_mut().retain(|id| id != target);
    }
}

pub(crate) struct MemoryDom {
    nodes: RefCell<FxHashMap<NodeId, Node>>,
    next: Cell<usize>,
    root: NodeId,
    scrolls: RefCell<Vec<ScrollRecord>>,
    events: RefCell<Vec<(String, FilterChange)>>,
    observers: RefCell<Vec<Rc<ObserverState>>>,
    /// Host error returned by every fallible call, when set.
    failure: RefCell<Option<String>>,
}

impl MemoryDom {
    pub(crate) fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = FxHashMap::default();
        let _ = nodes.insert(
            root,
            Node {
                tag: "body".into(),
                ..Node::default()
            },
        );
        Self {
            nodes: RefCell::new(nodes),
            next: Cell::new(1),
            root,
            scrolls: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
        }
    }

    /// Make styling, element creation, dispatch and observer creation
    /// fail with `message`, the way a browser throws.
    pub(crate) fn fail_host_calls(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.into());
    }

    fn check_host(&self) -> Result<(), VeneerError> {
        self.failure
            .borrow()
            .as_ref()
            .map_or(Ok(()), |msg| Err(VeneerError::Dom(msg.clone())))
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    // ── Building ─────────────────────────────────────────────────────────

    /// Append a `<tag class="...">` under `parent`.
    pub(crate) fn element(
        &self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> NodeId {
        let id = NodeId(self.next.get());
        self.next.set(id.0 + 1);
        let mut nodes = self.nodes.borrow_mut();
        let _ = nodes.insert(
            id,
            Node {
                tag: tag.into(),
                classes: classes.iter().map(|c| (*c).to_owned()).collect(),
                parent: Some(parent),
                ..Node::default()
            },
        );
        if let Some(p) = nodes.get_mut(&parent) {
            p.children.push(id);
        }
        id
    }

    pub(crate) fn set_attribute(&self, el: NodeId, name: &str, value: &str) {
        self.with_node(el, |n| {
            let _ = n.attrs.insert(name.into(), value.into());
        });
    }

    pub(crate) fn set_scroll_left(&self, el: NodeId, left: f64) {
        self.with_node(el, |n| n.scroll_left = left);
    }

    pub(crate) fn set_offset_width(&self, el: NodeId, width: f64) {
        self.with_node(el, |n| n.offset_width = width);
    }

    // ── Inspection ───────────────────────────────────────────────────────

    pub(crate) fn children(&self, el: NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .get(&el)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    pub(crate) fn style(&self, el: NodeId, property: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(&el)
            .and_then(|n| n.style.get(property).cloned())
    }

    pub(crate) fn scrolls(&self) -> Vec<ScrollRecord> {
        self.scrolls.borrow().clone()
    }

    pub(crate) fn events(&self) -> Vec<(String, FilterChange)> {
        self.events.borrow().clone()
    }

    /// Elements currently watched by any observer.
    pub(crate) fn observed(&self) -> Vec<NodeId> {
        self.observers
            .borrow()
            .iter()
            .flat_map(|o| o.observed.borrow().clone())
            .collect()
    }

    pub(crate) fn observer_configs(&self) -> Vec<ObserverConfig> {
        self.observers
            .borrow()
            .iter()
            .map(|o| o.config.clone())
            .collect()
    }

    /// Deliver one batch to every observer, restricted to the targets each
    /// one currently watches (as a browser would).
    pub(crate) fn intersect(&self, batch: &[(NodeId, bool)]) {
        let observers: Vec<_> = self.observers.borrow().clone();
        for observer in observers {
            let entries: Vec<_> = batch
                .iter()
                .filter(|(id, _)| observer.observed.borrow().contains(id))
                .map(|&(target, is_intersecting)| IntersectionEntry {
                    target,
                    is_intersecting,
                })
                .collect();
            if !entries.is_empty() {
                let mut callback = observer.callback.borrow_mut();
                (&mut **callback)(entries);
            }
        }
    }

    /// Deliver a batch without filtering, like a late entry queued before
    /// `unobserve` took effect.
    pub(crate) fn intersect_unfiltered(&self, batch: &[(NodeId, bool)]) {
        let observers: Vec<_> = self.observers.borrow().clone();
        for observer in observers {
            let entries = batch
                .iter()
                .map(|&(target, is_intersecting)| IntersectionEntry {
                    target,
                    is_intersecting,
                })
                .collect();
            let mut callback = observer.callback.borrow_mut();
            (&mut **callback)(entries);
        }
    }

    fn with_node(&self, el: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(&el) {
            f(node);
        }
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes
            .get(&root)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = nodes.get(&id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;
    type Observer = MemoryObserver;

    fn query_all(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        let Some(list) = parse_selector_list(selector) else {
            return Vec::new();
        };
        let candidates = self.descendants(*root);
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|id| {
                nodes
                    .get(id)
                    .is_some_and(|n| list.iter().any(|c| c.matches(n)))
            })
            .collect()
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(el)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        self.with_node(*el, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.into());
            }
        });
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.with_node(*el, |n| n.classes.retain(|c| c != class));
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(el)
            .and_then(|n| n.attrs.get(name).cloned())
    }

    fn child_element_count(&self, el: &NodeId) -> usize {
        self.nodes.borrow().get(el).map_or(0, |n| n.children.len())
    }

    fn append_div(
        &self,
        parent: &NodeId,
        class: &str,
    ) -> Result<NodeId, VeneerError> {
        self.check_host()?;
        if !self.nodes.borrow().contains_key(parent) {
            return Err(VeneerError::Dom(format!("no node {parent:?}")));
        }
        Ok(self.element(*parent, "div", &[class]))
    }

    fn remove(&self, el: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let parent = nodes.get_mut(el).and_then(|n| n.parent.take());
        if let Some(p) = parent.and_then(|p| nodes.get_mut(&p)) {
            p.children.retain(|c| c != el);
        }
    }

    fn set_style(
        &self,
        el: &NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), VeneerError> {
        self.check_host()?;
        self.with_node(*el, |n| {
            let _ = n.style.insert(property.into(), value.into());
        });
        Ok(())
    }

    fn scroll_left(&self, el: &NodeId) -> f64 {
        self.nodes.borrow().get(el).map_or(0.0, |n| n.scroll_left)
    }

    fn offset_width(&self, el: &NodeId) -> f64 {
        self.nodes.borrow().get(el).map_or(0.0, |n| n.offset_width)
    }

    fn smooth_scroll_to_left(&self, el: &NodeId, left: f64) {
        self.scrolls
            .borrow_mut()
            .push(ScrollRecord::To { el: *el, left });
    }

    fn smooth_scroll_into_view(&self, el: &NodeId, alignment: ScrollAlignment) {
        self.scrolls.borrow_mut().push(ScrollRecord::IntoView {
            el: *el,
            alignment,
        });
    }

    fn dispatch_filter_change(
        &self,
        event_name: &str,
        change: &FilterChange,
    ) -> Result<(), VeneerError> {
        self.check_host()?;
        self.events
            .borrow_mut()
            .push((event_name.into(), change.clone()));
        Ok(())
    }

    fn create_observer(
        &self,
        config: &ObserverConfig,
        callback: IntersectionCallback<NodeId>,
    ) -> Result<MemoryObserver, VeneerError> {
        self.check_host()?;
        let state = Rc::new(ObserverState {
            config: config.clone(),
            observed: RefCell::new(Vec::new()),
            callback: RefCell::new(callback),
        });
        self.observers.borrow_mut().push(Rc::clone(&state));
        Ok(MemoryObserver(state))
    }
}

// ── Selectors ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrOp)>,
}

#[derive(Debug)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == node.tag)
            && self
                .id
                .as_ref()
                .is_none_or(|id| node.attrs.get("id") == Some(id))
            && self.classes.iter().all(|c| node.classes.contains(c))
            && self.attrs.iter().all(|(name, op)| {
                let value = node.attrs.get(name);
                match op {
                    AttrOp::Exists => value.is_some(),
                    AttrOp::Equals(v) => value == Some(v),
                    AttrOp::Prefix(p) => {
                        value.is_some_and(|v| v.starts_with(p.as_str()))
                    }
                }
            })
    }
}

/// `None` for anything outside the supported subset or syntactically
/// invalid (e.g. `#1abc`, a bare `#`).
fn parse_selector_list(selector: &str) -> Option<Vec<Compound>> {
    selector
        .split(',')
        .map(|part| parse_compound(part.trim()))
        .collect()
}

fn parse_compound(text: &str) -> Option<Compound> {
    let mut out = Compound::default();
    let mut rest = text;
    if rest.is_empty() {
        return None;
    }
    if rest.starts_with(is_ident_start) {
        let (tag, tail) = split_ident(rest)?;
        out.tag = Some(tag.into());
        rest = tail;
    }
    while let Some(c) = rest.chars().next() {
        match c {
            '.' => {
                let (class, tail) = split_ident(&rest[1..])?;
                out.classes.push(class.into());
                rest = tail;
            }
            '#' => {
                let (id, tail) = split_ident(&rest[1..])?;
                out.id = Some(id.into());
                rest = tail;
            }
            '[' => {
                let end = rest.find(']')?;
                out.attrs.push(parse_attr(&rest[1..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }
    Some(out)
}

fn parse_attr(body: &str) -> Option<(String, AttrOp)> {
    let unquote =
        |v: &str| v.trim_matches(|c| c == '"' || c == '\'').to_owned();
    if let Some((name, value)) = body.split_once("^=") {
        return Some((name.trim().into(), AttrOp::Prefix(unquote(value))));
    }
    if let Some((name, value)) = body.split_once('=') {
        return Some((name.trim().into(), AttrOp::Equals(unquote(value))));
    }
    let (name, tail) = split_ident(body.trim())?;
    tail.is_empty().then(|| (name.into(), AttrOp::Exists))
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn split_ident(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with(is_ident_start) {
        return None;
    }
    let end = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(text.len());
    Some(text.split_at(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_compound_and_lists() {
        let dom = MemoryDom::new();
        let root = dom.root();
        let bar = dom.element(root, "div", &["filterButtonContainer"]);
        let a = dom.element(bar, "button", &["emby-button", "filter-button"]);
        let _plain = dom.element(bar, "button", &["emby-button"]);
        let tabs = dom.element(root, "div", &["sectionTabs"]);

        assert_eq!(dom.query_all(&root, ".emby-button.filter-button"), vec![a]);
        assert_eq!(dom.query(&root, ".headerTabs, .sectionTabs"), Some(tabs));
        assert!(dom.query_all(&bar, ".filterButtonContainer").is_empty());
    }

    #[test]
    fn attribute_and_id_selectors() {
        let dom = MemoryDom::new();
        let root = dom.root();
        let link = dom.element(root, "a", &[]);
        dom.set_attribute(link, "href", "#top");
        let other = dom.element(root, "a", &[]);
        dom.set_attribute(other, "href", "/home");
        let target = dom.element(root, "section", &[]);
        dom.set_attribute(target, "id", "top");

        assert_eq!(dom.query_all(&root, "a[href^=\"#\"]"), vec![link]);
        assert_eq!(dom.query(&root, "#top"), Some(target));
        assert!(dom.query_all(&root, "#").is_empty());
        assert!(dom.query_all(&root, "#1abc").is_empty());
    }

    #[test]
    fn remove_detaches_from_parent() {
        let dom = MemoryDom::new();
        let root = dom.root();
        let child = dom.append_div(&root, "ghost-card").unwrap();
        assert_eq!(dom.child_element_count(&root), 1);
        dom.remove(&child);
        assert_eq!(dom.child_element_count(&root), 0);
        assert!(dom.query_all(&root, ".ghost-card").is_empty());
    }
}
