//! View Tree
//!
//! Widgets describe their UI as a tree of typed nodes instead of talking to
//! a rendering engine directly. A host walks the tree to draw it, and wires
//! user input back to the widget through the messages bound on elements.
//!
//! ```text
//! widget state ──view()──▶ Node<M> ──render──▶ HTML / terminal text
//!      ▲                      │
//!      └──── update(M) ◀──────┘  click() / input(v) / submit()
//! ```
//!
//! The query helpers (`find_by_id`, `find_all`, `text_content`) mirror the
//! handful of DOM lookups hosts and tests need.

pub mod render;

pub use render::{render_html, render_text};

use std::fmt;
use std::rc::Rc;

/// An event binding carried by an element
pub enum Handler<M> {
    /// Activating the element dispatches this message
    Click(M),
    /// Submitting the form dispatches this message
    Submit(M),
    /// A new input value is mapped to a message
    Input(Rc<dyn Fn(String) -> M>),
}

impl<M: Clone> Clone for Handler<M> {
    fn clone(&self) -> Self {
        match self {
            Handler::Click(msg) => Handler::Click(msg.clone()),
            Handler::Submit(msg) => Handler::Submit(msg.clone()),
            Handler::Input(f) => Handler::Input(Rc::clone(f)),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Handler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Click(msg) => f.debug_tuple("Click").field(msg).finish(),
            Handler::Submit(msg) => f.debug_tuple("Submit").field(msg).finish(),
            Handler::Input(_) => f.write_str("Input(..)"),
        }
    }
}

/// A node in the view tree
#[derive(Debug, Clone)]
pub enum Node<M> {
    Element(Element<M>),
    Text(String),
}

impl<M> Node<M> {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// The element behind this node, if it is one
    pub fn as_element(&self) -> Option<&Element<M>> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First element (depth-first, including this one) with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Element<M>> {
        self.as_element().and_then(|el| el.find_by_id(id))
    }

    /// All elements (depth-first, including this one) with the given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Element<M>> {
        self.as_element().map(|el| el.find_all(tag)).unwrap_or_default()
    }

    /// First element (depth-first, including this one) with the given tag
    pub fn find_first(&self, tag: &str) -> Option<&Element<M>> {
        self.as_element().and_then(|el| el.find_first(tag))
    }
}

impl<M> From<Element<M>> for Node<M> {
    fn from(el: Element<M>) -> Self {
        Node::Element(el)
    }
}

/// A tagged element with attributes, children and event bindings
#[derive(Debug, Clone)]
pub struct Element<M> {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node<M>>,
    handlers: Vec<Handler<M>>,
}

impl<M> Element<M> {
    /// Create an empty element
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Builder method: set an attribute, replacing any previous value
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Builder method: set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Builder method: append a child element
    pub fn child(mut self, el: Element<M>) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    /// Builder method: append a child node
    pub fn node(mut self, node: Node<M>) -> Self {
        self.children.push(node);
        self
    }

    /// Builder method: append several child nodes
    pub fn extend(mut self, nodes: impl IntoIterator<Item = Node<M>>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Builder method: append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.node(Node::Text(text.into()))
    }

    /// Builder method: dispatch `msg` when the element is clicked
    pub fn on_click(mut self, msg: M) -> Self {
        self.handlers.push(Handler::Click(msg));
        self
    }

    /// Builder method: dispatch `msg` when the form is submitted
    pub fn on_submit(mut self, msg: M) -> Self {
        self.handlers.push(Handler::Submit(msg));
        self
    }

    /// Builder method: map each new input value to a message
    pub fn on_input(mut self, f: impl Fn(String) -> M + 'static) -> Self {
        self.handlers.push(Handler::Input(Rc::new(f)));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Shorthand for the `value` attribute of form controls
    pub fn value(&self) -> Option<&str> {
        self.attribute("value")
    }

    pub fn children(&self) -> &[Node<M>] {
        &self.children
    }

    /// Direct children that are elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element<M>> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn handlers(&self) -> &[Handler<M>] {
        &self.handlers
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// First element (depth-first, including this one) with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Element<M>> {
        if self.attribute("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    /// All elements (depth-first, including this one) with the given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Element<M>> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element<M>>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_tag(tag, found);
        }
    }

    /// First element (depth-first, including this one) with the given tag
    pub fn find_first(&self, tag: &str) -> Option<&Element<M>> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_first(tag))
    }

    /// The `label` element whose `for` attribute targets `id`
    pub fn label_for(&self, id: &str) -> Option<&Element<M>> {
        self.find_all("label")
            .into_iter()
            .find(|label| label.attribute("for") == Some(id))
    }

    /// Message dispatched by clicking this element, if bound
    pub fn click(&self) -> Option<M>
    where
        M: Clone,
    {
        self.handlers.iter().find_map(|h| match h {
            Handler::Click(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    /// Message dispatched by submitting this element, if bound
    pub fn submit(&self) -> Option<M>
    where
        M: Clone,
    {
        self.handlers.iter().find_map(|h| match h {
            Handler::Submit(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    /// Message dispatched by typing `value` into this element, if bound
    pub fn input(&self, value: impl Into<String>) -> Option<M> {
        let value = value.into();
        self.handlers.iter().find_map(|h| match h {
            Handler::Input(f) => Some((**f)(value.clone())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Pressed(usize),
        Typed(String),
        Sent,
    }

    fn sample() -> Node<Msg> {
        Element::<Msg>::new("div")
            .id("root")
            .child(
                Element::new("ol")
                    .child(Element::new("li").child(Element::new("button").on_click(Msg::Pressed(0))).text("12:00"))
                    .child(Element::new("li").child(Element::new("button").on_click(Msg::Pressed(1))).text("13:00")),
            )
            .child(
                Element::new("form")
                    .id("customer")
                    .on_submit(Msg::Sent)
                    .child(Element::new("label").attr("for", "firstName").text("First name"))
                    .child(
                        Element::new("input")
                            .id("firstName")
                            .attr("value", "Ashley")
                            .on_input(Msg::Typed),
                    ),
            )
            .into()
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let root = sample();
        let items = root.find_all("li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text_content(), "12:00");
        assert_eq!(root.text_content(), "12:0013:00First name");
    }

    #[test]
    fn test_find_by_id() {
        let root = sample();
        assert_eq!(root.find_by_id("root").map(Element::tag), Some("div"));
        assert_eq!(root.find_by_id("firstName").and_then(Element::value), Some("Ashley"));
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let el: Element<Msg> = Element::new("input").attr("value", "a").attr("value", "b");
        assert_eq!(el.value(), Some("b"));
        assert_eq!(el.attributes().count(), 1);
    }

    #[test]
    fn test_event_bindings() {
        let root = sample();
        let buttons = root.find_all("button");
        assert_eq!(buttons[1].click(), Some(Msg::Pressed(1)));
        assert_eq!(buttons[1].submit(), None);

        let form = root.find_by_id("customer").unwrap();
        assert_eq!(form.submit(), Some(Msg::Sent));

        let input = root.find_by_id("firstName").unwrap();
        assert_eq!(input.input("Jamie"), Some(Msg::Typed("Jamie".to_string())));
        assert_eq!(input.click(), None);
    }

    #[test]
    fn test_label_for() {
        let root = sample();
        let form = root.find_by_id("customer").unwrap();
        assert_eq!(form.label_for("firstName").map(|l| l.text_content()), Some("First name".to_string()));
        assert!(form.label_for("lastName").is_none());
    }
}
