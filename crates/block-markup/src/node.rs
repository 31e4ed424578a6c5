//! Markup tree with typed event bindings.
//!
//! Components render to a `Node<M>` where `M` is the component's message
//! type. Interactive hosts read the bindings back off the tree and feed the
//! resulting messages into the component's `update`; static hosts only need
//! `to_html`.

use std::fmt;
use std::rc::Rc;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// DOM events a node can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Click,
    Input,
    Blur,
}

/// What an event produces.
pub enum Handler<M> {
    /// A fixed message.
    Message(M),
    /// A message built from the element's current value.
    Value(Rc<dyn Fn(String) -> M>),
}

impl<M: Clone> Handler<M> {
    /// Produce the message for an event carrying `value`.
    pub fn message(&self, value: &str) -> M {
        match self {
            Handler::Message(m) => m.clone(),
            Handler::Value(f) => f(value.to_string()),
        }
    }
}

impl<M: 'static> Handler<M> {
    fn map<N: 'static>(self, f: &Rc<dyn Fn(M) -> N>) -> Handler<N> {
        match self {
            Handler::Message(m) => Handler::Message(f(m)),
            Handler::Value(g) => {
                let f = Rc::clone(f);
                Handler::Value(Rc::new(move |v| f(g(v))))
            }
        }
    }
}

impl<M: Clone> Clone for Handler<M> {
    fn clone(&self) -> Self {
        match self {
            Handler::Message(m) => Handler::Message(m.clone()),
            Handler::Value(f) => Handler::Value(Rc::clone(f)),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Handler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Message(m) => f.debug_tuple("Message").field(m).finish(),
            Handler::Value(_) => f.write_str("Value(..)"),
        }
    }
}

/// An element with attributes, bindings and children.
#[derive(Debug, Clone)]
pub struct Element<M> {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub handlers: Vec<(Event, Handler<M>)>,
    pub children: Vec<Node<M>>,
}

impl<M> Element<M> {
    /// Create an element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            handlers: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing one with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Bind an event to a fixed message.
    pub fn on(mut self, event: Event, message: M) -> Self {
        self.handlers.push((event, Handler::Message(message)));
        self
    }

    /// Bind an event to a message built from the element's value.
    pub fn on_value(mut self, event: Event, f: impl Fn(String) -> M + 'static) -> Self {
        self.handlers.push((event, Handler::Value(Rc::new(f))));
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Node<M>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    /// Handler bound to `event`, if any.
    pub fn handler(&self, event: Event) -> Option<&Handler<M>> {
        self.handlers
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, h)| h)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl<M: Clone> Element<M> {
    /// Fire `event` on this element, returning the bound message.
    pub fn dispatch(&self, event: Event, value: &str) -> Option<M> {
        self.handler(event).map(|h| h.message(value))
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone)]
pub enum Node<M> {
    Element(Element<M>),
    /// Text, escaped on output.
    Text(String),
    /// Trusted markup, written verbatim.
    Raw(String),
    Fragment(Vec<Node<M>>),
}

impl<M> From<Element<M>> for Node<M> {
    fn from(element: Element<M>) -> Self {
        Node::Element(element)
    }
}

impl<M> Node<M> {
    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }

    /// Concatenated text and raw content of the subtree.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
            Node::Text(text) | Node::Raw(text) => text.clone(),
            Node::Fragment(children) => children.iter().map(Node::text_content).collect(),
        }
    }

    /// All elements in document order matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element<M>) -> bool) -> Vec<&Element<M>> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element<M>) -> bool, found: &mut Vec<&'a Element<M>>) {
        match self {
            Node::Element(element) => {
                if pred(element) {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect(pred, found);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect(pred, found);
                }
            }
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    /// All elements carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element<M>> {
        self.find_all(&|e| e.has_class(class))
    }

    /// All elements with tag `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element<M>> {
        self.find_all(&|e| e.tag == tag)
    }

    /// All elements whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element<M>> {
        self.find_all(&|e| e.get_attr(name) == Some(value))
    }
}

impl<M: 'static> Node<M> {
    /// Convert every bound message with `f`, so a child's tree can be embedded in its parent's.
    pub fn map<N: 'static>(self, f: impl Fn(M) -> N + 'static) -> Node<N> {
        let f: Rc<dyn Fn(M) -> N> = Rc::new(f);
        self.map_rc(&f)
    }

    fn map_rc<N: 'static>(self, f: &Rc<dyn Fn(M) -> N>) -> Node<N> {
        match self {
            Node::Element(element) => Node::Element(Element {
                tag: element.tag,
                attributes: element.attributes,
                handlers: element
                    .handlers
                    .into_iter()
                    .map(|(event, handler)| (event, handler.map(f)))
                    .collect(),
                children: element.children.into_iter().map(|c| c.map_rc(f)).collect(),
            }),
            Node::Text(text) => Node::Text(text),
            Node::Raw(html) => Node::Raw(html),
            Node::Fragment(children) => {
                Node::Fragment(children.into_iter().map(|c| c.map_rc(f)).collect())
            }
        }
    }
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Clicked,
        Typed(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Inner(Msg),
    }

    #[test]
    fn test_render_html() {
        let node: Node<Msg> = Element::new("div")
            .class("box")
            .child(Element::new("img").attr("src", "/a.png"))
            .text("a < b")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="box"><img src="/a.png">a &lt; b</div>"#
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let node: Node<Msg> = Element::new("div").child(Node::Raw("<b>hi</b>".into())).into();
        assert_eq!(node.to_html(), "<div><b>hi</b></div>");
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el: Element<Msg> = Element::new("a").attr("href", "/a").attr("href", "/b");
        assert_eq!(el.get_attr("href"), Some("/b"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_handlers_are_not_rendered() {
        let node: Node<Msg> = Element::new("a").on(Event::Click, Msg::Clicked).text("+").into();
        assert_eq!(node.to_html(), "<a>+</a>");
    }

    #[test]
    fn test_dispatch() {
        let el: Element<Msg> = Element::new("input")
            .on_value(Event::Input, Msg::Typed)
            .on(Event::Click, Msg::Clicked);
        assert_eq!(el.dispatch(Event::Click, ""), Some(Msg::Clicked));
        assert_eq!(el.dispatch(Event::Input, "12"), Some(Msg::Typed("12".into())));
        assert_eq!(el.dispatch(Event::Blur, ""), None);
    }

    #[test]
    fn test_map_lifts_messages() {
        let node: Node<Msg> = Element::new("div")
            .child(Element::new("a").class("inc").on(Event::Click, Msg::Clicked))
            .child(Element::new("input").class("qty").on_value(Event::Input, Msg::Typed))
            .into();
        let outer = node.map(Outer::Inner);

        let link = outer.find_by_class("inc")[0];
        assert_eq!(link.dispatch(Event::Click, ""), Some(Outer::Inner(Msg::Clicked)));
        let input = outer.find_by_class("qty")[0];
        assert_eq!(
            input.dispatch(Event::Input, "3"),
            Some(Outer::Inner(Msg::Typed("3".into())))
        );
    }

    #[test]
    fn test_find_and_text_content() {
        let node: Node<Msg> = Node::Fragment(vec![
            Element::new("h1").class("title big").text("Name").into(),
            Element::new("p").text("one ").child(Node::Raw("<i>two</i>".into())).into(),
        ]);
        assert_eq!(node.find_by_class("big").len(), 1);
        assert_eq!(node.find_by_tag("p").len(), 1);
        assert_eq!(node.text_content(), "Nameone <i>two</i>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
