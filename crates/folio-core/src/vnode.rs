//! Output node tree produced by the renderer.
//!
//! `VNode` is a sum type over elements, text and fragments. A fragment with no children is
//! the "render nothing" result used for no-ops, so a no-op still occupies its slot in the
//! output sequence.

/// A node in the rendered output tree.
#[derive(Clone, Debug, PartialEq)]
pub enum VNode {
    Element(Element),
    Text(String),
    Fragment(Vec<VNode>),
}

/// An element with ordered attributes and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<VNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute only when `value` is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Append a class to the `class` attribute.
    pub fn class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some((_, existing)) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some((_, existing)) => existing.push_str(class),
            None => self.attrs.push(("class", class.to_owned())),
        }
        self
    }

    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for VNode {
    fn from(element: Element) -> Self {
        VNode::Element(element)
    }
}

impl VNode {
    /// The "render nothing" node.
    pub fn empty() -> Self {
        VNode::Fragment(Vec::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        VNode::Text(value.into())
    }

    /// True when this node produces no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            VNode::Element(_) => false,
            VNode::Text(text) => text.is_empty(),
            VNode::Fragment(children) => children.iter().all(VNode::is_empty),
        }
    }

    /// All elements in this subtree, depth-first, that satisfy `predicate`.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        match self {
            VNode::Element(element) => {
                if predicate(element) {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect(predicate, found);
                }
            }
            VNode::Fragment(children) => {
                for child in children {
                    child.collect(predicate, found);
                }
            }
            VNode::Text(_) => {}
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|e| e.tag == tag)
    }

    /// Concatenated text of this subtree. Line breaks contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            VNode::Text(text) => out.push_str(text),
            VNode::Element(element) => element.children.iter().for_each(|c| c.push_text(out)),
            VNode::Fragment(children) => children.iter().for_each(|c| c.push_text(out)),
        }
    }
}
