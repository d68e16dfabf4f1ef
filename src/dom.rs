//! Minimal retained element tree
//!
//! The overlay owns a single small subtree (a container, two labels and a
//! toggle button), so this module models just enough of a DOM to build it,
//! hand it to a host document, and rewrite one text node later: shared
//! node handles, class lookup and HTML serialization. There is no parsing
//! here; trees are always constructed programmatically.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

/// Shared handle to an element node
///
/// Handles behave like DOM node references: cloning a handle aliases the
/// same node, and a node appended to a host document is the same node the
/// overlay keeps updating.
pub type ElementHandle = Rc<RefCell<Element>>;

/// A single element node with attributes, text content and children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
  tag: String,
  id: Option<String>,
  classes: Vec<String>,
  attributes: Vec<(String, String)>,
  text: String,
  children: Vec<ElementHandle>,
}

impl Element {
  /// Creates an element with the given tag name
  pub fn new(tag: impl Into<String>) -> Self {
    Self {
      tag: tag.into(),
      ..Self::default()
    }
  }

  /// Creates an element and wraps it in a shared handle
  pub fn handle(tag: impl Into<String>) -> ElementHandle {
    Rc::new(RefCell::new(Self::new(tag)))
  }

  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
    self.id = Some(id.into());
    self
  }

  pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
    let class = class.into();
    if !self.classes.iter().any(|c| *c == class) {
      self.classes.push(class);
    }
    self
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|c| c == class)
  }

  pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
    let name = name.into();
    let value = value.into();
    if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
      existing.1 = value;
    } else {
      self.attributes.push((name, value));
    }
    self
  }

  pub fn attribute(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, v)| v.as_str())
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
    self.text = text.into();
    self
  }

  pub fn append_child(&mut self, child: ElementHandle) -> &mut Self {
    self.children.push(child);
    self
  }

  pub fn children(&self) -> &[ElementHandle] {
    &self.children
  }

  /// Finds the first descendant carrying the given class, pre-order
  pub fn find_by_class(&self, class: &str) -> Option<ElementHandle> {
    for child in &self.children {
      if child.borrow().has_class(class) {
        return Some(Rc::clone(child));
      }
      if let Some(found) = child.borrow().find_by_class(class) {
        return Some(found);
      }
    }
    None
  }

  /// Serializes the subtree as HTML with text and attribute values escaped
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  fn write_html(&self, out: &mut String) {
    let _ = write!(out, "<{}", self.tag);
    if let Some(id) = &self.id {
      let _ = write!(out, " id=\"{}\"", escape_attr(id));
    }
    if !self.classes.is_empty() {
      let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
    }
    for (name, value) in &self.attributes {
      let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');
    out.push_str(&escape_text(&self.text));
    for child in &self.children {
      child.borrow().write_html(out);
    }
    let _ = write!(out, "</{}>", self.tag);
  }
}

fn escape_text(raw: &str) -> String {
  raw
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
  escape_text(raw).replace('"', "&quot;")
}
