//! In-memory page model
//!
//! The page markup is owned by whoever serves the page; the controller only
//! relies on a fixed set of element ids and classes (see [`ids`]). Elements
//! are kept in document order so that "next sibling" means the element that
//! immediately follows.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

pub mod node;

pub use node::{Content, Node};

/// Element ids and classes the controller depends on
pub mod ids {
    pub const LOADER: &str = "loader";
    pub const SEARCH_BUTTON: &str = "searchBtn";
    pub const MIN_BUDGET: &str = "minBudget";
    pub const MAX_BUDGET: &str = "maxBudget";
    pub const OS: &str = "os";
    pub const USAGE: &str = "usage";
    pub const MAIN_PANEL: &str = "mainPhones";
    pub const ADDITIONAL_PANEL: &str = "additionalPhones";
    pub const BONUS_PANEL: &str = "bonusPhones";
    pub const ABOUT_MODAL: &str = "aboutModal";
    pub const ABOUT_BUTTON: &str = "aboutBtn";

    pub const CLOSE_BUTTON_CLASS: &str = "close-btn";
    pub const ACCORDION_CLASS: &str = "accordion";
    pub const ACTIVE_CLASS: &str = "active";

    /// Ids that must be present before the controller can mount
    pub const REQUIRED: [&str; 11] = [
        LOADER,
        SEARCH_BUTTON,
        MIN_BUDGET,
        MAX_BUDGET,
        OS,
        USAGE,
        MAIN_PANEL,
        ADDITIONAL_PANEL,
        BONUS_PANEL,
        ABOUT_MODAL,
        ABOUT_BUTTON,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub fn is_visible(self) -> bool {
        self == Display::Block
    }

    pub fn toggled(self) -> Self {
        match self {
            Display::Block => Display::None,
            Display::None => Display::Block,
        }
    }
}

/// An addressable page element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    /// Current value for form controls
    pub value: String,
    pub display: Display,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            classes: Vec::new(),
            value: String::new(),
            display: Display::Block,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds the class if missing, removes it otherwise. Returns whether the
    /// class is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recommendation page skeleton
    ///
    /// Each results panel sits behind its own accordion trigger, and the
    /// about modal wraps a content box with the close button.
    pub fn standard() -> Self {
        let mut doc = Self::new();
        doc.push(Element::new(ids::MIN_BUDGET, "input"));
        doc.push(Element::new(ids::MAX_BUDGET, "input"));
        doc.push(Element::new(ids::OS, "select"));
        doc.push(Element::new(ids::USAGE, "select"));
        doc.push(Element::new(ids::SEARCH_BUTTON, "button"));
        doc.push(Element::new(ids::LOADER, "div").with_class("loader").hidden());

        for (trigger, panel) in [
            ("mainAccordion", ids::MAIN_PANEL),
            ("additionalAccordion", ids::ADDITIONAL_PANEL),
            ("bonusAccordion", ids::BONUS_PANEL),
        ] {
            doc.push(Element::new(trigger, "button").with_class(ids::ACCORDION_CLASS));
            doc.push(Element::new(panel, "div").with_class("panel").hidden());
        }

        doc.push(Element::new(ids::ABOUT_BUTTON, "button"));
        doc.push(Element::new(ids::ABOUT_MODAL, "div").with_class("modal").hidden());
        doc.push(Element::new("aboutContent", "div").with_class("modal-content"));
        doc.push(Element::new("aboutClose", "span").with_class(ids::CLOSE_BUTTON_CLASS));
        doc
    }

    /// Appends an element at the end of the document. An element with an id
    /// already present replaces the old one in place.
    pub fn push(&mut self, element: Element) {
        if let Some(&pos) = self.index.get(&element.id) {
            self.elements[pos] = element;
        } else {
            self.index.insert(element.id.clone(), self.elements.len());
            self.elements.push(element);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> AppResult<&Element> {
        self.index
            .get(id)
            .map(|&pos| &self.elements[pos])
            .ok_or_else(|| AppError::MissingElement(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> AppResult<&mut Element> {
        match self.index.get(id) {
            Some(&pos) => Ok(&mut self.elements[pos]),
            None => Err(AppError::MissingElement(id.to_string())),
        }
    }

    /// Elements carrying a class, in document order
    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    pub fn first_by_class(&self, class: &str) -> AppResult<&Element> {
        self.elements
            .iter()
            .find(|e| e.has_class(class))
            .ok_or_else(|| AppError::MissingElement(format!(".{}", class)))
    }

    pub fn next_sibling(&self, id: &str) -> AppResult<&Element> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| AppError::MissingElement(id.to_string()))?;
        self.elements
            .get(pos + 1)
            .ok_or_else(|| AppError::MissingElement(format!("sibling of {}", id)))
    }

    pub fn value(&self, id: &str) -> AppResult<&str> {
        Ok(self.get(id)?.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> AppResult<()> {
        self.get_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn display(&self, id: &str) -> AppResult<Display> {
        Ok(self.get(id)?.display)
    }

    pub fn set_display(&mut self, id: &str, display: Display) -> AppResult<()> {
        self.get_mut(id)?.display = display;
        Ok(())
    }

    pub fn is_visible(&self, id: &str) -> AppResult<bool> {
        Ok(self.display(id)?.is_visible())
    }

    pub fn append(&mut self, id: &str, node: Node) -> AppResult<()> {
        self.get_mut(id)?.children.push(node);
        Ok(())
    }

    /// Removes all rendered content from an element
    pub fn clear(&mut self, id: &str) -> AppResult<()> {
        self.get_mut(id)?.children.clear();
        Ok(())
    }

    pub fn children(&self, id: &str) -> AppResult<&[Node]> {
        Ok(self.get(id)?.children.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_document_has_contract_ids() {
        let doc = Document::standard();
        for id in ids::REQUIRED {
            assert!(doc.contains(id), "missing {}", id);
        }
        assert_eq!(doc.first_by_class(ids::CLOSE_BUTTON_CLASS).unwrap().id, "aboutClose");
        assert!(matches!(
            doc.first_by_class("no-such-class"),
            Err(AppError::MissingElement(sel)) if sel == ".no-such-class"
        ));
        assert_eq!(doc.by_class(ids::ACCORDION_CLASS).count(), 3);
        assert!(!doc.is_visible(ids::LOADER).unwrap());
        assert!(!doc.is_visible(ids::ABOUT_MODAL).unwrap());
    }

    #[test]
    fn test_next_sibling_follows_document_order() {
        let doc = Document::standard();
        assert_eq!(doc.next_sibling("mainAccordion").unwrap().id, ids::MAIN_PANEL);
        assert!(doc.next_sibling("aboutClose").is_err());
    }

    #[test]
    fn test_missing_element() {
        let mut doc = Document::new();
        let err = doc.set_value("minBudget", "10").unwrap_err();
        assert!(matches!(err, AppError::MissingElement(ref id) if id == "minBudget"));
    }

    #[test]
    fn test_push_replaces_existing_id() {
        let mut doc = Document::new();
        doc.push(Element::new("a", "div"));
        doc.push(Element::new("b", "div"));
        doc.push(Element::new("a", "span"));
        assert_eq!(doc.get("a").unwrap().tag, "span");
        assert_eq!(doc.next_sibling("a").unwrap().id, "b");
    }

    #[test]
    fn test_append_and_clear() {
        let mut doc = Document::standard();
        doc.append(ids::MAIN_PANEL, Node::new("div").text("one")).unwrap();
        doc.append(ids::MAIN_PANEL, Node::new("div").text("two")).unwrap();
        assert_eq!(doc.get(ids::MAIN_PANEL).unwrap().text_content(), "onetwo");
        assert_eq!(
            doc.get(ids::MAIN_PANEL).unwrap().inner_html(),
            "<div>one</div><div>two</div>"
        );

        doc.clear(ids::MAIN_PANEL).unwrap();
        assert!(doc.children(ids::MAIN_PANEL).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_class() {
        let mut element = Element::new("t", "button").with_class("accordion");
        assert!(element.toggle_class("active"));
        assert!(element.has_class("active"));
        assert!(!element.toggle_class("active"));
        assert!(!element.has_class("active"));
        assert!(element.has_class("accordion"));
    }
}
