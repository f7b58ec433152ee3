use crate::{
    dom::{ids, Display, Document},
    error::AppResult,
};

/// One trigger and the panel right after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionSection {
    pub trigger: String,
    pub panel: String,
}

/// All accordion sections on the page. Sections never affect each other.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    sections: Vec<AccordionSection>,
}

impl Accordion {
    /// Pairs every `.accordion` element with its next sibling and collapses
    /// the panels. Fails if a trigger is the last element on the page.
    pub fn wire(doc: &mut Document) -> AppResult<Self> {
        let triggers: Vec<String> = doc
            .by_class(ids::ACCORDION_CLASS)
            .map(|e| e.id.clone())
            .collect();

        let mut sections = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            let panel = doc.next_sibling(&trigger)?.id.clone();
            doc.set_display(&panel, Display::None)?;
            sections.push(AccordionSection { trigger, panel });
        }

        tracing::debug!(sections = sections.len(), "Accordion wired");
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn section(&self, trigger: &str) -> Option<&AccordionSection> {
        self.sections.iter().find(|s| s.trigger == trigger)
    }

    /// Handles a click on `trigger`. Returns the panel's new visibility, or
    /// `None` when the target is not an accordion trigger.
    pub fn toggle(&self, doc: &mut Document, trigger: &str) -> AppResult<Option<bool>> {
        let Some(section) = self.section(trigger) else {
            return Ok(None);
        };

        doc.get_mut(&section.trigger)?.toggle_class(ids::ACTIVE_CLASS);
        let panel = doc.get_mut(&section.panel)?;
        panel.display = panel.display.toggled();

        Ok(Some(panel.display.is_visible()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn test_wire_pairs_and_hides() {
        let mut doc = Document::new();
        doc.push(Element::new("faq1", "button").with_class("accordion"));
        doc.push(Element::new("faq1Panel", "div"));
        doc.push(Element::new("faq2", "button").with_class("accordion"));
        doc.push(Element::new("faq2Panel", "div"));

        let accordion = Accordion::wire(&mut doc).unwrap();
        assert_eq!(
            accordion.sections(),
            &[
                AccordionSection {
                    trigger: "faq1".to_string(),
                    panel: "faq1Panel".to_string()
                },
                AccordionSection {
                    trigger: "faq2".to_string(),
                    panel: "faq2Panel".to_string()
                },
            ]
        );
        assert!(!doc.is_visible("faq1Panel").unwrap());
        assert!(!doc.is_visible("faq2Panel").unwrap());
    }

    #[test]
    fn test_wire_fails_without_panel() {
        let mut doc = Document::new();
        doc.push(Element::new("lonely", "button").with_class("accordion"));
        assert!(Accordion::wire(&mut doc).is_err());
    }

    #[test]
    fn test_double_toggle_restores_hidden() {
        let mut doc = Document::standard();
        let accordion = Accordion::wire(&mut doc).unwrap();

        assert_eq!(accordion.toggle(&mut doc, "mainAccordion").unwrap(), Some(true));
        assert!(doc.get("mainAccordion").unwrap().has_class("active"));
        assert!(doc.is_visible(ids::MAIN_PANEL).unwrap());

        assert_eq!(accordion.toggle(&mut doc, "mainAccordion").unwrap(), Some(false));
        assert!(!doc.get("mainAccordion").unwrap().has_class("active"));
        assert!(!doc.is_visible(ids::MAIN_PANEL).unwrap());
    }

    #[test]
    fn test_sections_are_independent() {
        let mut doc = Document::standard();
        let accordion = Accordion::wire(&mut doc).unwrap();

        accordion.toggle(&mut doc, "bonusAccordion").unwrap();
        assert!(doc.is_visible(ids::BONUS_PANEL).unwrap());
        assert!(!doc.is_visible(ids::MAIN_PANEL).unwrap());
        assert!(!doc.is_visible(ids::ADDITIONAL_PANEL).unwrap());
    }

    #[test]
    fn test_non_trigger_ignored() {
        let mut doc = Document::standard();
        let accordion = Accordion::wire(&mut doc).unwrap();
        assert_eq!(accordion.toggle(&mut doc, ids::SEARCH_BUTTON).unwrap(), None);
    }
}
