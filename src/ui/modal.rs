use crate::{
    dom::{ids, Display, Document},
    error::AppResult,
};

/// The "about" overlay and its three controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutModal {
    modal: String,
    open_button: String,
    close_button: String,
}

impl AboutModal {
    /// Locates the modal, its open button and the first `.close-btn`, and
    /// starts the modal hidden
    pub fn wire(doc: &mut Document) -> AppResult<Self> {
        let modal = doc.get(ids::ABOUT_MODAL)?.id.clone();
        let open_button = doc.get(ids::ABOUT_BUTTON)?.id.clone();
        let close_button = doc.first_by_class(ids::CLOSE_BUTTON_CLASS)?.id.clone();
        doc.set_display(&modal, Display::None)?;

        Ok(Self {
            modal,
            open_button,
            close_button,
        })
    }

    pub fn is_open(&self, doc: &Document) -> AppResult<bool> {
        doc.is_visible(&self.modal)
    }

    pub fn open(&self, doc: &mut Document) -> AppResult<()> {
        doc.set_display(&self.modal, Display::Block)
    }

    pub fn close(&self, doc: &mut Document) -> AppResult<()> {
        doc.set_display(&self.modal, Display::None)
    }

    /// Handles a click on `target`. The backdrop is the modal element itself,
    /// so clicks on its content never reach this branch.
    ///
    /// Returns the modal's visibility when the click concerned it.
    pub fn handle_click(&self, doc: &mut Document, target: &str) -> AppResult<Option<bool>> {
        if target == self.open_button {
            self.open(doc)?;
        } else if target == self.close_button || target == self.modal {
            self.close(doc)?;
        } else {
            return Ok(None);
        }
        Ok(Some(self.is_open(doc)?))
    }
}
