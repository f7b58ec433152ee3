pub mod accordion;
pub mod controller;
pub mod modal;
pub mod notifier;

pub use accordion::{Accordion, AccordionSection};
pub use controller::{
    ClickOutcome, SearchOutcome, SearchTicket, UiController, FETCH_FAILED_MESSAGE,
};
pub use modal::AboutModal;
pub use notifier::{Notifier, RecordingNotifier, StderrNotifier};
