use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::{
    dom::{ids, Display, Document},
    error::{AppError, AppResult},
    models::{FilterCriteria, RecommendationResponse, UsageCategory},
    services::{render_results, RecommendationSource},
    ui::{Accordion, AboutModal, Notifier},
};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations.";

const RESULT_PANELS: [&str; 3] = [ids::MAIN_PANEL, ids::ADDITIONAL_PANEL, ids::BONUS_PANEL];

/// What a click on the page led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The search button was clicked; the caller should run [`UiController::search`]
    SearchRequested,
    /// An accordion section is now open (`true`) or closed
    Accordion(bool),
    /// The about modal is now visible (`true`) or hidden
    Modal(bool),
    Ignored,
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered {
        main: usize,
        additional: usize,
        bonus: usize,
    },
    /// The fetch failed and the user was alerted
    Failed,
    /// The form held invalid values; no request was sent
    Rejected,
    /// A newer search started before this one finished; its result was dropped
    Superseded,
}

/// A search that has been started but not yet completed
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub search_id: Uuid,
    pub generation: u64,
    pub criteria: FilterCriteria,
}

/// Owns the page for its lifetime and reacts to user events
pub struct UiController {
    document: Document,
    source: Arc<dyn RecommendationSource>,
    notifier: Arc<dyn Notifier>,
    accordion: Accordion,
    modal: AboutModal,
    generation: u64,
    /// Payload currently shown in the panels
    shown: Option<(RecommendationResponse, UsageCategory)>,
}

impl UiController {
    /// Validates the page contract and wires the widgets
    pub fn mount(
        mut document: Document,
        source: Arc<dyn RecommendationSource>,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        for id in ids::REQUIRED {
            if !document.contains(id) {
                return Err(AppError::MissingElement(id.to_string()));
            }
        }

        let accordion = Accordion::wire(&mut document)?;
        let modal = AboutModal::wire(&mut document)?;
        document.set_display(ids::LOADER, Display::None)?;

        tracing::info!(
            source = source.name(),
            accordion_sections = accordion.sections().len(),
            "UI controller mounted"
        );

        Ok(Self {
            document,
            source,
            notifier,
            accordion,
            modal,
            generation: 0,
            shown: None,
        })
    }

    /// Releases the page. Searches still in flight can no longer complete.
    pub fn unmount(self) -> Document {
        tracing::info!(generation = self.generation, "UI controller unmounted");
        self.document
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access for filling in form inputs
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// The recommendations the panels were last rendered from, with the
    /// usage they were requested for
    pub fn shown_results(&self) -> Option<(&RecommendationResponse, UsageCategory)> {
        self.shown.as_ref().map(|(response, usage)| (response, *usage))
    }

    pub fn source(&self) -> Arc<dyn RecommendationSource> {
        Arc::clone(&self.source)
    }

    /// Dispatches a click on the element with id `target`
    pub fn click(&mut self, target: &str) -> AppResult<ClickOutcome> {
        if target == ids::SEARCH_BUTTON {
            return Ok(ClickOutcome::SearchRequested);
        }
        if let Some(open) = self.accordion.toggle(&mut self.document, target)? {
            return Ok(ClickOutcome::Accordion(open));
        }
        if let Some(visible) = self.modal.handle_click(&mut self.document, target)? {
            return Ok(ClickOutcome::Modal(visible));
        }
        Ok(ClickOutcome::Ignored)
    }

    /// Current form values with defaults applied
    pub fn read_filters(&self) -> AppResult<FilterCriteria> {
        FilterCriteria::from_form(
            self.document.value(ids::MIN_BUDGET)?,
            self.document.value(ids::MAX_BUDGET)?,
            self.document.value(ids::OS)?,
            self.document.value(ids::USAGE)?,
        )
    }

    /// Reads the form, shows the loader and clears the result panels.
    ///
    /// Any ticket issued earlier becomes stale, even when the form is
    /// rejected: the panels are emptied and the loader hidden before the
    /// error is returned.
    pub fn begin_search(&mut self) -> AppResult<SearchTicket> {
        let criteria = self.read_filters();
        self.invalidate_results()?;

        let criteria = match criteria {
            Ok(criteria) => criteria,
            Err(e) => {
                self.document.set_display(ids::LOADER, Display::None)?;
                return Err(e);
            }
        };
        self.document.set_display(ids::LOADER, Display::Block)?;

        Ok(SearchTicket {
            search_id: Uuid::new_v4(),
            generation: self.generation,
            criteria,
        })
    }

    /// Orphans every outstanding ticket and empties the result panels
    fn invalidate_results(&mut self) -> AppResult<()> {
        self.generation += 1;
        for panel in RESULT_PANELS {
            self.document.clear(panel)?;
        }
        self.shown = None;
        Ok(())
    }

    /// Applies the result of a fetch started with `ticket`
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: AppResult<RecommendationResponse>,
    ) -> AppResult<SearchOutcome> {
        if ticket.generation != self.generation {
            tracing::debug!(
                search_id = %ticket.search_id,
                generation = ticket.generation,
                latest = self.generation,
                "Dropping result of superseded search"
            );
            return Ok(SearchOutcome::Superseded);
        }

        self.document.set_display(ids::LOADER, Display::None)?;

        match result {
            Ok(response) => {
                render_results(&mut self.document, &response, ticket.criteria.usage)?;
                let outcome = SearchOutcome::Rendered {
                    main: response.main.len(),
                    additional: response.additional.len(),
                    bonus: response.bonus.len(),
                };
                self.shown = Some((response, ticket.criteria.usage));
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    search_id = %ticket.search_id,
                    "Recommendation fetch failed"
                );
                self.notifier.alert(FETCH_FAILED_MESSAGE);
                Ok(SearchOutcome::Failed)
            }
        }
    }

    /// Runs one search end to end
    ///
    /// Holds `&mut self` across the fetch, so no other event can be
    /// dispatched until it resolves. Callers that must stay responsive while
    /// a request is in flight should call [`begin_search`](Self::begin_search),
    /// drive [`source`](Self::source)`().fetch` themselves and hand the result
    /// to [`complete_search`](Self::complete_search).
    pub async fn search(&mut self) -> AppResult<SearchOutcome> {
        let ticket = match self.begin_search() {
            Ok(ticket) => ticket,
            Err(AppError::InvalidInput(reason)) => {
                tracing::warn!(reason = %reason, "Rejected search form");
                self.notifier.alert(FETCH_FAILED_MESSAGE);
                return Ok(SearchOutcome::Rejected);
            }
            Err(e) => return Err(e),
        };

        let span = tracing::info_span!(
            "search",
            search_id = %ticket.search_id,
            generation = ticket.generation
        );
        let result = self
            .source
            .fetch(&ticket.criteria)
            .instrument(span)
            .await;

        self.complete_search(&ticket, result)
    }
}
