//! View state of the lost pets list.
//!
//! The filter controls move through three panels:
//!
//! ```text
//! Closed --toggle--> Choosing --choose(mode)--> Active(mode)
//!   ^                  |                           |
//!   +-----toggle-------+         toggle -> Choosing (cleared)
//!   +-------------------------- reset -------------+
//! ```
//!
//! Any transition that changes the effective query hands back a
//! [`FetchRequest`]. Requests carry a generation number and only the result
//! of the most recently issued request is ever applied, so a slow response
//! to an older filter can not overwrite a newer list.

use crate::domain::lost_pet::{
    model::LostPetRecord,
    query::{FilterMode, PetQuery},
    repository::LostPetRepository,
};
use crate::utils::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanel {
    Closed,
    Choosing,
    Active(FilterMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    generation: u64,
    query: PetQuery,
}

impl FetchRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &PetQuery {
        &self.query
    }
}

#[derive(Debug)]
pub struct ListScreen {
    panel: FilterPanel,
    value: Option<String>,
    draft: String,
    records: Vec<LostPetRecord>,
    issued: u64,
    applied: Option<u64>,
    last_query: Option<PetQuery>,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreen {
    pub fn new() -> Self {
        ListScreen {
            panel: FilterPanel::Closed,
            value: None,
            draft: String::new(),
            records: Vec::new(),
            issued: 0,
            applied: None,
            last_query: None,
        }
    }

    pub fn panel(&self) -> FilterPanel {
        self.panel
    }

    pub fn mode(&self) -> Option<FilterMode> {
        match self.panel {
            FilterPanel::Active(mode) => Some(mode),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_menu_open(&self) -> bool {
        self.panel == FilterPanel::Choosing
    }

    pub fn is_loading(&self) -> bool {
        self.applied != Some(self.issued)
    }

    /// Records to display; empty while a fetch is outstanding.
    pub fn visible_records(&self) -> &[LostPetRecord] {
        if self.is_loading() {
            &[]
        } else {
            &self.records
        }
    }

    pub fn effective_query(&self) -> PetQuery {
        PetQuery::from_filter(self.mode(), self.value.as_deref())
    }

    pub fn mount(&mut self) -> FetchRequest {
        self.issue(self.effective_query())
    }

    pub fn toggle_filter(&mut self) -> Option<FetchRequest> {
        self.panel = match self.panel {
            FilterPanel::Closed => FilterPanel::Choosing,
            FilterPanel::Choosing => FilterPanel::Closed,
            FilterPanel::Active(_) => FilterPanel::Choosing,
        };
        self.clear_filter();
        self.refetch_if_changed()
    }

    pub fn choose_mode(&mut self, mode: FilterMode) -> Option<FetchRequest> {
        if self.panel != FilterPanel::Choosing {
            log::debug!("ignoring filter mode {} while menu is closed", mode);
            return None;
        }
        self.panel = FilterPanel::Active(mode);
        self.clear_filter();
        self.refetch_if_changed()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.mode().is_some() {
            self.draft = text.into();
        }
    }

    /// Enter in the filter bar: the draft becomes the effective value.
    pub fn commit(&mut self) -> Option<FetchRequest> {
        self.mode()?;
        self.value = Some(self.draft.clone());
        self.refetch_if_changed()
    }

    pub fn reset(&mut self) -> Option<FetchRequest> {
        self.panel = FilterPanel::Closed;
        self.clear_filter();
        self.refetch_if_changed()
    }

    /// Applies a fetch result. Returns false when `request` has been
    /// superseded and the result was dropped.
    pub fn apply(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<LostPetRecord>, ApiError>,
    ) -> bool {
        if request.generation != self.issued {
            log::debug!(
                "dropping stale lost pets response {} (latest is {})",
                request.generation,
                self.issued
            );
            return false;
        }

        match result {
            Ok(records) => self.records = records,
            Err(e) => {
                log::error!("Error fetching lost pets for {:?}: {}", request.query, e);
                self.records.clear();
            }
        }
        self.applied = Some(request.generation);
        true
    }

    pub async fn run(&mut self, repo: &dyn LostPetRepository, request: FetchRequest) -> bool {
        let result = request.query.execute(repo).await;
        self.apply(&request, result)
    }

    fn clear_filter(&mut self) {
        self.value = None;
        self.draft.clear();
    }

    fn issue(&mut self, query: PetQuery) -> FetchRequest {
        self.issued += 1;
        self.last_query = Some(query.clone());
        FetchRequest {
            generation: self.issued,
            query,
        }
    }

    // Before mount there is nothing to refresh; mount fetches whatever the
    // filter ends up being.
    fn refetch_if_changed(&mut self) -> Option<FetchRequest> {
        let query = self.effective_query();
        match &self.last_query {
            Some(last) if *last != query => Some(self.issue(query)),
            _ => None,
        }
    }
}
