use crate::domain::lost_pet::{
    model::{LostPetRecord, Species},
    repository::LostPetRepository,
};

const MESSAGING_BASE_URL: &str = "https://wa.me/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsingContext {
    Current,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Call,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub uri: String,
    pub target: BrowsingContext,
}

impl ContactAction {
    /// The phone goes into the URI as stored, without normalization.
    pub fn request(&self, phone: &str) -> NavigationRequest {
        match self {
            ContactAction::Call => NavigationRequest {
                uri: format!("tel:{}", phone),
                target: BrowsingContext::Current,
            },
            ContactAction::Message => NavigationRequest {
                uri: format!("{}{}", MESSAGING_BASE_URL, phone),
                target: BrowsingContext::New,
            },
        }
    }
}

/// Everything the detail page shows, with absent fields already replaced
/// by empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub species_icon: Option<Species>,
    pub image_url: Option<String>,
    pub reward_banner: bool,
    pub contact_name: String,
    pub phone: String,
    pub location: String,
    pub last_seen_date: String,
    pub description: String,
    pub call: Option<NavigationRequest>,
    pub message: Option<NavigationRequest>,
}

#[derive(Debug)]
pub struct DetailScreen {
    pet_id: String,
    record: Option<LostPetRecord>,
    outcome: Option<LoadOutcome>,
}

impl DetailScreen {
    pub fn new(pet_id: impl Into<String>) -> Self {
        DetailScreen {
            pet_id: pet_id.into(),
            record: None,
            outcome: None,
        }
    }

    pub fn pet_id(&self) -> &str {
        &self.pet_id
    }

    pub fn record(&self) -> Option<&LostPetRecord> {
        self.record.as_ref()
    }

    pub fn outcome(&self) -> Option<LoadOutcome> {
        self.outcome
    }

    /// Fetches the record once. Not-found and failures leave the screen
    /// empty and only leave a log line behind.
    pub async fn load(&mut self, repo: &dyn LostPetRepository) -> LoadOutcome {
        let outcome = match repo.fetch_by_id(&self.pet_id).await {
            Ok(Some(record)) => {
                self.record = Some(record);
                LoadOutcome::Loaded
            }
            Ok(None) => {
                log::warn!("Pet not found: {}", self.pet_id);
                LoadOutcome::NotFound
            }
            Err(e) => {
                log::error!("Error fetching pet details for {}: {}", self.pet_id, e);
                LoadOutcome::Failed
            }
        };
        self.outcome = Some(outcome);
        outcome
    }

    /// `None` when the record has no phone to dial.
    pub fn contact_action(&self, action: ContactAction) -> Option<NavigationRequest> {
        self.record
            .as_ref()
            .and_then(LostPetRecord::contact_phone)
            .map(|phone| action.request(phone))
    }

    pub fn view(&self) -> Option<DetailView> {
        let record = self.record.as_ref()?;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Some(DetailView {
            name: text(&record.name),
            species_icon: record.species_icon(),
            image_url: record.image_url.clone(),
            reward_banner: record.offers_reward(),
            contact_name: record.contact_name().unwrap_or_default().to_string(),
            phone: record.contact_phone().unwrap_or_default().to_string(),
            location: text(&record.location),
            last_seen_date: text(&record.last_seen_date),
            description: text(&record.description),
            call: self.contact_action(ContactAction::Call),
            message: self.contact_action(ContactAction::Message),
        })
    }
}
