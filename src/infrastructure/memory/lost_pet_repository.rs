use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::lost_pet::model::LostPetRecord;
use crate::domain::lost_pet::repository::LostPetRepository;
use crate::utils::errors::ApiError;

/// Insertion-ordered store with the same matching rules as the Mongo one.
///
/// Used by tests and local demos; `fail_with` makes every read reject.
#[derive(Default)]
pub struct InMemoryLostPetRepository {
    pets: Vec<LostPetRecord>,
    failure: RwLock<Option<ApiError>>,
}

impl InMemoryLostPetRepository {
    pub fn new(pets: Vec<LostPetRecord>) -> Self {
        Self {
            pets,
            failure: RwLock::new(None),
        }
    }

    pub fn fail_with(&self, error: Option<ApiError>) {
        match self.failure.write() {
            Ok(mut failure) => *failure = error,
            Err(poisoned) => *poisoned.into_inner() = error,
        }
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        let failure = match self.failure.read() {
            Ok(failure) => failure.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn matching<F>(&self, predicate: F) -> Result<Vec<LostPetRecord>, ApiError>
    where
        F: Fn(&LostPetRecord) -> bool,
    {
        self.check_failure()?;
        Ok(self.pets.iter().filter(|pet| predicate(pet)).cloned().collect())
    }
}

#[async_trait]
impl LostPetRepository for InMemoryLostPetRepository {

    async fn fetch_all(&self) -> Result<Vec<LostPetRecord>, ApiError> {
        self.matching(|_| true)
    }

    async fn fetch_by_location(&self, location: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.matching(|pet| pet.location.as_deref() == Some(location))
    }

    async fn fetch_by_breed(&self, breed: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.matching(|pet| pet.breed.as_deref() == Some(breed))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<LostPetRecord>, ApiError> {
        self.check_failure()?;
        Ok(self.pets.iter().find(|pet| pet.id.as_deref() == Some(id)).cloned())
    }
}
