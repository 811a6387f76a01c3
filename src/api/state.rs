use std::sync::Arc;

use crate::domain::lost_pet::repository::LostPetRepository;

#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn LostPetRepository>
}

impl AppState {
    pub fn new<R>(pets: R) -> Self
    where
        R: LostPetRepository + 'static,
    {
        AppState { pets: Arc::new(pets) }
    }
}
