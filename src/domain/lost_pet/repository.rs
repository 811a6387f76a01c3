use async_trait::async_trait;

use crate::{domain::lost_pet::model::LostPetRecord, utils::errors::ApiError};

/// Read access to the lost pets store. Nothing in the service writes.
#[async_trait]
pub trait LostPetRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<LostPetRecord>, ApiError>;
    async fn fetch_by_location(&self, location: &str) -> Result<Vec<LostPetRecord>, ApiError>;
    async fn fetch_by_breed(&self, breed: &str) -> Result<Vec<LostPetRecord>, ApiError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Option<LostPetRecord>, ApiError>;
}
