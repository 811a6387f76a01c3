use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{doc, from_document, oid::ObjectId, Document};
use mongodb::Collection;

use crate::domain::lost_pet::model::LostPetRecord;
use crate::domain::lost_pet::repository::LostPetRepository;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::utils::errors::ApiError;

pub struct MongoLostPetRepository {
    lost_pets: Collection<Document>
}

impl MongoLostPetRepository {
    pub fn new(context: &MongoContext, collection: &str) -> Self {
        Self {
            lost_pets: context.collection(collection)
        }
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<LostPetRecord>, ApiError> {
        let mut cursor = self.lost_pets.find(filter).await?;
        let mut pets = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(document) => match from_document::<LostPetRecord>(document) {
                    Ok(pet) => pets.push(pet),
                    Err(e) => log::warn!("Skipping undecodable lost pet document: {}", e),
                },
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(pets)
    }
}

/// Documents may carry either a driver ObjectId or an imported string id.
pub(crate) fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "$or": [ { "_id": oid }, { "_id": id } ] },
        Err(_) => doc! { "_id": id },
    }
}

#[async_trait]
impl LostPetRepository for MongoLostPetRepository {

    async fn fetch_all(&self) -> Result<Vec<LostPetRecord>, ApiError> {
        self.find_many(doc! {}).await
    }

    async fn fetch_by_location(&self, location: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.find_many(doc! { "location": location }).await
    }

    async fn fetch_by_breed(&self, breed: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.find_many(doc! { "breed": breed }).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<LostPetRecord>, ApiError> {
        match self.lost_pets.find_one(id_filter(id)).await? {
            Some(document) => Ok(Some(from_document(document)?)),
            None => Ok(None),
        }
    }
}
