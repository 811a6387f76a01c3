#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use lost_pets_service::{
    domain::lost_pet::{Contact, LostPetRecord, LostPetRepository},
    infrastructure::InMemoryLostPetRepository,
    utils::errors::ApiError,
};

pub fn pet(id: &str, name: &str, species: &str, location: &str, breed: &str) -> LostPetRecord {
    LostPetRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        species: Some(species.to_string()),
        breed: Some(breed.to_string()),
        image_url: Some(format!("https://img.example/{}.jpg", id)),
        offer_reward: Some(false),
        location: Some(location.to_string()),
        last_seen_date: Some("2024-03-02".to_string()),
        description: Some(format!("{} sumiu perto da praça", name)),
        contact: Some(Contact {
            name: Some("Carla".to_string()),
            phone: Some("5511988887777".to_string()),
        }),
    }
}

pub fn rex() -> LostPetRecord {
    LostPetRecord {
        id: Some("42".to_string()),
        name: Some("Rex".to_string()),
        species: Some("Cachorro".to_string()),
        offer_reward: Some(true),
        contact: Some(Contact {
            name: Some("Ana".to_string()),
            phone: Some("5511999990000".to_string()),
        }),
        ..Default::default()
    }
}

pub fn sample_pets() -> Vec<LostPetRecord> {
    vec![
        pet("1", "Thor", "Cachorro", "Centro", "Labrador"),
        pet("2", "Mia", "Gato", "Lapa", "Siamês"),
        pet("3", "Bolt", "Cachorro", "Centro", "Poodle"),
        pet("4", "Nina", "Gato", "Centro", "Labrador"),
        rex(),
    ]
}

pub fn ids(pets: &[LostPetRecord]) -> Vec<String> {
    pets.iter().filter_map(|p| p.id.clone()).collect()
}

/// Wraps the in-memory store and records every read it serves.
pub struct RecordingRepository {
    pub inner: InMemoryLostPetRepository,
    calls: Mutex<Vec<String>>,
}

impl RecordingRepository {
    pub fn new(pets: Vec<LostPetRecord>) -> Self {
        Self {
            inner: InMemoryLostPetRepository::new(pets),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl LostPetRepository for RecordingRepository {
    async fn fetch_all(&self) -> Result<Vec<LostPetRecord>, ApiError> {
        self.record("all".to_string());
        self.inner.fetch_all().await
    }

    async fn fetch_by_location(&self, location: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.record(format!("location:{}", location));
        self.inner.fetch_by_location(location).await
    }

    async fn fetch_by_breed(&self, breed: &str) -> Result<Vec<LostPetRecord>, ApiError> {
        self.record(format!("breed:{}", breed));
        self.inner.fetch_by_breed(breed).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<LostPetRecord>, ApiError> {
        self.record(format!("id:{}", id));
        self.inner.fetch_by_id(id).await
    }
}
