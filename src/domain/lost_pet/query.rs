use std::fmt;
use std::str::FromStr;

use crate::{
    domain::lost_pet::{model::LostPetRecord, repository::LostPetRepository},
    utils::errors::ApiError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Location,
    Breed,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Location => "location",
            FilterMode::Breed => "breed",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterMode::Location => "Digite o nome do bairro",
            FilterMode::Breed => "Digite o nome da raça",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            FilterMode::Location => "Filtrar por bairro",
            FilterMode::Breed => "Filtrar por raça",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "location" => Ok(FilterMode::Location),
            "breed" => Ok(FilterMode::Breed),
            other => Err(ApiError::BadRequest(format!("Unknown filter mode: {}", other))),
        }
    }
}

/// Which of the three list reads a fetch goes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PetQuery {
    All,
    ByLocation(String),
    ByBreed(String),
}

impl PetQuery {
    /// An empty value means no filter has been committed yet.
    pub fn from_filter(mode: Option<FilterMode>, value: Option<&str>) -> PetQuery {
        match (mode, value) {
            (Some(FilterMode::Location), Some(value)) if !value.is_empty() => {
                PetQuery::ByLocation(value.to_string())
            }
            (Some(FilterMode::Breed), Some(value)) if !value.is_empty() => {
                PetQuery::ByBreed(value.to_string())
            }
            _ => PetQuery::All,
        }
    }

    pub async fn execute(&self, repo: &dyn LostPetRepository) -> Result<Vec<LostPetRecord>, ApiError> {
        match self {
            PetQuery::All => repo.fetch_all().await,
            PetQuery::ByLocation(location) => repo.fetch_by_location(location).await,
            PetQuery::ByBreed(breed) => repo.fetch_by_breed(breed).await,
        }
    }
}
