use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::lost_pet::query::{FilterMode, PetQuery},
    utils::errors::ApiError,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub mode: Option<String>,
    pub value: Option<String>,
}

impl ListQuery {
    pub fn to_pet_query(&self) -> Result<PetQuery, ApiError> {
        let mode = match self.mode.as_deref() {
            Some(mode) if !mode.is_empty() => Some(mode.parse::<FilterMode>()?),
            _ => None,
        };
        Ok(PetQuery::from_filter(mode, self.value.as_deref()))
    }
}

pub async fn list_lost_pets(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>
) -> impl Responder {
    let pet_query = match query.to_pet_query() {
        Ok(pet_query) => pet_query,
        Err(e) => return e.error_response(),
    };

    match pet_query.execute(state.pets.as_ref()).await {
        Ok(pets) => HttpResponse::Ok().json(pets),
        Err(e) => {
            log::error!("Error listing lost pets for {:?}: {}", pet_query, e);
            e.error_response()
        }
    }
}

pub async fn get_lost_pet(
    state: web::Data<AppState>,
    pet_id: web::Path<String>
) -> impl Responder {
    let pet_id = pet_id.into_inner();

    match state.pets.fetch_by_id(&pet_id).await {
        Ok(Some(pet)) => HttpResponse::Ok().json(pet),
        Ok(None) => ApiError::NotFound(format!("Pet {} not found", pet_id)).error_response(),
        Err(e) => e.error_response()
    }
}
