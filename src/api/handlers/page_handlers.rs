use actix_web::{http::header::{self, HeaderValue}, web, HttpResponse, Responder, ResponseError};
use serde::Deserialize;

use crate::{
    api::{state::AppState, views},
    domain::lost_pet::query::FilterMode,
    screens::{
        detail_screen::{ContactAction, DetailScreen},
        list_screen::ListScreen,
    },
    utils::errors::ApiError,
};

const MENU_PANEL: &str = "menu";

/// Filter state carried by the list page links and the filter form.
#[derive(Debug, Default, Deserialize)]
pub struct ListPageParams {
    pub panel: Option<String>,
    pub mode: Option<String>,
    pub value: Option<String>,
}

impl ListPageParams {
    /// Replays the UI events that lead to this state on a fresh screen:
    /// open the menu, pick a mode, type the value and press Enter.
    pub fn restore(&self) -> Result<ListScreen, ApiError> {
        let mut screen = ListScreen::new();

        match self.mode.as_deref() {
            Some(mode) if !mode.is_empty() => {
                let mode: FilterMode = mode.parse()?;
                screen.toggle_filter();
                screen.choose_mode(mode);
                if let Some(value) = &self.value {
                    screen.set_draft(value.as_str());
                    screen.commit();
                }
            }
            _ => {
                if self.panel.as_deref() == Some(MENU_PANEL) {
                    screen.toggle_filter();
                }
            }
        }
        Ok(screen)
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn home_page() -> impl Responder {
    html(views::render_home_page())
}

pub async fn list_page(
    state: web::Data<AppState>,
    params: web::Query<ListPageParams>
) -> impl Responder {
    let mut screen = match params.restore() {
        Ok(screen) => screen,
        Err(e) => return e.error_response(),
    };

    let request = screen.mount();
    screen.run(state.pets.as_ref(), request).await;

    html(views::render_list_page(&screen))
}

pub async fn detail_page(
    state: web::Data<AppState>,
    pet_id: web::Path<String>
) -> impl Responder {
    let mut screen = DetailScreen::new(pet_id.into_inner());
    screen.load(state.pets.as_ref()).await;

    html(views::render_detail_page(&screen))
}

async fn contact(
    state: &AppState,
    pet_id: String,
    action: ContactAction
) -> HttpResponse {
    let mut screen = DetailScreen::new(pet_id);
    screen.load(state.pets.as_ref()).await;

    let location = screen
        .contact_action(action)
        .and_then(|request| match HeaderValue::from_str(&request.uri) {
            Ok(location) => Some(location),
            Err(e) => {
                log::warn!("Unusable contact uri for pet {}: {}", screen.pet_id(), e);
                None
            }
        });

    match location {
        Some(location) => HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish(),
        None => ApiError::NotFound(format!("No phone for pet {}", screen.pet_id())).error_response()
    }
}

pub async fn call_owner(
    state: web::Data<AppState>,
    pet_id: web::Path<String>
) -> impl Responder {
    contact(&state, pet_id.into_inner(), ContactAction::Call).await
}

pub async fn message_owner(
    state: web::Data<AppState>,
    pet_id: web::Path<String>
) -> impl Responder {
    contact(&state, pet_id.into_inner(), ContactAction::Message).await
}
