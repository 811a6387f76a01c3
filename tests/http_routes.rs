mod common;

use actix_web::{http::{header, StatusCode}, test, web, App};
use common::{rex, sample_pets};
use lost_pets_service::{
    api::state::AppState,
    domain::lost_pet::{Contact, LostPetRecord},
    infrastructure::InMemoryLostPetRepository,
    routes::{api_routes, page_routes},
    utils::errors::ApiError,
};
use serde_json::Value;

fn state_with(pets: Vec<LostPetRecord>) -> AppState {
    AppState::new(InMemoryLostPetRepository::new(pets))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(page_routes)
                .configure(api_routes)
        ).await
    };
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_home_links_to_list() {
    let app = app!(state_with(Vec::new()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/home").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("href=\"/lost-pets\""));
}

#[actix_web::test]
async fn test_list_page_renders_all_pets() {
    let app = app!(state_with(sample_pets()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/lost-pets").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    for id in ["1", "2", "3", "4", "42"] {
        assert!(html.contains(&format!("href=\"/lost-pets/{}\"", id)));
    }
    assert!(html.find("Thor").unwrap() < html.find("Mia").unwrap());
    assert!(!html.contains("filter-bar"));
}

#[actix_web::test]
async fn test_list_link_reaches_detail_for_reserved_id() {
    let app = app!(state_with(vec![LostPetRecord {
        id: Some("a?b#c".to_string()),
        name: Some("Pipoca".to_string()),
        ..Default::default()
    }]));

    let req = test::TestRequest::get().uri("/lost-pets").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    let start = html.find("href=\"/lost-pets/a").unwrap() + "href=\"".len();
    let end = start + html[start..].find('"').unwrap();
    let href = &html[start..end];
    assert_eq!(href, "/lost-pets/a%3Fb%23c");

    let req = test::TestRequest::get().uri(href).to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("pet-detail"));
    assert!(html.contains("Pipoca"));
}

#[actix_web::test]
async fn test_list_page_menu_panel() {
    let app = app!(state_with(sample_pets()));

    let req = test::TestRequest::get().uri("/lost-pets?panel=menu").to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(html.contains("filter-menu"));
    assert!(html.contains("/lost-pets?mode=breed"));
}

#[actix_web::test]
async fn test_list_page_with_location_filter() {
    let app = app!(state_with(sample_pets()));

    let req = test::TestRequest::get().uri("/lost-pets?mode=location&value=Lapa").to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(html.contains("href=\"/lost-pets/2\""));
    assert!(!html.contains("href=\"/lost-pets/1\""));
    assert!(html.contains("value=\"Lapa\""));
    assert!(html.contains("Digite o nome do bairro"));
}

#[actix_web::test]
async fn test_list_page_rejects_unknown_mode() {
    let app = app!(state_with(sample_pets()));

    let req = test::TestRequest::get().uri("/lost-pets?mode=color&value=preto").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_detail_page_for_rex() {
    let app = app!(state_with(vec![rex()]));

    let req = test::TestRequest::get().uri("/lost-pets/42").to_request();
    let html = body_text(test::call_service(&app, req).await).await;

    assert!(html.contains("icon-dog"));
    assert!(html.contains("Rex"));
    assert!(html.contains("Recompensa disponível"));
    assert!(html.contains("href=\"tel:5511999990000\""));
    assert!(html.contains("href=\"https://wa.me/5511999990000\" target=\"_blank\""));
    assert!(html.contains("href=\"/home\""));
}

#[actix_web::test]
async fn test_detail_page_for_missing_pet_is_empty() {
    let app = app!(state_with(vec![rex()]));

    let req = test::TestRequest::get().uri("/lost-pets/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("PetFinder"));
    assert!(!html.contains("pet-detail"));
}

#[actix_web::test]
async fn test_detail_page_when_store_fails_is_empty() {
    let repo = InMemoryLostPetRepository::new(vec![rex()]);
    repo.fail_with(Some(ApiError::InternalServerError("offline".to_string())));
    let app = app!(AppState::new(repo));

    let req = test::TestRequest::get().uri("/lost-pets/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!body_text(resp).await.contains("pet-detail"));
}

#[actix_web::test]
async fn test_call_action_redirects_to_tel() {
    let app = app!(state_with(vec![rex()]));

    let req = test::TestRequest::get().uri("/lost-pets/42/call").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "tel:5511999990000");
}

#[actix_web::test]
async fn test_message_action_redirects_to_messaging_app() {
    let app = app!(state_with(vec![rex()]));

    let req = test::TestRequest::get().uri("/lost-pets/42/message").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "https://wa.me/5511999990000");
}

#[actix_web::test]
async fn test_contact_action_without_phone_is_not_found() {
    let app = app!(state_with(vec![LostPetRecord {
        id: Some("9".to_string()),
        ..Default::default()
    }]));

    let req = test::TestRequest::get().uri("/lost-pets/9/call").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_contact_action_with_unusable_phone_is_not_found() {
    let app = app!(state_with(vec![LostPetRecord {
        id: Some("8".to_string()),
        contact: Some(Contact {
            name: Some("Davi".to_string()),
            phone: Some("5511\n9999".to_string()),
        }),
        ..Default::default()
    }]));

    let req = test::TestRequest::get().uri("/lost-pets/8/call").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_api_list_and_filter() {
    let app = app!(state_with(sample_pets()));

    let req = test::TestRequest::get().uri("/api/lost-pets").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 5);
    assert_eq!(all[0]["id"], "1");

    let req = test::TestRequest::get().uri("/api/lost-pets?mode=breed&value=Labrador").to_request();
    let labradors: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<_> = labradors.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, vec!["Thor", "Nina"]);
}

#[actix_web::test]
async fn test_api_get_by_id() {
    let app = app!(state_with(vec![rex()]));

    let req = test::TestRequest::get().uri("/api/lost-pets/42").to_request();
    let pet: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pet["name"], "Rex");
    assert_eq!(pet["contact"]["phone"], "5511999990000");

    let req = test::TestRequest::get().uri("/api/lost-pets/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 404);
}

#[actix_web::test]
async fn test_api_store_failure_is_server_error() {
    let repo = InMemoryLostPetRepository::new(sample_pets());
    repo.fail_with(Some(ApiError::InternalServerError("offline".to_string())));
    let app = app!(AppState::new(repo));

    let req = test::TestRequest::get().uri("/api/lost-pets").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
